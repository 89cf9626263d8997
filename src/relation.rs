//! Classification of the geometric relationship between two intervals.
//!
//! Two views are provided: the single most specific [`RelType`], and the
//! [`RelationFlags`] set describing each of the four endpoint comparisons and
//! every composite relation they imply.
//!
//! The endpoint comparisons are named after the endpoints compared, the first
//! letter referring to `self` and the second to `other`:
//!
//! * `SS`: start of `self` vs start of `other`
//! * `SE`: start of `self` vs end of `other`
//! * `ES`: end of `self` vs start of `other`
//! * `EE`: end of `self` vs end of `other`

use std::cmp::Ordering;

use crate::interval::Interval;

/// Packed 32-bit layout of [`RelationFlags`].
pub mod bits {
    pub const SAME: u32 = 0x0001;
    pub const BEFORE: u32 = 0x0002;
    pub const AFTER: u32 = 0x0004;
    pub const UNKNOWN: u32 = 0x0007;

    pub const SS_SHIFT: u32 = 0;
    pub const SE_SHIFT: u32 = 4;
    pub const ES_SHIFT: u32 = 8;
    pub const EE_SHIFT: u32 = 12;

    pub const SS_SAME: u32 = SAME << SS_SHIFT;
    pub const SS_BEFORE: u32 = BEFORE << SS_SHIFT;
    pub const SS_AFTER: u32 = AFTER << SS_SHIFT;
    pub const SE_SAME: u32 = SAME << SE_SHIFT;
    pub const SE_BEFORE: u32 = BEFORE << SE_SHIFT;
    pub const SE_AFTER: u32 = AFTER << SE_SHIFT;
    pub const ES_SAME: u32 = SAME << ES_SHIFT;
    pub const ES_BEFORE: u32 = BEFORE << ES_SHIFT;
    pub const ES_AFTER: u32 = AFTER << ES_SHIFT;
    pub const EE_SAME: u32 = SAME << EE_SHIFT;
    pub const EE_BEFORE: u32 = BEFORE << EE_SHIFT;
    pub const EE_AFTER: u32 = AFTER << EE_SHIFT;

    pub const INTERVAL_SAME: u32 = 0x0001_0000;
    pub const INTERVAL_BEFORE: u32 = 0x0002_0000;
    pub const INTERVAL_AFTER: u32 = 0x0004_0000;
    pub const INTERVAL_OVERLAP: u32 = 0x0010_0000;
    pub const INTERVAL_INSIDE: u32 = 0x0020_0000;
    pub const INTERVAL_CONTAIN: u32 = 0x0040_0000;
    /// Mask of every composite interval relation.
    pub const INTERVAL_UNKNOWN: u32 = 0x0077_0000;
    pub const INTERVAL_FUZZY: u32 = 0x8000_0000;
}

/// The most specific relationship of one interval to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelType {
    /// This interval ends before the other starts.
    Before,
    /// This interval starts after the other ends.
    After,
    /// Both intervals have the same endpoints.
    Equal,
    /// This interval begins where the other ends.
    BeginMeetEnd,
    /// This interval ends where the other begins.
    EndMeetBegin,
    /// This interval contains the other.
    Contain,
    /// This interval is inside the other.
    Inside,
    /// The intervals partially overlap.
    Overlap,
    /// The endpoints could not all be compared (fuzzy endpoints).
    Unknown,
    /// There is no other interval to relate to.
    None,
}

/// The outcome of comparing one endpoint against another.
///
/// [`EndpointOrder::Unknown`] is produced for endpoints that cannot be
/// ordered, and is treated as possibly being any of the other three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointOrder {
    Before,
    Same,
    After,
    Unknown,
}

impl EndpointOrder {
    pub fn from_partial(v: Option<Ordering>) -> Self {
        match v {
            Some(v) => Self::from(v),
            None => Self::Unknown,
        }
    }

    pub const fn bits(self) -> u32 {
        match self {
            Self::Same => bits::SAME,
            Self::Before => bits::BEFORE,
            Self::After => bits::AFTER,
            Self::Unknown => bits::UNKNOWN,
        }
    }

    /// Decode a 4-bit sub-field. Returns [`None`] for an empty or partially
    /// set field.
    pub const fn from_bits(v: u32) -> Option<Self> {
        match v & 0xf {
            bits::SAME => Some(Self::Same),
            bits::BEFORE => Some(Self::Before),
            bits::AFTER => Some(Self::After),
            bits::UNKNOWN => Some(Self::Unknown),
            _ => None,
        }
    }

    /// True if the comparison may have yielded any of the `mask` outcomes.
    const fn possibly(self, mask: u32) -> bool {
        self.bits() & mask != 0
    }
}

impl From<Ordering> for EndpointOrder {
    fn from(v: Ordering) -> Self {
        match v {
            Ordering::Less => Self::Before,
            Ordering::Equal => Self::Same,
            Ordering::Greater => Self::After,
        }
    }
}

/// The four endpoint comparisons between two intervals, and the composite
/// relations derived from them.
///
/// The composite relations are not mutually exclusive: two equal intervals
/// are reported as the same, overlapping, inside and containing each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelationFlags {
    ss: EndpointOrder,
    se: EndpointOrder,
    es: EndpointOrder,
    ee: EndpointOrder,
    fuzzy: bool,
}

impl RelationFlags {
    pub fn new(ss: EndpointOrder, se: EndpointOrder, es: EndpointOrder, ee: EndpointOrder) -> Self {
        let fuzzy = [ss, se, es, ee].contains(&EndpointOrder::Unknown);
        Self {
            ss,
            se,
            es,
            ee,
            fuzzy,
        }
    }

    /// Decode the packed representation produced by
    /// [`RelationFlags::to_bits()`].
    ///
    /// Only the four endpoint sub-fields are read, the composite bits are
    /// derived from them. Returns [`None`] when no relation is encoded (the
    /// packed value is 0) or a sub-field is malformed.
    pub fn from_bits(v: u32) -> Option<Self> {
        let field = |shift| EndpointOrder::from_bits(v >> shift);
        Some(Self::new(
            field(bits::SS_SHIFT)?,
            field(bits::SE_SHIFT)?,
            field(bits::ES_SHIFT)?,
            field(bits::EE_SHIFT)?,
        ))
    }

    pub fn ss(&self) -> EndpointOrder {
        self.ss
    }

    pub fn se(&self) -> EndpointOrder {
        self.se
    }

    pub fn es(&self) -> EndpointOrder {
        self.es
    }

    pub fn ee(&self) -> EndpointOrder {
        self.ee
    }

    /// True if at least one endpoint comparison was indeterminate.
    pub fn is_fuzzy(&self) -> bool {
        self.fuzzy
    }

    /// Both intervals have the same start and end points.
    pub fn is_same(&self) -> bool {
        self.ss.possibly(bits::SAME) && self.ee.possibly(bits::SAME)
    }

    /// The first interval ends before the second starts.
    pub fn is_before(&self) -> bool {
        self.es.possibly(bits::BEFORE)
    }

    /// The first interval starts after the second ends.
    pub fn is_after(&self) -> bool {
        self.se.possibly(bits::AFTER)
    }

    /// The intervals share at least one endpoint position.
    pub fn is_overlap(&self) -> bool {
        (self.ss.possibly(bits::SAME | bits::AFTER) && self.se.possibly(bits::SAME | bits::BEFORE))
            || (self.ss.possibly(bits::SAME | bits::BEFORE)
                && self.es.possibly(bits::SAME | bits::AFTER))
    }

    /// The first interval lies inside the second.
    pub fn is_inside(&self) -> bool {
        self.ss.possibly(bits::SAME | bits::AFTER) && self.ee.possibly(bits::SAME | bits::BEFORE)
    }

    /// The first interval contains the second.
    pub fn is_contain(&self) -> bool {
        self.ss.possibly(bits::SAME | bits::BEFORE) && self.ee.possibly(bits::SAME | bits::AFTER)
    }

    /// The composite relation bits, masked by [`bits::INTERVAL_UNKNOWN`].
    pub fn interval_bits(&self) -> u32 {
        [
            (self.is_same(), bits::INTERVAL_SAME),
            (self.is_before(), bits::INTERVAL_BEFORE),
            (self.is_after(), bits::INTERVAL_AFTER),
            (self.is_overlap(), bits::INTERVAL_OVERLAP),
            (self.is_inside(), bits::INTERVAL_INSIDE),
            (self.is_contain(), bits::INTERVAL_CONTAIN),
        ]
        .into_iter()
        .filter(|(set, _)| *set)
        .fold(0, |acc, (_, bit)| acc | bit)
    }

    /// Pack the endpoint sub-fields, composite relations and fuzzy marker
    /// into a single 32-bit value.
    pub fn to_bits(&self) -> u32 {
        let fuzzy = if self.fuzzy { bits::INTERVAL_FUZZY } else { 0 };

        (self.ss.bits() << bits::SS_SHIFT)
            | (self.se.bits() << bits::SE_SHIFT)
            | (self.es.bits() << bits::ES_SHIFT)
            | (self.ee.bits() << bits::EE_SHIFT)
            | self.interval_bits()
            | fuzzy
    }

    /// Returns [`Ordering::Less`] if the first interval is unambiguously
    /// before the second, [`Ordering::Greater`] if it is unambiguously after,
    /// and [`Ordering::Equal`] otherwise (overlapping, or incomparable).
    pub fn interval_order(&self) -> Ordering {
        match self.interval_bits() {
            bits::INTERVAL_BEFORE => Ordering::Less,
            bits::INTERVAL_AFTER => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }
}

impl<E> Interval<E>
where
    E: Ord,
{
    /// Classify how this interval relates to `other`.
    ///
    /// Endpoint inclusivity is not considered: `[1,10]` and `[10,20)` are
    /// reported as [`RelType::EndMeetBegin`] regardless of their bounds.
    pub fn relation(&self, other: &Self) -> RelType {
        relation_of(
            self.begin().cmp(other.begin()),
            self.end().cmp(other.end()),
            self.begin().cmp(other.end()),
            self.end().cmp(other.begin()),
        )
    }

    /// As [`Interval::relation()`], returning [`RelType::None`] when there is
    /// no `other` interval.
    pub fn relation_opt(&self, other: Option<&Self>) -> RelType {
        other.map_or(RelType::None, |v| self.relation(v))
    }

    /// Compute the full set of relation flags between this interval and
    /// `other`.
    pub fn relation_flags(&self, other: &Self) -> RelationFlags {
        self.relation_flags_by(other, |a, b| Some(a.cmp(b)))
    }

    /// As [`Interval::relation_flags()`], returning [`None`] when there is no
    /// `other` interval (a packed value of 0).
    pub fn relation_flags_opt(&self, other: Option<&Self>) -> Option<RelationFlags> {
        other.map(|v| self.relation_flags(v))
    }

    /// Returns the order of this interval relative to `other`, using only the
    /// composite before / after relations.
    ///
    /// Overlapping intervals compare as [`Ordering::Equal`].
    pub fn compare_interval_order(&self, other: &Self) -> Ordering {
        self.relation_flags(other).interval_order()
    }

    /// Returns true if this interval is either entirely before or entirely
    /// after `other`.
    pub fn is_interval_comparable(&self, other: &Self) -> bool {
        let flags = self.relation_flags(other);
        let composite = flags.interval_bits();
        if composite.count_ones() > 1 {
            return false;
        }
        flags.is_before() || flags.is_after()
    }
}

impl<E> Interval<E> {
    /// Compute the relation flags using a partial endpoint comparator.
    ///
    /// Endpoint pairs for which `cmp` returns [`None`] are recorded as
    /// [`EndpointOrder::Unknown`] and mark the result as fuzzy.
    pub fn relation_flags_by<F>(&self, other: &Self, cmp: F) -> RelationFlags
    where
        F: Fn(&E, &E) -> Option<Ordering>,
    {
        RelationFlags::new(
            EndpointOrder::from_partial(cmp(self.begin(), other.begin())),
            EndpointOrder::from_partial(cmp(self.begin(), other.end())),
            EndpointOrder::from_partial(cmp(self.end(), other.begin())),
            EndpointOrder::from_partial(cmp(self.end(), other.end())),
        )
    }

    /// Classify the relation using a partial endpoint comparator, yielding
    /// [`RelType::Unknown`] if any endpoint pair is incomparable.
    pub fn relation_by<F>(&self, other: &Self, cmp: F) -> RelType
    where
        F: Fn(&E, &E) -> Option<Ordering>,
    {
        let ss = cmp(self.begin(), other.begin());
        let ee = cmp(self.end(), other.end());
        let se = cmp(self.begin(), other.end());
        let es = cmp(self.end(), other.begin());

        match (ss, ee, se, es) {
            (Some(ss), Some(ee), Some(se), Some(es)) => relation_of(ss, ee, se, es),
            _ => RelType::Unknown,
        }
    }
}

fn relation_of(ss: Ordering, ee: Ordering, se: Ordering, es: Ordering) -> RelType {
    use Ordering::*;

    match (ss, ee) {
        (Equal, Equal) => RelType::Equal,
        // Same start, this finishes first.
        (Equal, Less) => RelType::Inside,
        (Equal, Greater) => RelType::Contain,
        // Same finish, this starts first.
        (Less, Equal) => RelType::Contain,
        (Greater, Equal) => RelType::Inside,
        (Greater, Less) => RelType::Inside,
        (Less, Greater) => RelType::Contain,
        _ => match (se, es) {
            (Greater, _) => RelType::After,
            (_, Less) => RelType::Before,
            (Equal, _) => RelType::BeginMeetEnd,
            (_, Equal) => RelType::EndMeetBegin,
            _ => RelType::Overlap,
        },
    }
}
