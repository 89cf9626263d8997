use std::fmt::{Display, Write};

use proptest::prelude::*;

use crate::{
    arena::NodeIndex,
    interval::{Bounds, Interval},
    node::Nodes,
    tree::IntervalTree,
};

const RANGE_MAX: usize = 20;

pub(crate) fn arbitrary_bounds() -> impl Strategy<Value = Bounds> {
    (0_u8..4).prop_map(Bounds::from_bits)
}

/// Generate arbitrary intervals with endpoints from [0..[`RANGE_MAX`]) and
/// arbitrary bounds. Endpoints are swapped into order if needed.
pub(crate) fn arbitrary_interval() -> impl Strategy<Value = Interval<usize>> {
    (0..RANGE_MAX, 0..RANGE_MAX, arbitrary_bounds())
        .prop_map(|(a, b, bounds)| Interval::valid_with_bounds(a, b, bounds))
}

/// Generate arbitrary intervals with endpoints anywhere in the i32 domain.
pub(crate) fn arbitrary_wide_interval() -> impl Strategy<Value = Interval<i32>> {
    (any::<i32>(), any::<i32>(), arbitrary_bounds())
        .prop_map(|(a, b, bounds)| Interval::valid_with_bounds(a, b, bounds))
}

/// Render `t` in graphviz DOT format.
pub(crate) fn print_dot<E, T>(t: &IntervalTree<E, T>) -> String
where
    T: Display,
    E: Display,
{
    let mut buf = String::new();

    writeln!(buf, "digraph {{").unwrap();
    writeln!(buf, r#"bgcolor = "transparent";"#).unwrap();
    writeln!(
        buf,
        r#"node [shape = record; style = filled; fontcolor = orange4; fillcolor = white;];"#
    )
    .unwrap();
    if let Some(root) = t.root {
        recurse(&t.nodes, root, &mut buf);
    }
    writeln!(buf, "}}").unwrap();

    buf
}

fn recurse<E, T, W>(arena: &Nodes<E, T>, n: NodeIndex, buf: &mut W)
where
    W: std::fmt::Write,
    T: Display,
    E: Display,
{
    let node = &arena[n];

    writeln!(
        buf,
        r#""{}" [label="{} | {{ max={} | h={} }}"];"#,
        node.value(),
        node.value(),
        node.subtree_max(),
        node.height(),
    )
    .unwrap();

    for v in [node.left(), node.right()] {
        match v {
            Some(v) => {
                writeln!(
                    buf,
                    "\"{}\" -> \"{}\" [color = \"orange1\";];",
                    node.value(),
                    arena[v].value()
                )
                .unwrap();
                recurse(arena, v, buf);
            }
            None => {
                writeln!(buf, "\"null_{}\" [shape=point,style=invis];", node.value()).unwrap();
                writeln!(
                    buf,
                    "\"{}\" -> \"null_{}\" [style=invis];",
                    node.value(),
                    node.value()
                )
                .unwrap();
            }
        };
    }
}
