mod owned_iter;
mod pruners;
mod pruning_iter;
mod ref_iter;

pub use owned_iter::*;
pub use pruners::*;
pub use pruning_iter::*;
pub use ref_iter::*;
