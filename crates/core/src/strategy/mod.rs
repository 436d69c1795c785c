//! Search strategy selection.
//!
//! Candidates are probed one at a time, most specific strategy first, and
//! the first one the search API reports results for wins.

mod selector;
mod types;

pub use selector::select_strategy;
pub use types::*;
