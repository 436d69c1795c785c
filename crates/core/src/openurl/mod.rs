//! OpenURL parameter handling.
//!
//! Turns the loosely-typed query-string mapping of an OpenURL request into
//! normalized citation fields, and those fields into encoded VuFind search
//! strings, one per search strategy.

mod params;
mod query;

pub use params::{OpenUrlFields, RawParameters};
pub use query::{build_candidates, build_title_query, encode_pairs, SearchCandidate};
