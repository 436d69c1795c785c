//! Testing utilities and mock implementations.
//!
//! This module provides a scriptable [`MockSearchProbe`] so strategy
//! selection and the redirect handler can be exercised without the real
//! search API.
//!
//! # Example
//!
//! ```rust,ignore
//! use reshare_core::testing::MockSearchProbe;
//!
//! // identifier misses, isbn hits
//! let probe = MockSearchProbe::with_responses(vec![Ok(false), Ok(true)]);
//! let selected = select_strategy(&candidates, &probe).await;
//!
//! assert_eq!(probe.call_count().await, 2);
//! ```

mod mock_probe;

pub use mock_probe::{MockSearchProbe, RecordedProbe};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::openurl::RawParameters;

    /// ISBN used across tests.
    pub const ISBN: &str = "978-3-16-148410-0";

    /// Build raw parameters from key/value pairs.
    pub fn params(pairs: &[(&str, &str)]) -> RawParameters {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// `rft_id` value carrying the given OCLC number.
    pub fn oclc_rft_id(number: &str) -> String {
        format!("info%3Aoclcnum%2F{}", number)
    }
}
