//! Extraction of citation fields from raw OpenURL parameters.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::collections::HashMap;

/// Raw query-string parameters of one request.
pub type RawParameters = HashMap<String, String>;

const KEY_ID: &str = "rft_id";
const KEY_ISBN: &str = "rft.isbn";
const KEY_AULAST: &str = "rft.aulast";

/// Title keys in priority order: primary, book, collection, journal.
const TITLE_KEYS: [&str; 4] = ["rft.title", "rft.btitle", "rft.ctitle", "rft.jtitle"];

/// URL-escaped `info:oclcnum/` followed by an 8 or 9 digit OCLC number.
/// Anything after the number is ignored as long as it is not another digit.
static OCLC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^info%3Aoclcnum%2F([0-9]{8,9})(?:[^0-9]|$)").unwrap());

/// Normalized citation fields of interest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenUrlFields {
    /// OCLC number taken from `rft_id`.
    pub identifier_code: Option<String>,
    /// ISBN, verbatim.
    pub isbn: Option<String>,
    /// First non-empty title variant.
    pub title: Option<String>,
    /// Author last name. Only set when a title was found.
    pub author: Option<String>,
}

impl OpenUrlFields {
    /// Extract fields from raw parameters. Unknown keys are ignored and empty
    /// values count as missing.
    pub fn from_params(params: &RawParameters) -> Self {
        let title = TITLE_KEYS.iter().find_map(|key| non_empty(params, key));
        let author = title.as_ref().and_then(|_| non_empty(params, KEY_AULAST));

        Self {
            identifier_code: non_empty(params, KEY_ID).and_then(|id| extract_oclc_number(&id)),
            isbn: non_empty(params, KEY_ISBN),
            title,
            author,
        }
    }

    /// True when none of the fields were found.
    pub fn is_empty(&self) -> bool {
        self.identifier_code.is_none() && self.isbn.is_none() && self.title.is_none()
    }
}

fn non_empty(params: &RawParameters, key: &str) -> Option<String> {
    params
        .get(key)
        .filter(|value| !value.is_empty())
        .cloned()
}

/// Pull the OCLC number out of an `rft_id` value.
fn extract_oclc_number(rft_id: &str) -> Option<String> {
    OCLC_PATTERN
        .captures(rft_id)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
