//! VuFind search string construction.

use crate::strategy::{CandidateSet, StrategyKind};

use super::params::OpenUrlFields;

/// One search formulation: ordered VuFind parameters for a strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCandidate {
    pub kind: StrategyKind,
    pub pairs: Vec<(&'static str, String)>,
}

impl SearchCandidate {
    /// Search on the OCLC number index.
    pub fn identifier(code: &str) -> Self {
        Self {
            kind: StrategyKind::Identifier,
            pairs: vec![("type", "oclc_num".to_string()), ("lookfor", code.to_string())],
        }
    }

    /// Search on the ISN (ISBN/ISSN) index.
    pub fn isbn(isbn: &str) -> Self {
        Self {
            kind: StrategyKind::Isbn,
            pairs: vec![("type", "ISN".to_string()), ("lookfor", isbn.to_string())],
        }
    }

    /// Title search, combined with an author search when `author` is set.
    pub fn title(title: &str, author: Option<&str>) -> Self {
        Self {
            kind: StrategyKind::Title,
            pairs: build_title_query(title, author),
        }
    }

    /// Form-encoded query string, pairs kept in order.
    pub fn encode(&self) -> String {
        encode_pairs(&self.pairs)
    }
}

/// Build VuFind title search parameters.
///
/// Without an author this is a plain title search. With one, VuFind's
/// advanced search syntax joins a title and an author clause with AND.
pub fn build_title_query(title: &str, author: Option<&str>) -> Vec<(&'static str, String)> {
    match author.filter(|a| !a.is_empty()) {
        None => vec![("type", "title".to_string()), ("lookfor", title.to_string())],
        Some(author) => vec![
            ("join", "AND".to_string()),
            ("type0[]", "title".to_string()),
            ("lookfor0[]", title.to_string()),
            ("type0[]", "author".to_string()),
            ("lookfor0[]", author.to_string()),
        ],
    }
}

/// Build one encoded candidate per strategy whose source field is present.
pub fn build_candidates(fields: &OpenUrlFields) -> CandidateSet {
    let mut candidates = CandidateSet::new();

    if let Some(code) = &fields.identifier_code {
        candidates.insert(&SearchCandidate::identifier(code));
    }
    if let Some(isbn) = &fields.isbn {
        candidates.insert(&SearchCandidate::isbn(isbn));
    }
    if let Some(title) = &fields.title {
        candidates.insert(&SearchCandidate::title(title, fields.author.as_deref()));
    }

    candidates
}

/// Encode pairs as `application/x-www-form-urlencoded`.
///
/// Space becomes `+`; anything outside `A-Za-z0-9-._~` is percent-escaped.
pub fn encode_pairs<V: AsRef<str>>(pairs: &[(&str, V)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", form_encode(key), form_encode(value.as_ref())))
        .collect::<Vec<_>>()
        .join("&")
}

fn form_encode(s: &str) -> String {
    // urlencoding leaves a literal '+' as %2B, so the swap is unambiguous
    urlencoding::encode(s).replace("%20", "+")
}
