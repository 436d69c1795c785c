//! Types for strategy selection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::openurl::SearchCandidate;

/// Search strategy, declared from most to least specific.
///
/// The derived ordering is the probing priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// OCLC number match.
    Identifier,
    /// ISBN match.
    Isbn,
    /// Title, or title and author, match.
    Title,
}

impl StrategyKind {
    /// All strategies in probing order.
    pub const PRIORITY: [StrategyKind; 3] = [Self::Identifier, Self::Isbn, Self::Title];

    /// Label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Isbn => "isbn",
            Self::Title => "title",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encoded search strings keyed by strategy. At most one per kind; kinds
/// without source data have no entry at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    entries: BTreeMap<StrategyKind, String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode and store a candidate, replacing any previous one of the same kind.
    pub fn insert(&mut self, candidate: &SearchCandidate) {
        self.entries.insert(candidate.kind, candidate.encode());
    }

    /// Store an already encoded search string.
    pub fn insert_encoded(&mut self, kind: StrategyKind, query: impl Into<String>) {
        self.entries.insert(kind, query.into());
    }

    pub fn get(&self, kind: StrategyKind) -> Option<&str> {
        self.entries.get(&kind).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (StrategyKind, &str)> {
        self.entries.iter().map(|(kind, query)| (*kind, query.as_str()))
    }
}

/// Outcome of strategy selection.
///
/// An empty query means no strategy was confirmed and the redirect should
/// fall back to the unfiltered results page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionResult {
    /// Winning strategy, if any.
    pub kind: Option<StrategyKind>,
    /// Encoded search string of the winner, or empty.
    pub query: String,
}

impl SelectionResult {
    pub fn selected(kind: StrategyKind, query: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            query: query.into(),
        }
    }

    /// No strategy confirmed.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.query
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Label used in logs and metrics.
    pub fn strategy_label(&self) -> &'static str {
        self.kind.map(|k| k.as_str()).unwrap_or("none")
    }
}
