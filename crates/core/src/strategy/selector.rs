//! Sequential, short-circuiting strategy selection.

use tracing::{debug, info, warn};

use crate::metrics::PROBES_TOTAL;
use crate::probe::SearchProbe;

use super::{CandidateSet, SelectionResult, StrategyKind};

/// Pick the most specific candidate that the search API has results for.
///
/// Walks the strategies in priority order. Kinds with no candidate are
/// skipped without a probe, the first hit returns immediately, and a probe
/// error counts as a miss. Returns an empty result when nothing hits.
pub async fn select_strategy(candidates: &CandidateSet, probe: &dyn SearchProbe) -> SelectionResult {
    for kind in StrategyKind::PRIORITY {
        let Some(query) = candidates.get(kind) else {
            continue;
        };

        match probe.has_results(query).await {
            Ok(true) => {
                PROBES_TOTAL.with_label_values(&[kind.as_str(), "hit"]).inc();
                info!(strategy = %kind, query = query, "Search strategy selected");
                return SelectionResult::selected(kind, query);
            }
            Ok(false) => {
                PROBES_TOTAL.with_label_values(&[kind.as_str(), "miss"]).inc();
                debug!(strategy = %kind, "No results, trying next strategy");
            }
            Err(e) => {
                PROBES_TOTAL.with_label_values(&[kind.as_str(), "error"]).inc();
                warn!(
                    strategy = %kind,
                    backend = probe.name(),
                    error = %e,
                    "Probe failed, treating as no results"
                );
            }
        }
    }

    info!(candidates = candidates.len(), "No search strategy returned results");
    SelectionResult::none()
}
