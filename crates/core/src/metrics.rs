//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Search API probes (by strategy and outcome)
//! - Redirects (by selected strategy)

use once_cell::sync::Lazy;
use prometheus::{IntCounterVec, Opts};

/// Probes issued, by strategy and outcome.
pub static PROBES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("wcd2reshare_probes_total", "Total search API probes"),
        &["strategy", "outcome"], // outcome: "hit", "miss", "error"
    )
    .unwrap()
});

/// Redirects produced, by selected strategy ("none" when nothing matched).
pub static REDIRECTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("wcd2reshare_redirects_total", "Total redirects issued"),
        &["strategy"],
    )
    .unwrap()
});

/// Register all core metrics with the given registry.
pub fn register_core_metrics(registry: &prometheus::Registry) {
    let _ = registry.register(Box::new(PROBES_TOTAL.clone()));
    let _ = registry.register(Box::new(REDIRECTS_TOTAL.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_core_metrics() {
        let registry = prometheus::Registry::new();
        register_core_metrics(&registry);

        PROBES_TOTAL.with_label_values(&["isbn", "hit"]).inc();
        REDIRECTS_TOTAL.with_label_values(&["isbn"]).inc();

        let names: Vec<_> = registry
            .gather()
            .iter()
            .map(|mf| mf.get_name().to_string())
            .collect();
        assert!(names.contains(&"wcd2reshare_probes_total".to_string()));
        assert!(names.contains(&"wcd2reshare_redirects_total".to_string()));
    }
}
