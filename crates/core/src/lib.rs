pub mod config;
pub mod metrics;
pub mod openurl;
pub mod probe;
pub mod redirect;
pub mod strategy;
pub mod testing;

pub use config::{
    load_config, load_config_from, load_config_from_str, validate_config, Config, ConfigError,
    ProbeConfig, SanitizedConfig, ServerConfig,
};
pub use openurl::{build_candidates, OpenUrlFields, RawParameters, SearchCandidate};
pub use probe::{ProbeError, SearchProbe, VufindProbe, SEARCH_API_URL};
pub use redirect::{
    InvocationEvent, InvocationResponse, RedirectHandler, RedirectResponse, REDIRECT_BASE_URL,
};
pub use strategy::{select_strategy, CandidateSet, SelectionResult, StrategyKind};
