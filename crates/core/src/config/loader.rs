use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::{Path, PathBuf};

use super::{types::Config, ConfigError};

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "WCD2RESHARE_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "wcd2reshare.toml";

const WORKSPACE_ENV: &str = "WORKSPACE";
const SENTRY_DSN_ENV: &str = "SENTRY_DSN";

/// Load configuration from defaults, the optional config file and the environment.
///
/// `WORKSPACE` and `SENTRY_DSN` are read unprefixed; everything else can be
/// overridden with `WCD2RESHARE_` variables, nested with `__`
/// (e.g. `WCD2RESHARE_SERVER__PORT`).
pub fn load_config() -> Result<Config, ConfigError> {
    let path = std::env::var(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
    load_config_from(&path)
}

/// Same as [`load_config`] with an explicit file path. A missing file is not an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    load_config_with(
        path,
        std::env::var(WORKSPACE_ENV).ok(),
        std::env::var(SENTRY_DSN_ENV).ok(),
    )
}

/// `WORKSPACE` and `SENTRY_DSN` are merged as plain strings so values such
/// as `2024` or `true` are not parsed into numbers or booleans.
fn load_config_with(
    path: &Path,
    workspace: Option<String>,
    sentry_dsn: Option<String>,
) -> Result<Config, ConfigError> {
    let mut figment =
        Figment::from(Serialized::defaults(Config::default())).merge(Toml::file(path));
    if let Some(workspace) = workspace {
        figment = figment.merge(Serialized::default("workspace", workspace));
    }
    if let Some(dsn) = sentry_dsn {
        figment = figment.merge(Serialized::default("sentry_dsn", dsn));
    }

    figment
        .merge(Env::prefixed("WCD2RESHARE_").split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
workspace = "dev"

[server]
port = 9000
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.workspace.as_deref(), Some("dev"));
    }

    #[test]
    fn test_load_config_from_str_invalid() {
        let toml = r#"
[server]
port = "not a port"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let config = load_config_from(Path::new("/nonexistent/wcd2reshare.toml")).unwrap();
        assert_eq!(config.probe.timeout_secs, 10);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[server]
host = "127.0.0.1"
port = 3000

[probe]
timeout_secs = 4
"#
        )
        .unwrap();

        let config = load_config_from(temp_file.path()).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host.to_string(), "127.0.0.1");
        assert_eq!(config.probe.timeout_secs, 4);
    }

    #[test]
    fn test_numeric_and_boolean_workspace_stay_strings() {
        let missing = Path::new("/nonexistent/wcd2reshare.toml");

        let config = load_config_with(missing, Some("2024".to_string()), None).unwrap();
        assert_eq!(config.workspace.as_deref(), Some("2024"));

        let config = load_config_with(missing, Some("true".to_string()), None).unwrap();
        assert_eq!(config.workspace.as_deref(), Some("true"));
    }

    #[test]
    fn test_sentry_dsn_from_environment() {
        let config = load_config_with(
            Path::new("/nonexistent/wcd2reshare.toml"),
            Some("dev".to_string()),
            Some("https://key@sentry.example.com/42".to_string()),
        )
        .unwrap();
        assert_eq!(config.workspace.as_deref(), Some("dev"));
        assert_eq!(
            config.sentry_dsn.as_deref(),
            Some("https://key@sentry.example.com/42")
        );
    }

    #[test]
    fn test_environment_workspace_overrides_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, r#"workspace = "from-file""#).unwrap();

        let config = load_config_with(temp_file.path(), None, None).unwrap();
        assert_eq!(config.workspace.as_deref(), Some("from-file"));

        let config = load_config_with(temp_file.path(), Some("12".to_string()), None).unwrap();
        assert_eq!(config.workspace.as_deref(), Some("12"));
    }
}
