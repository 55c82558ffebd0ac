use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` at the workspace root, compiled in.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse a config document. Errors fall back to defaults with a warning so a
/// bad edit never keeps the dashboards from rendering.
pub fn parse_config(contents: &str) -> AppConfig {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse config.toml, using defaults");
            AppConfig::default()
        }
    }
}

/// Parse the embedded config and store it in the global `OnceLock`. Safe to
/// call multiple times; only the first call has effect.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = parse_config(EMBEDDED_CONFIG);
        tracing::info!(?config, "configuration loaded");
        config
    })
}
