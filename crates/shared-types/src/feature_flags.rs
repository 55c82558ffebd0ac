use serde::{Deserialize, Serialize};

/// Feature flags controlling which record systems are reachable from the
/// dashboards.
///
/// Loaded from the `[features]` table of `config.toml`. Both systems default
/// to enabled so a missing table keeps the full database tab.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureFlags {
    #[serde(default = "enabled")]
    pub ncic: bool,
    #[serde(default = "enabled")]
    pub leads: bool,
}

fn enabled() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            ncic: true,
            leads: true,
        }
    }
}

impl FeatureFlags {
    /// True when at least one record system is available to LEO operators.
    pub fn any_records(&self) -> bool {
        self.ncic || self.leads
    }
}
