use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::FeatureFlags;

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Simulated round-trip latency for each record system, in milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    #[serde(default = "default_ncic_delay")]
    pub ncic_delay_ms: u64,
    #[serde(default = "default_leads_delay")]
    pub leads_delay_ms: u64,
    #[serde(default)]
    pub dispatch_delay_ms: u64,
}

fn default_ncic_delay() -> u64 {
    1500
}

fn default_leads_delay() -> u64 {
    1000
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            ncic_delay_ms: default_ncic_delay(),
            leads_delay_ms: default_leads_delay(),
            dispatch_delay_ms: 0,
        }
    }
}

impl SearchConfig {
    pub fn ncic_delay(&self) -> Duration {
        Duration::from_millis(self.ncic_delay_ms)
    }

    pub fn leads_delay(&self) -> Duration {
        Duration::from_millis(self.leads_delay_ms)
    }

    pub fn dispatch_delay(&self) -> Duration {
        Duration::from_millis(self.dispatch_delay_ms)
    }
}

/// Board behaviour switches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BoardConfig {
    /// When set, assigning a unit to an existing call also moves the unit to
    /// `Dispatched`. Off by default: only the call records the assignment.
    #[serde(default)]
    pub mirror_unit_status: bool,
}

/// Header clock refresh cadence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClockConfig {
    #[serde(default = "default_tick")]
    pub tick_ms: u64,
}

fn default_tick() -> u64 {
    1000
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick(),
        }
    }
}

impl ClockConfig {
    /// Tick interval, never shorter than 50ms.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(50))
    }
}

// ---------------------------------------------------------------------------
// Top level
// ---------------------------------------------------------------------------

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub clock: ClockConfig,
}
