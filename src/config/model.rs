//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Thousands separators in the result row (`1,234,567`).
    #[serde(default = "default_true")]
    pub grouped_numbers: bool,
    /// Show `×` and `÷` instead of `x` and `/`.
    #[serde(default)]
    pub unicode_operators: bool,
    /// Show the history panel on startup.
    #[serde(default = "default_true")]
    pub show_history: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            grouped_numbers: true,
            unicode_operators: false,
            show_history: true,
        }
    }
}

/// When derived state (result, validity) is refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecomputePolicy {
    /// Recompute on every operand or operator change.
    Eager,
    /// Recompute only when Calculate is triggered.
    OnDemand,
}

/// Calculator behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    #[serde(default = "default_recompute")]
    pub recompute: RecomputePolicy,
    /// The randomizer draws from `random_min..random_max` (half-open).
    #[serde(default = "default_random_min")]
    pub random_min: i32,
    #[serde(default = "default_random_max")]
    pub random_max: i32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            recompute: default_recompute(),
            random_min: default_random_min(),
            random_max: default_random_max(),
        }
    }
}

impl BehaviorConfig {
    /// Randomizer bounds, falling back to the defaults when the configured
    /// range is empty or reversed.
    pub fn random_span(&self) -> (i32, i32) {
        if self.random_min < self.random_max {
            (self.random_min, self.random_max)
        } else {
            (default_random_min(), default_random_max())
        }
    }
}

/// Diagnostic logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Default `tracing` filter; `RUST_LOG` overrides it when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            filter: default_log_filter(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_recompute() -> RecomputePolicy {
    RecomputePolicy::Eager
}
fn default_random_min() -> i32 {
    -1000
}
fn default_random_max() -> i32 {
    1000
}
fn default_log_dir() -> String {
    "~/.local/share/tallypad/logs".to_string()
}
fn default_log_filter() -> String {
    "tallypad=info".to_string()
}
