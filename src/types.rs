use serde::Deserialize;

// Core config types
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub powercfg: PowerCfgConfig,
}

/// How the `powercfg` utility is located, bounded and parsed.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PowerCfgConfig {
    /// Program name or absolute path
    #[serde(default = "default_path")]
    pub path: String,
    /// Upper bound for a single invocation, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Substring that marks a plan row in `powercfg /list` output.
    /// Localized Windows builds print a translated label.
    #[serde(default = "default_plan_marker")]
    pub plan_marker: String,
}

fn default_path() -> String {
    "powercfg".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_plan_marker() -> String {
    "Power Scheme GUID".to_string()
}

impl Default for PowerCfgConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            timeout_secs: default_timeout_secs(),
            plan_marker: default_plan_marker(),
        }
    }
}

/// The three stock Windows plans the panel offers a button for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanPreset {
    HighPerformance,
    Balanced,
    PowerSaver,
}

impl PlanPreset {
    pub const ALL: [PlanPreset; 3] = [
        PlanPreset::HighPerformance,
        PlanPreset::Balanced,
        PlanPreset::PowerSaver,
    ];

    /// Label matched against discovered plan names
    pub fn label(self) -> &'static str {
        match self {
            PlanPreset::HighPerformance => "High performance",
            PlanPreset::Balanced => "Balanced",
            PlanPreset::PowerSaver => "Power saver",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            PlanPreset::HighPerformance => "High Performance",
            PlanPreset::Balanced => "Balanced (Normal)",
            PlanPreset::PowerSaver => "Power Saver (Battery)",
        }
    }
}
