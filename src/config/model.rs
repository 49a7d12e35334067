//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::engine::DEFAULT_EXPONENT_THRESHOLD;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// Number of evaluations kept in the tape panel.
    #[serde(default = "default_max_tape")]
    pub max_tape: usize,
    #[serde(default = "default_true")]
    pub show_tape: bool,
    /// How many UI ticks a pressed button stays highlighted.
    #[serde(default = "default_flash_ticks")]
    pub flash_ticks: u8,
}

/// Number display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Results whose plain text is longer than this switch to exponential form.
    #[serde(default = "default_exponent_threshold")]
    pub exponent_threshold: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Ring the terminal bell when a result is infinite or NaN.
    #[serde(default)]
    pub bell_on_error: bool,
}

/// Tape logging and diagnostic trace settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Append every evaluation to a daily tape file.
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_trace_file")]
    pub trace_file: String,
    /// Filter directive for the trace file; `RUST_LOG` takes precedence.
    #[serde(default = "default_trace_level")]
    pub trace_level: String,
}

impl UiConfig {
    /// The configured timestamp format, or the default when it contains a
    /// specifier chrono cannot render.
    pub fn checked_timestamp_format(&self) -> String {
        let invalid = StrftimeItems::new(&self.timestamp_format).any(|item| item == Item::Error);
        if invalid {
            tracing::warn!(
                format = %self.timestamp_format,
                "invalid ui.timestamp_format, using default"
            );
            default_timestamp_format()
        } else {
            self.timestamp_format.clone()
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            max_tape: default_max_tape(),
            show_tape: true,
            flash_ticks: default_flash_ticks(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            exponent_threshold: default_exponent_threshold(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            trace_file: default_trace_file(),
            trace_level: default_trace_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}

fn default_max_tape() -> usize {
    200
}

fn default_flash_ticks() -> u8 {
    3
}

fn default_exponent_threshold() -> usize {
    DEFAULT_EXPONENT_THRESHOLD
}

fn default_log_dir() -> String {
    "~/.local/share/calcpad/tapes".to_string()
}

fn default_trace_file() -> String {
    "~/.local/share/calcpad/calcpad.log".to_string()
}

fn default_trace_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.max_tape, 200);
        assert!(config.ui.show_tape);
        assert_eq!(config.ui.flash_ticks, 3);
        assert_eq!(config.display.exponent_threshold, 8);
        assert!(!config.behavior.bell_on_error);
        assert!(!config.logging.enabled);
        assert_eq!(config.logging.trace_level, "info");
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            show_tape = false

            [display]
            exponent_threshold = 12

            [logging]
            enabled = true
            log_dir = "/tmp/tapes"
            "#,
        )
        .unwrap();
        assert!(!config.ui.show_tape);
        assert_eq!(config.ui.timestamp_format, "%H:%M:%S");
        assert_eq!(config.display.exponent_threshold, 12);
        assert!(config.logging.enabled);
        assert_eq!(config.logging.log_dir, "/tmp/tapes");
        assert_eq!(config.logging.trace_file, "~/.local/share/calcpad/calcpad.log");
    }

    #[test]
    fn test_checked_timestamp_format() {
        let config: AppConfig = toml::from_str("[ui]\ntimestamp_format = \"%Q\"\n").unwrap();
        assert_eq!(config.ui.checked_timestamp_format(), "%H:%M:%S");

        let config: AppConfig = toml::from_str("[ui]\ntimestamp_format = \"%H:%M\"\n").unwrap();
        assert_eq!(config.ui.checked_timestamp_format(), "%H:%M");
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = AppConfig::default();
        config.behavior.bell_on_error = true;
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert!(parsed.behavior.bell_on_error);
        assert_eq!(parsed.ui.max_tape, config.ui.max_tape);
    }
}
