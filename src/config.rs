//! Application configuration.
//!
//! Defaults reproduce the stock window: "Gantt Chart", 800x600, titled
//! "Expenses of the Day". A JSON file named by `EXPENSE_CHART_CONFIG`
//! overrides any subset of fields.

use crate::charts::LayoutConfig;
use crate::data::{AmountScale, Rgb, DEFAULT_MAX_AMOUNT};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the config file path.
pub const CONFIG_ENV_VAR: &str = "EXPENSE_CHART_CONFIG";

/// Optional TrueType fonts for PNG export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub regular: Option<PathBuf>,
    pub bold: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub chart_title: String,
    pub max_amount: f64,
    /// Canvas background as `#RRGGBB`
    pub background: String,
    pub layout: LayoutConfig,
    pub fonts: FontConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Gantt Chart".to_string(),
            window_width: 800.0,
            window_height: 600.0,
            chart_title: "Expenses of the Day".to_string(),
            max_amount: DEFAULT_MAX_AMOUNT,
            background: "#F0F0F0".to_string(),
            layout: LayoutConfig::default(),
            fonts: FontConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], or defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        AmountScale::new(self.max_amount).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Rgb::from_hex(&self.background)
            .map_err(|e| ConfigError::Invalid(format!("background: {e}")))?;

        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }

        let layout = &self.layout;
        if layout.task_height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "layout.task_height must be > 0, got {}",
                layout.task_height
            )));
        }
        for (name, value) in [
            ("bar_gap", layout.bar_gap),
            ("top_margin", layout.top_margin),
            ("left_margin", layout.left_margin),
            ("label_gap", layout.label_gap),
        ] {
            if value < 0 {
                return Err(ConfigError::Invalid(format!(
                    "layout.{name} must be >= 0, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("title_font_size", layout.title_font_size),
            ("label_font_size", layout.label_font_size),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "layout.{name} must be > 0, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Validated scale; call after [`AppConfig::validate`].
    pub fn scale(&self) -> AmountScale {
        AmountScale::new(self.max_amount).unwrap_or_default()
    }

    pub fn background_color(&self) -> Rgb {
        Rgb::from_hex(&self.background).unwrap_or(Rgb::new(0xF0, 0xF0, 0xF0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_stock_window() {
        let config = AppConfig::default();
        assert_eq!(config.window_title, "Gantt Chart");
        assert_eq!((config.window_width, config.window_height), (800.0, 600.0));
        assert_eq!(config.chart_title, "Expenses of the Day");
        assert_eq!(config.scale().max_amount(), 1000.0);
        assert_eq!(config.background_color(), Rgb::new(240, 240, 240));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config =
            AppConfig::from_json(r#"{ "max_amount": 500, "layout": { "left_margin": 120 } }"#)
                .unwrap();
        assert_eq!(config.max_amount, 500.0);
        assert_eq!(config.layout.left_margin, 120);
        assert_eq!(config.layout.task_height, 30);
        assert_eq!(config.window_title, "Gantt Chart");
    }

    #[test]
    fn rejects_bad_values() {
        for json in [
            r#"{ "max_amount": 0 }"#,
            r#"{ "max_amount": -1 }"#,
            r##"{ "background": "#12" }"##,
            r#"{ "window_width": 0 }"#,
            r#"{ "layout": { "task_height": 0 } }"#,
            r#"{ "layout": { "bar_gap": -1 } }"#,
            r#"{ "layout": { "label_font_size": 0 } }"#,
        ] {
            assert!(
                matches!(AppConfig::from_json(json), Err(ConfigError::Invalid(_))),
                "expected rejection for {json}"
            );
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            AppConfig::from_json("{ not json"),
            Err(ConfigError::JsonParse(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "chart_title": "Monday" }}"#).unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.chart_title, "Monday");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = AppConfig::load(Path::new("/nonexistent/chart.json")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
