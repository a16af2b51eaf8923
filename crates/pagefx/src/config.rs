//! Page configuration.
//!
//! Every field has a default matching the stock page behavior, so an empty
//! JSON object (or no configuration at all) gives the standard effects.

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::error::{Error, Result};

/// Tunables for all page behaviors.
///
/// Deserialized from camelCase JSON:
///
/// ```rust
/// use pagefx::PageConfig;
///
/// let config = PageConfig::from_json(r#"{ "scrollTopThreshold": 500, "loadingText": "Saving..." }"#).unwrap();
/// assert_eq!(config.scroll_top_threshold, 500.0);
/// assert_eq!(config.loading_text, "Saving...");
/// assert_eq!(config.scroll_duration_ms, 1000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PageConfig {
    /// Duration of anchor and scroll-to-top animations.
    pub scroll_duration_ms: f64,
    /// Scroll offset above which the scroll-to-top control shows.
    pub scroll_top_threshold: f64,
    /// How long a scrolled-to target keeps the `scroll-focus` class.
    pub highlight_ms: u32,
    /// How long a `data-loading="true"` control stays in its loading state.
    pub loading_ms: u32,
    /// Label shown while loading.
    pub loading_text: String,
    /// Quiet period before charts are resized after a window resize.
    pub resize_debounce_ms: u32,
    /// Chart height as a fraction of its parent's width.
    pub chart_aspect: f64,
    /// Background tint applied to hovered table rows.
    pub row_hover_color: String,
    /// CSS transition applied to hovered table rows.
    pub row_transition: String,
    /// Listen on the document instead of on each control, covering
    /// controls added after start-up.
    pub delegated: bool,
    /// Minimum level written to the browser console.
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll_duration_ms: 1000.0,
            scroll_top_threshold: 300.0,
            highlight_ms: 1000,
            loading_ms: 1000,
            loading_text: "Loading...".to_string(),
            resize_debounce_ms: 250,
            chart_aspect: 0.6,
            row_hover_color: "#f5f5f5".to_string(),
            row_transition: "background-color 0.3s ease".to_string(),
            delegated: true,
            log_level: "warn".to_string(),
        }
    }
}

impl PageConfig {
    /// Parses and validates a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed JSON or unknown keys and
    /// [`Error::InvalidConfig`] for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        if !(self.scroll_duration_ms.is_finite() && self.scroll_duration_ms > 0.0) {
            return Err(invalid("scrollDurationMs must be a positive number"));
        }
        if !self.scroll_top_threshold.is_finite() || self.scroll_top_threshold < 0.0 {
            return Err(invalid("scrollTopThreshold must be zero or more"));
        }
        if !(self.chart_aspect > 0.0 && self.chart_aspect <= 10.0) {
            return Err(invalid("chartAspect must be in (0, 10]"));
        }
        if self.loading_text.trim().is_empty() {
            return Err(invalid("loadingText must not be empty"));
        }
        self.level_filter()?;
        Ok(())
    }

    /// The console log level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `logLevel` is not a tracing level
    /// name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse()
            .map_err(|_| invalid(&format!("logLevel {:?} is not a log level", self.log_level)))
    }
}

fn invalid(reason: &str) -> Error {
    Error::InvalidConfig(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_page() {
        let config = PageConfig::default();
        assert_eq!(config.scroll_duration_ms, 1000.0);
        assert_eq!(config.scroll_top_threshold, 300.0);
        assert_eq!(config.highlight_ms, 1000);
        assert_eq!(config.loading_ms, 1000);
        assert_eq!(config.loading_text, "Loading...");
        assert_eq!(config.resize_debounce_ms, 250);
        assert_eq!(config.chart_aspect, 0.6);
        assert!(config.delegated);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = PageConfig::from_json("{}").unwrap();
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config =
            PageConfig::from_json(r#"{ "chartAspect": 0.5, "delegated": false }"#).unwrap();
        assert_eq!(config.chart_aspect, 0.5);
        assert!(!config.delegated);
        assert_eq!(config.resize_debounce_ms, 250);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = PageConfig::from_json(r#"{ "chartRatio": 0.5 }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        for json in [
            r#"{ "scrollDurationMs": 0 }"#,
            r#"{ "scrollTopThreshold": -1 }"#,
            r#"{ "chartAspect": 0 }"#,
            r#"{ "chartAspect": 50 }"#,
            r#"{ "loadingText": "   " }"#,
            r#"{ "logLevel": "chatty" }"#,
        ] {
            let err = PageConfig::from_json(json).unwrap_err();
            assert!(matches!(err, Error::InvalidConfig(_)), "{json} gave {err:?}");
        }
    }

    #[test]
    fn test_level_filter() {
        let mut config = PageConfig::default();
        assert_eq!(config.level_filter().unwrap(), LevelFilter::WARN);
        config.log_level = "debug".into();
        assert_eq!(config.level_filter().unwrap(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_round_trips_through_json() {
        let json = serde_json::to_string(&PageConfig::default()).unwrap();
        assert!(json.contains("\"scrollTopThreshold\":300.0"));
        assert_eq!(PageConfig::from_json(&json).unwrap(), PageConfig::default());
    }
}
