//! Site configuration, read from an inline JSON block in `index.html`:
//!
//! ```html
//! <script id="site-config" type="application/json">
//!   { "reveal_threshold": 0.1, "log_level": "info" }
//! </script>
//! ```

use serde::Deserialize;

use crate::error::{Result, SiteError};
use crate::visibility::Threshold;

/// Id of the `<script type="application/json">` element holding the config.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Validated site settings. Only reachable through [`SiteConfig::from_json`],
/// [`SiteConfig::default`] and the builder methods, so the threshold is always in range.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    reveal_threshold: Threshold,
    log_level: String,
}

/// Wire shape of the config block, before validation.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawSiteConfig {
    reveal_threshold: f64,
    log_level: String,
}

impl Default for RawSiteConfig {
    fn default() -> Self {
        let config = SiteConfig::default();
        Self {
            reveal_threshold: config.reveal_threshold.value(),
            log_level: config.log_level,
        }
    }
}

impl TryFrom<RawSiteConfig> for SiteConfig {
    type Error = SiteError;

    fn try_from(raw: RawSiteConfig) -> Result<Self> {
        Ok(Self {
            reveal_threshold: Threshold::new(raw.reveal_threshold)?,
            log_level: raw.log_level,
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: Threshold::DEFAULT,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a config block. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let raw: RawSiteConfig = serde_json::from_str(raw)?;
        raw.try_into()
    }

    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.reveal_threshold = threshold;
        self
    }

    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = log_level.into();
        self
    }

    /// Visible fraction that reveals a section.
    pub fn threshold(&self) -> Threshold {
        self.reveal_threshold
    }

    /// `EnvFilter` directive, e.g. `"info"` or `"bluecity_landing=debug"`.
    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// Read the config block from the page, falling back to defaults.
    ///
    /// Runs before telemetry is up, so fallbacks are reported through the returned notice
    /// and logged by the caller once a subscriber exists.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> (Self, Option<String>) {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            None => (Self::default(), None),
            Some(raw) if raw.trim().is_empty() => (Self::default(), None),
            Some(raw) => match Self::from_json(&raw) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e.to_string())),
            },
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> (Self, Option<String>) {
        (Self::default(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.threshold(), Threshold::DEFAULT);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "log_level": "debug" }"#).unwrap();
        assert_eq!(config, SiteConfig::default().with_log_level("debug"));
    }

    #[test]
    fn custom_threshold() {
        let config = SiteConfig::from_json(r#"{ "reveal_threshold": 0.25 }"#).unwrap();
        assert_eq!(config.threshold().value(), 0.25);
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let err = SiteConfig::from_json(r#"{ "reveal_threshold": 1.5 }"#).unwrap_err();
        assert!(matches!(err, SiteError::InvalidThreshold(v) if v == 1.5));
    }

    #[test]
    fn every_constructed_config_has_an_in_range_threshold() {
        for raw in [
            r#"{ "reveal_threshold": -0.01 }"#,
            r#"{ "reveal_threshold": 1.0001 }"#,
            r#"{ "reveal_threshold": 7 }"#,
        ] {
            assert!(
                matches!(
                    SiteConfig::from_json(raw),
                    Err(SiteError::InvalidThreshold(_))
                ),
                "{raw}"
            );
        }
        let edge = SiteConfig::from_json(r#"{ "reveal_threshold": 1.0 }"#).unwrap();
        assert_eq!(edge.threshold().value(), 1.0);
    }

    #[test]
    fn builders_keep_validated_threshold() {
        let threshold = Threshold::new(0.4).unwrap();
        let config = SiteConfig::default()
            .with_threshold(threshold)
            .with_log_level("warn");
        assert_eq!(config.threshold(), threshold);
        assert_eq!(config.log_level(), "warn");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SiteConfig::from_json("{ reveal_threshold: ").unwrap_err();
        assert!(matches!(err, SiteError::ConfigParse(_)));
        assert!(err.to_string().starts_with("site config is not valid JSON"));
    }

    #[test]
    fn native_load_is_default() {
        let (config, notice) = SiteConfig::load();
        assert_eq!(config, SiteConfig::default());
        assert!(notice.is_none());
    }
}
