//! Error taxonomy for the landing page.
//!
//! Nothing here is fatal: every caller degrades to a default (config), a flag that never
//! flips (observer) or a no-op (telemetry).

use thiserror::Error;

/// Errors raised while configuring or wiring up the page.
#[derive(Debug, Error)]
pub enum SiteError {
    /// The inline `#site-config` block is not valid JSON.
    #[error("site config is not valid JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A reveal threshold outside `0.0..=1.0` (or NaN).
    #[error("reveal threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f64),

    /// The browser refused to build or attach an `IntersectionObserver`.
    #[error("intersection observer unavailable: {0}")]
    Observer(String),

    /// A global tracing subscriber was already installed.
    #[error("telemetry init failed: {0}")]
    Telemetry(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SiteError>;
