//! # bluecity-landing
//!
//! Single-page site for Blue City Parivar, rendered client-side with
//! [Leptos](https://leptos.dev/) 0.8 and built with `trunk`.
//!
//! Sections below the hero animate in once, the first time they scroll into view. That
//! behaviour lives in two places:
//!
//! - [`visibility`] - the one-shot trigger state machine and its scoped observer binding
//! - [`hooks`] - the Leptos hook that feeds it from a browser `IntersectionObserver`
//!
//! Everything else is static composition over the literal data in [`content`].
//!
//! ```rust
//! use bluecity_landing::visibility::{Threshold, VisibilityTrigger};
//!
//! let mut trigger = VisibilityTrigger::new(Threshold::DEFAULT);
//! assert!(!trigger.observe(0.05));
//! assert!(trigger.observe(0.12));
//! assert!(trigger.is_visible());
//! ```

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod hooks;
pub mod motion;
pub mod sections;
pub mod telemetry;
pub mod visibility;

pub use app::App;
pub use config::SiteConfig;
pub use error::{Result, SiteError};
