//! `tracing` setup.
//!
//! In the browser every formatted event goes to `console.{error,warn,info,debug}`; on
//! native targets (tests, tooling) it goes to stderr.

use tracing_subscriber::EnvFilter;

use crate::config::SiteConfig;
use crate::error::{Result, SiteError};

fn filter(config: &SiteConfig) -> EnvFilter {
    EnvFilter::try_new(config.log_level()).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &SiteConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_target(false)
        .without_time();

    #[cfg(target_arch = "wasm32")]
    let builder = builder.with_writer(console::ConsoleMakeWriter);
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.with_writer(std::io::stderr);

    builder
        .try_init()
        .map_err(|e| SiteError::Telemetry(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    pub struct ConsoleMakeWriter;

    /// Buffers one formatted event and flushes it to the console on drop.
    pub struct ConsoleWriter {
        level: Level,
        buf: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            if self.buf.is_empty() {
                return;
            }
            let line = String::from_utf8_lossy(&self.buf);
            let msg = JsValue::from_str(line.trim_end());
            match self.level {
                Level::ERROR => web_sys::console::error_1(&msg),
                Level::WARN => web_sys::console::warn_1(&msg),
                Level::INFO => web_sys::console::info_1(&msg),
                _ => web_sys::console::debug_1(&msg),
            }
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                level: Level::INFO,
                buf: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                level: *meta.level(),
                buf: Vec::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_directive_falls_back_to_info() {
        let config = SiteConfig::default().with_log_level("bluecity_landing=notalevel");
        assert_eq!(filter(&config).to_string(), "info");
    }

    #[test]
    fn directive_is_passed_through() {
        let config = SiteConfig::default().with_log_level("debug");
        assert_eq!(filter(&config).to_string(), "debug");
    }

    #[test]
    fn second_init_reports_error() {
        let config = SiteConfig::default();
        let _ = init(&config);
        assert!(matches!(init(&config), Err(SiteError::Telemetry(_))));
    }
}
