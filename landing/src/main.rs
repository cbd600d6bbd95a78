// Blue City Parivar landing page, Leptos 0.8 CSR

use bluecity_landing::{App, SiteConfig, telemetry};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, notice) = SiteConfig::load();
    if let Err(e) = telemetry::init(&config) {
        web_sys::console::warn_1(&e.to_string().into());
    }
    if let Some(notice) = notice {
        tracing::warn!("using default site config: {notice}");
    }
    tracing::info!(threshold = config.threshold().value(), "mounting landing page");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
