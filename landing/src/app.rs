use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::sections::*;

/// The whole page. `config` is shared with the sections through context.
#[component]
pub fn App(#[prop(optional)] config: Option<SiteConfig>) -> impl IntoView {
    provide_context(config.unwrap_or_default());

    view! {
        <div class="page">
            <Nav />
            <main>
                <Hero />
                <About />
                <Events />
                <Gallery />
                <Stories />
                <Cta />
            </main>
            <Footer />
        </div>
    }
}
