use leptos::prelude::*;

use crate::motion::{Motion, Reveal};

const HEADER_REVEAL: Reveal = Reveal::new(Motion::FadeUp, 800, 0);

/// Eyebrow, two-tone title and blurb shared by the events, gallery and stories sections.
#[component]
pub fn SectionHeader(
    eyebrow: &'static str,
    title: &'static str,
    highlight: &'static str,
    description: &'static str,
    visible: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class=move || format!("section-header {}", HEADER_REVEAL.class(visible.get()))
            style=HEADER_REVEAL.style()>
            <h2 class="section-eyebrow">{eyebrow}</h2>
            <h3 class="section-title">
                {title} " " <span class="text-gradient">{highlight}</span>
            </h3>
            <p class="section-description">{description}</p>
        </div>
    }
}
