use leptos::prelude::*;

use crate::components::SectionHeader;
use crate::content::GALLERY;
use crate::hooks::use_visibility_trigger;
use crate::motion::{Motion, Reveal};

const GRID: Reveal = Reveal::new(Motion::FadeIn, 800, 200);
const MORE: Reveal = Reveal::new(Motion::FadeUpSmall, 800, 800);

#[component]
pub fn Gallery() -> impl IntoView {
    let (section_ref, visible) = use_visibility_trigger();

    let tiles = GALLERY
        .iter()
        .enumerate()
        .map(|(idx, image)| {
            let reveal = Reveal::staggered(Motion::ScaleIn, 500, 300, 100, idx);
            let span = image.span;
            view! {
                <div class=move || format!("{} {}", span.class(), reveal.class(visible.get()))
                    style=format!("{} {}", span.style(), reveal.style())>
                    <img src=image.url alt=image.title class="gallery-image" loading="lazy" />
                    <div class="gallery-caption">
                        <h4>{image.title}</h4>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="gallery" node_ref=section_ref class="gallery">
            <div class="blob blob-middle-left"></div>
            <div class="container">
                <SectionHeader
                    eyebrow="Memories"
                    title="Our"
                    highlight="Gallery"
                    description="Glimpses of our vibrant celebrations, cultural events, and moments of togetherness."
                    visible=visible
                />

                <div class=move || format!("gallery-grid {}", GRID.class(visible.get()))
                    style=GRID.style()>
                    {tiles}
                </div>

                <div class=move || format!("section-actions {}", MORE.class(visible.get()))
                    style=MORE.style()>
                    <button type="button" class="link-button">"View Full Gallery →"</button>
                </div>
            </div>
        </section>
    }
}
