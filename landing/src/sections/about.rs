use leptos::prelude::*;

use crate::content::{ABOUT_FEATURES, ORG_NAME};
use crate::hooks::use_visibility_trigger;
use crate::motion::{Motion, Reveal};

const GRID: Reveal = Reveal::new(Motion::FadeUp, 800, 0);
const IMAGE: Reveal = Reveal::new(Motion::SlideFromLeft, 800, 200);
const COPY: Reveal = Reveal::new(Motion::SlideFromRight, 800, 400);

#[component]
pub fn About() -> impl IntoView {
    let (section_ref, visible) = use_visibility_trigger();

    let features = ABOUT_FEATURES
        .iter()
        .enumerate()
        .map(|(idx, feature)| {
            let reveal = Reveal::staggered(Motion::FadeUpSmall, 600, 600, 100, idx);
            view! {
                <div class=move || format!("about-feature {}", reveal.class(visible.get()))
                    style=reveal.style()>
                    <div class="about-feature-icon">{feature.icon}</div>
                    <div class="about-feature-title">{feature.title}</div>
                    <div class="about-feature-desc">{feature.description}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="about" node_ref=section_ref class="about">
            <div class="blob blob-top-right"></div>
            <div class="blob blob-bottom-left"></div>

            <div class=move || format!("about-grid container {}", GRID.class(visible.get()))
                style=GRID.style()>
                <div class=move || format!("about-media {}", IMAGE.class(visible.get()))
                    style=IMAGE.style()>
                    <div class="about-frame">
                        <img src="/about.jpeg" alt="Rajasthani Culture" class="about-image" />
                        <div class="about-frame-border"></div>
                    </div>
                    <div class="about-glow"></div>
                </div>

                <div class=move || format!("about-copy {}", COPY.class(visible.get()))
                    style=COPY.style()>
                    <div>
                        <h2 class="section-eyebrow">"About Us"</h2>
                        <h3 class="section-title">
                            "A Community That Feels Like "
                            <span class="text-gradient">"Home"</span>
                        </h3>
                    </div>
                    <div class="about-text">
                        <p>
                            <strong class="brand-strong">{ORG_NAME}</strong>
                            " is more than just a community. It's a family that brings together the vibrant spirit of Jodhpur to the heart of Ahmedabad."
                        </p>
                        <p>
                            "We are a close-knit group of families from Jodhpur who have made Ahmedabad our home, "
                            "yet we cherish our roots, culture, and traditions. Through regular gatherings, festivals, "
                            "and celebrations, we create a space where our heritage thrives."
                        </p>
                        <p>
                            "Whether it's celebrating Diwali, Holi, or organizing cultural events, we come together "
                            "to support each other, share our stories, and pass on our rich traditions to the next generation."
                        </p>
                    </div>
                    <div class="about-features">{features}</div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn starts_hidden_with_all_features() {
        let html = view! { <About /> }.to_html();
        assert!(html.contains(r#"id="about""#));
        assert_eq!(html.matches("about-feature-title").count(), ABOUT_FEATURES.len());
        assert!(!html.contains("is-revealed"));
    }
}
