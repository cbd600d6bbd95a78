use leptos::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::content::HERO_STATS;
use crate::motion::{Motion, Reveal};

// The hero is above the fold, so it plays on load instead of waiting for a trigger.
const BODY: Reveal = Reveal::new(Motion::FadeUp, 800, 0);
const TITLE: Reveal = Reveal::new(Motion::FadeUpSmall, 800, 200);
const TAGLINE: Reveal = Reveal::new(Motion::FadeUpSmall, 800, 400);
const ACTIONS: Reveal = Reveal::new(Motion::FadeUpSmall, 800, 600);
const STATS: Reveal = Reveal::new(Motion::FadeUpSmall, 800, 800);
const SCROLL_HINT: Reveal = Reveal::new(Motion::FadeIn, 1000, 1000);

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero-backdrop">
                <div class="hero-overlay"></div>
                <img src="/jodhpur_fort.jpeg" alt="Jodhpur Blue City" class="hero-image" />
            </div>
            <div class="hero-pattern bg-pattern"></div>

            <div class=format!("hero-content container {}", BODY.on_load_class()) style=BODY.style()>
                <h1 class=format!("hero-title {}", TITLE.on_load_class()) style=TITLE.style()>
                    "Where Jodhpur Meets"
                    <br />
                    <span class="hero-title-accent">"Ahmedabad"</span>
                </h1>
                <p class=format!("hero-tagline {}", TAGLINE.on_load_class()) style=TAGLINE.style()>
                    "A vibrant community keeping our Marwari roots alive through culture, "
                    <br />
                    "festivals, and cherished connections in the heart of Gujarat."
                </p>
                <div class=format!("hero-actions {}", ACTIONS.on_load_class()) style=ACTIONS.style()>
                    <Button variant=ButtonVariant::Secondary size=ButtonSize::Lg>"Join the Parivar"</Button>
                    <Button variant=ButtonVariant::Outline size=ButtonSize::Lg extra_class="on-dark">
                        "Explore Events"
                    </Button>
                </div>
                <div class=format!("hero-stats {}", STATS.on_load_class()) style=STATS.style()>
                    {HERO_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="hero-stat">
                                    <div class="hero-stat-value">{stat.value}</div>
                                    <div class="hero-stat-label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class=format!("scroll-hint {}", SCROLL_HINT.on_load_class()) style=SCROLL_HINT.style()>
                <div class="scroll-hint-mouse">
                    <div class="scroll-hint-wheel"></div>
                </div>
            </div>
        </section>
    }
}
