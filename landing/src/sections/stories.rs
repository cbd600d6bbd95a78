use leptos::prelude::*;

use crate::components::{Card, CardContent, SectionHeader};
use crate::content::{CLOSING_QUOTE, TESTIMONIALS};
use crate::hooks::use_visibility_trigger;
use crate::motion::{Motion, Reveal};

const CLOSING: Reveal = Reveal::new(Motion::FadeUp, 800, 600);

#[component]
pub fn Stories() -> impl IntoView {
    let (section_ref, visible) = use_visibility_trigger();

    let cards = TESTIMONIALS
        .iter()
        .enumerate()
        .map(|(idx, t)| {
            let reveal = Reveal::staggered(Motion::FadeUp, 600, 200, 150, idx);
            view! {
                <div class=move || reveal.class(visible.get()) style=reveal.style()>
                    <Card extra_class="testimonial">
                        <CardContent>
                            <div class="quote-mark">"\u{201C}"</div>
                            <p class="testimonial-quote">{t.quote}</p>
                            <div class="testimonial-author">
                                <img src=t.avatar alt=t.name class="testimonial-avatar" />
                                <div>
                                    <div class="testimonial-name">{t.name}</div>
                                    <div class="testimonial-role">{t.role}</div>
                                </div>
                            </div>
                        </CardContent>
                    </Card>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="stories" node_ref=section_ref class="stories">
            <div class="bg-pattern faint"></div>
            <div class="container">
                <SectionHeader
                    eyebrow="Community Voices"
                    title="Stories from Our"
                    highlight="Parivar"
                    description="Hear what our members have to say about being part of Blue City Parivar."
                    visible=visible
                />

                <div class="testimonials-grid">{cards}</div>

                <div class=move || format!("closing-quote {}", CLOSING.class(visible.get()))
                    style=CLOSING.style()>
                    <p>"\u{201C}" {CLOSING_QUOTE} "\u{201D}"</p>
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
    fn renders_each_testimonial_in_a_card() {
        let html = view! { <Stories /> }.to_html();
        assert!(html.contains(r#"id="stories""#));
        assert_eq!(html.matches("card testimonial").count(), TESTIMONIALS.len());
        for t in TESTIMONIALS {
            assert!(html.contains(t.name));
            assert!(html.contains(t.role));
        }
    }
}
