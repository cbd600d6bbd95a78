use leptos::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::content::{CONTACT_CHANNELS, MEMBERSHIP, SOCIAL_LINKS};
use crate::hooks::use_visibility_trigger;
use crate::motion::{Motion, Reveal};

const BODY: Reveal = Reveal::new(Motion::FadeUp, 800, 0);
const MEMBERSHIP_CARD: Reveal = Reveal::new(Motion::ScaleInSoft, 800, 200);
const ACTIONS: Reveal = Reveal::new(Motion::FadeUpSmall, 800, 400);
const CONTACT: Reveal = Reveal::new(Motion::FadeUpSmall, 800, 600);
const SOCIAL: Reveal = Reveal::new(Motion::FadeUpSmall, 800, 800);

/// Membership pitch and contact details, anchored at `#contact`.
#[component]
pub fn Cta() -> impl IntoView {
    let (section_ref, visible) = use_visibility_trigger();

    let membership = MEMBERSHIP
        .iter()
        .map(|stat| {
            view! {
                <div>
                    <div class="membership-value">{stat.value}</div>
                    <div class="membership-label">{stat.label}</div>
                </div>
            }
        })
        .collect_view();

    let channels = CONTACT_CHANNELS
        .iter()
        .map(|channel| {
            let body = match channel.href {
                Some(href) => view! { <a href=href class="contact-link">{channel.text}</a> }.into_any(),
                None => view! { <div class="contact-text">{channel.text}</div> }.into_any(),
            };
            view! {
                <div class="contact-channel">
                    <div class="contact-icon">{channel.icon}</div>
                    <div class="contact-label">{channel.label}</div>
                    {body}
                </div>
            }
        })
        .collect_view();

    let socials = SOCIAL_LINKS
        .iter()
        .map(|link| {
            view! {
                <a href=link.href class="social-badge" aria-label=link.label>
                    <span>{link.initial()}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <section id="contact" node_ref=section_ref class="cta">
            <div class="cta-gradient"></div>
            <div class="cta-pattern"></div>

            <div class=move || format!("container cta-body {}", BODY.class(visible.get()))
                style=BODY.style()>
                <h2 class="cta-title">"Become Part of Our Family"</h2>
                <p class="cta-lead">
                    "Join Blue City Parivar today and experience the warmth of Jodhpur in Ahmedabad."
                    <br />
                    "Lifetime membership for your entire family."
                </p>

                <div class=move || format!("membership-card {}", MEMBERSHIP_CARD.class(visible.get()))
                    style=MEMBERSHIP_CARD.style()>
                    <div class="membership-grid">{membership}</div>
                </div>

                <div class=move || format!("cta-actions {}", ACTIONS.class(visible.get()))
                    style=ACTIONS.style()>
                    <Button size=ButtonSize::Lg extra_class="on-gradient">"Become a Member"</Button>
                    <Button variant=ButtonVariant::Outline size=ButtonSize::Lg extra_class="on-dark">
                        "Contact Us"
                    </Button>
                </div>

                <div class=move || format!("contact-grid {}", CONTACT.class(visible.get()))
                    style=CONTACT.style()>
                    {channels}
                </div>

                <div class=move || format!("social-row {}", SOCIAL.class(visible.get()))
                    style=SOCIAL.style()>
                    {socials}
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
    fn renders_contact_links() {
        let html = view! { <Cta /> }.to_html();
        assert!(html.contains(r#"id="contact""#));
        assert!(html.contains(r#"href="mailto:info@bluecityparivar.com""#));
        assert!(html.contains(r#"href="tel:+919876543210""#));
        assert!(html.contains("Ahmedabad, Gujarat"));
        assert_eq!(html.matches("social-badge").count(), SOCIAL_LINKS.len());
    }
}
