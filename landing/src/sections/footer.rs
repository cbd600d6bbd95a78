use leptos::prelude::*;

use crate::content::{LEGAL_LINKS, Link, ORG_NAME, QUICK_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = format!("© {} {ORG_NAME}. All rights reserved.", current_year());

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3 class="footer-title text-gradient">{ORG_NAME}</h3>
                        <p class="footer-blurb">
                            "Connecting the hearts of Jodhpur in Ahmedabad. A community dedicated to preserving our "
                            "heritage, celebrating our culture, and supporting each other."
                        </p>
                        <div class="footer-meta">
                            <p>"A registered community organization"</p>
                            <p>"Serving Jodhpuris in Ahmedabad since 2015"</p>
                        </div>
                    </div>
                    <LinkColumn heading="Quick Links" links=QUICK_LINKS />
                    <LinkColumn heading="Legal" links=LEGAL_LINKS />
                </div>

                <div class="footer-bottom">
                    <p class="footer-copyright">{copyright}</p>
                    <p class="footer-copyright">"Made with ❤️ for the Jodhpuri community"</p>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn LinkColumn(heading: &'static str, links: &'static [Link]) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h4 class="footer-heading">{heading}</h4>
            <ul class="footer-links">
                {links
                    .iter()
                    .map(|link| view! { <li><a href=link.href class="footer-link">{link.label}</a></li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_year() -> u32 {
    crate::content::FALLBACK_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FALLBACK_YEAR;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_quick_links_and_year() {
        let html = view! { <Footer /> }.to_html();
        for link in QUICK_LINKS {
            assert!(html.contains(&format!(r##"href="{}""##, link.href)));
        }
        assert!(html.contains(&FALLBACK_YEAR.to_string()));
        assert_eq!(html.matches(r#"class="footer-link""#).count(), QUICK_LINKS.len() + LEGAL_LINKS.len());
    }
}
