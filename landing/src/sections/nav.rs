use leptos::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::content::{NAV_LINKS, ORG_NAME};

/// Past this many pixels of scroll the bar turns solid.
#[cfg(target_arch = "wasm32")]
const SCROLLED_OFFSET_PX: f64 = 20.0;

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);

    #[cfg(target_arch = "wasm32")]
    track_scroll(set_scrolled);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_scrolled;

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|link| {
                view! {
                    <a href=link.href class="nav-link" on:click=move |_| set_menu_open.set(false)>
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || if scrolled.get() { "nav scrolled" } else { "nav" }>
            <div class="nav-inner">
                <a href="#home" class="nav-brand text-gradient">{ORG_NAME}</a>
                <div class="nav-links">
                    {links}
                    <Button variant=ButtonVariant::Primary size=ButtonSize::Sm>"Join Now"</Button>
                </div>
                <button
                    type="button"
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="nav-drawer">
                    {links}
                    <Button variant=ButtonVariant::Primary size=ButtonSize::Md>"Join Now"</Button>
                </div>
            </Show>
        </nav>
    }
}

#[cfg(target_arch = "wasm32")]
fn track_scroll(set_scrolled: WriteSignal<bool>) {
    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or(0.0);
        set_scrolled.set(offset > SCROLLED_OFFSET_PX);
    });
    on_cleanup(move || handle.remove());
}
