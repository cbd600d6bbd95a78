//! Leptos glue for [`crate::visibility`].

use leptos::html::Section;
use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::visibility::Threshold;

/// Reveal flag for a `<section>`, using the threshold from the site config.
///
/// ```rust,ignore
/// let (section_ref, visible) = use_visibility_trigger();
/// view! { <section node_ref=section_ref class=move || reveal.class(visible.get())>...</section> }
/// ```
pub fn use_visibility_trigger() -> (NodeRef<Section>, Signal<bool>) {
    let threshold = use_context::<SiteConfig>()
        .map(|config| config.threshold())
        .unwrap_or_default();
    use_visibility_trigger_with(threshold)
}

/// Same as [`use_visibility_trigger`] with an explicit threshold.
///
/// Outside the browser nothing is observed and the flag stays `false`.
pub fn use_visibility_trigger_with(threshold: Threshold) -> (NodeRef<Section>, Signal<bool>) {
    let node_ref = NodeRef::<Section>::new();
    let (visible, set_visible) = signal(false);

    #[cfg(target_arch = "wasm32")]
    web::wire(node_ref, threshold, set_visible);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (threshold, set_visible);

    (node_ref, visible.into())
}

/// Number of section observers currently attached on this thread.
#[cfg(target_arch = "wasm32")]
pub fn active_observers() -> usize {
    web::ACTIVE.with(|active| active.get())
}

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::Cell;

    use leptos::html::Section;
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::error::{Result, SiteError};
    use crate::visibility::{ObserverRegistration, Threshold, TriggerBinding, VisibilityTrigger};

    type Callback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;
    type Slot = StoredValue<Option<TriggerBinding<WebRegistration>>, LocalStorage>;

    thread_local! {
        pub(super) static ACTIVE: Cell<usize> = const { Cell::new(0) };
    }

    /// A live `IntersectionObserver` watching one element.
    pub struct WebRegistration {
        observer: IntersectionObserver,
        element: Element,
        // Dropped with the registration, after the observer has been disconnected.
        _callback: Callback,
    }

    impl ObserverRegistration for WebRegistration {
        fn unobserve(&mut self) {
            self.observer.unobserve(&self.element);
            self.observer.disconnect();
            ACTIVE.with(|active| active.set(active.get().saturating_sub(1)));
            tracing::trace!("section observer released");
        }
    }

    pub fn wire(node_ref: NodeRef<Section>, threshold: Threshold, set_visible: WriteSignal<bool>) {
        let slot: Slot = StoredValue::new_local(None);

        node_ref.on_load(move |element| {
            let element: Element = element.unchecked_into();
            match attach(element, threshold, slot, set_visible) {
                Ok(registration) => {
                    let binding =
                        TriggerBinding::bind(VisibilityTrigger::new(threshold), Some(registration));
                    slot.set_value(Some(binding));
                }
                Err(e) => tracing::warn!("section will not animate: {e}"),
            }
        });

        on_cleanup(move || {
            slot.try_update_value(|binding| {
                if let Some(binding) = binding {
                    binding.teardown();
                }
            });
        });
    }

    fn attach(
        element: Element,
        threshold: Threshold,
        slot: Slot,
        set_visible: WriteSignal<bool>,
    ) -> Result<WebRegistration> {
        let callback: Callback = Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let ratio = entry.intersection_ratio();
                let fired = slot
                    .try_update_value(|binding| {
                        binding.as_mut().map(|b| b.deliver(ratio)).unwrap_or(false)
                    })
                    .unwrap_or(false);
                if fired {
                    set_visible.set(true);
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold.value()));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| SiteError::Observer(format!("{e:?}")))?;
        observer.observe(&element);
        ACTIVE.with(|active| active.set(active.get() + 1));
        tracing::debug!(threshold = threshold.value(), "observing section");

        Ok(WebRegistration {
            observer,
            element,
            _callback: callback,
        })
    }
}
