use leptos::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant, SectionHeader};
use crate::content::{EVENTS, Event};
use crate::hooks::use_visibility_trigger;
use crate::motion::{Motion, Reveal};

const TABLE: Reveal = Reveal::new(Motion::FadeUp, 800, 200);
const ACTIONS: Reveal = Reveal::new(Motion::FadeUpSmall, 800, 600);

#[component]
pub fn Events() -> impl IntoView {
    let (section_ref, visible) = use_visibility_trigger();

    view! {
        <section id="events" node_ref=section_ref class="events">
            <div class="container">
                <SectionHeader
                    eyebrow="Our Events"
                    title="Upcoming Celebrations &"
                    highlight="Gatherings"
                    description="From festivals to cultural nights, we celebrate our traditions and create lasting memories together."
                    visible=visible
                />

                <div class=move || format!("events-card {}", TABLE.class(visible.get()))
                    style=TABLE.style()>
                    <EventsTable events=EVENTS visible=visible />
                </div>

                <div class=move || format!("section-actions {}", ACTIONS.class(visible.get()))
                    style=ACTIONS.style()>
                    <Button variant=ButtonVariant::Primary size=ButtonSize::Lg>"View All Events"</Button>
                </div>
            </div>
        </section>
    }
}

/// One row per event, in the order given.
#[component]
pub fn EventsTable(events: &'static [Event], visible: Signal<bool>) -> impl IntoView {
    let rows = events
        .iter()
        .enumerate()
        .map(|(idx, event)| {
            let reveal = Reveal::staggered(Motion::SlideRowIn, 500, 300, 100, idx);
            let badge = format!("status-badge {}", event.status.css_class());
            view! {
                <tr class=move || format!("event-row {}", reveal.class(visible.get()))
                    style=reveal.style()>
                    <td class="event-title">{event.title}</td>
                    <td class="event-date">{event.date}</td>
                    <td class="event-time">{event.time}</td>
                    <td class="event-location">{event.location}</td>
                    <td>
                        <span class=badge>{event.status.label()}</span>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="table-scroll">
            <table class="events-table">
                <thead>
                    <tr>
                        <th>"Event Name"</th>
                        <th>"Date"</th>
                        <th>"Time"</th>
                        <th>"Location"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn render_table(visible: bool) -> String {
        view! { <EventsTable events=EVENTS visible=Signal::derive(move || visible) /> }.to_html()
    }

    #[test]
    fn one_row_per_event_in_order() {
        let html = render_table(false);
        assert_eq!(html.matches(r#"class="event-row"#).count(), 4);

        let positions: Vec<usize> = EVENTS
            .iter()
            .map(|e| html.find(e.title).expect("event title rendered"))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn exactly_one_done_badge() {
        let html = render_table(false);
        assert_eq!(html.matches("status-done").count(), 1);
        assert_eq!(html.matches("status-upcoming").count(), 3);

        // the done badge belongs to the folk night row
        let done_at = html.find("status-done").unwrap();
        let folk_at = html.find("Rajasthani Folk Night").unwrap();
        assert!(folk_at < done_at);
    }

    #[test]
    fn rows_follow_the_trigger() {
        assert_eq!(render_table(false).matches("is-revealed").count(), 0);
        assert_eq!(render_table(true).matches("is-revealed").count(), 4);
    }

    #[test]
    fn section_starts_hidden() {
        let html = view! { <Events /> }.to_html();
        assert!(html.contains(r#"id="events""#));
        assert!(html.contains("View All Events"));
        assert!(!html.contains("is-revealed"));
    }
}
