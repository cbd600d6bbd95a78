use leptos::prelude::*;

#[component]
pub fn Card(#[prop(optional)] extra_class: Option<&'static str>, children: Children) -> impl IntoView {
    let class = match extra_class {
        Some(extra) => format!("card {extra}"),
        None => "card".to_string(),
    };
    view! { <div class=class>{children()}</div> }
}

#[component]
pub fn CardContent(
    #[prop(optional)] extra_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = match extra_class {
        Some(extra) => format!("card-content {extra}"),
        None => "card-content".to_string(),
    };
    view! { <div class=class>{children()}</div> }
}
