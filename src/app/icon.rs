use leptos::prelude::*;

use crate::icon::Icon;

/// Inline stroke icon that inherits `currentColor` from its parent.
#[component]
pub fn SvgIcon(icon: Icon, #[prop(into, optional)] class: String) -> impl IntoView {
    let class = if class.is_empty() {
        "w-5 h-5".to_string()
    } else {
        class
    };
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            focusable="false"
            class=class
        >
            {icon.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
