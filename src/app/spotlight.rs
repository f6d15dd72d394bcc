use leptos::{ev::MouseEvent, prelude::*};

use crate::spotlight::SpotlightPosition;

/// Glass card with a radial glow that follows the pointer while hovered.
#[component]
pub fn SpotlightCard(
    #[prop(optional, into)] class: String,
    #[prop(optional)] hover_effect: bool,
    children: Children,
) -> impl IntoView {
    let (position, set_position) = signal(SpotlightPosition::default());

    let on_mouse_move = move |ev: MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let card = if let Some(card) = ev
                .current_target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                card
            } else {
                return;
            };
            let rect = card.get_bounding_client_rect();
            set_position.set(SpotlightPosition::from_client(
                f64::from(ev.client_x()),
                f64::from(ev.client_y()),
                rect.left(),
                rect.top(),
            ));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, set_position);
        }
    };

    let lift = if hover_effect {
        "hover:-translate-y-1.5 hover:shadow-2xl hover:shadow-cyan-500/10"
    } else {
        ""
    };

    view! {
        <div
            on:mousemove=on_mouse_move
            class=format!(
                "group relative overflow-hidden rounded-[2rem] sm:rounded-[2.5rem] transition-all duration-500 glass-card glass-shine {lift} {class}",
            )
        >
            <div
                aria-hidden="true"
                class="pointer-events-none absolute -inset-px z-0 rounded-[inherit] opacity-0 transition-opacity duration-300 group-hover:opacity-100"
                style:background=move || position.get().gradient()
            />
            <div class="relative z-10 h-full w-full">{children()}</div>
        </div>
    }
}
