use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Page section that fades up the first time it scrolls into view.
///
/// `animate=false` renders it already revealed (used for the hero, which has
/// to be visible on first paint).
#[component]
pub fn RevealSection(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: String,
    #[prop(default = 0.0)] delay: f64,
    #[prop(default = true)] animate: bool,
    children: Children,
) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_element_visibility(section_ref);
    let (revealed, set_revealed) = signal(!animate);

    // once revealed it stays revealed
    Effect::watch(
        move || visible.get(),
        move |is_visible, _, _| {
            if *is_visible && !revealed.get_untracked() {
                set_revealed.set(true);
            }
        },
        true,
    );

    let style = animate.then(|| format!("transition-delay: {delay}s"));

    view! {
        <section
            node_ref=section_ref
            id=id
            style=style
            class=move || {
                let state = if revealed.get() { "reveal reveal-in" } else { "reveal" };
                format!("w-full max-w-2xl mx-auto px-4 sm:px-6 py-10 sm:py-12 {state} {class}")
            }
        >
            {children()}
        </section>
    }
}
