use leptos::prelude::*;
use leptos_use::{use_timeout_fn, use_window_scroll, UseTimeoutFnReturn};

use crate::icon::Icon;
use crate::navigation::{ScrollSpy, Section};
use crate::share::{ShareConfirmation, SHARE_CONFIRMATION_MS};

use super::icon::SvgIcon;
use super::theme::use_theme;

/// Top offset of a section's anchor element, if it is on the page.
fn section_offset(section: Section) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section.id()))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|el| f64::from(el.offset_top()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section;
        None
    }
}

/// Smooth-scroll a section to the top of the viewport. Missing anchors are
/// skipped.
fn scroll_into_view(section: Section) {
    #[cfg(feature = "hydrate")]
    {
        let el = if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section.id()))
        {
            el
        } else {
            log::debug!("no #{} on the page, not scrolling", section.id());
            return;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section;
    }
}

#[cfg(feature = "hydrate")]
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[component]
pub fn BottomDock() -> impl IntoView {
    let theme = use_theme();
    let spy = RwSignal::new(ScrollSpy::new());
    let active = Memo::new(move |_| spy.with(|s| s.active()));

    // use_window_scroll listens passively and detaches on unmount
    let (_, scroll_y) = use_window_scroll();
    Effect::watch(
        move || scroll_y.get(),
        move |y, _, _| {
            spy.update(|s| {
                s.observe(*y, section_offset);
            });
        },
        false,
    );

    let scroll_to = move |section: Section| {
        scroll_into_view(section);
        spy.update(|s| s.navigate(section));
    };

    let confirmation = RwSignal::new(ShareConfirmation::default());
    let copied = Memo::new(move |_| confirmation.with(|c| c.is_visible()));
    // The timer is handed the deadline it was started for; a restart clears
    // the pending one and moves the deadline.
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |deadline: u64| {
            confirmation.update(|c| {
                c.expire(deadline);
            });
        },
        SHARE_CONFIRMATION_MS as f64,
    );

    let on_share = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::content::PROFILE;
            use crate::share::{share_with_fallback, BrowserShare, SharePayload};

            let start = start.clone();
            leptos::task::spawn_local(async move {
                let url = web_sys::window()
                    .and_then(|w| w.location().href().ok())
                    .unwrap_or_else(|| PROFILE.site_url.to_string());
                let payload = SharePayload::for_profile(&PROFILE, url);
                let outcome = share_with_fallback(&BrowserShare, &payload).await;
                let deadline = confirmation.try_update(|c| c.record(outcome, now_ms()));
                if let Some(Some(deadline)) = deadline {
                    start(deadline);
                }
            });
        }
    };

    view! {
        <div class="fixed bottom-4 sm:bottom-6 left-1/2 -translate-x-1/2 z-50 w-[calc(100%-1.5rem)] max-w-xs sm:max-w-md">
            <nav
                class="dock-enter flex items-center justify-between px-2 py-1 sm:px-3 sm:py-1.5 bg-white/85 dark:bg-slate-900/85 backdrop-blur-2xl border border-white/50 dark:border-white/10 rounded-full shadow-2xl shadow-black/10 dark:shadow-black/30 ring-1 ring-black/5 dark:ring-white/5"
                role="navigation"
                aria-label="Main navigation"
            >
                <ul class="flex items-center list-none m-0 p-0">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            let is_active = Signal::derive(move || active.get() == section);
                            view! {
                                <li>
                                    <NavItem section active=is_active on_click=scroll_to />
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div aria-hidden="true" class="w-px h-5 bg-slate-200 dark:bg-white/10 mx-1 shrink-0" />

                <div class="flex items-center">
                    <button
                        type="button"
                        on:click=move |_| theme.toggle.run(())
                        class="p-3 rounded-full text-slate-400 hover:text-amber-500 dark:hover:text-amber-400 hover:bg-slate-100/80 dark:hover:bg-white/5 transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-cyan-500"
                        aria-label=move || {
                            if theme.is_dark.get() {
                                "Switch to light mode"
                            } else {
                                "Switch to dark mode"
                            }
                        }
                    >
                        {move || {
                            let icon = if theme.is_dark.get() { Icon::Moon } else { Icon::Sun };
                            view! { <SvgIcon icon /> }
                        }}
                    </button>

                    <div class="relative">
                        <button
                            type="button"
                            on:click=on_share
                            class="p-3 rounded-full text-slate-400 hover:text-cyan-500 hover:bg-slate-100/80 dark:hover:bg-white/5 transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-cyan-500"
                            aria-label="Share this page"
                        >
                            <SvgIcon icon=Icon::Share />
                        </button>
                        <Show when=move || copied.get()>
                            <div
                                role="status"
                                aria-live="polite"
                                class="dock-tooltip absolute right-0 -top-10 whitespace-nowrap px-3 py-1.5 bg-slate-900 dark:bg-white text-white dark:text-slate-900 text-xs font-bold rounded-lg shadow-xl pointer-events-none"
                            >
                                "Copied!"
                                <div
                                    aria-hidden="true"
                                    class="absolute -bottom-1 right-3 w-2 h-2 bg-slate-900 dark:bg-white rotate-45"
                                />
                            </div>
                        </Show>
                    </div>
                </div>
            </nav>
        </div>
    }
}

#[component]
fn NavItem<F>(section: Section, active: Signal<bool>, on_click: F) -> impl IntoView
where
    F: Fn(Section) + Copy + Send + Sync + 'static,
{
    view! {
        <button
            type="button"
            on:click=move |_| on_click(section)
            class="group relative p-3 rounded-full focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-cyan-500"
            aria-label=format!("Go to {}", section.label())
            aria-current=move || { if active.get() { "page" } else { "false" } }
        >
            {move || {
                active
                    .get()
                    .then(|| {
                        view! {
                            <span class="dock-active absolute inset-0 bg-cyan-100 dark:bg-cyan-500/20 rounded-full" />
                        }
                    })
            }}
            <span class=move || {
                let tone = if active.get() {
                    "text-cyan-700 dark:text-cyan-300"
                } else {
                    "text-slate-500 group-hover:text-slate-700 dark:group-hover:text-slate-200"
                };
                format!("relative block transition-colors duration-300 {tone}")
            }>
                <SvgIcon icon=Icon::for_section(section) />
            </span>
        </button>
    }
}
