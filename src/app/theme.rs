use leptos::prelude::*;

use crate::theme::{DomThemeHost, ThemeStore};

/// What consumers of the theme get from context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub is_dark: Signal<bool>,
    pub toggle: Callback<()>,
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Owns the one [`ThemeStore`] of the page and shares it through context.
///
/// The flag starts dark and is synced from the `<html>` class once after
/// mount. The bootstrap script already painted the right theme, so the sync
/// changes nothing visible.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let store = StoredValue::new(ThemeStore::new(DomThemeHost));
    let (is_dark, set_is_dark) = signal(true);

    Effect::watch(
        || (),
        move |_, _, _| {
            store.update_value(|s| {
                s.initialize();
            });
            set_is_dark.set(store.with_value(|s| s.is_dark()));
        },
        true,
    );

    let toggle = Callback::new(move |_: ()| {
        store.update_value(|s| {
            s.toggle();
        });
        set_is_dark.set(store.with_value(|s| s.is_dark()));
    });

    provide_context(ThemeContext {
        is_dark: is_dark.into(),
        toggle,
    });

    children()
}
