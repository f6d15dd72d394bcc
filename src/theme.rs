use std::fmt;

use crate::error::CapabilityError;

/// localStorage key holding the visitor's explicit choice.
pub const STORAGE_KEY: &str = "theme";
/// Class on `<html>` that switches the stylesheet to its dark palette.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// The value written under [`STORAGE_KEY`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the theme store is allowed to touch outside its own memory.
pub trait ThemeHost {
    /// Whether the dark marker is currently on the document root.
    fn marker_applied(&self) -> bool;
    fn apply_marker(&self, dark: bool);
    fn persist(&self, theme: Theme) -> Result<(), CapabilityError>;
}

/// Light/dark preference for the lifetime of the tab.
///
/// Starts dark, is corrected once from the marker the bootstrap script already
/// applied, and from then on only changes through [`ThemeStore::toggle`].
#[derive(Debug)]
pub struct ThemeStore<H> {
    host: H,
    is_dark: bool,
    initialized: bool,
}

impl<H: ThemeHost> ThemeStore<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            is_dark: true,
            initialized: false,
        }
    }

    /// Adopt whatever the document root already shows. Only the first call
    /// reads the marker; later calls return the current value untouched.
    pub fn initialize(&mut self) -> bool {
        if !self.initialized {
            self.is_dark = self.host.marker_applied();
            self.initialized = true;
            log::debug!("theme initialized as {}", self.theme());
        }
        self.is_dark
    }

    /// Flip the preference, update the marker and remember it if storage lets us.
    pub fn toggle(&mut self) -> Theme {
        self.is_dark = !self.is_dark;
        let theme = self.theme();
        self.host.apply_marker(self.is_dark);
        if let Err(e) = self.host.persist(theme) {
            log::warn!("theme preference not saved: {e}");
        }
        theme
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.is_dark)
    }
}

/// [`ThemeHost`] backed by `document.documentElement.classList` and
/// `window.localStorage`. Inert when rendering on the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomThemeHost;

impl ThemeHost for DomThemeHost {
    fn marker_applied(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
                .map_or(true, |el| el.class_list().contains(DARK_CLASS))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            true
        }
    }

    fn apply_marker(&self, dark: bool) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = el.class_list().toggle_with_force(DARK_CLASS, dark);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = dark;
        }
    }

    fn persist(&self, theme: Theme) -> Result<(), CapabilityError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(CapabilityError::Unavailable("localStorage"))?;
            storage
                .set_item(STORAGE_KEY, theme.as_str())
                .map_err(|e| CapabilityError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
            Err(CapabilityError::Unavailable("localStorage"))
        }
    }
}

/// Inline script that has to run before first paint.
///
/// An explicit stored choice wins, then a light system preference, otherwise
/// dark. If anything throws, the server-rendered dark class stays.
pub fn bootstrap_script() -> String {
    format!(
        "(function(){{try{{\
var s=localStorage.getItem('{STORAGE_KEY}');\
var l=!!(window.matchMedia&&window.matchMedia('(prefers-color-scheme: light)').matches);\
var d=s==='dark'||(s!=='light'&&!l);\
document.documentElement.classList.toggle('{DARK_CLASS}',d);\
}}catch(e){{}}}})();"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeDocument {
        marker: Cell<bool>,
        stored: RefCell<Option<String>>,
        storage_disabled: Cell<bool>,
    }

    struct FakeHost(Rc<FakeDocument>);

    impl ThemeHost for FakeHost {
        fn marker_applied(&self) -> bool {
            self.0.marker.get()
        }

        fn apply_marker(&self, dark: bool) {
            self.0.marker.set(dark);
        }

        fn persist(&self, theme: Theme) -> Result<(), CapabilityError> {
            if self.0.storage_disabled.get() {
                return Err(CapabilityError::Unavailable("localStorage"));
            }
            *self.0.stored.borrow_mut() = Some(theme.to_string());
            Ok(())
        }
    }

    fn store_with_marker(dark: bool) -> (ThemeStore<FakeHost>, Rc<FakeDocument>) {
        let doc = Rc::new(FakeDocument::default());
        doc.marker.set(dark);
        (ThemeStore::new(FakeHost(doc.clone())), doc)
    }

    #[test]
    fn test_defaults_to_dark_before_initialize() {
        let (store, _) = store_with_marker(false);
        assert!(store.is_dark());
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_initialize_adopts_marker() {
        let (mut store, doc) = store_with_marker(false);
        assert!(!store.initialize());
        assert!(!store.is_dark());
        // reading must not write anything back
        assert!(!doc.marker.get());
        assert!(doc.stored.borrow().is_none());

        let (mut store, _) = store_with_marker(true);
        assert!(store.initialize());
    }

    #[test]
    fn test_initialize_runs_once() {
        let (mut store, doc) = store_with_marker(false);
        store.initialize();
        doc.marker.set(true);
        assert!(!store.initialize());
    }

    #[test]
    fn test_toggle_updates_marker_and_storage() {
        let (mut store, doc) = store_with_marker(true);
        store.initialize();

        assert_eq!(store.toggle(), Theme::Light);
        assert!(!store.is_dark());
        assert!(!doc.marker.get());
        assert_eq!(doc.stored.borrow().as_deref(), Some("light"));

        assert_eq!(store.toggle(), Theme::Dark);
        assert!(doc.marker.get());
        assert_eq!(doc.stored.borrow().as_deref(), Some("dark"));
    }

    #[test]
    fn test_even_toggles_round_trip() {
        let (mut store, doc) = store_with_marker(false);
        *doc.stored.borrow_mut() = Some("light".to_string());
        store.initialize();

        store.toggle();
        store.toggle();

        assert!(!store.is_dark());
        assert!(!doc.marker.get());
        assert_eq!(doc.stored.borrow().as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_survives_disabled_storage() {
        let (mut store, doc) = store_with_marker(true);
        doc.storage_disabled.set(true);
        store.initialize();

        assert_eq!(store.toggle(), Theme::Light);
        assert!(!store.is_dark());
        assert!(!doc.marker.get());
        assert!(doc.stored.borrow().is_none());
    }

    #[test]
    fn test_storage_encoding() {
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::Light.as_str(), "light");
        assert_eq!(Theme::from_dark(false), Theme::Light);
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_bootstrap_script_uses_shared_constants() {
        let script = bootstrap_script();
        assert!(script.contains("localStorage.getItem('theme')"));
        assert!(script.contains("classList.toggle('dark',d)"));
        assert!(script.contains("prefers-color-scheme: light"));
        assert!(script.starts_with("(function(){try{"));
        assert!(script.ends_with("}catch(e){}})();"));
    }
}
