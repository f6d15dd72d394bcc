use crate::content::Profile;
use crate::error::CapabilityError;

#[cfg(feature = "hydrate")]
pub use browser::BrowserShare;

/// How long the "Copied!" confirmation stays up after a clipboard fallback.
pub const SHARE_CONFIRMATION_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn for_profile(profile: &Profile, url: impl Into<String>) -> Self {
        Self {
            title: profile.headline(),
            text: format!("Check out the professional profile of {}.", profile.name),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The platform share sheet completed.
    Shared,
    /// The link went to the clipboard; show the confirmation.
    Copied,
    /// Nothing worked. Nothing is shown either.
    Unavailable,
}

/// Optional platform features the share button can use, in the order they
/// are tried.
#[allow(async_fn_in_trait)]
pub trait ShareCapabilities {
    fn native_share_supported(&self) -> bool;
    async fn native_share(&self, payload: &SharePayload) -> Result<(), CapabilityError>;
    async fn copy_text(&self, text: &str) -> Result<(), CapabilityError>;
}

/// Native share, then clipboard, then give up quietly.
///
/// A rejected or cancelled share sheet falls through to the clipboard the
/// same way a missing one does.
pub async fn share_with_fallback<C: ShareCapabilities>(
    caps: &C,
    payload: &SharePayload,
) -> ShareOutcome {
    if caps.native_share_supported() {
        match caps.native_share(payload).await {
            Ok(()) => return ShareOutcome::Shared,
            Err(e) => log::debug!("native share did not complete ({e}), copying link instead"),
        }
    }
    match caps.copy_text(&payload.url).await {
        Ok(()) => ShareOutcome::Copied,
        Err(e) => {
            log::warn!("could not copy link: {e}");
            ShareOutcome::Unavailable
        }
    }
}

/// Self-expiring confirmation flag.
///
/// Visible while a deadline is pending. Every `show` moves the deadline, so
/// an expiry meant for an earlier show finds the deadline still ahead of it
/// and leaves the flag alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShareConfirmation {
    hide_at: Option<u64>,
}

impl ShareConfirmation {
    /// Show (or re-arm) the confirmation; returns the new deadline.
    pub fn show(&mut self, now_ms: u64) -> u64 {
        let deadline = now_ms + SHARE_CONFIRMATION_MS;
        self.hide_at = Some(deadline);
        deadline
    }

    /// React to a finished share. Only a clipboard copy is confirmed; the
    /// returned deadline is what the hide timer should be started with.
    pub fn record(&mut self, outcome: ShareOutcome, now_ms: u64) -> Option<u64> {
        match outcome {
            ShareOutcome::Copied => Some(self.show(now_ms)),
            ShareOutcome::Shared | ShareOutcome::Unavailable => None,
        }
    }

    /// Hide if the current deadline has been reached. Returns visibility.
    pub fn expire(&mut self, now_ms: u64) -> bool {
        if self.hide_at.is_some_and(|deadline| now_ms >= deadline) {
            self.hide_at = None;
        }
        self.is_visible()
    }

    pub fn is_visible(&self) -> bool {
        self.hide_at.is_some()
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use js_sys::{Function, Object, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use super::{ShareCapabilities, SharePayload};
    use crate::error::CapabilityError;

    /// Probes `navigator.share` and `navigator.clipboard.writeText` at call
    /// time; either may be missing in older browsers or insecure contexts.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserShare;

    fn navigator() -> Option<JsValue> {
        web_sys::window().map(|w| w.navigator().into())
    }

    fn method(target: &JsValue, name: &str) -> Option<Function> {
        Reflect::get(target, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }

    fn rejected(e: JsValue) -> CapabilityError {
        CapabilityError::Rejected(e.as_string().unwrap_or_else(|| format!("{e:?}")))
    }

    async fn settle(called: Result<JsValue, JsValue>) -> Result<(), CapabilityError> {
        let promise = called.map_err(rejected)?.dyn_into::<Promise>().map_err(rejected)?;
        JsFuture::from(promise).await.map(|_| ()).map_err(rejected)
    }

    impl ShareCapabilities for BrowserShare {
        fn native_share_supported(&self) -> bool {
            navigator().and_then(|n| method(&n, "share")).is_some()
        }

        async fn native_share(&self, payload: &SharePayload) -> Result<(), CapabilityError> {
            let nav = navigator().ok_or(CapabilityError::Unavailable("navigator"))?;
            let share = method(&nav, "share").ok_or(CapabilityError::Unavailable("navigator.share"))?;
            let data = Object::new();
            for (key, value) in [
                ("title", &payload.title),
                ("text", &payload.text),
                ("url", &payload.url),
            ] {
                Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value))
                    .map_err(rejected)?;
            }
            settle(share.call1(&nav, &data)).await
        }

        async fn copy_text(&self, text: &str) -> Result<(), CapabilityError> {
            let nav = navigator().ok_or(CapabilityError::Unavailable("navigator"))?;
            let clipboard = Reflect::get(&nav, &JsValue::from_str("clipboard"))
                .ok()
                .filter(|c| !c.is_undefined() && !c.is_null())
                .ok_or(CapabilityError::Unavailable("navigator.clipboard"))?;
            let write = method(&clipboard, "writeText")
                .ok_or(CapabilityError::Unavailable("clipboard.writeText"))?;
            settle(write.call1(&clipboard, &JsValue::from_str(text))).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROFILE;
    use std::cell::RefCell;

    struct FakeCaps {
        native: Option<Result<(), CapabilityError>>,
        clipboard: Result<(), CapabilityError>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeCaps {
        fn new(
            native: Option<Result<(), CapabilityError>>,
            clipboard: Result<(), CapabilityError>,
        ) -> Self {
            Self {
                native,
                clipboard,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ShareCapabilities for FakeCaps {
        fn native_share_supported(&self) -> bool {
            self.native.is_some()
        }

        async fn native_share(&self, payload: &SharePayload) -> Result<(), CapabilityError> {
            self.calls.borrow_mut().push(format!("share:{}", payload.title));
            self.native
                .clone()
                .unwrap_or(Err(CapabilityError::Unavailable("navigator.share")))
        }

        async fn copy_text(&self, text: &str) -> Result<(), CapabilityError> {
            self.calls.borrow_mut().push(format!("copy:{text}"));
            self.clipboard.clone()
        }
    }

    fn payload() -> SharePayload {
        SharePayload::for_profile(&PROFILE, "https://example.com/#about")
    }

    #[test]
    fn test_payload_for_profile() {
        let p = payload();
        assert_eq!(p.title, "Abid Uddin Ahmed | Director");
        assert!(p.text.contains(PROFILE.name));
        assert_eq!(p.url, "https://example.com/#about");
    }

    #[tokio::test]
    async fn test_native_share_preferred() {
        let caps = FakeCaps::new(Some(Ok(())), Ok(()));
        assert_eq!(share_with_fallback(&caps, &payload()).await, ShareOutcome::Shared);
        assert_eq!(caps.calls.borrow().len(), 1);
        assert!(caps.calls.borrow()[0].starts_with("share:"));
    }

    #[tokio::test]
    async fn test_missing_native_share_copies_url() {
        let caps = FakeCaps::new(None, Ok(()));
        assert_eq!(share_with_fallback(&caps, &payload()).await, ShareOutcome::Copied);
        assert_eq!(
            *caps.calls.borrow(),
            vec!["copy:https://example.com/#about".to_string()]
        );
    }

    #[tokio::test]
    async fn test_cancelled_share_falls_back_to_clipboard() {
        let caps = FakeCaps::new(
            Some(Err(CapabilityError::Rejected("AbortError".to_string()))),
            Ok(()),
        );
        assert_eq!(share_with_fallback(&caps, &payload()).await, ShareOutcome::Copied);
        assert_eq!(caps.calls.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_nothing_available_is_silent() {
        let caps = FakeCaps::new(
            None,
            Err(CapabilityError::Unavailable("navigator.clipboard")),
        );
        assert_eq!(
            share_with_fallback(&caps, &payload()).await,
            ShareOutcome::Unavailable
        );
    }

    #[test]
    fn test_confirmation_hides_after_delay() {
        let mut confirmation = ShareConfirmation::default();
        assert!(!confirmation.is_visible());

        let deadline = confirmation.show(10_000);
        assert_eq!(deadline, 12_000);
        assert!(confirmation.is_visible());

        assert!(confirmation.expire(10_001));
        assert!(confirmation.expire(11_999));
        assert!(!confirmation.expire(12_000));
        assert!(!confirmation.is_visible());
    }

    #[test]
    fn test_second_show_rearms_window() {
        let mut confirmation = ShareConfirmation::default();
        let first = confirmation.show(0);
        let second = confirmation.show(1_500);
        assert_eq!(second, 3_500);

        // the first show's timer fires and must not hide the second
        assert!(confirmation.expire(first));
        assert!(confirmation.expire(3_499));
        assert!(!confirmation.expire(second));
    }

    #[test]
    fn test_only_clipboard_copy_is_confirmed() {
        let mut confirmation = ShareConfirmation::default();
        assert_eq!(confirmation.record(ShareOutcome::Shared, 1_000), None);
        assert_eq!(confirmation.record(ShareOutcome::Unavailable, 1_000), None);
        assert!(!confirmation.is_visible());

        assert_eq!(confirmation.record(ShareOutcome::Copied, 1_000), Some(3_000));
        assert!(confirmation.is_visible());
        assert!(!confirmation.expire(3_000));
    }

    #[tokio::test]
    async fn test_cancelled_share_then_copy_shows_confirmation() {
        let caps = FakeCaps::new(
            Some(Err(CapabilityError::Rejected("AbortError".to_string()))),
            Ok(()),
        );
        let mut confirmation = ShareConfirmation::default();
        let outcome = share_with_fallback(&caps, &payload()).await;
        assert_eq!(confirmation.record(outcome, 500), Some(2_500));
        assert!(confirmation.is_visible());

        let caps = FakeCaps::new(Some(Ok(())), Ok(()));
        let mut confirmation = ShareConfirmation::default();
        let outcome = share_with_fallback(&caps, &payload()).await;
        assert_eq!(confirmation.record(outcome, 500), None);
        assert!(!confirmation.is_visible());
    }

    #[test]
    fn test_expire_while_hidden_is_noop() {
        let mut confirmation = ShareConfirmation::default();
        assert!(!confirmation.expire(50_000));
        assert_eq!(confirmation, ShareConfirmation::default());
    }
}
