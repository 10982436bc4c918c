//! The `prefers-color-scheme` media query.

use numsys_theme::{ColorSchemeSource, SchemeCallback, Subscription};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent, Window};

use crate::events::EventListener;
use crate::js_error;

/// Media query matched when the OS prefers a dark color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// [`ColorSchemeSource`] backed by `window.matchMedia`.
///
/// Without `matchMedia` support the source reports "light" and never
/// notifies.
#[derive(Debug, Clone)]
pub struct MediaQuery {
    list: Option<MediaQueryList>,
}

impl MediaQuery {
    /// Evaluates [`DARK_SCHEME_QUERY`] on `window`.
    #[must_use]
    pub fn dark_scheme(window: &Window) -> Self {
        let list = match window.match_media(DARK_SCHEME_QUERY) {
            Ok(list) => list,
            Err(err) => {
                warn!(error = %js_error(&err), "matchMedia failed");
                None
            }
        };
        Self { list }
    }
}

impl ColorSchemeSource for MediaQuery {
    fn prefers_dark(&self) -> bool {
        self.list.as_ref().is_some_and(MediaQueryList::matches)
    }

    fn subscribe(&self, mut on_change: SchemeCallback) -> Subscription {
        let Some(list) = &self.list else {
            return Subscription::inert();
        };

        let listener = EventListener::new(list, "change", move |event| {
            let event: MediaQueryListEvent = event.unchecked_into();
            on_change(event.matches());
        });
        match listener {
            Ok(listener) => Subscription::new(move || drop(listener)),
            Err(err) => {
                warn!(error = %js_error(&err), "Cannot watch color scheme changes");
                Subscription::inert()
            }
        }
    }
}
