//! The theme state machine.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::scheme::{ColorSchemeSource, Subscription};
use crate::store::ThemeStore;
use crate::theme::Theme;

/// The visual root a theme is applied to.
///
/// In a browser this is the `<html>` element; a terminal surface may simply
/// record the palette to draw with.
pub trait ThemeRoot {
    fn apply(&mut self, theme: Theme);
}

impl<F> ThemeRoot for F
where
    F: FnMut(Theme),
{
    fn apply(&mut self, theme: Theme) {
        self(theme);
    }
}

/// Identifier for a registered theme change listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

/// Light/dark theme state with explicit persistence.
///
/// - [`ThemeController::init`] adopts the persisted preference, or the OS
///   preference when none exists, and applies it to the root at once.
/// - [`ThemeController::toggle`] flips, persists and applies.
/// - [`ThemeController::os_preference_changed`] adopts the OS preference only
///   while no explicit preference is persisted, and never persists it.
///
/// Listeners run while the controller is mutably borrowed; they must not call
/// back into it.
pub struct ThemeController<S, R> {
    store: S,
    root: R,
    current: Theme,
    listeners: BTreeMap<ListenerId, Box<dyn Fn(Theme)>>,
    next_listener_id: u64,
}

impl<S, R> fmt::Debug for ThemeController<S, R>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("store", &self.store)
            .field("current", &self.current)
            .field("listeners", &format!("{} listeners", self.listeners.len()))
            .finish_non_exhaustive()
    }
}

impl<S, R> ThemeController<S, R>
where
    S: ThemeStore,
    R: ThemeRoot,
{
    /// Derives the initial theme and applies it to `root`.
    ///
    /// A persisted preference wins over the OS preference reported by
    /// `scheme`. An unreadable or unrecognized persisted value counts as no
    /// preference.
    pub fn init(store: S, mut root: R, scheme: &dyn ColorSchemeSource) -> Self {
        let current = match persisted(&store) {
            Some(theme) => {
                info!(theme = %theme, "Theme restored from stored preference");
                theme
            }
            None => {
                let theme = Theme::from_prefers_dark(scheme.prefers_dark());
                info!(theme = %theme, "Theme derived from OS preference");
                theme
            }
        };
        root.apply(current);

        Self {
            store,
            root,
            current,
            listeners: BTreeMap::new(),
            next_listener_id: 1,
        }
    }

    /// Returns the current theme.
    #[must_use]
    pub const fn current(&self) -> Theme {
        self.current
    }

    /// Returns the backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the visual root.
    #[must_use]
    pub const fn root(&self) -> &R {
        &self.root
    }

    /// Reports whether an explicit preference is persisted.
    #[must_use]
    pub fn has_explicit_preference(&self) -> bool {
        persisted(&self.store).is_some()
    }

    /// Flips the theme, persists the new value and applies it.
    ///
    /// A failed write is logged; the in-memory theme still changes.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        if let Err(err) = self.store.save(next) {
            warn!(theme = %next, error = %err, "Failed to persist theme preference");
        }
        self.set(next);
        next
    }

    /// Handles an OS color-scheme change notification.
    ///
    /// Returns `true` if the notification was adopted. It is ignored while an
    /// explicit preference is persisted. An adopted change is not persisted.
    pub fn os_preference_changed(&mut self, prefers_dark: bool) -> bool {
        if self.has_explicit_preference() {
            debug!(
                scheme.prefers_dark = prefers_dark,
                "OS preference change ignored, explicit preference persisted"
            );
            return false;
        }
        self.set(Theme::from_prefers_dark(prefers_dark));
        true
    }

    /// Forgets the explicit preference and re-derives the theme from `scheme`.
    pub fn reset(&mut self, scheme: &dyn ColorSchemeSource) -> Theme {
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "Failed to clear theme preference");
        }
        let theme = Theme::from_prefers_dark(scheme.prefers_dark());
        self.set(theme);
        theme
    }

    /// Registers a listener called after every change of the current theme.
    pub fn on_change<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(Theme) + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.insert(id, Box::new(listener));
        debug!(theme.listener_id = id.0, "Theme listener registered");
        id
    }

    /// Removes a listener. Returns `false` if `id` was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let removed = self.listeners.remove(&id).is_some();
        if removed {
            debug!(theme.listener_id = id.0, "Theme listener removed");
        }
        removed
    }

    fn set(&mut self, theme: Theme) {
        let from = self.current;
        self.current = theme;
        self.root.apply(theme);
        if from != theme {
            info!(theme.from = %from, theme.to = %theme, "Theme switched");
            for listener in self.listeners.values() {
                listener(theme);
            }
        }
    }
}

fn persisted<S: ThemeStore>(store: &S) -> Option<Theme> {
    match store.load() {
        Ok(theme) => theme,
        Err(err) => {
            warn!(error = %err, "Ignoring stored theme preference");
            None
        }
    }
}

/// Feeds OS color-scheme changes from `scheme` into `controller`.
///
/// The callback holds only a weak reference, so it never keeps the controller
/// alive. Drop or unsubscribe the returned guard on teardown.
pub fn watch_color_scheme<S, R>(
    controller: &Rc<RefCell<ThemeController<S, R>>>,
    scheme: &dyn ColorSchemeSource,
) -> Subscription
where
    S: ThemeStore + 'static,
    R: ThemeRoot + 'static,
{
    let controller = Rc::downgrade(controller);
    scheme.subscribe(Box::new(move |prefers_dark| {
        let Some(controller) = controller.upgrade() else {
            return;
        };
        match controller.try_borrow_mut() {
            Ok(mut controller) => {
                controller.os_preference_changed(prefers_dark);
            }
            Err(_) => warn!("Theme controller busy, OS preference change dropped"),
        }
    }))
}
