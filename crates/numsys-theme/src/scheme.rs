//! OS color-scheme preference sources and change subscriptions.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

/// Callback invoked with the new "prefers dark" value.
pub type SchemeCallback = Box<dyn FnMut(bool)>;

/// A source of the user's preferred color scheme.
pub trait ColorSchemeSource {
    /// Reports whether a dark color scheme is currently preferred.
    fn prefers_dark(&self) -> bool;

    /// Registers `on_change` to be called whenever the preference changes.
    ///
    /// The callback stays registered until the returned [`Subscription`] is
    /// unsubscribed or dropped.
    fn subscribe(&self, on_change: SchemeCallback) -> Subscription;
}

/// Guard for a registered callback.
///
/// Calling [`Subscription::unsubscribe`] or dropping the guard removes the
/// callback exactly once.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Creates a guard that runs `cancel` on unsubscribe.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Creates a guard for a source that never notifies.
    pub fn inert() -> Self {
        Self { cancel: None }
    }

    /// Returns `true` until the guard has been cancelled.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    /// Removes the callback now.
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// A preference that never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedColorScheme {
    prefers_dark: bool,
}

impl FixedColorScheme {
    #[must_use]
    pub const fn new(prefers_dark: bool) -> Self {
        Self { prefers_dark }
    }
}

impl ColorSchemeSource for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }

    fn subscribe(&self, _on_change: SchemeCallback) -> Subscription {
        Subscription::inert()
    }
}

type SharedCallback = Rc<RefCell<SchemeCallback>>;

#[derive(Default)]
struct ManualInner {
    prefers_dark: Cell<bool>,
    callbacks: RefCell<BTreeMap<u64, SharedCallback>>,
    next_id: Cell<u64>,
}

/// A preference changed programmatically with [`ManualColorScheme::set_prefers_dark`].
///
/// Clones share state, so one handle can be given to a controller while
/// another drives changes.
#[derive(Clone, Default)]
pub struct ManualColorScheme {
    inner: Rc<ManualInner>,
}

impl ManualColorScheme {
    #[must_use]
    pub fn new(prefers_dark: bool) -> Self {
        let scheme = Self::default();
        scheme.inner.prefers_dark.set(prefers_dark);
        scheme
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.callbacks.borrow().len()
    }

    /// Changes the preference and notifies subscribers if it differs.
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        if self.inner.prefers_dark.replace(prefers_dark) == prefers_dark {
            return;
        }

        // Snapshot so callbacks may unsubscribe while being notified.
        let callbacks: Vec<SharedCallback> =
            self.inner.callbacks.borrow().values().map(Rc::clone).collect();
        debug!(
            scheme.prefers_dark = prefers_dark,
            scheme.subscribers = callbacks.len(),
            "Color scheme changed"
        );
        for callback in callbacks {
            let mut callback = callback.borrow_mut();
            (*callback)(prefers_dark);
        }
    }
}

impl fmt::Debug for ManualColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualColorScheme")
            .field("prefers_dark", &self.inner.prefers_dark.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl ColorSchemeSource for ManualColorScheme {
    fn prefers_dark(&self) -> bool {
        self.inner.prefers_dark.get()
    }

    fn subscribe(&self, on_change: SchemeCallback) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .callbacks
            .borrow_mut()
            .insert(id, Rc::new(RefCell::new(on_change)));

        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.callbacks.borrow_mut().remove(&id);
            }
        })
    }
}
