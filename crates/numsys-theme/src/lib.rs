#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! # numsys-theme
//!
//! Light/dark theme state for a converter surface, persisted across sessions
//! and synchronized with the OS color-scheme preference.
//!
//! Nothing here touches a UI runtime. A front end injects three
//! collaborators:
//!
//! - a [`ThemeStore`] holding the explicit preference under [`STORAGE_KEY`]
//! - a [`ColorSchemeSource`] reporting whether dark is preferred
//! - a [`ThemeRoot`] the current theme is applied to
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use numsys_theme::{ManualColorScheme, MemoryStore, Theme, ThemeController, watch_color_scheme};
//!
//! let os = ManualColorScheme::new(true);
//! let controller = Rc::new(RefCell::new(ThemeController::init(
//!     MemoryStore::new(),
//!     |theme: Theme| println!("apply {theme}"),
//!     &os,
//! )));
//! assert_eq!(controller.borrow().current(), Theme::Dark);
//!
//! // Follow the OS until the user makes an explicit choice.
//! let subscription = watch_color_scheme(&controller, &os);
//! os.set_prefers_dark(false);
//! assert_eq!(controller.borrow().current(), Theme::Light);
//!
//! controller.borrow_mut().toggle();
//! os.set_prefers_dark(true);
//! os.set_prefers_dark(false);
//! assert_eq!(controller.borrow().current(), Theme::Dark);
//!
//! subscription.unsubscribe();
//! ```

pub mod controller;
pub mod error;
pub mod scheme;
pub mod store;
pub mod theme;

pub use controller::{ListenerId, ThemeController, ThemeRoot, watch_color_scheme};
pub use error::ThemeError;
pub use scheme::{
    ColorSchemeSource, FixedColorScheme, ManualColorScheme, SchemeCallback, Subscription,
};
pub use store::{MemoryStore, ThemeStore};
pub use theme::{STORAGE_KEY, Theme};
