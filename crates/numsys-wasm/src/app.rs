//! Converter state wired to browser storage, media query and document root.

use std::cell::RefCell;
use std::rc::Rc;

use numsys::{Base, Session};
use numsys_theme::{Subscription, ThemeController, watch_color_scheme};
use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::media::MediaQuery;
use crate::root::DocumentRoot;
use crate::storage::LocalStorage;
use crate::view::ViewModel;

/// Theme controller persisting to `localStorage` and styling `<html>`.
pub type DomThemeController = ThemeController<LocalStorage, DocumentRoot>;

/// Session plus theme state shared by the headless API and the mounted page.
pub struct Converter {
    session: Session,
    theme: Rc<RefCell<DomThemeController>>,
    scheme_subscription: Option<Subscription>,
}

impl Converter {
    /// Initializes the theme (applying it to `<html>` at once) and starts
    /// following OS color-scheme changes.
    ///
    /// # Errors
    ///
    /// Fails when `window` has no document.
    pub fn from_window(window: &Window) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let scheme = MediaQuery::dark_scheme(window);
        let theme = Rc::new(RefCell::new(ThemeController::init(
            LocalStorage::from_window(window),
            DocumentRoot::new(&document),
            &scheme,
        )));
        let scheme_subscription = Some(watch_color_scheme(&theme, &scheme));

        Ok(Self {
            session: Session::new(),
            theme,
            scheme_subscription,
        })
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    #[must_use]
    pub const fn theme(&self) -> &Rc<RefCell<DomThemeController>> {
        &self.theme
    }

    /// Current page text.
    #[must_use]
    pub fn view(&self) -> ViewModel {
        ViewModel::new(&self.session, self.theme.borrow().current())
    }

    /// Stops following OS color-scheme changes.
    pub fn dispose(&mut self) {
        if let Some(subscription) = self.scheme_subscription.take() {
            debug!("Color scheme subscription released");
            subscription.unsubscribe();
        }
    }
}

/// Headless converter for pages that render their own markup.
///
/// ```javascript
/// const converter = new NumberConverter();
/// converter.selectBase("hexadecimal");
/// if (!converter.input(field.value)) field.value = converter.value;
/// console.log(converter.results().decimal, converter.error);
/// ```
#[wasm_bindgen]
pub struct NumberConverter {
    inner: Converter,
}

#[wasm_bindgen]
impl NumberConverter {
    /// Creates a converter bound to the global `window`.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        Ok(Self {
            inner: Converter::from_window(&window)?,
        })
    }

    /// Handles a change of the input field. Returns `false` if the candidate
    /// was rejected; the field should then be reset to `value`.
    pub fn input(&mut self, candidate: &str) -> bool {
        self.inner.session_mut().input(candidate)
    }

    /// Selects the input base by name (`"binary"`, `"hex"`, `"Octal"`, ...).
    #[wasm_bindgen(js_name = "selectBase")]
    pub fn select_base(&mut self, base: &str) -> Result<(), JsValue> {
        let base: Base = base.parse().map_err(|err| JsValue::from_str(&format!("{err}")))?;
        self.inner.session_mut().select_base(base);
        Ok(())
    }

    /// Name of the selected base.
    #[wasm_bindgen(getter)]
    pub fn base(&self) -> String {
        self.inner.session().base().name().to_string()
    }

    /// The stored input.
    #[wasm_bindgen(getter)]
    pub fn value(&self) -> String {
        self.inner.session().value().to_string()
    }

    /// The current error message.
    #[wasm_bindgen(getter)]
    pub fn error(&self) -> Option<String> {
        self.inner.session().error_message()
    }

    /// Results as `{ decimal, binary, hexadecimal, octal }`.
    pub fn results(&self) -> Result<JsValue, JsValue> {
        let object = js_sys::Object::new();
        for (base, text) in self.inner.session().results().iter() {
            js_sys::Reflect::set(&object, &base.name().into(), &text.into())?;
        }
        Ok(object.into())
    }

    /// The current theme, `"light"` or `"dark"`.
    #[wasm_bindgen(getter)]
    pub fn theme(&self) -> String {
        self.inner.theme().borrow().current().as_str().to_string()
    }

    /// Flips and persists the theme. Returns the new theme.
    #[wasm_bindgen(js_name = "toggleTheme")]
    pub fn toggle_theme(&mut self) -> String {
        self.inner.theme().borrow_mut().toggle().as_str().to_string()
    }

    /// Stops following OS color-scheme changes.
    pub fn dispose(&mut self) {
        self.inner.dispose();
    }
}
