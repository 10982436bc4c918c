//! The converter page: markup built from Rust and DOM events dispatched to
//! the session and theme controller.

use std::cell::RefCell;
use std::rc::Rc;

use numsys::Base;
use numsys_theme::ListenerId;
use tracing::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlSelectElement,
};

use crate::app::Converter;
use crate::events::EventListener;
use crate::view::{self, ViewModel};

struct Elements {
    root: Element,
    select: HtmlSelectElement,
    input: HtmlInputElement,
    toggle: HtmlButtonElement,
    error: HtmlElement,
    values: Vec<Element>,
}

fn create<T: JsCast>(document: &Document, tag: &str, class: &str) -> Result<T, JsValue> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    element.dyn_into::<T>().map_err(JsValue::from)
}

fn text(document: &Document, tag: &str, class: &str, content: &str) -> Result<Element, JsValue> {
    let element: Element = create(document, tag, class)?;
    element.set_text_content(Some(content));
    Ok(element)
}

impl Elements {
    fn build(document: &Document) -> Result<Self, JsValue> {
        let root: Element = create(document, "div", "numsys")?;

        let header: Element = create(document, "header", "numsys-header")?;
        let child: Element = text(document, "h1", "numsys-title", view::TITLE)?;
        header.append_child(&child)?;
        let child: Element = text(document, "p", "numsys-subtitle", view::SUBTITLE)?;
        header.append_child(&child)?;
        root.append_child(&header)?;

        let controls: Element = create(document, "section", "numsys-input")?;
        let select: HtmlSelectElement = create(document, "select", "numsys-select")?;
        select.set_attribute("aria-label", view::SELECT_LABEL)?;
        for base in Base::ALL {
            let option = text(document, "option", "", base.label())?;
            option.set_attribute("value", base.name())?;
            select.append_child(&option)?;
        }
        controls.append_child(&select)?;

        let input: HtmlInputElement = create(document, "input", "numsys-field")?;
        input.set_type("text");
        input.set_attribute("autocomplete", "off")?;
        controls.append_child(&input)?;

        let toggle: HtmlButtonElement = create(document, "button", "numsys-theme-toggle")?;
        toggle.set_type("button");
        toggle.set_attribute("aria-label", view::TOGGLE_LABEL)?;
        controls.append_child(&toggle)?;

        let error: HtmlElement = create(document, "p", "numsys-error")?;
        error.set_hidden(true);
        controls.append_child(&error)?;
        root.append_child(&controls)?;

        let grid: Element = create(document, "section", "numsys-results")?;
        let mut values = Vec::with_capacity(Base::ALL.len());
        for base in Base::ALL {
            let card: Element = create(document, "div", "numsys-result")?;
            card.set_attribute("data-base", base.name())?;
            let child: Element = text(document, "h3", "numsys-result-title", base.label())?;
            card.append_child(&child)?;
            let value = text(document, "p", "numsys-result-value", "0")?;
            card.append_child(&value)?;
            grid.append_child(&card)?;
            values.push(value);
        }
        root.append_child(&grid)?;

        let footer: Element = create(document, "footer", "numsys-footer")?;
        let child: Element = text(document, "p", "", view::FOOTER)?;
        footer.append_child(&child)?;
        root.append_child(&footer)?;

        Ok(Self {
            root,
            select,
            input,
            toggle,
            error,
            values,
        })
    }

    fn render(&self, view: &ViewModel) {
        self.select.set_value(view.base.name());
        self.input.set_placeholder(&view.placeholder);
        if self.input.value() != view.value {
            self.input.set_value(&view.value);
        }
        self.toggle.set_text_content(Some(view.toggle_icon));

        match &view.error {
            Some(message) => {
                self.error.set_text_content(Some(message.as_str()));
                self.error.set_hidden(false);
            }
            None => {
                self.error.set_text_content(None);
                self.error.set_hidden(true);
            }
        }

        for (element, (_, text)) in self.values.iter().zip(&view.results) {
            element.set_text_content(Some(text.as_str()));
        }
    }
}

/// A converter page attached to the document.
///
/// Call [`MountedConverter::unmount`] to detach every listener, stop
/// following the OS color scheme and remove the markup.
#[wasm_bindgen]
pub struct MountedConverter {
    state: Rc<RefCell<Converter>>,
    elements: Rc<Elements>,
    listeners: Vec<EventListener>,
    theme_listener: Option<ListenerId>,
}

#[wasm_bindgen]
impl MountedConverter {
    /// The stored input.
    #[wasm_bindgen(getter)]
    pub fn value(&self) -> String {
        self.state.borrow().session().value().to_string()
    }

    /// Detaches the page. Safe to call more than once.
    pub fn unmount(&mut self) {
        self.listeners.clear();
        let mut state = self.state.borrow_mut();
        if let Some(id) = self.theme_listener.take() {
            state.theme().borrow_mut().remove_listener(id);
        }
        state.dispose();
        self.elements.root.remove();
        info!("Converter page unmounted");
    }
}

/// Builds the converter page inside the element with id `container_id`.
///
/// # Errors
///
/// Fails when there is no document, no element with that id, or a DOM call
/// throws.
#[wasm_bindgen]
pub fn mount(container_id: &str) -> Result<MountedConverter, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id {container_id:?}")))?;

    let state = Rc::new(RefCell::new(Converter::from_window(&window)?));
    let elements = Rc::new(Elements::build(&document)?);
    elements.render(&state.borrow().view());

    let mut listeners = Vec::with_capacity(3);

    listeners.push({
        let state = Rc::clone(&state);
        let elements = Rc::clone(&elements);
        let target = elements.input.clone();
        EventListener::new(&target, "input", move |_| {
            let mut state = state.borrow_mut();
            let candidate = elements.input.value();
            if !state.session_mut().input(&candidate) {
                // Revert the field to the last accepted value.
                elements.input.set_value(state.session().value());
            }
            elements.render(&state.view());
        })?
    });

    listeners.push({
        let state = Rc::clone(&state);
        let elements = Rc::clone(&elements);
        let target = elements.select.clone();
        EventListener::new(&target, "change", move |_| {
            let mut state = state.borrow_mut();
            match elements.select.value().parse::<Base>() {
                Ok(base) => state.session_mut().select_base(base),
                Err(err) => warn!(error = %err, "Unexpected base option"),
            }
            elements.render(&state.view());
        })?
    });

    listeners.push({
        let state = Rc::clone(&state);
        let elements = Rc::clone(&elements);
        let target = elements.toggle.clone();
        EventListener::new(&target, "click", move |_| {
            let state = state.borrow();
            state.theme().borrow_mut().toggle();
            elements.render(&state.view());
        })?
    });

    // OS-driven changes arrive outside any page event; keep the icon current.
    let theme_listener = {
        let toggle = elements.toggle.clone();
        let state = state.borrow();
        let id = state
            .theme()
            .borrow_mut()
            .on_change(move |theme| toggle.set_text_content(Some(theme.toggle_icon())));
        Some(id)
    };

    // Markup goes in only once every handler is attached.
    container.append_child(&elements.root)?;

    info!(container = container_id, "Converter page mounted");
    Ok(MountedConverter {
        state,
        elements,
        listeners,
        theme_listener,
    })
}
