//! Applying the theme to the `<html>` element.

use numsys_theme::{Theme, ThemeRoot};
use tracing::warn;
use web_sys::{Document, Element};

use crate::js_error;

/// [`ThemeRoot`] that sets exactly one of the `light`/`dark` classes on the
/// document element.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    element: Option<Element>,
}

impl DocumentRoot {
    #[must_use]
    pub fn new(document: &Document) -> Self {
        Self {
            element: document.document_element(),
        }
    }
}

impl ThemeRoot for DocumentRoot {
    fn apply(&mut self, theme: Theme) {
        let Some(element) = &self.element else {
            return;
        };
        let classes = element.class_list();
        let applied = classes
            .remove_2(Theme::Light.as_str(), Theme::Dark.as_str())
            .and_then(|()| classes.add_1(theme.as_str()));
        if let Err(err) = applied {
            warn!(theme = %theme, error = %js_error(&err), "Failed to apply theme class");
        }
    }
}
