//! Textarea adapter for the shared auto-resize helper.

use web_sys::HtmlTextAreaElement;
use widget_host::{HostError, TextAreaElement};

use crate::js_error::describe;

/// Comment textarea element exposed through [`TextAreaElement`].
#[derive(Debug, Clone)]
pub struct WebTextArea(HtmlTextAreaElement);

impl WebTextArea {
    /// Wraps a DOM textarea.
    pub fn new(element: HtmlTextAreaElement) -> Self {
        Self(element)
    }

    /// Borrows the wrapped DOM element.
    pub fn element(&self) -> &HtmlTextAreaElement {
        &self.0
    }
}

impl From<HtmlTextAreaElement> for WebTextArea {
    fn from(element: HtmlTextAreaElement) -> Self {
        Self::new(element)
    }
}

impl TextAreaElement for WebTextArea {
    fn scroll_height(&self) -> i32 {
        self.0.scroll_height()
    }

    fn set_style_height(&self, value: &str) -> Result<(), HostError> {
        self.0
            .style()
            .set_property("height", value)
            .map_err(|err| HostError::Style(describe(&err)))
    }
}
