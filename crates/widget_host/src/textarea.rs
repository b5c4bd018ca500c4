//! Auto-resize for the comment textarea.

use std::cell::{Cell, RefCell};

use crate::HostError;

/// Tallest the textarea grows before it starts scrolling, in CSS pixels.
pub const TEXTAREA_MAX_HEIGHT: i32 = 270;

/// Multi-line text input exposing the measurements needed for auto-resize.
pub trait TextAreaElement {
    /// Full content height including overflow, in CSS pixels.
    fn scroll_height(&self) -> i32;

    /// Sets the inline `height` style property (e.g. `"120px"`).
    fn set_style_height(&self, value: &str) -> Result<(), HostError>;
}

/// Grows or shrinks `element` to fit its content, capped at [`TEXTAREA_MAX_HEIGHT`].
///
/// # Errors
///
/// Returns [`HostError::Style`] when the element rejects the style update.
pub fn resize_text_area<E: TextAreaElement + ?Sized>(element: &E) -> Result<(), HostError> {
    resize_text_area_to(element, TEXTAREA_MAX_HEIGHT)
}

pub(crate) fn resize_text_area_to<E: TextAreaElement + ?Sized>(
    element: &E,
    max_height: i32,
) -> Result<(), HostError> {
    // Collapse first so scroll height reflects the content, not the current box.
    element.set_style_height("0px")?;
    let height = element.scroll_height().min(max_height);
    element.set_style_height(&format!("{height}px"))
}

#[derive(Debug, Default)]
/// In-memory textarea whose scroll height never drops below its own rendered height.
pub struct MemoryTextArea {
    content_height: Cell<i32>,
    style_height: RefCell<String>,
    history: RefCell<Vec<String>>,
}

impl MemoryTextArea {
    /// Creates a textarea whose content measures `content_height` pixels.
    pub fn new(content_height: i32) -> Self {
        Self {
            content_height: Cell::new(content_height),
            ..Self::default()
        }
    }

    /// Replaces the measured content height.
    pub fn set_content_height(&self, content_height: i32) {
        self.content_height.set(content_height);
    }

    /// Current inline height style value.
    pub fn style_height(&self) -> String {
        self.style_height.borrow().clone()
    }

    /// Every height value written so far, oldest first.
    pub fn height_history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    fn rendered_height(&self) -> i32 {
        self.style_height
            .borrow()
            .strip_suffix("px")
            .and_then(|px| px.parse().ok())
            .unwrap_or(0)
    }
}

impl TextAreaElement for MemoryTextArea {
    fn scroll_height(&self) -> i32 {
        self.content_height.get().max(self.rendered_height())
    }

    fn set_style_height(&self, value: &str) -> Result<(), HostError> {
        *self.style_height.borrow_mut() = value.to_string();
        self.history.borrow_mut().push(value.to_string());
        Ok(())
    }
}
