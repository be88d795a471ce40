// SPDX-License-Identifier: MPL-2.0
//! Boundary between the engine and whatever actually draws pixels.

use super::layout::ToastFrame;
use crate::ui::icons::IconFont;
use iced_core::Rectangle;

/// What the renderer did with one toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drawn {
    /// Screen rectangle the toast ended up occupying.
    pub bounds: Rectangle,
    /// The user clicked the close button this frame.
    pub close_requested: bool,
}

impl Drawn {
    #[must_use]
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            close_requested: false,
        }
    }

    /// The toast was drawn and its close button was clicked.
    #[must_use]
    pub fn closed(bounds: Rectangle) -> Self {
        Self {
            bounds,
            close_requested: true,
        }
    }
}

/// Draws notifications on behalf of the [`Manager`](super::Manager).
///
/// Called on the render thread only, once per visible toast per frame.
pub trait Renderer {
    /// Screen area toasts are stacked in; they anchor to its bottom-right
    /// corner.
    fn viewport(&self) -> Rectangle;

    /// Lays out and draws one toast.
    ///
    /// Implementations measure the content they would like to draw, pass
    /// that size through [`ToastFrame::constrain`], place the result with
    /// [`ToastFrame::bounds`], then draw border, title row, body and custom
    /// content (via [`ToastFrame::draw_custom_content`]) clipped to it.
    fn draw(&mut self, frame: &ToastFrame<'_>) -> Drawn;

    /// Returns whether the pointer is over `bounds`.
    fn is_hovered(&self, bounds: Rectangle) -> bool;

    /// Merges the notification icon glyphs into the renderer's font.
    fn register_icon_font(&mut self, _font: &IconFont) {}
}
