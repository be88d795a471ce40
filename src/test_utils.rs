// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and a headless renderer.
//!
//! Re-exports the `approx` crate's assertion macros for float comparison,
//! which handle floating-point precision issues that `assert_eq!` cannot.

use crate::ui::icons::IconFont;
use crate::ui::notifications::{Drawn, NotificationId, Renderer, ToastFrame};
use iced_core::{Point, Rectangle, Size};
use std::collections::{HashMap, HashSet};

pub use approx::assert_abs_diff_eq;

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;

/// Natural toast size used unless a test overrides it.
pub const TOAST_SIZE: Size = Size::new(300.0, 60.0);

/// What the fake renderer saw for one toast.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFrame {
    pub id: NotificationId,
    pub anchor: Point,
    pub opacity: f32,
    pub bounds: Rectangle,
    pub title: String,
}

/// Renderer that records frames instead of drawing them.
#[derive(Debug)]
pub struct FakeRenderer {
    pub viewport: Rectangle,
    /// Every toast drawn so far, in draw order.
    pub frames: Vec<RecordedFrame>,
    /// Per-notification natural size overrides.
    pub sizes: HashMap<NotificationId, Size>,
    pub cursor: Option<Point>,
    pub icon_font: Option<IconFont>,
    clicks: HashSet<NotificationId>,
}

impl Default for FakeRenderer {
    fn default() -> Self {
        Self::with_viewport(Size::new(1280.0, 720.0))
    }
}

impl FakeRenderer {
    pub fn with_viewport(size: Size) -> Self {
        Self {
            viewport: Rectangle::new(Point::ORIGIN, size),
            frames: Vec::new(),
            sizes: HashMap::new(),
            cursor: None,
            icon_font: None,
            clicks: HashSet::new(),
        }
    }

    /// Reports a close-button click for `id` on its next draw.
    pub fn click_close(&mut self, id: NotificationId) {
        self.clicks.insert(id);
    }
}

impl Renderer for FakeRenderer {
    fn viewport(&self) -> Rectangle {
        self.viewport
    }

    fn draw(&mut self, frame: &ToastFrame<'_>) -> Drawn {
        let natural = self.sizes.get(&frame.id).copied().unwrap_or(TOAST_SIZE);
        let bounds = frame.bounds(frame.constrain(natural));
        self.frames.push(RecordedFrame {
            id: frame.id,
            anchor: frame.anchor,
            opacity: frame.opacity,
            bounds,
            title: frame.title.to_owned(),
        });

        if self.clicks.remove(&frame.id) {
            Drawn::closed(bounds)
        } else {
            Drawn::new(bounds)
        }
    }

    fn is_hovered(&self, bounds: Rectangle) -> bool {
        self.cursor.is_some_and(|cursor| bounds.contains(cursor))
    }

    fn register_icon_font(&mut self, font: &IconFont) {
        self.icon_font = Some(font.clone());
    }
}
