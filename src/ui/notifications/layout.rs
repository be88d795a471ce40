// SPDX-License-Identifier: MPL-2.0
//! Stacking layout for the bottom-right toast column.
//!
//! Layout never looks back at previous frames' render results except for
//! one number per toast: the height the renderer reported the last time it
//! drew it. Each frame walks the store oldest first, so the oldest toast
//! sits in the corner and newer ones stack upward.

use super::lifecycle::{Entry, HeightMorph};
use super::notification::{CustomContent, Kind, NotificationId};
use super::style::Style;
use crate::ui::design_tokens::sizing;
use iced_core::{Color, Point, Rectangle, Size};
use std::fmt;
use std::time::Instant;

/// Everything a renderer needs to draw one toast this frame.
#[derive(Clone)]
pub struct ToastFrame<'a> {
    pub id: NotificationId,
    pub kind: Kind,
    /// Where the toast's bottom-right corner goes.
    pub anchor: Point,
    pub min_width: f32,
    /// Alpha for the whole toast and the vertical scale of its height.
    pub opacity: f32,
    pub morph: Option<HeightMorph>,
    /// Border and icon color.
    pub accent: Color,
    pub title_background: Color,
    pub border_width: f32,
    pub icon: char,
    pub title: &'a str,
    pub body: &'a str,
    pub closable: bool,
    custom_content: Option<&'a CustomContent>,
}

impl<'a> ToastFrame<'a> {
    pub(crate) fn new(entry: &'a Entry, anchor: Point, now: Instant, style: &Style) -> Self {
        let notification = entry.notification();
        let kind = notification.kind();
        Self {
            id: entry.id(),
            kind,
            anchor,
            min_width: style.min_width,
            opacity: entry.opacity(now, style),
            morph: entry.height_morph(now, style),
            accent: kind.color(style),
            title_background: style.color_title_background,
            border_width: style.border_width,
            icon: kind.icon(),
            title: notification.title(),
            body: notification.content(),
            closable: notification.is_closable(),
            custom_content: notification.custom_content(),
        }
    }

    /// Returns whether anything is drawn below the title row.
    ///
    /// The title row itself is always drawn.
    #[must_use]
    pub fn has_body(&self) -> bool {
        !self.body.is_empty() || self.custom_content.is_some()
    }

    #[must_use]
    pub fn has_custom_content(&self) -> bool {
        self.custom_content.is_some()
    }

    /// Invokes the custom content callback, if any. Call it right after
    /// drawing the body text.
    pub fn draw_custom_content(&self) {
        if let Some(content) = self.custom_content {
            content();
        }
    }

    /// Turns the size the content wants into the size exposed this frame.
    ///
    /// Width is floored at the minimum width. Height is scaled by opacity,
    /// so appearing and disappearing read as a collapse, then blended with
    /// the pre-change height while a change-in-place morph runs.
    #[must_use]
    pub fn constrain(&self, desired: Size) -> Size {
        let width = desired.width.max(self.min_width);
        let mut height = desired.height * self.opacity;
        if let Some(morph) = self.morph {
            height = morph.apply(height);
        }
        Size::new(width, height.max(0.0))
    }

    /// Places a toast of `size` with its bottom-right corner on the anchor.
    #[must_use]
    pub fn bounds(&self, size: Size) -> Rectangle {
        Rectangle::new(
            Point::new(self.anchor.x - size.width, self.anchor.y - size.height),
            size,
        )
    }
}

impl fmt::Debug for ToastFrame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastFrame")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("anchor", &self.anchor)
            .field("opacity", &self.opacity)
            .field("morph", &self.morph)
            .field("title", &self.title)
            .field("custom_content", &self.custom_content.is_some())
            .finish_non_exhaustive()
    }
}

/// Running state of one frame's stacking pass.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StackLayout {
    viewport: Rectangle,
    height: f32,
    positioned: usize,
}

impl StackLayout {
    pub(crate) fn new(viewport: Rectangle) -> Self {
        Self {
            viewport,
            height: 0.0,
            positioned: 0,
        }
    }

    /// Whether another toast may be positioned this frame.
    pub(crate) fn has_room(&self, style: &Style) -> bool {
        !style.render_limit.is_reached(self.positioned)
            && self.height <= self.viewport.height - sizing::VIEWPORT_SAFETY_MARGIN
    }

    /// Bottom-right corner for the next toast.
    pub(crate) fn anchor(&self, style: &Style) -> Point {
        Point::new(
            self.viewport.x + self.viewport.width - style.padding_x,
            self.viewport.y + self.viewport.height - style.padding_y - self.height,
        )
    }

    /// Accounts for a drawn toast; the gap fades with the toast.
    pub(crate) fn push(&mut self, height: f32, opacity: f32, style: &Style) {
        self.height += height + style.padding_between * opacity;
        self.positioned += 1;
    }

    pub(crate) fn positioned(&self) -> usize {
        self.positioned
    }

    #[cfg(test)]
    pub(crate) fn height(&self) -> f32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RenderLimit;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::notifications::Notification;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn viewport() -> Rectangle {
        Rectangle::new(Point::new(0.0, 0.0), Size::new(1280.0, 720.0))
    }

    #[test]
    fn first_anchor_is_padded_bottom_right() {
        let style = Style::default();
        let stack = StackLayout::new(viewport());
        assert_eq!(stack.anchor(&style), Point::new(1260.0, 700.0));
    }

    #[test]
    fn anchor_respects_viewport_origin() {
        let style = Style::default();
        let stack = StackLayout::new(Rectangle::new(
            Point::new(100.0, 50.0),
            Size::new(800.0, 600.0),
        ));
        assert_eq!(stack.anchor(&style), Point::new(880.0, 630.0));
    }

    #[test]
    fn push_moves_next_anchor_up_by_height_and_gap() {
        let style = Style::default();
        let mut stack = StackLayout::new(viewport());
        stack.push(60.0, 1.0, &style);
        assert_eq!(stack.anchor(&style), Point::new(1260.0, 630.0));

        stack.push(40.0, 0.5, &style);
        assert_abs_diff_eq!(stack.height(), 115.0);
        assert_eq!(stack.positioned(), 2);
    }

    #[test]
    fn render_limit_stops_stacking() {
        let style = Style {
            render_limit: RenderLimit::new(2),
            ..Style::default()
        };
        let mut stack = StackLayout::new(viewport());
        assert!(stack.has_room(&style));
        stack.push(10.0, 1.0, &style);
        assert!(stack.has_room(&style));
        stack.push(10.0, 1.0, &style);
        assert!(!stack.has_room(&style));
    }

    #[test]
    fn viewport_height_stops_stacking() {
        let style = Style::default();
        let mut stack = StackLayout::new(Rectangle::new(
            Point::ORIGIN,
            Size::new(800.0, 300.0),
        ));
        stack.push(190.0, 1.0, &style);
        assert!(stack.has_room(&style));
        stack.push(10.0, 1.0, &style);
        assert!(!stack.has_room(&style));
    }

    #[test]
    fn constrain_applies_min_width_opacity_and_morph() {
        let style = Style::default();
        let t0 = Instant::now();
        let mut entry = Entry::new(Notification::info("x"));
        entry.show(t0);

        let frame = ToastFrame::new(&entry, Point::ORIGIN, t0 + Duration::from_millis(100), &style);
        let size = frame.constrain(Size::new(100.0, 80.0));
        assert_abs_diff_eq!(size.width, style.min_width);
        assert_abs_diff_eq!(size.height, 40.0, epsilon = 1e-3);

        entry.record_height(80.0, t0 + Duration::from_millis(500), &style);
        let changed_at = t0 + Duration::from_millis(600);
        entry.change(Notification::info("taller"), changed_at, &style);
        let frame = ToastFrame::new(
            &entry,
            Point::ORIGIN,
            changed_at + Duration::from_millis(50),
            &style,
        );
        // A quarter of the way from 80 to 120.
        let size = frame.constrain(Size::new(400.0, 120.0));
        assert_abs_diff_eq!(size.width, 400.0);
        assert_abs_diff_eq!(size.height, 90.0, epsilon = 1e-3);
    }

    #[test]
    fn bounds_put_bottom_right_on_anchor() {
        let style = Style::default();
        let entry = Entry::new(Notification::info("x"));
        let frame = ToastFrame::new(&entry, Point::new(500.0, 400.0), Instant::now(), &style);

        let bounds = frame.bounds(Size::new(325.0, 60.0));
        assert_eq!(bounds.x + bounds.width, 500.0);
        assert_eq!(bounds.y + bounds.height, 400.0);
    }

    #[test]
    fn title_only_notification_has_no_body() {
        let style = Style::default();
        let entry = Entry::new(Notification::success(""));
        let frame = ToastFrame::new(&entry, Point::ORIGIN, Instant::now(), &style);

        assert!(!frame.has_body());
        assert_eq!(frame.title, "Success");
        assert_eq!(frame.accent, style.color_success);
    }

    #[test]
    fn draw_custom_content_invokes_callback() {
        let style = Style::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let entry = Entry::new(Notification::info("x").with_custom_content(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        let frame = ToastFrame::new(&entry, Point::ORIGIN, Instant::now(), &style);

        assert!(frame.has_body());
        frame.draw_custom_content();
        frame.draw_custom_content();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
