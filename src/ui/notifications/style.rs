// SPDX-License-Identifier: MPL-2.0
//! Visual and timing parameters shared by every notification.
//!
//! The style is owned by the [`Manager`](super::Manager) and read every
//! frame. Hosts change it between frames through `Manager::style_mut`;
//! since that happens on the render thread no locking is involved.

use crate::domain::{AnimationDuration, RenderLimit};
use crate::ui::design_tokens::{palette, sizing, spacing};
use iced_core::Color;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub color_success: Color,
    pub color_warning: Color,
    pub color_error: Color,
    pub color_info: Color,
    pub color_title_background: Color,

    /// Padding from the right of the viewport.
    pub padding_x: f32,
    /// Padding from the bottom of the viewport.
    pub padding_y: f32,
    pub padding_between: f32,
    /// Toasts are never narrower than this.
    pub min_width: f32,
    pub border_width: f32,

    /// Length of the appear transition.
    pub fade_in: Duration,
    /// Length of the disappear transition.
    pub fade_out: Duration,
    /// Length of the height morph after a change in place.
    pub change_duration: Duration,

    pub render_limit: RenderLimit,
}

impl Style {
    /// Time from first layout until the fade-out starts, if the duration
    /// is finite.
    #[must_use]
    pub(crate) fn fade_out_start(&self, duration: Option<Duration>) -> Option<Duration> {
        duration.map(|d| self.fade_in + d)
    }

    /// Total time from first layout until expiry, if the duration is
    /// finite.
    #[must_use]
    pub(crate) fn lifetime(&self, duration: Option<Duration>) -> Option<Duration> {
        self.fade_out_start(duration).map(|start| start + self.fade_out)
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color_success: palette::SUCCESS,
            color_warning: palette::WARNING,
            color_error: palette::ERROR,
            color_info: palette::INFO,
            color_title_background: palette::TITLE_BACKGROUND,
            padding_x: spacing::PADDING_X,
            padding_y: spacing::PADDING_Y,
            padding_between: spacing::BETWEEN,
            min_width: sizing::MIN_WIDTH,
            border_width: sizing::BORDER_WIDTH,
            fade_in: AnimationDuration::default().as_duration(),
            fade_out: AnimationDuration::default().as_duration(),
            change_duration: AnimationDuration::default().as_duration(),
            render_limit: RenderLimit::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_durations_are_200ms() {
        let style = Style::default();
        assert_eq!(style.fade_in, Duration::from_millis(200));
        assert_eq!(style.fade_out, Duration::from_millis(200));
        assert_eq!(style.change_duration, Duration::from_millis(200));
    }

    #[test]
    fn lifetime_adds_both_fades() {
        let style = Style::default();
        assert_eq!(
            style.lifetime(Some(Duration::from_secs(1))),
            Some(Duration::from_millis(1400))
        );
        assert_eq!(style.lifetime(None), None);
    }
}
