// SPDX-License-Identifier: MPL-2.0
//! Design tokens for toast notifications.
//!
//! Default colors, spacing and sizes used by [`Style::default`]. Hosts are
//! free to override any of them at runtime through the style record or the
//! configuration file; these are only the starting point.
//!
//! ## Organization
//!
//! - **Palette**: Accent and title-bar colors
//! - **Spacing**: Distances from the viewport corner and between toasts
//! - **Sizing**: Widths and glyph sizes
//!
//! [`Style::default`]: crate::ui::notifications::Style

use iced_core::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const SUCCESS: Color = Color {
        r: 0.11,
        g: 0.63,
        b: 0.38,
        a: 1.0,
    };
    pub const WARNING: Color = Color {
        r: 0.83,
        g: 0.58,
        b: 0.09,
        a: 1.0,
    };
    pub const ERROR: Color = Color {
        r: 0.75,
        g: 0.25,
        b: 0.36,
        a: 1.0,
    };
    pub const INFO: Color = Color {
        r: 0.30,
        g: 0.45,
        b: 0.89,
        a: 1.0,
    };

    /// Translucent gray behind the icon and title.
    pub const TITLE_BACKGROUND: Color = Color {
        r: 0.3,
        g: 0.3,
        b: 0.3,
        a: 0.5,
    };
}

// ============================================================================
// Spacing
// ============================================================================

pub mod spacing {
    /// Distance from the right edge of the viewport.
    pub const PADDING_X: f32 = 20.0;
    /// Distance from the bottom edge of the viewport.
    pub const PADDING_Y: f32 = 20.0;
    /// Vertical gap between two stacked toasts.
    pub const BETWEEN: f32 = 10.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    pub const MIN_WIDTH: f32 = 325.0;
    pub const BORDER_WIDTH: f32 = 5.0;
    pub const ICON: f32 = 16.0;
    /// Toasts stop stacking once they come this close to the top edge.
    pub const VIEWPORT_SAFETY_MARGIN: f32 = 100.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::PADDING_X >= 0.0);
    assert!(spacing::PADDING_Y >= 0.0);
    assert!(spacing::BETWEEN >= 0.0);
    assert!(sizing::MIN_WIDTH > sizing::ICON);
    assert!(sizing::BORDER_WIDTH < sizing::MIN_WIDTH);
    assert!(palette::TITLE_BACKGROUND.a < 1.0);
};
