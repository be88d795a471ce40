// SPDX-License-Identifier: MPL-2.0
//! Default values and accepted ranges for the configuration file.
//!
//! Timing bounds live with [`AnimationDuration`](crate::domain::AnimationDuration)
//! and the render limit bounds with [`RenderLimit`](crate::domain::RenderLimit);
//! this module covers the plain `f32` layout values the file can set.

// ==========================================================================
// File Location
// ==========================================================================

/// File name inside the configuration directory.
pub const CONFIG_FILE: &str = "toasts.toml";

/// Directory created under the platform config dir.
pub const APP_DIR: &str = "toastline";

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "TOASTLINE_CONFIG_DIR";

// ==========================================================================
// Layout Bounds
// ==========================================================================

/// Minimum padding (pixels), for both viewport edges and the stacking gap.
pub const MIN_PADDING: f32 = 0.0;

/// Maximum padding (pixels).
pub const MAX_PADDING: f32 = 200.0;

/// Narrowest allowed minimum toast width.
pub const MIN_TOAST_WIDTH: f32 = 100.0;

/// Widest allowed minimum toast width.
pub const MAX_TOAST_WIDTH: f32 = 1600.0;

/// Maximum accent border width (pixels).
pub const MAX_BORDER_WIDTH: f32 = 32.0;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::{sizing, spacing};

    #[test]
    fn design_token_defaults_are_within_bounds() {
        for padding in [spacing::PADDING_X, spacing::PADDING_Y, spacing::BETWEEN] {
            assert!((MIN_PADDING..=MAX_PADDING).contains(&padding));
        }
        assert!((MIN_TOAST_WIDTH..=MAX_TOAST_WIDTH).contains(&sizing::MIN_WIDTH));
        assert!(sizing::BORDER_WIDTH <= MAX_BORDER_WIDTH);
    }
}
