// SPDX-License-Identifier: MPL-2.0
//! Icon glyphs for notification title rows.
//!
//! Icons are Font Awesome 6 (solid) codepoints. The engine never touches
//! font data itself: the host registers the glyph range into whatever
//! font system its renderer uses, once, through
//! [`Manager::add_icons_to_font`](crate::ui::notifications::Manager::add_icons_to_font).
//! If you use a custom text font, register the icons right after adding it
//! so they merge into that font.

use crate::ui::design_tokens::sizing;
use iced_core::Vector;
use std::ops::RangeInclusive;

/// Circle with a check mark, used for success.
pub const CIRCLE_CHECK: char = '\u{f058}';
/// Triangle with an exclamation mark, used for warnings.
pub const TRIANGLE_EXCLAMATION: char = '\u{f071}';
/// Circle with an exclamation mark, used for errors.
pub const CIRCLE_EXCLAMATION: char = '\u{f06a}';
/// Circle with an "i", used for information.
pub const CIRCLE_INFO: char = '\u{f05a}';

/// Codepoint range covered by the icon font (16-bit private use area).
pub const GLYPH_RANGE: RangeInclusive<char> = '\u{e005}'..='\u{f8ff}';

/// Description of the icon glyphs to merge into the renderer's font.
#[derive(Debug, Clone, PartialEq)]
pub struct IconFont {
    /// Glyph size in pixels.
    pub size: f32,
    /// Offset applied to every glyph; tweak it when icons do not line up
    /// with a custom text font.
    pub glyph_offset: Vector,
    /// Codepoints to register.
    pub range: RangeInclusive<char>,
    /// Icons are merged into the current font rather than added standalone.
    pub merge: bool,
    /// Snap glyphs horizontally to whole pixels.
    pub pixel_snap: bool,
}

impl IconFont {
    #[must_use]
    pub fn new(size: f32, glyph_offset: Vector) -> Self {
        Self {
            size,
            glyph_offset,
            ..Self::default()
        }
    }

    /// Returns true if `glyph` is inside the registered range.
    #[must_use]
    pub fn covers(&self, glyph: char) -> bool {
        self.range.contains(&glyph)
    }
}

impl Default for IconFont {
    fn default() -> Self {
        Self {
            size: sizing::ICON,
            glyph_offset: Vector::new(0.0, 4.0),
            range: GLYPH_RANGE,
            merge: true,
            pixel_snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_font_covers_every_notification_icon() {
        let font = IconFont::default();
        for glyph in [
            CIRCLE_CHECK,
            TRIANGLE_EXCLAMATION,
            CIRCLE_EXCLAMATION,
            CIRCLE_INFO,
        ] {
            assert!(font.covers(glyph), "missing glyph {:?}", glyph);
        }
    }

    #[test]
    fn new_keeps_range_and_merge_mode() {
        let font = IconFont::new(20.0, Vector::new(1.0, 2.0));
        assert_eq!(font.size, 20.0);
        assert_eq!(font.glyph_offset, Vector::new(1.0, 2.0));
        assert!(font.merge);
        assert_eq!(font.range, GLYPH_RANGE);
    }
}
