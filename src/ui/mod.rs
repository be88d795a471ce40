// SPDX-License-Identifier: MPL-2.0
//! Presentation layer of the notification engine.
//!
//! - [`design_tokens`] - Default colors, spacing and sizing
//! - [`icons`] - Icon glyphs and the icon font description
//! - [`notifications`] - Lifecycle, queue, layout and the frame driver

pub mod design_tokens;
pub mod icons;
pub mod notifications;
