// SPDX-License-Identifier: MPL-2.0
//! Notification newtypes.
//!
//! This module provides type-safe wrappers for values read by the
//! notification engine every frame, ensuring they are always within
//! valid ranges so the hot path never has to re-validate them.

use std::time::Duration;

// =============================================================================
// Render Limit Bounds
// =============================================================================

/// Render limit bounds (1 to 32 toasts per frame).
pub mod render_limit_bounds {
    /// Minimum number of toasts laid out per frame.
    pub const MIN: usize = 1;
    /// Maximum number of toasts laid out per frame.
    pub const MAX: usize = 32;
    /// Default number of toasts laid out per frame.
    pub const DEFAULT: usize = 5;
}

// =============================================================================
// RenderLimit
// =============================================================================

/// Maximum number of notifications positioned in a single frame.
///
/// Notifications beyond the limit are not dropped: they stay pending in
/// the store and are laid out on a later frame once space frees up.
///
/// # Example
///
/// ```
/// use toastline::domain::RenderLimit;
///
/// let limit = RenderLimit::new(3);
/// assert_eq!(limit.value(), 3);
///
/// // Zero would hide every toast forever, so it is clamped
/// assert_eq!(RenderLimit::new(0).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderLimit(usize);

impl RenderLimit {
    /// Creates a new render limit, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(render_limit_bounds::MIN, render_limit_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true once `positioned` toasts have used up the limit.
    #[must_use]
    pub fn is_reached(self, positioned: usize) -> bool {
        positioned >= self.0
    }
}

impl Default for RenderLimit {
    fn default() -> Self {
        Self(render_limit_bounds::DEFAULT)
    }
}

// =============================================================================
// Animation Bounds
// =============================================================================

/// Animation duration bounds in milliseconds (0 to 10 seconds).
pub mod animation_bounds {
    /// Shortest animation; zero means an instantaneous transition.
    pub const MIN_MS: u64 = 0;
    /// Longest animation.
    pub const MAX_MS: u64 = 10_000;
    /// Default fade-in, fade-out and change duration.
    pub const DEFAULT_MS: u64 = 200;
}

// =============================================================================
// AnimationDuration
// =============================================================================

/// Length of a fade or resize transition.
///
/// Zero is valid and means "jump straight to the end state"; the engine
/// guards every division by this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AnimationDuration(u64);

impl AnimationDuration {
    /// Creates a new animation duration from milliseconds, clamping to range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(animation_bounds::MIN_MS, animation_bounds::MAX_MS))
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true for an instantaneous transition.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0
    }
}

impl Default for AnimationDuration {
    fn default() -> Self {
        Self(animation_bounds::DEFAULT_MS)
    }
}

impl From<Duration> for AnimationDuration {
    fn from(duration: Duration) -> Self {
        Self::from_millis(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }
}

// =============================================================================
// Buffer Capacity Bounds
// =============================================================================

/// Diagnostic buffer capacity bounds (16 to 4096 events).
pub mod buffer_capacity_bounds {
    pub const MIN: usize = 16;
    pub const MAX: usize = 4096;
    /// Enough for a few minutes of typical toast traffic.
    pub const DEFAULT: usize = 256;
}

// =============================================================================
// BufferCapacity
// =============================================================================

/// Number of lifecycle events kept by the diagnostics collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Clamps `events` into the accepted range.
    #[must_use]
    pub fn new(events: usize) -> Self {
        Self(events.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_limit_clamps_to_valid_range() {
        assert_eq!(RenderLimit::new(0).value(), render_limit_bounds::MIN);
        assert_eq!(RenderLimit::new(1_000).value(), render_limit_bounds::MAX);
    }

    #[test]
    fn render_limit_default_is_five() {
        assert_eq!(RenderLimit::default().value(), 5);
    }

    #[test]
    fn render_limit_is_reached_at_value() {
        let limit = RenderLimit::new(2);
        assert!(!limit.is_reached(1));
        assert!(limit.is_reached(2));
        assert!(limit.is_reached(3));
    }

    #[test]
    fn animation_duration_accepts_zero() {
        let instant = AnimationDuration::from_millis(0);
        assert!(instant.is_instant());
        assert_eq!(instant.as_duration(), Duration::ZERO);
    }

    #[test]
    fn animation_duration_clamps_upper_bound() {
        assert_eq!(
            AnimationDuration::from_millis(60_000).millis(),
            animation_bounds::MAX_MS
        );
    }

    #[test]
    fn animation_duration_from_std_duration() {
        let d: AnimationDuration = Duration::from_millis(350).into();
        assert_eq!(d.millis(), 350);
    }

    #[test]
    fn buffer_capacity_stays_between_16_and_4096() {
        assert_eq!(BufferCapacity::new(3).value(), 16);
        assert_eq!(
            BufferCapacity::new(100_000).value(),
            buffer_capacity_bounds::MAX
        );
        assert_eq!(BufferCapacity::new(300).value(), 300);
    }
}
