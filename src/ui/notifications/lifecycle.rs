// SPDX-License-Identifier: MPL-2.0
//! Timing state of a live notification.
//!
//! Every phase, opacity and expiry value is a pure function of the time
//! elapsed since the entry was first laid out. The only mutable timing
//! state is the creation instant, which is set lazily on first layout and
//! afterwards only ever rewound (hover keep-alive, change in place).
//!
//! Phase boundaries are non-strict: at exactly `fade_in` elapsed the entry
//! is already `Holding`, at exactly `fade_in + duration` it is already
//! `FadingOut`, and so on.

use super::notification::{Notification, NotificationId};
use super::style::Style;
use std::time::{Duration, Instant};

/// Where a notification is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Sent but never laid out; its timer has not started.
    Pending,
    FadingIn,
    /// Fully visible; the dismiss timer runs (forever if infinite).
    Holding,
    FadingOut,
    /// Terminal; removed from the store on the next prune.
    Expired,
}

impl Phase {
    /// Returns true for phases in which the toast occupies screen space.
    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, Phase::FadingIn | Phase::Holding | Phase::FadingOut)
    }
}

/// Linear height blend applied after a change in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightMorph {
    /// Height measured before the content changed.
    pub from: f32,
    /// Progress in `[0, 1)`.
    pub progress: f32,
}

impl HeightMorph {
    /// Blends the newly measured height with the old one.
    #[must_use]
    pub fn apply(self, height: f32) -> f32 {
        self.progress * height + (1.0 - self.progress) * self.from
    }
}

#[derive(Debug, Clone, Copy)]
struct HeightTransition {
    started_at: Instant,
    from_height: f32,
}

/// A notification plus the timing state the engine keeps for it.
#[derive(Debug, Clone)]
pub struct Entry {
    id: NotificationId,
    notification: Notification,
    created_at: Option<Instant>,
    /// Closed before it was ever shown: skip both animations.
    remove_asap: bool,
    last_height: Option<f32>,
    transition: Option<HeightTransition>,
}

impl Entry {
    /// Wraps a notification and issues its id.
    pub(crate) fn new(notification: Notification) -> Self {
        Self {
            id: NotificationId::next(),
            notification,
            created_at: None,
            remove_asap: false,
            last_height: None,
            transition: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Returns whether the entry has been laid out at least once.
    #[must_use]
    pub fn has_been_shown(&self) -> bool {
        self.created_at.is_some()
    }

    /// Height reported by the renderer on the last frame it was drawn.
    #[must_use]
    pub fn last_height(&self) -> Option<f32> {
        self.last_height
    }

    /// Time since first layout; zero while pending.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.created_at
            .map_or(Duration::ZERO, |created| now.saturating_duration_since(created))
    }

    #[must_use]
    pub fn phase(&self, now: Instant, style: &Style) -> Phase {
        if self.remove_asap {
            return Phase::Expired;
        }
        if self.created_at.is_none() {
            return Phase::Pending;
        }

        let elapsed = self.elapsed(now);
        if elapsed < style.fade_in {
            return Phase::FadingIn;
        }
        match style.fade_out_start(self.notification.duration()) {
            None => Phase::Holding,
            Some(start) if elapsed < start => Phase::Holding,
            Some(start) if elapsed < start + style.fade_out => Phase::FadingOut,
            Some(_) => Phase::Expired,
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant, style: &Style) -> bool {
        self.phase(now, style) == Phase::Expired
    }

    /// Opacity in `[0, 1]`; also scales the exposed height.
    #[must_use]
    pub fn opacity(&self, now: Instant, style: &Style) -> f32 {
        let elapsed = self.elapsed(now);
        let opacity = match self.phase(now, style) {
            Phase::Pending | Phase::Expired => 0.0,
            Phase::FadingIn => ratio(elapsed, style.fade_in),
            Phase::Holding => 1.0,
            Phase::FadingOut => {
                let start = style
                    .fade_out_start(self.notification.duration())
                    .unwrap_or(elapsed);
                1.0 - ratio(elapsed.saturating_sub(start), style.fade_out)
            }
        };
        opacity.clamp(0.0, 1.0)
    }

    /// Starts the clock the first time the entry is laid out.
    ///
    /// Returns true if this call started it.
    pub(crate) fn show(&mut self, now: Instant) -> bool {
        if self.created_at.is_some() {
            return false;
        }
        self.created_at = Some(now);
        true
    }

    /// Pins the clock at the end of the fade-in while hovered.
    pub(crate) fn set_hovered(&mut self, hovered: bool, now: Instant, style: &Style) {
        if hovered && self.notification.keeps_alive_on_hover() {
            self.rewind_to_hold(now, style);
        }
    }

    fn rewind_to_hold(&mut self, now: Instant, style: &Style) {
        if self.created_at.is_none() || self.elapsed(now) <= style.fade_in {
            return;
        }
        if let Some(rewound) = now.checked_sub(style.fade_in) {
            self.created_at = Some(rewound);
        }
    }

    /// Makes the fade-out start at most `delay` from `now`.
    ///
    /// A fade-out already scheduled sooner is left alone. While the entry
    /// is still fading in the fade-out cannot start before the fade-in
    /// ends.
    pub(crate) fn close_after(&mut self, delay: Duration, now: Instant, style: &Style) {
        let duration = self.notification.duration();

        if self.created_at.is_none() {
            // Not on screen yet: only cap the duration it will get.
            let capped = duration.map_or(delay, |d| d.min(delay));
            self.notification.set_duration(Some(capped));
            return;
        }

        let elapsed = self.elapsed(now);
        let until_fade_out = style
            .fade_out_start(duration)
            .map(|start| start.saturating_sub(elapsed));
        if until_fade_out.is_none_or(|left| left > delay) {
            let recomputed = (elapsed + delay).saturating_sub(style.fade_in);
            self.notification.set_duration(Some(recomputed));
        }
    }

    /// Starts the fade-out now, or drops the entry outright if it was
    /// never shown.
    pub(crate) fn close_immediately(&mut self, now: Instant, style: &Style) {
        self.notification.disable_hover_keep_alive();
        if self.created_at.is_none() {
            self.remove_asap = true;
        } else {
            self.close_after(Duration::ZERO, now, style);
        }
    }

    /// Replaces the payload without replaying the fade-in.
    pub(crate) fn change(&mut self, notification: Notification, now: Instant, style: &Style) {
        self.notification = notification;
        self.rewind_to_hold(now, style);
        if let Some(from_height) = self.last_height {
            self.transition = Some(HeightTransition {
                started_at: now,
                from_height,
            });
        }
    }

    /// Active height morph, if a change happened less than
    /// `change_duration` ago.
    #[must_use]
    pub fn height_morph(&self, now: Instant, style: &Style) -> Option<HeightMorph> {
        let transition = self.transition?;
        let since = now.saturating_duration_since(transition.started_at);
        if since >= style.change_duration {
            return None;
        }
        Some(HeightMorph {
            from: transition.from_height,
            progress: ratio(since, style.change_duration),
        })
    }

    /// Records the drawn height and retires a finished morph.
    pub(crate) fn record_height(&mut self, height: f32, now: Instant, style: &Style) {
        self.last_height = Some(height);
        if self.transition.is_some() && self.height_morph(now, style).is_none() {
            self.transition = None;
        }
    }
}

/// `part / whole` as f32; a zero-length whole counts as already complete.
fn ratio(part: Duration, whole: Duration) -> f32 {
    if whole.is_zero() {
        return 1.0;
    }
    part.as_secs_f32() / whole.as_secs_f32()
}
