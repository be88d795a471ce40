// SPDX-License-Identifier: MPL-2.0
//! Notification store and per-frame driver.
//!
//! The `Manager` owns every live notification and is only ever touched
//! from the render thread. Other threads talk to it through [`Sender`]
//! handles; their commands are applied at the start of the next
//! [`render_frame`](Manager::render_frame).

use super::layout::{StackLayout, ToastFrame};
use super::lifecycle::{Entry, Phase};
use super::notification::{Notification, NotificationId};
use super::queue::{Command, Sender};
use super::renderer::Renderer;
use super::style::Style;
use crate::diagnostics::{DiagnosticsHandle, ToastEvent};
use crate::ui::icons::IconFont;
use iced_core::Vector;
use std::time::{Duration, Instant};

/// What happened during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Notifications removed by the prune pass.
    pub expired: usize,
    /// Notifications positioned and drawn.
    pub laid_out: usize,
    /// Notifications waiting for room on a later frame.
    pub deferred: usize,
}

/// Manages the notification store and drives layout each frame.
#[derive(Debug, Default)]
pub struct Manager {
    /// Live notifications, oldest first.
    entries: Vec<Entry>,
    queue: Sender,
    style: Style,
    /// Optional diagnostics handle for lifecycle events.
    diagnostics: Option<DiagnosticsHandle>,
    /// Deferred count of the previous frame, to log changes only.
    last_deferred: usize,
}

impl Manager {
    /// Creates a new empty manager with the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_style(style: Style) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Sets the diagnostics handle for logging lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Returns a handle other threads can send commands through.
    #[must_use]
    pub fn sender(&self) -> Sender {
        self.queue.clone()
    }

    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Mutable access to the style; changes apply from the next frame.
    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    /// Queues a notification; see [`Sender::send`].
    pub fn send(&self, notification: Notification) -> NotificationId {
        self.queue.send(notification)
    }

    /// See [`Sender::change`].
    pub fn change(&self, id: NotificationId, notification: Notification) {
        self.queue.change(id, notification);
    }

    /// See [`Sender::close_after`].
    pub fn close_after(&self, id: NotificationId, delay: Duration) {
        self.queue.close_after(id, delay);
    }

    /// See [`Sender::close_immediately`].
    pub fn close_immediately(&self, id: NotificationId) {
        self.queue.close_immediately(id);
    }

    /// Forwards the icon glyph description to the renderer's font system.
    ///
    /// Call once during setup, after adding the text font the icons should
    /// merge into.
    pub fn add_icons_to_font<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        icon_size: f32,
        glyph_offset: Vector,
    ) {
        renderer.register_icon_font(&IconFont::new(icon_size, glyph_offset));
    }

    /// Number of live notifications, including ones not yet on screen.
    ///
    /// Commands still queued are not counted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Live notifications, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Current phase of a live notification, `None` once it is gone.
    #[must_use]
    pub fn phase_of(&self, id: NotificationId, now: Instant) -> Option<Phase> {
        self.entry(id).map(|entry| entry.phase(now, &self.style))
    }

    #[must_use]
    pub fn entry(&self, id: NotificationId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Runs one frame: apply queued commands, prune, lay out and draw.
    ///
    /// Call once per display frame from the render thread.
    pub fn render_frame<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> FrameReport {
        self.render_frame_at(renderer, Instant::now())
    }

    /// [`render_frame`](Self::render_frame) with an explicit clock.
    pub fn render_frame_at<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        now: Instant,
    ) -> FrameReport {
        self.apply_pending(now);
        let expired = self.prune(now);
        let laid_out = self.layout(renderer, now);
        let deferred = self.entries.len() - laid_out;
        self.note_deferred(deferred);

        FrameReport {
            expired,
            laid_out,
            deferred,
        }
    }

    /// Applies every queued command in enqueue order.
    ///
    /// Commands queued while this runs wait for the next frame.
    fn apply_pending(&mut self, now: Instant) {
        for command in self.queue.drain() {
            match command {
                Command::Send(entry) => {
                    self.log(ToastEvent::sent(entry.id(), entry.notification().kind()));
                    self.entries.push(*entry);
                }
                Command::Change(id, notification) => {
                    self.with_entry(id, ToastEvent::Changed { id: id.value() }, |entry, style| {
                        entry.change(notification, now, style);
                    });
                }
                Command::CloseAfter(id, delay) => {
                    let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
                    let event = ToastEvent::CloseRequested {
                        id: id.value(),
                        delay_ms: Some(delay_ms),
                    };
                    self.with_entry(id, event, |entry, style| {
                        entry.close_after(delay, now, style);
                    });
                }
                Command::CloseImmediately(id) => {
                    let event = ToastEvent::CloseRequested {
                        id: id.value(),
                        delay_ms: None,
                    };
                    self.with_entry(id, event, |entry, style| {
                        entry.close_immediately(now, style);
                    });
                }
            }
        }
    }

    /// Runs `apply` on the entry with `id`; unknown ids are ignored since
    /// the notification may simply have expired already.
    fn with_entry(
        &mut self,
        id: NotificationId,
        event: ToastEvent,
        apply: impl FnOnce(&mut Entry, &Style),
    ) {
        match self.entries.iter_mut().find(|entry| entry.id() == id) {
            Some(entry) => {
                apply(entry, &self.style);
                self.log(event);
            }
            None => self.log(ToastEvent::StaleCommand { id: id.value() }),
        }
    }

    /// Removes expired entries, returning how many went.
    fn prune(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let style = &self.style;
        let diagnostics = self.diagnostics.as_ref();
        self.entries.retain(|entry| {
            let expired = entry.is_expired(now, style);
            if expired {
                if let Some(handle) = diagnostics {
                    handle.log(ToastEvent::Expired {
                        id: entry.id().value(),
                    });
                }
            }
            !expired
        });
        before - self.entries.len()
    }

    /// Stacks and draws entries oldest first until the render limit or
    /// the viewport height is reached. Returns how many were drawn.
    fn layout<R: Renderer + ?Sized>(&mut self, renderer: &mut R, now: Instant) -> usize {
        let mut stack = StackLayout::new(renderer.viewport());

        for entry in &mut self.entries {
            if !stack.has_room(&self.style) {
                break;
            }

            // The timer starts on first layout, not at send time, so a
            // toast waiting for room does not age out unseen.
            if entry.show(now) {
                if let Some(handle) = &self.diagnostics {
                    handle.log(ToastEvent::Shown {
                        id: entry.id().value(),
                    });
                }
            }

            let (drawn, opacity) = {
                let frame = ToastFrame::new(entry, stack.anchor(&self.style), now, &self.style);
                (renderer.draw(&frame), frame.opacity)
            };
            let height = drawn.bounds.height;
            entry.record_height(height, now, &self.style);

            entry.set_hovered(renderer.is_hovered(drawn.bounds), now, &self.style);
            if drawn.close_requested && entry.notification().is_closable() {
                entry.close_immediately(now, &self.style);
                if let Some(handle) = &self.diagnostics {
                    handle.log(ToastEvent::CloseRequested {
                        id: entry.id().value(),
                        delay_ms: None,
                    });
                }
            }

            stack.push(height, opacity, &self.style);
        }

        stack.positioned()
    }

    fn note_deferred(&mut self, deferred: usize) {
        if deferred != self.last_deferred {
            self.log(ToastEvent::Deferred { count: deferred });
            self.last_deferred = deferred;
        }
    }

    fn log(&self, event: ToastEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log(event);
        }
    }
}
