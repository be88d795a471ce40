// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` payload and the `Kind` enum
//! used throughout the notification system.

use super::style::Style;
use crate::ui::icons;
use iced_core::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Default time a notification stays fully visible.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(5);

/// Unique identifier for a notification.
///
/// Issued when the notification is sent, never reused for the lifetime of
/// the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub(crate) fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind determines the accent color, icon and default title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    /// Operation completed successfully.
    Success,
    /// Warning that doesn't block operation.
    Warning,
    /// Error requiring attention.
    Error,
    /// Informational message.
    #[default]
    Info,
}

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Warning, Kind::Error, Kind::Info];

    /// Returns the accent color for this kind from the given style.
    #[must_use]
    pub fn color(self, style: &Style) -> Color {
        match self {
            Kind::Success => style.color_success,
            Kind::Warning => style.color_warning,
            Kind::Error => style.color_error,
            Kind::Info => style.color_info,
        }
    }

    /// Returns the icon glyph drawn in the title row.
    #[must_use]
    pub fn icon(self) -> char {
        match self {
            Kind::Success => icons::CIRCLE_CHECK,
            Kind::Warning => icons::TRIANGLE_EXCLAMATION,
            Kind::Error => icons::CIRCLE_EXCLAMATION,
            Kind::Info => icons::CIRCLE_INFO,
        }
    }

    /// Returns the title used when a notification is built without one.
    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            Kind::Success => "Success",
            Kind::Warning => "Warning",
            Kind::Error => "Error",
            Kind::Info => "Info",
        }
    }
}

/// Extra content drawn inline after the body text.
///
/// The callback is stored by the engine and invoked on the render thread
/// every frame the notification is visible, so everything it needs must be
/// moved into it. It may hold a [`Sender`](super::Sender) and send, change
/// or close notifications; those commands apply on the next frame.
pub type CustomContent = Arc<dyn Fn() + Send + Sync>;

/// A notification to be displayed to the user.
#[derive(Clone)]
pub struct Notification {
    kind: Kind,
    title: String,
    content: String,
    custom_content: Option<CustomContent>,
    /// `None` keeps the notification up until it is closed explicitly.
    duration: Option<Duration>,
    closable: bool,
    hover_keeps_alive: bool,
}

impl Notification {
    /// Creates a new notification with the given kind and title.
    pub fn new(kind: Kind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            content: String::new(),
            custom_content: None,
            duration: Some(DEFAULT_DURATION),
            closable: true,
            hover_keeps_alive: true,
        }
    }

    /// Creates a success notification.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(Kind::Success, title)
    }

    /// Creates a warning notification.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(Kind::Warning, title)
    }

    /// Creates an error notification.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Kind::Error, title)
    }

    /// Creates an info notification.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(Kind::Info, title)
    }

    /// Sets the body text shown under the title row.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets how long the notification stays fully visible.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Keeps the notification up until `close_after` or
    /// `close_immediately` is called for its id.
    #[must_use]
    pub fn infinite(mut self) -> Self {
        self.duration = None;
        self
    }

    /// Sets whether the renderer offers a close button.
    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Sets whether hovering the notification pauses its dismiss timer.
    #[must_use]
    pub fn hover_keeps_alive(mut self, keeps_alive: bool) -> Self {
        self.hover_keeps_alive = keeps_alive;
        self
    }

    /// Attaches a callback drawing custom content after the body text.
    #[must_use]
    pub fn with_custom_content<F>(mut self, content: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.custom_content = Some(Arc::new(content));
        self
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the title, falling back to the kind's default when empty.
    #[must_use]
    pub fn title(&self) -> &str {
        if self.title.is_empty() {
            self.kind.default_title()
        } else {
            &self.title
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn custom_content(&self) -> Option<&CustomContent> {
        self.custom_content.as_ref()
    }

    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    #[must_use]
    pub fn is_closable(&self) -> bool {
        self.closable
    }

    #[must_use]
    pub fn keeps_alive_on_hover(&self) -> bool {
        self.hover_keeps_alive
    }

    /// Returns whether anything is drawn below the title row.
    #[must_use]
    pub fn has_body(&self) -> bool {
        !self.content.is_empty() || self.custom_content.is_some()
    }

    pub(crate) fn set_duration(&mut self, duration: Option<Duration>) {
        self.duration = duration;
    }

    pub(crate) fn disable_hover_keep_alive(&mut self) {
        self.hover_keeps_alive = false;
    }
}

impl Default for Notification {
    fn default() -> Self {
        Self::new(Kind::default(), "")
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("content", &self.content)
            .field("custom_content", &self.custom_content.is_some())
            .field("duration", &self.duration)
            .field("closable", &self.closable)
            .field("hover_keeps_alive", &self.hover_keeps_alive)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique_and_increasing() {
        let a = NotificationId::next();
        let b = NotificationId::next();
        assert_ne!(a, b);
        assert!(b.value() > a.value());
    }

    #[test]
    fn kind_colors_are_distinct() {
        let style = Style::default();
        let colors: Vec<Color> = Kind::ALL.iter().map(|k| k.color(&style)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn kind_icons_are_distinct() {
        let icons: Vec<char> = Kind::ALL.iter().map(|k| k.icon()).collect();
        for (i, a) in icons.iter().enumerate() {
            assert!(!icons[i + 1..].contains(a));
        }
    }

    #[test]
    fn default_notification_lasts_five_seconds() {
        let n = Notification::default();
        assert_eq!(n.duration(), Some(DEFAULT_DURATION));
        assert!(n.is_closable());
        assert!(n.keeps_alive_on_hover());
    }

    #[test]
    fn empty_title_falls_back_to_kind_default() {
        assert_eq!(Notification::warning("").title(), "Warning");
        assert_eq!(Notification::warning("Disk low").title(), "Disk low");
    }

    #[test]
    fn builder_pattern_works() {
        let n = Notification::error("Upload failed")
            .with_content("Connection reset")
            .infinite()
            .closable(false)
            .hover_keeps_alive(false);

        assert_eq!(n.kind(), Kind::Error);
        assert_eq!(n.content(), "Connection reset");
        assert!(n.duration().is_none());
        assert!(!n.is_closable());
        assert!(!n.keeps_alive_on_hover());
    }

    #[test]
    fn has_body_accounts_for_custom_content() {
        assert!(!Notification::info("title only").has_body());
        assert!(Notification::info("t").with_content("body").has_body());
        assert!(Notification::info("t").with_custom_content(|| {}).has_body());
    }

    #[test]
    fn constructors_set_correct_kind() {
        assert_eq!(Notification::success("").kind(), Kind::Success);
        assert_eq!(Notification::warning("").kind(), Kind::Warning);
        assert_eq!(Notification::error("").kind(), Kind::Error);
        assert_eq!(Notification::info("").kind(), Kind::Info);
    }
}
