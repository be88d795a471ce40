// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for notification lifecycle tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::ui::notifications::{Kind, NotificationId};

/// Something the engine did with a notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToastEvent {
    /// A send command reached the store.
    Sent { id: u64, kind: Kind },

    /// Content replaced in place.
    Changed { id: u64 },

    /// A close command reached a live notification.
    CloseRequested {
        id: u64,
        /// `None` for an immediate close.
        #[serde(skip_serializing_if = "Option::is_none")]
        delay_ms: Option<u64>,
    },

    /// First frame the notification was laid out; its timer started.
    Shown { id: u64 },

    /// Pruned from the store.
    Expired { id: u64 },

    /// Notifications waiting for space (render limit or viewport height).
    /// Logged when the count changes.
    Deferred { count: usize },

    /// A change or close command named an id that is no longer live.
    StaleCommand { id: u64 },
}

impl ToastEvent {
    pub(crate) fn sent(id: NotificationId, kind: Kind) -> Self {
        Self::Sent {
            id: id.value(),
            kind,
        }
    }

    /// Returns the notification this event is about, if any.
    #[must_use]
    pub fn notification_id(&self) -> Option<u64> {
        match self {
            Self::Sent { id, .. }
            | Self::Changed { id }
            | Self::CloseRequested { id, .. }
            | Self::Shown { id }
            | Self::Expired { id }
            | Self::StaleCommand { id } => Some(*id),
            Self::Deferred { .. } => None,
        }
    }
}

/// A timestamped [`ToastEvent`].
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// Monotonic time the event occurred.
    pub timestamp: Instant,
    pub kind: ToastEvent,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: ToastEvent) -> Self {
        Self::with_timestamp(kind, Instant::now())
    }

    #[must_use]
    pub fn with_timestamp(kind: ToastEvent, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// A diagnostic event with its time relative to collection start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: ToastEvent,
}

impl SerializableEvent {
    #[must_use]
    pub fn new(event: &DiagnosticEvent, collection_start: Instant) -> Self {
        let offset = event.timestamp.saturating_duration_since(collection_start);
        Self {
            timestamp_ms: u64::try_from(offset.as_millis()).unwrap_or(u64::MAX),
            kind: event.kind.clone(),
        }
    }
}
