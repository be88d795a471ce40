// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for notification lifecycle events.
//!
//! The collector owns the event buffer; the engine only holds a
//! [`DiagnosticsHandle`] and never waits on it.

use std::time::Instant;

use chrono::{DateTime, SecondsFormat, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use serde::Serialize;

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, SerializableEvent, ToastEvent};

/// Events the channel holds before `log` starts dropping them.
const DEFAULT_CHANNEL_CAPACITY: usize = 128;

/// Sending end handed to the engine.
///
/// Clones share one channel, so any thread may log.
/// Events go through a bounded channel so logging never blocks a frame.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs an event stamped with the current time.
    ///
    /// Non-blocking; the event is dropped if the channel is full.
    pub fn log(&self, event: ToastEvent) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(event));
    }

    /// Logs an event with an explicit timestamp.
    pub fn log_at(&self, event: ToastEvent, timestamp: Instant) {
        let _ = self
            .event_tx
            .try_send(DiagnosticEvent::with_timestamp(event, timestamp));
    }

    /// Like [`log`](Self::log) but reports why an event could not be queued.
    ///
    /// # Errors
    ///
    /// `TrySendError::Full` when the collector has fallen behind, or
    /// `TrySendError::Disconnected` once it is gone.
    pub fn try_log(&self, event: ToastEvent) -> Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(event))
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    collection_started_at: String,
    collection_duration_ms: u64,
    event_count: usize,
    dropped_count: usize,
    events: &'a [SerializableEvent],
}

/// Receiving end: drains the channel into a bounded event buffer.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    /// Monotonic clock for relative timestamps.
    collection_started_at: Instant,
    /// Wall clock for report metadata.
    collection_started_at_utc: DateTime<Utc>,
    /// Events evicted from the buffer since the last clear.
    dropped: usize,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
            dropped: 0,
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every event waiting in the channel into the buffer.
    ///
    /// Call this periodically, e.g. once per frame after rendering.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.record(event);
        }
    }

    /// Stores an event directly, bypassing the channel.
    pub fn record(&mut self, event: DiagnosticEvent) {
        if self.buffer.push(event).is_some() {
            self.dropped += 1;
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Buffered events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.dropped = 0;
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Serializes the buffered events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Fails only if an event cannot be represented as JSON.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent::new(event, self.collection_started_at))
            .collect();

        let report = Report {
            collection_started_at: self
                .collection_started_at_utc
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            collection_duration_ms: u64::try_from(
                self.collection_started_at.elapsed().as_millis(),
            )
            .unwrap_or(u64::MAX),
            event_count: events.len(),
            dropped_count: self.dropped,
            events: &events,
        };
        serde_json::to_string_pretty(&report)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
