// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the notification engine.
//!
//! The engine reports what it does to each notification (sent, shown,
//! changed, closed, expired, deferred for lack of space) as events sent
//! through a non-blocking channel to a collector that keeps them in a
//! memory-bounded circular buffer. Hosts attach a handle with
//! [`Manager::set_diagnostics`](crate::ui::notifications::Manager::set_diagnostics)
//! and export the buffer as JSON when investigating a glitch.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`ToastEvent`]: What happened, tagged for JSON export
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: Receiving and sending ends

mod buffer;
mod collector;
mod events;

pub use crate::domain::BufferCapacity;
pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, SerializableEvent, ToastEvent};
