// SPDX-License-Identifier: MPL-2.0
//! Toast notification engine.
//!
//! Notifications stack in the bottom-right corner of the viewport, oldest
//! at the bottom. Each one fades in, holds for its duration, fades out and
//! is removed. Any thread may send, change or close notifications through
//! a [`Sender`]; the [`Manager`] applies those commands at the start of
//! each frame and hands positioned [`ToastFrame`]s to a [`Renderer`].
//!
//! # Components
//!
//! - [`notification`] - The `Notification` value and its `Kind`
//! - [`lifecycle`] - Per-notification timing state machine
//! - [`queue`] - Thread-safe mutation queue
//! - [`layout`] - Stacking and size constraints
//! - [`manager`] - Store and per-frame driver
//!
//! # Usage
//!
//! ```
//! use toastline::ui::notifications::{Manager, Notification};
//!
//! let manager = Manager::new();
//! let sender = manager.sender();
//!
//! std::thread::spawn(move || {
//!     sender.send(Notification::success("Export finished"));
//! })
//! .join()
//! .unwrap();
//!
//! // Applied on the next `manager.render_frame(&mut renderer)`.
//! assert!(manager.is_empty());
//! ```

pub mod layout;
pub mod lifecycle;
pub mod manager;
pub mod notification;
pub mod queue;
pub mod renderer;
pub mod style;

pub use layout::ToastFrame;
pub use lifecycle::{Entry, HeightMorph, Phase};
pub use manager::{FrameReport, Manager};
pub use notification::{CustomContent, Kind, Notification, NotificationId, DEFAULT_DURATION};
pub use queue::Sender;
pub use renderer::{Drawn, Renderer};
pub use style::Style;
