// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure value objects shared by the notification
//! engine, the configuration file layer and diagnostics. It depends on
//! nothing but `std` so every bound can be tested in isolation.
//!
//! # Types
//!
//! - [`RenderLimit`]: Maximum number of toasts laid out per frame
//! - [`AnimationDuration`]: Fade and resize transition lengths
//! - [`BufferCapacity`]: Capacity of the diagnostic event buffer

pub mod newtypes;

pub use newtypes::{
    animation_bounds, buffer_capacity_bounds, render_limit_bounds, AnimationDuration,
    BufferCapacity, RenderLimit,
};
