// SPDX-License-Identifier: MPL-2.0
//! `toastline` is a toast notification engine for immediate-mode UIs.
//!
//! It owns the notification lifecycle (fade in, hold, fade out, removal),
//! a thread-safe mutation queue and the bottom-right stacking layout. The
//! actual drawing is delegated to a host-provided
//! [`Renderer`](ui::notifications::Renderer).

#![doc(html_root_url = "https://docs.rs/toastline/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
