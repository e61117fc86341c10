// SPDX-FileCopyrightText: 2026 Tenure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in scheduled-message plugins.
//!
//! These plugins ship with the framework and are always available without
//! any external registration step. Each one validates its own settings at
//! instantiation time; delivery and the interpretation of term durations
//! belong to the scheduling collaborator.

pub mod builtin;

pub use builtin::{ExpiryPlugin, ReminderPlugin, register_builtins};
