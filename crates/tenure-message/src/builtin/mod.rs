// SPDX-FileCopyrightText: 2026 Tenure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in scheduled-message plugins.

pub mod expiry;
pub mod reminder;

pub use expiry::ExpiryPlugin;
pub use reminder::ReminderPlugin;

use std::sync::Arc;

use tenure_plugin::MessagePluginManager;

/// Registers all built-in message plugins into the given manager.
pub fn register_builtins(manager: &mut MessagePluginManager) {
    manager.register(Arc::new(ReminderPlugin));
    manager.register(Arc::new(ExpiryPlugin));
}
