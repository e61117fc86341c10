// SPDX-FileCopyrightText: 2026 Tenure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Tenure membership framework.

use thiserror::Error;

/// The primary error type used across Tenure crates.
#[derive(Debug, Error)]
pub enum TenureError {
    /// A scheduled message uuid was requested that is not present in the
    /// owning collection. Indicates a programming or data error, not a
    /// transient condition; callers should not retry.
    #[error("scheduled message not found: {uuid}")]
    MessageNotFound { uuid: String },

    /// A configuration block declared a plugin id that is not registered
    /// with the plugin manager.
    #[error("unknown message plugin: {plugin_id}")]
    UnknownPlugin { plugin_id: String },

    /// A configuration block was syntactically present but malformed for its
    /// declared plugin (missing or mistyped settings).
    #[error("invalid configuration for plugin {plugin_id}: {message}")]
    InvalidConfig { plugin_id: String, message: String },

    /// Record-level configuration errors (invalid TOML, missing required
    /// fields, duplicate message uuids).
    #[error("configuration error: {0}")]
    Config(String),
}
