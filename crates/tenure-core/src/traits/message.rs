// SPDX-FileCopyrightText: 2026 Tenure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scheduled message instance trait.

/// A materialized scheduled message, produced by a message plugin from one
/// configuration block.
///
/// Instances are immutable once created; editing a message means rewriting
/// its configuration block and letting the owning collection re-instantiate.
pub trait ScheduledMessage: std::fmt::Debug + Send + Sync {
    /// The collection-assigned uuid of this message.
    fn uuid(&self) -> &str;

    /// Id of the plugin that produced this instance.
    fn plugin_id(&self) -> &str;

    /// Days before term expiry at which the message fires. Zero means the
    /// day of expiry itself. Interpretation of the term's duration
    /// expressions is the scheduling collaborator's concern.
    fn send_offset_days(&self) -> i64;

    /// Human-readable one-line summary, used by listing collaborators.
    fn summary(&self) -> String;
}
