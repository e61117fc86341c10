// SPDX-FileCopyrightText: 2026 Tenure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Term type record parsing from TOML.
//!
//! The record is the config-export shape of a membership term type: the
//! scalar fields plus the `messages` array of configuration blocks, each
//! keyed by its collection-assigned uuid. Records are produced and consumed
//! by the external framework; this module only parses and validates them.

use serde::{Deserialize, Serialize};
use tenure_core::{MessageConfig, TenureError};

/// Persisted representation of one membership term type.
///
/// `term_length` and `grace_period` are opaque duration expressions
/// (e.g. "1 year", "P30D"); the scheduling collaborator interprets them.
/// `workflow` references an external state-machine definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermTypeRecord {
    /// Machine name, unique within its namespace.
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// Membership category this term type belongs to.
    pub membership_type: String,
    /// Opaque duration expression for the term itself.
    pub term_length: String,
    /// Opaque duration expression for the post-expiry grace period.
    #[serde(default)]
    pub grace_period: String,
    /// Workflow (state machine) id applied to terms of this type.
    #[serde(default)]
    pub workflow: String,
    /// Scheduled message configuration blocks, in evaluation order.
    #[serde(default)]
    pub messages: Vec<MessageConfig>,
}

/// Parses a term type record from TOML content.
///
/// Validates that id and label are non-empty and that every message block
/// carries a plugin id and a unique, non-empty uuid.
pub fn parse_term_type_record(toml_content: &str) -> Result<TermTypeRecord, TenureError> {
    let record: TermTypeRecord = toml::from_str(toml_content)
        .map_err(|e| TenureError::Config(format!("invalid term type record: {e}")))?;

    if record.id.is_empty() {
        return Err(TenureError::Config(
            "term type record: id must not be empty".to_string(),
        ));
    }
    if record.label.is_empty() {
        return Err(TenureError::Config(
            "term type record: label must not be empty".to_string(),
        ));
    }

    let mut seen = Vec::with_capacity(record.messages.len());
    for message in &record.messages {
        if message.plugin_id.is_empty() {
            return Err(TenureError::Config(
                "term type record: message block without plugin_id".to_string(),
            ));
        }
        if message.uuid.is_empty() {
            return Err(TenureError::Config(format!(
                "term type record: message block for plugin '{}' has no uuid",
                message.plugin_id
            )));
        }
        if seen.contains(&message.uuid.as_str()) {
            return Err(TenureError::Config(format!(
                "term type record: duplicate message uuid '{}'",
                message.uuid
            )));
        }
        seen.push(message.uuid.as_str());
    }

    Ok(record)
}

impl TermTypeRecord {
    /// Serializes the record back to TOML for the persisting collaborator.
    pub fn to_toml(&self) -> Result<String, TenureError> {
        toml::to_string_pretty(self)
            .map_err(|e| TenureError::Config(format!("cannot serialize term type record: {e}")))
    }
}
