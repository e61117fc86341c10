// SPDX-FileCopyrightText: 2026 Tenure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Tenure workspace.

use serde::{Deserialize, Serialize};

/// One scheduled message's configuration block.
///
/// The block always carries the declaring plugin id and, once the block is
/// part of a collection, the generated uuid that keys it. All remaining
/// plugin-specific settings are kept as an open map; each plugin validates
/// its own settings at instantiation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageConfig {
    /// Id of the message plugin this block configures.
    pub plugin_id: String,
    /// Collection-assigned uuid. Empty until the block is added to a
    /// collection; any caller-supplied value is overwritten on add.
    #[serde(default)]
    pub uuid: String,
    /// Plugin-specific settings.
    #[serde(flatten)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

impl MessageConfig {
    /// Creates a configuration block for the given plugin with no settings.
    pub fn new(plugin_id: impl Into<String>) -> Self {
        Self {
            plugin_id: plugin_id.into(),
            uuid: String::new(),
            settings: serde_json::Map::new(),
        }
    }

    /// Adds one plugin-specific setting, builder style.
    #[must_use]
    pub fn with_setting(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.settings.insert(key.into(), value);
        self
    }
}
