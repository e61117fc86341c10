// SPDX-FileCopyrightText: 2026 Tenure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin manager for scheduled-message plugins.
//!
//! The `MessagePluginManager` stores [`MessagePlugin`] definitions keyed by
//! plugin id and acts as the instance factory for message collections: given
//! a configuration block, it dispatches to the declaring plugin's
//! constructor. A registry of constructors keyed by type tag, no reflection.

use std::collections::HashMap;
use std::sync::Arc;

use tenure_core::{MessageConfig, ScheduledMessage, TenureError};
use tracing::debug;

/// Factory capability injected into message collections.
///
/// Given a configuration block, returns a message instance or fails when the
/// block's declared plugin is unknown or the block is malformed. Failures
/// are reported to the caller unchanged; no retry or interpretation happens
/// on either side of this seam.
pub trait MessageFactory: Send + Sync {
    /// Creates a message instance from the given configuration block.
    fn create(&self, config: &MessageConfig) -> Result<Arc<dyn ScheduledMessage>, TenureError>;
}

/// A scheduled-message plugin definition.
///
/// One definition per message kind; the definition validates plugin-specific
/// settings and constructs instances.
pub trait MessagePlugin: Send + Sync {
    /// Unique id of this plugin (e.g. "reminder", "expiry").
    fn plugin_id(&self) -> &str;

    /// Semantic version of the plugin definition.
    fn version(&self) -> semver::Version;

    /// Human-readable description of what messages this plugin produces.
    fn description(&self) -> &str;

    /// Constructs a message instance from the given configuration block.
    ///
    /// Fails with [`TenureError::InvalidConfig`] when required settings are
    /// missing or mistyped.
    fn create(&self, config: &MessageConfig) -> Result<Arc<dyn ScheduledMessage>, TenureError>;
}

/// Registry of scheduled-message plugins, indexed by plugin id.
pub struct MessagePluginManager {
    plugins: HashMap<String, Arc<dyn MessagePlugin>>,
}

impl MessagePluginManager {
    /// Creates an empty plugin manager.
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
        }
    }

    /// Registers a plugin under its id. Re-registering an id replaces the
    /// previous definition.
    pub fn register(&mut self, plugin: Arc<dyn MessagePlugin>) {
        debug!(
            plugin_id = %plugin.plugin_id(),
            version = %plugin.version(),
            "registered message plugin"
        );
        self.plugins.insert(plugin.plugin_id().to_string(), plugin);
    }

    /// Looks up a plugin definition by id.
    pub fn get(&self, plugin_id: &str) -> Option<Arc<dyn MessagePlugin>> {
        self.plugins.get(plugin_id).cloned()
    }

    /// Returns (id, description) pairs for all registered plugins, sorted
    /// by id.
    pub fn list(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .plugins
            .values()
            .map(|p| (p.plugin_id(), p.description()))
            .collect();
        entries.sort_by_key(|(id, _)| *id);
        entries
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl Default for MessagePluginManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MessagePluginManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<&str> = self.plugins.keys().map(String::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("MessagePluginManager")
            .field("plugins", &ids)
            .finish()
    }
}

impl MessageFactory for MessagePluginManager {
    fn create(&self, config: &MessageConfig) -> Result<Arc<dyn ScheduledMessage>, TenureError> {
        let plugin =
            self.plugins
                .get(&config.plugin_id)
                .ok_or_else(|| TenureError::UnknownPlugin {
                    plugin_id: config.plugin_id.clone(),
                })?;
        plugin.create(config)
    }
}
