// SPDX-FileCopyrightText: 2026 Tenure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyed plugin instance collection for scheduled messages.
//!
//! The collection owns an insertion-ordered set of configuration blocks
//! keyed by generated uuids, and materializes message instances lazily
//! through an injected [`MessageFactory`]. The configuration blocks are the
//! source of truth: the owning record reads them back for persistence, while
//! the instance cache is a derived projection that is dropped whenever a
//! block changes.
//!
//! Not designed for concurrent mutation; callers serialize access to one
//! collection within their own unit of work.

use std::collections::HashMap;
use std::sync::Arc;

use tenure_core::{IdGenerator, MessageConfig, ScheduledMessage, TenureError};
use tracing::debug;

use crate::registry::MessageFactory;

/// Ordered collection of scheduled-message configurations with a lazy
/// instance cache.
pub struct MessageCollection {
    factory: Arc<dyn MessageFactory>,
    ids: Arc<dyn IdGenerator>,
    /// Source of truth, in insertion order.
    configurations: Vec<MessageConfig>,
    /// Lazily-populated cache of materialized instances, keyed by uuid.
    instances: HashMap<String, Arc<dyn ScheduledMessage>>,
}

impl MessageCollection {
    /// Creates an empty collection.
    pub fn new(factory: Arc<dyn MessageFactory>, ids: Arc<dyn IdGenerator>) -> Self {
        Self::from_configurations(factory, ids, Vec::new())
    }

    /// Creates a collection over an existing set of configuration blocks,
    /// typically the `messages` field of a reloaded term-type record. Order
    /// of the given blocks becomes the collection's iteration order. Nothing
    /// is instantiated until [`get`](Self::get) is called.
    pub fn from_configurations(
        factory: Arc<dyn MessageFactory>,
        ids: Arc<dyn IdGenerator>,
        configurations: Vec<MessageConfig>,
    ) -> Self {
        Self {
            factory,
            ids,
            configurations,
            instances: HashMap::new(),
        }
    }

    /// Returns the message instance for the given uuid, materializing it on
    /// first access.
    ///
    /// Repeated calls with no intervening mutation return the same cached
    /// instance. Fails with [`TenureError::MessageNotFound`] when the uuid
    /// has no configuration block; factory failures propagate unchanged.
    pub fn get(&mut self, uuid: &str) -> Result<Arc<dyn ScheduledMessage>, TenureError> {
        let config = self
            .configurations
            .iter()
            .find(|c| c.uuid == uuid)
            .ok_or_else(|| TenureError::MessageNotFound {
                uuid: uuid.to_string(),
            })?;

        if let Some(instance) = self.instances.get(uuid) {
            return Ok(Arc::clone(instance));
        }

        let instance = self.factory.create(config)?;
        debug!(uuid, plugin_id = %config.plugin_id, "materialized scheduled message");
        self.instances.insert(uuid.to_string(), Arc::clone(&instance));
        Ok(instance)
    }

    /// Appends a configuration block under a freshly generated uuid and
    /// returns that uuid.
    ///
    /// Any uuid already present in the block is overwritten; uuids are never
    /// caller-supplied. The block is not instantiated eagerly, and nothing
    /// is persisted; the owning record saves when its caller decides to.
    pub fn add(&mut self, mut config: MessageConfig) -> String {
        let uuid = self.ids.generate();
        config.uuid = uuid.clone();
        debug!(uuid = %uuid, plugin_id = %config.plugin_id, "added scheduled message");
        self.configurations.push(config);
        uuid
    }

    /// Removes the configuration block and any cached instance for the given
    /// uuid. Unknown uuids are a no-op, so external double-deletes are
    /// harmless. Remaining blocks keep their relative order.
    pub fn remove(&mut self, uuid: &str) {
        let before = self.configurations.len();
        self.configurations.retain(|c| c.uuid != uuid);
        self.instances.remove(uuid);
        if self.configurations.len() < before {
            debug!(uuid, "removed scheduled message");
        }
    }

    /// Replaces the configuration block for the given uuid in place and
    /// invalidates its cached instance, so the next [`get`](Self::get)
    /// re-instantiates from the new block. The uuid and the block's position
    /// in iteration order are preserved.
    pub fn update(&mut self, uuid: &str, mut config: MessageConfig) -> Result<(), TenureError> {
        let slot = self
            .configurations
            .iter_mut()
            .find(|c| c.uuid == uuid)
            .ok_or_else(|| TenureError::MessageNotFound {
                uuid: uuid.to_string(),
            })?;
        config.uuid = uuid.to_string();
        *slot = config;
        self.instances.remove(uuid);
        debug!(uuid, "updated scheduled message configuration");
        Ok(())
    }

    /// Returns a fresh iterator over the uuids in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.configurations.iter().map(|c| c.uuid.as_str())
    }

    /// The backing configuration blocks, in insertion order. This is what
    /// the owning record persists.
    pub fn configurations(&self) -> &[MessageConfig] {
        &self.configurations
    }

    /// Returns the number of configuration blocks.
    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    /// Returns true if the collection holds no configuration blocks.
    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }
}

impl std::fmt::Debug for MessageCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageCollection")
            .field("configurations", &self.configurations)
            .field("materialized", &self.instances.len())
            .finish()
    }
}
