// SPDX-FileCopyrightText: 2026 Tenure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime membership term type entity.

use std::sync::Arc;

use tenure_core::{IdGenerator, MessageConfig, ScheduledMessage, TenureError};
use tenure_plugin::{MessageCollection, MessageFactory};
use tracing::debug;

use crate::record::TermTypeRecord;

/// A membership term type: the bundle entity tying a membership category to
/// a term length, grace period, workflow, and scheduled messages.
///
/// The entity wraps a [`TermTypeRecord`] together with the plugin factory
/// and id generator its message collection needs. The collection is built
/// lazily on first access; reloading a record means constructing a new
/// entity, which discards any previously materialized instances.
///
/// Mutations never persist. The owning framework calls
/// [`to_record`](Self::to_record) and saves when its unit of work completes.
pub struct MembershipTermType {
    record: TermTypeRecord,
    collection: Option<MessageCollection>,
    factory: Arc<dyn MessageFactory>,
    ids: Arc<dyn IdGenerator>,
}

impl MembershipTermType {
    /// Wraps a loaded record, injecting the message plugin factory and the
    /// id generator used for new message uuids.
    pub fn new(
        record: TermTypeRecord,
        factory: Arc<dyn MessageFactory>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            record,
            collection: None,
            factory,
            ids,
        }
    }

    /// Machine name of this term type.
    pub fn id(&self) -> &str {
        &self.record.id
    }

    /// Human-readable label.
    pub fn label(&self) -> &str {
        &self.record.label
    }

    /// Membership category this term type belongs to.
    pub fn membership_type(&self) -> &str {
        &self.record.membership_type
    }

    /// Sets the membership category.
    pub fn set_membership_type(&mut self, membership_type: impl Into<String>) {
        self.record.membership_type = membership_type.into();
    }

    /// Opaque duration expression for the term itself.
    pub fn term_length(&self) -> &str {
        &self.record.term_length
    }

    /// Opaque duration expression for the post-expiry grace period.
    pub fn grace_period(&self) -> &str {
        &self.record.grace_period
    }

    /// Workflow id applied to terms of this type.
    pub fn workflow_id(&self) -> &str {
        &self.record.workflow
    }

    /// Sets the workflow id.
    pub fn set_workflow_id(&mut self, workflow: impl Into<String>) {
        self.record.workflow = workflow.into();
    }

    /// The scheduled message collection, built from the record's `messages`
    /// field on first access.
    pub fn messages(&mut self) -> &mut MessageCollection {
        let factory = Arc::clone(&self.factory);
        let ids = Arc::clone(&self.ids);
        let record = &self.record;
        self.collection.get_or_insert_with(move || {
            debug!(
                term_type = %record.id,
                count = record.messages.len(),
                "building message collection"
            );
            MessageCollection::from_configurations(factory, ids, record.messages.clone())
        })
    }

    /// Returns one scheduled message instance by uuid.
    pub fn message(&mut self, uuid: &str) -> Result<Arc<dyn ScheduledMessage>, TenureError> {
        self.messages().get(uuid)
    }

    /// Adds a scheduled message configuration and returns its generated
    /// uuid. Nothing is persisted; batch additions and save once.
    pub fn add_message(&mut self, config: MessageConfig) -> String {
        self.messages().add(config)
    }

    /// Deletes a scheduled message by uuid. Idempotent, and like
    /// [`add_message`](Self::add_message) never persists; the caller saves
    /// the record when its unit of work completes.
    pub fn delete_message(&mut self, uuid: &str) {
        self.messages().remove(uuid);
    }

    /// Named plugin collections of this entity, for the exporting
    /// collaborator. Term types carry exactly one: `"messages"`.
    pub fn plugin_collections(&mut self) -> Vec<(&'static str, &MessageCollection)> {
        vec![("messages", &*self.messages())]
    }

    /// Snapshot of the record with the message collection's backing store
    /// synced into the `messages` field, ready for persistence.
    pub fn to_record(&mut self) -> TermTypeRecord {
        if let Some(collection) = &self.collection {
            self.record.messages = collection.configurations().to_vec();
        }
        self.record.clone()
    }
}

impl std::fmt::Debug for MembershipTermType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MembershipTermType")
            .field("record", &self.record)
            .field("collection_built", &self.collection.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StubMessage {
        uuid: String,
    }

    impl ScheduledMessage for StubMessage {
        fn uuid(&self) -> &str {
            &self.uuid
        }

        fn plugin_id(&self) -> &str {
            "stub"
        }

        fn send_offset_days(&self) -> i64 {
            0
        }

        fn summary(&self) -> String {
            "stub".into()
        }
    }

    struct StubFactory;

    impl MessageFactory for StubFactory {
        fn create(
            &self,
            config: &MessageConfig,
        ) -> Result<Arc<dyn ScheduledMessage>, TenureError> {
            Ok(Arc::new(StubMessage {
                uuid: config.uuid.clone(),
            }))
        }
    }

    struct CountingIds(std::sync::atomic::AtomicU64);

    impl IdGenerator for CountingIds {
        fn generate(&self) -> String {
            format!(
                "uuid-{}",
                self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed)
            )
        }
    }

    fn term_type() -> MembershipTermType {
        let record = TermTypeRecord {
            id: "annual".into(),
            label: "Annual membership".into(),
            membership_type: "standard".into(),
            term_length: "1 year".into(),
            grace_period: "30 days".into(),
            workflow: "membership_term_default".into(),
            messages: Vec::new(),
        };
        MembershipTermType::new(
            record,
            Arc::new(StubFactory),
            Arc::new(CountingIds(std::sync::atomic::AtomicU64::new(1))),
        )
    }

    #[test]
    fn accessors_mirror_the_record() {
        let mut entity = term_type();
        assert_eq!(entity.id(), "annual");
        assert_eq!(entity.label(), "Annual membership");
        assert_eq!(entity.membership_type(), "standard");
        assert_eq!(entity.term_length(), "1 year");
        assert_eq!(entity.grace_period(), "30 days");
        assert_eq!(entity.workflow_id(), "membership_term_default");

        entity.set_membership_type("premium");
        entity.set_workflow_id("custom_flow");
        assert_eq!(entity.membership_type(), "premium");
        assert_eq!(entity.workflow_id(), "custom_flow");
    }

    #[test]
    fn collection_is_built_once_and_reused() {
        let mut entity = term_type();
        let uuid = entity.add_message(MessageConfig::new("stub"));
        // A second access must see the message added through the first.
        assert_eq!(entity.messages().keys().collect::<Vec<_>>(), vec![uuid]);
    }

    #[test]
    fn to_record_syncs_the_backing_store() {
        let mut entity = term_type();
        let u1 = entity.add_message(MessageConfig::new("stub"));
        let u2 = entity.add_message(MessageConfig::new("stub"));
        entity.delete_message(&u1);

        let record = entity.to_record();
        assert_eq!(record.messages.len(), 1);
        assert_eq!(record.messages[0].uuid, u2);
    }

    #[test]
    fn to_record_without_collection_access_keeps_loaded_messages() {
        let mut entity = term_type();
        let record = entity.to_record();
        assert!(record.messages.is_empty());
        assert_eq!(record.id, "annual");
    }

    #[test]
    fn plugin_collections_exposes_the_messages_collection() {
        let mut entity = term_type();
        entity.add_message(MessageConfig::new("stub"));

        let collections = entity.plugin_collections();
        assert_eq!(collections.len(), 1);
        assert_eq!(collections[0].0, "messages");
        assert_eq!(collections[0].1.len(), 1);
    }
}
