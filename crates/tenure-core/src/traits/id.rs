// SPDX-FileCopyrightText: 2026 Tenure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identifier generation capability.

/// Produces fresh unique string identifiers.
///
/// Injected into collections instead of reached for globally, so tests can
/// substitute a deterministic generator. Implementations are assumed
/// collision-free; consumers do not re-check.
pub trait IdGenerator: Send + Sync {
    /// Returns a new identifier, distinct from all previously returned ones.
    fn generate(&self) -> String;
}

/// Default generator backed by random v4 uuids.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
