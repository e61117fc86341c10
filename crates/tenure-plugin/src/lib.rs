// SPDX-FileCopyrightText: 2026 Tenure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message plugin manager and keyed plugin instance collection.
//!
//! The plugin system manages scheduled-message plugins through a registry
//! pattern: each plugin is registered under its id and instantiates message
//! objects from configuration blocks. The [`MessageCollection`] wraps an
//! ordered set of such blocks, keyed by generated uuids, and materializes
//! instances lazily through an injected [`MessageFactory`].

pub mod collection;
pub mod registry;

pub use collection::MessageCollection;
pub use registry::{MessageFactory, MessagePlugin, MessagePluginManager};
