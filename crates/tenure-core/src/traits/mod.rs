// SPDX-FileCopyrightText: 2026 Tenure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the Tenure core and its collaborators.

pub mod id;
pub mod message;

pub use id::{IdGenerator, UuidGenerator};
pub use message::ScheduledMessage;
