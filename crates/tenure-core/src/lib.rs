// SPDX-FileCopyrightText: 2026 Tenure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Tenure membership framework.
//!
//! This crate provides the foundational trait definitions, error types, and
//! common types used throughout the Tenure workspace. Message plugins and
//! the bundle entities that collect them build on what is defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::TenureError;
pub use traits::{IdGenerator, ScheduledMessage, UuidGenerator};
pub use types::MessageConfig;
