// SPDX-FileCopyrightText: 2026 Tenure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Membership term type bundle entity.
//!
//! A term type ties a membership category to a term length, a grace period,
//! a workflow id, and an ordered collection of scheduled messages. The
//! record ([`TermTypeRecord`]) is the persisted shape owned by the external
//! framework; [`MembershipTermType`] is the runtime entity that wraps a
//! record together with the plugin machinery needed to materialize its
//! messages.

pub mod record;
pub mod term_type;

pub use record::{TermTypeRecord, parse_term_type_record};
pub use term_type::MembershipTermType;
