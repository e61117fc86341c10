// SPDX-FileCopyrightText: 2026 Tenure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pre-expiry reminder message plugin.

use std::sync::Arc;

use tenure_core::{MessageConfig, ScheduledMessage, TenureError};
use tenure_plugin::MessagePlugin;

/// Plugin producing reminder messages sent a configured number of days
/// before a membership term expires.
///
/// Settings: `days_before` (required, non-negative integer) and `subject`
/// (optional string).
pub struct ReminderPlugin;

impl MessagePlugin for ReminderPlugin {
    fn plugin_id(&self) -> &str {
        "reminder"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn description(&self) -> &str {
        "Reminder sent a configured number of days before term expiry"
    }

    fn create(&self, config: &MessageConfig) -> Result<Arc<dyn ScheduledMessage>, TenureError> {
        let days_before = config
            .settings
            .get("days_before")
            .and_then(serde_json::Value::as_i64)
            .ok_or_else(|| TenureError::InvalidConfig {
                plugin_id: self.plugin_id().to_string(),
                message: "days_before is required and must be an integer".into(),
            })?;
        if days_before < 0 {
            return Err(TenureError::InvalidConfig {
                plugin_id: self.plugin_id().to_string(),
                message: format!("days_before must be non-negative, got {days_before}"),
            });
        }

        let subject = config
            .settings
            .get("subject")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);

        Ok(Arc::new(ReminderMessage {
            uuid: config.uuid.clone(),
            days_before,
            subject,
        }))
    }
}

/// A materialized reminder message.
#[derive(Debug)]
pub struct ReminderMessage {
    uuid: String,
    days_before: i64,
    subject: Option<String>,
}

impl ScheduledMessage for ReminderMessage {
    fn uuid(&self) -> &str {
        &self.uuid
    }

    fn plugin_id(&self) -> &str {
        "reminder"
    }

    fn send_offset_days(&self) -> i64 {
        self.days_before
    }

    fn summary(&self) -> String {
        match &self.subject {
            Some(subject) => format!(
                "reminder \"{}\" {} days before expiry",
                subject, self.days_before
            ),
            None => format!("reminder {} days before expiry", self.days_before),
        }
    }
}
