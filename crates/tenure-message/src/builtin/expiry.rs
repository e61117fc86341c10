// SPDX-FileCopyrightText: 2026 Tenure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Expiry notice message plugin.

use std::sync::Arc;

use tenure_core::{MessageConfig, ScheduledMessage, TenureError};
use tenure_plugin::MessagePlugin;

/// Plugin producing the notice sent on the day a membership term expires.
///
/// Settings: `subject` (optional string).
pub struct ExpiryPlugin;

impl MessagePlugin for ExpiryPlugin {
    fn plugin_id(&self) -> &str {
        "expiry"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn description(&self) -> &str {
        "Notice sent on the day of term expiry"
    }

    fn create(&self, config: &MessageConfig) -> Result<Arc<dyn ScheduledMessage>, TenureError> {
        let subject = match config.settings.get("subject") {
            None => None,
            Some(value) => Some(
                value
                    .as_str()
                    .ok_or_else(|| TenureError::InvalidConfig {
                        plugin_id: self.plugin_id().to_string(),
                        message: "subject must be a string".into(),
                    })?
                    .to_string(),
            ),
        };

        Ok(Arc::new(ExpiryMessage {
            uuid: config.uuid.clone(),
            subject,
        }))
    }
}

/// A materialized expiry notice.
#[derive(Debug)]
pub struct ExpiryMessage {
    uuid: String,
    subject: Option<String>,
}

impl ScheduledMessage for ExpiryMessage {
    fn uuid(&self) -> &str {
        &self.uuid
    }

    fn plugin_id(&self) -> &str {
        "expiry"
    }

    fn send_offset_days(&self) -> i64 {
        0
    }

    fn summary(&self) -> String {
        match &self.subject {
            Some(subject) => format!("expiry notice \"{subject}\" on day of expiry"),
            None => "expiry notice on day of expiry".to_string(),
        }
    }
}
