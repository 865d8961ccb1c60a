// ABOUTME: Notification data model with a per-post identity, severity kind, and message text
// A fresh id is minted on every post so repeated messages still count as new notifications

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a single posted notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(Uuid);

impl NotificationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short form is enough to tell posts apart in the logs
        let full = self.0.to_string();
        f.write_str(full.split('-').next().unwrap_or(&full))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    #[serde(other)]
    Info,
}

impl NotificationKind {
    /// Parses a kind name, treating anything unrecognized as `Info`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }
}

impl From<&str> for NotificationKind {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    pub posted_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message: message.into(),
            posted_at: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    /// Same kind and text under a new identity.
    pub fn repost(&self) -> Self {
        Self::new(self.kind, self.message.clone())
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ids_differ_for_identical_messages() {
        let first = Notification::success("Saved");
        let second = Notification::success("Saved");
        assert_ne!(first.id(), second.id());
        assert_eq!(first.message, second.message);
    }

    #[test]
    fn test_repost_keeps_content_but_changes_id() {
        let original = Notification::error("Failed");
        let again = original.repost();
        assert_ne!(original.id(), again.id());
        assert_eq!(again.kind, NotificationKind::Error);
        assert_eq!(again.message, "Failed");
    }

    #[test]
    fn test_unrecognized_kind_names_become_info() {
        assert_eq!(NotificationKind::from_name("success"), NotificationKind::Success);
        assert_eq!(NotificationKind::from_name(" ERROR "), NotificationKind::Error);
        assert_eq!(NotificationKind::from_name("info"), NotificationKind::Info);
        assert_eq!(NotificationKind::from_name("warning"), NotificationKind::Info);
        assert_eq!(NotificationKind::from(""), NotificationKind::Info);
    }

    #[test]
    fn test_unknown_serde_tag_deserializes_as_info() {
        #[derive(Deserialize)]
        struct Wrapper {
            kind: NotificationKind,
        }

        let parsed: Wrapper = toml::from_str("kind = \"warning\"").unwrap();
        assert_eq!(parsed.kind, NotificationKind::Info);

        let parsed: Wrapper = toml::from_str("kind = \"error\"").unwrap();
        assert_eq!(parsed.kind, NotificationKind::Error);
    }

    #[test]
    fn test_display_id_is_short() {
        let id = NotificationId::new();
        assert_eq!(id.to_string().len(), 8);
    }
}
