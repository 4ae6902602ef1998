//! Formatter output types.

use serde::{Deserialize, Serialize};

/// What the notification service does when an action button is tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Open the URL.
    View,
}

/// A clickable link delivered alongside the notification body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionButton {
    pub action: ActionKind,
    pub label: String,
    pub url: String,
    /// Dismiss the notification once the action is taken. Always set.
    pub clear: bool,
}

impl ActionButton {
    pub fn view(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            action: ActionKind::View,
            label: label.into(),
            url: url.into(),
            clear: true,
        }
    }
}

/// Message body plus the ordered action buttons for one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationMessage {
    pub body: String,
    pub actions: Vec<ActionButton>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_action_serialization() {
        let button = ActionButton::view("Commit", "https://github.com/org/repo/commit/abc");
        let json = serde_json::to_value(&button).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "action": "view",
                "label": "Commit",
                "url": "https://github.com/org/repo/commit/abc",
                "clear": true
            })
        );
    }
}
