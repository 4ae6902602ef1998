//! Event-to-message formatting.
//!
//! Each event kind has its own formatter producing an immutable
//! [`NotificationMessage`]. The compact layout keeps the header and a few
//! fields and never carries action buttons.

mod fallback;
mod push;
mod release;
mod schedule;

pub mod types;

pub use push::{SHORT_SHA_LEN, short_sha};
pub use types::{ActionButton, ActionKind, NotificationMessage};

use ci_notify_config::ServerKind;

use crate::trigger::{Event, RunContext};

/// Format the notification for `event`.
///
/// `server` selects which payload fields supply push authors, pushers and
/// compare links. `compact` selects the short layout without actions.
pub fn format_message(
    event: &Event,
    ctx: &RunContext,
    server: &ServerKind,
    compact: bool,
) -> NotificationMessage {
    match event {
        Event::Push(push) => push::format_push(push, ctx, server, compact),
        Event::Release(release) => release::format_release(release, ctx, compact),
        Event::Schedule(schedule) => schedule::format_schedule(schedule, ctx, compact),
        Event::Other { name, payload } => fallback::format_other(name, payload, ctx, compact),
    }
}

/// Header, a blank line, `Label: value` lines, and an optional titled block.
pub(crate) fn compose(
    header: String,
    fields: &[(&str, &str)],
    trailer: Option<(&str, &str)>,
) -> String {
    let mut body = header;

    if !fields.is_empty() {
        let lines: Vec<String> = fields
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect();
        body.push_str("\n\n");
        body.push_str(&lines.join("\n"));
    }

    if let Some((title, text)) = trailer {
        body.push_str("\n\n");
        body.push_str(title);
        body.push('\n');
        body.push_str(text);
    }

    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trigger::EventKind;
    use serde_json::json;

    fn context() -> RunContext {
        RunContext {
            event_name: "push".to_string(),
            git_ref: "refs/heads/main".to_string(),
            job: "build".to_string(),
            workflow: "CI".to_string(),
            server_url: "https://github.com".to_string(),
            repository: "org/repo".to_string(),
            run_id: "99".to_string(),
            event_path: None,
        }
    }

    fn push_event() -> Event {
        let payload = json!({
            "head_commit": {
                "id": "abcdef1234567",
                "url": "https://github.com/org/repo/commit/abcdef1234567",
                "message": "Fix flaky test",
                "author": {"name": "Mona Lisa", "email": "mona@example.com", "username": "octocat"},
                "committer": {"name": "Hubot", "email": "hubot@example.com", "username": "hubot"}
            },
            "repository": {"full_name": "org/repo", "html_url": "https://github.com/org/repo"},
            "pusher": {"name": "octocat", "full_name": "Octo Cat"},
            "compare": "https://github.com/org/repo/compare/a...b",
            "compare_url": "https://gitea.example.com/org/repo/compare/a...b"
        });
        Event::from_payload(&EventKind::Push, payload).unwrap()
    }

    fn release_event() -> Event {
        let payload = json!({
            "action": "published",
            "release": {
                "html_url": "https://github.com/org/repo/releases/tag/v1.2.0",
                "tarball_url": "https://api.github.com/repos/org/repo/tarball/v1.2.0",
                "zipball_url": "https://api.github.com/repos/org/repo/zipball/v1.2.0",
                "tag_name": "v1.2.0",
                "name": "Version 1.2",
                "body": "Bug fixes",
                "prerelease": true,
                "author": {"login": "octocat"}
            },
            "repository": {"full_name": "org/repo", "html_url": "https://github.com/org/repo"}
        });
        Event::from_payload(&EventKind::Release, payload).unwrap()
    }

    fn schedule_event() -> Event {
        Event::from_payload(&EventKind::Schedule, json!({"schedule": "30 5 * * 1-5"})).unwrap()
    }

    fn other_event(name: &str) -> Event {
        let payload = json!({
            "repository": {"full_name": "org/repo", "html_url": "https://github.com/org/repo"}
        });
        Event::from_payload(&EventKind::from_name(name), payload).unwrap()
    }

    fn header(message: &NotificationMessage) -> &str {
        message.body.lines().next().unwrap_or_default()
    }

    fn all_events() -> Vec<Event> {
        vec![
            push_event(),
            release_event(),
            schedule_event(),
            other_event("workflow_dispatch"),
        ]
    }

    #[test]
    fn test_push_header_uses_last_seven_of_commit_id() {
        let message = format_message(&push_event(), &context(), &ServerKind::GitHub, false);
        assert_eq!(header(&message), "Hubot has pushed 1234567 to org/repo.");
    }

    #[test]
    fn test_push_long_body_github() {
        let message = format_message(&push_event(), &context(), &ServerKind::GitHub, false);
        assert_eq!(
            message.body,
            "Hubot has pushed 1234567 to org/repo.\n\n\
             Author: octocat\n\
             Author Email: mona@example.com\n\
             Committer: Hubot\n\
             Committer Email: hubot@example.com\n\
             Ref: refs/heads/main\n\
             Pushed by: octocat\n\
             Workflow Job Name: build\n\
             Workflow Name: CI\n\n\
             Commit Message\n\
             Fix flaky test"
        );
    }

    #[test]
    fn test_push_actions_github() {
        let message = format_message(&push_event(), &context(), &ServerKind::GitHub, false);
        let labels: Vec<&str> = message.actions.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["Compare", "Commit", "Repository"]);
        assert_eq!(
            message.actions[0].url,
            "https://github.com/org/repo/compare/a...b"
        );
        assert_eq!(
            message.actions[1].url,
            "https://github.com/org/repo/commit/abcdef1234567"
        );
        assert_eq!(message.actions[2].url, "https://github.com/org/repo");
        assert!(message.actions.iter().all(|a| a.clear));
    }

    #[test]
    fn test_push_gitea_sources_different_fields() {
        let message = format_message(&push_event(), &context(), &ServerKind::Gitea, false);
        assert!(message.body.contains("Author: Mona Lisa\n"));
        assert!(message.body.contains("Pushed by: Octo Cat\n"));
        assert_eq!(
            message.actions[0].url,
            "https://gitea.example.com/org/repo/compare/a...b"
        );
    }

    #[test]
    fn test_push_unrecognized_server_renders_empty_fields() {
        let server = ServerKind::Unrecognized("gitlab".to_string());
        let message = format_message(&push_event(), &context(), &server, false);
        assert!(message.body.contains("Author: \n"));
        assert!(message.body.contains("Pushed by: \n"));
        assert_eq!(message.actions[0].url, "");
    }

    #[test]
    fn test_push_compact_keeps_header_ref_job_workflow() {
        let message = format_message(&push_event(), &context(), &ServerKind::GitHub, true);
        assert_eq!(
            message.body,
            "Hubot has pushed 1234567 to org/repo.\n\n\
             Ref: refs/heads/main\n\
             Workflow Job Name: build\n\
             Workflow Name: CI"
        );
        assert!(message.actions.is_empty());
    }

    #[test]
    fn test_release_long_body_and_actions() {
        let message = format_message(&release_event(), &context(), &ServerKind::GitHub, false);
        assert_eq!(
            message.body,
            "octocat has published v1.2.0 on org/repo.\n\n\
             Repo: https://github.com/org/repo\n\
             Name: Version 1.2\n\
             Author: octocat\n\
             Prerelease: true\n\
             Workflow Job Name: build\n\
             Workflow Name: CI\n\n\
             Release Message\n\
             Bug fixes"
        );
        let labels: Vec<&str> = message.actions.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["Release URL", "Download Tar", "Download Zip"]);
        assert_eq!(
            message.actions[1].url,
            "https://api.github.com/repos/org/repo/tarball/v1.2.0"
        );
    }

    #[test]
    fn test_release_compact_keeps_release_body() {
        let message = format_message(&release_event(), &context(), &ServerKind::GitHub, true);
        assert!(message.body.starts_with("octocat has published v1.2.0 on org/repo."));
        assert!(message.body.contains("Name: Version 1.2"));
        assert!(message.body.contains("Prerelease: true"));
        assert!(message.body.ends_with("Release Message\nBug fixes"));
        assert!(!message.body.contains("Repo:"));
        assert!(!message.body.contains("Author:"));
        assert!(message.actions.is_empty());
    }

    #[test]
    fn test_schedule_uses_run_context() {
        let message = format_message(&schedule_event(), &context(), &ServerKind::GitHub, false);
        assert_eq!(
            message.body,
            "Scheduled task \"build\" ran in org/repo.\n\n\
             Workflow Name: CI\n\
             Cron: 30 5 * * 1-5"
        );
        assert_eq!(message.actions.len(), 2);
        assert_eq!(message.actions[0].label, "Visit Repository");
        assert_eq!(message.actions[0].url, "https://github.com/org/repo");
        assert_eq!(message.actions[1].label, "View Run");
        assert_eq!(
            message.actions[1].url,
            "https://github.com/org/repo/actions/runs/99"
        );
    }

    #[test]
    fn test_unrecognized_event_uses_fallback() {
        let message = format_message(
            &other_event("workflow_dispatch"),
            &context(),
            &ServerKind::GitHub,
            false,
        );
        assert_eq!(header(&message), "Workflow \"CI\" ran in org/repo");
        assert!(message.body.contains("Event Name: workflow_dispatch"));
        assert!(message.body.contains("Repository: org/repo"));
        let labels: Vec<&str> = message.actions.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["Visit Repo", "View Run"]);
    }

    #[test]
    fn test_compact_is_shorter_and_has_no_actions() {
        let ctx = context();
        for event in all_events() {
            let long = format_message(&event, &ctx, &ServerKind::GitHub, false);
            let compact = format_message(&event, &ctx, &ServerKind::GitHub, true);
            assert!(
                compact.body.len() < long.body.len(),
                "compact body for {} should be shorter",
                event.kind()
            );
            assert!(compact.actions.is_empty());
            assert!(!long.actions.is_empty());
        }
    }

    #[test]
    fn test_compose_without_fields_or_trailer() {
        assert_eq!(compose("Header".to_string(), &[], None), "Header");
    }
}
