use ci_notify_config::ServerKind;

use super::compose;
use super::types::{ActionButton, NotificationMessage};
use crate::trigger::RunContext;
use crate::trigger::types::PushEvent;

/// Length of the abbreviated commit id shown in the header.
pub const SHORT_SHA_LEN: usize = 7;

/// Last [`SHORT_SHA_LEN`] characters of a commit id, or the whole id if shorter.
pub fn short_sha(id: &str) -> &str {
    let start = id
        .char_indices()
        .rev()
        .nth(SHORT_SHA_LEN - 1)
        .map(|(index, _)| index)
        .unwrap_or(0);
    &id[start..]
}

pub(crate) fn format_push(
    event: &PushEvent,
    ctx: &RunContext,
    server: &ServerKind,
    compact: bool,
) -> NotificationMessage {
    let commit = &event.head_commit;
    let header = format!(
        "{} has pushed {} to {}.",
        commit.committer.name,
        short_sha(&commit.id),
        event.repository.full_name
    );

    if compact {
        return NotificationMessage {
            body: compose(
                header,
                &[
                    ("Ref", ctx.git_ref.as_str()),
                    ("Workflow Job Name", ctx.job.as_str()),
                    ("Workflow Name", ctx.workflow.as_str()),
                ],
                None,
            ),
            actions: Vec::new(),
        };
    }

    let author = match server {
        ServerKind::GitHub => commit.author.username.as_deref().unwrap_or_default(),
        ServerKind::Gitea => commit.author.name.as_str(),
        ServerKind::Unrecognized(_) => "",
    };
    let pusher = match server {
        ServerKind::GitHub => event.pusher.name.as_deref().unwrap_or_default(),
        ServerKind::Gitea => event.pusher.full_name.as_deref().unwrap_or_default(),
        ServerKind::Unrecognized(_) => "",
    };
    let compare = match server {
        ServerKind::GitHub => event.compare.as_deref().unwrap_or_default(),
        ServerKind::Gitea => event.compare_url.as_deref().unwrap_or_default(),
        ServerKind::Unrecognized(_) => "",
    };

    let body = compose(
        header,
        &[
            ("Author", author),
            ("Author Email", commit.author.email.as_str()),
            ("Committer", commit.committer.name.as_str()),
            ("Committer Email", commit.committer.email.as_str()),
            ("Ref", ctx.git_ref.as_str()),
            ("Pushed by", pusher),
            ("Workflow Job Name", ctx.job.as_str()),
            ("Workflow Name", ctx.workflow.as_str()),
        ],
        Some(("Commit Message", commit.message.as_str())),
    );

    NotificationMessage {
        body,
        actions: vec![
            ActionButton::view("Compare", compare),
            ActionButton::view("Commit", commit.url.as_str()),
            ActionButton::view("Repository", event.repository.html_url.as_str()),
        ],
    }
}
