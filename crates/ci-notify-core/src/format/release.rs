use super::compose;
use super::types::{ActionButton, NotificationMessage};
use crate::trigger::RunContext;
use crate::trigger::types::ReleaseEvent;

pub(crate) fn format_release(
    event: &ReleaseEvent,
    ctx: &RunContext,
    compact: bool,
) -> NotificationMessage {
    let release = &event.release;
    let author = release.author.login.as_str();
    let name = release.name.as_deref().unwrap_or_default();
    let prerelease = release.prerelease.to_string();
    let notes = release.body.as_deref().unwrap_or_default();

    let header = format!(
        "{} has {} {} on {}.",
        author, event.action, release.tag_name, event.repository.full_name
    );

    if compact {
        return NotificationMessage {
            body: compose(
                header,
                &[
                    ("Name", name),
                    ("Prerelease", prerelease.as_str()),
                    ("Workflow Job Name", ctx.job.as_str()),
                    ("Workflow Name", ctx.workflow.as_str()),
                ],
                Some(("Release Message", notes)),
            ),
            actions: Vec::new(),
        };
    }

    let body = compose(
        header,
        &[
            ("Repo", event.repository.html_url.as_str()),
            ("Name", name),
            ("Author", author),
            ("Prerelease", prerelease.as_str()),
            ("Workflow Job Name", ctx.job.as_str()),
            ("Workflow Name", ctx.workflow.as_str()),
        ],
        Some(("Release Message", notes)),
    );

    NotificationMessage {
        body,
        actions: vec![
            ActionButton::view("Release URL", release.html_url.as_str()),
            ActionButton::view(
                "Download Tar",
                release.tarball_url.as_deref().unwrap_or_default(),
            ),
            ActionButton::view(
                "Download Zip",
                release.zipball_url.as_deref().unwrap_or_default(),
            ),
        ],
    }
}
