use super::compose;
use super::types::{ActionButton, NotificationMessage};
use crate::trigger::RunContext;
use crate::trigger::types::OtherEvent;

pub(crate) fn format_other(
    name: &str,
    event: &OtherEvent,
    ctx: &RunContext,
    compact: bool,
) -> NotificationMessage {
    let repository = &event.repository;
    let header = format!("Workflow \"{}\" ran in {}", ctx.workflow, repository.full_name);

    if compact {
        return NotificationMessage {
            body: compose(header, &[("Event Name", name)], None),
            actions: Vec::new(),
        };
    }

    NotificationMessage {
        body: compose(
            header,
            &[
                ("Repository", repository.full_name.as_str()),
                ("Workflow Job Name", ctx.job.as_str()),
                ("Event Name", name),
            ],
            None,
        ),
        actions: vec![
            ActionButton::view("Visit Repo", repository.html_url.as_str()),
            ActionButton::view("View Run", ctx.run_url()),
        ],
    }
}
