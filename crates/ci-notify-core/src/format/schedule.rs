use super::compose;
use super::types::{ActionButton, NotificationMessage};
use crate::trigger::RunContext;
use crate::trigger::types::ScheduleEvent;

// The repository comes from the run context; schedule payloads carry only the cron.
pub(crate) fn format_schedule(
    event: &ScheduleEvent,
    ctx: &RunContext,
    compact: bool,
) -> NotificationMessage {
    let header = format!("Scheduled task \"{}\" ran in {}.", ctx.job, ctx.repository);

    if compact {
        return NotificationMessage {
            body: compose(header, &[("Workflow Name", ctx.workflow.as_str())], None),
            actions: Vec::new(),
        };
    }

    NotificationMessage {
        body: compose(
            header,
            &[("Workflow Name", ctx.workflow.as_str()), ("Cron", event.schedule.as_str())],
            None,
        ),
        actions: vec![
            ActionButton::view("Visit Repository", ctx.repository_url()),
            ActionButton::view("View Run", ctx.run_url()),
        ],
    }
}
