//! A single notification run: resolve inputs, format, send.

use ci_notify_config::{InputStore, NotifyConfig};
use tracing::{debug, error, info};

use super::errors::RunError;
use super::types::{RunMode, RunOutcome, RunStage};
use crate::dispatch::{Dispatcher, build_request};
use crate::format::format_message;
use crate::trigger::{RunContext, load_event};

/// Tracks and logs the run's stage transitions.
struct StageTracker {
    current: RunStage,
}

impl StageTracker {
    fn new() -> Self {
        Self {
            current: RunStage::NotReady,
        }
    }

    fn advance(&mut self, next: RunStage) {
        debug_assert!(
            self.current.can_transition_to(next),
            "invalid run transition {} -> {}",
            self.current,
            next
        );
        debug!(
            event = "core.run.stage_entered",
            from = %self.current,
            to = %next,
        );
        self.current = next;
    }
}

/// Run one notification with a default HTTP client.
///
/// See [`run_with`].
pub async fn run(
    inputs: &dyn InputStore,
    ctx: &RunContext,
    mode: RunMode,
) -> Result<RunOutcome, RunError> {
    run_with(&Dispatcher::new(), inputs, ctx, mode).await
}

/// Run one notification.
///
/// Resolves the configuration from `inputs`, loads and formats the event
/// described by `ctx`, builds the request and, in [`RunMode::Send`], posts
/// it once through `dispatcher`. Any failure ends the run; there is no
/// partial success.
pub async fn run_with(
    dispatcher: &Dispatcher,
    inputs: &dyn InputStore,
    ctx: &RunContext,
    mode: RunMode,
) -> Result<RunOutcome, RunError> {
    let mut stages = StageTracker::new();

    match execute(dispatcher, inputs, ctx, mode, &mut stages).await {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            stages.advance(RunStage::Failed);
            error!(
                event = "core.run.failed",
                error = %e,
            );
            Err(e)
        }
    }
}

async fn execute(
    dispatcher: &Dispatcher,
    inputs: &dyn InputStore,
    ctx: &RunContext,
    mode: RunMode,
    stages: &mut StageTracker,
) -> Result<RunOutcome, RunError> {
    let config = NotifyConfig::resolve(inputs)?;
    stages.advance(RunStage::InputsResolved);

    // Diagnostic dumps require the `debug` input.
    if config.debug {
        debug!(event = "core.run.context", context = ?ctx);
    }

    info!(
        event = "core.run.started",
        event_name = %ctx.event_name,
        url = %config.url,
        compact = config.simple_message,
    );

    let event = load_event(ctx)?;
    if config.debug {
        debug!(event = "core.run.event_loaded", payload = ?event);
    }

    let message = format_message(&event, ctx, &config.server_kind, config.simple_message);
    stages.advance(RunStage::MessageFormatted);

    let request = build_request(&config, &message)?;
    if config.debug {
        debug!(
            event = "core.run.request_built",
            url = %request.url,
            headers = ?request.redacted_headers(),
            body = %request.body,
        );
    }

    if mode == RunMode::Preview {
        info!(event = "core.run.preview_completed", url = %request.url);
        return Ok(RunOutcome::Previewed(request));
    }

    let result = dispatcher.send(&request, &config.topic).await?;
    stages.advance(RunStage::RequestSent);
    stages.advance(RunStage::Succeeded);

    info!(
        event = "core.run.completed",
        status = result.status_code,
    );
    Ok(RunOutcome::Delivered(result))
}
