use clap::ArgMatches;
use tracing::{error, info};

use ci_notify_core::{RunMode, RunOutcome};

use super::helpers::{execute_run, run_context};

pub(crate) fn handle_preview_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.preview_started");

    let ctx = run_context(matches);

    match execute_run(&ctx, RunMode::Preview)? {
        Ok(RunOutcome::Previewed(request)) => {
            println!("POST {}", request.url);
            for (name, value) in request.redacted_headers() {
                println!("{}: {}", name, value);
            }
            println!();
            println!("{}", serde_json::to_string_pretty(&request.payload)?);

            info!(event = "cli.preview_completed", url = %request.url);
            Ok(())
        }
        Ok(RunOutcome::Delivered(_)) => {
            error!(event = "cli.preview_failed", reason = "unexpected_delivery");
            Err("Preview run sent a request".into())
        }
        Err(e) => {
            error!(event = "cli.preview_failed", error = %e);
            Err(e.into())
        }
    }
}
