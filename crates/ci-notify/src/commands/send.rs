use clap::ArgMatches;
use tracing::{error, info, warn};

use ci_notify_core::errors::CiNotifyError;
use ci_notify_core::output::{self, RESPONSE_OUTPUT};
use ci_notify_core::{RunMode, RunOutcome};

use super::helpers::{execute_run, run_context};

pub(crate) fn handle_send_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.send_started");

    let ctx = run_context(matches);

    match execute_run(&ctx, RunMode::Send)? {
        Ok(RunOutcome::Delivered(result)) => {
            output::set_output(RESPONSE_OUTPUT, &result.output_value()?)?;

            match result.confirmation() {
                Some(line) => println!("{}", line),
                None => warn!(
                    event = "cli.send_unconfirmed",
                    status = result.status_code
                ),
            }

            info!(
                event = "cli.send_completed",
                status = result.status_code
            );
            Ok(())
        }
        Ok(RunOutcome::Previewed(_)) => {
            error!(event = "cli.send_failed", reason = "unexpected_preview");
            Err("Send run returned a preview".into())
        }
        Err(e) => {
            error!(
                event = "cli.send_failed",
                error = %e,
                error_code = e.error_code(),
                user_error = e.is_user_error()
            );
            Err(e.into())
        }
    }
}
