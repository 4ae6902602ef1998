use clap::ArgMatches;
use tracing::error;

use ci_notify_core::events;

mod helpers;
mod preview;
mod send;

use preview::handle_preview_command;
use send::handle_send_command;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("send", sub_matches)) => handle_send_command(sub_matches),
        Some(("preview", sub_matches)) => handle_preview_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
