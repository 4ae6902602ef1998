use clap::{Arg, ArgAction, Command};

pub fn root_command() -> Command {
    Command::new("ci-notify")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Send CI pipeline events to a push-notification service")
        .long_about(
            "ci-notify reads the event that triggered the current workflow run, formats it \
             into a notification with action buttons, and posts it to a push-notification \
             endpoint. Inputs are read from INPUT_* environment variables, as provided by \
             GitHub and Gitea runners.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging output (same as the debug input)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}
