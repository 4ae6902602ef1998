mod global;
mod notify;


use clap::Command;

pub fn build_cli() -> Command {
    global::root_command()
        .subcommand(notify::send_command())
        .subcommand(notify::preview_command())
}
