use clap::{Arg, Command};

fn event_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("event-name")
                .long("event-name")
                .help("Event name to use instead of GITHUB_EVENT_NAME")
                .value_name("NAME"),
        )
        .arg(
            Arg::new("event-path")
                .long("event-path")
                .help("Event payload file to use instead of GITHUB_EVENT_PATH")
                .value_name("PATH"),
        )
}

pub fn send_command() -> Command {
    event_args(
        Command::new("send").about("Format the triggering event and post it to the endpoint"),
    )
}

pub fn preview_command() -> Command {
    event_args(
        Command::new("preview")
            .about("Print the notification payload without sending it"),
    )
}
