use ci_notify_config::coercion::parse_bool;
use ci_notify_config::{EnvInputs, InputStore, parse_with_default};
use ci_notify_core::{LogLevel, events, init_logging, output};

mod app;
mod commands;

/// `-v` or the `debug` input turns on the JSON log stream.
fn log_level(verbose: bool) -> LogLevel {
    let debug_input = EnvInputs.get("debug");
    let debug = parse_with_default(debug_input.as_deref(), parse_bool, false).value;
    if verbose || debug {
        LogLevel::Debug
    } else {
        LogLevel::Quiet
    }
}

fn main() {
    let app = app::build_cli();
    let matches = app.get_matches();

    init_logging(log_level(matches.get_flag("verbose")));

    if let Err(e) = commands::run_command(&matches) {
        // Handlers already logged the failure; the runner only reads the
        // workflow command and the exit code.
        output::set_failed(&e.to_string());
        events::log_app_shutdown();
        std::process::exit(1);
    }

    events::log_app_shutdown();
}
