use std::path::PathBuf;

use clap::ArgMatches;

use ci_notify_config::EnvInputs;
use ci_notify_core::{RunContext, RunError, RunMode, RunOutcome, notify_ops};

/// Run context from the runner's environment, with command-line overrides.
pub fn run_context(matches: &ArgMatches) -> RunContext {
    let mut ctx = RunContext::from_env();
    apply_overrides(&mut ctx, matches);
    ctx
}

fn apply_overrides(ctx: &mut RunContext, matches: &ArgMatches) {
    if let Some(name) = matches.get_one::<String>("event-name") {
        ctx.event_name = name.clone();
    }
    if let Some(path) = matches.get_one::<String>("event-path") {
        ctx.event_path = Some(PathBuf::from(path));
    }
}

/// Drive one run to completion on a fresh runtime.
pub fn execute_run(
    ctx: &RunContext,
    mode: RunMode,
) -> Result<Result<RunOutcome, RunError>, Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    Ok(rt.block_on(async { notify_ops::run(&EnvInputs, ctx, mode).await }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::build_cli;

    #[test]
    fn test_overrides_replace_event_fields() {
        let matches = build_cli()
            .try_get_matches_from(vec![
                "ci-notify",
                "preview",
                "--event-name",
                "schedule",
                "--event-path",
                "/tmp/payload.json",
            ])
            .unwrap();
        let sub_matches = matches.subcommand_matches("preview").unwrap();

        let mut ctx = RunContext {
            event_name: "push".to_string(),
            ..Default::default()
        };
        apply_overrides(&mut ctx, sub_matches);

        assert_eq!(ctx.event_name, "schedule");
        assert_eq!(ctx.event_path, Some(PathBuf::from("/tmp/payload.json")));
    }

    #[test]
    fn test_no_overrides_keep_context() {
        let matches = build_cli()
            .try_get_matches_from(vec!["ci-notify", "send"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("send").unwrap();

        let mut ctx = RunContext {
            event_name: "push".to_string(),
            event_path: Some(PathBuf::from("/github/workflow/event.json")),
            ..Default::default()
        };
        apply_overrides(&mut ctx, sub_matches);

        assert_eq!(ctx.event_name, "push");
        assert_eq!(
            ctx.event_path,
            Some(PathBuf::from("/github/workflow/event.json"))
        );
    }
}
