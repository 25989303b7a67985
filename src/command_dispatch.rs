//! Purpose: Hold top-level CLI command dispatch for `plainjson`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: `parse` prints a report only for Ok; failures surface as `Error`s.
//! Invariants: `check` always prints the status label and never emits an error envelope for parse failures.

use super::*;

use super::color_value::{Report, render_human};
use plainjson::api::{Value, parse_bytes};

pub(super) fn dispatch_command(command: Command, color_mode: ColorMode) -> Result<RunOutcome, Error> {
    match command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "plainjson", &mut io::stdout());
            Ok(RunOutcome::ok())
        }
        Command::Parse { text, file, format } => {
            let input = read_input(text, file.as_deref())?;
            let value = parse_bytes(&input).into_result().map_err(|err| match &file {
                Some(path) => err.with_path(path),
                None => err,
            })?;
            emit_report(&value, format, color_mode)?;
            Ok(RunOutcome::ok())
        }
        Command::Check { text, file } => {
            let input = read_input(text, file.as_deref())?;
            let parsed = parse_bytes(&input);
            println!("{}", parsed.status.label());
            if parsed.status.is_ok() {
                Ok(RunOutcome::ok())
            } else {
                Ok(RunOutcome::with_code(to_exit_code(ErrorKind::Parse)))
            }
        }
    }
}

fn emit_report(value: &Value, format: OutputFormat, color_mode: ColorMode) -> Result<(), Error> {
    let line = match format {
        OutputFormat::Json => serde_json::to_string(&Report::from(value)).map_err(|err| {
            Error::new(ErrorKind::Internal)
                .with_message("failed to encode report")
                .with_source(err)
        })?,
        OutputFormat::Human => {
            let use_color = color_mode.use_color(io::stdout().is_terminal());
            render_human(value, use_color)
        }
    };
    println!("{line}");
    Ok(())
}
