//! CLI entry point for the ravelin topology generator.
//!
//! Parses command-line arguments with clap, runs the selected topology
//! family through the risk pipeline, renders the exported adjacency to
//! stdout, and maps errors to appropriate exit codes. Logging is
//! initialised eagerly so subsequent operations can emit structured
//! diagnostics via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use ravelin_cli::{
    cli::{Cli, CliError, render_export, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field, info};

/// Parse CLI arguments, execute the command, render the export, and flush
/// the output stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let pretty = cli.pretty;
    let summary = run_cli(cli).context("failed to generate topology")?;
    info!(
        family = summary.family,
        nodes = summary.nodes,
        edges = summary.edges,
        risk_edges = summary.risk_edges,
        "topology generated"
    );
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_export(&summary, &mut writer, pretty).context("failed to render export")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let (code, generator_code) = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Engine(engine) => {
                    Some((Some(engine.code()), engine.generator_code()))
                }
                CliError::Family(family) => Some((None, Some(family.code()))),
                _ => None,
            })
            .unwrap_or((None, None));

        let code_field = code.map(|code| field::display(code.as_str()));
        let generator_code_field = generator_code.map(|code| field::display(code.as_str()));

        error!(
            error = %err,
            code = code_field,
            generator_code = generator_code_field,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
