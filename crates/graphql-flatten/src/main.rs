mod cli;
mod command_result;
mod output_utils;

use anyhow::Context;
use clap::Parser;
use libgraphql_flatten::flatten;
use libgraphql_flatten::FlattenOptions;
pub(crate) use cli::Cli;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    setup_logger(&cli);

    let result = run(&cli);
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}")
    }
    result.exit_code
}

fn run(cli: &Cli) -> CommandResult {
    match flatten_file(cli) {
        Ok(()) => CommandResult::success(format_args!(
            "{} Flattened query written to {}.",
            output_utils::GREEN_CHECK,
            cli.output_file_path.display(),
        )),
        Err(e) => CommandResult::failure(format_args!(
            "{} {e:#}",
            output_utils::RED_X,
        )),
    }
}

/// Reads the input document, flattens it, and writes the result.
///
/// The output file is only written once the whole pipeline has succeeded,
/// so a failing run never leaves a partial output file behind.
fn flatten_file(cli: &Cli) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(&cli.input_file_path)
        .with_context(|| {
            format!("Failed to read input file {}", cli.input_file_path.display())
        })?;

    if cli.delete_typename {
        log::info!("Deleting occurrences of `__typename` from the flattened query.");
    }
    let options = FlattenOptions {
        strip_typename: cli.delete_typename,
    };

    let flattened = flatten(&source, &options)?;
    log::debug!(
        "Flattened query is {} bytes ({} bytes of input).",
        flattened.len(),
        source.len(),
    );

    std::fs::write(&cli.output_file_path, flattened)
        .with_context(|| {
            format!("Failed to write output file {}", cli.output_file_path.display())
        })?;
    Ok(())
}

fn setup_logger(cli: &Cli) {
    let mut log_level_warnings: Vec<String> = vec![];
    let log_level =
        if cli.verbose {
            tracing::Level::DEBUG
        } else {
            let env_val =
                std::env::var("LOG_LEVEL")
                    .map(|s| s.trim().to_string());

            match env_val.as_deref() {
                Ok("DEBUG" | "debug") => tracing::Level::DEBUG,
                Ok("INFO" | "info") => tracing::Level::INFO,
                Ok("TRACE" | "trace") => tracing::Level::TRACE,
                Ok("VERBOSE" | "verbose") => tracing::Level::DEBUG,
                Ok(other) => {
                    log_level_warnings.push(format!(
                        "Invalid `LOG_LEVEL` environment variable value: \
                        `{other}`"
                    ));
                    DEFAULT_LOG_LEVEL
                },
                Err(_) => DEFAULT_LOG_LEVEL,
            }
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    for warning in log_level_warnings.drain(..) {
        log::warn!("{warning}");
    }
}
