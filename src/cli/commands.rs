//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::collections::HashMap;
use std::path::Path;

use crate::diagnostics::{Diagnostics, Severity};
use crate::discovery::manifest::ManifestDiscovery;
use crate::discovery::TypeDiscovery;
use crate::round::{self, RoundOptions};

use super::{CliError, CliResult, ExitCode};

/// Run a full processing round and write the surviving artifacts.
pub fn generate(manifest: &Path, out: &Path, options: &[String]) -> CliResult<ExitCode> {
    let round_options = parse_round_options(options)?;
    let discovered = discover(manifest)?;

    let mut diagnostics = Diagnostics::new();
    let result = round::run_round(
        &discovered.universe,
        &discovered.fieldable,
        &round_options,
        &mut diagnostics,
    );
    let written = round::emit_all(&result, out, &mut diagnostics);

    tracing::info!(written = written.len(), "round complete");
    render_diagnostics(&diagnostics);

    if diagnostics.has_errors() {
        Ok(ExitCode::FAILURE)
    } else {
        println!("Generated {} file(s) under {}", written.len(), out.display());
        Ok(ExitCode::SUCCESS)
    }
}

/// Run collection, building, and the collision scan without writing files.
pub fn check(manifest: &Path, options: &[String]) -> CliResult<ExitCode> {
    let round_options = parse_round_options(options)?;
    let discovered = discover(manifest)?;

    let mut diagnostics = Diagnostics::new();
    let result = round::run_round(
        &discovered.universe,
        &discovered.fieldable,
        &round_options,
        &mut diagnostics,
    );

    render_diagnostics(&diagnostics);

    if diagnostics.has_errors() {
        Ok(ExitCode::FAILURE)
    } else {
        println!("{} artifact(s) ready for generation", result.len());
        Ok(ExitCode::SUCCESS)
    }
}

/// Load the universe from the manifest, mapping discovery failure to a CLI error.
fn discover(manifest: &Path) -> CliResult<crate::discovery::Discovered> {
    ManifestDiscovery::new(manifest)
        .discover()
        .map_err(|e| CliError::failure(e.to_string()))
}

/// Parse repeated `--option key=value` arguments into round options.
fn parse_round_options(options: &[String]) -> CliResult<RoundOptions> {
    let mut parsed = HashMap::new();
    for option in options {
        let Some((key, value)) = option.split_once('=') else {
            return Err(CliError::failure(format!(
                "invalid option '{}': expected KEY=VALUE",
                option
            )));
        };
        parsed.insert(key.to_string(), value.to_string());
    }
    Ok(RoundOptions::from_options(&parsed))
}

/// Print collected diagnostics: errors to stderr, notes through tracing.
fn render_diagnostics(diagnostics: &Diagnostics) {
    let red = "\x1b[31m";
    let bold = "\x1b[1m";
    let reset = "\x1b[0m";

    for diagnostic in diagnostics.iter() {
        match diagnostic.severity {
            Severity::Error => eprintln!("{bold}{red}{diagnostic}{reset}"),
            Severity::Note => tracing::info!("{}", diagnostic),
        }
    }
}
