//! kotgen - generate Kotlin external declarations from TypeScript
//! definition files.

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use kotgen_cli::driver::{
    DriveOptions, discover_inputs, drive_file, output_path_for, render_diagnostic,
};
use kotgen_common::diagnostics::DiagnosticCategory;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "kotgen",
    version,
    about = "Generate Kotlin external declarations from TypeScript definition files"
)]
struct Cli {
    /// Declaration files or directories to convert (directories are walked
    /// for *.d.ts files)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory for generated .kt files (default: next to each input;
    /// stdout for a single input)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Kotlin package name for generated files (default: derived from each
    /// file name)
    #[arg(long)]
    package: Option<String>,

    /// Dump the translated declarations as JSON instead of Kotlin
    #[arg(long)]
    dump_json: bool,

    /// Write output files even when stdout would be used
    #[arg(short = 'w', long)]
    write: bool,

    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let files = discover_inputs(&cli.inputs)?;
    if files.is_empty() {
        bail!("no declaration files found under the given inputs");
    }

    let options = DriveOptions {
        package: cli.package.clone(),
        dump_json: cli.dump_json,
    };
    let to_stdout = cli.out.is_none() && !cli.write && files.len() == 1;

    let mut failed_files = 0usize;
    let stderr = std::io::stderr();
    for path in &files {
        let result = drive_file(path, &options)?;

        for diagnostic in &result.diagnostics {
            let rendered = render_diagnostic(diagnostic, &result.source_text);
            let rendered = match diagnostic.category {
                DiagnosticCategory::Error => rendered.red().to_string(),
                DiagnosticCategory::Warning => rendered.yellow().to_string(),
                DiagnosticCategory::Message => rendered,
            };
            writeln!(stderr.lock(), "{rendered}")?;
        }

        match result.text {
            Some(text) if to_stdout => {
                print!("{text}");
            }
            Some(text) => {
                let output = output_path_for(path, cli.out.as_deref());
                if let Some(parent) = output.parent() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
                std::fs::write(&output, text)
                    .with_context(|| format!("writing {}", output.display()))?;
                tracing::info!(input = %path.display(), output = %output.display(), "converted");
            }
            None => {
                failed_files += 1;
            }
        }
    }

    if failed_files > 0 {
        bail!("{failed_files} file(s) failed to convert");
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "kotgen=debug" } else { "kotgen=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
