//! Per-file conversion driver and input discovery.

use anyhow::{Context, Result};
use globset::Glob;
use kotgen_common::diagnostics::{Diagnostic, DiagnosticCategory};
use kotgen_kotlin::{KtFile, render_file};
use kotgen_parser::ParserState;
use kotgen_translate::translate_source_file;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Clone, Debug, Default)]
pub struct DriveOptions {
    /// Kotlin package header for generated files; derived from the file name
    /// when absent.
    pub package: Option<String>,
    /// Serialize the translated declarations as JSON instead of printing
    /// Kotlin (debugging aid).
    pub dump_json: bool,
}

/// Outcome of converting one file. `text` is `None` when translation failed
/// fatally; the diagnostics then explain why.
pub struct FileResult {
    pub text: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
    /// Source text, kept for line/column rendering of diagnostics.
    pub source_text: String,
}

impl FileResult {
    pub fn has_errors(&self) -> bool {
        self.text.is_none()
            || self
                .diagnostics
                .iter()
                .any(|d| d.category == DiagnosticCategory::Error)
    }
}

/// Expand the command-line inputs: files are taken as-is, directories are
/// walked for `*.d.ts` entries.
pub fn discover_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let matcher = Glob::new("**/*.d.ts")
        .context("building the declaration-file glob")?
        .compile_matcher();

    let mut discovered = Vec::new();
    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input).sort_by_file_name() {
                let entry = entry
                    .with_context(|| format!("walking directory {}", input.display()))?;
                if entry.file_type().is_file() && matcher.is_match(entry.path()) {
                    discovered.push(entry.path().to_path_buf());
                }
            }
        } else {
            discovered.push(input.clone());
        }
    }
    Ok(discovered)
}

/// Kotlin package name derived from a declaration file name:
/// `dom.events.d.ts` becomes `dom.events`, dashes become underscores.
pub fn package_name_for(path: &Path) -> Option<String> {
    let stem = path.file_name()?.to_str()?;
    let stem = stem.strip_suffix(".d.ts").unwrap_or(stem);
    if stem.is_empty() {
        return None;
    }
    Some(stem.replace('-', "_"))
}

/// Convert in-memory declaration source to output text.
pub fn convert_source(
    file_name: &str,
    source: String,
    package: Option<String>,
    dump_json: bool,
) -> FileResult {
    tracing::debug!(file = file_name, "converting declaration file");
    let parsed = ParserState::parse(file_name, source);
    let mut diagnostics = parsed.diagnostics.clone();

    match translate_source_file(&parsed) {
        Ok(translation) => {
            diagnostics.extend(translation.diagnostics);
            let kt_file = KtFile {
                package_name: package,
                declarations: translation.declarations,
            };
            let text = if dump_json {
                serde_json::to_string_pretty(&kt_file)
                    .unwrap_or_else(|error| format!("{{\"error\": \"{error}\"}}"))
            } else {
                render_file(&kt_file)
            };
            FileResult {
                text: Some(text),
                diagnostics,
                source_text: parsed.text,
            }
        }
        // Only file-fatal errors escape translate_source_file; skippable
        // declaration problems come back as diagnostics.
        Err(error) => {
            let span = error.span();
            diagnostics.push(Diagnostic::error(
                file_name,
                span.start,
                span.len(),
                format!("{error}; translation aborted"),
                0,
            ));
            FileResult {
                text: None,
                diagnostics,
                source_text: parsed.text,
            }
        }
    }
}

/// Read, parse, translate, and render one file from disk.
pub fn drive_file(path: &Path, options: &DriveOptions) -> Result<FileResult> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let package = options
        .package
        .clone()
        .or_else(|| package_name_for(path));
    Ok(convert_source(
        &path.display().to_string(),
        source,
        package,
        options.dump_json,
    ))
}

/// Output path for a converted file: `foo.d.ts` -> `foo.kt`, under `out_dir`
/// when given, next to the input otherwise.
pub fn output_path_for(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.strip_suffix(".d.ts").unwrap_or(name))
        .unwrap_or("out");
    let file_name = format!("{stem}.kt");
    match out_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

/// Render a diagnostic as `file:line:col - message [KGxxxx]`.
pub fn render_diagnostic(diagnostic: &Diagnostic, source_text: &str) -> String {
    let (line, column) = line_and_column(source_text, diagnostic.start);
    let severity = match diagnostic.category {
        DiagnosticCategory::Error => "error",
        DiagnosticCategory::Warning => "warning",
        DiagnosticCategory::Message => "note",
    };
    format!(
        "{}:{}:{} - {} {}: {}",
        diagnostic.file,
        line,
        column,
        severity,
        format_args!("KG{:04}", diagnostic.code),
        diagnostic.message_text
    )
}

fn line_and_column(text: &str, offset: u32) -> (u32, u32) {
    let offset = (offset as usize).min(text.len());
    let mut line = 1u32;
    let mut column = 1u32;
    for byte in text.as_bytes()[..offset].iter() {
        if *byte == b'\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_name_strips_declaration_suffix() {
        assert_eq!(
            package_name_for(Path::new("lib/dom.events.d.ts")).as_deref(),
            Some("dom.events")
        );
        assert_eq!(
            package_name_for(Path::new("my-lib.d.ts")).as_deref(),
            Some("my_lib")
        );
    }

    #[test]
    fn output_path_lands_next_to_input_or_in_out_dir() {
        assert_eq!(
            output_path_for(Path::new("a/b/foo.d.ts"), None),
            PathBuf::from("a/b/foo.kt")
        );
        assert_eq!(
            output_path_for(Path::new("a/b/foo.d.ts"), Some(Path::new("out"))),
            PathBuf::from("out/foo.kt")
        );
    }

    #[test]
    fn line_and_column_are_one_based() {
        assert_eq!(line_and_column("abc", 0), (1, 1));
        assert_eq!(line_and_column("a\nbc", 2), (2, 1));
        assert_eq!(line_and_column("a\nbc", 3), (2, 2));
    }
}
