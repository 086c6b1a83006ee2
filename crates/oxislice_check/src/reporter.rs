use std::{
    collections::HashMap,
    env,
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use log::{debug, trace};
use serde::Serialize;

use crate::types::{CheckResult, Warning};

/// Relativize a root-relative path to the current working directory for clickable links
fn relativize_to_cwd(root: &Path, relative_to_root: &str) -> String {
    let cwd = match env::current_dir() {
        Ok(cwd) => cwd,
        Err(_) => {
            debug!("Failed to get current directory");
            return relative_to_root.to_string();
        }
    };

    let abs_path = root.join(relative_to_root);
    match abs_path.strip_prefix(&cwd) {
        Ok(rel_path) => {
            let result = rel_path.to_string_lossy().to_string();
            trace!("Relativized '{}' to '{}'", relative_to_root, result);
            result
        }
        Err(_) => relative_to_root.to_string(),
    }
}

/// Collapse a possibly multi-line import declaration onto one line
fn single_line(statement: &str) -> String {
    statement.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn print_no_violations_message<W: Write>(writer: &mut W, result: &CheckResult) -> io::Result<()> {
    debug!("No violations found");
    writeln!(writer, "{} No FSD import violations found.", "✓".green().bold())?;
    if result.fixes_applied > 0 {
        writeln!(writer, "  Applied {} fixes.", result.fixes_applied.to_string().green().bold())?;
    }
    writer.flush()?;
    Ok(())
}

pub fn print_warnings_tree<W: Write>(writer: &mut W, result: &CheckResult) -> io::Result<()> {
    let warnings = &result.warnings;
    debug!("Printing warnings tree for {} warnings", warnings.len());
    // Group warnings by file
    let mut by_file: HashMap<&str, Vec<&Warning>> = HashMap::new();
    for w in warnings {
        by_file.entry(w.file.as_str()).or_default().push(w);
    }
    debug!("Grouped warnings into {} files", by_file.len());

    writeln!(writer, "{} FSD import violations detected\n", "⚠".yellow().bold())?;

    let mut files: Vec<_> = by_file.into_iter().collect();
    files.sort_by(|a, b| a.0.cmp(b.0));

    for (file, mut file_warnings) in files {
        trace!("Processing file: {} with {} warnings", file, file_warnings.len());
        writeln!(writer, "{}", relativize_to_cwd(&result.root, file).blue())?;

        file_warnings.sort_by_key(|w| (w.line, w.column));
        for (idx, warning) in file_warnings.iter().enumerate() {
            let is_last = idx == file_warnings.len() - 1;
            let prefix = if is_last { "└──" } else { "├──" };
            let branch = if is_last { "   " } else { "│  " };
            let fixable = if warning.fixable { " (fixable)".green().to_string() } else { String::new() };

            writeln!(
                writer,
                "{}  {}  {} {}{}",
                prefix.dimmed(),
                format!("{}:{}", warning.line, warning.column).yellow(),
                warning.message,
                format!("[{}]", warning.rule).dimmed(),
                fixable
            )?;
            writeln!(writer, "{}      {}", branch.dimmed(), single_line(&warning.import_statement).dimmed())?;
        }

        writeln!(writer)?;
    }

    // Print summary
    print_summary(writer, result)?;

    writer.flush()?;
    Ok(())
}

fn print_summary<W: Write>(writer: &mut W, result: &CheckResult) -> io::Result<()> {
    if result.warnings.is_empty() {
        return Ok(());
    }

    let fixable = result.warnings.iter().filter(|w| w.fixable).count();
    let mut files: Vec<&str> = result.warnings.iter().map(|w| w.file.as_str()).collect();
    files.sort_unstable();
    files.dedup();

    writeln!(writer, "{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "{}", "Summary".bold())?;
    writeln!(
        writer,
        "  Total violations: {} in {} files",
        result.warnings.len().to_string().yellow().bold(),
        files.len()
    )?;
    for (rule, count) in &result.rule_counts {
        writeln!(writer, "    {}: {}", rule, count.to_string().red())?;
    }
    if result.fixes_applied > 0 {
        writeln!(writer, "  Fixes applied: {}", result.fixes_applied.to_string().green().bold())?;
    }
    if fixable > 0 {
        writeln!(writer, "  {} fixable with {}", fixable.to_string().green(), "--fix".bold())?;
    }

    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    files_analyzed: usize,
    fixes_applied: usize,
    warnings: &'a [Warning],
}

pub fn print_json<W: Write>(writer: &mut W, result: &CheckResult) -> io::Result<()> {
    let report = JsonReport {
        files_analyzed: result.files_analyzed,
        fixes_applied: result.fixes_applied,
        warnings: &result.warnings,
    };
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
