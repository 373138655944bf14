//! # vexilctl
//!
//! Command-line front end for the report sorter.
//!
//! `sort` reorders the violations table of a generated HTML report and
//! leaves every other byte of the document alone. `inspect` prints the
//! occurrence summaries (rows per rule, rows per file) that back the
//! frequency orders.

use std::{
    collections::HashMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vexil_core::{DEFAULT_TABLE_ID, ReportDocument, TableLocator};
use vexil_model::SortMode;

#[derive(Parser)]
#[command(name = "vexilctl", about = "Violation report table sorter")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Reorder the violations table of a report
    Sort {
        /// Report file to sort
        report: PathBuf,
        /// Row order to apply
        #[arg(long, value_enum, default_value = "priority")]
        by: OrderArg,
        /// Id of the table to sort
        #[arg(long, default_value = DEFAULT_TABLE_ID)]
        table_id: String,
        /// Write the sorted report here instead of stdout
        #[arg(short, long, conflicts_with = "in_place")]
        output: Option<PathBuf>,
        /// Rewrite the report file itself
        #[arg(long)]
        in_place: bool,
    },
    /// Summarize the sortable rows of a report
    Inspect {
        /// Report file to inspect
        report: PathBuf,
        /// Id of the table to inspect
        #[arg(long, default_value = DEFAULT_TABLE_ID)]
        table_id: String,
        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderArg {
    Priority,
    RuleFrequency,
    RuleName,
    File,
}

impl From<OrderArg> for SortMode {
    fn from(val: OrderArg) -> Self {
        match val {
            OrderArg::Priority => SortMode::Priority,
            OrderArg::RuleFrequency => SortMode::RuleFrequency,
            OrderArg::RuleName => SortMode::RuleName,
            OrderArg::File => SortMode::File,
        }
    }
}

#[derive(Serialize)]
struct TableSummary {
    table_id: String,
    rows: usize,
    rules: Vec<CountEntry>,
    files: Vec<CountEntry>,
}

#[derive(Serialize)]
struct CountEntry {
    value: String,
    rows: u32,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the sorted document.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Sort {
            report,
            by,
            table_id,
            output,
            in_place,
        } => {
            let mode: SortMode = by.into();
            let mut doc = load_report(&report, &table_id)?;
            doc.sort(mode)
                .with_context(|| format!("cannot sort {}", report.display()))?;
            debug!(%mode, rows = doc.row_count(), "report sorted");

            let sorted = doc.to_html();
            if in_place {
                write_report_atomically(&report, &sorted)?;
            } else if let Some(path) = output {
                fs::write(&path, &sorted).with_context(|| {
                    format!("failed to write {}", path.display())
                })?;
            } else {
                print!("{sorted}");
            }
        }
        Command::Inspect {
            report,
            table_id,
            json,
        } => {
            let doc = load_report(&report, &table_id)?;
            let summary = TableSummary {
                table_id: doc.table_id().to_string(),
                rows: doc.row_count(),
                rules: ranked(doc.rule_counts()),
                files: ranked(doc.file_counts()),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("table {}: {} rows", summary.table_id, summary.rows);
                print_ranking("rules", &summary.rules);
                print_ranking("files", &summary.files);
            }
        }
    }

    Ok(())
}

fn load_report(path: &PathBuf, table_id: &str) -> Result<ReportDocument> {
    let locator = TableLocator::new(table_id);
    ReportDocument::from_file(path, &locator)
        .with_context(|| format!("cannot read report {}", path.display()))
}

/// Replace `path` by staging the new contents in a sibling temp file and
/// renaming it over the original. A failure at any point leaves `path`
/// with its prior contents.
fn write_report_atomically(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)
        .with_context(|| format!("cannot stage the rewrite of {}", path.display()))?;
    staged
        .write_all(contents.as_bytes())
        .with_context(|| format!("cannot stage the rewrite of {}", path.display()))?;
    staged
        .persist(path)
        .with_context(|| format!("failed to rewrite {}", path.display()))?;
    Ok(())
}

/// Descending occurrence count, value text breaking ties.
fn ranked(counts: HashMap<String, u32>) -> Vec<CountEntry> {
    let mut entries: Vec<CountEntry> = counts
        .into_iter()
        .map(|(value, rows)| CountEntry { value, rows })
        .collect();
    entries
        .sort_by(|a, b| b.rows.cmp(&a.rows).then_with(|| a.value.cmp(&b.value)));
    entries
}

fn print_ranking(label: &str, entries: &[CountEntry]) {
    println!("{label}:");
    for entry in entries {
        println!("  {:>4}  {}", entry.rows, entry.value);
    }
}
