//! Batch command - parse every file matching a glob pattern.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use rust_decimal::Decimal;
use tracing::warn;

use entrysum_core::entry::rules::format_usd;
use entrysum_core::{EntryParser, EntrySummaryParser, ParseResult};

use super::parse::{OutputFormat, format_result};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Print a summary CSV instead of totals
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Outcome of one file in the batch.
struct BatchResult {
    path: PathBuf,
    result: Option<ParseResult>,
    error: Option<String>,
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let parser = EntrySummaryParser::new();
    let mut outcomes = Vec::with_capacity(files.len());

    for path in files {
        let outcome = process_file(&path, &parser, &args);
        if let Some(error) = &outcome.error {
            if !args.continue_on_error {
                pb.finish_and_clear();
                anyhow::bail!("{}: {}", path.display(), error);
            }
            warn!("{}: {}", path.display(), error);
        }
        outcomes.push(outcome);
        pb.inc(1);
    }

    pb.finish_and_clear();

    if args.summary {
        print!("{}", summary_csv(&outcomes)?);
    } else {
        print_totals(&outcomes);
    }

    Ok(())
}

fn process_file(path: &Path, parser: &EntrySummaryParser, args: &BatchArgs) -> BatchResult {
    let attempt = (|| -> anyhow::Result<ParseResult> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes);
        let result = parser.parse(&bytes, &text)?;

        if let Some(ref output_dir) = args.output_dir {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("result");
            let extension = match args.format {
                OutputFormat::Json => "json",
                OutputFormat::Csv => "csv",
                OutputFormat::Text => "txt",
            };
            let out_path = output_dir.join(format!("{}.{}", stem, extension));
            fs::write(out_path, format_result(&result, args.format)?)?;
        }

        Ok(result)
    })();

    match attempt {
        Ok(result) => BatchResult {
            path: path.to_path_buf(),
            result: Some(result),
            error: None,
        },
        Err(e) => BatchResult {
            path: path.to_path_buf(),
            result: None,
            error: Some(e.to_string()),
        },
    }
}

fn summary_csv(outcomes: &[BatchResult]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["file", "entry_number", "eligible", "refund_total", "codes"])?;

    for outcome in outcomes {
        let file = outcome.path.display().to_string();
        let Some(result) = &outcome.result else {
            wtr.write_record([file.as_str(), "", "error", "", ""])?;
            continue;
        };

        let refund = result.total_refund_amount.to_string();
        let codes = result.hts_codes_found.join(" ");
        wtr.write_record([
            file.as_str(),
            result.metadata.entry_number.as_deref().unwrap_or(""),
            if result.is_eligible { "yes" } else { "no" },
            refund.as_str(),
            codes.as_str(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn print_totals(outcomes: &[BatchResult]) {
    let parsed = outcomes.iter().filter(|o| o.result.is_some()).count();
    let eligible = outcomes
        .iter()
        .filter(|o| o.result.as_ref().is_some_and(|r| r.is_eligible))
        .count();
    let total: Decimal = outcomes
        .iter()
        .filter_map(|o| o.result.as_ref())
        .map(|r| r.total_refund_amount)
        .sum();

    println!(
        "{} {} of {} files parsed, {} eligible",
        style("ℹ").blue(),
        parsed,
        outcomes.len(),
        eligible
    );
    println!(
        "{} Combined refund total: {}",
        style("ℹ").blue(),
        format_usd(total)
    );
}
