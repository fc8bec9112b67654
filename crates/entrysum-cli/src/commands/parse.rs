//! Parse command - extract refund data from one entry summary text file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use entrysum_core::entry::rules::format_usd;
use entrysum_core::{EntryParser, EntrySummaryParser, ParseResult};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file (plain text extracted from an entry summary PDF)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV line items
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ParseArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let bytes = fs::read(&args.input)?;
    let text = String::from_utf8_lossy(&bytes);

    let parser = EntrySummaryParser::new();
    let result = parser.parse(&bytes, &text)?;

    let output = format_result(&result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

pub fn format_result(result: &ParseResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(result: &ParseResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["hts_code", "duty_amount", "rate", "description"])?;
    for item in &result.line_items {
        let duty = item.duty_amount.to_string();
        wtr.write_record([
            item.hts_code.as_str(),
            duty.as_str(),
            item.rate.as_deref().unwrap_or(""),
            item.description.as_str(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ParseResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Entry: {}\n",
        result.metadata.entry_number.as_deref().unwrap_or("unknown")
    ));
    if let Some(date) = result.metadata.entry_date {
        out.push_str(&format!("Date: {}\n", date.format("%m/%d/%Y")));
    }
    if let Some(country) = &result.metadata.country_of_origin {
        out.push_str(&format!("Country of origin: {}\n", country));
    }
    if let Some(value) = result.metadata.total_entered_value {
        out.push_str(&format!("Total entered value: {}\n", format_usd(value)));
    }
    out.push('\n');

    if result.line_items.is_empty() {
        out.push_str("No refund-eligible IEEPA tariff lines found.\n");
        return out;
    }

    out.push_str("Refund-eligible lines:\n");
    for item in &result.line_items {
        out.push_str(&format!(
            "  {}  {}  {}\n",
            item.hts_code,
            format_usd(item.duty_amount),
            item.description
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "Total refund: {}\n",
        format_usd(result.total_refund_amount)
    ));

    out
}
