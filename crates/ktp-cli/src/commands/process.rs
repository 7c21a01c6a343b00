//! Process command - clean and structure a single OCR output.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use ktp_core::models::config::{ExtractionConfig, KtpConfig};
use ktp_core::{DocumentParser, DocumentType, ExtractionReport, ExtractionStrategy, FieldKey};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Raw OCR text file (reads stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "card")]
    format: OutputFormat,

    /// Document type (ktp, sim)
    #[arg(short = 't', long)]
    doc_type: Option<DocumentType>,

    /// Extraction strategy (line, pattern)
    #[arg(short, long)]
    strategy: Option<ExtractionStrategy>,

    /// Do not write the cleaned JSON next to the input file
    #[arg(long)]
    no_sibling: bool,

    /// Print the cleaned text before the structured output
    #[arg(long)]
    show_cleaned: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Card-shaped text view
    Card,
    /// JSON report
    Json,
    /// CSV row of all fields
    Csv,
}

pub fn run(args: ProcessArgs, config: &KtpConfig) -> anyhow::Result<()> {
    let start = Instant::now();

    let input = args.input.as_deref().filter(|p| *p != Path::new("-"));
    let raw = read_input(input)?;

    let extraction = extraction_config(config, args.doc_type, args.strategy);
    let parser = DocumentParser::from_config(&extraction);

    info!(
        "Processing {} as {} ({})",
        input.map(|p| p.display().to_string()).unwrap_or_else(|| "stdin".to_string()),
        parser.document_type(),
        parser.strategy()
    );

    if args.show_cleaned {
        println!("{}", style("CLEANED TEXT").bold());
        println!("{}", "-".repeat(60));
        println!("{}", parser.normalize_text(&raw));
        println!();
    }

    let report = parser.parse(&raw);

    print_validation(&report);

    let output = format_report(&report, args.format, config.output.pretty_json)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if let Some(path) = input {
        if config.output.write_sibling_json && !args.no_sibling {
            let sibling = sibling_path(path, &config.output.sibling_suffix);
            fs::write(&sibling, report_json(&report, config.output.pretty_json)?)?;
            eprintln!("{} Saved to {}", style("✓").green(), sibling.display());
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Configured extraction settings with command-line overrides applied.
pub(crate) fn extraction_config(
    config: &KtpConfig,
    doc_type: Option<DocumentType>,
    strategy: Option<ExtractionStrategy>,
) -> ExtractionConfig {
    let mut extraction = config.extraction.clone();
    if let Some(doc_type) = doc_type {
        extraction.document_type = doc_type;
    }
    if strategy.is_some() {
        extraction.strategy = strategy;
    }
    extraction
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

/// `<dir>/<stem><suffix>` for an input file.
pub(crate) fn sibling_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{}{}", stem, suffix))
}

pub(crate) fn report_json(report: &ExtractionReport, pretty: bool) -> anyhow::Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    })
}

fn print_validation(report: &ExtractionReport) {
    let validation = report.validation();

    let status = if validation.is_valid() {
        style("VALID").green()
    } else {
        style("INVALID").red()
    };
    eprintln!(
        "{} Status: {} ({} fields extracted)",
        style("ℹ").blue(),
        status,
        report.fields_extracted()
    );

    for error in validation.errors() {
        eprintln!("  {} {}", style("✗").red(), error);
    }
    for warning in validation.warnings() {
        eprintln!("  {} {}", style("!").yellow(), warning);
    }
}

fn format_report(
    report: &ExtractionReport,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Card => Ok(report.to_card()),
        OutputFormat::Json => report_json(report, pretty),
        OutputFormat::Csv => format_csv(report),
    }
}

fn format_csv(report: &ExtractionReport) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header: Vec<&str> = FieldKey::ALL.iter().map(|k| k.as_str()).collect();
    header.extend(["is_valid", "errors", "warnings"]);
    wtr.write_record(&header)?;

    let mut row: Vec<String> = FieldKey::ALL
        .iter()
        .map(|k| report.data().get(*k).unwrap_or_default().to_string())
        .collect();
    row.push(report.is_valid().to_string());
    row.push(report.validation().errors().join("; "));
    row.push(report.validation().warnings().join("; "));
    wtr.write_record(&row)?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
