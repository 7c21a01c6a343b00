//! Batch processing command for multiple OCR output files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, warn};

use ktp_core::{DocumentParser, DocumentType, ExtractionReport, ExtractionStrategy, FieldKey, KtpConfig};

use super::process::{extraction_config, report_json, sibling_path};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (only .txt files are processed)
    #[arg(required = true)]
    input: String,

    /// Output directory (default: next to each input file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Document type (ktp, sim)
    #[arg(short = 't', long)]
    doc_type: Option<DocumentType>,

    /// Extraction strategy (line, pattern)
    #[arg(short, long)]
    strategy: Option<ExtractionStrategy>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    report: Option<ExtractionReport>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub fn run(args: BatchArgs, config: &KtpConfig) -> anyhow::Result<()> {
    let start = Instant::now();

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("txt")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
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
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let parser = DocumentParser::from_config(&extraction_config(config, args.doc_type, args.strategy));
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let output_path = output_path_for(&path, args.output_dir.as_deref(), config);
        let result = process_file(&parser, &path, &output_path, config.output.pretty_json);
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok(report) => {
                results.push(ProcessResult {
                    path,
                    report: Some(report),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = format!("{:#}", e);
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        report: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    let valid = results
        .iter()
        .filter(|r| r.report.as_ref().is_some_and(|rep| rep.is_valid()))
        .count();
    let invalid = results.iter().filter(|r| r.report.is_some()).count() - valid;
    let failed = results.iter().filter(|r| r.error.is_some()).count();

    if args.summary {
        let summary_path = args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("summary.csv");
        write_summary(&summary_path, &results)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    eprintln!();
    eprintln!(
        "{} {} valid, {} invalid, {} failed in {:.1}s",
        style("Done:").bold(),
        style(valid).green(),
        style(invalid).yellow(),
        style(failed).red(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Parse one file and write its JSON report to `output_path`.
fn process_file(
    parser: &DocumentParser,
    input: &Path,
    output_path: &Path,
    pretty: bool,
) -> anyhow::Result<ExtractionReport> {
    let raw = fs::read_to_string(input)?;
    let report = parser.parse(&raw);
    fs::write(output_path, report_json(&report, pretty)?)
        .map_err(|e| anyhow::anyhow!("cannot write {}: {}", output_path.display(), e))?;
    Ok(report)
}

fn output_path_for(input: &Path, output_dir: Option<&Path>, config: &KtpConfig) -> PathBuf {
    let sibling = sibling_path(input, &config.output.sibling_suffix);
    match (output_dir, sibling.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => sibling,
    }
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "document_type",
        "fields_extracted",
        "is_valid",
        "nik",
        "nama",
        "errors",
        "warnings",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result.path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        if let Some(report) = &result.report {
            wtr.write_record([
                filename,
                "success",
                report.document_type().as_str(),
                &report.fields_extracted().to_string(),
                &report.is_valid().to_string(),
                report.data().get(FieldKey::Nik).unwrap_or(""),
                report.data().get(FieldKey::Nama).unwrap_or(""),
                &report.validation().errors().len().to_string(),
                &report.validation().warnings().len().to_string(),
                &result.processing_time_ms.to_string(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                "",
                "",
                "",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
