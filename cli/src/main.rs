//! pdf-outline CLI - infer titles and heading outlines from PDFs

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdf_outline::render::{self, JsonFormat};
use pdf_outline::{
    BatchOptions, BatchProcessor, FileReport, OutlineExtractor, PageSelection, ParseOptions,
    PdfParser, SpanNormalizer,
};

#[derive(Parser)]
#[command(name = "pdf-outline")]
#[command(version)]
#[command(about = "Infer document titles and H1-H3 outlines from PDF typography", long_about = None)]
struct Cli {
    /// Directory of PDFs to process
    #[arg(value_name = "INPUT_DIR", env = "PDF_OUTLINE_INPUT", default_value = "files")]
    input: PathBuf,

    /// Directory to write `<name>.json` outlines into
    #[arg(value_name = "OUTPUT_DIR", env = "PDF_OUTLINE_OUTPUT", default_value = "output")]
    output: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the outline of one PDF
    Extract {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Print an indented outline instead of JSON
        #[arg(long, conflicts_with = "compact")]
        text: bool,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Write an outline for every PDF in a directory
    Batch {
        /// Directory of PDFs
        #[arg(value_name = "INPUT_DIR")]
        input: PathBuf,

        /// Output directory
        #[arg(value_name = "OUTPUT_DIR")]
        output: PathBuf,

        /// Process one document at a time
        #[arg(long)]
        sequential: bool,

        /// Write compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Dump the text spans of a PDF
    Spans {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,

        /// Show spans before cleaning
        #[arg(long)]
        raw: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Extract {
            input,
            output,
            compact,
            text,
            pages,
        }) => cmd_extract(&input, output.as_deref(), compact, text, pages.as_deref()),
        Some(Commands::Batch {
            input,
            output,
            sequential,
            compact,
        }) => cmd_batch(&input, &output, !sequential, compact),
        Some(Commands::Spans { input, pages, raw }) => cmd_spans(&input, pages.as_deref(), raw),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_batch(&cli.input, &cli.output, true, false),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn page_selection(pages: Option<&str>) -> Result<PageSelection, Box<dyn std::error::Error>> {
    match pages {
        Some(p) => Ok(PageSelection::parse(p)?),
        None => Ok(PageSelection::All),
    }
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    text: bool,
    pages: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = OutlineExtractor::new()
        .lenient()
        .with_pages(page_selection(pages)?)
        .extract(input)?;

    let rendered = if text {
        render::to_text(&result)
    } else {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        render::to_json(&result, format)?
    };

    if let Some(path) = output {
        fs::write(path, &rendered)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

fn cmd_batch(
    input: &Path,
    output: &Path,
    parallel: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let files = BatchProcessor::discover(input)
        .map_err(|e| format!("Cannot read input directory {}: {}", input.display(), e))?;

    if files.is_empty() {
        println!(
            "{} {}",
            "No PDF files found in".yellow(),
            input.display()
        );
        return Ok(());
    }

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let processor = BatchProcessor::new(
        OutlineExtractor::new().lenient(),
        BatchOptions::new()
            .with_format(format)
            .with_parallel(parallel),
    );

    let total = files.len();
    log::debug!("processing {} documents from {}", total, input.display());
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut failed = 0;
    for report in processor.spawn(files, output.to_path_buf())? {
        pb.println(report_line(&report));
        if !report.is_success() {
            failed += 1;
        }
        pb.set_message(report.file_name());
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!(
        "\n{} {} processed, {} failed -> {}",
        "Done!".green().bold(),
        total - failed,
        failed,
        output.display()
    );

    if failed > 0 {
        return Err(format!("{} of {} documents failed", failed, total).into());
    }

    Ok(())
}

fn report_line(report: &FileReport) -> String {
    match &report.result {
        Ok(_) => format!("✅ Processed {}", report.file_name()),
        Err(e) => format!(
            "{} {} -> {}",
            "❌ Failed".red(),
            report.file_name(),
            e
        ),
    }
}

fn cmd_spans(input: &Path, pages: Option<&str>, raw: bool) -> Result<(), Box<dyn std::error::Error>> {
    let options = ParseOptions::new()
        .lenient()
        .with_pages(page_selection(pages)?);
    let parser = PdfParser::open_with_options(input, options)?;

    let mut spans = parser.extract_spans()?;
    if !raw {
        spans = SpanNormalizer::new().normalize_spans(spans);
    }

    println!(
        "{} ({}, {} pages, {} spans)",
        input.display().to_string().cyan().bold(),
        parser.version(),
        parser.page_count(),
        spans.len()
    );
    println!("{}", "─".repeat(60).dimmed());

    for span in &spans {
        let style = match (span.is_bold(), span.is_italic()) {
            (true, true) => "BI",
            (true, false) => "B",
            (false, true) => "I",
            (false, false) => "",
        };
        println!(
            "{:>4} {:>6} {:<2} {} {}",
            span.page,
            span.size.to_string(),
            style,
            span.text,
            span.font.dimmed()
        );
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdf-outline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF title and heading outline inference");
}
