//! hantext CLI - PDF to paragraph-structured text

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use hantext::{
    DocumentResolver, PdfiumSource, ResolutionMode, ResolveOptions, TesseractConfig,
    TesseractEngine,
};

#[derive(Parser)]
#[command(name = "hantext")]
#[command(version)]
#[command(about = "Extract paragraph-structured text from Korean PDFs (native + OCR)", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file (default: input path with .txt extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Recognition language passed to tesseract
    #[arg(long, default_value = "kor")]
    lang: String,

    /// Rasterization DPI for the OCR fallback
    #[arg(long, default_value_t = 400)]
    dpi: u32,

    /// Minimum character count before native text is trusted
    #[arg(long, default_value_t = 30)]
    min_chars: usize,

    /// Emit the resolved document as JSON (pages, modes, final text)
    #[arg(long)]
    json: bool,

    /// Path to the tesseract binary
    #[arg(long, value_name = "PATH", env = "HANTEXT_TESSERACT")]
    tesseract: Option<PathBuf>,

    /// Directory containing tesseract language data (*.traineddata)
    #[arg(long, value_name = "DIR")]
    tessdata: Option<PathBuf>,

    /// Suppress the progress bar
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!(
                "{} {}",
                "Saved:".green().bold(),
                output.display().to_string().cyan()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("file not found: {}", cli.input.display()).into());
    }

    let mut config = TesseractConfig::new();
    if let Some(binary) = &cli.tesseract {
        config = config.with_binary(binary);
    }
    if let Some(tessdata) = &cli.tessdata {
        config = config.with_tessdata_dir(tessdata);
    }
    let engine = TesseractEngine::with_config(config)?;

    let source = PdfiumSource::open(&cli.input)?;

    let options = ResolveOptions::new()
        .with_language(cli.lang.clone())
        .with_ocr_dpi(cli.dpi)
        .with_min_native_chars(cli.min_chars);
    let resolver = DocumentResolver::with_options(options);

    let bar = make_progress_bar(cli.quiet);
    let document = resolver.resolve_with_progress(&source, &engine, |page, total, mode| {
        bar.set_length(total as u64);
        bar.set_message(match mode {
            ResolutionMode::Native => "native text",
            ResolutionMode::Ocr => "OCR",
        });
        bar.set_position(page as u64);
    })?;
    bar.finish_and_clear();

    let native = document.page_count() - document.ocr_page_count();
    println!(
        "{} {} pages ({} native, {} OCR)",
        "Resolved:".green().bold(),
        document.page_count(),
        native,
        document.ocr_page_count()
    );

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension(if cli.json { "json" } else { "txt" }));

    if cli.json {
        std::fs::write(&output, document.to_json_pretty()?)?;
    } else {
        std::fs::write(&output, &document.text)?;
    }

    Ok(output)
}

fn make_progress_bar(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );
    bar
}
