use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use image::{DynamicImage, ImageReader};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use docforensics::error::{AnalysisError, Result};
use docforensics::response::{AnalysisResponse, ErrorResponse};
use docforensics::{DocumentAnalyzer, codec, debug};

#[derive(Parser)]
#[command(name = "docforensics")]
#[command(about = "Heuristic authenticity analysis for scanned identity documents")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE", conflicts_with_all = ["base64", "base64_stdin"])]
    image_path: Option<PathBuf>,

    /// Path to a file containing a base64 image payload (data URIs accepted)
    #[arg(long, value_name = "FILE", conflicts_with = "base64_stdin")]
    base64: Option<PathBuf>,

    /// Read a base64 image payload from stdin
    #[arg(long)]
    base64_stdin: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Persist the annotated debug image to this directory
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    let default_filter = if args.verbose { "docforensics=debug" } else { "docforensics=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(envelope) => {
            println!("{envelope}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let payload = ErrorResponse { error: err.to_string() };
            let body = serde_json::to_string(&payload)
                .unwrap_or_else(|_| format!("{{\"error\": \"{err}\"}}"));
            println!("{body}");
            if err.is_client_error() { ExitCode::from(1) } else { ExitCode::from(2) }
        }
    }
}

fn run(args: &Cli) -> Result<String> {
    let img = load_input(args)?;
    let (width, height) = (img.width(), img.height());

    let debug_dir = args
        .debug_out
        .clone()
        .or_else(|| debug::debug_enabled().then(|| PathBuf::from(debug::DEFAULT_DEBUG_DIR)));

    let analyzer = DocumentAnalyzer::new().with_annotation(debug_dir.is_some());
    let mut result = analyzer.analyze(&img)?;

    // Debug persistence is best-effort; a failed write never fails the analysis
    if let (Some(dir), Some(annotated)) = (&debug_dir, result.debug_image.take()) {
        match debug::persist_annotated(&annotated, dir) {
            Ok(path) => tracing::debug!("saved debug image to {}", path.display()),
            Err(err) => warn!("failed to persist debug image: {err:#}"),
        }
    }

    let envelope = AnalysisResponse::success(width, height, result);
    Ok(serde_json::to_string_pretty(&envelope)?)
}

fn load_input(args: &Cli) -> Result<DynamicImage> {
    if let Some(path) = &args.image_path {
        let reader = ImageReader::open(path)
            .map_err(|e| AnalysisError::invalid_input(format!("cannot read {}: {e}", path.display())))?;
        return Ok(reader.decode()?);
    }

    if let Some(path) = &args.base64 {
        let payload = std::fs::read_to_string(path)
            .map_err(|e| AnalysisError::invalid_input(format!("cannot read {}: {e}", path.display())))?;
        return codec::decode_image_payload(&payload);
    }

    if args.base64_stdin {
        let mut payload = String::new();
        std::io::stdin()
            .read_to_string(&mut payload)
            .map_err(|e| AnalysisError::invalid_input(format!("cannot read stdin: {e}")))?;
        return codec::decode_image_payload(&payload);
    }

    Err(AnalysisError::invalid_input(
        "no image provided: pass an image path, --base64 <FILE>, or --base64-stdin",
    ))
}
