use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use store_shots::config::{self, RunConfig};
use store_shots::imaging::PadColor;
use store_shots::output;
use store_shots::process::{self, ProcessError};

#[derive(Parser)]
#[command(name = "store-shots")]
#[command(about = "Resize screenshots to the nearest App Store Connect iPad sizes")]
#[command(long_about = "\
Resize screenshots to the nearest App Store Connect iPad sizes

Every .png/.jpg/.jpeg file in the input directory is matched to one of:

  2064x2752  2752x2064   (13\" iPad, portrait / landscape)
  2048x2732  2732x2048   (12.9\" iPad, portrait / landscape)

The closest aspect ratio wins; size breaks ties. Each image is scaled to the
target width, then cropped or padded top and bottom to the target height.
Transparency is flattened onto white. Output is progressive JPEG named
{name}_{width}x{height}.jpg.

Exits with status 1 when the input directory has no matching images.")]
#[command(version)]
struct Cli {
    /// Input directory containing images
    #[arg(long, default_value = config::DEFAULT_IN_DIR)]
    in_dir: PathBuf,

    /// Output directory (created if missing)
    #[arg(long, default_value = config::DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// JPEG quality (1-100, out-of-range values are clamped)
    #[arg(long, default_value_t = config::DEFAULT_QUALITY, allow_negative_numbers = true)]
    quality: i64,

    /// Letterbox color as #RRGGBB
    #[arg(long, default_value = "#FFFFFF")]
    pad_color: PadColor,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = RunConfig::resolve(&cli.in_dir, &cli.out_dir, cli.quality, cli.pad_color)?;

    match process::process(&config, output::print_process_event) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(ProcessError::NoImages(in_dir)) => {
            output::print_no_images(&in_dir);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

/// Route `log` records to stderr. The level comes from `--verbose` only.
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .init();
}
