use clap::Parser;
use std::path::PathBuf;

// Build version with backend info
const VERSION_INFO: &str = const_format::concatcp!(
    env!("CARGO_PKG_VERSION"),
    "\n",
    "UI:     eframe/egui 0.33\n",
    "Target: ",
    std::env::consts::ARCH,
    "-",
    std::env::consts::OS
);

/// Storefront showcase
#[derive(Parser, Debug)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
pub struct Args {
    /// Directory with product/hero images (PNG, JPEG) - optional, painted
    /// placeholders are used for anything missing
    #[arg(value_name = "ASSETS_DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Catalog JSON file (products + hero slides); defaults to the built-in demo catalog
    #[arg(short = 'C', long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Start in fullscreen mode
    #[arg(short = 'F', long = "fullscreen")]
    pub fullscreen: bool,

    /// Hero auto-advance period in seconds (default: 5)
    #[arg(long = "period", value_name = "SECONDS")]
    pub period: Option<f32>,

    /// Enable debug logging to file (default: vitrine.log)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Custom configuration directory (overrides default platform paths)
    #[arg(short = 'c', long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}
