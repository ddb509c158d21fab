use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use trimbox::{ReportFormat, Rotation};

#[derive(Parser)]
#[command(name = "trimbox", version, about = "trimbox CLI")]
pub struct CliArgs {
    /// Enable logging
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,

    /// Log level when logging is enabled (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value_t = tracing::Level::DEBUG)]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Crop images to their non-background content, overwriting them in place
    Crop(CropArgs),
    /// Report the bounding box of an STL mesh before and after rotation
    Measure(MeasureArgs),
}

#[derive(Args)]
pub struct CropArgs {
    /// Images to crop
    #[arg(default_values = ["hero.png", "hero_storage.png"])]
    pub files: Vec<PathBuf>,

    /// Margin in pixels kept around the detected content
    #[arg(long)]
    pub padding: Option<u32>,

    /// Contrast gain applied to the background difference
    #[arg(long, allow_hyphen_values = true)]
    pub gain: Option<f32>,

    /// Offset added after the gain (negative values suppress faint noise)
    #[arg(long, allow_hyphen_values = true)]
    pub offset: Option<f32>,

    /// Treat any difference from the background as content
    #[arg(long, default_value_t = false, conflicts_with_all = ["gain", "offset"])]
    pub no_contrast: bool,

    /// Load crop parameters from a JSON preset; flags override its values
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Write the effective crop parameters to a preset file
    #[arg(long)]
    pub save_preset: Option<PathBuf>,
}

#[derive(Args)]
pub struct MeasureArgs {
    /// STL mesh to measure
    #[arg(default_value = "reference/iphone-12-mini.stl")]
    pub stl: PathBuf,

    /// Quarter-turn rotation applied before the second measurement
    #[arg(long, value_enum, default_value_t = Rotation::Y90)]
    pub rotate: Rotation,

    /// Report format
    #[arg(short = 'f', long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}
