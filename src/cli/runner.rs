use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use trimbox::{
    ContrastStretch, CropEvent, CropOutcome, CropParams, ReportFormat, crop_images, measure_mesh,
};

use super::args::{CliArgs, Command, CropArgs, MeasureArgs};
use super::errors::AppError;

fn init_logging(level: tracing::Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn resolve_crop_params(args: &CropArgs) -> Result<CropParams, AppError> {
    let mut params = match &args.preset {
        Some(path) => CropParams::load_preset(path)?,
        None => CropParams::default(),
    };

    if let Some(padding) = args.padding {
        params.padding = padding;
    }

    if args.no_contrast {
        params.contrast = None;
    } else if args.gain.is_some() || args.offset.is_some() {
        let base = params.contrast.unwrap_or_default();
        params.contrast = Some(ContrastStretch {
            gain: args.gain.unwrap_or(base.gain),
            offset: args.offset.unwrap_or(base.offset),
        });
    }

    if let Some(stretch) = params.contrast {
        if !stretch.gain.is_finite() {
            return Err(AppError::InvalidContrast {
                arg: "gain",
                value: stretch.gain,
            });
        }
        if !stretch.offset.is_finite() {
            return Err(AppError::InvalidContrast {
                arg: "offset",
                value: stretch.offset,
            });
        }
    }

    Ok(params)
}

fn run_crop(args: CropArgs) -> Result<(), Box<dyn std::error::Error>> {
    let params = resolve_crop_params(&args)?;
    info!("Crop parameters: {:?}", params);

    if let Some(path) = &args.save_preset {
        params.save_preset(path).map_err(AppError::from)?;
    }

    // Per-image failures are reported and never change the exit status.
    crop_images(&args.files, &params, |event| match event {
        CropEvent::Started(path) => {
            println!("Processing {}...", path.display());
        }
        CropEvent::Finished(path, Ok(CropOutcome::Cropped { content, .. })) => {
            println!("  Found content at {}", content);
            println!("  Cropped and saved to {}", path.display());
        }
        CropEvent::Finished(_, Ok(CropOutcome::NoContent)) => {
            println!("  No content found (image matches background entirely?)");
        }
        CropEvent::Finished(path, Err(e)) => {
            println!("  Error processing {}: {}", path.display(), e);
        }
    });

    Ok(())
}

fn run_measure(args: MeasureArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.stl.exists() {
        println!("Error: {} not found", args.stl.display());
        return Ok(());
    }
    if args.format == ReportFormat::Text {
        println!("Loading {}...", args.stl.display());
    }

    let report = measure_mesh(&args.stl, args.rotate).map_err(AppError::from)?;

    match args.format {
        ReportFormat::Text => {
            println!("{}", report);
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging(args.log_level);
    }

    match args.command {
        Command::Crop(crop) => run_crop(crop),
        Command::Measure(measure) => run_measure(measure),
    }
}
