//! High-level, ergonomic library API: crop images in place or in memory, batch
//! helpers that keep going past failures, and mesh bounding-box measurement.
//! Prefer these entrypoints over the low-level processing modules.
use std::fmt;
use std::path::Path;

use image::DynamicImage;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::params::CropParams;
use crate::core::processing::bounds::axis_bounds;
use crate::core::processing::crop::{CropOutcome, crop_to_content};
use crate::core::processing::rotate::rotate_vertices;
use crate::error::{Error, Result};
use crate::io::stl::Mesh;
use crate::io::{open_image, overwrite_image};
use crate::types::{Bounds3, Rotation};

/// Crop an in-memory image to its content (no disk I/O)
pub fn crop_image_to_buffer(
    image: &DynamicImage,
    params: &CropParams,
) -> (CropOutcome, Option<DynamicImage>) {
    crop_to_content(image, params)
}

/// Crop the image at `path` to its content and overwrite it in its original format.
/// When no content is found the file is left untouched.
pub fn crop_image_in_place(path: &Path, params: &CropParams) -> Result<CropOutcome> {
    let (image, format) = open_image(path)?;
    let (outcome, cropped) = crop_to_content(&image, params);
    match cropped {
        Some(cropped) => overwrite_image(path, &cropped, format)?,
        None => info!("No content in {:?}; leaving it unchanged", path),
    }
    Ok(outcome)
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Images cropped and rewritten
    pub processed: usize,
    /// Images with no content, left unchanged
    pub skipped: usize,
    pub errors: usize,
}

/// Progress of a batch crop, reported per image.
#[derive(Debug)]
pub enum CropEvent<'a> {
    /// About to load and crop `path`
    Started(&'a Path),
    Finished(&'a Path, &'a Result<CropOutcome>),
}

/// Crop every image in `paths`, in order. A failing image is logged, counted and
/// reported through `on_event`; it never stops the remaining images.
pub fn crop_images<P, F>(paths: &[P], params: &CropParams, mut on_event: F) -> BatchReport
where
    P: AsRef<Path>,
    F: FnMut(CropEvent<'_>),
{
    let mut report = BatchReport::default();

    for path in paths {
        let path = path.as_ref();
        on_event(CropEvent::Started(path));
        let result = crop_image_in_place(path, params);
        match &result {
            Ok(CropOutcome::Cropped { .. }) => report.processed += 1,
            Ok(CropOutcome::NoContent) => report.skipped += 1,
            Err(e) => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
            }
        }
        on_event(CropEvent::Finished(path, &result));
    }

    info!(
        "Crop batch complete: processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    report
}

/// Exploratory offsets for placing a guide against the rotated mesh.
/// Diagnostic values only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideOffsets {
    pub max_x: f32,
    pub min_x_abs: f32,
}

/// Bounding boxes of a mesh before and after a quarter-turn rotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshReport {
    /// Solid name from an ASCII STL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub triangles: usize,
    pub original: Bounds3,
    pub rotation: Rotation,
    pub rotated: Bounds3,
    pub guide_offsets: GuideOffsets,
}

impl fmt::Display for MeshReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            writeln!(f, "Solid: {}", name)?;
        }
        writeln!(f, "Original Bounds:")?;
        writeln!(f, "{}", self.original)?;
        writeln!(f)?;
        writeln!(f, "Rotated ({}) Bounds:", self.rotation)?;
        writeln!(f, "{}", self.rotated)?;
        writeln!(f)?;
        writeln!(f, "Potential guide offsets:")?;
        writeln!(f, "Max X (Right side?): {:.2}", self.guide_offsets.max_x)?;
        write!(
            f,
            "Min X (Left side?): {:.2} (Absolute value)",
            self.guide_offsets.min_x_abs
        )
    }
}

/// Measure an in-memory `(n, 3)` vertex array
pub fn measure_vertices(vertices: &Array2<f32>, rotation: Rotation) -> Result<MeshReport> {
    let original = axis_bounds(vertices)?;
    let rotated = axis_bounds(&rotate_vertices(vertices, rotation)?)?;

    Ok(MeshReport {
        name: None,
        triangles: vertices.nrows() / 3,
        original,
        rotation,
        rotated,
        guide_offsets: GuideOffsets {
            max_x: rotated.x.max,
            min_x_abs: rotated.x.min.abs(),
        },
    })
}

/// Load the STL at `path` and measure it. A missing file is reported as
/// `Error::MissingInput` before any read is attempted.
pub fn measure_mesh(path: &Path, rotation: Rotation) -> Result<MeshReport> {
    if !path.exists() {
        return Err(Error::missing_input(path));
    }

    info!("Loading {:?}", path);
    let mesh = Mesh::open(path)?;
    info!(
        "Loaded {} triangles ({} vertices)",
        mesh.triangle_count(),
        mesh.vertex_count()
    );
    let mut report = measure_vertices(&mesh.vertices, rotation)?;
    report.name = mesh.name;
    Ok(report)
}
