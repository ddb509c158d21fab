use image::DynamicImage;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::params::CropParams;
use crate::core::processing::bbox::{nonzero_bbox, pad_bbox};
use crate::core::processing::difference::{background_color, background_difference};
use crate::types::PixelBox;

/// What auto-crop decided for one image.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CropOutcome {
    /// `content` is the raw content box, `crop` the padded and clamped box actually cut.
    Cropped { content: PixelBox, crop: PixelBox },
    /// Every pixel matches the background.
    NoContent,
}

pub fn find_crop_box(image: &DynamicImage, params: &CropParams) -> CropOutcome {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return CropOutcome::NoContent;
    }

    let rgba = image.to_rgba8();
    let background = background_color(&rgba);
    debug!("Background color (top-left): {:?}", background.0);

    let diff = background_difference(&rgba, background, params.contrast);
    match nonzero_bbox(&diff) {
        Some(content) => {
            let crop = pad_bbox(content, params.padding, width, height);
            info!(
                "Content box {} -> crop {} ({}x{} of {}x{})",
                content,
                crop,
                crop.width(),
                crop.height(),
                width,
                height
            );
            CropOutcome::Cropped { content, crop }
        }
        None => CropOutcome::NoContent,
    }
}

/// Cut `region` out of `image`, keeping its color type.
pub fn apply_crop(image: &DynamicImage, region: PixelBox) -> DynamicImage {
    image.crop_imm(region.left, region.upper, region.width(), region.height())
}

/// Detect content and crop to it; `None` when there is nothing to keep.
pub fn crop_to_content(
    image: &DynamicImage,
    params: &CropParams,
) -> (CropOutcome, Option<DynamicImage>) {
    let outcome = find_crop_box(image, params);
    let cropped = match outcome {
        CropOutcome::Cropped { crop, .. } => Some(apply_crop(image, crop)),
        CropOutcome::NoContent => None,
    };
    (outcome, cropped)
}
