use image::{Rgba, RgbaImage};
use ndarray::Array2;

use crate::core::params::ContrastStretch;

/// Background color of an image: its top-left pixel.
pub fn background_color(image: &RgbaImage) -> Rgba<u8> {
    *image.get_pixel(0, 0)
}

/// Absolute per-channel difference against a uniform `background`, optionally
/// remapped by `contrast`, reduced to the strongest channel per pixel.
///
/// The result is indexed `[[row, col]]`; a non-zero entry marks content.
pub fn background_difference(
    image: &RgbaImage,
    background: Rgba<u8>,
    contrast: Option<ContrastStretch>,
) -> Array2<u8> {
    let (width, height) = image.dimensions();
    let mut diff = Array2::<u8>::zeros((height as usize, width as usize));

    for (x, y, pixel) in image.enumerate_pixels() {
        let strongest = pixel
            .0
            .iter()
            .zip(background.0.iter())
            .map(|(&p, &b)| {
                let d = p.abs_diff(b);
                match contrast {
                    Some(stretch) => stretch.apply(d),
                    None => d,
                }
            })
            .max()
            .unwrap_or(0);
        diff[[y as usize, x as usize]] = strongest;
    }

    diff
}
