use ndarray::Array2;
use tracing::debug;

use crate::types::PixelBox;

/// Bounding rectangle of all non-zero entries of a `[[row, col]]` mask.
/// Returns `None` when every entry is zero.
pub fn nonzero_bbox(mask: &Array2<u8>) -> Option<PixelBox> {
    let mut found: Option<PixelBox> = None;

    for ((row, col), &value) in mask.indexed_iter() {
        if value == 0 {
            continue;
        }
        let (x, y) = (col as u32, row as u32);
        found = Some(match found {
            None => PixelBox::new(x, y, x + 1, y + 1),
            Some(b) => PixelBox::new(
                b.left.min(x),
                b.upper.min(y),
                b.right.max(x + 1),
                b.lower.max(y + 1),
            ),
        });
    }

    found
}

/// Expand `content` by `padding` pixels, clamped to a `width` x `height` image.
pub fn pad_bbox(content: PixelBox, padding: u32, width: u32, height: u32) -> PixelBox {
    let padded = content.expand(padding, width, height);
    debug!(
        "Padding content box: content={}, padding={}, padded={}",
        content, padding, padded
    );
    padded
}
