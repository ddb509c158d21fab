//! Image decode and in-place overwrite.
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::Result;

/// Decode an image, sniffing its format from the content.
pub fn open_image(path: &Path) -> Result<(DynamicImage, ImageFormat)> {
    let mut reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = match reader.format() {
        Some(format) => format,
        None => {
            let format = ImageFormat::from_path(path)?;
            reader.set_format(format);
            format
        }
    };
    let image = reader.decode()?;
    debug!(
        "Decoded {:?} as {:?}: {}x{} {:?}",
        path,
        format,
        image.width(),
        image.height(),
        image.color()
    );
    Ok((image, format))
}

/// Replace `path` with `image` encoded as `format`.
///
/// Encodes into a temporary file next to `path` and renames it over the
/// original; the original's permissions carry over.
pub fn overwrite_image(path: &Path, image: &DynamicImage, format: ImageFormat) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        image.write_to(&mut writer, format)?;
        writer.flush()?;
    }
    if let Ok(meta) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), meta.permissions())?;
    }
    tmp.persist(path)?;
    info!(
        "Wrote {}x{} {:?} to {:?}",
        image.width(),
        image.height(),
        format,
        path
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn overwrite_replaces_contents_and_keeps_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pic.png");
        RgbImage::from_pixel(8, 6, Rgb([1, 2, 3])).save(&path).unwrap();

        let smaller = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 2, Rgb([9, 9, 9])));
        overwrite_image(&path, &smaller, ImageFormat::Png).unwrap();

        let (back, format) = open_image(&path).unwrap();
        assert_eq!(format, ImageFormat::Png);
        assert_eq!((back.width(), back.height()), (3, 2));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn open_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_image(&dir.path().join("absent.png")).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }

    #[test]
    fn garbage_is_an_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let err = open_image(&path).unwrap_err();
        assert!(matches!(err, crate::Error::Image(_)));
    }
}
