#![doc = r#"
trimbox — auto-crop images to their content and measure STL meshes.

This crate bundles two small utilities behind one typed API and CLI:

- **Auto-crop**: treats the top-left pixel as the background color, finds the
  bounding box of everything that differs from it (with optional contrast
  stretching to ignore faint noise), pads that box, and overwrites the image
  with the crop.
- **Mesh measurement**: loads a binary or ASCII STL file and reports its
  axis-aligned bounding box before and after a quarter-turn rotation.

Crop an image in place
----------------------
```rust,no_run
use std::path::Path;
use trimbox::{crop_image_in_place, CropOutcome, CropParams};

fn main() -> trimbox::Result<()> {
    match crop_image_in_place(Path::new("hero.png"), &CropParams::default())? {
        CropOutcome::Cropped { content, crop } => println!("content {content}, cropped to {crop}"),
        CropOutcome::NoContent => println!("nothing to crop"),
    }
    Ok(())
}
```

Batch crop, continuing past failures
------------------------------------
```rust,no_run
use trimbox::{crop_images, CropEvent, CropParams};

let report = crop_images(&["hero.png", "hero_storage.png"], &CropParams::default(), |event| {
    if let CropEvent::Finished(path, Err(e)) = event {
        eprintln!("{}: {e}", path.display());
    }
});
println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
```

Measure a mesh
--------------
```rust,no_run
use std::path::Path;
use trimbox::{measure_mesh, Rotation};

fn main() -> trimbox::Result<()> {
    let report = measure_mesh(Path::new("reference/iphone-12-mini.stl"), Rotation::Y90)?;
    println!("{report}");
    Ok(())
}
```

Error handling
--------------
All fallible functions return `trimbox::Result<T>`; match on `trimbox::Error` to
handle specific cases such as a missing input file.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — crop parameters and processing primitives.
- [`io`] — image decode/overwrite and the STL reader.
- [`types`] — shared value types (`PixelBox`, `Bounds3`, `Rotation`).
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::params::{ContrastStretch, CropParams, DEFAULT_PADDING};
pub use crate::core::processing::crop::CropOutcome;
pub use error::{Error, Result};
pub use types::{AxisRange, Bounds3, PixelBox, ReportFormat, Rotation};

// Readers
pub use io::stl::{Mesh, StlError};

// High-level API re-exports
pub use api::{
    BatchReport, CropEvent, GuideOffsets, MeshReport, crop_image_in_place, crop_image_to_buffer,
    crop_images, measure_mesh, measure_vertices,
};
