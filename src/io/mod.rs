//! I/O layer: image decode and atomic in-place overwrite (`raster`), and the
//! STL mesh reader (`stl`).
pub mod raster;
pub use raster::{open_image, overwrite_image};

pub mod stl;
pub use stl::{Mesh, StlError};
