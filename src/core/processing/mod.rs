//! Processing primitives for both tools: background difference, content
//! bounding boxes and cropping for images; axis bounds and quarter-turn
//! rotations for mesh vertex arrays.
pub mod bbox;
pub mod bounds;
pub mod crop;
pub mod difference;
pub mod rotate;
