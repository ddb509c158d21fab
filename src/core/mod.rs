//! Core building blocks: crop parameters and the processing primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
