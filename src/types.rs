//! Shared types and enums used across trimbox.
//! Includes `Rotation`, `ReportFormat`, the pixel rectangle `PixelBox`, and the
//! mesh extents `AxisRange` / `Bounds3`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Quarter-turn rotation applied to a mesh before measuring it again.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
pub enum Rotation {
    /// 90° about X: (x, y, z) -> (x, -z, y)
    X90,
    /// 90° about Y: (x, y, z) -> (z, y, -x)
    #[default]
    Y90,
    /// 90° about Z: (x, y, z) -> (-y, x, z)
    Z90,
}

impl Rotation {
    /// Rotation vector in OpenSCAD `rotate([x, y, z])` notation.
    pub fn degrees(self) -> [i32; 3] {
        match self {
            Rotation::X90 => [90, 0, 0],
            Rotation::Y90 => [0, 90, 0],
            Rotation::Z90 => [0, 0, 90],
        }
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [x, y, z] = self.degrees();
        write!(f, "[{}, {}, {}]", x, y, z)
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Half-open pixel rectangle: `right` and `lower` are exclusive.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PixelBox {
    pub left: u32,
    pub upper: u32,
    pub right: u32,
    pub lower: u32,
}

impl PixelBox {
    pub fn new(left: u32, upper: u32, right: u32, lower: u32) -> Self {
        Self {
            left,
            upper,
            right,
            lower,
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.lower - self.upper
    }

    /// Grow by `padding` on every side, clamped to a `width` x `height` image.
    pub fn expand(&self, padding: u32, width: u32, height: u32) -> Self {
        Self {
            left: self.left.saturating_sub(padding),
            upper: self.upper.saturating_sub(padding),
            right: self.right.saturating_add(padding).min(width),
            lower: self.lower.saturating_add(padding).min(height),
        }
    }
}

impl std::fmt::Display for PixelBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.upper, self.right, self.lower
        )
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f32,
    pub max: f32,
}

impl std::fmt::Display for AxisRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} to {:.2}", self.min, self.max)
    }
}

/// Axis-aligned bounding box of a vertex set.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Bounds3 {
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: AxisRange,
}

impl std::fmt::Display for Bounds3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "X: {}", self.x)?;
        writeln!(f, "Y: {}", self.y)?;
        write!(f, "Z: {}", self.z)
    }
}
