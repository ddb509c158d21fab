use ndarray::{Array2, ArrayView1};

use crate::error::{Error, Result};
use crate::types::{AxisRange, Bounds3};

fn axis_range(column: ArrayView1<'_, f32>) -> AxisRange {
    column.iter().fold(
        AxisRange {
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
        },
        |acc, &v| AxisRange {
            min: acc.min.min(v),
            max: acc.max.max(v),
        },
    )
}

/// Reject arrays that are not one `x, y, z` row per vertex.
pub fn check_vertex_shape(vertices: &Array2<f32>) -> Result<()> {
    if vertices.ncols() != 3 {
        return Err(Error::InvalidArgument {
            arg: "vertices",
            value: format!("expected 3 columns, got {}", vertices.ncols()),
        });
    }
    Ok(())
}

/// Per-axis minimum and maximum of an `(n, 3)` vertex array.
pub fn axis_bounds(vertices: &Array2<f32>) -> Result<Bounds3> {
    if vertices.nrows() == 0 {
        return Err(Error::EmptyMesh);
    }
    check_vertex_shape(vertices)?;

    Ok(Bounds3 {
        x: axis_range(vertices.column(0)),
        y: axis_range(vertices.column(1)),
        z: axis_range(vertices.column(2)),
    })
}
