use ndarray::Array2;

use crate::core::processing::bounds::check_vertex_shape;
use crate::error::Result;
use crate::types::Rotation;

/// Apply a quarter-turn `rotation` to every row of an `(n, 3)` vertex array.
pub fn rotate_vertices(vertices: &Array2<f32>, rotation: Rotation) -> Result<Array2<f32>> {
    check_vertex_shape(vertices)?;
    let (x, y, z) = (vertices.column(0), vertices.column(1), vertices.column(2));
    let mut rotated = Array2::<f32>::zeros(vertices.dim());

    match rotation {
        Rotation::X90 => {
            rotated.column_mut(0).assign(&x);
            rotated.column_mut(1).assign(&z.mapv(|v| -v));
            rotated.column_mut(2).assign(&y);
        }
        Rotation::Y90 => {
            rotated.column_mut(0).assign(&z);
            rotated.column_mut(1).assign(&y);
            rotated.column_mut(2).assign(&x.mapv(|v| -v));
        }
        Rotation::Z90 => {
            rotated.column_mut(0).assign(&y.mapv(|v| -v));
            rotated.column_mut(1).assign(&x);
            rotated.column_mut(2).assign(&z);
        }
    }

    Ok(rotated)
}
