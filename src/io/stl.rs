//! STL reader for binary and ASCII triangle meshes.
//!
//! Produces a flattened `(3 * triangles, 3)` vertex array; facet normals and
//! attribute words are read past and discarded.
use std::fs;
use std::path::Path;

use ndarray::Array2;
use thiserror::Error;
use tracing::{debug, info, warn};

const HEADER_LEN: usize = 80;
const COUNT_LEN: usize = 4;
const RECORD_LEN: usize = 50;

#[derive(Debug, Error)]
pub enum StlError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Binary STL truncated: expected {expected} bytes, found {found}")]
    Truncated { expected: usize, found: usize },
    #[error("ASCII STL line {line}: {message}")]
    Malformed { line: usize, message: String },
    #[error("ASCII STL is not valid UTF-8")]
    Encoding,
}

impl StlError {
    fn malformed(line: usize, message: impl Into<String>) -> Self {
        StlError::Malformed {
            line,
            message: message.into(),
        }
    }
}

/// Triangle mesh as a flattened vertex array.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Solid name from an ASCII file, if any
    pub name: Option<String>,
    /// One row per vertex, columns x, y, z; every three rows form a triangle
    pub vertices: Array2<f32>,
}

impl Mesh {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StlError> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        info!("Read {} bytes from {:?}", bytes.len(), path);
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StlError> {
        if binary_size_matches(bytes) {
            return parse_binary(bytes);
        }
        let trimmed = bytes.trim_ascii_start();
        if !trimmed.starts_with(b"solid") {
            return parse_binary(bytes);
        }
        match parse_ascii(trimmed) {
            Err(e @ (StlError::Encoding | StlError::Malformed { .. })) if binary_fits(bytes) => {
                debug!("ASCII parse failed ({}); retrying as binary", e);
                parse_binary(bytes)
            }
            Ok(mesh)
                if mesh.vertex_count() == 0
                    && declared_triangles(bytes).is_some_and(|n| n > 0)
                    && binary_fits(bytes) =>
            {
                debug!("ASCII parse found no vertices; retrying as binary");
                parse_binary(bytes)
            }
            result => result,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.nrows()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.nrows() / 3
    }
}

fn declared_triangles(bytes: &[u8]) -> Option<usize> {
    let count = bytes.get(HEADER_LEN..HEADER_LEN + COUNT_LEN)?;
    Some(u32::from_le_bytes([count[0], count[1], count[2], count[3]]) as usize)
}

fn binary_size_matches(bytes: &[u8]) -> bool {
    declared_triangles(bytes)
        .is_some_and(|n| HEADER_LEN + COUNT_LEN + n * RECORD_LEN == bytes.len())
}

fn binary_fits(bytes: &[u8]) -> bool {
    declared_triangles(bytes)
        .is_some_and(|n| HEADER_LEN + COUNT_LEN + n * RECORD_LEN <= bytes.len())
}

fn read_f32(bytes: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn parse_binary(bytes: &[u8]) -> Result<Mesh, StlError> {
    let triangles = declared_triangles(bytes).ok_or(StlError::Truncated {
        expected: HEADER_LEN + COUNT_LEN,
        found: bytes.len(),
    })?;
    let expected = HEADER_LEN + COUNT_LEN + triangles * RECORD_LEN;
    if bytes.len() < expected {
        return Err(StlError::Truncated {
            expected,
            found: bytes.len(),
        });
    }
    if bytes.len() > expected {
        warn!(
            "Ignoring {} trailing bytes after {} triangles",
            bytes.len() - expected,
            triangles
        );
    }

    let mut vertices = Array2::<f32>::zeros((triangles * 3, 3));
    for t in 0..triangles {
        // skip the 12-byte normal
        let record = HEADER_LEN + COUNT_LEN + t * RECORD_LEN + 12;
        for v in 0..3 {
            for axis in 0..3 {
                vertices[[t * 3 + v, axis]] = read_f32(bytes, record + (v * 3 + axis) * 4);
            }
        }
    }

    debug!("Parsed binary STL: {} triangles", triangles);
    Ok(Mesh {
        name: None,
        vertices,
    })
}

fn parse_ascii(bytes: &[u8]) -> Result<Mesh, StlError> {
    let text = std::str::from_utf8(bytes).map_err(|_| StlError::Encoding)?;
    let mut name = None;
    let mut coords: Vec<f32> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let mut tokens = raw.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };
        match keyword {
            "solid" => {
                let rest = tokens.collect::<Vec<_>>().join(" ");
                if !rest.is_empty() {
                    name = Some(rest);
                }
            }
            "vertex" => {
                for _ in 0..3 {
                    let token = tokens
                        .next()
                        .ok_or_else(|| StlError::malformed(line, "vertex needs 3 coordinates"))?;
                    let value = token.parse::<f32>().map_err(|_| {
                        StlError::malformed(line, format!("invalid coordinate `{}`", token))
                    })?;
                    coords.push(value);
                }
            }
            "facet" | "outer" | "endloop" | "endfacet" | "endsolid" => {}
            other => {
                return Err(StlError::malformed(
                    line,
                    format!("unexpected keyword `{}`", other),
                ));
            }
        }
    }

    let vertex_count = coords.len() / 3;
    if vertex_count % 3 != 0 {
        return Err(StlError::malformed(
            text.lines().count(),
            format!("{} vertices do not form whole triangles", vertex_count),
        ));
    }

    let vertices = Array2::from_shape_vec((vertex_count, 3), coords)
        .map_err(|e| StlError::malformed(0, e.to_string()))?;
    debug!("Parsed ASCII STL: {} triangles", vertex_count / 3);
    Ok(Mesh { name, vertices })
}
