#![warn(missing_docs)]

//! Polygon mesh buffer for the parashape geometry kernel.
//!
//! A [`PolygonMesh`] accumulates unique vertices and polygons (index lists
//! into the vertex buffer) while a generator builds a shape, then is handed
//! whole to the consumer for face construction or export. It is created
//! fresh per generation call and owns no state beyond the current build.

use std::collections::HashMap;

use parashape_math::Point3;
use thiserror::Error;

/// Errors from mesh construction.
#[derive(Debug, Clone, Error)]
pub enum MeshError {
    /// A polygon needs at least three vertices.
    #[error("polygon needs at least 3 vertices, got {0}")]
    PolygonTooSmall(usize),

    /// A polygon referenced a vertex index outside the vertex buffer.
    #[error("polygon index {index} out of range (mesh has {len} points)")]
    IndexOutOfRange {
        /// The offending index.
        index: u32,
        /// Number of points currently in the mesh.
        len: usize,
    },
}

/// One corner of a polygon: a vertex index plus a soft-edge marker.
///
/// `soft` flags the edge leaving this corner as smoothed/hidden. It is the
/// explicit form of the negative-index convention modeling hosts use when
/// building faces from a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolygonVertex {
    /// Index into the mesh's vertex buffer.
    pub point: u32,
    /// Whether the outgoing edge is soft (smoothed between adjacent faces).
    pub soft: bool,
}

impl PolygonVertex {
    /// A corner with a hard outgoing edge.
    pub fn hard(point: u32) -> Self {
        Self { point, soft: false }
    }

    /// A corner with a soft outgoing edge.
    pub fn soft(point: u32) -> Self {
        Self { point, soft: true }
    }
}

/// A polygon: three or more corners, in winding order.
pub type Polygon = Vec<PolygonVertex>;

/// An accumulating buffer of unique vertices and polygons.
#[derive(Debug, Clone, Default)]
pub struct PolygonMesh {
    points: Vec<Point3>,
    polygons: Vec<Polygon>,
    // Quantized position -> index, so coincident points share one slot.
    index_cache: HashMap<[i64; 3], u32>,
}

fn quantize(p: &Point3) -> [i64; 3] {
    [
        (p.x * 1e9).round() as i64,
        (p.y * 1e9).round() as i64,
        (p.z * 1e9).round() as i64,
    ]
}

impl PolygonMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh with room for roughly `points` vertices and
    /// `polygons` polygons.
    pub fn with_capacity(points: usize, polygons: usize) -> Self {
        Self {
            points: Vec::with_capacity(points),
            polygons: Vec::with_capacity(polygons),
            index_cache: HashMap::with_capacity(points),
        }
    }

    /// Add a point, returning its index.
    ///
    /// Points coincident with an existing vertex (within quantization) are
    /// deduplicated and return the existing index.
    pub fn add_point(&mut self, p: Point3) -> u32 {
        let key = quantize(&p);
        if let Some(&idx) = self.index_cache.get(&key) {
            return idx;
        }
        let idx = self.points.len() as u32;
        self.points.push(p);
        self.index_cache.insert(key, idx);
        idx
    }

    /// Add a polygon given prepared corners.
    ///
    /// Returns the polygon's index. Fails if fewer than three corners are
    /// given or any index is out of range; the mesh is unchanged on failure.
    pub fn add_polygon(&mut self, corners: &[PolygonVertex]) -> Result<usize, MeshError> {
        if corners.len() < 3 {
            return Err(MeshError::PolygonTooSmall(corners.len()));
        }
        for c in corners {
            if c.point as usize >= self.points.len() {
                return Err(MeshError::IndexOutOfRange {
                    index: c.point,
                    len: self.points.len(),
                });
            }
        }
        self.polygons.push(corners.to_vec());
        Ok(self.polygons.len() - 1)
    }

    /// Add a polygon of hard-edged corners directly from positions.
    ///
    /// Each position is interned via [`PolygonMesh::add_point`], so repeated
    /// positions across polygons share vertices.
    pub fn add_polygon_from_points(&mut self, points: &[Point3]) -> Result<usize, MeshError> {
        if points.len() < 3 {
            return Err(MeshError::PolygonTooSmall(points.len()));
        }
        let corners: Vec<PolygonVertex> = points
            .iter()
            .map(|p| PolygonVertex::hard(self.add_point(*p)))
            .collect();
        self.add_polygon(&corners)
    }

    /// The vertex buffer.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// The polygon buffer.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Number of unique vertices.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Number of polygons.
    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    /// Whether the mesh has no polygons.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Count polygons with exactly `n` corners.
    pub fn count_ngons(&self, n: usize) -> usize {
        self.polygons.iter().filter(|p| p.len() == n).count()
    }
}
