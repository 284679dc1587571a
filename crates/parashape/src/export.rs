//! Wavefront OBJ export for generated geometry.
//!
//! Meshes become `v`/`f` statements (n-gons are written as-is, OBJ allows
//! faces with any number of corners); helical polylines become `v`/`l`
//! statements. Indices are 1-based per the format.

use std::fs;
use std::path::Path;

use parashape_math::Point3;
use parashape_mesh::PolygonMesh;
use parashape_shapes::ShapeGeometry;

use crate::ExportError;

/// Render `geometry` as an OBJ document.
pub fn obj_string(geometry: &ShapeGeometry) -> Result<String, ExportError> {
    match geometry {
        ShapeGeometry::Mesh(mesh) => mesh_obj(mesh),
        ShapeGeometry::Polyline(points) => polyline_obj(points),
    }
}

/// Write `geometry` to `path` as an OBJ file.
pub fn write_obj<P: AsRef<Path>>(path: P, geometry: &ShapeGeometry) -> Result<(), ExportError> {
    let obj = obj_string(geometry)?;
    fs::write(path, obj)?;
    Ok(())
}

fn mesh_obj(mesh: &PolygonMesh) -> Result<String, ExportError> {
    if mesh.is_empty() {
        return Err(ExportError::EmptyGeometry);
    }
    let mut out = String::new();
    for p in mesh.points() {
        out.push_str(&format!("v {} {} {}\n", p.x, p.y, p.z));
    }
    for poly in mesh.polygons() {
        out.push('f');
        for corner in poly {
            out.push_str(&format!(" {}", corner.point + 1));
        }
        out.push('\n');
    }
    Ok(out)
}

fn polyline_obj(points: &[Point3]) -> Result<String, ExportError> {
    if points.len() < 2 {
        return Err(ExportError::EmptyGeometry);
    }
    let mut out = String::new();
    for p in points {
        out.push_str(&format!("v {} {} {}\n", p.x, p.y, p.z));
    }
    out.push('l');
    for i in 1..=points.len() {
        out.push_str(&format!(" {i}"));
    }
    out.push('\n');
    Ok(out)
}
