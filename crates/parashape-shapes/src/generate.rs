//! Mesh builders behind [`crate::ShapeSpec::generate`].
//!
//! Every builder places its shape with the base centered on the world
//! origin and the axis of symmetry along +Z, matching the placement
//! convention of the modeling hosts these shapes come from.

use std::f64::consts::PI;

use parashape_math::{Axis, Point3};
use parashape_mesh::{PolygonMesh, PolygonVertex};
use parashape_sweep::{revolve, FaceStrategy};

use crate::profile;
use crate::ShapeError;

/// Output of shape generation.
///
/// Every shape but the helix is a polygon mesh; the helix is an open
/// polyline.
#[derive(Debug, Clone)]
pub enum ShapeGeometry {
    /// A polygon mesh.
    Mesh(PolygonMesh),
    /// An open polyline.
    Polyline(Vec<Point3>),
}

impl ShapeGeometry {
    /// The mesh, if this geometry is one.
    pub fn mesh(&self) -> Option<&PolygonMesh> {
        match self {
            ShapeGeometry::Mesh(m) => Some(m),
            ShapeGeometry::Polyline(_) => None,
        }
    }

    /// The polyline, if this geometry is one.
    pub fn polyline(&self) -> Option<&[Point3]> {
        match self {
            ShapeGeometry::Mesh(_) => None,
            ShapeGeometry::Polyline(p) => Some(p),
        }
    }
}

/// An axis-aligned box with one corner at the origin.
pub(crate) fn box_mesh(width: f64, depth: f64, height: f64) -> Result<PolygonMesh, ShapeError> {
    let (w, d, h) = (width, depth, height);
    let mut mesh = PolygonMesh::with_capacity(8, 6);
    let faces: [[Point3; 4]; 6] = [
        // Bottom (-Z) and top (+Z).
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, d, 0.0),
            Point3::new(w, d, 0.0),
            Point3::new(w, 0.0, 0.0),
        ],
        [
            Point3::new(0.0, 0.0, h),
            Point3::new(w, 0.0, h),
            Point3::new(w, d, h),
            Point3::new(0.0, d, h),
        ],
        // Front (-Y) and back (+Y).
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(w, 0.0, 0.0),
            Point3::new(w, 0.0, h),
            Point3::new(0.0, 0.0, h),
        ],
        [
            Point3::new(w, d, 0.0),
            Point3::new(0.0, d, 0.0),
            Point3::new(0.0, d, h),
            Point3::new(w, d, h),
        ],
        // Left (-X) and right (+X).
        [
            Point3::new(0.0, d, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, h),
            Point3::new(0.0, d, h),
        ],
        [
            Point3::new(w, 0.0, 0.0),
            Point3::new(w, d, 0.0),
            Point3::new(w, d, h),
            Point3::new(w, 0.0, h),
        ],
    ];
    for face in &faces {
        mesh.add_polygon_from_points(face)?;
    }
    Ok(mesh)
}

/// A capped column: two rings joined by wall quads plus n-gon caps.
/// Cylinders soften the vertical wall edges; prisms keep them hard.
pub(crate) fn column_mesh(
    radius: f64,
    height: f64,
    segments: u32,
    soft_walls: bool,
) -> Result<PolygonMesh, ShapeError> {
    let n = segments as usize;
    let axis = Axis::z();
    let mut mesh = PolygonMesh::with_capacity(2 * n, n + 2);
    let bottom: Vec<u32> = profile::ring(&axis, radius, 0.0, segments)
        .into_iter()
        .map(|p| mesh.add_point(p))
        .collect();
    let top: Vec<u32> = profile::ring(&axis, radius, height, segments)
        .into_iter()
        .map(|p| mesh.add_point(p))
        .collect();

    let vertical = |i: u32| {
        if soft_walls {
            PolygonVertex::soft(i)
        } else {
            PolygonVertex::hard(i)
        }
    };
    for j in 0..n {
        let k = (j + 1) % n;
        // The edge leaving each corner: ring edges hard, wall edges per kind.
        mesh.add_polygon(&[
            PolygonVertex::hard(bottom[j]),
            vertical(bottom[k]),
            PolygonVertex::hard(top[k]),
            vertical(top[j]),
        ])?;
    }

    let cap_down: Vec<PolygonVertex> =
        bottom.iter().rev().map(|&i| PolygonVertex::hard(i)).collect();
    mesh.add_polygon(&cap_down)?;
    let cap_up: Vec<PolygonVertex> = top.iter().map(|&i| PolygonVertex::hard(i)).collect();
    mesh.add_polygon(&cap_up)?;
    Ok(mesh)
}

/// A pointed column: a base ring, an apex, and a fan of wall triangles.
/// Cones soften the slant edges; pyramids keep them hard.
pub(crate) fn spire_mesh(
    radius: f64,
    height: f64,
    segments: u32,
    soft_walls: bool,
) -> Result<PolygonMesh, ShapeError> {
    let n = segments as usize;
    let mut mesh = PolygonMesh::with_capacity(n + 1, n + 1);
    let base: Vec<u32> = profile::ring(&Axis::z(), radius, 0.0, segments)
        .into_iter()
        .map(|p| mesh.add_point(p))
        .collect();
    let apex = mesh.add_point(Point3::new(0.0, 0.0, height));

    let slant = |i: u32| {
        if soft_walls {
            PolygonVertex::soft(i)
        } else {
            PolygonVertex::hard(i)
        }
    };
    for j in 0..n {
        let k = (j + 1) % n;
        mesh.add_polygon(&[PolygonVertex::hard(base[j]), slant(base[k]), slant(apex)])?;
    }

    let cap_down: Vec<PolygonVertex> =
        base.iter().rev().map(|&i| PolygonVertex::hard(i)).collect();
    mesh.add_polygon(&cap_down)?;
    Ok(mesh)
}

/// A hollow cylinder: outer and inner walls with opposing winding, joined
/// by top and bottom annulus quads.
pub(crate) fn tube_mesh(
    radius: f64,
    thickness: f64,
    height: f64,
    segments: u32,
) -> Result<PolygonMesh, ShapeError> {
    let n = segments as usize;
    let inner_radius = radius - thickness;
    let axis = Axis::z();
    let mut mesh = PolygonMesh::with_capacity(4 * n, 4 * n);
    let mut intern = |pts: Vec<Point3>| -> Vec<u32> {
        pts.into_iter().map(|p| mesh.add_point(p)).collect()
    };
    let ob = intern(profile::ring(&axis, radius, 0.0, segments));
    let ot = intern(profile::ring(&axis, radius, height, segments));
    let ib = intern(profile::ring(&axis, inner_radius, 0.0, segments));
    let it = intern(profile::ring(&axis, inner_radius, height, segments));

    for j in 0..n {
        let k = (j + 1) % n;
        // Outer wall faces outward, inner wall faces the bore.
        mesh.add_polygon(&[
            PolygonVertex::hard(ob[j]),
            PolygonVertex::soft(ob[k]),
            PolygonVertex::hard(ot[k]),
            PolygonVertex::soft(ot[j]),
        ])?;
        mesh.add_polygon(&[
            PolygonVertex::hard(ib[k]),
            PolygonVertex::soft(ib[j]),
            PolygonVertex::hard(it[j]),
            PolygonVertex::soft(it[k]),
        ])?;
        // Bottom annulus faces -Z, top annulus +Z.
        mesh.add_polygon(&[
            PolygonVertex::hard(ob[k]),
            PolygonVertex::hard(ob[j]),
            PolygonVertex::hard(ib[j]),
            PolygonVertex::hard(ib[k]),
        ])?;
        mesh.add_polygon(&[
            PolygonVertex::hard(ot[j]),
            PolygonVertex::hard(ot[k]),
            PolygonVertex::hard(it[k]),
            PolygonVertex::hard(it[j]),
        ])?;
    }
    Ok(mesh)
}

/// A torus: a closed circle profile in the XZ plane revolved about Z.
pub(crate) fn torus_mesh(
    small_radius: f64,
    outer_radius: f64,
    profile_segments: u32,
    sweep_segments: u32,
) -> Result<PolygonMesh, ShapeError> {
    let tube_center = outer_radius - small_radius;
    let circle = profile::circle_xz(tube_center, small_radius, profile_segments);
    let mesh = revolve(&circle, &Axis::z(), sweep_segments, FaceStrategy::Auto)?;
    Ok(mesh)
}

/// A dome: a quarter arc from the equator to the zenith, revolved about Z.
/// The zenith point sits on the axis and collapses to a pole fan. The base
/// stays open, like the host shape.
pub(crate) fn dome_mesh(radius: f64, segments_per_quarter: u32) -> Result<PolygonMesh, ShapeError> {
    let arc = profile::arc_xz(radius, 0.0, PI / 2.0, segments_per_quarter);
    let mesh = revolve(&arc, &Axis::z(), 4 * segments_per_quarter, FaceStrategy::Auto)?;
    Ok(mesh)
}

/// A sphere: a half arc from the nadir to the zenith, revolved about Z.
/// Both endpoints collapse to pole fans.
pub(crate) fn sphere_mesh(
    radius: f64,
    segments_per_quarter: u32,
) -> Result<PolygonMesh, ShapeError> {
    let arc = profile::arc_xz(radius, -PI / 2.0, PI / 2.0, 2 * segments_per_quarter);
    let mesh = revolve(&arc, &Axis::z(), 4 * segments_per_quarter, FaceStrategy::Auto)?;
    Ok(mesh)
}
