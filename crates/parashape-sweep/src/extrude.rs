//! Twisted extrusion: sweep a profile along a screw motion.

use parashape_math::{Axis, Point3, Transform, Vec3};
use parashape_mesh::{PolygonMesh, PolygonVertex};

use crate::SweepError;

/// Extrude `profile` along `direction` while rotating it about the line
/// through `center` along `direction`, by `total_angle` radians overall.
///
/// The motion is divided into `segments` equal screw steps (translation by
/// `direction / segments` composed with rotation by `total_angle /
/// segments`). Ring `i` is the image of the profile after `i` steps, for
/// `i = 0 .. segments`, so the swept distance is covered by `segments - 1`
/// bands. Every ring is full: an extrusion never passes through the axis,
/// so there is no pole collapsing.
///
/// Each band cell is two triangles. Profile-direction and diagonal edges
/// are marked soft so a consumer can smooth across the faceting, while
/// the edges along the travel direction stay hard.
///
/// # Errors
///
/// - [`SweepError::ProfileTooShort`] if `profile` has fewer than two points.
/// - [`SweepError::TooFewSegments`] if `segments` is zero.
/// - [`SweepError::ZeroDirection`] if `direction` is zero.
pub fn extrude_with_twist(
    profile: &[Point3],
    center: Point3,
    direction: Vec3,
    total_angle: f64,
    segments: u32,
) -> Result<PolygonMesh, SweepError> {
    if profile.len() < 2 {
        return Err(SweepError::ProfileTooShort(profile.len()));
    }
    if segments < 1 {
        return Err(SweepError::TooFewSegments {
            required: 1,
            got: segments,
        });
    }
    let axis = Axis::new(center, direction).ok_or(SweepError::ZeroDirection)?;

    let steps = segments as usize;
    let step = Transform::translation(direction / segments as f64)
        .then(&Transform::rotation_about_line(&axis, total_angle / segments as f64));

    let n = profile.len();
    let mut mesh = PolygonMesh::with_capacity(n * steps, 2 * n * steps.saturating_sub(1));

    let mut rings: Vec<Vec<u32>> = Vec::with_capacity(steps);
    let mut current: Vec<Point3> = profile.to_vec();
    for _ in 0..steps {
        rings.push(current.iter().map(|p| mesh.add_point(*p)).collect());
        for p in &mut current {
            *p = step.apply_point(p);
        }
    }

    for pair in rings.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        for j in 0..n {
            let k = (j + 1) % n;
            mesh.add_polygon(&[
                PolygonVertex::soft(a[j]),
                PolygonVertex::hard(b[k]),
                PolygonVertex::soft(a[k]),
            ])?;
            mesh.add_polygon(&[
                PolygonVertex::hard(a[j]),
                PolygonVertex::soft(b[j]),
                PolygonVertex::soft(b[k]),
            ])?;
        }
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn square() -> Vec<Point3> {
        vec![
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(-1.0, 1.0, 0.0),
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
        ]
    }

    #[test]
    fn test_extrude_counts() {
        let segments = 5;
        let mesh = extrude_with_twist(
            &square(),
            Point3::origin(),
            Vec3::new(0.0, 0.0, 10.0),
            PI / 2.0,
            segments,
        )
        .unwrap();
        // 4 profile points per ring, `segments` rings.
        assert_eq!(mesh.num_points(), 4 * segments as usize);
        // Two triangles per cell, 4 cells per band, segments-1 bands.
        assert_eq!(mesh.num_polygons(), 2 * 4 * (segments as usize - 1));
        assert_eq!(mesh.count_ngons(3), mesh.num_polygons());
    }

    #[test]
    fn test_extrude_ring_positions() {
        // Quarter twist over 4 steps: ring i sits at z = 10*i/4 and is
        // rotated by (PI/2)*i/4.
        let mesh = extrude_with_twist(
            &[Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)],
            Point3::origin(),
            Vec3::new(0.0, 0.0, 10.0),
            PI / 2.0,
            4,
        )
        .unwrap();
        let pts = mesh.points();
        // Ring 1 image of (1,0,0): rotated PI/8, raised 2.5.
        let a = PI / 8.0;
        let want = Point3::new(a.cos(), a.sin(), 2.5);
        assert!((pts[2] - want).norm() < 1e-12, "got {:?}", pts[2]);
    }

    #[test]
    fn test_extrude_soft_edge_markers() {
        let mesh = extrude_with_twist(
            &square(),
            Point3::origin(),
            Vec3::new(0.0, 0.0, 4.0),
            0.0,
            3,
        )
        .unwrap();
        // First triangle of each cell: soft, hard, soft.
        let tri = &mesh.polygons()[0];
        assert!(tri[0].soft);
        assert!(!tri[1].soft);
        assert!(tri[2].soft);
        // Second triangle: hard, soft, soft.
        let tri = &mesh.polygons()[1];
        assert!(!tri[0].soft);
        assert!(tri[1].soft);
        assert!(tri[2].soft);
    }

    #[test]
    fn test_extrude_no_twist_keeps_profile_shape() {
        let mesh = extrude_with_twist(
            &square(),
            Point3::origin(),
            Vec3::new(0.0, 0.0, 6.0),
            0.0,
            3,
        )
        .unwrap();
        // Last ring is the profile translated by 2 steps of 2.0.
        let pts = mesh.points();
        let last_ring = &pts[8..12];
        for (p, q) in last_ring.iter().zip(square().iter()) {
            assert!((p.x - q.x).abs() < 1e-12);
            assert!((p.y - q.y).abs() < 1e-12);
            assert!((p.z - 4.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_extrude_validation() {
        let one = [Point3::origin()];
        assert!(matches!(
            extrude_with_twist(&one, Point3::origin(), Vec3::z(), 0.0, 4),
            Err(SweepError::ProfileTooShort(1))
        ));
        assert!(matches!(
            extrude_with_twist(&square(), Point3::origin(), Vec3::z(), 0.0, 0),
            Err(SweepError::TooFewSegments { required: 1, got: 0 })
        ));
        assert!(matches!(
            extrude_with_twist(&square(), Point3::origin(), Vec3::zeros(), 1.0, 4),
            Err(SweepError::ZeroDirection)
        ));
    }
}
