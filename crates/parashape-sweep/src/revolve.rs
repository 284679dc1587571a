//! Revolve operation: sweep a point profile a full turn around an axis.

use std::f64::consts::PI;

use parashape_math::{Axis, Point3, Tolerance, Transform};
use parashape_mesh::{PolygonMesh, PolygonVertex};

use crate::SweepError;

/// How to fill the band between two full rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaceStrategy {
    /// One quad per angular step, regardless of warp.
    Quads,
    /// Two triangles per angular step.
    Triangles,
    /// Quad when the four corners are coplanar, two triangles otherwise.
    #[default]
    Auto,
}

/// Revolve `profile` a full turn around `axis` in `segments` angular steps.
///
/// Each profile point contributes a ring of `segments` rotated copies,
/// except points lying on the axis, which contribute a single shared pole
/// vertex. Consecutive rings are connected into bands: quads (or triangle
/// pairs, per `strategy`) between two full rings, a fan of `segments`
/// triangles between a pole and a full ring, and nothing between two poles.
///
/// # Errors
///
/// - [`SweepError::ProfileTooShort`] if `profile` has fewer than two points.
/// - [`SweepError::TooFewSegments`] if `segments` is zero.
pub fn revolve(
    profile: &[Point3],
    axis: &Axis,
    segments: u32,
    strategy: FaceStrategy,
) -> Result<PolygonMesh, SweepError> {
    let n = segments as usize;
    let mut mesh = PolygonMesh::with_capacity(profile.len() * n, profile.len().saturating_sub(1) * n);
    revolve_into(&mut mesh, profile, axis, segments, strategy)?;
    Ok(mesh)
}

/// Like [`revolve`], but appends into an existing mesh.
///
/// Validation happens before any point is added, so a failed call leaves
/// `mesh` untouched.
pub fn revolve_into(
    mesh: &mut PolygonMesh,
    profile: &[Point3],
    axis: &Axis,
    segments: u32,
    strategy: FaceStrategy,
) -> Result<(), SweepError> {
    if profile.len() < 2 {
        return Err(SweepError::ProfileTooShort(profile.len()));
    }
    if segments < 1 {
        return Err(SweepError::TooFewSegments {
            required: 1,
            got: segments,
        });
    }

    let tol = Tolerance::DEFAULT;
    let n = segments as usize;
    let step = Transform::rotation_about_line(axis, 2.0 * PI / segments as f64);

    // One ring of indices per profile point; a pole ring has length 1.
    let mut rings: Vec<Vec<u32>> = Vec::with_capacity(profile.len());
    for &p in profile {
        if axis.contains(&p, &tol) {
            rings.push(vec![mesh.add_point(p)]);
        } else {
            let mut indices = Vec::with_capacity(n);
            let mut q = p;
            for _ in 0..n {
                indices.push(mesh.add_point(q));
                q = step.apply_point(&q);
            }
            rings.push(indices);
        }
    }

    for pair in rings.windows(2) {
        let (r1, r2) = (&pair[0], &pair[1]);
        if r1.len() == 1 && r2.len() == 1 {
            // Both points on the axis: nothing to connect.
            continue;
        }
        for j in 0..n {
            let jp1 = (j + 1) % n;
            if r1.len() == 1 {
                triangle(mesh, r1[0], r2[jp1], r2[j])?;
            } else if r2.len() == 1 {
                triangle(mesh, r1[j], r1[jp1], r2[0])?;
            } else {
                let corners = [r1[j], r1[jp1], r2[jp1], r2[j]];
                if quad_is_allowed(mesh, &corners, strategy) {
                    mesh.add_polygon(&[
                        PolygonVertex::hard(corners[0]),
                        PolygonVertex::hard(corners[1]),
                        PolygonVertex::hard(corners[2]),
                        PolygonVertex::hard(corners[3]),
                    ])?;
                } else {
                    triangle(mesh, corners[0], corners[1], corners[2])?;
                    triangle(mesh, corners[0], corners[2], corners[3])?;
                }
            }
        }
    }

    Ok(())
}

fn triangle(mesh: &mut PolygonMesh, a: u32, b: u32, c: u32) -> Result<(), SweepError> {
    mesh.add_polygon(&[
        PolygonVertex::hard(a),
        PolygonVertex::hard(b),
        PolygonVertex::hard(c),
    ])?;
    Ok(())
}

fn quad_is_allowed(mesh: &PolygonMesh, corners: &[u32; 4], strategy: FaceStrategy) -> bool {
    match strategy {
        FaceStrategy::Quads => true,
        FaceStrategy::Triangles => false,
        FaceStrategy::Auto => {
            let pts = mesh.points();
            let p0 = pts[corners[0] as usize];
            let e1 = pts[corners[1] as usize] - p0;
            let e2 = pts[corners[2] as usize] - p0;
            let e3 = pts[corners[3] as usize] - p0;
            let volume = e1.cross(&e2).dot(&e3);
            let scale = e1.norm().max(e2.norm()).max(e3.norm());
            volume.abs() <= Tolerance::DEFAULT.linear * scale * scale
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parashape_math::Vec3;

    fn z_axis() -> Axis {
        Axis::z()
    }

    #[test]
    fn test_revolve_two_point_profile() {
        // Profile [(1,0,0),(2,0,0)], 4 segments: 8 vertices, 4 quads,
        // corners at 90-degree increments.
        let profile = [Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)];
        let mesh = revolve(&profile, &z_axis(), 4, FaceStrategy::Auto).unwrap();
        assert_eq!(mesh.num_points(), 8);
        assert_eq!(mesh.num_polygons(), 4);
        assert_eq!(mesh.count_ngons(4), 4);

        // Inner ring images of (1,0,0) under quarter turns.
        let expected = [
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(0.0, -1.0, 0.0),
        ];
        for (got, want) in mesh.points()[..4].iter().zip(expected.iter()) {
            assert!((got - want).norm() < 1e-12, "got {got:?}, want {want:?}");
        }
    }

    #[test]
    fn test_revolve_counts_without_poles() {
        let profile = [
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 1.0),
            Point3::new(3.0, 0.0, 2.0),
        ];
        let segments = 12;
        let mesh = revolve(&profile, &z_axis(), segments, FaceStrategy::Auto).unwrap();
        assert_eq!(mesh.num_points(), profile.len() * segments as usize);
        assert_eq!(
            mesh.num_polygons(),
            (profile.len() - 1) * segments as usize
        );
    }

    #[test]
    fn test_revolve_pole_becomes_fan() {
        // Dome cap case: one endpoint on the axis contributes one vertex
        // and a fan of `segments` triangles, never quads.
        let profile = [Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 0.0, 1.0)];
        let mesh = revolve(&profile, &z_axis(), 8, FaceStrategy::Auto).unwrap();
        assert_eq!(mesh.num_points(), 8 + 1);
        assert_eq!(mesh.num_polygons(), 8);
        assert_eq!(mesh.count_ngons(3), 8);
        assert_eq!(mesh.count_ngons(4), 0);
    }

    #[test]
    fn test_revolve_both_poles() {
        // Sphere-like: both endpoints on the axis, one interior ring.
        let profile = [
            Point3::new(0.0, 0.0, -1.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ];
        let mesh = revolve(&profile, &z_axis(), 6, FaceStrategy::Auto).unwrap();
        assert_eq!(mesh.num_points(), 6 + 2);
        // Two fans of 6 triangles.
        assert_eq!(mesh.num_polygons(), 12);
        assert_eq!(mesh.count_ngons(3), 12);
    }

    #[test]
    fn test_revolve_axis_only_profile_emits_nothing() {
        let profile = [Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 1.0)];
        let mesh = revolve(&profile, &z_axis(), 8, FaceStrategy::Auto).unwrap();
        assert_eq!(mesh.num_points(), 2);
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_revolve_quads_have_distinct_corners() {
        let profile = [
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, 2.0),
        ];
        let mesh = revolve(&profile, &z_axis(), 16, FaceStrategy::Auto).unwrap();
        for poly in mesh.polygons() {
            if poly.len() == 4 {
                for a in 0..4 {
                    for b in (a + 1)..4 {
                        assert_ne!(poly[a].point, poly[b].point, "degenerate quad");
                    }
                }
            }
        }
    }

    #[test]
    fn test_revolve_auto_splits_warped_band() {
        // A profile point off the axis plane makes the band corners
        // non-coplanar, so Auto falls back to triangle pairs.
        let profile = [Point3::new(1.0, 0.5, 0.0), Point3::new(2.0, 0.0, 1.0)];
        let mesh = revolve(&profile, &z_axis(), 8, FaceStrategy::Auto).unwrap();
        assert_eq!(mesh.count_ngons(4), 0);
        assert_eq!(mesh.count_ngons(3), 16);
    }

    #[test]
    fn test_revolve_quads_strategy_keeps_quads() {
        let profile = [Point3::new(1.0, 0.5, 0.0), Point3::new(2.0, 0.0, 1.0)];
        let mesh = revolve(&profile, &z_axis(), 8, FaceStrategy::Quads).unwrap();
        assert_eq!(mesh.count_ngons(4), 8);
    }

    #[test]
    fn test_revolve_validation() {
        let axis = z_axis();
        let one = [Point3::new(1.0, 0.0, 0.0)];
        assert!(matches!(
            revolve(&one, &axis, 4, FaceStrategy::Auto),
            Err(SweepError::ProfileTooShort(1))
        ));

        let two = [Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)];
        assert!(matches!(
            revolve(&two, &axis, 0, FaceStrategy::Auto),
            Err(SweepError::TooFewSegments { required: 1, got: 0 })
        ));
    }

    #[test]
    fn test_revolve_into_preserves_mesh_on_error() {
        let mut mesh = PolygonMesh::new();
        mesh.add_point(Point3::origin());
        let one = [Point3::new(1.0, 0.0, 0.0)];
        let result = revolve_into(&mut mesh, &one, &z_axis(), 4, FaceStrategy::Auto);
        assert!(result.is_err());
        assert_eq!(mesh.num_points(), 1);
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_revolve_offset_axis() {
        // Revolving around a line through (1,0,0) keeps distances to that
        // line constant.
        let axis = Axis::new(Point3::new(1.0, 0.0, 0.0), Vec3::z()).unwrap();
        let profile = [Point3::new(2.0, 0.0, 0.0), Point3::new(2.0, 0.0, 1.0)];
        let mesh = revolve(&profile, &axis, 8, FaceStrategy::Auto).unwrap();
        for p in mesh.points() {
            assert!((axis.distance_to(p) - 1.0).abs() < 1e-9);
        }
    }
}
