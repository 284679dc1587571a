//! Helical ramp meshes built from paired helical rails.

use parashape_math::Point3;
use parashape_mesh::{PolygonMesh, PolygonVertex};

use crate::{Handedness, HelixPath, SweepError};

/// A helical ramp: a deck spanning an inner and an outer helical rail.
///
/// The inner rail follows a [`HelixPath`]; the outer rail is offset
/// radially by the ramp width, which is interpolated from `start_width`
/// to `end_width` over the sweep. Each segment of the deck is meshed as
/// two triangles whose winding follows the sweep's [`Handedness`], so
/// face normals stay consistent for either winding direction.
#[derive(Debug, Clone, PartialEq)]
pub struct HelicalRamp {
    /// Inner-rail radius at the start of the sweep.
    pub start_radius: f64,
    /// Inner-rail radius at the end of the sweep.
    pub end_radius: f64,
    /// Deck width at the start of the sweep.
    pub start_width: f64,
    /// Deck width at the end of the sweep.
    pub end_width: f64,
    /// Axial rise per full rotation (signed).
    pub pitch: f64,
    /// Number of segments per full rotation.
    pub segments_per_rotation: u32,
    /// Number of rotations to sweep (signed, fractional allowed).
    pub rotations: f64,
    /// Initial azimuth in radians.
    pub start_angle: f64,
}

impl HelicalRamp {
    fn path(&self) -> HelixPath {
        HelixPath {
            start_radius: self.start_radius,
            end_radius: self.end_radius,
            pitch: self.pitch,
            segments_per_rotation: self.segments_per_rotation,
            rotations: self.rotations,
            start_angle: self.start_angle,
        }
    }

    /// Winding direction of the sweep.
    pub fn handedness(&self) -> Handedness {
        Handedness::of(self.rotations, self.pitch)
    }

    fn validate(&self) -> Result<(), SweepError> {
        self.path().validate(3)?;
        if self.start_width < 0.0 {
            return Err(SweepError::NegativeRampWidth(self.start_width));
        }
        if self.end_width < 0.0 {
            return Err(SweepError::NegativeRampWidth(self.end_width));
        }
        Ok(())
    }

    fn width_at(&self, i: u32) -> f64 {
        let total = self.path().total_segments().max(1) as f64;
        self.start_width + i as f64 * (self.end_width - self.start_width) / total
    }

    /// Build the deck mesh.
    ///
    /// # Errors
    ///
    /// - [`SweepError::TooFewSegments`] if `segments_per_rotation < 3`.
    /// - [`SweepError::TooFewRotations`] if the sweep would produce no
    ///   segments.
    /// - [`SweepError::NegativeRampWidth`] if either width is negative.
    pub fn mesh(&self) -> Result<PolygonMesh, SweepError> {
        self.validate()?;

        let path = self.path();
        let total = path.total_segments();
        let right_hand = self.handedness().is_right();

        let mut mesh =
            PolygonMesh::with_capacity(2 * (total as usize + 1), 2 * total as usize);

        for i in 1..=total {
            let inner_prev = path.point_at(i - 1);
            let outer_prev = path.point_at_offset(i - 1, self.width_at(i - 1));
            let inner_next = path.point_at(i);
            let outer_next = path.point_at_offset(i, self.width_at(i));

            if right_hand {
                add_triangle(&mut mesh, inner_prev, outer_prev, inner_next)?;
                add_triangle(&mut mesh, outer_prev, outer_next, inner_next)?;
            } else {
                add_triangle(&mut mesh, outer_prev, inner_prev, inner_next)?;
                add_triangle(&mut mesh, outer_next, outer_prev, inner_next)?;
            }
        }

        Ok(mesh)
    }
}

/// A helical ramp with sloped side walls dropping to the ground plane.
///
/// In addition to the deck rails, two ground-level rails are derived by
/// offsetting the inner rail inward and the outer rail outward by
/// `|elevation| * cot(side_slope)`, so the walls lean at `side_slope`
/// from the horizontal. Each segment contributes the two deck triangles
/// plus two triangles per side wall.
#[derive(Debug, Clone, PartialEq)]
pub struct HelicalRampWithSides {
    /// The deck ramp.
    pub ramp: HelicalRamp,
    /// Side-wall slope from the horizontal, radians, strictly inside
    /// (0, pi/2).
    pub side_slope: f64,
}

impl HelicalRampWithSides {
    fn validate(&self) -> Result<(), SweepError> {
        self.ramp.validate()?;
        if self.side_slope <= 0.0 || self.side_slope >= std::f64::consts::FRAC_PI_2 {
            return Err(SweepError::SideSlopeOutOfRange(self.side_slope));
        }
        Ok(())
    }

    /// Build the deck-plus-sides mesh.
    ///
    /// # Errors
    ///
    /// Everything [`HelicalRamp::mesh`] rejects, plus
    /// [`SweepError::SideSlopeOutOfRange`] for slopes at or beyond 0 or 90
    /// degrees (where the cotangent offset degenerates).
    pub fn mesh(&self) -> Result<PolygonMesh, SweepError> {
        self.validate()?;

        let ramp = &self.ramp;
        let path = ramp.path();
        let total = path.total_segments();
        let right_hand = ramp.handedness().is_right();
        let inv_tan_slope = 1.0 / self.side_slope.tan();

        let mut mesh =
            PolygonMesh::with_capacity(4 * (total as usize + 1), 6 * total as usize);

        // Ground-level rail points under segment index i. The elevation is
        // taken as an absolute value so descending ramps flare the same way.
        let base_inner = |i: u32| -> Point3 {
            let z = path.point_at(i).z;
            let p = path.point_at_offset(i, -z.abs() * inv_tan_slope);
            Point3::new(p.x, p.y, 0.0)
        };
        let base_outer = |i: u32| -> Point3 {
            let z = path.point_at(i).z;
            let p = path.point_at_offset(i, ramp.width_at(i) + z.abs() * inv_tan_slope);
            Point3::new(p.x, p.y, 0.0)
        };

        for i in 1..=total {
            let inner_prev = path.point_at(i - 1);
            let outer_prev = path.point_at_offset(i - 1, ramp.width_at(i - 1));
            let inner_next = path.point_at(i);
            let outer_next = path.point_at_offset(i, ramp.width_at(i));
            let ground_inner_prev = base_inner(i - 1);
            let ground_outer_prev = base_outer(i - 1);
            let ground_inner_next = base_inner(i);
            let ground_outer_next = base_outer(i);

            if right_hand {
                // Deck.
                add_triangle(&mut mesh, inner_prev, outer_prev, inner_next)?;
                add_triangle(&mut mesh, outer_prev, outer_next, inner_next)?;
                // Inner wall.
                add_triangle(&mut mesh, inner_prev, inner_next, ground_inner_prev)?;
                add_triangle(&mut mesh, inner_next, ground_inner_next, ground_inner_prev)?;
                // Outer wall.
                add_triangle(&mut mesh, outer_prev, ground_outer_next, outer_next)?;
                add_triangle(&mut mesh, outer_prev, ground_outer_prev, ground_outer_next)?;
            } else {
                add_triangle(&mut mesh, outer_prev, inner_prev, inner_next)?;
                add_triangle(&mut mesh, outer_next, outer_prev, inner_next)?;
                add_triangle(&mut mesh, inner_prev, ground_inner_prev, inner_next)?;
                add_triangle(&mut mesh, inner_next, ground_inner_prev, ground_inner_next)?;
                add_triangle(&mut mesh, outer_prev, outer_next, ground_outer_next)?;
                add_triangle(&mut mesh, outer_prev, ground_outer_next, ground_outer_prev)?;
            }
        }

        Ok(mesh)
    }
}

/// Intern three positions and add a hard-edged triangle, skipping the
/// polygon when two positions collapse to the same vertex (the start of a
/// ramp sits on the ground plane, so its first wall triangles degenerate).
fn add_triangle(
    mesh: &mut PolygonMesh,
    a: Point3,
    b: Point3,
    c: Point3,
) -> Result<(), SweepError> {
    let ia = mesh.add_point(a);
    let ib = mesh.add_point(b);
    let ic = mesh.add_point(c);
    if ia == ib || ib == ic || ia == ic {
        return Ok(());
    }
    mesh.add_polygon(&[
        PolygonVertex::hard(ia),
        PolygonVertex::hard(ib),
        PolygonVertex::hard(ic),
    ])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parashape_math::Vec3;

    fn unit_ramp() -> HelicalRamp {
        HelicalRamp {
            start_radius: 2.0,
            end_radius: 2.0,
            start_width: 1.0,
            end_width: 1.0,
            pitch: 1.0,
            segments_per_rotation: 8,
            rotations: 1.0,
            start_angle: 0.0,
        }
    }

    fn triangle_normal(mesh: &PolygonMesh, poly: usize) -> Vec3 {
        let corners = &mesh.polygons()[poly];
        let pts = mesh.points();
        let p0 = pts[corners[0].point as usize];
        let p1 = pts[corners[1].point as usize];
        let p2 = pts[corners[2].point as usize];
        (p1 - p0).cross(&(p2 - p0))
    }

    #[test]
    fn test_ramp_counts() {
        let mesh = unit_ramp().mesh().unwrap();
        // 8 segments: 9 rail points per side, 2 triangles per segment.
        assert_eq!(mesh.num_points(), 18);
        assert_eq!(mesh.num_polygons(), 16);
        assert_eq!(mesh.count_ngons(3), 16);
    }

    #[test]
    fn test_ramp_deck_normals_up_for_both_handednesses() {
        let right = unit_ramp().mesh().unwrap();
        assert!(triangle_normal(&right, 0).z > 0.0);

        let left = HelicalRamp {
            rotations: -1.0,
            ..unit_ramp()
        }
        .mesh()
        .unwrap();
        assert!(triangle_normal(&left, 0).z > 0.0);
    }

    #[test]
    fn test_ramp_winding_branch() {
        // Right-handed: first interned point is the inner rail start.
        let right = unit_ramp().mesh().unwrap();
        let r0 = right.points()[0];
        assert!(((r0.x * r0.x + r0.y * r0.y).sqrt() - 2.0).abs() < 1e-12);

        // Left-handed: the winding starts from the outer rail.
        let left = HelicalRamp {
            rotations: -1.0,
            ..unit_ramp()
        }
        .mesh()
        .unwrap();
        let l0 = left.points()[0];
        assert!(((l0.x * l0.x + l0.y * l0.y).sqrt() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_ramp_width_interpolation() {
        let ramp = HelicalRamp {
            start_width: 1.0,
            end_width: 3.0,
            ..unit_ramp()
        };
        let mesh = ramp.mesh().unwrap();
        // The outermost point sits at end radius + end width.
        let max_r = mesh
            .points()
            .iter()
            .map(|p| (p.x * p.x + p.y * p.y).sqrt())
            .fold(0.0, f64::max);
        assert!((max_r - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_ramp_validation() {
        let bad_width = HelicalRamp {
            start_width: -1.0,
            ..unit_ramp()
        };
        assert!(matches!(
            bad_width.mesh(),
            Err(SweepError::NegativeRampWidth(_))
        ));

        let bad_segments = HelicalRamp {
            segments_per_rotation: 2,
            ..unit_ramp()
        };
        assert!(matches!(
            bad_segments.mesh(),
            Err(SweepError::TooFewSegments { required: 3, got: 2 })
        ));

        let bad_rotations = HelicalRamp {
            rotations: 0.01,
            ..unit_ramp()
        };
        assert!(matches!(
            bad_rotations.mesh(),
            Err(SweepError::TooFewRotations(_))
        ));
    }

    #[test]
    fn test_ramp_with_sides_counts() {
        let with_sides = HelicalRampWithSides {
            ramp: unit_ramp(),
            side_slope: std::f64::consts::FRAC_PI_4,
        };
        let mesh = with_sides.mesh().unwrap();
        let total = 8usize;
        // The first segment's trailing wall triangles collapse onto the
        // ground plane and are skipped.
        assert_eq!(mesh.num_polygons(), 6 * total - 2);
        // Rail and ground points, with the two start ground points shared
        // with the rail starts.
        assert_eq!(mesh.num_points(), 4 * (total + 1) - 2);
    }

    #[test]
    fn test_ramp_with_sides_ground_rails_at_zero() {
        let with_sides = HelicalRampWithSides {
            ramp: unit_ramp(),
            side_slope: std::f64::consts::FRAC_PI_4,
        };
        let mesh = with_sides.mesh().unwrap();
        let grounded = mesh.points().iter().filter(|p| p.z.abs() < 1e-12).count();
        // Both ground rails; the deck start points coincide with them.
        assert_eq!(grounded, 2 * 9);
    }

    #[test]
    fn test_ramp_with_sides_flare() {
        // 45-degree slope: ground rails sit |z| further out/in than the
        // deck rails.
        let with_sides = HelicalRampWithSides {
            ramp: unit_ramp(),
            side_slope: std::f64::consts::FRAC_PI_4,
        };
        let mesh = with_sides.mesh().unwrap();
        // Deck top ends at z = 1 with inner radius 2; the matching ground
        // point sits at radius 1.
        let min_r = mesh
            .points()
            .iter()
            .map(|p| (p.x * p.x + p.y * p.y).sqrt())
            .fold(f64::MAX, f64::min);
        assert!((min_r - 1.0).abs() < 1e-9);
        let max_r = mesh
            .points()
            .iter()
            .map(|p| (p.x * p.x + p.y * p.y).sqrt())
            .fold(0.0, f64::max);
        assert!((max_r - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_ramp_with_sides_slope_bounds() {
        for slope in [0.0, -0.3, std::f64::consts::FRAC_PI_2, 2.0] {
            let with_sides = HelicalRampWithSides {
                ramp: unit_ramp(),
                side_slope: slope,
            };
            assert!(matches!(
                with_sides.mesh(),
                Err(SweepError::SideSlopeOutOfRange(_))
            ));
        }
    }
}
