//! Helical polyline generation.

use std::f64::consts::PI;

use parashape_math::Point3;

use crate::SweepError;

/// Winding direction of a helix, viewed from the +Z axis.
///
/// Determined jointly by the signs of the rotation count and the pitch:
/// matching signs wind right-handed (counter-clockwise while rising),
/// opposing signs wind left-handed. A zero pitch follows the sign of the
/// rotation count. Ramp meshing also branches on this to keep face
/// winding consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handedness {
    /// Positive angular steps.
    Right,
    /// Negative angular steps.
    Left,
}

impl Handedness {
    /// Handedness for a given rotation count and pitch.
    pub fn of(rotations: f64, pitch: f64) -> Self {
        if (rotations > 0.0 && pitch >= 0.0) || (rotations < 0.0 && pitch <= 0.0) {
            Handedness::Right
        } else {
            Handedness::Left
        }
    }

    /// Whether this is the right-handed winding.
    pub fn is_right(self) -> bool {
        self == Handedness::Right
    }
}

/// A helical curve around the Z axis.
///
/// Radius is interpolated linearly from `start_radius` to `end_radius`
/// over the sweep; elevation rises by `pitch` per full rotation (negative
/// pitch descends). `rotations` need not be an integer, and its sign
/// combines with the pitch sign into the [`Handedness`] of the sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct HelixPath {
    /// Radius at the start of the sweep.
    pub start_radius: f64,
    /// Radius at the end of the sweep.
    pub end_radius: f64,
    /// Axial rise per full rotation (signed).
    pub pitch: f64,
    /// Number of segments per full rotation.
    pub segments_per_rotation: u32,
    /// Number of rotations to sweep (signed, fractional allowed).
    pub rotations: f64,
    /// Initial azimuth in radians, from the +X axis.
    pub start_angle: f64,
}

impl HelixPath {
    /// Winding direction of this helix.
    pub fn handedness(&self) -> Handedness {
        Handedness::of(self.rotations, self.pitch)
    }

    /// Number of segments over the whole sweep:
    /// `round(|segments_per_rotation * rotations|)`.
    pub fn total_segments(&self) -> u32 {
        (self.segments_per_rotation as f64 * self.rotations).abs().round() as u32
    }

    /// Signed azimuth increment per segment.
    pub fn angle_step(&self) -> f64 {
        let step = 2.0 * PI / self.segments_per_rotation as f64;
        match self.handedness() {
            Handedness::Right => step,
            Handedness::Left => -step,
        }
    }

    /// The point at segment index `i` (`0 ..= total_segments`), with the
    /// radius offset by `radial_offset` (used by ramps for their outer
    /// rail).
    pub(crate) fn point_at_offset(&self, i: u32, radial_offset: f64) -> Point3 {
        let total = self.total_segments().max(1) as f64;
        let t = i as f64;
        let radius =
            self.start_radius + t * (self.end_radius - self.start_radius) / total + radial_offset;
        let azimuth = self.start_angle + t * self.angle_step();
        let z = t * self.pitch / self.segments_per_rotation as f64;
        Point3::new(radius * azimuth.cos(), radius * azimuth.sin(), z)
    }

    /// The point at segment index `i`.
    pub fn point_at(&self, i: u32) -> Point3 {
        self.point_at_offset(i, 0.0)
    }

    pub(crate) fn validate(&self, min_segments_per_rotation: u32) -> Result<(), SweepError> {
        if self.segments_per_rotation < min_segments_per_rotation {
            return Err(SweepError::TooFewSegments {
                required: min_segments_per_rotation,
                got: self.segments_per_rotation,
            });
        }
        if self.total_segments() < 1 {
            return Err(SweepError::TooFewRotations(self.rotations));
        }
        Ok(())
    }

    /// The full polyline, `total_segments + 1` points including the start.
    ///
    /// # Errors
    ///
    /// - [`SweepError::TooFewSegments`] if `segments_per_rotation < 2`.
    /// - [`SweepError::TooFewRotations`] if the sweep would produce no
    ///   segments.
    pub fn points(&self) -> Result<Vec<Point3>, SweepError> {
        self.validate(2)?;
        Ok((0..=self.total_segments()).map(|i| self.point_at(i)).collect())
    }
}
