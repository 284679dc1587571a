#![warn(missing_docs)]

//! Sweep generators for the parashape geometry kernel.
//!
//! Provides the three procedural-mesh operations the parametric shapes are
//! built from:
//!
//! - [`revolve`]: sweep a point profile a full turn around an axis,
//!   collapsing on-axis points to shared pole vertices.
//! - [`extrude_with_twist`]: sweep a profile along a screw motion
//!   (translation plus rotation about the travel direction).
//! - [`HelixPath`], [`HelicalRamp`], [`HelicalRampWithSides`]: helical
//!   polylines and rail meshes with the joint rotations/pitch handedness
//!   rule.
//!
//! All generators are pure: they validate their inputs up front, then
//! either return a finished [`parashape_mesh::PolygonMesh`] (or point list)
//! or an error with no partial mesh.
//!
//! # Example
//!
//! ```
//! use parashape_math::{Axis, Point3};
//! use parashape_sweep::{revolve, FaceStrategy};
//!
//! // Revolve a vertical segment at radius 1 into a cylinder wall.
//! let profile = [Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 0.0, 2.0)];
//! let mesh = revolve(&profile, &Axis::z(), 16, FaceStrategy::default()).unwrap();
//! assert_eq!(mesh.num_points(), 32);
//! assert_eq!(mesh.num_polygons(), 16);
//! ```

mod extrude;
mod helix;
mod ramp;
mod revolve;

pub use extrude::extrude_with_twist;
pub use helix::{Handedness, HelixPath};
pub use ramp::{HelicalRamp, HelicalRampWithSides};
pub use revolve::{revolve, revolve_into, FaceStrategy};

use parashape_mesh::MeshError;
use thiserror::Error;

/// Errors from the sweep generators.
#[derive(Debug, Clone, Error)]
pub enum SweepError {
    /// The profile has fewer than two points.
    #[error("profile needs at least 2 points, got {0}")]
    ProfileTooShort(usize),

    /// Too few segments for the requested operation.
    #[error("at least {required} segments required, got {got}")]
    TooFewSegments {
        /// Minimum segment count for the operation.
        required: u32,
        /// Segment count that was passed.
        got: u32,
    },

    /// Extrusion direction has zero length.
    #[error("extrusion direction is zero")]
    ZeroDirection,

    /// The rotation count yields less than one helix segment.
    #[error("rotation count {0} too small: less than one segment would be drawn")]
    TooFewRotations(f64),

    /// A ramp width is negative.
    #[error("ramp width must not be negative, got {0}")]
    NegativeRampWidth(f64),

    /// Side slope outside the open interval (0, 90) degrees.
    #[error("side slope must be strictly between 0 and 90 degrees, got {0} radians")]
    SideSlopeOutOfRange(f64),

    /// A generated polygon was rejected by the mesh buffer.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}
