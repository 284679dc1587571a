#![warn(missing_docs)]

//! Parametric shape catalog for the parashape geometry kernel.
//!
//! Each shape is described by a [`ShapeSpec`]: a serializable parameter
//! set that can be validated ([`ShapeSpec::validate`]) and turned into
//! geometry ([`ShapeSpec::generate`]) via the sweep kernel. Defaults are
//! seeded from a [`UnitSystem`] and remembered per kind by
//! [`SessionDefaults`].
//!
//! # Example
//!
//! ```
//! use parashape_shapes::{ShapeKind, ShapeSpec};
//!
//! let spec = ShapeSpec::defaults(ShapeKind::Cylinder, 25.4);
//! let geometry = spec.generate().unwrap();
//! let mesh = geometry.mesh().unwrap();
//! assert_eq!(mesh.num_points(), 32);
//! ```

mod generate;
mod profile;
mod session;
mod spec;

pub use generate::ShapeGeometry;
pub use session::{SessionDefaults, UnitSystem};
pub use spec::{ShapeKind, ShapeSpec};

use parashape_mesh::MeshError;
use parashape_sweep::SweepError;
use thiserror::Error;

/// Errors from shape validation and generation.
#[derive(Debug, Clone, Error)]
pub enum ShapeError {
    /// A length parameter that must be positive was zero or negative.
    #[error("{name} must be positive, got {value}")]
    NonPositiveDimension {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A length parameter that must not be negative was negative.
    #[error("{name} must not be negative, got {value}")]
    NegativeDimension {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A polygonal cross-section needs at least three sides.
    #[error("at least {required} sides required, got {got}")]
    TooFewSides {
        /// Minimum number of sides.
        required: u32,
        /// Number of sides that was passed.
        got: u32,
    },

    /// A circular subdivision has too few segments.
    #[error("at least {required} segments required, got {got}")]
    TooFewSegments {
        /// Minimum segment count.
        required: u32,
        /// Segment count that was passed.
        got: u32,
    },

    /// A tube wall at least as thick as its radius leaves no bore.
    #[error("wall thickness {thickness} must be less than the radius {radius}")]
    WallTooThick {
        /// Wall thickness.
        thickness: f64,
        /// Outer radius.
        radius: f64,
    },

    /// A torus tube radius above half the outer radius self-intersects.
    #[error(
        "torus small radius {small_radius} must be at most half the outer radius {outer_radius}"
    )]
    SmallRadiusTooLarge {
        /// Tube cross-section radius.
        small_radius: f64,
        /// Overall outer radius.
        outer_radius: f64,
    },

    /// Side slope outside the open interval (0, 90) degrees.
    #[error("side slope must be strictly between 0 and 90 degrees, got {0}")]
    SlopeOutOfRange(f64),

    /// A shape kind name that is not in the catalog.
    #[error("unknown shape kind `{0}`")]
    UnknownKind(String),

    /// The sweep kernel rejected the derived parameters.
    #[error(transparent)]
    Sweep(#[from] SweepError),

    /// Mesh construction failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}
