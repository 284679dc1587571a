#![warn(missing_docs)]

//! parashape — parametric primitive shapes in Rust
//!
//! The geometric core of a "3D shapes" modeling tool: a revolution /
//! extrusion / helix sweep kernel, a catalog of validated parametric
//! shapes, and Wavefront OBJ export.
//!
//! # Example
//!
//! ```rust,no_run
//! use parashape::{export, ShapeKind, ShapeSpec};
//!
//! let spec = ShapeSpec::defaults(ShapeKind::Torus, 25.4);
//! let geometry = spec.generate().unwrap();
//! export::write_obj("torus.obj", &geometry).unwrap();
//! ```

use thiserror::Error;

pub mod export;

pub use parashape_math::{Axis, Dir3, Point3, Tolerance, Transform, Vec3};
pub use parashape_mesh::{MeshError, Polygon, PolygonMesh, PolygonVertex};
pub use parashape_shapes::{
    SessionDefaults, ShapeError, ShapeGeometry, ShapeKind, ShapeSpec, UnitSystem,
};
pub use parashape_sweep::{
    extrude_with_twist, revolve, revolve_into, FaceStrategy, Handedness, HelicalRamp,
    HelicalRampWithSides, HelixPath, SweepError,
};

/// Errors returned by export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// An I/O error occurred while writing.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The geometry has no polygons or polyline points to write.
    #[error("empty geometry")]
    EmptyGeometry,
}
