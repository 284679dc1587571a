//! Shape specifications: the serializable parameter sets for every shape
//! kind, their validation rules, and unit-aware defaults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use parashape_sweep::{Handedness, HelixPath, SweepError};

use crate::generate::{self, ShapeGeometry};
use crate::ShapeError;

/// The catalog of shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Axis-aligned box.
    Box,
    /// Circular cylinder with caps.
    Cylinder,
    /// Circular cone with a base cap.
    Cone,
    /// Torus around the Z axis.
    Torus,
    /// Hollow cylinder (pipe).
    Tube,
    /// Regular prism with caps.
    Prism,
    /// Regular pyramid with a base cap.
    Pyramid,
    /// Open hemispherical dome.
    Dome,
    /// Full sphere.
    Sphere,
    /// Helical polyline.
    Helix,
    /// Helical ramp surface.
    HelicalRamp,
    /// Helical ramp with sloped side walls.
    HelicalRampWithSides,
}

impl ShapeKind {
    /// Every kind, in catalog order.
    pub const ALL: [ShapeKind; 12] = [
        ShapeKind::Box,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Torus,
        ShapeKind::Tube,
        ShapeKind::Prism,
        ShapeKind::Pyramid,
        ShapeKind::Dome,
        ShapeKind::Sphere,
        ShapeKind::Helix,
        ShapeKind::HelicalRamp,
        ShapeKind::HelicalRampWithSides,
    ];

    /// The kind's stable name, as used in serialized specs.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Box => "box",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Cone => "cone",
            ShapeKind::Torus => "torus",
            ShapeKind::Tube => "tube",
            ShapeKind::Prism => "prism",
            ShapeKind::Pyramid => "pyramid",
            ShapeKind::Dome => "dome",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Helix => "helix",
            ShapeKind::HelicalRamp => "helical_ramp",
            ShapeKind::HelicalRampWithSides => "helical_ramp_with_sides",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| ShapeError::UnknownKind(s.to_string()))
    }
}

/// A fully parameterized shape, ready to validate and generate.
///
/// Lengths are in model units (conventionally millimeters); angles
/// (`start_angle`, `side_slope`) are in degrees, following the dialog
/// convention of the host shapes, and are converted to radians once at
/// the sweep boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeSpec {
    /// Axis-aligned box with one corner at the origin.
    Box {
        /// Extent along X.
        width: f64,
        /// Extent along Y.
        depth: f64,
        /// Extent along Z.
        height: f64,
    },
    /// Cylinder along Z with its base at the origin.
    Cylinder {
        /// Radius of the cylinder.
        radius: f64,
        /// Height of the cylinder.
        height: f64,
        /// Number of circular segments.
        num_segments: u32,
    },
    /// Cone along Z with its base at the origin.
    Cone {
        /// Base radius.
        radius: f64,
        /// Height to the apex.
        height: f64,
        /// Number of circular segments.
        num_segments: u32,
    },
    /// Torus around Z, centered at the origin.
    Torus {
        /// Radius of the tube cross-section.
        small_radius: f64,
        /// Overall outer radius; must be at least twice `small_radius`.
        outer_radius: f64,
        /// Segments around the tube cross-section.
        profile_segments: u32,
        /// Segments around the main sweep.
        sweep_segments: u32,
    },
    /// Hollow cylinder along Z with its base at the origin.
    Tube {
        /// Outer radius.
        radius: f64,
        /// Wall thickness; must be less than `radius`.
        thickness: f64,
        /// Height of the tube.
        height: f64,
        /// Number of circular segments.
        num_segments: u32,
    },
    /// Regular prism along Z with its base at the origin.
    Prism {
        /// Circumradius of the polygonal cross-section.
        radius: f64,
        /// Height of the prism.
        height: f64,
        /// Number of sides, at least 3.
        num_sides: u32,
    },
    /// Regular pyramid along Z with its base at the origin.
    Pyramid {
        /// Circumradius of the polygonal base.
        radius: f64,
        /// Height to the apex.
        height: f64,
        /// Number of sides, at least 3.
        num_sides: u32,
    },
    /// Open dome (hemisphere) with its equator at the origin.
    Dome {
        /// Radius of the hemisphere.
        radius: f64,
        /// Arc segments per quarter circle.
        segments_per_quarter: u32,
    },
    /// Sphere centered at the origin.
    Sphere {
        /// Radius of the sphere.
        radius: f64,
        /// Arc segments per quarter circle.
        segments_per_quarter: u32,
    },
    /// Helical polyline around Z starting at z = 0.
    Helix {
        /// Radius at the start of the sweep.
        start_radius: f64,
        /// Radius at the end of the sweep.
        end_radius: f64,
        /// Rise per full rotation (signed).
        pitch: f64,
        /// Number of rotations (signed, fractional allowed).
        rotations: f64,
        /// Segments per full rotation, at least 2.
        segments_per_rotation: u32,
        /// Starting azimuth in degrees.
        start_angle: f64,
    },
    /// Helical ramp surface around Z.
    HelicalRamp {
        /// Inner-rail radius at the start.
        start_radius: f64,
        /// Inner-rail radius at the end.
        end_radius: f64,
        /// Deck width at the start.
        start_width: f64,
        /// Deck width at the end.
        end_width: f64,
        /// Rise per full rotation (signed).
        pitch: f64,
        /// Number of rotations (signed, fractional allowed).
        rotations: f64,
        /// Segments per full rotation, at least 3.
        segments_per_rotation: u32,
        /// Starting azimuth in degrees.
        start_angle: f64,
    },
    /// Helical ramp with side walls sloping down to the ground plane.
    HelicalRampWithSides {
        /// Inner-rail radius at the start.
        start_radius: f64,
        /// Inner-rail radius at the end.
        end_radius: f64,
        /// Deck width at the start.
        start_width: f64,
        /// Deck width at the end.
        end_width: f64,
        /// Rise per full rotation (signed).
        pitch: f64,
        /// Number of rotations (signed, fractional allowed).
        rotations: f64,
        /// Segments per full rotation, at least 3.
        segments_per_rotation: u32,
        /// Starting azimuth in degrees.
        start_angle: f64,
        /// Side-wall slope from the horizontal in degrees, strictly
        /// between 0 and 90.
        side_slope: f64,
    },
}

fn positive(name: &'static str, value: f64) -> Result<(), ShapeError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ShapeError::NonPositiveDimension { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ShapeError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ShapeError::NegativeDimension { name, value })
    }
}

fn min_segments(required: u32, got: u32) -> Result<(), ShapeError> {
    if got >= required {
        Ok(())
    } else {
        Err(ShapeError::TooFewSegments { required, got })
    }
}

fn helix_turns(segments_per_rotation: u32, rotations: f64) -> Result<(), ShapeError> {
    let total = (segments_per_rotation as f64 * rotations).abs().round();
    if total < 1.0 {
        return Err(SweepError::TooFewRotations(rotations).into());
    }
    Ok(())
}

impl ShapeSpec {
    /// The kind this spec parameterizes.
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeSpec::Box { .. } => ShapeKind::Box,
            ShapeSpec::Cylinder { .. } => ShapeKind::Cylinder,
            ShapeSpec::Cone { .. } => ShapeKind::Cone,
            ShapeSpec::Torus { .. } => ShapeKind::Torus,
            ShapeSpec::Tube { .. } => ShapeKind::Tube,
            ShapeSpec::Prism { .. } => ShapeKind::Prism,
            ShapeSpec::Pyramid { .. } => ShapeKind::Pyramid,
            ShapeSpec::Dome { .. } => ShapeKind::Dome,
            ShapeSpec::Sphere { .. } => ShapeKind::Sphere,
            ShapeSpec::Helix { .. } => ShapeKind::Helix,
            ShapeSpec::HelicalRamp { .. } => ShapeKind::HelicalRamp,
            ShapeSpec::HelicalRampWithSides { .. } => ShapeKind::HelicalRampWithSides,
        }
    }

    /// Factory defaults for `kind`, scaled by `unit_length` (one model
    /// unit in millimeters, from
    /// [`crate::UnitSystem::unit_length`]).
    pub fn defaults(kind: ShapeKind, unit_length: f64) -> ShapeSpec {
        let u = unit_length;
        match kind {
            ShapeKind::Box => ShapeSpec::Box {
                width: u,
                depth: u,
                height: u,
            },
            ShapeKind::Cylinder => ShapeSpec::Cylinder {
                radius: u,
                height: u,
                num_segments: 16,
            },
            ShapeKind::Cone => ShapeSpec::Cone {
                radius: u,
                height: u,
                num_segments: 16,
            },
            ShapeKind::Torus => ShapeSpec::Torus {
                small_radius: u / 4.0,
                outer_radius: u,
                profile_segments: 16,
                sweep_segments: 16,
            },
            ShapeKind::Tube => ShapeSpec::Tube {
                radius: u,
                thickness: u / 10.0,
                height: u,
                num_segments: 16,
            },
            ShapeKind::Prism => ShapeSpec::Prism {
                radius: u,
                height: u,
                num_sides: 6,
            },
            ShapeKind::Pyramid => ShapeSpec::Pyramid {
                radius: u,
                height: u,
                num_sides: 4,
            },
            ShapeKind::Dome => ShapeSpec::Dome {
                radius: u,
                segments_per_quarter: 4,
            },
            ShapeKind::Sphere => ShapeSpec::Sphere {
                radius: u,
                segments_per_quarter: 4,
            },
            ShapeKind::Helix => ShapeSpec::Helix {
                start_radius: u,
                end_radius: u,
                pitch: u,
                rotations: 1.0,
                segments_per_rotation: 16,
                start_angle: 0.0,
            },
            ShapeKind::HelicalRamp => ShapeSpec::HelicalRamp {
                start_radius: u,
                end_radius: u,
                start_width: u,
                end_width: u,
                pitch: u,
                rotations: 1.0,
                segments_per_rotation: 16,
                start_angle: 0.0,
            },
            ShapeKind::HelicalRampWithSides => ShapeSpec::HelicalRampWithSides {
                start_radius: u,
                end_radius: u,
                start_width: u,
                end_width: u,
                pitch: u,
                rotations: 1.0,
                segments_per_rotation: 16,
                start_angle: 0.0,
                side_slope: 45.0,
            },
        }
    }

    /// Check every parameter rule for this kind.
    ///
    /// Validation is complete before any geometry is built, so a spec that
    /// passes here will generate (numeric extremes aside).
    pub fn validate(&self) -> Result<(), ShapeError> {
        match *self {
            ShapeSpec::Box {
                width,
                depth,
                height,
            } => {
                positive("width", width)?;
                positive("depth", depth)?;
                positive("height", height)
            }
            ShapeSpec::Cylinder {
                radius,
                height,
                num_segments,
            }
            | ShapeSpec::Cone {
                radius,
                height,
                num_segments,
            } => {
                positive("radius", radius)?;
                positive("height", height)?;
                min_segments(3, num_segments)
            }
            ShapeSpec::Torus {
                small_radius,
                outer_radius,
                profile_segments,
                sweep_segments,
            } => {
                positive("small radius", small_radius)?;
                positive("outer radius", outer_radius)?;
                min_segments(3, profile_segments)?;
                min_segments(3, sweep_segments)?;
                if small_radius > outer_radius / 2.0 {
                    return Err(ShapeError::SmallRadiusTooLarge {
                        small_radius,
                        outer_radius,
                    });
                }
                Ok(())
            }
            ShapeSpec::Tube {
                radius,
                thickness,
                height,
                num_segments,
            } => {
                positive("radius", radius)?;
                positive("thickness", thickness)?;
                positive("height", height)?;
                min_segments(3, num_segments)?;
                if thickness >= radius {
                    return Err(ShapeError::WallTooThick { thickness, radius });
                }
                Ok(())
            }
            ShapeSpec::Prism {
                radius,
                height,
                num_sides,
            }
            | ShapeSpec::Pyramid {
                radius,
                height,
                num_sides,
            } => {
                positive("radius", radius)?;
                positive("height", height)?;
                if num_sides < 3 {
                    return Err(ShapeError::TooFewSides {
                        required: 3,
                        got: num_sides,
                    });
                }
                Ok(())
            }
            ShapeSpec::Dome {
                radius,
                segments_per_quarter,
            }
            | ShapeSpec::Sphere {
                radius,
                segments_per_quarter,
            } => {
                positive("radius", radius)?;
                min_segments(1, segments_per_quarter)
            }
            ShapeSpec::Helix {
                start_radius,
                end_radius,
                rotations,
                segments_per_rotation,
                ..
            } => {
                non_negative("start radius", start_radius)?;
                non_negative("end radius", end_radius)?;
                min_segments(2, segments_per_rotation)?;
                helix_turns(segments_per_rotation, rotations)
            }
            ShapeSpec::HelicalRamp {
                start_radius,
                end_radius,
                start_width,
                end_width,
                rotations,
                segments_per_rotation,
                ..
            } => {
                non_negative("start radius", start_radius)?;
                non_negative("end radius", end_radius)?;
                non_negative("start width", start_width)?;
                non_negative("end width", end_width)?;
                min_segments(3, segments_per_rotation)?;
                helix_turns(segments_per_rotation, rotations)
            }
            ShapeSpec::HelicalRampWithSides {
                start_radius,
                end_radius,
                start_width,
                end_width,
                rotations,
                segments_per_rotation,
                side_slope,
                ..
            } => {
                non_negative("start radius", start_radius)?;
                non_negative("end radius", end_radius)?;
                non_negative("start width", start_width)?;
                non_negative("end width", end_width)?;
                min_segments(3, segments_per_rotation)?;
                helix_turns(segments_per_rotation, rotations)?;
                if side_slope <= 0.0 || side_slope >= 90.0 {
                    return Err(ShapeError::SlopeOutOfRange(side_slope));
                }
                Ok(())
            }
        }
    }

    /// Winding direction, for the helical kinds.
    pub fn handedness(&self) -> Option<Handedness> {
        match *self {
            ShapeSpec::Helix {
                rotations, pitch, ..
            }
            | ShapeSpec::HelicalRamp {
                rotations, pitch, ..
            }
            | ShapeSpec::HelicalRampWithSides {
                rotations, pitch, ..
            } => Some(Handedness::of(rotations, pitch)),
            _ => None,
        }
    }

    /// Validate, then build the geometry for this spec.
    pub fn generate(&self) -> Result<ShapeGeometry, ShapeError> {
        self.validate()?;
        let geometry = match *self {
            ShapeSpec::Box {
                width,
                depth,
                height,
            } => ShapeGeometry::Mesh(generate::box_mesh(width, depth, height)?),
            ShapeSpec::Cylinder {
                radius,
                height,
                num_segments,
            } => ShapeGeometry::Mesh(generate::column_mesh(radius, height, num_segments, true)?),
            ShapeSpec::Prism {
                radius,
                height,
                num_sides,
            } => ShapeGeometry::Mesh(generate::column_mesh(radius, height, num_sides, false)?),
            ShapeSpec::Cone {
                radius,
                height,
                num_segments,
            } => ShapeGeometry::Mesh(generate::spire_mesh(radius, height, num_segments, true)?),
            ShapeSpec::Pyramid {
                radius,
                height,
                num_sides,
            } => ShapeGeometry::Mesh(generate::spire_mesh(radius, height, num_sides, false)?),
            ShapeSpec::Torus {
                small_radius,
                outer_radius,
                profile_segments,
                sweep_segments,
            } => ShapeGeometry::Mesh(generate::torus_mesh(
                small_radius,
                outer_radius,
                profile_segments,
                sweep_segments,
            )?),
            ShapeSpec::Tube {
                radius,
                thickness,
                height,
                num_segments,
            } => ShapeGeometry::Mesh(generate::tube_mesh(radius, thickness, height, num_segments)?),
            ShapeSpec::Dome {
                radius,
                segments_per_quarter,
            } => ShapeGeometry::Mesh(generate::dome_mesh(radius, segments_per_quarter)?),
            ShapeSpec::Sphere {
                radius,
                segments_per_quarter,
            } => ShapeGeometry::Mesh(generate::sphere_mesh(radius, segments_per_quarter)?),
            ShapeSpec::Helix {
                start_radius,
                end_radius,
                pitch,
                rotations,
                segments_per_rotation,
                start_angle,
            } => {
                let path = HelixPath {
                    start_radius,
                    end_radius,
                    pitch,
                    segments_per_rotation,
                    rotations,
                    start_angle: start_angle.to_radians(),
                };
                ShapeGeometry::Polyline(path.points().map_err(ShapeError::Sweep)?)
            }
            ShapeSpec::HelicalRamp {
                start_radius,
                end_radius,
                start_width,
                end_width,
                pitch,
                rotations,
                segments_per_rotation,
                start_angle,
            } => {
                let ramp = parashape_sweep::HelicalRamp {
                    start_radius,
                    end_radius,
                    start_width,
                    end_width,
                    pitch,
                    segments_per_rotation,
                    rotations,
                    start_angle: start_angle.to_radians(),
                };
                ShapeGeometry::Mesh(ramp.mesh().map_err(ShapeError::Sweep)?)
            }
            ShapeSpec::HelicalRampWithSides {
                start_radius,
                end_radius,
                start_width,
                end_width,
                pitch,
                rotations,
                segments_per_rotation,
                start_angle,
                side_slope,
            } => {
                let with_sides = parashape_sweep::HelicalRampWithSides {
                    ramp: parashape_sweep::HelicalRamp {
                        start_radius,
                        end_radius,
                        start_width,
                        end_width,
                        pitch,
                        segments_per_rotation,
                        rotations,
                        start_angle: start_angle.to_radians(),
                    },
                    side_slope: side_slope.to_radians(),
                };
                ShapeGeometry::Mesh(with_sides.mesh().map_err(ShapeError::Sweep)?)
            }
        };
        Ok(geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_name_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.name().parse::<ShapeKind>().unwrap(), kind);
        }
        assert!(matches!(
            "icosahedron".parse::<ShapeKind>(),
            Err(ShapeError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_defaults_validate_and_match_kind() {
        for kind in ShapeKind::ALL {
            let spec = ShapeSpec::defaults(kind, 25.4);
            assert_eq!(spec.kind(), kind);
            spec.validate().unwrap();
            spec.generate().unwrap();
        }
    }

    #[test]
    fn test_default_magnitudes() {
        let spec = ShapeSpec::defaults(ShapeKind::Torus, 100.0);
        assert_eq!(
            spec,
            ShapeSpec::Torus {
                small_radius: 25.0,
                outer_radius: 100.0,
                profile_segments: 16,
                sweep_segments: 16,
            }
        );
        let tube = ShapeSpec::defaults(ShapeKind::Tube, 100.0);
        if let ShapeSpec::Tube { thickness, .. } = tube {
            assert!((thickness - 10.0).abs() < 1e-12);
        } else {
            panic!("wrong kind");
        }
    }

    #[test]
    fn test_prism_rejects_two_sides() {
        let spec = ShapeSpec::Prism {
            radius: 1.0,
            height: 1.0,
            num_sides: 2,
        };
        assert!(matches!(
            spec.validate(),
            Err(ShapeError::TooFewSides { required: 3, got: 2 })
        ));
    }

    #[test]
    fn test_tube_rejects_thick_wall() {
        let spec = ShapeSpec::Tube {
            radius: 1.0,
            thickness: 1.0,
            height: 2.0,
            num_segments: 16,
        };
        assert!(matches!(
            spec.validate(),
            Err(ShapeError::WallTooThick { .. })
        ));
    }

    #[test]
    fn test_torus_rejects_fat_tube() {
        let spec = ShapeSpec::Torus {
            small_radius: 0.6,
            outer_radius: 1.0,
            profile_segments: 8,
            sweep_segments: 8,
        };
        assert!(matches!(
            spec.validate(),
            Err(ShapeError::SmallRadiusTooLarge { .. })
        ));
        // Exactly half (a horn torus) is allowed.
        let horn = ShapeSpec::Torus {
            small_radius: 0.5,
            outer_radius: 1.0,
            profile_segments: 8,
            sweep_segments: 8,
        };
        horn.validate().unwrap();
        horn.generate().unwrap();
    }

    #[test]
    fn test_negative_dimension_rejected() {
        let spec = ShapeSpec::Box {
            width: -1.0,
            depth: 1.0,
            height: 1.0,
        };
        assert!(matches!(
            spec.validate(),
            Err(ShapeError::NonPositiveDimension { name: "width", .. })
        ));
    }

    #[test]
    fn test_ramp_slope_bounds() {
        let mut spec = ShapeSpec::defaults(ShapeKind::HelicalRampWithSides, 10.0);
        if let ShapeSpec::HelicalRampWithSides { side_slope, .. } = &mut spec {
            *side_slope = 90.0;
        }
        assert!(matches!(
            spec.validate(),
            Err(ShapeError::SlopeOutOfRange(_))
        ));
    }

    #[test]
    fn test_helix_generates_polyline() {
        let spec = ShapeSpec::Helix {
            start_radius: 1.0,
            end_radius: 1.0,
            pitch: 1.0,
            rotations: 1.0,
            segments_per_rotation: 4,
            start_angle: 90.0,
        };
        let geometry = spec.generate().unwrap();
        let pts = geometry.polyline().unwrap();
        assert_eq!(pts.len(), 5);
        // Degree start angle puts the first point on +Y.
        assert!(pts[0].x.abs() < 1e-12);
        assert!((pts[0].y - 1.0).abs() < 1e-12);
        assert_eq!(spec.handedness(), Some(Handedness::Right));
    }

    #[test]
    fn test_helix_rejects_tiny_rotation() {
        let spec = ShapeSpec::Helix {
            start_radius: 1.0,
            end_radius: 1.0,
            pitch: 1.0,
            rotations: 0.01,
            segments_per_rotation: 16,
            start_angle: 0.0,
        };
        assert!(matches!(
            spec.validate(),
            Err(ShapeError::Sweep(SweepError::TooFewRotations(_)))
        ));
    }

    #[test]
    fn test_spec_json_round_trip() {
        let spec = ShapeSpec::Tube {
            radius: 50.0,
            thickness: 5.0,
            height: 100.0,
            num_segments: 24,
        };
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains("\"type\":\"tube\""));
        let back: ShapeSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
