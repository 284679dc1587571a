//! Model unit systems and per-session default parameters.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{ShapeKind, ShapeSpec};

/// The model's display unit system.
///
/// Shapes don't convert between units; the unit system only picks the
/// magnitude of "one sensible unit" that seeds default dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Imperial inches.
    #[default]
    Inches,
    /// Imperial feet.
    Feet,
    /// Metric millimeters.
    Millimeters,
    /// Metric centimeters.
    Centimeters,
    /// Metric meters.
    Meters,
}

impl UnitSystem {
    /// One default-seeding unit in model millimeters: 1 inch, 1 foot,
    /// 1 cm expressed as 10 mm, 10 cm, or 1 m.
    pub fn unit_length(self) -> f64 {
        match self {
            UnitSystem::Inches => 25.4,
            UnitSystem::Feet => 304.8,
            UnitSystem::Millimeters => 10.0,
            UnitSystem::Centimeters => 100.0,
            UnitSystem::Meters => 1000.0,
        }
    }
}

/// Remembered parameters for a modeling session.
///
/// Serves factory defaults (scaled to the session's unit system) until a
/// spec of that kind is [`remember`](SessionDefaults::remember)ed, then
/// serves the remembered spec. Serializable so a host can persist it
/// between sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionDefaults {
    unit_system: UnitSystem,
    last_used: HashMap<ShapeKind, ShapeSpec>,
}

impl SessionDefaults {
    /// A fresh session in the given unit system.
    pub fn new(unit_system: UnitSystem) -> Self {
        Self {
            unit_system,
            last_used: HashMap::new(),
        }
    }

    /// The session's unit system.
    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    /// The defaults to offer for `kind`: the last remembered spec of that
    /// kind, or the factory defaults scaled to the session's units.
    pub fn defaults_for(&self, kind: ShapeKind) -> ShapeSpec {
        self.last_used
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| ShapeSpec::defaults(kind, self.unit_system.unit_length()))
    }

    /// Record `spec` as the new default for its kind.
    pub fn remember(&mut self, spec: &ShapeSpec) {
        self.last_used.insert(spec.kind(), spec.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_lengths() {
        assert_eq!(UnitSystem::Inches.unit_length(), 25.4);
        assert_eq!(UnitSystem::Feet.unit_length(), 304.8);
        assert_eq!(UnitSystem::Millimeters.unit_length(), 10.0);
        assert_eq!(UnitSystem::Centimeters.unit_length(), 100.0);
        assert_eq!(UnitSystem::Meters.unit_length(), 1000.0);
    }

    #[test]
    fn test_session_recall() {
        let mut session = SessionDefaults::new(UnitSystem::Meters);
        // Before any input: factory defaults at one meter.
        let first = session.defaults_for(ShapeKind::Cylinder);
        assert_eq!(
            first,
            ShapeSpec::Cylinder {
                radius: 1000.0,
                height: 1000.0,
                num_segments: 16,
            }
        );

        let custom = ShapeSpec::Cylinder {
            radius: 250.0,
            height: 80.0,
            num_segments: 48,
        };
        session.remember(&custom);
        assert_eq!(session.defaults_for(ShapeKind::Cylinder), custom);
        // Other kinds are unaffected.
        assert_eq!(
            session.defaults_for(ShapeKind::Pyramid),
            ShapeSpec::defaults(ShapeKind::Pyramid, 1000.0)
        );
    }

    #[test]
    fn test_session_serde_round_trip() {
        let mut session = SessionDefaults::new(UnitSystem::Centimeters);
        session.remember(&ShapeSpec::Dome {
            radius: 42.0,
            segments_per_quarter: 6,
        });
        let json = serde_json::to_string(&session).unwrap();
        let back: SessionDefaults = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
