// ─────────────────────────────────────────────────────────────────────
// MagCirc — Circuit Parameters
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Calculator inputs in SI units.
//!
//! Values of these types are already converted; the only way to build one
//! from presentation units is [`crate::config::CoreConfig::to_parameters`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MagCircError;

/// Core topology selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// One closed limb carrying the gap.
    SingleLoop,
    /// Gapped central limb feeding two identical parallel branch limbs.
    Branched,
}

impl Topology {
    pub const ALL: [Topology; 2] = [Topology::SingleLoop, Topology::Branched];

    /// Report heading.
    pub fn heading(&self) -> &'static str {
        match self {
            Topology::SingleLoop => "SINGLE LOOP CORE:",
            Topology::Branched => "BRANCHED CORE:",
        }
    }

    /// Selector value used by the form ("1" / "2").
    pub fn selector(&self) -> &'static str {
        match self {
            Topology::SingleLoop => "1",
            Topology::Branched => "2",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::SingleLoop => f.write_str("single_loop"),
            Topology::Branched => f.write_str("branched"),
        }
    }
}

impl FromStr for Topology {
    type Err = MagCircError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "single" | "single_loop" | "single-loop" => Ok(Topology::SingleLoop),
            "2" | "branched" | "branch" => Ok(Topology::Branched),
            _ => Err(MagCircError::UnknownTopology(s.to_string())),
        }
    }
}

/// Core geometry [m, m²].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "topology", rename_all = "snake_case")]
pub enum CoreGeometry {
    SingleLoop {
        /// Mean magnetic path length of the loop, gap included [m].
        core_length: f64,
        /// Cross-section [m²].
        core_area: f64,
    },
    Branched {
        /// Central limb length, gap included [m].
        central_length: f64,
        /// Central limb cross-section [m²].
        central_area: f64,
        /// Length of each branch limb [m].
        branch_length: f64,
        /// Cross-section of each branch limb [m²].
        branch_area: f64,
    },
}

impl CoreGeometry {
    pub fn topology(&self) -> Topology {
        match self {
            CoreGeometry::SingleLoop { .. } => Topology::SingleLoop,
            CoreGeometry::Branched { .. } => Topology::Branched,
        }
    }

    /// Length of the limb the gap is cut from [m].
    pub fn gapped_limb_length(&self) -> f64 {
        match *self {
            CoreGeometry::SingleLoop { core_length, .. } => core_length,
            CoreGeometry::Branched { central_length, .. } => central_length,
        }
    }
}

/// Full calculator input set [SI].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircuitParameters {
    /// Relative permeability of the core material [-].
    pub relative_permeability: f64,
    /// Air gap length [m].
    pub gap_length: f64,
    /// Coil turns.
    pub turns: u32,
    /// Coil current [A], signed.
    pub current: f64,
    pub geometry: CoreGeometry,
}

impl CircuitParameters {
    pub fn topology(&self) -> Topology {
        self.geometry.topology()
    }

    /// Magnetomotive force `N·I` [A-turns].
    pub fn mmf(&self) -> f64 {
        self.current * f64::from(self.turns)
    }

    /// True when the gap is longer than the limb it is cut from.
    ///
    /// Such inputs are still evaluated; the material term simply goes negative.
    pub fn gap_exceeds_limb(&self) -> bool {
        self.gap_length > self.geometry.gapped_limb_length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_from_selector() {
        assert_eq!("1".parse::<Topology>().unwrap(), Topology::SingleLoop);
        assert_eq!("2".parse::<Topology>().unwrap(), Topology::Branched);
        assert_eq!(" Branched ".parse::<Topology>().unwrap(), Topology::Branched);
        assert_eq!("single_loop".parse::<Topology>().unwrap(), Topology::SingleLoop);
    }

    #[test]
    fn test_topology_unknown() {
        let err = "3".parse::<Topology>().unwrap_err();
        assert!(matches!(err, MagCircError::UnknownTopology(ref s) if s == "3"));
    }

    #[test]
    fn test_topology_display_roundtrip() {
        for t in Topology::ALL {
            assert_eq!(t.to_string().parse::<Topology>().unwrap(), t);
            assert_eq!(t.selector().parse::<Topology>().unwrap(), t);
        }
    }

    #[test]
    fn test_mmf_is_signed() {
        let p = CircuitParameters {
            relative_permeability: 100.0,
            gap_length: 0.0,
            turns: 10,
            current: -2.0,
            geometry: CoreGeometry::SingleLoop {
                core_length: 0.1,
                core_area: 1e-4,
            },
        };
        assert_eq!(p.mmf(), -20.0);
        assert!(!p.gap_exceeds_limb());
    }
}
