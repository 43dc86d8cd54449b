// ─────────────────────────────────────────────────────────────────────
// MagCirc — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{MM2_TO_M2, MM_TO_M};
use crate::params::{CircuitParameters, CoreGeometry, Topology};

/// Calculator inputs as entered by a user: lengths in mm, areas in mm².
/// Maps 1:1 to the JSON files under `configs/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreConfig {
    pub relative_permeability: f64,
    pub gap_mm: f64,
    pub turns: u32,
    pub current: f64,
    pub core: CoreGeometryMm,
}

/// Geometry in presentation units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "topology", rename_all = "snake_case")]
pub enum CoreGeometryMm {
    SingleLoop {
        core_length_mm: f64,
        core_area_mm2: f64,
    },
    Branched {
        central_length_mm: f64,
        central_area_mm2: f64,
        branch_length_mm: f64,
        branch_area_mm2: f64,
    },
}

impl CoreGeometryMm {
    pub fn topology(&self) -> Topology {
        match self {
            CoreGeometryMm::SingleLoop { .. } => Topology::SingleLoop,
            CoreGeometryMm::Branched { .. } => Topology::Branched,
        }
    }

    /// Convert to SI. The result is a [`CoreGeometry`], a different type, so it
    /// cannot be fed back in for a second conversion.
    pub fn into_si(self) -> CoreGeometry {
        match self {
            CoreGeometryMm::SingleLoop {
                core_length_mm,
                core_area_mm2,
            } => CoreGeometry::SingleLoop {
                core_length: core_length_mm * MM_TO_M,
                core_area: core_area_mm2 * MM2_TO_M2,
            },
            CoreGeometryMm::Branched {
                central_length_mm,
                central_area_mm2,
                branch_length_mm,
                branch_area_mm2,
            } => CoreGeometry::Branched {
                central_length: central_length_mm * MM_TO_M,
                central_area: central_area_mm2 * MM2_TO_M2,
                branch_length: branch_length_mm * MM_TO_M,
                branch_area: branch_area_mm2 * MM2_TO_M2,
            },
        }
    }
}

impl Default for CoreConfig {
    /// Batch defaults: E-type ferrite core with a 0.2 mm centre gap.
    fn default() -> Self {
        CoreConfig {
            relative_permeability: 1540.0,
            gap_mm: 0.2,
            turns: 50,
            current: 0.5,
            core: CoreGeometryMm::Branched {
                central_length_mm: 29.3,
                central_area_mm2: 123.21,
                branch_length_mm: 59.1,
                branch_area_mm2: 61.605,
            },
        }
    }
}

impl CoreConfig {
    /// Load from JSON file.
    pub fn from_file(path: &str) -> crate::error::MagCircResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> crate::error::MagCircResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn topology(&self) -> Topology {
        self.core.topology()
    }

    /// Same inputs with a different gap [mm].
    pub fn with_gap_mm(&self, gap_mm: f64) -> Self {
        CoreConfig {
            gap_mm,
            ..self.clone()
        }
    }

    /// Unit boundary: the single mm → m conversion before any formula runs.
    pub fn to_parameters(&self) -> CircuitParameters {
        CircuitParameters {
            relative_permeability: self.relative_permeability,
            gap_length: self.gap_mm * MM_TO_M,
            turns: self.turns,
            current: self.current,
            geometry: self.core.into_si(),
        }
    }
}
