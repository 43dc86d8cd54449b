// ─────────────────────────────────────────────────────────────────────
// MagCirc — Input Form
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Text-form front end: field catalogue, visibility, and text coercion.
//!
//! A front end collects raw text per field and calls [`FormInput::parse`].
//! Only the fields visible for the selected topology are coerced; anything
//! else in the form is ignored. The calculator never sees malformed input.

use std::collections::BTreeMap;

use magcirc_types::config::{CoreConfig, CoreGeometryMm};
use magcirc_types::error::{MagCircError, MagCircResult};
use magcirc_types::params::Topology;

/// Every input field a front end can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    RelativePermeability,
    Gap,
    Turns,
    Current,
    Topology,
    CoreLength,
    CoreArea,
    CentralLength,
    CentralArea,
    BranchLength,
    BranchArea,
}

const SINGLE_LOOP_FIELDS: [FieldId; 7] = [
    FieldId::RelativePermeability,
    FieldId::Gap,
    FieldId::Turns,
    FieldId::Current,
    FieldId::Topology,
    FieldId::CoreLength,
    FieldId::CoreArea,
];

const BRANCHED_FIELDS: [FieldId; 9] = [
    FieldId::RelativePermeability,
    FieldId::Gap,
    FieldId::Turns,
    FieldId::Current,
    FieldId::Topology,
    FieldId::CentralLength,
    FieldId::CentralArea,
    FieldId::BranchLength,
    FieldId::BranchArea,
];

impl FieldId {
    pub const ALL: [FieldId; 11] = [
        FieldId::RelativePermeability,
        FieldId::Gap,
        FieldId::Turns,
        FieldId::Current,
        FieldId::Topology,
        FieldId::CoreLength,
        FieldId::CoreArea,
        FieldId::CentralLength,
        FieldId::CentralArea,
        FieldId::BranchLength,
        FieldId::BranchArea,
    ];

    /// Short key, as typed in a `key=value` form.
    pub fn key(&self) -> &'static str {
        match self {
            FieldId::RelativePermeability => "mu",
            FieldId::Gap => "g",
            FieldId::Turns => "N",
            FieldId::Current => "I",
            FieldId::Topology => "branch",
            FieldId::CoreLength => "l1",
            FieldId::CoreArea => "A1",
            FieldId::CentralLength => "lc",
            FieldId::CentralArea => "Ac",
            FieldId::BranchLength => "lb",
            FieldId::BranchArea => "Ab",
        }
    }

    /// Long key matching the JSON config field name.
    pub fn config_key(&self) -> &'static str {
        match self {
            FieldId::RelativePermeability => "relative_permeability",
            FieldId::Gap => "gap_mm",
            FieldId::Turns => "turns",
            FieldId::Current => "current",
            FieldId::Topology => "topology",
            FieldId::CoreLength => "core_length_mm",
            FieldId::CoreArea => "core_area_mm2",
            FieldId::CentralLength => "central_length_mm",
            FieldId::CentralArea => "central_area_mm2",
            FieldId::BranchLength => "branch_length_mm",
            FieldId::BranchArea => "branch_area_mm2",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::RelativePermeability => "μ (relative permeability)",
            FieldId::Gap => "g (Gap) [mm]",
            FieldId::Turns => "N (number of turns)",
            FieldId::Current => "I (current) [A]",
            FieldId::Topology => "branch",
            FieldId::CoreLength => "l1 (length of core) [mm]",
            FieldId::CoreArea => "A1 (cross-section of core) [mm^2]",
            FieldId::CentralLength => "lc (length of central part) [mm]",
            FieldId::CentralArea => "Ac (cross-section of central part) [mm^2]",
            FieldId::BranchLength => "lb (length of each branch) [mm]",
            FieldId::BranchArea => "Ab (cross-section of branch part) [mm^2]",
        }
    }

    /// Short keys are case-sensitive (`lc` vs `Ac`); long keys are not.
    pub fn from_key(key: &str) -> Option<FieldId> {
        let key = key.trim();
        FieldId::ALL
            .into_iter()
            .find(|f| f.key() == key || f.config_key().eq_ignore_ascii_case(key))
    }
}

/// Fields a front end should show for `topology`, in display order.
pub fn visible_fields(topology: Topology) -> &'static [FieldId] {
    match topology {
        Topology::SingleLoop => &SINGLE_LOOP_FIELDS,
        Topology::Branched => &BRANCHED_FIELDS,
    }
}

/// Raw text per field, as entered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    values: BTreeMap<FieldId, String>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: FieldId, text: impl Into<String>) {
        self.values.insert(field, text.into());
    }

    pub fn with(mut self, field: FieldId, text: impl Into<String>) -> Self {
        self.set(field, text);
        self
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Prefill from a config, so a front end can show current values.
    pub fn from_config(config: &CoreConfig) -> Self {
        let form = FormInput::new()
            .with(FieldId::RelativePermeability, config.relative_permeability.to_string())
            .with(FieldId::Gap, config.gap_mm.to_string())
            .with(FieldId::Turns, config.turns.to_string())
            .with(FieldId::Current, config.current.to_string())
            .with(FieldId::Topology, config.topology().selector());
        match config.core {
            CoreGeometryMm::SingleLoop {
                core_length_mm,
                core_area_mm2,
            } => form
                .with(FieldId::CoreLength, core_length_mm.to_string())
                .with(FieldId::CoreArea, core_area_mm2.to_string()),
            CoreGeometryMm::Branched {
                central_length_mm,
                central_area_mm2,
                branch_length_mm,
                branch_area_mm2,
            } => form
                .with(FieldId::CentralLength, central_length_mm.to_string())
                .with(FieldId::CentralArea, central_area_mm2.to_string())
                .with(FieldId::BranchLength, branch_length_mm.to_string())
                .with(FieldId::BranchArea, branch_area_mm2.to_string()),
        }
    }

    /// Read `key=value` lines. Blank lines and `#` comments are skipped;
    /// a later line for the same field wins.
    pub fn from_key_values(text: &str) -> MagCircResult<Self> {
        let mut form = FormInput::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line.split_once('=').ok_or_else(|| MagCircError::MalformedLine {
                line: idx + 1,
                text: raw.to_string(),
            })?;
            let field = FieldId::from_key(key)
                .ok_or_else(|| MagCircError::UnknownField(key.trim().to_string()))?;
            form.set(field, value.trim());
        }
        Ok(form)
    }

    fn text(&self, field: FieldId) -> MagCircResult<&str> {
        self.get(field)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| MagCircError::MissingField(field.key().to_string()))
    }

    fn number(&self, field: FieldId) -> MagCircResult<f64> {
        let text = self.text(field)?;
        text.parse::<f64>().map_err(|_| MagCircError::InvalidNumber {
            field: field.key().to_string(),
            value: text.to_string(),
        })
    }

    fn integer(&self, field: FieldId) -> MagCircResult<u32> {
        let text = self.text(field)?;
        text.parse::<u32>().map_err(|_| MagCircError::InvalidNumber {
            field: field.key().to_string(),
            value: text.to_string(),
        })
    }

    /// Selected topology.
    pub fn topology(&self) -> MagCircResult<Topology> {
        self.text(FieldId::Topology)?.parse()
    }

    /// Coerce the visible fields into a config (still in mm / mm²).
    pub fn parse(&self) -> MagCircResult<CoreConfig> {
        let topology = self.topology()?;
        let core = match topology {
            Topology::SingleLoop => CoreGeometryMm::SingleLoop {
                core_length_mm: self.number(FieldId::CoreLength)?,
                core_area_mm2: self.number(FieldId::CoreArea)?,
            },
            Topology::Branched => CoreGeometryMm::Branched {
                central_length_mm: self.number(FieldId::CentralLength)?,
                central_area_mm2: self.number(FieldId::CentralArea)?,
                branch_length_mm: self.number(FieldId::BranchLength)?,
                branch_area_mm2: self.number(FieldId::BranchArea)?,
            },
        };
        Ok(CoreConfig {
            relative_permeability: self.number(FieldId::RelativePermeability)?,
            gap_mm: self.number(FieldId::Gap)?,
            turns: self.integer(FieldId::Turns)?,
            current: self.number(FieldId::Current)?,
            core,
        })
    }
}
