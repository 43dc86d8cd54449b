// ─────────────────────────────────────────────────────────────────────
// MagCirc — Reluctance Calculator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Linear magnetic-circuit model for gapped cores.
//!
//! Two topologies are supported: a single closed loop carrying the gap, and a
//! gapped central limb returning through two identical parallel branches.
//! Permeability is a constant scalar; there is no saturation or hysteresis.
//!
//! Inputs are SI. Nothing here validates physical plausibility: zero areas,
//! zero turns or a gap longer than its limb propagate through IEEE-754
//! arithmetic into infinite or NaN outputs instead of raising.

use magcirc_types::constants::MU0;
use magcirc_types::params::{CircuitParameters, CoreGeometry, Topology};
use serde::{Deserialize, Serialize};

/// Reluctance of a limb without a gap [1/H].
///
/// `R = l / (mu * mu0 * A)`.
pub fn limb_reluctance(length: f64, mu: f64, area: f64) -> f64 {
    length / (mu * MU0 * area)
}

/// Reluctance of a limb with an air gap cut from its length [1/H].
///
/// Material and gap in series:
/// `R = (l - g) / (mu * mu0 * A) + g / (mu0 * A)`.
pub fn gapped_limb_reluctance(length: f64, gap: f64, mu: f64, area: f64) -> f64 {
    (length - gap) / (mu * MU0 * area) + gap / (MU0 * area)
}

/// Central limb in series with two identical branches in parallel [1/H].
///
/// `R = Rc + Rb / 2`.
pub fn branched_reluctance(central: f64, branch: f64) -> f64 {
    central + branch / 2.0
}

/// Results for a single-loop core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SingleLoopResult {
    /// Total reluctance [1/H].
    pub reluctance: f64,
    /// `A_L = 1/R` [H].
    pub inductance_factor: f64,
    /// [Wb]
    pub flux: f64,
    /// [T]
    pub flux_density: f64,
    /// [H]
    pub inductance: f64,
    /// [-]
    pub effective_permeability: f64,
}

/// Results for a branched core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BranchedResult {
    /// Central limb plus parallel branches [1/H].
    pub total_reluctance: f64,
    /// Gapped central limb [1/H].
    pub central_reluctance: f64,
    /// One branch limb [1/H].
    pub branch_reluctance: f64,
    /// `A_L = 1/R` [H].
    pub inductance_factor: f64,
    /// Flux through the central limb [Wb].
    pub central_flux: f64,
    /// [T]
    pub central_flux_density: f64,
    /// Each branch carries half the central flux [T].
    pub branch_flux_density: f64,
    /// [H]
    pub inductance: f64,
    /// [-]
    pub effective_permeability: f64,
}

/// Result record for either topology.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "topology", rename_all = "snake_case")]
pub enum CircuitResult {
    SingleLoop(SingleLoopResult),
    Branched(BranchedResult),
}

impl CircuitResult {
    pub fn topology(&self) -> Topology {
        match self {
            CircuitResult::SingleLoop(_) => Topology::SingleLoop,
            CircuitResult::Branched(_) => Topology::Branched,
        }
    }

    /// Total reluctance seen by the coil [1/H].
    pub fn reluctance(&self) -> f64 {
        match self {
            CircuitResult::SingleLoop(r) => r.reluctance,
            CircuitResult::Branched(r) => r.total_reluctance,
        }
    }

    pub fn inductance(&self) -> f64 {
        match self {
            CircuitResult::SingleLoop(r) => r.inductance,
            CircuitResult::Branched(r) => r.inductance,
        }
    }

    pub fn effective_permeability(&self) -> f64 {
        match self {
            CircuitResult::SingleLoop(r) => r.effective_permeability,
            CircuitResult::Branched(r) => r.effective_permeability,
        }
    }

    /// Flux through the coil [Wb].
    pub fn flux(&self) -> f64 {
        match self {
            CircuitResult::SingleLoop(r) => r.flux,
            CircuitResult::Branched(r) => r.central_flux,
        }
    }

    /// False if any output is infinite or NaN.
    pub fn is_finite(&self) -> bool {
        match self {
            CircuitResult::SingleLoop(r) => [
                r.reluctance,
                r.inductance_factor,
                r.flux,
                r.flux_density,
                r.inductance,
                r.effective_permeability,
            ]
            .iter()
            .all(|v| v.is_finite()),
            CircuitResult::Branched(r) => [
                r.total_reluctance,
                r.central_reluctance,
                r.branch_reluctance,
                r.inductance_factor,
                r.central_flux,
                r.central_flux_density,
                r.branch_flux_density,
                r.inductance,
                r.effective_permeability,
            ]
            .iter()
            .all(|v| v.is_finite()),
        }
    }
}

/// Single-loop core.
///
/// `Φ = I N / R`, `B = Φ / A`, `L = N² / R`, `mu_e = l / (mu0 A R)`.
pub fn solve_single_loop(
    mu: f64,
    gap: f64,
    turns: u32,
    current: f64,
    core_length: f64,
    core_area: f64,
) -> SingleLoopResult {
    let n = f64::from(turns);
    let reluctance = gapped_limb_reluctance(core_length, gap, mu, core_area);
    let flux = current * n / reluctance;

    SingleLoopResult {
        reluctance,
        inductance_factor: 1.0 / reluctance,
        flux,
        flux_density: flux / core_area,
        inductance: n * n / reluctance,
        effective_permeability: core_length / (MU0 * core_area * reluctance),
    }
}

/// Branched core: gapped central limb, two identical branch limbs in parallel.
///
/// The central flux splits evenly, so `Bb = Φ / (2 Ab)`;
/// `mu_e = (lc/Ac + lb/(2 Ab)) / (mu0 R)`.
#[allow(clippy::too_many_arguments)]
pub fn solve_branched(
    mu: f64,
    gap: f64,
    turns: u32,
    current: f64,
    central_length: f64,
    central_area: f64,
    branch_length: f64,
    branch_area: f64,
) -> BranchedResult {
    let n = f64::from(turns);
    let central_reluctance = gapped_limb_reluctance(central_length, gap, mu, central_area);
    let branch_reluctance = limb_reluctance(branch_length, mu, branch_area);
    let total_reluctance = branched_reluctance(central_reluctance, branch_reluctance);
    let central_flux = current * n / total_reluctance;

    BranchedResult {
        total_reluctance,
        central_reluctance,
        branch_reluctance,
        inductance_factor: 1.0 / total_reluctance,
        central_flux,
        central_flux_density: central_flux / central_area,
        branch_flux_density: central_flux / (2.0 * branch_area),
        inductance: n * n / total_reluctance,
        effective_permeability: (central_length / central_area
            + branch_length / (2.0 * branch_area))
            / (MU0 * total_reluctance),
    }
}

/// Evaluate the circuit for whichever topology `params` describes.
pub fn calculate(params: &CircuitParameters) -> CircuitResult {
    let mu = params.relative_permeability;
    let gap = params.gap_length;
    match params.geometry {
        CoreGeometry::SingleLoop {
            core_length,
            core_area,
        } => CircuitResult::SingleLoop(solve_single_loop(
            mu,
            gap,
            params.turns,
            params.current,
            core_length,
            core_area,
        )),
        CoreGeometry::Branched {
            central_length,
            central_area,
            branch_length,
            branch_area,
        } => CircuitResult::Branched(solve_branched(
            mu,
            gap,
            params.turns,
            params.current,
            central_length,
            central_area,
            branch_length,
            branch_area,
        )),
    }
}
