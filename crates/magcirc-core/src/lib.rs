// ─────────────────────────────────────────────────────────────────────
// MagCirc — Magnetic Circuit Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reluctance, flux, inductance and effective permeability of gapped cores.

pub mod form;
pub mod reluctance;
pub mod report;
pub mod sweep;

pub use reluctance::{calculate, BranchedResult, CircuitResult, SingleLoopResult};
