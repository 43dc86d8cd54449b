// ─────────────────────────────────────────────────────────────────────
// MagCirc — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Circle constant, shared by every formula in the workspace.
pub const PI: f64 = core::f64::consts::PI;

/// Vacuum permeability (H/m), classical definition `4π × 10⁻⁷`.
/// NOTE: deliberately not the CODATA 2022 value; reports must match the
/// established desktop calculator bit-for-bit.
pub const MU0: f64 = 4.0 * PI * 1.0e-7;

/// Millimetres to metres.
pub const MM_TO_M: f64 = 1.0e-3;

/// Square millimetres to square metres.
pub const MM2_TO_M2: f64 = 1.0e-6;
