// ─────────────────────────────────────────────────────────────────────
// MagCirc — Property-Based Tests (proptest) for magcirc-core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for magcirc-core using proptest.
//!
//! Covers: single-loop series reluctance, effective permeability bounds,
//! branched flux split, zero-current behaviour, determinism of the
//! config → calculation → report pipeline.

use magcirc_core::reluctance::{limb_reluctance, solve_branched, solve_single_loop};
use magcirc_core::{calculate, CircuitResult};
use magcirc_types::config::{CoreConfig, CoreGeometryMm};
use magcirc_types::constants::MU0;
use proptest::prelude::*;

fn rel_err(actual: f64, expected: f64) -> f64 {
    ((actual - expected) / expected).abs()
}

// ── Single Loop ──────────────────────────────────────────────────────

proptest! {
    /// Positive inputs with 0 ≤ g ≤ l1 give a positive reluctance and
    /// outputs that follow directly from it.
    #[test]
    fn single_loop_outputs_consistent(
        mu in 1.0f64..1e5,
        l1 in 1e-3f64..1.0,
        gap_frac in 0.0f64..=1.0,
        a1 in 1e-7f64..1e-2,
        turns in 1u32..5_000,
        current in 1e-3f64..100.0,
    ) {
        let gap = gap_frac * l1;
        let r = solve_single_loop(mu, gap, turns, current, l1, a1);
        let n = f64::from(turns);

        prop_assert!(r.reluctance > 0.0);
        prop_assert_eq!(r.flux, current * n / r.reluctance);
        prop_assert_eq!(r.flux_density, r.flux / a1);
        prop_assert_eq!(r.inductance, n * n / r.reluctance);
        prop_assert_eq!(r.inductance_factor, 1.0 / r.reluctance);
    }

    /// A gap pulls the effective permeability below the material value.
    #[test]
    fn single_loop_mue_bounded(
        mu in 2.0f64..1e5,
        l1 in 1e-3f64..1.0,
        gap_frac in 1e-3f64..=1.0,
        a1 in 1e-7f64..1e-2,
    ) {
        let r = solve_single_loop(mu, gap_frac * l1, 10, 1.0, l1, a1);
        prop_assert!(r.effective_permeability > 0.0);
        prop_assert!(r.effective_permeability < mu,
            "mu_e={} not below mu={}", r.effective_permeability, mu);
    }

    /// g = 0 collapses to the pure-material reluctance and mu_e = mu.
    #[test]
    fn single_loop_no_gap(
        mu in 1.0f64..1e5,
        l1 in 1e-3f64..1.0,
        a1 in 1e-7f64..1e-2,
    ) {
        let r = solve_single_loop(mu, 0.0, 10, 1.0, l1, a1);
        prop_assert_eq!(r.reluctance, limb_reluctance(l1, mu, a1));
        prop_assert!(rel_err(r.effective_permeability, mu) < 1e-12);
    }

    /// g = l1 removes the material: reluctance and mu_e no longer depend on mu.
    #[test]
    fn single_loop_fully_gapped(
        mu_a in 1.0f64..1e5,
        mu_b in 1.0f64..1e5,
        l1 in 1e-3f64..1.0,
        a1 in 1e-7f64..1e-2,
    ) {
        let a = solve_single_loop(mu_a, l1, 10, 1.0, l1, a1);
        let b = solve_single_loop(mu_b, l1, 10, 1.0, l1, a1);
        prop_assert!(rel_err(a.reluctance, l1 / (MU0 * a1)) < 1e-12);
        prop_assert_eq!(a.reluctance, b.reluctance);
        prop_assert_eq!(a.effective_permeability, b.effective_permeability);
    }
}

// ── Branched ─────────────────────────────────────────────────────────

proptest! {
    /// Bb = Bc·Ac/(2·Ab), and the branches always add reluctance.
    #[test]
    fn branched_flux_split(
        mu in 1.0f64..1e5,
        lc in 1e-3f64..0.5,
        gap_frac in 0.0f64..=1.0,
        ac in 1e-7f64..1e-2,
        lb in 1e-3f64..0.5,
        ab in 1e-7f64..1e-2,
        turns in 1u32..5_000,
        current in 1e-3f64..100.0,
    ) {
        let r = solve_branched(mu, gap_frac * lc, turns, current, lc, ac, lb, ab);
        let expected_bb = r.central_flux_density * ac / (2.0 * ab);
        prop_assert!(rel_err(r.branch_flux_density, expected_bb) < 1e-12);
        prop_assert!(r.branch_reluctance > 0.0);
        prop_assert!(r.total_reluctance > r.central_reluctance);
        prop_assert_eq!(r.inductance, f64::from(turns).powi(2) / r.total_reluctance);
    }
}

// ── Excitation ───────────────────────────────────────────────────────

proptest! {
    /// Branched: I = 0 zeroes every flux output and leaves L and R untouched.
    #[test]
    fn zero_current_branched(
        mu in 1.0f64..1e5,
        gap in 0.0f64..0.5,
        turns in 1u32..5_000,
    ) {
        let mut cfg = CoreConfig::default();
        cfg.relative_permeability = mu;
        cfg.gap_mm = gap;
        cfg.turns = turns;
        let live = calculate(&cfg.to_parameters());
        cfg.current = 0.0;
        let idle = calculate(&cfg.to_parameters());

        match (live, idle) {
            (CircuitResult::Branched(live), CircuitResult::Branched(idle)) => {
                prop_assert_eq!(idle.central_flux, 0.0);
                prop_assert_eq!(idle.central_flux_density, 0.0);
                prop_assert_eq!(idle.branch_flux_density, 0.0);
                prop_assert_eq!(idle.inductance, live.inductance);
                prop_assert_eq!(idle.total_reluctance, live.total_reluctance);
            }
            other => prop_assert!(false, "topology changed: {:?}", other),
        }
    }

    /// Single loop: I = 0 zeroes flux and flux density, R and L unchanged.
    #[test]
    fn zero_current_single_loop(
        mu in 1.0f64..1e5,
        l1 in 1e-3f64..1.0,
        gap_frac in 0.0f64..=1.0,
        a1 in 1e-7f64..1e-2,
        turns in 1u32..5_000,
        current in 1e-3f64..100.0,
    ) {
        let gap = gap_frac * l1;
        let live = solve_single_loop(mu, gap, turns, current, l1, a1);
        let idle = solve_single_loop(mu, gap, turns, 0.0, l1, a1);

        prop_assert_eq!(idle.flux, 0.0);
        prop_assert_eq!(idle.flux_density, 0.0);
        prop_assert_eq!(idle.reluctance, live.reluctance);
        prop_assert_eq!(idle.inductance, live.inductance);
        prop_assert_eq!(idle.effective_permeability, live.effective_permeability);
    }

    /// Same inputs, same report text: no state carried between calls.
    #[test]
    fn pipeline_deterministic(
        gap in 0.0f64..1.0,
        l1 in 1.0f64..300.0,
        a1 in 1.0f64..500.0,
    ) {
        let cfg = CoreConfig {
            gap_mm: gap,
            core: CoreGeometryMm::SingleLoop { core_length_mm: l1, core_area_mm2: a1 },
            ..CoreConfig::default()
        };
        let first = calculate(&cfg.to_parameters());
        let _other = calculate(&CoreConfig::default().to_parameters());
        let second = calculate(&cfg.to_parameters());
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.to_string(), second.to_string());
    }
}
