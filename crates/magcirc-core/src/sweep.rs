// ─────────────────────────────────────────────────────────────────────
// MagCirc — Gap Sweep
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Evaluate one core over a family of gap lengths.

use magcirc_types::config::CoreConfig;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::reluctance::{calculate, CircuitResult};

/// One sweep sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// [mm]
    pub gap_mm: f64,
    pub result: CircuitResult,
}

/// `steps` evenly spaced gaps from `from_mm` to `to_mm`, both inclusive.
pub fn linear_gaps(from_mm: f64, to_mm: f64, steps: usize) -> Vec<f64> {
    if steps == 0 {
        return Vec::new();
    }
    let dg = if steps > 1 {
        (to_mm - from_mm) / (steps as f64 - 1.0)
    } else {
        0.0
    };
    (0..steps).map(|i| from_mm + dg * i as f64).collect()
}

/// Evaluate `config` at every gap in `gaps_mm`. Output keeps input order.
pub fn sweep_gaps(config: &CoreConfig, gaps_mm: &[f64]) -> Vec<SweepPoint> {
    gaps_mm
        .par_iter()
        .map(|&gap_mm| SweepPoint {
            gap_mm,
            result: calculate(&config.with_gap_mm(gap_mm).to_parameters()),
        })
        .collect()
}

pub fn sweep_gap_range(
    config: &CoreConfig,
    from_mm: f64,
    to_mm: f64,
    steps: usize,
) -> Vec<SweepPoint> {
    sweep_gaps(config, &linear_gaps(from_mm, to_mm, steps))
}

/// Sample whose inductance is closest to `target_h`. Non-finite samples are skipped.
pub fn closest_inductance(points: &[SweepPoint], target_h: f64) -> Option<&SweepPoint> {
    points
        .iter()
        .filter(|p| p.result.inductance().is_finite())
        .min_by(|a, b| {
            let da = (a.result.inductance() - target_h).abs();
            let db = (b.result.inductance() - target_h).abs();
            da.total_cmp(&db)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_gaps_endpoints() {
        let gaps = linear_gaps(0.1, 1.0, 10);
        assert_eq!(gaps.len(), 10);
        assert!((gaps[0] - 0.1).abs() < 1e-12);
        assert!((gaps[9] - 1.0).abs() < 1e-12);
        assert!(linear_gaps(0.0, 1.0, 0).is_empty());
        assert_eq!(linear_gaps(0.3, 1.0, 1), vec![0.3]);
    }

    #[test]
    fn test_sweep_matches_direct_calculation() {
        let cfg = CoreConfig::default();
        let points = sweep_gaps(&cfg, &[0.5, 0.2, 0.0]);
        assert_eq!(points.len(), 3);
        assert_eq!(points[1].gap_mm, 0.2);
        assert_eq!(points[1].result, calculate(&cfg.to_parameters()));
    }

    #[test]
    fn test_inductance_falls_with_gap() {
        let points = sweep_gap_range(&CoreConfig::default(), 0.0, 2.0, 21);
        for pair in points.windows(2) {
            assert!(
                pair[1].result.inductance() < pair[0].result.inductance(),
                "L not decreasing between g={} and g={}",
                pair[0].gap_mm,
                pair[1].gap_mm
            );
        }
    }

    #[test]
    fn test_closest_inductance() {
        let cfg = CoreConfig::default();
        let points = sweep_gap_range(&cfg, 0.0, 1.0, 11);
        let target = calculate(&cfg.with_gap_mm(0.3).to_parameters()).inductance();
        let best = closest_inductance(&points, target).unwrap();
        assert!((best.gap_mm - 0.3).abs() < 1e-9);
        assert!(closest_inductance(&[], target).is_none());
    }
}
