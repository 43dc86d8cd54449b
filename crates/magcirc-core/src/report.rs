// ─────────────────────────────────────────────────────────────────────
// MagCirc — Result Report
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Human-readable rendering of calculator results.
//!
//! Rounding happens here only; [`CircuitResult`] always carries full precision.

use std::fmt;

use crate::reluctance::{BranchedResult, CircuitResult, SingleLoopResult};

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value > 0.0 {
        "inf".to_string()
    } else {
        "-inf".to_string()
    }
}

/// Scientific notation with 3 fractional digits and a signed, two-digit
/// exponent, e.g. `1.234e+05`, `6.018e-07`.
pub fn format_sci(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    let raw = format!("{value:.3e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => raw,
    }
}

const ROUNDING_LIMIT: f64 = 9_007_199_254_740_992.0 / 1000.0;

/// Plain decimal rounded to 3 places, shortest form, `.0` kept on integers
/// (`343.604`, `1540.0`).
pub fn format_rounded(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    // Beyond 2^53 / 1000 there are no fractional digits left to round.
    let rounded = if value.abs() < ROUNDING_LIMIT {
        (value * 1000.0).round() / 1000.0
    } else {
        value
    };
    // `Display` never switches to exponent form.
    let mut text = format!("{rounded}");
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// One labelled report line.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl ReportLine {
    fn sci(label: &'static str, value: f64, unit: &'static str) -> Self {
        ReportLine {
            label,
            value: format_sci(value),
            unit,
        }
    }

    fn rounded(label: &'static str, value: f64) -> Self {
        ReportLine {
            label,
            value: format_rounded(value),
            unit: "",
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.label, self.value)?;
        if !self.unit.is_empty() {
            write!(f, " {}", self.unit)?;
        }
        Ok(())
    }
}

const AL_UNIT: &str = "H (Inductance = AL x N^2)";

fn single_loop_lines(r: &SingleLoopResult) -> Vec<ReportLine> {
    vec![
        ReportLine::sci("Reluctance R", r.reluctance, "1/H"),
        ReportLine::sci("Inductance factor AL", r.inductance_factor, AL_UNIT),
        ReportLine::sci("Magnetic flux Φ", r.flux, "Wb"),
        ReportLine::sci("Magnetic induction B", r.flux_density, "T"),
        ReportLine::sci("Coil inductance L", r.inductance, "H"),
        ReportLine::rounded("Effective permeability mu_e", r.effective_permeability),
    ]
}

fn branched_lines(r: &BranchedResult) -> Vec<ReportLine> {
    vec![
        ReportLine::sci("Total reluctance R", r.total_reluctance, "1/H"),
        ReportLine::sci("Inductance factor AL", r.inductance_factor, AL_UNIT),
        ReportLine::sci("Reluctance of the central part Rc", r.central_reluctance, "1/H"),
        ReportLine::sci("Reluctance of the branch part Rb", r.branch_reluctance, "1/H"),
        ReportLine::sci("Magnetic flux in the central part Φc", r.central_flux, "Wb"),
        ReportLine::sci(
            "Magnetic induction in the central part Bc",
            r.central_flux_density,
            "T",
        ),
        ReportLine::sci(
            "Magnetic induction in the branch part Bb",
            r.branch_flux_density,
            "T",
        ),
        ReportLine::sci("Coil inductance L", r.inductance, "H"),
        ReportLine::rounded("Effective permeability mu_e", r.effective_permeability),
    ]
}

/// Labelled lines for a result, in display order.
pub fn report_lines(result: &CircuitResult) -> Vec<ReportLine> {
    match result {
        CircuitResult::SingleLoop(r) => single_loop_lines(r),
        CircuitResult::Branched(r) => branched_lines(r),
    }
}

/// Heading followed by one line per output.
impl fmt::Display for CircuitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.topology().heading())?;
        for line in report_lines(self) {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}
