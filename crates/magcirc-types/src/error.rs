// ─────────────────────────────────────────────────────────────────────
// MagCirc — Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MagCircError {
    #[error("Invalid number for '{field}': {value:?}")]
    InvalidNumber { field: String, value: String },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unknown topology: {0:?} (expected 1, 2, single_loop or branched)")]
    UnknownTopology(String),

    #[error("Unknown field: {0:?}")]
    UnknownField(String),

    #[error("Malformed input on line {line}: {text:?} (expected key=value)")]
    MalformedLine { line: usize, text: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type MagCircResult<T> = Result<T, MagCircError>;
