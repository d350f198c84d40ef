//! JSON boundary helpers for external loaders and writers.
//!
//! The core consumes an in-memory employee list and produces an in-memory
//! roster; these leaf helpers cover the common case of a JSON file on either
//! side. Input is an array of `{name, preferences}` records; output is the
//! day → shift → names grid with keys in calendar order.
//!
//! The solver itself never touches the filesystem.

use std::fs;
use std::path::Path;

use crate::models::{Employee, Roster};

/// Errors at the JSON boundary.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// File read/write failure.
    #[error("file access failed: {0}")]
    File(#[from] std::io::Error),
    /// Malformed JSON, or an unknown day/shift name in a record.
    #[error("invalid roster JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses an employee pool from a JSON array of `{name, preferences}` records.
pub fn employees_from_json(json: &str) -> Result<Vec<Employee>, IoError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads an employee pool from a JSON file.
pub fn read_employees(path: impl AsRef<Path>) -> Result<Vec<Employee>, IoError> {
    let data = fs::read_to_string(path)?;
    employees_from_json(&data)
}

/// Serializes a roster as pretty-printed JSON with keys in calendar order.
pub fn roster_to_json(roster: &Roster) -> Result<String, IoError> {
    Ok(serde_json::to_string_pretty(roster)?)
}

/// Writes a roster to a JSON file.
pub fn write_roster(path: impl AsRef<Path>, roster: &Roster) -> Result<(), IoError> {
    fs::write(path, roster_to_json(roster)?)?;
    Ok(())
}
