
//! Generator for the named-dimension table in
//! [`units::named`](crate::units::named).
//!
//! The input is a plain-text table with one dimension per line: a
//! human-readable name followed by seven integer exponents, in the
//! order of [`BaseDimension::ALL`](crate::units::dimension::BaseDimension::ALL).
//! The output is Rust source declaring one constant per row and a
//! static map from row name to dimension. The output is checked in;
//! nothing calls this at run time.

use crate::units::dimension::NDIMS;

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

/// The table the checked-in [`units::named`](crate::units::named)
/// module is generated from. Append rows here, never reorder
/// columns.
pub const DEFAULT_TABLE: &str = "
Scalar Value               0   0   0   0   0   0   0
Acceleration              -2   1   0   0   0   0   0
Amount of Substance        0   0   0   0   0   0   1
Angular Momentum          -1   2   1   0   0   0   0
Area                       0   2   0   0   0   0   0
Capacitance                4  -2  -1   2   0   0   0
Catalytic Activity        -1   0   0   0   0   0   1
Charge                     1   0   0   1   0   0   0
Conductance                3  -2  -1   2   0   0   0
Conductivity               3  -3  -1   2   0   0   0
Current                    0   0   0   1   0   0   0
Density                    0  -3   1   0   0   0   0
Electric Field Strength   -3   1   1  -1   0   0   0
Energy                    -2   2   1   0   0   0   0
Entropy                   -2   2   1   0  -1   0   0
Force                     -2   1   1   0   0   0   0
Frequency                 -1   0   0   0   0   0   0
Gravitation               -2   3  -1   0   0   0   0
Illuminance                0  -2   0   0   0   1   0
Inductance                -2   2   1  -2   0   0   0
Length                     0   1   0   0   0   0   0
Luminous Intensity         0   0   0   0   0   1   0
Magnetic Flux             -2   2   1  -1   0   0   0
Magnetic Flux Density     -2   0   1  -1   0   0   0
Magnetic Permeability     -2   1   1  -2   0   0   0
Mass                       0   0   1   0   0   0   0
Molar Mass                 0   0   1   0   0   0  -1
Molar Volume               0   3   0   0   0   0  -1
Momentum                  -1   1   1   0   0   0   0
Permittivity               4  -3  -1   2   0   0   0
Power                     -3   2   1   0   0   0   0
Pressure                  -2  -1   1   0   0   0   0
Resistance                -3   2   1  -2   0   0   0
Resistivity               -3   3   1  -2   0   0   0
Specific Heat Capacity    -2   2   0   0  -1   0   0
Temperature                0   0   0   0   1   0   0
Thermal Conductivity      -3   1   1   0  -1   0   0
Time                       1   0   0   0   0   0   0
Velocity                  -1   1   0   0   0   0   0
Voltage                   -3   2   1  -1   0   0   0
Volume                     0   3   0   0   0   0   0
";

const GENERATED_HEADER: &str = "\
// @generated by gen_dimensions from `codegen::DEFAULT_TABLE`.
// Regenerate instead of editing by hand.

use super::dimension::Dimension;

use phf::phf_map;

";

static ROW_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^\s*([^0-9\-]+?)\s+((?:-?[0-9]+\s+){6}-?[0-9]+)\s*$").unwrap()
});

/// Normalized names must be usable as Rust identifiers once
/// upper-cased.
static NAME_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^[a-z_][a-z0-9_]*$").unwrap()
});

/// One parsed row of the dimension table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
  /// Normalized name: lower-case, words joined by underscores.
  pub name: String,
  pub exponents: [i64; NDIMS],
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CodegenError {
  #[error("Line {line}: expected a name followed by seven integers, got {text:?}")]
  MalformedRow { line: usize, text: String },
  #[error("Line {line}: exponent out of range: {text:?}")]
  BadExponent { line: usize, text: String },
  #[error("Line {line}: {name:?} is not a valid identifier")]
  InvalidName { line: usize, name: String },
  #[error("Line {line}: duplicate dimension name {name:?}")]
  DuplicateName { line: usize, name: String },
  #[error("{0}")]
  Io(#[from] io::Error),
}

impl TableRow {
  /// The name of the Rust constant declared for this row.
  pub fn const_name(&self) -> String {
    self.name.to_uppercase()
  }
}

/// Normalizes a human-readable dimension name into the key used in
/// generated code, e.g. `"Magnetic Flux  Density"` becomes
/// `"magnetic_flux_density"`.
pub fn normalize_name(name: &str) -> String {
  name.split_whitespace()
    .map(str::to_lowercase)
    .join("_")
}

/// Parses a dimension table. Blank lines are skipped; any other line
/// which is not a valid row is an error, as is a name which appears
/// twice.
pub fn parse_table(input: &str) -> Result<Vec<TableRow>, CodegenError> {
  let mut rows = Vec::new();
  let mut seen = HashSet::new();
  for (index, text) in input.lines().enumerate() {
    let line = index + 1;
    if text.trim().is_empty() {
      tracing::trace!(line, "skipping blank line");
      continue;
    }
    let row = parse_row(line, text)?;
    if !seen.insert(row.name.clone()) {
      return Err(CodegenError::DuplicateName { line, name: row.name });
    }
    tracing::debug!(line, name = %row.name, exponents = ?row.exponents, "parsed dimension row");
    rows.push(row);
  }
  Ok(rows)
}

fn parse_row(line: usize, text: &str) -> Result<TableRow, CodegenError> {
  let malformed = || CodegenError::MalformedRow { line, text: text.to_owned() };
  let captures = ROW_RE.captures(text).ok_or_else(malformed)?;
  let mut exponents = [0; NDIMS];
  for (slot, field) in exponents.iter_mut().zip(captures[2].split_whitespace()) {
    *slot = field.parse().map_err(|_| CodegenError::BadExponent { line, text: field.to_owned() })?;
  }
  let name = normalize_name(&captures[1]);
  if name.is_empty() {
    return Err(malformed());
  }
  if !NAME_RE.is_match(&name) {
    return Err(CodegenError::InvalidName { line, name });
  }
  Ok(TableRow { name, exponents })
}

/// Reads and parses a dimension table from a file.
pub fn read_table(path: &Path) -> Result<Vec<TableRow>, CodegenError> {
  let input = fs::read_to_string(path)?;
  parse_table(&input)
}

/// Renders the Rust source of the named-dimension module.
pub fn render_declarations(rows: &[TableRow]) -> String {
  let mut out = String::from(GENERATED_HEADER);
  for row in rows {
    out.push_str(&format!(
      "pub const {}: Dimension = Dimension::new([{}]);\n",
      row.const_name(),
      row.exponents.iter().join(", "),
    ));
  }
  out.push('\n');
  out.push_str("pub static NAMED_DIMENSIONS: phf::Map<&'static str, Dimension> = phf_map! {\n");
  for row in rows {
    out.push_str(&format!("  {:?} => {},\n", row.name, row.const_name()));
  }
  out.push_str("};\n");
  out
}
