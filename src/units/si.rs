
//! Rendering of [`Dimension`] values as SI unit symbols.

use super::dimension::{Dimension, BaseDimension, Exponent};
use super::named;

use itertools::Itertools;
use once_cell::sync::Lazy;

use std::collections::HashMap;

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Symbols of the seven SI base units, keyed by dimension.
pub static SI_BASE_SYMBOLS: Lazy<HashMap<Dimension, &'static str>> = Lazy::new(|| {
  BaseDimension::ALL.into_iter()
    .map(|base| (Dimension::singleton(base), base.symbol()))
    .collect()
});

/// Symbols of the SI derived units which have special names, keyed by
/// dimension.
pub static SI_DERIVED_SYMBOLS: Lazy<HashMap<Dimension, &'static str>> = Lazy::new(|| {
  HashMap::from([
    (named::FREQUENCY, "Hz"),
    (named::FORCE, "N"),
    (named::PRESSURE, "Pa"),
    (named::ENERGY, "J"),
    (named::POWER, "W"),
    (named::CHARGE, "C"),
    (named::VOLTAGE, "V"),
    (named::CAPACITANCE, "F"),
    (named::RESISTANCE, "Ω"),
    (named::CONDUCTANCE, "S"),
    (named::MAGNETIC_FLUX, "Wb"),
    (named::MAGNETIC_FLUX_DENSITY, "T"),
    (named::INDUCTANCE, "H"),
    (named::ILLUMINANCE, "lx"),
    (named::CATALYTIC_ACTIVITY, "kat"),
  ])
});

/// Looks up the single symbol for a dimension: a base unit symbol
/// first, then a named derived unit symbol.
pub fn lookup_symbol(dim: &Dimension) -> Option<&'static str> {
  SI_BASE_SYMBOLS.get(dim)
    .or_else(|| SI_DERIVED_SYMBOLS.get(dim))
    .copied()
}

/// Renders a dimension as an SI unit symbol.
///
/// A base dimension renders as its base unit (`s`, `m`, `kg`, ...),
/// and a dimension with a named SI derived unit renders as that unit
/// (`N`, `Pa`, ...). Anything else is composed from base unit
/// symbols, with positive powers before a `/` and negative powers
/// after it, e.g. `m/s` or `kg/m³`. The scalar dimension renders as
/// the empty string.
pub fn format_dimension_as_symbol<E: Exponent>(dim: &Dimension<E>) -> String {
  if let Some(symbol) = dim.to_integer().as_ref().and_then(lookup_symbol) {
    return symbol.to_owned();
  }

  let mut numerator = String::new();
  let mut denominator = String::new();
  for base in BaseDimension::SI_DISPLAY_ORDER {
    let exponent = dim.get(base);
    if exponent.is_zero() {
      continue;
    }
    let side = if exponent.is_negative() { &mut denominator } else { &mut numerator };
    side.push_str(base.symbol());
    exponent.write_superscript(side);
  }
  [numerator, denominator].into_iter()
    .filter(|s| !s.is_empty())
    .join("/")
}

/// Renders a nonnegative integer in Unicode superscript digits.
pub fn superscript(mut n: u64) -> String {
  let mut digits = Vec::new();
  loop {
    digits.push(SUPERSCRIPT_DIGITS[(n % 10) as usize]);
    n /= 10;
    if n == 0 {
      break;
    }
  }
  digits.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::named::*;

  use num::rational::Rational64;

  #[test]
  fn test_superscript() {
    assert_eq!(superscript(0), "⁰");
    assert_eq!(superscript(2), "²");
    assert_eq!(superscript(12), "¹²");
    assert_eq!(superscript(1_234_567_890), "¹²³⁴⁵⁶⁷⁸⁹⁰");
  }

  #[test]
  fn test_format_base_dimensions() {
    assert_eq!(format_dimension_as_symbol(&TIME), "s");
    assert_eq!(format_dimension_as_symbol(&LENGTH), "m");
    assert_eq!(format_dimension_as_symbol(&MASS), "kg");
    assert_eq!(format_dimension_as_symbol(&CURRENT), "A");
    assert_eq!(format_dimension_as_symbol(&TEMPERATURE), "K");
    assert_eq!(format_dimension_as_symbol(&LUMINOUS_INTENSITY), "cd");
    assert_eq!(format_dimension_as_symbol(&AMOUNT_OF_SUBSTANCE), "mol");
  }

  #[test]
  fn test_format_base_dimensions_from_components() {
    for base in BaseDimension::ALL {
      assert_eq!(format_dimension_as_symbol(&Dimension::<i64>::singleton(base)), base.symbol());
    }
  }

  #[test]
  fn test_format_named_derived_dimensions() {
    assert_eq!(format_dimension_as_symbol(&Dimension::<i64>::from_components(-2, 1, 1, 0, 0, 0, 0)), "N");
    assert_eq!(format_dimension_as_symbol(&FREQUENCY), "Hz");
    assert_eq!(format_dimension_as_symbol(&PRESSURE), "Pa");
    assert_eq!(format_dimension_as_symbol(&ENERGY), "J");
    assert_eq!(format_dimension_as_symbol(&POWER), "W");
    assert_eq!(format_dimension_as_symbol(&CHARGE), "C");
    assert_eq!(format_dimension_as_symbol(&VOLTAGE), "V");
    assert_eq!(format_dimension_as_symbol(&CAPACITANCE), "F");
    assert_eq!(format_dimension_as_symbol(&RESISTANCE), "Ω");
    assert_eq!(format_dimension_as_symbol(&CONDUCTANCE), "S");
    assert_eq!(format_dimension_as_symbol(&MAGNETIC_FLUX), "Wb");
    assert_eq!(format_dimension_as_symbol(&MAGNETIC_FLUX_DENSITY), "T");
    assert_eq!(format_dimension_as_symbol(&INDUCTANCE), "H");
    assert_eq!(format_dimension_as_symbol(&ILLUMINANCE), "lx");
    assert_eq!(format_dimension_as_symbol(&CATALYTIC_ACTIVITY), "kat");
  }

  #[test]
  fn test_format_composed() {
    assert_eq!(format_dimension_as_symbol(&Dimension::<i64>::from_components(-1, 1, 0, 0, 0, 0, 0)), "m/s");
    assert_eq!(format_dimension_as_symbol(&ACCELERATION), "m/s²");
    assert_eq!(format_dimension_as_symbol(&DENSITY), "kg/m³");
    assert_eq!(format_dimension_as_symbol(&AREA), "m²");
    assert_eq!(format_dimension_as_symbol(&MOMENTUM), "mkg/s");
    assert_eq!(format_dimension_as_symbol(&MOLAR_MASS), "kg/mol");
    assert_eq!(format_dimension_as_symbol(&ENTROPY), "m²kg/s²K");
  }

  #[test]
  fn test_format_denominator_only() {
    assert_eq!(format_dimension_as_symbol(&Dimension::<i64>::from_components(0, -1, 0, 0, 0, 0, 0)), "m");
    assert_eq!(format_dimension_as_symbol(&Dimension::<i64>::from_components(0, 0, 0, 0, -2, 0, 0)), "K²");
  }

  #[test]
  fn test_format_multi_digit_superscript() {
    assert_eq!(format_dimension_as_symbol(&Dimension::<i64>::from_components(0, 12, 0, 0, 0, 0, 0)), "m¹²");
    assert_eq!(format_dimension_as_symbol(&Dimension::<i64>::from_components(0, 0, 0, 0, 0, 0, -105)), "mol¹⁰⁵");
  }

  #[test]
  fn test_exponent_one_has_no_superscript() {
    let dim = Dimension::<i64>::from_components(-1, 0, 0, 1, 0, 0, 0);
    let rendered = format_dimension_as_symbol(&dim);
    assert_eq!(rendered, "A/s");
    assert!(!rendered.contains('¹'));
  }

  #[test]
  fn test_format_scalar_is_empty() {
    assert_eq!(format_dimension_as_symbol(&SCALAR_VALUE), "");
    assert_eq!(format_dimension_as_symbol(&Dimension::<i64>::default()), "");
  }

  #[test]
  fn test_format_rational_dimensions() {
    let force = Dimension::<Rational64>::from(FORCE);
    assert_eq!(format_dimension_as_symbol(&force), "N");
    let half = Rational64::new(1, 2);
    let zero = Rational64::from_integer(0);
    let sqrt_length = Dimension::from_components(zero, half, zero, zero, zero, zero, zero);
    assert_eq!(format_dimension_as_symbol(&sqrt_length), "m¹ᐟ²");
    let per_sqrt_second = Dimension::from_components(-half, zero, zero, zero, zero, zero, zero);
    assert_eq!(format_dimension_as_symbol(&per_sqrt_second), "s¹ᐟ²");
  }
}
