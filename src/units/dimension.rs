
use super::si::{format_dimension_as_symbol, superscript};
use crate::util::{zip_with, try_map_array};

use num::{One, Zero, Signed};
use num::rational::Rational64;
use serde::{Serialize, Deserialize};

use std::ops::{Mul, Div};
use std::fmt::{self, Formatter, Display, Debug};
use std::hash::Hash;

/// A dimension is a formal product and quotient of the seven
/// [`BaseDimension`] values, stored as one exponent per base
/// dimension.
///
/// The exponents are stored in the order given by
/// [`BaseDimension::ALL`]. That order is part of the public contract
/// of this type (it is how the vector serializes and how
/// [`Dimension::new`] reads its argument) and must never change.
///
/// Exponents default to `i64`. Use [`Rational64`] exponents when
/// fractional powers (such as the square root of a length) are
/// needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dimension<E = i64> {
  dims: [E; NDIMS],
}

/// Dimensions available for units to represent. Every unit represents
/// a formal product or quotient of zero or more dimensions.
///
/// These are simply the seven base SI units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseDimension {
  Time,
  Length,
  Mass,
  Current,
  Temperature,
  LuminousIntensity,
  AmountOfSubstance,
}

/// The operations a type must support to be used as the exponent of
/// a [`Dimension`].
pub trait Exponent: Clone + Eq + Hash + Debug + Signed {
  /// The value of this exponent as an integer, if it is integral.
  fn as_integer(&self) -> Option<i64>;

  /// Appends the magnitude of this exponent to `out` in Unicode
  /// superscript characters. A magnitude of exactly one appends
  /// nothing.
  fn write_superscript(&self, out: &mut String);
}

pub const NDIMS: usize = 7;

impl<E> Dimension<E> {
  /// Constructs a dimension from its exponents, in the order of
  /// [`BaseDimension::ALL`].
  pub const fn new(dims: [E; NDIMS]) -> Self {
    Self { dims }
  }

  pub fn from_components(
    time: E,
    length: E,
    mass: E,
    current: E,
    temperature: E,
    luminous_intensity: E,
    amount_of_substance: E,
  ) -> Self {
    Self::new([time, length, mass, current, temperature, luminous_intensity, amount_of_substance])
  }

  /// Replaces the exponent of one base dimension. Starting from
  /// [`Dimension::default`], this builds a dimension from only the
  /// components named, e.g.
  /// `Dimension::default().with(BaseDimension::Time, -2).with(BaseDimension::Length, 1)`.
  pub fn with(mut self, base: BaseDimension, exponent: E) -> Self {
    self.dims[base.dimension_index()] = exponent;
    self
  }

  pub fn get(&self, base: BaseDimension) -> &E {
    &self.dims[base.dimension_index()]
  }

  pub fn as_array(&self) -> &[E; NDIMS] {
    &self.dims
  }

  pub fn into_array(self) -> [E; NDIMS] {
    self.dims
  }
}

impl<E: Exponent> Dimension<E> {
  pub fn singleton(base: BaseDimension) -> Self {
    let mut dims: [E; NDIMS] = std::array::from_fn(|_| E::zero());
    dims[base.dimension_index()] = E::one();
    Self { dims }
  }

  /// The nonzero exponents of this dimension, in the order of
  /// [`BaseDimension::ALL`].
  pub fn components(&self) -> impl Iterator<Item = (BaseDimension, &E)> + '_ {
    BaseDimension::ALL.iter()
      .copied()
      .zip(self.dims.iter())
      .filter(|(_, x)| !x.is_zero())
  }

  /// Whether this is the scalar dimension, i.e. every exponent is
  /// zero.
  pub fn is_dimensionless(&self) -> bool {
    self.dims.iter().all(Zero::is_zero)
  }

  /// The dimension of the product of two quantities: the
  /// component-wise sum of the exponents.
  pub fn combine_mul(&self, other: &Self) -> Self {
    self.clone() * other.clone()
  }

  /// The dimension of the quotient of two quantities: the
  /// component-wise difference of the exponents.
  pub fn combine_div(&self, other: &Self) -> Self {
    self.clone() / other.clone()
  }

  /// Converts to integer exponents, if every exponent is integral.
  pub fn to_integer(&self) -> Option<Dimension<i64>> {
    try_map_array(&self.dims, E::as_integer).map(Dimension::new)
  }
}

impl BaseDimension {
  pub const ALL: [BaseDimension; NDIMS] = [
    BaseDimension::Time,
    BaseDimension::Length,
    BaseDimension::Mass,
    BaseDimension::Current,
    BaseDimension::Temperature,
    BaseDimension::LuminousIntensity,
    BaseDimension::AmountOfSubstance,
  ];

  /// The order in which base dimensions appear in a composed SI
  /// symbol. Length comes first, so momentum renders as `mkg/s`.
  /// This differs from [`BaseDimension::ALL`].
  pub const SI_DISPLAY_ORDER: [BaseDimension; NDIMS] = [
    BaseDimension::Length,
    BaseDimension::Mass,
    BaseDimension::Time,
    BaseDimension::Current,
    BaseDimension::Temperature,
    BaseDimension::AmountOfSubstance,
    BaseDimension::LuminousIntensity,
  ];

  fn dimension_index(self) -> usize {
    match self {
      BaseDimension::Time => 0,
      BaseDimension::Length => 1,
      BaseDimension::Mass => 2,
      BaseDimension::Current => 3,
      BaseDimension::Temperature => 4,
      BaseDimension::LuminousIntensity => 5,
      BaseDimension::AmountOfSubstance => 6,
    }
  }

  /// The symbol of the SI base unit for this dimension.
  pub fn symbol(self) -> &'static str {
    match self {
      BaseDimension::Time => "s",
      BaseDimension::Length => "m",
      BaseDimension::Mass => "kg",
      BaseDimension::Current => "A",
      BaseDimension::Temperature => "K",
      BaseDimension::LuminousIntensity => "cd",
      BaseDimension::AmountOfSubstance => "mol",
    }
  }
}

impl Exponent for i64 {
  fn as_integer(&self) -> Option<i64> {
    Some(*self)
  }

  fn write_superscript(&self, out: &mut String) {
    let magnitude = self.unsigned_abs();
    if magnitude != 1 {
      out.push_str(&superscript(magnitude));
    }
  }
}

impl Exponent for Rational64 {
  fn as_integer(&self) -> Option<i64> {
    if self.is_integer() {
      Some(self.to_integer())
    } else {
      None
    }
  }

  fn write_superscript(&self, out: &mut String) {
    if let Some(n) = self.as_integer() {
      n.write_superscript(out);
    } else {
      // Ratio keeps its denominator positive.
      out.push_str(&superscript(self.numer().unsigned_abs()));
      out.push('ᐟ');
      out.push_str(&superscript(self.denom().unsigned_abs()));
    }
  }
}

impl<E: Exponent> Default for Dimension<E> {
  fn default() -> Self {
    Self { dims: std::array::from_fn(|_| E::zero()) }
  }
}

impl<E: Exponent> From<BaseDimension> for Dimension<E> {
  fn from(base: BaseDimension) -> Self {
    Dimension::singleton(base)
  }
}

impl From<Dimension<i64>> for Dimension<Rational64> {
  fn from(dim: Dimension<i64>) -> Self {
    Dimension { dims: dim.dims.map(Rational64::from_integer) }
  }
}

impl<E: Exponent> Mul for Dimension<E> {
  type Output = Self;

  fn mul(self, rhs: Self) -> Self {
    Dimension {
      dims: zip_with(self.dims, rhs.dims, |a, b| a + b),
    }
  }
}

impl<E: Exponent> Mul<BaseDimension> for Dimension<E> {
  type Output = Self;

  fn mul(self, rhs: BaseDimension) -> Self {
    self * Dimension::singleton(rhs)
  }
}

impl<E: Exponent> Div for Dimension<E> {
  type Output = Self;

  fn div(self, rhs: Self) -> Self {
    Dimension {
      dims: zip_with(self.dims, rhs.dims, |a, b| a - b),
    }
  }
}

impl<E: Exponent> Div<BaseDimension> for Dimension<E> {
  type Output = Self;

  fn div(self, rhs: BaseDimension) -> Self {
    self / Dimension::singleton(rhs)
  }
}

impl Mul for BaseDimension {
  type Output = Dimension;

  fn mul(self, rhs: Self) -> Dimension {
    Dimension::singleton(self) * Dimension::singleton(rhs)
  }
}

impl Div for BaseDimension {
  type Output = Dimension;

  fn div(self, rhs: Self) -> Dimension {
    Dimension::singleton(self) / Dimension::singleton(rhs)
  }
}

impl<E: Exponent> One for Dimension<E> {
  fn one() -> Self {
    Self::default()
  }

  fn is_one(&self) -> bool {
    self.is_dimensionless()
  }
}

impl Display for BaseDimension {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      BaseDimension::Time => write!(f, "time"),
      BaseDimension::Length => write!(f, "length"),
      BaseDimension::Mass => write!(f, "mass"),
      BaseDimension::Current => write!(f, "current"),
      BaseDimension::Temperature => write!(f, "temperature"),
      BaseDimension::LuminousIntensity => write!(f, "luminous intensity"),
      BaseDimension::AmountOfSubstance => write!(f, "amount of substance"),
    }
  }
}

/// Displays as the SI symbol. See [`format_dimension_as_symbol`].
impl<E: Exponent> Display for Dimension<E> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", format_dimension_as_symbol(self))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ratio(n: i64, d: i64) -> Rational64 {
    Rational64::new(n, d)
  }

  #[test]
  fn test_singleton() {
    let value = Dimension::<i64>::singleton(BaseDimension::Time);
    assert_eq!(value.dims, [1, 0, 0, 0, 0, 0, 0]);
    let value = Dimension::<i64>::singleton(BaseDimension::AmountOfSubstance);
    assert_eq!(value.dims, [0, 0, 0, 0, 0, 0, 1]);
  }

  #[test]
  fn test_from_components_order() {
    let value = Dimension::<i64>::from_components(1, 2, 3, 4, 5, 6, 7);
    assert_eq!(value, Dimension::<i64>::new([1, 2, 3, 4, 5, 6, 7]));
    assert_eq!(*value.get(BaseDimension::Time), 1);
    assert_eq!(*value.get(BaseDimension::Length), 2);
    assert_eq!(*value.get(BaseDimension::Mass), 3);
    assert_eq!(*value.get(BaseDimension::Current), 4);
    assert_eq!(*value.get(BaseDimension::Temperature), 5);
    assert_eq!(*value.get(BaseDimension::LuminousIntensity), 6);
    assert_eq!(*value.get(BaseDimension::AmountOfSubstance), 7);
  }

  #[test]
  fn test_with_leaves_other_components_zero() {
    let force = Dimension::<i64>::default()
      .with(BaseDimension::Time, -2)
      .with(BaseDimension::Length, 1)
      .with(BaseDimension::Mass, 1);
    assert_eq!(force, crate::units::named::FORCE);
    assert_eq!(force.to_string(), "N");

    let length = Dimension::<i64>::default().with(BaseDimension::Length, 12);
    assert_eq!(length.dims, [0, 12, 0, 0, 0, 0, 0]);
    assert_eq!(length.to_string(), "m¹²");
  }

  #[test]
  fn test_with_overwrites() {
    let value = Dimension::<i64>::singleton(BaseDimension::Current).with(BaseDimension::Current, -3);
    assert_eq!(value.dims, [0, 0, 0, -3, 0, 0, 0]);
  }

  #[test]
  fn test_default_is_dimensionless() {
    assert_eq!(Dimension::<i64>::default().dims, [0; NDIMS]);
    assert!(Dimension::<i64>::default().is_dimensionless());
    assert!(Dimension::<i64>::one().is_one());
    assert!(!Dimension::<i64>::singleton(BaseDimension::Mass).is_dimensionless());
  }

  #[test]
  fn test_mul() {
    let a = Dimension::<i64>::new([1, 2, 3, 4, 5, 6, 7]);
    let b = Dimension::<i64>::new([-1, 2, 2, 2, 10, 10, 10]);
    assert_eq!(
      a * b,
      Dimension::<i64>::new([0, 4, 5, 6, 15, 16, 17]),
    );
  }

  #[test]
  fn test_div() {
    let a = Dimension::<i64>::new([1, 2, 3, 4, 5, 6, 7]);
    let b = Dimension::<i64>::new([-1, 2, 2, 2, 10, 10, 10]);
    assert_eq!(
      a / b,
      Dimension::<i64>::new([2, 0, 1, 2, -5, -4, -3]),
    );
  }

  #[test]
  fn test_combine_does_not_consume() {
    let length = Dimension::<i64>::singleton(BaseDimension::Length);
    let time = Dimension::<i64>::singleton(BaseDimension::Time);
    let velocity = length.combine_div(&time);
    assert_eq!(velocity, Dimension::<i64>::new([-1, 1, 0, 0, 0, 0, 0]));
    assert_eq!(velocity.combine_mul(&time), length);
  }

  #[test]
  fn test_base_dimension_arithmetic() {
    use BaseDimension::*;
    assert_eq!(Length / Time, Dimension::<i64>::new([-1, 1, 0, 0, 0, 0, 0]));
    assert_eq!(Length * Length, Dimension::<i64>::new([0, 2, 0, 0, 0, 0, 0]));
    assert_eq!((Length / Time) / Time * Mass, Dimension::<i64>::new([-2, 1, 1, 0, 0, 0, 0]));
  }

  #[test]
  fn test_components() {
    let dim = Dimension::<i64>::new([-2, 1, 1, 0, 0, 0, 0]);
    let components: Vec<_> = dim.components().map(|(base, x)| (base, *x)).collect();
    assert_eq!(components, vec![
      (BaseDimension::Time, -2),
      (BaseDimension::Length, 1),
      (BaseDimension::Mass, 1),
    ]);
  }

  #[test]
  fn test_rational_exponents() {
    let sqrt_length = Dimension::new([
      ratio(0, 1), ratio(1, 2), ratio(0, 1), ratio(0, 1), ratio(0, 1), ratio(0, 1), ratio(0, 1),
    ]);
    let length = Dimension::<Rational64>::from(Dimension::<i64>::singleton(BaseDimension::Length));
    assert_eq!(sqrt_length * sqrt_length, length);
    assert_eq!(sqrt_length.to_integer(), None);
    assert_eq!((sqrt_length * sqrt_length).to_integer(), Some(Dimension::singleton(BaseDimension::Length)));
  }

  #[test]
  fn test_exponent_superscripts() {
    let mut out = String::new();
    1i64.write_superscript(&mut out);
    assert_eq!(out, "");
    (-3i64).write_superscript(&mut out);
    assert_eq!(out, "³");
    let mut out = String::new();
    ratio(-3, 2).write_superscript(&mut out);
    assert_eq!(out, "³ᐟ²");
    let mut out = String::new();
    ratio(4, 2).write_superscript(&mut out);
    assert_eq!(out, "²");
  }

  #[test]
  fn test_display_base_dimension() {
    assert_eq!(BaseDimension::LuminousIntensity.to_string(), "luminous intensity");
    assert_eq!(BaseDimension::Time.to_string(), "time");
  }

  #[test]
  fn test_display_uses_si_symbol() {
    assert_eq!(Dimension::<i64>::singleton(BaseDimension::Mass).to_string(), "kg");
    assert_eq!(Dimension::<i64>::new([-1, 1, 0, 0, 0, 0, 0]).to_string(), "m/s");
  }

  #[test]
  fn test_serializes_as_array() {
    let dim = Dimension::<i64>::new([-2, 1, 1, 0, 0, 0, 0]);
    assert_eq!(serde_json::to_string(&dim).unwrap(), "[-2,1,1,0,0,0,0]");
    let parsed: Dimension = serde_json::from_str("[0,0,0,0,1,0,0]").unwrap();
    assert_eq!(parsed, Dimension::singleton(BaseDimension::Temperature));
  }
}
