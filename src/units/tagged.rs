
use super::dimension::{Dimension, Exponent};
use super::error::UnitMismatch;

use num::One;
use serde::{Serialize, Deserialize};

use std::fmt::{self, Formatter, Display, Debug};
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub, Mul, Div, Neg};

/// Hashed ahead of the contents of every [`UnitAware`], so that a
/// tagged value never hashes the same as its bare payload.
pub const UNIT_AWARE_HASH_SALT: u64 = 0x5349_5f55_4e49_5453;

/// A scalar quantity, tagged with the dimension it is measured in.
///
/// The payload `V` can be any numerical type. The dimension `D` is a
/// [`Dimension`] by default, but any type which multiplies and
/// divides like one (see [`DimensionKind`]) may be used. Values with
/// different `V` or `D` types can never be combined.
///
/// Addition and subtraction require both operands to have the same
/// dimension and produce a [`UnitMismatch`] otherwise. Multiplication
/// and division always succeed and combine the dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitAware<V, D = Dimension> {
  value: V,
  dimension: D,
}

/// A type which can serve as the dimension of a [`UnitAware`]. This
/// trait should not be implemented by hand; any type with the
/// required operations implements it automatically.
pub trait DimensionKind: Clone + PartialEq + Debug + Mul<Output = Self> + Div<Output = Self> {}

impl<D> DimensionKind for D
where D: Clone + PartialEq + Debug + Mul<Output = D> + Div<Output = D> {}

impl<V, D> UnitAware<V, D> {
  pub fn new(value: V, dimension: D) -> Self {
    Self { value, dimension }
  }

  pub fn dimensionless(value: V) -> Self
  where D: One {
    Self::new(value, D::one())
  }

  pub fn value(&self) -> &V {
    &self.value
  }

  pub fn dimension(&self) -> &D {
    &self.dimension
  }

  pub fn into_parts(self) -> (V, D) {
    (self.value, self.dimension)
  }
}

impl<V, D: DimensionKind> UnitAware<V, D> {
  /// Adds two values of the same dimension.
  pub fn try_add(self, other: Self) -> Result<Self, UnitMismatch<D>>
  where V: Add<Output = V> {
    if self.dimension == other.dimension {
      Ok(Self::new(self.value + other.value, self.dimension))
    } else {
      Err(UnitMismatch::new(self.dimension, other.dimension))
    }
  }

  /// Subtracts two values of the same dimension.
  pub fn try_sub(self, other: Self) -> Result<Self, UnitMismatch<D>>
  where V: Sub<Output = V> {
    if self.dimension == other.dimension {
      Ok(Self::new(self.value - other.value, self.dimension))
    } else {
      Err(UnitMismatch::new(self.dimension, other.dimension))
    }
  }
}

impl<V, D> Add for UnitAware<V, D>
where V: Add<Output = V>,
      D: DimensionKind {
  type Output = Result<Self, UnitMismatch<D>>;

  fn add(self, rhs: Self) -> Self::Output {
    self.try_add(rhs)
  }
}

impl<V, D> Sub for UnitAware<V, D>
where V: Sub<Output = V>,
      D: DimensionKind {
  type Output = Result<Self, UnitMismatch<D>>;

  fn sub(self, rhs: Self) -> Self::Output {
    self.try_sub(rhs)
  }
}

impl<V, D> Mul for UnitAware<V, D>
where V: Mul<Output = V>,
      D: DimensionKind {
  type Output = Self;

  fn mul(self, rhs: Self) -> Self {
    Self::new(self.value * rhs.value, self.dimension * rhs.dimension)
  }
}

/// Divides the payloads and the dimensions. A payload-level failure,
/// such as integer division by zero, is the payload type's own
/// behavior and is not intercepted.
impl<V, D> Div for UnitAware<V, D>
where V: Div<Output = V>,
      D: DimensionKind {
  type Output = Self;

  fn div(self, rhs: Self) -> Self {
    Self::new(self.value / rhs.value, self.dimension / rhs.dimension)
  }
}

impl<V: Neg<Output = V>, D> Neg for UnitAware<V, D> {
  type Output = Self;

  fn neg(self) -> Self {
    Self::new(- self.value, self.dimension)
  }
}

impl<V: Hash, D: Hash> Hash for UnitAware<V, D> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    UNIT_AWARE_HASH_SALT.hash(state);
    self.value.hash(state);
    self.dimension.hash(state);
  }
}

/// Displays the payload followed by the SI symbol of the dimension,
/// e.g. `9.8 m/s²`. Dimensionless values display only the payload.
/// Formatting flags such as precision apply to the payload.
impl<V: Display, E: Exponent> Display for UnitAware<V, Dimension<E>> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    Display::fmt(&self.value, f)?;
    if !self.dimension.is_dimensionless() {
      write!(f, " {}", self.dimension)?;
    }
    Ok(())
  }
}
