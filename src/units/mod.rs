
//! Dimension vectors over the seven SI base dimensions, and values
//! tagged with them.

pub mod dimension;
pub mod error;
pub mod named;
pub mod si;
pub mod tagged;

pub use dimension::{Dimension, BaseDimension, Exponent, NDIMS};
pub use error::UnitMismatch;
pub use si::format_dimension_as_symbol;
pub use tagged::{UnitAware, DimensionKind};

/// Looks up a named dimension by its snake_case name, such as
/// `"magnetic_flux_density"`.
pub fn dimension_by_name(name: &str) -> Option<&'static Dimension> {
  named::NAMED_DIMENSIONS.get(name)
}
