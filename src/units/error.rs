
use thiserror::Error;

use std::fmt::Debug;

/// Error produced when adding or subtracting two values whose
/// dimensions differ. This always indicates a logic error in the
/// caller; there is no way to recover a meaningful sum.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("can't add/subtract values with different units")]
pub struct UnitMismatch<D> {
  /// The dimension of the left-hand operand.
  pub left: D,
  /// The dimension of the right-hand operand.
  pub right: D,
}

impl<D: Debug> UnitMismatch<D> {
  pub fn new(left: D, right: D) -> Self {
    tracing::debug!(?left, ?right, "dimension mismatch in addition/subtraction");
    Self { left, right }
  }
}
