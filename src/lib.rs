
pub mod codegen;
pub mod units;
pub mod util;
