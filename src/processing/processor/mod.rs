mod catalog;
mod sort;
mod generator;

pub use self::catalog::*;
pub use self::sort::*;
pub use self::generator::*;
