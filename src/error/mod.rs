mod catalog_error;

pub use self::catalog_error::*;
