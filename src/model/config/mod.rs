mod base;
mod log;

pub use self::base::*;
pub use self::log::*;
