mod category;
mod channel;
mod playlist;
mod stats;
mod config;

pub use self::category::*;
pub use self::channel::*;
pub use self::playlist::*;
pub use self::stats::*;
pub use self::config::*;
