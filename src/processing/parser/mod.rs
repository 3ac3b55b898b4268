mod m3u;
mod index;
mod language;

pub use self::m3u::*;
pub use self::index::*;
pub use self::language::*;
