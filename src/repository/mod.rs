mod m3u_repository;

pub use self::m3u_repository::*;
