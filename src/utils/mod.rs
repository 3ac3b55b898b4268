mod sys_utils;
mod file;
mod network;
mod step_measure;
mod logging;
mod constants;
mod default_utils;

pub use self::logging::*;

#[macro_export]
macro_rules! debug_if_enabled {
    ($fmt:expr, $( $args:expr ),*) => {
        if log::log_enabled!(log::Level::Debug) {
            log::log!(log::Level::Debug, $fmt, $($args),*);
        }
    };

    ($txt:expr) => {
        if log::log_enabled!(log::Level::Debug) {
            log::log!(log::Level::Debug, $txt);
        }
    };
}

pub use debug_if_enabled;

pub use self::sys_utils::*;
pub use self::file::*;
pub use self::network::*;
pub use self::step_measure::*;
pub use self::constants::*;
pub use self::default_utils::*;
