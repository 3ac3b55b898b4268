use std::error::Error;
use std::fmt::{Display, Formatter, Result};
use crate::utils::sanitize_sensitive_info;

#[macro_export]
macro_rules! create_catalog_error {
    ($kind: expr, $($arg:tt)*) => {
        $crate::error::CatalogError::new($kind, format!($($arg)*))
    }
}

pub use create_catalog_error;

#[macro_export]
macro_rules! create_catalog_error_result {
    ($kind: expr, $($arg:tt)*) => {
        Err($crate::error::CatalogError::new($kind, format!($($arg)*)))
    }
}

pub use create_catalog_error_result;

#[macro_export]
macro_rules! input_err {
    // This matches any arguments (format string + variables) and forwards them
    // to format!, then wraps them in the input error constructor.
    ($($arg:tt)*) => {
        $crate::error::CatalogError::new($crate::error::CatalogErrorKind::Input, format!($($arg)*))
    };
}

pub use input_err;

#[macro_export]
macro_rules! output_err {
    ($($arg:tt)*) => {
        $crate::error::CatalogError::new($crate::error::CatalogErrorKind::Output, format!($($arg)*))
    };
}

pub use output_err;

#[macro_export]
macro_rules! handle_catalog_error_result_list {
    ($kind:expr, $result: expr) => {
        let errors = $result
            .filter_map(|result| {
                if let Err(err) = result {
                    Some(err.to_string())
                } else {
                    None
                }
            })
            .collect::<Vec<String>>();
        if !&errors.is_empty() {
            return Err($crate::error::CatalogError::new($kind, errors.join("\n")));
        }
    }
}

pub use handle_catalog_error_result_list;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CatalogErrorKind {
    // config file or command line
    Config,
    // index and playlist sources
    Input,
    // generated files
    Output,
}

impl Display for CatalogErrorKind {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            Self::Config => "config",
            Self::Input => "input",
            Self::Output => "output",
        };
        write!(f, "{text}")
    }
}

#[derive(Debug)]
pub struct CatalogError {
    pub kind: CatalogErrorKind,
    pub message: String,
}

impl CatalogError {
    pub fn new(kind: CatalogErrorKind, message: String) -> Self {
        let message = sanitize_sensitive_info(&message).into_owned();
        Self { kind, message }
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "Catalog {} error: {}", self.kind, self.message)
    }
}

impl Error for CatalogError {}
