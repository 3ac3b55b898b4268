use crate::utils::{DEFAULT_INDEX_FILE, DEFAULT_OUTPUT_DIR};

pub const fn default_as_true() -> bool { true }

pub fn default_index() -> String { DEFAULT_INDEX_FILE.to_string() }

pub fn default_output_dir() -> String { DEFAULT_OUTPUT_DIR.to_string() }
