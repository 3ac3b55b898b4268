use crate::error::{create_catalog_error, CatalogError, CatalogErrorKind};
use crate::model::Config;
use crate::utils::{file_reader, path_exists, CONSTANTS};
use log::{error, info};
use std::env;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

pub fn resolve_env_var(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    CONSTANTS.re_env_var.replace_all(value, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_else(|e| {
            error!("Could not resolve env var '{var_name}': {e}");
            format!("${{env:{var_name}}}")
        })
    }).to_string()
}

/// Reads a config file with `${env:VAR}` placeholders resolved.
pub fn read_config_text(config_file: &str) -> Result<String, CatalogError> {
    let file = File::open(config_file)
        .map_err(|err| create_catalog_error!(CatalogErrorKind::Config, "cant open config file {config_file}: {err}"))?;
    let mut content = String::new();
    file_reader(file).read_to_string(&mut content)
        .map_err(|err| create_catalog_error!(CatalogErrorKind::Config, "cant read config file {config_file}: {err}"))?;
    Ok(resolve_env_var(&content))
}

/// Reads and prepares the config. Without a config file the defaults are used.
/// `index` and `output_dir` override the config values before paths are resolved.
pub fn read_config(config_file: Option<&str>, index: Option<&String>, output_dir: Option<&String>) -> Result<Config, CatalogError> {
    let mut config = match config_file {
        Some(file) => {
            let text = read_config_text(file)?;
            serde_yaml::from_str::<Config>(&text)
                .map_err(|err| create_catalog_error!(CatalogErrorKind::Config, "cant parse config file {file}: {err}"))?
        }
        None => {
            info!("No config file, using defaults");
            Config::default()
        }
    };
    if let Some(index) = index {
        config.index = resolve_env_var(index);
    }
    if let Some(output_dir) = output_dir {
        config.output_dir = resolve_env_var(output_dir);
    }
    config.prepare()?;
    Ok(config)
}

/// Returns the given config file or the default one when it exists in the current directory.
pub fn get_config_file_path(config_file: Option<&String>) -> Option<String> {
    config_file.map(|f| resolve_env_var(f)).or_else(|| {
        let default_path = PathBuf::from(crate::utils::CONFIG_FILE);
        if path_exists(&default_path) {
            Some(default_path.to_string_lossy().to_string())
        } else {
            None
        }
    })
}
