use crate::error::{create_catalog_error_result, handle_catalog_error_result_list, CatalogError, CatalogErrorKind};
use crate::model::{Category, CategoryCatalog, LogConfig};
use crate::utils::{default_index, default_output_dir, get_file_path, is_uri, OTHER_CATEGORY_ID};
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub working_dir: String,
    #[serde(default = "default_index")]
    pub index: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<LogConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            working_dir: String::new(),
            index: default_index(),
            output_dir: default_output_dir(),
            categories: None,
            log: None,
        }
    }
}

fn is_file_name_safe(id: &str) -> bool {
    !id.starts_with('.') && id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
}

fn check_category(category: &Category, ids: &mut HashSet<String>) -> Result<(), String> {
    let id = category.id.as_str();
    if id.trim().is_empty() {
        return Err(format!("category id is empty for '{}'", category.name));
    }
    if !is_file_name_safe(id) {
        return Err(format!("category id '{id}' can't be used as file name"));
    }
    if id != id.to_lowercase() {
        return Err(format!("category id '{id}' has to be lowercase"));
    }
    if id == OTHER_CATEGORY_ID {
        return Err(format!("category id '{OTHER_CATEGORY_ID}' is reserved"));
    }
    if !ids.insert(id.to_string()) {
        return Err(format!("category id '{id}' is not unique"));
    }
    Ok(())
}

impl Config {
    /// Resolves relative locations against the working directory and validates the categories.
    pub fn prepare(&mut self) -> Result<(), CatalogError> {
        if self.working_dir.trim().is_empty() {
            self.working_dir = std::env::current_dir()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_else(|_| String::from("."));
        }
        if self.index.trim().is_empty() {
            return create_catalog_error_result!(CatalogErrorKind::Config, "index location is empty");
        }
        if self.output_dir.trim().is_empty() {
            return create_catalog_error_result!(CatalogErrorKind::Config, "output directory is empty");
        }
        if !is_uri(&self.index) {
            if let Some(index_path) = get_file_path(&self.working_dir, Some(PathBuf::from(&self.index))) {
                self.index = index_path.to_string_lossy().to_string();
            }
        }
        if let Some(output_path) = get_file_path(&self.working_dir, Some(PathBuf::from(&self.output_dir))) {
            self.output_dir = output_path.to_string_lossy().to_string();
        }
        if let Some(categories) = self.categories.as_ref() {
            let mut ids = HashSet::new();
            handle_catalog_error_result_list!(CatalogErrorKind::Config, categories.iter().map(|c| check_category(c, &mut ids)));
        }
        Ok(())
    }

    pub fn category_catalog(&self) -> CategoryCatalog {
        self.categories.as_ref()
            .map_or_else(CategoryCatalog::default, |categories| CategoryCatalog::new(categories.clone()))
    }

    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }
}
