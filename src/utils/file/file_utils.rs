use crate::error::{output_err, CatalogError};
use crate::utils::debug_if_enabled;
use path_clean::PathClean;
use std::fs;
use std::path::{Path, PathBuf};

pub const IO_BUFFER_SIZE: usize = 256 * 1024; // 256kb

pub fn file_writer<W>(w: W) -> std::io::BufWriter<W>
where
    W: std::io::Write,
{
    std::io::BufWriter::with_capacity(IO_BUFFER_SIZE, w)
}

pub fn file_reader<R>(r: R) -> std::io::BufReader<R>
where
    R: std::io::Read,
{
    std::io::BufReader::with_capacity(IO_BUFFER_SIZE, r)
}

pub fn get_file_path(wd: &str, path: Option<PathBuf>) -> Option<PathBuf> {
    path.map(|p| if p.is_relative() {
        let pb = PathBuf::from(wd);
        pb.join(&p).clean()
    } else {
        p
    })
}

pub fn path_exists(file_path: &Path) -> bool {
    if let Ok(metadata) = fs::metadata(file_path) {
        return metadata.is_file();
    }
    false
}

/// Creates the directory and all missing parents. Existing directories are left untouched.
pub fn create_dir(path: &Path) -> Result<(), CatalogError> {
    debug_if_enabled!("creating directory {}", path.display());
    fs::create_dir_all(path)
        .map_err(|err| output_err!("Can't create directory {} - {err}", path.display()))
}

/// Creates or truncates the file and writes the given content.
pub fn create_file(path: &Path, content: &str) -> Result<(), CatalogError> {
    fs::write(path, content)
        .map_err(|err| output_err!("Can't write file {} - {err}", path.display()))
}
