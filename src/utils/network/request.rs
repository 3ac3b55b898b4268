use crate::error::{input_err, CatalogError};
use crate::utils::{debug_if_enabled, file_reader, format_duration, get_file_path, sanitize_sensitive_info};
use log::error;
use path_clean::PathClean;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;
use url::Url;

pub const DEFAULT_USER_AGENT: &str = concat!("iptv-catalog/", env!("CARGO_PKG_VERSION"));

pub fn is_uri(url: &str) -> bool {
    Url::parse(url)
        .is_ok_and(|u| u.scheme().eq_ignore_ascii_case("file") || u.scheme().eq_ignore_ascii_case("http") || u.scheme().eq_ignore_ascii_case("https"))
}

/// Resolves a location found inside a playlist relative to the playlist's own location.
pub fn resolve_location(base: &str, location: &str) -> String {
    if is_uri(location) {
        return location.to_string();
    }
    if is_uri(base) {
        if let Some(resolved) = Url::parse(base).ok().and_then(|u| u.join(location).ok()) {
            return resolved.to_string();
        }
    }
    let location_path = Path::new(location);
    if location_path.is_absolute() {
        return location.to_string();
    }
    let base_dir = Path::new(base).parent().unwrap_or_else(|| Path::new(""));
    base_dir.join(location_path).clean().to_string_lossy().to_string()
}

// read local file content and return it as a string.
pub fn get_local_file_content(file_path: &Path) -> Result<String, std::io::Error> {
    let file = std::fs::File::open(file_path).map_err(|err| {
        std::io::Error::new(
            ErrorKind::NotFound,
            format!("Failed to open file: {}, {err:?}", file_path.display()),
        )
    })?;
    let mut content = String::new();
    file_reader(file)
        .read_to_string(&mut content)
        .map_err(|e| std::io::Error::other(format!("Failed to read file: {e}")))?;
    Ok(content)
}

pub fn create_client() -> Result<reqwest::blocking::Client, CatalogError> {
    reqwest::blocking::Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .build()
        .map_err(|err| input_err!("Failed to build http client: {err}"))
}

fn download_text_content(client: &reqwest::blocking::Client, url: &Url) -> Result<String, std::io::Error> {
    let response = client.get(url.clone()).send().map_err(std::io::Error::other)?;
    let status = response.status();
    if !status.is_success() {
        return Err(std::io::Error::other(format!("Request failed with status {status}")));
    }
    response.text().map_err(std::io::Error::other)
}

/// Loads playlist text from local files, `file://` and `http(s)://` urls.
///
/// The http client is created on the first remote request, a run
/// working only on local files never builds one.
pub struct InputFetcher {
    working_dir: String,
    client: Option<reqwest::blocking::Client>,
}

impl InputFetcher {
    pub fn new(working_dir: &str) -> Self {
        Self {
            working_dir: working_dir.to_string(),
            client: None,
        }
    }

    fn client(&mut self) -> Result<&reqwest::blocking::Client, CatalogError> {
        if self.client.is_none() {
            self.client = Some(create_client()?);
        }
        self.client.as_ref().ok_or_else(|| input_err!("Failed to build http client"))
    }

    pub fn get_input_text_content(&mut self, location: &str) -> Result<String, CatalogError> {
        debug_if_enabled!(
            "getting input text content working_dir: {}, url: {}",
            self.working_dir,
            sanitize_sensitive_info(location)
        );
        let start_time = Instant::now();

        let remote_url = if is_uri(location) { Url::parse(location).ok() } else { None };
        let result = if let Some(url) = remote_url {
            if url.scheme().eq_ignore_ascii_case("file") {
                match url.to_file_path() {
                    Ok(file_path) => get_local_file_content(&file_path),
                    Err(()) => Err(std::io::Error::other(format!("Unknown file {location}"))),
                }
            } else {
                let client = self.client()?;
                download_text_content(client, &url)
            }
        } else {
            match get_file_path(&self.working_dir, Some(PathBuf::from(location))) {
                Some(file_path) => get_local_file_content(&file_path),
                None => Err(std::io::Error::other(format!("Malformed location {location}"))),
            }
        };

        match result {
            Ok(content) => {
                debug_if_enabled!("Loading {} took {}", sanitize_sensitive_info(location), format_duration(start_time.elapsed()));
                Ok(content)
            }
            Err(err) => {
                let msg = format!("can't read input url: {} - {err}", sanitize_sensitive_info(location));
                error!("{msg}");
                Err(input_err!("{msg}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{is_uri, resolve_location, InputFetcher};
    use std::io::Write;

    #[test]
    fn test_is_uri() {
        assert!(is_uri("https://example.test/index.m3u"));
        assert!(is_uri("file:///tmp/index.m3u"));
        assert!(!is_uri("channels/us.m3u"));
        assert!(!is_uri("/tmp/index.m3u"));
    }

    #[test]
    fn test_resolve_location() {
        assert_eq!(resolve_location("https://example.test/lists/index.m3u", "channels/us.m3u"), "https://example.test/lists/channels/us.m3u");
        assert_eq!(resolve_location("https://example.test/lists/index.m3u", "http://other.test/a.m3u"), "http://other.test/a.m3u");
        assert_eq!(resolve_location("/srv/iptv/index.m3u", "channels/us.m3u"), "/srv/iptv/channels/us.m3u");
        assert_eq!(resolve_location("/srv/iptv/index.m3u", "../other/de.m3u"), "/srv/other/de.m3u");
        assert_eq!(resolve_location("/srv/iptv/index.m3u", "/data/fr.m3u"), "/data/fr.m3u");
    }

    #[test]
    fn test_get_local_content() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("list.m3u");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "#EXTM3U").unwrap();
        drop(file);

        let mut fetcher = InputFetcher::new(tmp.path().to_str().unwrap());
        assert_eq!(fetcher.get_input_text_content("list.m3u").unwrap(), "#EXTM3U\n");
        assert_eq!(fetcher.get_input_text_content(path.to_str().unwrap()).unwrap(), "#EXTM3U\n");
        let file_url = url::Url::from_file_path(&path).unwrap();
        assert_eq!(fetcher.get_input_text_content(file_url.as_str()).unwrap(), "#EXTM3U\n");
        assert!(fetcher.get_input_text_content("missing.m3u").is_err());
    }
}
