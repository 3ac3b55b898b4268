use regex::Regex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::LazyLock;
use std::borrow::Cow;

pub const CONFIG_FILE: &str = "config.yml";
pub const DEFAULT_INDEX_FILE: &str = "index.m3u";
pub const DEFAULT_OUTPUT_DIR: &str = ".gh-pages";

pub const M3U_HEADER: &str = "#EXTM3U";
pub const UNDEFINED_KEY: &str = "undefined";
pub const OTHER_CATEGORY_ID: &str = "other";

pub struct Constants {
    pub re_credentials: Regex,
    pub re_url_userinfo: Regex,
    pub re_env_var: Regex,
    pub re_language_code: Regex,
    pub sanitize: AtomicBool,
}

pub static CONSTANTS: LazyLock<Constants> = LazyLock::new(||
    Constants {
        re_credentials: Regex::new(r"((username|password|token)=)[^&]*").unwrap(),
        re_url_userinfo: Regex::new(r"(://)[^/@\s]+@").unwrap(),
        re_env_var: Regex::new(r"\$\{env:(?P<var>[a-zA-Z_][a-zA-Z0-9_]*)}").unwrap(),
        re_language_code: Regex::new(r"^[a-z]{2,3}$").unwrap(),
        sanitize: AtomicBool::new(true),
    }
);

pub fn set_sanitize_sensitive_info(value: bool) {
    CONSTANTS.sanitize.store(value, Ordering::Relaxed);
}

pub fn sanitize_sensitive_info(query: &str) -> Cow<'_, str> {
    if !CONSTANTS.sanitize.load(Ordering::Relaxed) {
        return Cow::Borrowed(query);
    }

    let mut result = query.to_owned();

    for (re, replacement) in &[
        (&CONSTANTS.re_credentials, "$1***"),
        (&CONSTANTS.re_url_userinfo, "$1***@"),
    ] {
        result = re.replace_all(&result, *replacement).into_owned();
    }
    Cow::Owned(result)
}
