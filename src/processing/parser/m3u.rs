use crate::error::CatalogError;
use crate::model::{Channel, Country, HttpOptions, Playlist, PlaylistSource, TvgInfo};
use crate::processing::parser::parse_languages;
use crate::utils::{debug_if_enabled, sanitize_sensitive_info, InputFetcher, M3U_HEADER};
use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct M3uEntryHeader {
    pub title: String,
    pub id: String,
    pub name: String,
    pub epg_url: String,
    pub logo: String,
    pub country: String,
    pub language: String,
    pub group: String,
}

#[derive(Debug, Clone, Default)]
pub struct M3uEntry {
    pub header: M3uEntryHeader,
    pub http: HttpOptions,
    pub url: String,
}

fn take_stack(stack: &mut String) -> Option<String> {
    if stack.is_empty() {
        None
    } else {
        let result = (*stack).clone();
        stack.clear();
        Some(result)
    }
}

// attribute names end at '=', a whitespace or the title separator
fn token_till(stack: &mut String, it: &mut Peekable<Chars>) -> Option<String> {
    while let Some(&ch) = it.peek() {
        if ch == '=' || ch == ',' || ch.is_whitespace() {
            break;
        }
        stack.push(ch);
        it.next();
    }
    take_stack(stack)
}

fn token_value(stack: &mut String, it: &mut Peekable<Chars>) -> String {
    if it.peek() == Some(&'"') {
        it.next();
        for c in it.by_ref() {
            if c == '"' {
                break;
            }
            stack.push(c);
        }
    } else {
        while let Some(&c) = it.peek() {
            if c == ',' || c == '"' || c.is_whitespace() {
                break;
            }
            stack.push(c);
            it.next();
        }
    }
    take_stack(stack).unwrap_or_default()
}

#[inline]
fn skip_digit(it: &mut Peekable<Chars>) {
    while it.next_if(|c| *c == '-' || *c == '+' || *c == '.' || c.is_ascii_digit()).is_some() {}
}

/// Visits the `key="value"` attributes of an `#EXTINF` or `#EXTM3U` line
/// and returns the title following the first `,` outside of quotes.
fn process_attributes<F: FnMut(&str, String)>(content: &str, mut visit: F) -> Option<String> {
    let mut it = content.chars().peekable();
    let mut stack = String::with_capacity(64);

    // line tag
    for ch in it.by_ref() {
        if ch == ':' || ch.is_whitespace() {
            break;
        }
    }
    skip_digit(&mut it);

    loop {
        match it.peek().copied() {
            None => return None,
            Some(',') => {
                it.next();
                let title: String = it.collect();
                return Some(title.trim().to_string());
            }
            Some(ch) if ch.is_whitespace() => {
                it.next();
            }
            Some(_) => {
                if let Some(token) = token_till(&mut stack, &mut it) {
                    if it.next_if_eq(&'=').is_some() {
                        let value = token_value(&mut stack, &mut it);
                        visit(&token.to_lowercase(), value);
                    }
                } else {
                    // stray '='
                    it.next();
                }
            }
        }
    }
}

macro_rules! process_header_fields {
    ($header:expr, $token:expr, $(($prop:ident, $field:expr)),*; $val:expr) => {
        match $token {
            $(
               $field => $header.$prop = $val,
             )*
            _ => {}
        }
    };
}

fn process_header(content: &str) -> M3uEntryHeader {
    let mut header = M3uEntryHeader::default();
    let title = process_attributes(content, |token, value| {
        process_header_fields!(header, token,
            (id, "tvg-id"),
            (name, "tvg-name"),
            (epg_url, "tvg-url"),
            (logo, "tvg-logo"),
            (country, "tvg-country"),
            (language, "tvg-language"),
            (group, "group-title"); value);
    });
    header.title = title.unwrap_or_default();
    header
}

fn process_playlist_header(content: &str) -> Option<String> {
    let mut tvg_url = None;
    process_attributes(content, |token, value| {
        if (token == "x-tvg-url" || token == "url-tvg") && !value.is_empty() {
            tvg_url = Some(value);
        }
    });
    tvg_url
}

fn process_vlc_option(option: &str, http: &mut HttpOptions) {
    if let Some((key, value)) = option.split_once('=') {
        match key.trim().to_lowercase().as_str() {
            "http-referrer" => http.referrer = value.trim().to_string(),
            "http-user-agent" => http.user_agent = value.trim().to_string(),
            _ => {}
        }
    }
}

/// Walks the playlist text and calls `visit` for every complete entry.
/// Returns the `x-tvg-url` of the playlist header.
pub fn consume_m3u<F: FnMut(M3uEntry)>(text: &str, mut visit: F) -> Option<String> {
    let mut tvg_url = None;
    let mut header: Option<M3uEntryHeader> = None;
    let mut http = HttpOptions::default();

    for line in text.trim_start_matches('\u{feff}').lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with(M3U_HEADER) {
            tvg_url = process_playlist_header(line);
            continue;
        }
        if line.starts_with("#EXTINF") {
            header = Some(process_header(line));
            http = HttpOptions::default();
            continue;
        }
        if let Some(option) = line.strip_prefix("#EXTVLCOPT:") {
            process_vlc_option(option, &mut http);
            continue;
        }
        if line.starts_with('#') {
            continue;
        }
        if let Some(header_value) = header.take() {
            visit(M3uEntry { header: header_value, http: std::mem::take(&mut http), url: line.to_string() });
        } else {
            debug_if_enabled!("skipping url without #EXTINF: {}", line);
        }
    }
    tvg_url
}

fn is_country_code(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Parses a `tvg-country` value like `US;CA` into lowercase country codes.
/// Tokens which are no plain codes are skipped, codes end up as file names.
/// Repeated codes are kept once.
pub fn parse_countries(value: &str) -> Vec<Country> {
    let mut countries: Vec<Country> = vec![];
    for token in value.split(';').map(str::trim).filter(|token| !token.is_empty()) {
        if !is_country_code(token) {
            debug_if_enabled!("skipping invalid country code {}", token);
            continue;
        }
        let code = token.to_lowercase();
        if !countries.iter().any(|c| c.code == code) {
            countries.push(Country::new(&code, &token.to_uppercase()));
        }
    }
    countries
}

fn create_channel(entry: M3uEntry, default_tvg_url: Option<&str>) -> Channel {
    let M3uEntry { header, http, url } = entry;
    let name = if header.title.is_empty() { header.name.clone() } else { header.title };
    let mut channel = Channel::new(&name, &url, &header.group,
                                   parse_countries(&header.country),
                                   parse_languages(&header.language));
    channel.logo = header.logo;
    channel.tvg = TvgInfo {
        id: header.id,
        name: if header.name.is_empty() { name } else { header.name },
        url: if header.epg_url.is_empty() { default_tvg_url.unwrap_or_default().to_string() } else { header.epg_url },
    };
    channel.http = http;
    channel
}

pub fn parse_playlist(text: &str) -> Playlist {
    let mut entries = vec![];
    let tvg_url = consume_m3u(text, |entry| entries.push(entry));
    let channels = entries.into_iter()
        .map(|entry| create_channel(entry, tvg_url.as_deref()))
        .collect();
    Playlist { tvg_url, channels }
}

pub fn load_playlist(fetcher: &mut InputFetcher, source: &PlaylistSource) -> Result<Playlist, CatalogError> {
    let text = fetcher.get_input_text_content(&source.url)?;
    let playlist = parse_playlist(&text);
    debug_if_enabled!("parsed {} channels from {}", playlist.channels.len(), source.name);
    if let Some(tvg_url) = playlist.tvg_url.as_deref() {
        debug_if_enabled!("epg url of {}: {}", source.name, sanitize_sensitive_info(tvg_url));
    }
    Ok(playlist)
}
