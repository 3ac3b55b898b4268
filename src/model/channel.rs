use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
}

impl Country {
    pub fn new(code: &str, name: &str) -> Self {
        Self { code: code.to_string(), name: name.to_string() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

impl Language {
    pub fn new(code: &str, name: &str) -> Self {
        Self { code: code.to_string(), name: name.to_string() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TvgInfo {
    pub id: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpOptions {
    pub referrer: String,
    pub user_agent: String,
}

/// Selects which value is written as `group-title` of a rendered entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GroupTitle {
    Category,
    TvgCountry,
    TvgLanguage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Channel {
    pub name: String,
    pub url: String,
    pub category: String,
    pub countries: Vec<Country>,
    pub languages: Vec<Language>,
    pub tvg_country: String,
    pub tvg_language: String,
    pub logo: String,
    pub tvg: TvgInfo,
    pub http: HttpOptions,
}

/// Plain representation written to `channels.json`.
#[derive(Debug, Serialize)]
pub struct ChannelDto<'a> {
    pub name: &'a str,
    pub logo: Option<&'a str>,
    pub url: &'a str,
    pub category: Option<&'a str>,
    pub languages: &'a [Language],
    pub countries: &'a [Country],
    pub tvg: TvgDto<'a>,
}

#[derive(Debug, Serialize)]
pub struct TvgDto<'a> {
    pub id: Option<&'a str>,
    pub name: Option<&'a str>,
    pub url: Option<&'a str>,
}

macro_rules! to_m3u_non_empty_fields {
    ($line:expr, $(($prop:expr, $field:expr)),*;) => {
        $(
           if !$prop.is_empty() {
                $line = format!("{} {}=\"{}\"", $line, $field, $prop);
            }
         )*
    };
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

impl Channel {
    /// Creates a channel and derives the `tvg_country` and `tvg_language` display values.
    pub fn new(name: &str, url: &str, category: &str, countries: Vec<Country>, languages: Vec<Language>) -> Self {
        let tvg_country = countries.iter()
            .map(|c| c.code.to_uppercase())
            .filter(|c| !c.is_empty())
            .collect::<Vec<String>>()
            .join(";");
        let tvg_language = languages.iter()
            .map(|l| l.name.as_str())
            .filter(|l| !l.is_empty())
            .collect::<Vec<&str>>()
            .join(";");
        Self {
            name: name.to_string(),
            url: url.to_string(),
            category: category.to_string(),
            countries,
            languages,
            tvg_country,
            tvg_language,
            ..Default::default()
        }
    }

    pub fn group_title(&self, group_title: GroupTitle) -> &str {
        match group_title {
            GroupTitle::Category => &self.category,
            GroupTitle::TvgCountry => &self.tvg_country,
            GroupTitle::TvgLanguage => &self.tvg_language,
        }
    }

    /// Renders one playlist entry terminated by a newline.
    pub fn to_m3u(&self, group_title: GroupTitle) -> String {
        let mut line = format!("#EXTINF:-1 tvg-id=\"{}\" tvg-name=\"{}\" tvg-country=\"{}\" tvg-language=\"{}\" tvg-logo=\"{}\"",
                               self.tvg.id, self.tvg.name, self.tvg_country, self.tvg_language, self.logo);

        to_m3u_non_empty_fields!(line, (self.tvg.url, "tvg-url"););

        let mut entry = format!("{line} group-title=\"{}\",{}\n", self.group_title(group_title), self.name);
        if !self.http.referrer.is_empty() {
            entry.push_str(&format!("#EXTVLCOPT:http-referrer={}\n", self.http.referrer));
        }
        if !self.http.user_agent.is_empty() {
            entry.push_str(&format!("#EXTVLCOPT:http-user-agent={}\n", self.http.user_agent));
        }
        entry.push_str(&self.url);
        entry.push('\n');
        entry
    }

    pub fn to_json(&self) -> ChannelDto<'_> {
        ChannelDto {
            name: &self.name,
            logo: non_empty(&self.logo),
            url: &self.url,
            category: non_empty(&self.category),
            languages: &self.languages,
            countries: &self.countries,
            tvg: TvgDto {
                id: non_empty(&self.tvg.id),
                name: non_empty(&self.tvg.name),
                url: non_empty(&self.tvg.url),
            },
        }
    }
}
