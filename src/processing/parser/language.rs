use crate::model::Language;
use crate::utils::CONSTANTS;

// ISO 639-3 codes of the languages found in channel playlists.
const LANGUAGES: &[(&str, &str)] = &[
    ("afr", "Afrikaans"),
    ("sqi", "Albanian"),
    ("amh", "Amharic"),
    ("ara", "Arabic"),
    ("hye", "Armenian"),
    ("aze", "Azerbaijani"),
    ("ben", "Bengali"),
    ("bos", "Bosnian"),
    ("bul", "Bulgarian"),
    ("cat", "Catalan"),
    ("zho", "Chinese"),
    ("hrv", "Croatian"),
    ("ces", "Czech"),
    ("dan", "Danish"),
    ("nld", "Dutch"),
    ("eng", "English"),
    ("est", "Estonian"),
    ("fao", "Faroese"),
    ("fil", "Filipino"),
    ("fin", "Finnish"),
    ("fra", "French"),
    ("kat", "Georgian"),
    ("deu", "German"),
    ("ell", "Greek"),
    ("guj", "Gujarati"),
    ("hat", "Haitian"),
    ("heb", "Hebrew"),
    ("hin", "Hindi"),
    ("hun", "Hungarian"),
    ("isl", "Icelandic"),
    ("ind", "Indonesian"),
    ("gle", "Irish"),
    ("ita", "Italian"),
    ("jpn", "Japanese"),
    ("kan", "Kannada"),
    ("kaz", "Kazakh"),
    ("khm", "Khmer"),
    ("kor", "Korean"),
    ("kur", "Kurdish"),
    ("kir", "Kyrgyz"),
    ("lao", "Lao"),
    ("lav", "Latvian"),
    ("lit", "Lithuanian"),
    ("mkd", "Macedonian"),
    ("msa", "Malay"),
    ("mal", "Malayalam"),
    ("mlt", "Maltese"),
    ("mar", "Marathi"),
    ("mon", "Mongolian"),
    ("nep", "Nepali"),
    ("nor", "Norwegian"),
    ("pus", "Pashto"),
    ("fas", "Persian"),
    ("pol", "Polish"),
    ("por", "Portuguese"),
    ("pan", "Punjabi"),
    ("ron", "Romanian"),
    ("rus", "Russian"),
    ("srp", "Serbian"),
    ("sin", "Sinhala"),
    ("slk", "Slovak"),
    ("slv", "Slovenian"),
    ("som", "Somali"),
    ("spa", "Spanish"),
    ("swa", "Swahili"),
    ("swe", "Swedish"),
    ("tgl", "Tagalog"),
    ("tam", "Tamil"),
    ("tel", "Telugu"),
    ("tha", "Thai"),
    ("tur", "Turkish"),
    ("tuk", "Turkmen"),
    ("ukr", "Ukrainian"),
    ("urd", "Urdu"),
    ("uzb", "Uzbek"),
    ("vie", "Vietnamese"),
];

pub fn find_language_code(name: &str) -> Option<&'static str> {
    LANGUAGES.iter()
        .find(|(_, lang)| lang.eq_ignore_ascii_case(name))
        .map(|(code, _)| *code)
}

pub fn find_language_name(code: &str) -> Option<&'static str> {
    LANGUAGES.iter()
        .find(|(lang_code, _)| *lang_code == code)
        .map(|(_, name)| *name)
}

/// Parses a `tvg-language` value like `English;Spanish`.
///
/// Known names map to their code, tokens that already look like a code are
/// kept as code. Unknown names keep an empty code. A language given twice,
/// by name or by code, is kept once.
pub fn parse_languages(value: &str) -> Vec<Language> {
    let mut languages: Vec<Language> = vec![];
    for token in value.split(';').map(str::trim).filter(|token| !token.is_empty()) {
        let language = if let Some(code) = find_language_code(token) {
            Language::new(code, token)
        } else if CONSTANTS.re_language_code.is_match(token) {
            Language::new(token, find_language_name(token).unwrap_or(token))
        } else {
            Language::new("", token)
        };
        let known = languages.iter().any(|l| if language.code.is_empty() {
            l.code.is_empty() && l.name.eq_ignore_ascii_case(&language.name)
        } else {
            l.code == language.code
        });
        if !known {
            languages.push(language);
        }
    }
    languages
}

#[cfg(test)]
mod tests {
    use super::parse_languages;
    use crate::model::Language;

    #[test]
    fn test_parse_languages() {
        assert_eq!(parse_languages("English;spanish"), vec![Language::new("eng", "English"), Language::new("spa", "spanish")]);
        assert_eq!(parse_languages("deu"), vec![Language::new("deu", "German")]);
        assert_eq!(parse_languages("xx"), vec![Language::new("xx", "xx")]);
        assert_eq!(parse_languages("Klingon"), vec![Language::new("", "Klingon")]);
        assert!(parse_languages("").is_empty());
        assert!(parse_languages(" ; ").is_empty());
        assert_eq!(parse_languages("English;eng;english"), vec![Language::new("eng", "English")]);
        assert_eq!(parse_languages("Klingon;klingon"), vec![Language::new("", "Klingon")]);
    }
}
