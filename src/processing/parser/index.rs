use crate::error::CatalogError;
use crate::model::PlaylistSource;
use crate::processing::parser::consume_m3u;
use crate::utils::{resolve_location, InputFetcher};
use log::info;

/// Parses the master index. Every entry points to a channel playlist, relative
/// locations are resolved against the index location.
pub fn parse_index(text: &str, index_location: &str) -> Vec<PlaylistSource> {
    let mut sources = vec![];
    consume_m3u(text, |entry| {
        let name = if entry.header.title.is_empty() { entry.url.clone() } else { entry.header.title };
        sources.push(PlaylistSource {
            name,
            url: resolve_location(index_location, &entry.url),
        });
    });
    sources
}

pub fn load_index(fetcher: &mut InputFetcher, index_location: &str) -> Result<Vec<PlaylistSource>, CatalogError> {
    let text = fetcher.get_input_text_content(index_location)?;
    let sources = parse_index(&text, index_location);
    info!("Found {} playlists in index", sources.len());
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::parse_index;

    #[test]
    fn test_parse_index() {
        let text = "#EXTM3U\n\
            #EXTINF:-1 tvg-url=\"\",Afghanistan\n\
            channels/af.m3u\n\
            #EXTINF:-1,\n\
            https://lists.test/de.m3u\n";
        let sources = parse_index(text, "/srv/iptv/index.m3u");
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].name, "Afghanistan");
        assert_eq!(sources[0].url, "/srv/iptv/channels/af.m3u");
        assert_eq!(sources[1].name, "https://lists.test/de.m3u");
        assert_eq!(sources[1].url, "https://lists.test/de.m3u");
    }

    #[test]
    fn test_parse_remote_index() {
        let text = "#EXTM3U\n#EXTINF:-1,Germany\nchannels/de.m3u\n";
        let sources = parse_index(text, "https://lists.test/iptv/index.m3u");
        assert_eq!(sources[0].url, "https://lists.test/iptv/channels/de.m3u");
    }

    #[test]
    fn test_parse_empty_index() {
        assert!(parse_index("#EXTM3U\n", "index.m3u").is_empty());
    }
}
