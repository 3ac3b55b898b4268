use crate::model::Channel;

/// One entry of the master index pointing to a channel playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default)]
pub struct Playlist {
    /// `x-tvg-url` of the `#EXTM3U` header
    pub tvg_url: Option<String>,
    pub channels: Vec<Channel>,
}
