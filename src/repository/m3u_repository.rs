use crate::error::{create_catalog_error, CatalogError, CatalogErrorKind};
use crate::model::{Channel, ChannelDto, GroupTitle};
use crate::utils::{file_writer, IO_BUFFER_SIZE, M3U_HEADER};
use std::fs::File;
use std::io::Write;
use std::path::Path;

macro_rules! playlist_write {
    ($expr:expr, $fmt:literal $(, $args:expr)* ) => {{
        $expr.map_err(|err| {
            create_catalog_error!(CatalogErrorKind::Output, $fmt $(, $args)*, err)
        })?
    }};
}

/// Writes the playlist: create or truncate, `#EXTM3U` header, then one entry per channel.
pub fn m3u_write_playlist(path: &Path, channels: &[&Channel], group_title: GroupTitle) -> Result<(), CatalogError> {
    let file = playlist_write!(File::create(path), "Can't write m3u playlist {} - {}", path.display());
    let mut writer = file_writer(file);
    playlist_write!(writer.write_all(M3U_HEADER.as_bytes()), "Failed to write header to {} - {}", path.display());
    playlist_write!(writer.write_all(b"\n"), "Failed to write header to {} - {}", path.display());

    let mut write_counter = 0usize;
    for channel in channels {
        let entry = channel.to_m3u(group_title);
        let bytes = entry.as_bytes();
        playlist_write!(writer.write_all(bytes), "Failed to write entry to {} - {}", path.display());
        write_counter += bytes.len();
        if write_counter >= IO_BUFFER_SIZE {
            playlist_write!(writer.flush(), "Failed to flush {} - {}", path.display());
            write_counter = 0;
        }
    }

    playlist_write!(writer.flush(), "Failed to flush {} - {}", path.display());
    Ok(())
}

/// Writes the channels as one compact json array.
pub fn json_write_channels(path: &Path, channels: &[&Channel]) -> Result<(), CatalogError> {
    let file = playlist_write!(File::create(path), "Can't write json file {} - {}", path.display());
    let mut writer = file_writer(file);
    let dtos: Vec<ChannelDto> = channels.iter().map(|c| c.to_json()).collect();
    playlist_write!(serde_json::to_writer(&mut writer, &dtos), "Failed to write json to {} - {}", path.display());
    playlist_write!(writer.flush(), "Failed to flush {} - {}", path.display());
    Ok(())
}
