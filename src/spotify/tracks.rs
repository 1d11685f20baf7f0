use crate::types::Track;

use super::SpotifySession;

/// Maximum page size of `/albums/{id}/tracks`.
pub const TRACKS_PAGE_LIMIT: u32 = 50;

/// Retrieves the full track list of an album, following all pages.
pub async fn get_album_tracks(
    session: &SpotifySession,
    album_id: &str,
    limit: u32,
) -> Result<Vec<Track>, reqwest::Error> {
    session
        .get_all_pages(
            &format!("/albums/{id}/tracks", id = album_id),
            &[("limit", limit.clamp(1, TRACKS_PAGE_LIMIT).to_string())],
        )
        .await
}
