use crate::types::Album;

use super::SpotifySession;

/// Maximum page size of `/artists/{id}/albums`.
pub const ALBUMS_PAGE_LIMIT: u32 = 50;

/// Retrieves every full-length album of an artist.
///
/// Requests `/artists/{id}/albums` with `include_groups=album`, so singles,
/// compilations and "appears on" releases are left out. All pages are
/// followed; `limit` only sets the page size (1-50).
pub async fn get_artist_albums(
    session: &SpotifySession,
    artist_id: &str,
    limit: u32,
) -> Result<Vec<Album>, reqwest::Error> {
    session
        .get_all_pages(
            &format!("/artists/{id}/albums", id = artist_id),
            &[
                ("include_groups", "album".to_string()),
                ("limit", limit.clamp(1, ALBUMS_PAGE_LIMIT).to_string()),
            ],
        )
        .await
}
