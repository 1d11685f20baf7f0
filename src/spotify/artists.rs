use crate::types::{Artist, SearchArtistsResponse};

use super::SpotifySession;

/// Resolves an artist name to the catalog's best match.
///
/// Uses `/search` with `type=artist&limit=1`, so the first ranked hit wins.
/// Returns `Ok(None)` when the search has no result.
///
/// # Example
///
/// ```
/// if let Some(artist) = search_artist(&session, "Radiohead").await? {
///     println!("{} -> {}", artist.name, artist.id);
/// }
/// ```
pub async fn search_artist(
    session: &SpotifySession,
    name: &str,
) -> Result<Option<Artist>, reqwest::Error> {
    let res: SearchArtistsResponse = session
        .get_json(
            "/search",
            &[
                ("q", name.to_string()),
                ("type", "artist".to_string()),
                ("limit", "1".to_string()),
            ],
        )
        .await?;

    Ok(res.artists.items.into_iter().next())
}
