use crate::{
    types::{AudioFeatures, AudioFeaturesResponse},
    utils,
};

use super::SpotifySession;

/// Retrieves audio features for one batch of track ids.
///
/// The ids are comma-joined into a single `ids` parameter of
/// `/audio-features`. The endpoint accepts at most 100 ids per call, so
/// callers split larger collections with [`crate::batch::partition`] first.
/// Ids the catalog has no analysis for come back as `null` and are dropped
/// from the result.
///
/// # Example
///
/// ```
/// for part in batch::partition(&track_ids, 100)? {
///     let features = get_audio_features(&session, &part).await?;
/// }
/// ```
pub async fn get_audio_features(
    session: &SpotifySession,
    ids: &[String],
) -> Result<Vec<AudioFeatures>, reqwest::Error> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let res: AudioFeaturesResponse = session
        .get_json("/audio-features", &[("ids", utils::join_ids(ids))])
        .await?;

    Ok(res.audio_features.into_iter().flatten().collect())
}
