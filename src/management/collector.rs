use std::cell::Cell;

use indicatif::ProgressBar;

use crate::{
    batch::{self, BatchError},
    spotify::{
        self, SpotifySession,
        albums::ALBUMS_PAGE_LIMIT,
        tracks::TRACKS_PAGE_LIMIT,
    },
    types::{AlbumRef, Artist, FeatureMap, FeatureRow, TrackRef},
    utils, warning,
};

/// Outcome of a full collection run.
#[derive(Debug, Clone)]
pub struct CollectionReport {
    pub rows: Vec<FeatureRow>,
    pub artists: usize,
    pub albums: usize,
    pub tracks: usize,
    pub missing_features: usize,
    pub failed_requests: usize,
}

/// Walks artists → albums → tracks → audio features for a list of artist names.
///
/// Each stage takes the previous stage's result and returns a fresh
/// aggregate; nothing is shared between runs. A failed request for a single
/// artist, album or feature batch is reported and skipped so that the rest of
/// the run still completes.
pub struct FeatureCollector {
    session: SpotifySession,
    batch_size: usize,
    excluded_albums: Vec<String>,
    progress: Option<ProgressBar>,
    failures: Cell<usize>,
}

impl FeatureCollector {
    /// Creates a collector for one catalog session.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::InvalidArgument`] for a zero `batch_size`, before
    /// any request is made.
    pub fn new(
        session: SpotifySession,
        batch_size: usize,
        excluded_albums: Vec<String>,
    ) -> Result<Self, BatchError> {
        batch::validate_batch_size(batch_size)?;

        Ok(Self {
            session,
            batch_size,
            excluded_albums,
            progress: None,
            failures: Cell::new(0),
        })
    }

    pub fn with_progress(mut self, pb: ProgressBar) -> Self {
        self.progress = Some(pb);
        self
    }

    pub fn failed_requests(&self) -> usize {
        self.failures.get()
    }

    /// Runs every stage and joins the result into flat rows.
    ///
    /// Request failures are counted per call in
    /// [`CollectionReport::failed_requests`].
    pub async fn collect(&self, artist_names: &[String]) -> Result<CollectionReport, BatchError> {
        self.failures.set(0);

        let artists = self.resolve_artists(artist_names).await;
        let albums = self.collect_albums(&artists).await;
        let tracks = self.collect_tracks(&albums).await;
        let features = self.collect_features(&tracks).await?;
        let (rows, missing_features) = utils::join_features(&tracks, &features);

        Ok(CollectionReport {
            rows,
            artists: artists.len(),
            albums: albums.len(),
            tracks: tracks.len(),
            missing_features,
            failed_requests: self.failed_requests(),
        })
    }

    pub async fn resolve_artists(&self, names: &[String]) -> Vec<Artist> {
        let mut artists: Vec<Artist> = Vec::new();

        for (i, name) in names.iter().enumerate() {
            self.report(format!("Resolving artist {} ({}/{})", name, i + 1, names.len()));

            match spotify::artists::search_artist(&self.session, name).await {
                Ok(Some(artist)) => {
                    if artists.iter().any(|a| a.id == artist.id) {
                        continue;
                    }
                    artists.push(artist);
                }
                Ok(None) => self.warn(format!("No artist found for '{}'", name)),
                Err(e) => {
                    self.failures.set(self.failures.get() + 1);
                    self.warn(format!("Failed to resolve artist '{}': {}", name, e));
                }
            }
        }

        artists
    }

    pub async fn collect_albums(&self, artists: &[Artist]) -> Vec<AlbumRef> {
        let mut albums: Vec<AlbumRef> = Vec::new();

        for (i, artist) in artists.iter().enumerate() {
            self.report(format!(
                "Fetching albums of {} ({}/{})",
                artist.name,
                i + 1,
                artists.len()
            ));

            match spotify::albums::get_artist_albums(&self.session, &artist.id, ALBUMS_PAGE_LIMIT)
                .await
            {
                Ok(items) => albums.extend(items.into_iter().map(|album| AlbumRef {
                    artist: artist.clone(),
                    album,
                })),
                Err(e) => {
                    self.failures.set(self.failures.get() + 1);
                    self.warn(format!("Failed to fetch albums of {}: {}", artist.name, e));
                }
            }
        }

        utils::filter_excluded_albums(&mut albums, &self.excluded_albums);
        utils::remove_duplicate_albums(&mut albums);
        albums
    }

    pub async fn collect_tracks(&self, albums: &[AlbumRef]) -> Vec<TrackRef> {
        let mut tracks: Vec<TrackRef> = Vec::new();

        for (i, ar) in albums.iter().enumerate() {
            self.report(format!(
                "Fetching tracks of {} ({}/{})",
                ar.album.name,
                i + 1,
                albums.len()
            ));

            match spotify::tracks::get_album_tracks(&self.session, &ar.album.id, TRACKS_PAGE_LIMIT)
                .await
            {
                Ok(items) => tracks.extend(items.into_iter().map(|track| TrackRef {
                    artist_name: ar.artist.name.clone(),
                    album_name: ar.album.name.clone(),
                    album_release_date: ar.album.release_date.clone(),
                    track,
                })),
                Err(e) => {
                    self.failures.set(self.failures.get() + 1);
                    self.warn(format!("Failed to fetch tracks of {}: {}", ar.album.name, e));
                }
            }
        }

        utils::remove_duplicate_tracks(&mut tracks);
        tracks
    }

    /// Fetches audio features with one request per partition of track ids.
    pub async fn collect_features(&self, tracks: &[TrackRef]) -> Result<FeatureMap, BatchError> {
        let ids = utils::track_ids(tracks);
        let partitions = batch::partition(&ids, self.batch_size)?;
        let total = partitions.len();
        let mut features = FeatureMap::new();

        for (k, part) in partitions.iter().enumerate() {
            self.report(format!(
                "Fetching audio features, batch {}/{} ({} tracks)",
                k + 1,
                total,
                part.len()
            ));

            match spotify::features::get_audio_features(&self.session, part).await {
                Ok(items) => {
                    for f in items {
                        features.insert(f.id.clone(), f);
                    }
                }
                Err(e) => {
                    self.failures.set(self.failures.get() + 1);
                    self.warn(format!(
                        "Failed to fetch audio features for batch {}/{}: {}",
                        k + 1,
                        total,
                        e
                    ));
                }
            }
        }

        Ok(features)
    }

    fn report(&self, msg: String) {
        if let Some(pb) = &self.progress {
            pb.set_message(msg);
        }
    }

    fn warn(&self, msg: String) {
        match &self.progress {
            Some(pb) => pb.suspend(|| warning!("{}", msg)),
            None => warning!("{}", msg),
        }
    }
}
