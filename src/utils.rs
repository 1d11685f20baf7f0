use std::{cmp::Ordering, collections::HashSet, fmt};

use crate::types::{AlbumRef, FeatureMap, FeatureRow, FeatureTableRow, TrackRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureSort {
    Tempo,
    Energy,
    Danceability,
    Valence,
}

impl fmt::Display for FeatureSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FeatureSort::Tempo => "tempo",
            FeatureSort::Energy => "energy",
            FeatureSort::Danceability => "danceability",
            FeatureSort::Valence => "valence",
        };
        write!(f, "{}", s)
    }
}

/// Value parser for `--sort`.
pub fn parse_feature_sort(s: &str) -> Result<FeatureSort, String> {
    match s.trim().to_lowercase().as_str() {
        "tempo" => Ok(FeatureSort::Tempo),
        "energy" => Ok(FeatureSort::Energy),
        "danceability" => Ok(FeatureSort::Danceability),
        "valence" => Ok(FeatureSort::Valence),
        other => Err(format!(
            "invalid sort '{}': expected tempo, energy, danceability or valence",
            other
        )),
    }
}

/// Splits a comma separated list, trimming entries and dropping empty ones.
pub fn parse_name_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Builds the `ids` query value of a bulk-lookup request.
pub fn join_ids(ids: &[String]) -> String {
    ids.join(",")
}

fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// Drops albums whose title matches one of `excluded`, ignoring case and
/// surrounding whitespace.
pub fn filter_excluded_albums(albums: &mut Vec<AlbumRef>, excluded: &[String]) {
    if excluded.is_empty() {
        return;
    }

    let excluded: HashSet<String> = excluded.iter().map(|t| normalize_title(t)).collect();
    albums.retain(|ar| !excluded.contains(&normalize_title(&ar.album.name)));
}

/// Keeps the first album per id and per (artist, title) pair.
///
/// The catalog lists re-releases under new ids with the same title, so an id
/// check alone lets them through.
pub fn remove_duplicate_albums(albums: &mut Vec<AlbumRef>) {
    let mut seen_ids = HashSet::new();
    let mut seen_titles = HashSet::new();
    albums.retain(|ar| {
        let title_key = (ar.artist.id.clone(), normalize_title(&ar.album.name));
        seen_ids.insert(ar.album.id.clone()) && seen_titles.insert(title_key)
    });
}

/// Keeps the first occurrence of every track id, preserving order.
pub fn remove_duplicate_tracks(tracks: &mut Vec<TrackRef>) {
    let mut seen_ids = HashSet::new();
    tracks.retain(|tr| seen_ids.insert(tr.track.id.clone()));
}

pub fn track_ids(tracks: &[TrackRef]) -> Vec<String> {
    tracks.iter().map(|tr| tr.track.id.clone()).collect()
}

/// Inner join of tracks and their audio features in track order.
///
/// Returns the joined rows and the number of tracks without a feature record.
pub fn join_features(tracks: &[TrackRef], features: &FeatureMap) -> (Vec<FeatureRow>, usize) {
    let mut missing = 0;
    let rows = tracks
        .iter()
        .filter_map(|tr| match features.get(&tr.track.id) {
            Some(f) => Some(FeatureRow {
                artist: tr.artist_name.clone(),
                album: tr.album_name.clone(),
                release_date: tr.album_release_date.clone(),
                track: tr.track.name.clone(),
                track_id: tr.track.id.clone(),
                danceability: f.danceability,
                energy: f.energy,
                key: f.key,
                loudness: f.loudness,
                mode: f.mode,
                speechiness: f.speechiness,
                acousticness: f.acousticness,
                instrumentalness: f.instrumentalness,
                liveness: f.liveness,
                valence: f.valence,
                tempo: f.tempo,
                duration_ms: f.duration_ms,
                time_signature: f.time_signature,
            }),
            None => {
                missing += 1;
                None
            }
        })
        .collect();

    (rows, missing)
}

/// Retains rows whose artist, album or track contains `term`, ignoring case.
pub fn search_feature_rows(rows: &mut Vec<FeatureRow>, term: &str) {
    let term = term.to_lowercase();
    rows.retain(|r| {
        r.artist.to_lowercase().contains(&term)
            || r.album.to_lowercase().contains(&term)
            || r.track.to_lowercase().contains(&term)
    });
}

/// Sorts rows descending by the chosen feature, ties by track name ascending.
pub fn sort_feature_rows(rows: &mut Vec<FeatureRow>, sort: FeatureSort) {
    rows.sort_by(|a, b| {
        let (va, vb) = match sort {
            FeatureSort::Tempo => (a.tempo, b.tempo),
            FeatureSort::Energy => (a.energy, b.energy),
            FeatureSort::Danceability => (a.danceability, b.danceability),
            FeatureSort::Valence => (a.valence, b.valence),
        };
        match vb.partial_cmp(&va).unwrap_or(Ordering::Equal) {
            Ordering::Equal => a.track.cmp(&b.track),
            other => other,
        }
    });
}

pub fn to_table_rows(rows: &[FeatureRow]) -> Vec<FeatureTableRow> {
    rows.iter()
        .map(|r| FeatureTableRow {
            artist: r.artist.clone(),
            album: r.album.clone(),
            track: r.track.clone(),
            tempo: format!("{:.1}", r.tempo),
            energy: format!("{:.3}", r.energy),
            danceability: format!("{:.3}", r.danceability),
            valence: format!("{:.3}", r.valence),
            loudness: format!("{:.1}", r.loudness),
        })
        .collect()
}
