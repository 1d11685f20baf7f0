use audiofeat::types::{
    Album, AlbumRef, Artist, AudioFeatures, FeatureMap, FeatureRow, Track, TrackRef,
};
use audiofeat::utils::*;

// Helper function to create a test artist
fn create_test_artist(id: &str, name: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        genres: Vec::new(),
        popularity: None,
    }
}

// Helper function to create a test album reference
fn create_test_album(artist: &Artist, id: &str, name: &str) -> AlbumRef {
    AlbumRef {
        artist: artist.clone(),
        album: Album {
            id: id.to_string(),
            name: name.to_string(),
            release_date: "2001-06-04".to_string(),
            album_type: "album".to_string(),
            total_tracks: Some(10),
        },
    }
}

// Helper function to create a test track reference
fn create_test_track(id: &str, name: &str) -> TrackRef {
    TrackRef {
        artist_name: "Radiohead".to_string(),
        album_name: "Amnesiac".to_string(),
        album_release_date: "2001-06-04".to_string(),
        track: Track {
            id: id.to_string(),
            name: name.to_string(),
            track_number: 1,
            duration_ms: 200_000,
        },
    }
}

fn create_test_features(id: &str, tempo: f64, energy: f64) -> AudioFeatures {
    AudioFeatures {
        id: id.to_string(),
        danceability: 0.5,
        energy,
        key: 5,
        loudness: -8.2,
        mode: 1,
        speechiness: 0.04,
        acousticness: 0.3,
        instrumentalness: 0.1,
        liveness: 0.12,
        valence: 0.4,
        tempo,
        duration_ms: 200_000,
        time_signature: 4,
    }
}

fn create_test_row(track: &str, tempo: f64, energy: f64) -> FeatureRow {
    let tr = create_test_track(&format!("{}_id", track), track);
    let mut features = FeatureMap::new();
    features.insert(tr.track.id.clone(), create_test_features(&tr.track.id, tempo, energy));
    let (mut rows, _) = join_features(&[tr], &features);
    rows.remove(0)
}

#[test]
fn test_parse_name_list() {
    assert_eq!(
        parse_name_list(" Kid A (Deluxe) ,, Live in Berlin ,"),
        vec!["Kid A (Deluxe)".to_string(), "Live in Berlin".to_string()]
    );
    assert!(parse_name_list("").is_empty());
    assert!(parse_name_list(" , ").is_empty());
}

#[test]
fn test_join_ids() {
    let ids = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    assert_eq!(join_ids(&ids), "a,b,c");
    assert_eq!(join_ids(&[]), "");
}

#[test]
fn test_filter_excluded_albums_ignores_case_and_whitespace() {
    let artist = create_test_artist("ar1", "Radiohead");
    let mut albums = vec![
        create_test_album(&artist, "al1", "OK Computer"),
        create_test_album(&artist, "al2", "OK Computer OKNOTOK 1997 2017"),
        create_test_album(&artist, "al3", "I Might Be Wrong (Live Recordings)"),
    ];

    let excluded = vec![
        "ok computer oknotok 1997 2017".to_string(),
        "  I Might Be Wrong (Live Recordings) ".to_string(),
    ];
    filter_excluded_albums(&mut albums, &excluded);

    assert_eq!(albums.len(), 1);
    assert_eq!(albums[0].album.id, "al1");
}

#[test]
fn test_filter_excluded_albums_with_empty_list() {
    let artist = create_test_artist("ar1", "Radiohead");
    let mut albums = vec![create_test_album(&artist, "al1", "OK Computer")];

    filter_excluded_albums(&mut albums, &[]);
    assert_eq!(albums.len(), 1);
}

#[test]
fn test_remove_duplicate_albums_keeps_first() {
    let radiohead = create_test_artist("ar1", "Radiohead");
    let other = create_test_artist("ar2", "Other");
    let mut albums = vec![
        create_test_album(&radiohead, "al1", "Kid A"),
        create_test_album(&radiohead, "al1", "Kid A"),
        create_test_album(&radiohead, "al2", "KID A"),
        create_test_album(&other, "al3", "Kid A"),
        create_test_album(&radiohead, "al4", "Amnesiac"),
    ];

    remove_duplicate_albums(&mut albums);

    let ids: Vec<&str> = albums.iter().map(|a| a.album.id.as_str()).collect();
    assert_eq!(ids, vec!["al1", "al3", "al4"]);
}

#[test]
fn test_remove_duplicate_tracks_preserves_order() {
    let mut tracks = vec![
        create_test_track("t2", "Pyramid Song"),
        create_test_track("t1", "Packt Like Sardines"),
        create_test_track("t2", "Pyramid Song"),
        create_test_track("t3", "Knives Out"),
    ];

    remove_duplicate_tracks(&mut tracks);

    assert_eq!(track_ids(&tracks), vec!["t2", "t1", "t3"]);
}

#[test]
fn test_join_features_inner_join_in_track_order() {
    let tracks = vec![
        create_test_track("t1", "Packt Like Sardines"),
        create_test_track("t2", "Pyramid Song"),
        create_test_track("t3", "Knives Out"),
    ];
    let mut features = FeatureMap::new();
    features.insert("t3".to_string(), create_test_features("t3", 90.0, 0.4));
    features.insert("t1".to_string(), create_test_features("t1", 120.0, 0.7));

    let (rows, missing) = join_features(&tracks, &features);

    assert_eq!(missing, 1);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].track_id, "t1");
    assert_eq!(rows[0].track, "Packt Like Sardines");
    assert_eq!(rows[0].artist, "Radiohead");
    assert_eq!(rows[0].album, "Amnesiac");
    assert_eq!(rows[0].tempo, 120.0);
    assert_eq!(rows[1].track_id, "t3");
    assert_eq!(rows[1].energy, 0.4);
}

#[test]
fn test_search_feature_rows() {
    let mut rows = vec![
        create_test_row("Pyramid Song", 77.0, 0.3),
        create_test_row("Knives Out", 110.0, 0.5),
    ];

    search_feature_rows(&mut rows, "KNIVES");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].track, "Knives Out");

    // album and artist names match too
    let mut rows = vec![create_test_row("Pyramid Song", 77.0, 0.3)];
    search_feature_rows(&mut rows, "amnes");
    assert_eq!(rows.len(), 1);
    search_feature_rows(&mut rows, "portishead");
    assert!(rows.is_empty());
}

#[test]
fn test_sort_feature_rows() {
    let mut rows = vec![
        create_test_row("B", 100.0, 0.2),
        create_test_row("A", 100.0, 0.9),
        create_test_row("C", 140.0, 0.5),
    ];

    sort_feature_rows(&mut rows, FeatureSort::Tempo);
    let order: Vec<&str> = rows.iter().map(|r| r.track.as_str()).collect();
    assert_eq!(order, vec!["C", "A", "B"]);

    sort_feature_rows(&mut rows, FeatureSort::Energy);
    let order: Vec<&str> = rows.iter().map(|r| r.track.as_str()).collect();
    assert_eq!(order, vec!["A", "C", "B"]);
}

#[test]
fn test_parse_feature_sort() {
    assert_eq!(parse_feature_sort("tempo"), Ok(FeatureSort::Tempo));
    assert_eq!(parse_feature_sort(" Energy "), Ok(FeatureSort::Energy));
    assert_eq!(parse_feature_sort("danceability"), Ok(FeatureSort::Danceability));
    assert_eq!(parse_feature_sort("valence"), Ok(FeatureSort::Valence));
    assert!(parse_feature_sort("loudness").is_err());
    assert_eq!(FeatureSort::Danceability.to_string(), "danceability");
}

#[test]
fn test_to_table_rows_formats_numbers() {
    let rows = vec![create_test_row("Pyramid Song", 77.123, 0.31234)];
    let table_rows = to_table_rows(&rows);

    assert_eq!(table_rows.len(), 1);
    assert_eq!(table_rows[0].tempo, "77.1");
    assert_eq!(table_rows[0].energy, "0.312");
    assert_eq!(table_rows[0].loudness, "-8.2");
    assert_eq!(table_rows[0].track, "Pyramid Song");
}
