use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tabled::Table;

use crate::{
    batch::AUDIO_FEATURES_BATCH_SIZE,
    config, error, info,
    management::{FeatureCollector, FeatureTableManager},
    spotify::{self, SpotifySession},
    success, utils, warning,
};

/// Collects audio features for every album track of the given artists.
///
/// Authenticates with the client-credentials grant, then runs the
/// [`FeatureCollector`] stages one request at a time. The joined table is
/// printed, cached in the local data directory and, when `output` is given,
/// exported there as JSON.
///
/// # Arguments
///
/// * `artists` - Artist names to resolve, in lookup order
/// * `exclude_albums` - Album titles to skip in addition to `AUDIOFEAT_EXCLUDED_ALBUMS`
/// * `batch_size` - Track ids per audio-features request; `AUDIOFEAT_BATCH_SIZE` when `None`
/// * `output` - Optional JSON export path
/// * `quiet` - Hide the progress spinner
///
/// # Error Handling
///
/// Missing credentials, a failed token request or an invalid batch size end
/// the program. Failed lookups for single items are reported as warnings and
/// the remaining items are still processed.
pub async fn collect_features(
    artists: Vec<String>,
    exclude_albums: Vec<String>,
    batch_size: Option<usize>,
    output: Option<PathBuf>,
    quiet: bool,
) {
    let client_id = match config::spotify_client_id() {
        Ok(id) => id,
        Err(e) => error!("{}", e),
    };
    let client_secret = match config::spotify_client_secret() {
        Ok(secret) => secret,
        Err(e) => error!("{}", e),
    };

    let batch_size = match batch_size {
        Some(size) => size,
        None => match config::batch_size() {
            Ok(size) => size,
            Err(e) => error!("{}", e),
        },
    };
    if batch_size > AUDIO_FEATURES_BATCH_SIZE {
        warning!(
            "Batch size {} exceeds the audio-features limit of {} ids per request.",
            batch_size,
            AUDIO_FEATURES_BATCH_SIZE
        );
    }

    let mut excluded = config::excluded_albums();
    excluded.extend(exclude_albums);

    let client = Client::new();
    let token = match spotify::auth::client_credentials(
        &client,
        &config::spotify_apitoken_url(),
        &client_id,
        &client_secret,
    )
    .await
    {
        Ok(token) => token,
        Err(e) => error!("Failed to obtain access token: {}", e),
    };

    let session = SpotifySession::new(client, &config::spotify_apiurl(), &token.access_token);
    let mut collector = match FeatureCollector::new(session, batch_size, excluded) {
        Ok(collector) => collector,
        Err(e) => error!("Cannot collect audio features: {}", e),
    };

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        spinner("Collecting audio features...")
    };
    collector = collector.with_progress(pb.clone());

    let report = match collector.collect(&artists).await {
        Ok(report) => report,
        Err(e) => {
            pb.finish_and_clear();
            error!("Cannot collect audio features: {}", e);
        }
    };
    pb.finish_and_clear();

    info!(
        "Resolved {} artists, {} albums, {} tracks.",
        report.artists,
        report.albums,
        report.tracks
    );
    if report.missing_features > 0 {
        warning!(
            "{} tracks have no audio features and were left out.",
            report.missing_features
        );
    }
    if report.failed_requests > 0 {
        warning!("{} requests failed.", report.failed_requests);
    }

    if !report.rows.is_empty() {
        let table = Table::new(utils::to_table_rows(&report.rows));
        println!("{}", table);
    }

    let table_mgr = FeatureTableManager::new(report.rows);
    match table_mgr.persist().await {
        Ok(true) => {}
        Ok(false) => {
            warning!("No audio features collected, keeping the cached feature table.");
            return;
        }
        Err(e) => warning!("Failed to cache feature table: {}", e),
    }

    if let Some(path) = output {
        match table_mgr.export(&path).await {
            Ok(_) => info!("Exported feature table to {}", path.display()),
            Err(e) => warning!("Failed to export feature table to {}: {}", path.display(), e),
        }
    }

    success!("Collected audio features for {} tracks.", table_mgr.count());
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
