use tabled::Table;

use crate::{
    info,
    management::FeatureTableManager,
    utils::{self, FeatureSort},
    warning,
};

/// Prints the feature table cached by the last `collect` run.
///
/// `search` keeps rows whose artist, album or track contains the text,
/// ignoring case. `sort` orders rows descending by one feature; without it
/// rows keep their collection order.
pub async fn list_features(search: Option<String>, sort: Option<FeatureSort>) {
    let mut rows = match FeatureTableManager::load().await {
        Ok(mgr) => mgr.rows(),
        Err(e) => {
            warning!(
                "Failed to load cached feature table: {}\nRun audiofeat collect first.",
                e
            );
            return;
        }
    };

    if let Some(term) = search {
        utils::search_feature_rows(&mut rows, &term);
    }

    if let Some(sort) = sort {
        utils::sort_feature_rows(&mut rows, sort);
    }

    if rows.is_empty() {
        info!("No tracks match.");
        return;
    }

    let count = rows.len();
    let table = Table::new(utils::to_table_rows(&rows));
    println!("{}", table);
    info!("{} tracks", count);
}
