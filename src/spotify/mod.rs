//! # Spotify Integration Module
//!
//! Thin client over the parts of the Spotify Web API that audiofeat needs to go
//! from artist names to per-track audio features.
//!
//! ```text
//! CLI Layer
//!     ↓
//! Management Layer (FeatureCollector, FeatureTableManager)
//!     ↓
//! Spotify Integration Layer
//!     ├── auth      POST /api/token (client credentials)
//!     ├── artists   GET  /search?type=artist
//!     ├── albums    GET  /artists/{id}/albums
//!     ├── tracks    GET  /albums/{id}/tracks
//!     └── features  GET  /audio-features?ids=...
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Authentication
//!
//! Only the client-credentials grant is used. One token is fetched per run and
//! handed to a [`SpotifySession`]; there is no refresh and nothing is persisted.
//!
//! ## Error Handling
//!
//! Every request goes through `error_for_status`, so non-2xx answers surface
//! as `reqwest::Error`. Requests are not retried. Callers decide whether a
//! failure aborts the run or only skips one item.
//!
//! ## Pagination
//!
//! Paged endpoints are followed through their `next` links until the catalog
//! reports no further page.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::types::Paging;

pub mod albums;
pub mod artists;
pub mod auth;
pub mod features;
pub mod tracks;

/// Bearer-authenticated access to the Web API.
#[derive(Debug, Clone)]
pub struct SpotifySession {
    client: Client,
    api_url: String,
    access_token: String,
}

impl SpotifySession {
    pub fn new(client: Client, api_url: &str, access_token: &str) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
        }
    }

    /// Issues one GET against `path` (relative to the API base) and decodes the body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, reqwest::Error> {
        let api_url = format!("{uri}{path}", uri = self.api_url, path = path);
        self.get_url(&api_url, query).await
    }

    /// Collects every item of a paged endpoint, following `next` links.
    pub async fn get_all_pages<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, reqwest::Error> {
        let first: Paging<T> = self.get_json(path, query).await?;
        let mut items = first.items;
        let mut next = first.next;

        // `next` already carries the full query string
        while let Some(next_url) = next {
            let page: Paging<T> = self.get_url(&next_url, &[]).await?;
            items.extend(page.items);
            next = page.next;
        }

        Ok(items)
    }

    async fn get_url<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, reqwest::Error> {
        self.client
            .get(url)
            .query(query)
            .bearer_auth(&self.access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await
    }
}
