//! # Spotify Integration Module
//!
//! This module is the integration layer between albumgrid and the Spotify Web
//! API. It covers the three calls the application makes:
//!
//! ```text
//! SearchController
//!          ↓
//! Catalog trait
//!          ↓
//! SpotifyClient
//!     ├── Authentication (client-credentials grant)
//!     ├── Artist Search
//!     └── Artist Albums
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials token exchange
//! - `GET /search` - artist lookup by free text
//! - `GET /artists/{id}/albums` - one page of an artist's albums
//!
//! No call is retried and no request carries a timeout. There is no token
//! refresh, rate limit handling or pagination.

pub mod albums;
pub mod artists;
pub mod auth;

use std::{fmt, future::Future};

use reqwest::Client;

use crate::{
    config,
    types::{AccessToken, Album, AlbumResponse, Artist, Credentials},
};

#[derive(Debug)]
pub enum ApiError {
    Http(reqwest::Error),
    Critical(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http(e) => write!(f, "http error: {}", e),
            ApiError::Critical(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Http(e) => Some(e),
            ApiError::Critical(_) => None,
        }
    }
}

/// The catalog operations the search controller depends on.
///
/// [`SpotifyClient`] talks to the real API; tests substitute an in-memory
/// implementation.
pub trait Catalog {
    fn request_token(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<AccessToken, ApiError>> + Send;

    fn search_artists(
        &self,
        token: &str,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Artist>, ApiError>> + Send;

    fn artist_albums(
        &self,
        token: &str,
        artist_id: &str,
    ) -> impl Future<Output = Result<Vec<Album>, ApiError>> + Send;
}

/// `reqwest` backed [`Catalog`].
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token_url: String,
}

impl SpotifyClient {
    pub fn new(api_url: impl Into<String>, token_url: impl Into<String>) -> Self {
        SpotifyClient {
            http: Client::new(),
            api_url: api_url.into(),
            token_url: token_url.into(),
        }
    }

    /// Builds a client against the endpoints from [`config`].
    pub fn from_config() -> Self {
        Self::new(config::spotify_apiurl(), config::spotify_apitoken_url())
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }
}

impl Catalog for SpotifyClient {
    async fn request_token(&self, credentials: &Credentials) -> Result<AccessToken, ApiError> {
        auth::request_token(&self.http, &self.token_url, credentials).await
    }

    async fn search_artists(&self, token: &str, query: &str) -> Result<Vec<Artist>, ApiError> {
        let artists = artists::search_artists(&self.http, &self.api_url, token, query).await?;
        Ok(artists)
    }

    async fn artist_albums(&self, token: &str, artist_id: &str) -> Result<Vec<Album>, ApiError> {
        let AlbumResponse { items, next, total } =
            albums::get_albums_for_artist(&self.http, &self.api_url, token, artist_id).await?;

        if next.is_some() {
            tracing::debug!(
                artist_id,
                fetched = items.len(),
                total = total.unwrap_or_default(),
                "further album pages dropped"
            );
        }

        Ok(items)
    }
}
