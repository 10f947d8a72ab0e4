//! The search controller.
//!
//! Owns the query text, the album collection and the loading flag, and runs the
//! search pipeline: artist lookup, album lookup, dedup by name. Rendering reads
//! [`ViewState`] snapshots and never mutates the controller.
//!
//! Overlapping searches are tagged with a sequence number. Only the latest
//! issued search may commit results or reset the loading flag; earlier ones
//! resolve as [`SearchOutcome::Superseded`] and leave the state alone.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::{
    management::TokenStore,
    spotify::{ApiError, Catalog},
    types::{Album, Credentials},
    utils,
};

/// User-visible notifications. Only two messages ever reach the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NoArtistFound,
    SearchFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::NoArtistFound => "No artist found. Try another search.",
            Notice::SearchFailed => "Something went wrong. Please try again.",
        }
    }
}

pub trait Notifier {
    fn notify(&self, notice: Notice);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub query: String,
    pub albums: Vec<Album>,
    pub loading: bool,
    pub authorized: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Empty or whitespace-only query; nothing happened.
    Skipped,
    NoArtist,
    /// Committed this many albums.
    Completed(usize),
    Failed,
    /// A newer search was issued while this one was in flight.
    Superseded,
}

#[derive(Debug, Default)]
struct State {
    query: String,
    albums: Vec<Album>,
    loading: bool,
    latest: u64,
}

pub struct SearchController<C, N> {
    catalog: C,
    notifier: N,
    token: TokenStore,
    state: Mutex<State>,
    sequence: AtomicU64,
}

impl<C: Catalog, N: Notifier> SearchController<C, N> {
    pub fn new(catalog: C, notifier: N, token: TokenStore) -> Self {
        SearchController {
            catalog,
            notifier,
            token,
            state: Mutex::new(State::default()),
            sequence: AtomicU64::new(0),
        }
    }

    /// Exchanges `credentials` for an access token and stores it.
    ///
    /// Failures are logged and otherwise ignored; the token stays unset and
    /// later searches fail at the API.
    pub async fn initialize(&self, credentials: &Credentials) -> bool {
        match self.catalog.request_token(credentials).await {
            Ok(token) => {
                tracing::debug!(
                    token_type = %token.token_type,
                    expires_in = token.expires_in,
                    obtained_at = %token.obtained_at,
                    "access token obtained"
                );
                self.token.set(token).await;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "client-credentials token request failed");
                false
            }
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub async fn set_query(&self, text: impl Into<String>) {
        self.state.lock().await.query = text.into();
    }

    pub async fn snapshot(&self) -> ViewState {
        let authorized = self.token.is_set().await;
        let state = self.state.lock().await;
        ViewState {
            query: state.query.clone(),
            albums: state.albums.clone(),
            loading: state.loading,
            authorized,
        }
    }

    /// Searches with the text currently bound to the input.
    pub async fn submit(&self) -> SearchOutcome {
        let query = self.state.lock().await.query.clone();
        self.search(&query).await
    }

    /// Looks up `query` as an artist and replaces the album collection with
    /// that artist's albums, deduplicated by name.
    pub async fn search(&self, query: &str) -> SearchOutcome {
        let Some(query) = utils::normalize_query(query) else {
            return SearchOutcome::Skipped;
        };

        let seq = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.lock().await;
            state.latest = seq;
            state.loading = true;
            state.albums.clear();
        }

        tracing::debug!(seq, query, "search started");

        let result = self.fetch_albums(query).await;

        let mut state = self.state.lock().await;
        if state.latest != seq {
            tracing::debug!(seq, latest = state.latest, "search superseded");
            return SearchOutcome::Superseded;
        }

        let outcome = match result {
            Ok(Some(albums)) => {
                let count = albums.len();
                state.albums = albums;
                state.query.clear();
                SearchOutcome::Completed(count)
            }
            Ok(None) => {
                self.notifier.notify(Notice::NoArtistFound);
                SearchOutcome::NoArtist
            }
            Err(e) => {
                tracing::error!(seq, query, error = %e, "search failed");
                self.notifier.notify(Notice::SearchFailed);
                SearchOutcome::Failed
            }
        };

        state.loading = false;
        outcome
    }

    /// `Ok(None)` when no artist matched.
    async fn fetch_albums(&self, query: &str) -> Result<Option<Vec<Album>>, ApiError> {
        let token = self.token.bearer().await;

        let artists = self.catalog.search_artists(&token, query).await?;
        let Some(artist) = artists.into_iter().next() else {
            return Ok(None);
        };

        tracing::info!(query, artist_id = %artist.id, artist = %artist.name, "artist matched");

        let mut albums = self.catalog.artist_albums(&token, &artist.id).await?;
        utils::remove_duplicate_albums(&mut albums);

        Ok(Some(albums))
    }
}
