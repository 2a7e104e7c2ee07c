//! # Spotify Integration Module
//!
//! HTTP client for the Spotify Web API endpoints the ranking pipeline needs, and the
//! OAuth 2.0 PKCE login that produces its token.
//!
//! ```text
//! Pipeline (Catalog / Publisher traits)
//!          ↓
//! SpotifyClient
//!     ├── artists   GET /search, GET /artists/{id}/albums
//!     ├── releases  GET /albums, GET /albums/{id}/tracks, GET /tracks
//!     └── playlist  GET /me, POST /users/{id}/playlists, POST /playlists/{id}/tracks
//!          ↓
//! reqwest (JSON, bearer auth)
//! ```
//!
//! Every response goes through `error_for_status()`, and failures surface as
//! [`crate::Error::Upstream`] without retries. The access token comes from the
//! persisted [`TokenManager`] and is refreshed shortly before it expires.

pub mod artists;
pub mod auth;
pub mod playlist;
pub mod releases;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;

use crate::{
    Res,
    catalog::{Catalog, Publisher},
    config,
    management::TokenManager,
    types::{Artist, PlaylistRef, ReleasePage, ReleaseTracks, Track},
    utils::ReleaseKinds,
};

/// Web API client implementing both [`Catalog`] and [`Publisher`].
///
/// Holds the token behind a mutex so a refresh happens at most once while
/// requests are in flight.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    tokens: Mutex<TokenManager>,
}

impl SpotifyClient {
    pub fn new(tokens: TokenManager) -> Self {
        Self::with_api_url(tokens, &config::spotify_apiurl())
    }

    /// Client against a custom Web API base URL, e.g. a local stand-in server.
    pub fn with_api_url(tokens: TokenManager, api_url: &str) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            tokens: Mutex::new(tokens),
        }
    }

    /// Client backed by the token persisted by `toptracks auth`.
    pub async fn load() -> Res<Self> {
        Ok(Self::new(TokenManager::load().await?))
    }

    async fn bearer(&self) -> Res<String> {
        self.tokens.lock().await.get_valid_token().await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Res<T> {
        let token = self.bearer().await?;
        let response = self
            .http
            .get(format!("{}{}", self.api_url, path))
            .bearer_auth(token)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Res<T> {
        let token = self.bearer().await?;
        let response = self
            .http
            .post(format!("{}{}", self.api_url, path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl Catalog for SpotifyClient {
    async fn search_artist(&self, name: &str) -> Res<Option<Artist>> {
        artists::search_artist(self, name).await
    }

    async fn list_releases(
        &self,
        artist_id: &str,
        kinds: &ReleaseKinds,
        limit: u32,
        offset: u32,
    ) -> Res<ReleasePage> {
        artists::get_releases_page(self, artist_id, kinds, limit, offset).await
    }

    async fn get_releases(&self, ids: &[String]) -> Res<Vec<Option<ReleaseTracks>>> {
        releases::get_several_releases(self, ids).await
    }

    async fn get_tracks(&self, ids: &[String]) -> Res<Vec<Option<Track>>> {
        releases::get_several_tracks(self, ids).await
    }
}

#[async_trait]
impl Publisher for SpotifyClient {
    async fn current_user_id(&self) -> Res<String> {
        Ok(playlist::current_user(self).await?.id)
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        public: bool,
    ) -> Res<PlaylistRef> {
        playlist::create(self, user_id, name, description, public).await
    }

    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Res<()> {
        playlist::add_tracks(self, playlist_id, uris).await
    }
}
