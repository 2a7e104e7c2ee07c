//! Capability traits for the two remote services the pipeline talks to.
//!
//! [`Catalog`] is read-only and every call is idempotent. [`Publisher`] mutates
//! the user's library. The Spotify client implements both; tests implement
//! them with in-memory fakes.

use async_trait::async_trait;

use crate::{
    Res,
    types::{Artist, PlaylistRef, ReleasePage, ReleaseTracks, Track},
    utils::ReleaseKinds,
};

/// Releases requested per page of an artist's discography.
pub const RELEASE_PAGE_SIZE: u32 = 50;

/// Maximum ids accepted by `get_releases`.
pub const RELEASE_BATCH_SIZE: usize = 20;

/// Maximum ids accepted by `get_tracks`.
pub const TRACK_BATCH_SIZE: usize = 50;

/// Maximum uris accepted by `add_tracks`.
pub const PLAYLIST_BATCH_SIZE: usize = 100;

#[async_trait]
pub trait Catalog: Send + Sync {
    /// Best match for `name`, or `None` when the search is empty.
    async fn search_artist(&self, name: &str) -> Res<Option<Artist>>;

    async fn list_releases(
        &self,
        artist_id: &str,
        kinds: &ReleaseKinds,
        limit: u32,
        offset: u32,
    ) -> Res<ReleasePage>;

    /// Releases with their complete nested track ids, one slot per requested id.
    /// A slot is `None` when the catalog does not know the id.
    async fn get_releases(&self, ids: &[String]) -> Res<Vec<Option<ReleaseTracks>>>;

    /// Full track records, one slot per requested id.
    async fn get_tracks(&self, ids: &[String]) -> Res<Vec<Option<Track>>>;
}

#[async_trait]
pub trait Publisher: Send + Sync {
    async fn current_user_id(&self) -> Res<String>;

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        public: bool,
    ) -> Res<PlaylistRef>;

    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Res<()>;
}
