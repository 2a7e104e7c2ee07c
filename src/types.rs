use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::utils::ReleaseKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistSearchResponse {
    pub artists: ArtistsContainer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistsContainer {
    pub items: Vec<Artist>,
}

/// One page of `GET /artists/{id}/albums`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumResponse {
    pub items: Vec<Album>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub album_type: String,
    #[serde(default)]
    pub album_group: Option<String>,
}

/// An album or single of the artist. Only the id travels further down the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Release {
    pub id: String,
    pub kind: ReleaseKind,
}

#[derive(Debug, Clone, Default)]
pub struct ReleasePage {
    pub items: Vec<Release>,
    pub has_more: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSeveralAlbumsResponse {
    pub albums: Vec<Option<GetAlbumResponse>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAlbumResponse {
    pub id: String,
    pub tracks: Tracks,
}

/// One page of a release's track listing. `next` is set when more pages follow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tracks {
    pub items: Vec<TrackStub>,
    #[serde(default)]
    pub next: Option<String>,
}

/// Simplified track as nested in a release. Local files come back without an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackStub {
    pub id: Option<String>,
}

/// Track ids listed by one release, in release order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseTracks {
    pub id: String,
    pub track_ids: Vec<String>,
}

impl From<GetAlbumResponse> for ReleaseTracks {
    fn from(album: GetAlbumResponse) -> Self {
        ReleaseTracks {
            id: album.id,
            track_ids: album
                .tracks
                .items
                .into_iter()
                .filter_map(|stub| stub.id)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSeveralTracksResponse {
    pub tracks: Vec<Option<Track>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default)]
    pub album: Option<TrackAlbum>,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackAlbum {
    #[serde(default)]
    pub release_date: Option<String>,
}

impl Track {
    /// Raw release date of the track's album, `None` when absent or blank.
    pub fn release_date(&self) -> Option<&str> {
        self.album
            .as_ref()
            .and_then(|a| a.release_date.as_deref())
            .filter(|d| !d.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTrack {
    pub track: Track,
    pub score: f64,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub rank: usize,
    pub name: String,
    pub popularity: String,
    pub released: String,
    pub score: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistRef {
    pub id: String,
    pub url: Option<String>,
}

impl From<CreatePlaylistResponse> for PlaylistRef {
    fn from(resp: CreatePlaylistResponse) -> Self {
        PlaylistRef {
            id: resp.id,
            url: resp.external_urls.spotify,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}
