#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use toptracks::{
    Error, Res,
    catalog::{Catalog, Publisher},
    types::{Artist, PlaylistRef, Release, ReleasePage, ReleaseTracks, Track, TrackAlbum},
    utils::{ReleaseKind, ReleaseKinds},
};

pub fn track(id: &str, name: &str, popularity: Option<u32>, release_date: Option<&str>) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        popularity,
        album: Some(TrackAlbum {
            release_date: release_date.map(str::to_string),
        }),
        uri: format!("spotify:track:{id}"),
    }
}

pub fn album(id: &str) -> Release {
    Release {
        id: id.to_string(),
        kind: ReleaseKind::Album,
    }
}

pub fn single(id: &str) -> Release {
    Release {
        id: id.to_string(),
        kind: ReleaseKind::Single,
    }
}

/// In-memory catalog that records the size of every request it serves.
#[derive(Default)]
pub struct FakeCatalog {
    pub artist: Option<Artist>,
    pub releases: Vec<Release>,
    /// Release id -> nested track ids. Ids not in the map resolve to `None`.
    pub release_tracks: HashMap<String, Vec<String>>,
    /// Track id -> record. Ids not in the map resolve to `None`.
    pub tracks: HashMap<String, Track>,
    pub fail_tracks: bool,

    pub page_calls: Mutex<Vec<(u32, u32)>>,
    pub release_batches: Mutex<Vec<usize>>,
    pub track_batches: Mutex<Vec<usize>>,
}

impl FakeCatalog {
    pub fn with_artist(name: &str) -> Self {
        Self {
            artist: Some(Artist {
                id: format!("{}-id", name.to_lowercase()),
                name: name.to_string(),
            }),
            ..Default::default()
        }
    }

    /// Adds one album per track, each listing exactly that track.
    pub fn with_tracks(mut self, tracks: Vec<Track>) -> Self {
        for t in tracks {
            let release_id = format!("rel-{}", t.id);
            self.releases.push(album(&release_id));
            self.release_tracks.insert(release_id, vec![t.id.clone()]);
            self.tracks.insert(t.id.clone(), t);
        }
        self
    }

    pub fn page_calls(&self) -> Vec<(u32, u32)> {
        self.page_calls.lock().unwrap().clone()
    }

    pub fn release_batches(&self) -> Vec<usize> {
        self.release_batches.lock().unwrap().clone()
    }

    pub fn track_batches(&self) -> Vec<usize> {
        self.track_batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn search_artist(&self, _name: &str) -> Res<Option<Artist>> {
        Ok(self.artist.clone())
    }

    async fn list_releases(
        &self,
        _artist_id: &str,
        _kinds: &ReleaseKinds,
        limit: u32,
        offset: u32,
    ) -> Res<ReleasePage> {
        self.page_calls.lock().unwrap().push((limit, offset));
        let start = (offset as usize).min(self.releases.len());
        let end = (start + limit as usize).min(self.releases.len());
        Ok(ReleasePage {
            items: self.releases[start..end].to_vec(),
            has_more: end < self.releases.len(),
        })
    }

    async fn get_releases(&self, ids: &[String]) -> Res<Vec<Option<ReleaseTracks>>> {
        self.release_batches.lock().unwrap().push(ids.len());
        Ok(ids
            .iter()
            .map(|id| {
                self.release_tracks.get(id).map(|track_ids| ReleaseTracks {
                    id: id.clone(),
                    track_ids: track_ids.clone(),
                })
            })
            .collect())
    }

    async fn get_tracks(&self, ids: &[String]) -> Res<Vec<Option<Track>>> {
        self.track_batches.lock().unwrap().push(ids.len());
        if self.fail_tracks {
            return Err(Error::Io(std::io::Error::other("tracks endpoint down")));
        }
        Ok(ids.iter().map(|id| self.tracks.get(id).cloned()).collect())
    }
}

#[derive(Default)]
pub struct FakePublisher {
    pub fail_append: bool,
    pub created: Mutex<Vec<(String, String, String, bool)>>,
    pub appended: Mutex<Vec<Vec<String>>>,
}

impl FakePublisher {
    pub fn created(&self) -> Vec<(String, String, String, bool)> {
        self.created.lock().unwrap().clone()
    }

    pub fn appended(&self) -> Vec<Vec<String>> {
        self.appended.lock().unwrap().clone()
    }
}

#[async_trait]
impl Publisher for FakePublisher {
    async fn current_user_id(&self) -> Res<String> {
        Ok("listener".to_string())
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        public: bool,
    ) -> Res<PlaylistRef> {
        self.created.lock().unwrap().push((
            user_id.to_string(),
            name.to_string(),
            description.to_string(),
            public,
        ));
        Ok(PlaylistRef {
            id: "playlist-1".to_string(),
            url: Some("https://open.spotify.com/playlist/playlist-1".to_string()),
        })
    }

    async fn add_tracks(&self, _playlist_id: &str, uris: &[String]) -> Res<()> {
        if self.fail_append {
            return Err(Error::Io(std::io::Error::other("append rejected")));
        }
        self.appended.lock().unwrap().push(uris.to_vec());
        Ok(())
    }
}
