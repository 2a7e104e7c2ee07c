//! # Ranking Pipeline
//!
//! Turns an artist name into a ranked, de-duplicated set of tracks and optionally
//! publishes it as a playlist. Data flows strictly forward:
//!
//! ```text
//! search_artist
//!      ↓
//! collect_releases   (pages of 50)
//!      ↓
//! collect_tracks     (release batches of 20, track batches of 50, null slots dropped)
//!      ↓
//! ScoreEngine        (popularity × age multiplier)
//!      ↓
//! select             (descending score, distinct names, top N)
//!      ↓
//! publish            (create playlist, append uris in batches of 100)
//! ```
//!
//! Every remote call is awaited before the next one is issued. Nothing is
//! retried: the first failed request aborts the run, and a playlist that was
//! already created stays in place when a later append fails.

mod releases;
mod score;
mod selector;
mod tracks;

pub use releases::collect_releases;
pub use score::{Aggressiveness, ScoreEngine, parse_release_date};
pub use selector::{Selection, SelectionStatus, select};
pub use tracks::{collect_track_ids, collect_tracks, remove_duplicate_tracks};

use chrono::NaiveDate;
use indicatif::ProgressBar;

use crate::{
    Error, Res,
    catalog::{Catalog, PLAYLIST_BATCH_SIZE, Publisher},
    types::{Artist, PlaylistRef},
    utils::ReleaseKinds,
};

/// Authenticated services plus the user playlists are created for.
pub struct Session<'a> {
    pub catalog: &'a dyn Catalog,
    pub publisher: &'a dyn Publisher,
    pub user_id: String,
}

impl<'a> Session<'a> {
    pub fn new(catalog: &'a dyn Catalog, publisher: &'a dyn Publisher, user_id: String) -> Self {
        Self {
            catalog,
            publisher,
            user_id,
        }
    }

    /// Builds a session for whoever owns the publisher's credentials.
    pub async fn connect(catalog: &'a dyn Catalog, publisher: &'a dyn Publisher) -> Res<Self> {
        let user_id = publisher.current_user_id().await?;
        Ok(Self::new(catalog, publisher, user_id))
    }
}

#[derive(Debug, Clone)]
pub struct RankRequest {
    pub artist: String,
    pub top_n: usize,
    pub aggressiveness: Aggressiveness,
    pub kinds: ReleaseKinds,
    /// Reference day release ages are measured against.
    pub today: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct Ranking {
    pub artist: Artist,
    pub release_count: usize,
    pub track_count: usize,
    pub selection: Selection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistSpec {
    pub name: String,
    pub description: String,
    pub public: bool,
}

impl PlaylistSpec {
    pub fn for_artist(artist_name: &str, top_n: usize, public: bool) -> Self {
        Self {
            name: format!("Top {top_n} {artist_name}"),
            description: format!("The {top_n} most popular tracks by {artist_name}"),
            public,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub ranking: Ranking,
    /// `None` on a dry run.
    pub playlist: Option<PlaylistRef>,
}

/// Collects, scores and selects the artist's top tracks.
///
/// # Errors
///
/// - [`Error::InvalidRequest`] when `top_n` is 0, before any request is made
/// - [`Error::NotFound`] when the artist search has no match
/// - [`Error::EmptyCatalog`] when no track survives null filtering
/// - any catalog error, unchanged
pub async fn rank<C: Catalog + ?Sized>(
    catalog: &C,
    request: &RankRequest,
    pb: &ProgressBar,
) -> Res<Ranking> {
    if request.top_n == 0 {
        return Err(Error::InvalidRequest(
            "the number of tracks must be at least 1".to_string(),
        ));
    }

    pb.set_message(format!("Searching for artist '{}'...", request.artist));
    let artist = catalog
        .search_artist(&request.artist)
        .await?
        .ok_or_else(|| Error::NotFound(request.artist.clone()))?;

    pb.set_message(format!("Fetching releases of {}...", artist.name));
    let releases = collect_releases(catalog, &artist.id, &request.kinds, pb).await?;
    let release_ids: Vec<String> = releases.into_iter().map(|r| r.id).collect();
    let release_count = release_ids.len();

    let tracks = collect_tracks(catalog, &release_ids, pb).await?;
    if tracks.is_empty() {
        return Err(Error::EmptyCatalog(artist.name));
    }
    let track_count = tracks.len();

    pb.set_message(format!(
        "Scoring {track_count} tracks with aggressiveness {}...",
        request.aggressiveness.0
    ));
    let scored = ScoreEngine::new(request.aggressiveness, request.today).score_all(tracks);
    let selection = select(&scored, request.top_n);

    Ok(Ranking {
        artist,
        release_count,
        track_count,
        selection,
    })
}

/// Creates the playlist and appends the selection in batches of [`PLAYLIST_BATCH_SIZE`].
pub async fn publish<P: Publisher + ?Sized>(
    publisher: &P,
    user_id: &str,
    spec: &PlaylistSpec,
    selection: &Selection,
    pb: &ProgressBar,
) -> Res<PlaylistRef> {
    pb.set_message(format!("Creating playlist '{}'...", spec.name));
    let playlist = publisher
        .create_playlist(user_id, &spec.name, &spec.description, spec.public)
        .await?;

    let uris = selection.uris();
    for chunk in uris.chunks(PLAYLIST_BATCH_SIZE) {
        publisher.add_tracks(&playlist.id, chunk).await?;
    }
    pb.set_message(format!("Added {} tracks to '{}'", uris.len(), spec.name));

    Ok(playlist)
}

/// Ranks the request and, unless `dry_run` is set, publishes the result.
pub async fn run(
    session: &Session<'_>,
    request: &RankRequest,
    public: bool,
    dry_run: bool,
    pb: &ProgressBar,
) -> Res<RunOutcome> {
    let ranking = rank(session.catalog, request, pb).await?;

    if dry_run {
        return Ok(RunOutcome {
            ranking,
            playlist: None,
        });
    }

    let spec = PlaylistSpec::for_artist(&ranking.artist.name, request.top_n, public);
    let playlist = publish(
        session.publisher,
        &session.user_id,
        &spec,
        &ranking.selection,
        pb,
    )
    .await?;

    Ok(RunOutcome {
        ranking,
        playlist: Some(playlist),
    })
}
