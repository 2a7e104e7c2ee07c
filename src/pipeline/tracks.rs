use std::collections::HashSet;

use indicatif::ProgressBar;

use crate::{
    Res,
    catalog::{Catalog, RELEASE_BATCH_SIZE, TRACK_BATCH_SIZE},
    types::Track,
};

/// Resolves release ids into the de-duplicated list of tracks they contain.
///
/// Release ids go out in batches of [`RELEASE_BATCH_SIZE`], the nested track ids
/// they return go out in batches of [`TRACK_BATCH_SIZE`]. Missing releases and
/// missing tracks are dropped. The result keeps fetch order, first occurrence of
/// each id wins.
pub async fn collect_tracks<C: Catalog + ?Sized>(
    catalog: &C,
    release_ids: &[String],
    pb: &ProgressBar,
) -> Res<Vec<Track>> {
    let track_ids = collect_track_ids(catalog, release_ids, pb).await?;

    let mut tracks: Vec<Track> = Vec::with_capacity(track_ids.len());
    for chunk in track_ids.chunks(TRACK_BATCH_SIZE) {
        let fetched = catalog.get_tracks(chunk).await?;
        tracks.extend(fetched.into_iter().flatten());
        pb.set_message(format!(
            "Fetched {}/{} track details...",
            tracks.len(),
            track_ids.len()
        ));
    }

    remove_duplicate_tracks(&mut tracks);
    Ok(tracks)
}

/// Flattens the nested track lists of all releases. The same id can show up
/// more than once when a track is both on an album and a single.
pub async fn collect_track_ids<C: Catalog + ?Sized>(
    catalog: &C,
    release_ids: &[String],
    pb: &ProgressBar,
) -> Res<Vec<String>> {
    let mut track_ids: Vec<String> = Vec::new();

    for chunk in release_ids.chunks(RELEASE_BATCH_SIZE) {
        let releases = catalog.get_releases(chunk).await?;
        for release in releases.into_iter().flatten() {
            track_ids.extend(release.track_ids);
        }
        pb.set_message(format!("Collected {} track ids...", track_ids.len()));
    }

    Ok(track_ids)
}

pub fn remove_duplicate_tracks(tracks: &mut Vec<Track>) {
    let mut seen_ids = HashSet::new();
    tracks.retain(|track| seen_ids.insert(track.id.clone()));
}
