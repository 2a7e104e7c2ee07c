use crate::{
    Res,
    spotify::SpotifyClient,
    types::{GetSeveralAlbumsResponse, GetSeveralTracksResponse, ReleaseTracks, Track, Tracks},
};

/// Largest page `GET /albums/{id}/tracks` serves.
const NESTED_TRACK_PAGE_SIZE: usize = 50;

/// Retrieves several releases with their complete track listings.
///
/// Calls `GET /albums?ids=...`. Spotify nests only the first 50 tracks of each
/// release in that response, so longer releases are completed page by page from
/// `GET /albums/{id}/tracks`.
///
/// # Arguments
///
/// * `client` - Authenticated Spotify client
/// * `ids` - Release ids, at most 20 per call (callers are expected to batch)
///
/// # Returns
///
/// One slot per requested id, in request order. A slot is `None` when Spotify
/// does not know the id. Track ids keep the release's track order, and nested
/// tracks without an id (local files) are skipped.
///
/// # Errors
///
/// Any failed request, including a failed follow-up page, is returned as
/// [`crate::Error::Upstream`] and aborts the whole batch.
pub async fn get_several_releases(
    client: &SpotifyClient,
    ids: &[String],
) -> Res<Vec<Option<ReleaseTracks>>> {
    let res: GetSeveralAlbumsResponse = client
        .get_json("/albums", &[("ids", ids.join(","))])
        .await?;

    let mut releases = Vec::with_capacity(res.albums.len());
    for album in res.albums {
        let release = match album {
            Some(album) => {
                let offset = album.tracks.items.len();
                let has_more = album.tracks.next.is_some();
                let mut release = ReleaseTracks::from(album);
                if has_more {
                    fetch_remaining_tracks(client, &mut release, offset).await?;
                }
                Some(release)
            }
            None => None,
        };
        releases.push(release);
    }

    Ok(releases)
}

/// Appends the track pages of `release` that follow `offset`.
async fn fetch_remaining_tracks(
    client: &SpotifyClient,
    release: &mut ReleaseTracks,
    mut offset: usize,
) -> Res<()> {
    loop {
        let page: Tracks = client
            .get_json(
                &format!("/albums/{}/tracks", release.id),
                &[
                    ("limit", NESTED_TRACK_PAGE_SIZE.to_string()),
                    ("offset", offset.to_string()),
                ],
            )
            .await?;

        let fetched = page.items.len();
        offset += fetched;
        release
            .track_ids
            .extend(page.items.into_iter().filter_map(|stub| stub.id));

        if page.next.is_none() || fetched == 0 {
            return Ok(());
        }
    }
}

/// Retrieves full track records, including popularity and album release date.
///
/// Calls `GET /tracks?ids=...` with at most 50 ids. Unknown ids come back as
/// `None` slots.
pub async fn get_several_tracks(client: &SpotifyClient, ids: &[String]) -> Res<Vec<Option<Track>>> {
    let res: GetSeveralTracksResponse = client
        .get_json("/tracks", &[("ids", ids.join(","))])
        .await?;

    Ok(res.tracks)
}
