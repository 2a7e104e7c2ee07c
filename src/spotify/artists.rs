use crate::{
    Res,
    spotify::SpotifyClient,
    types::{AlbumResponse, Artist, ArtistSearchResponse, Release, ReleasePage},
    utils::{ReleaseKind, ReleaseKinds},
};

/// Looks up the best matching artist for `name`.
///
/// Uses `GET /search` with an `artist:` field filter and `limit=1`, so the
/// first hit Spotify ranks is taken as the artist.
///
/// # Arguments
///
/// * `client` - Authenticated Spotify client
/// * `name` - Artist name as typed by the user
///
/// # Returns
///
/// `Ok(Some(artist))` with Spotify's id and spelling of the name, or `Ok(None)`
/// when the search comes back empty.
///
/// # Errors
///
/// Network and HTTP failures are returned as [`crate::Error::Upstream`].
pub async fn search_artist(client: &SpotifyClient, name: &str) -> Res<Option<Artist>> {
    let res: ArtistSearchResponse = client
        .get_json(
            "/search",
            &[
                ("q", format!("artist:{name}")),
                ("type", "artist".to_string()),
                ("limit", "1".to_string()),
            ],
        )
        .await?;

    Ok(res.artists.items.into_iter().next())
}

/// Fetches one page of an artist's discography from `GET /artists/{id}/albums`.
///
/// `include_groups` is built from `kinds`. A release is classified by its
/// `album_group` when present, otherwise by `album_type`. Releases of any other
/// type (compilations) are left out of the page. `has_more` mirrors the
/// presence of a `next` link.
///
/// # Arguments
///
/// * `artist_id` - Spotify id of the artist
/// * `kinds` - Release kinds to request and keep
/// * `limit` - Page size, at most 50
/// * `offset` - Index of the first release on the page
///
/// # Errors
///
/// Invalid artist ids come back as HTTP errors and are returned unchanged.
pub async fn get_releases_page(
    client: &SpotifyClient,
    artist_id: &str,
    kinds: &ReleaseKinds,
    limit: u32,
    offset: u32,
) -> Res<ReleasePage> {
    let res: AlbumResponse = client
        .get_json(
            &format!("/artists/{artist_id}/albums"),
            &[
                ("include_groups", kinds.to_string()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ],
        )
        .await?;

    let items = res
        .items
        .into_iter()
        .filter_map(|album| {
            let group = album.album_group.as_deref().unwrap_or(&album.album_type);
            group
                .parse::<ReleaseKind>()
                .ok()
                .map(|kind| Release { id: album.id, kind })
        })
        .collect();

    Ok(ReleasePage {
        items,
        has_more: res.next.is_some(),
    })
}
