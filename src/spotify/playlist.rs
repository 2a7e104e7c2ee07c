use crate::{
    Res,
    spotify::SpotifyClient,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse, CurrentUser, PlaylistRef,
    },
};

/// Profile of the user the token belongs to (`GET /me`).
pub async fn current_user(client: &SpotifyClient) -> Res<CurrentUser> {
    client.get_json("/me", &[]).await
}

/// Creates an empty, non-collaborative playlist for `user_id`.
///
/// # Arguments
///
/// * `user_id` - Owner of the new playlist, as returned by [`current_user`]
/// * `name` - Playlist title
/// * `description` - Text shown under the title
/// * `public` - Whether the playlist shows up on the user's profile
///
/// # Returns
///
/// The new playlist's id and its `open.spotify.com` URL.
///
/// # Errors
///
/// Returns [`crate::Error::Upstream`] when Spotify rejects the request, for
/// example because the token lacks the `playlist-modify-*` scope.
pub async fn create(
    client: &SpotifyClient,
    user_id: &str,
    name: &str,
    description: &str,
    public: bool,
) -> Res<PlaylistRef> {
    let request = CreatePlaylistRequest {
        name: name.to_string(),
        description: description.to_string(),
        public,
        collaborative: false,
    };

    let res: CreatePlaylistResponse = client
        .post_json(&format!("/users/{user_id}/playlists"), &request)
        .await?;

    Ok(PlaylistRef::from(res))
}

/// Appends up to 100 track uris to the end of a playlist.
pub async fn add_tracks(client: &SpotifyClient, playlist_id: &str, uris: &[String]) -> Res<()> {
    let request = AddTrackToPlaylistRequest {
        uris: uris.to_vec(),
    };

    let _: AddTrackToPlaylistResponse = client
        .post_json(&format!("/playlists/{playlist_id}/tracks"), &request)
        .await?;

    Ok(())
}
