use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    Error, Res, config,
    management::TokenManager,
    server::{bind_callback_listener, start_api_server},
    types::{PkceToken, Token},
    utils, warning,
};

/// Runs the OAuth 2.0 PKCE login and persists the resulting token.
///
/// # Flow
///
/// 1. Generate a code verifier and its SHA256 challenge
/// 2. Bind `SERVER_ADDRESS` and start the local callback server on it
/// 3. Open the authorization URL in the default browser
/// 4. Wait up to 60 seconds for `/callback` to exchange the code
/// 5. Write the token to the local cache
///
/// If the browser cannot be opened the URL is printed so the user can open it
/// by hand.
///
/// # Errors
///
/// - [`Error::Config`] for missing or malformed settings
/// - [`Error::Auth`] when the callback address is already taken (the browser is
///   not opened then) or when no token arrives in time
/// - IO or serialization errors from persisting the token
pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Res<()> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    let listener = bind_callback_listener(&config::server_addr()?).await?;
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        if let Err(e) = start_api_server(listener, server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&code_challenge={code_challenge}&code_challenge_method=S256&scope={scope}",
        spotify_auth_url = config::spotify_apiauth_url(),
        client_id = config::spotify_client_id()?,
        redirect_uri = config::spotify_redirect_uri()?,
        code_challenge = code_challenge,
        scope = config::spotify_scope().replace(' ', "%20")
    );

    // verifier must be in place before the callback can fire
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier,
            token: None,
        });
    }

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let token = wait_for_token(shared_state)
        .await
        .ok_or_else(|| Error::Auth("authentication failed or timed out".to_string()))?;

    TokenManager::new(token).persist().await
}

/// Polls the shared state once per second for up to 60 seconds.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        {
            let lock = shared_state.lock().await;
            if let Some(token) = lock.as_ref().and_then(|p| p.token.clone()) {
                return Some(token);
            }
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges a refresh token for a fresh access token.
///
/// Spotify may or may not rotate the refresh token. When the response omits it,
/// the previous one stays valid and is kept.
///
/// # Errors
///
/// - [`Error::Config`] if the client id is not configured
/// - [`Error::Upstream`] if the token endpoint rejects the refresh token
/// - [`Error::Auth`] if the response carries no access token
pub async fn refresh_token(refresh_token: &str) -> Res<Token> {
    let client_id = config::spotify_client_id()?;
    let res = Client::new()
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json: Value = res.json().await?;
    let mut token = token_from_json(&json)?;
    if token.refresh_token.is_empty() {
        token.refresh_token = refresh_token.to_string();
    }
    Ok(token)
}

/// Exchanges the authorization code received on `/callback` for a token.
///
/// `verifier` must be the code verifier whose challenge was sent with the
/// authorization request.
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Res<Token> {
    let client_id = config::spotify_client_id()?;
    let redirect_uri = config::spotify_redirect_uri()?;

    let res = Client::new()
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json: Value = res.json().await?;
    token_from_json(&json)
}

fn token_from_json(json: &Value) -> Res<Token> {
    let access_token = json["access_token"]
        .as_str()
        .ok_or_else(|| Error::Auth("token response without access_token".to_string()))?;

    Ok(Token {
        access_token: access_token.to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_u64().unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    })
}
