use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{Error, Res, api, types::PkceToken};

/// Binds the local OAuth callback address.
///
/// Binding happens before the browser is opened, so a busy port fails the login
/// at once instead of after the callback timeout.
///
/// # Errors
///
/// - [`Error::Config`] if `addr` is not a socket address
/// - [`Error::Auth`] naming the address if it cannot be bound, e.g. when another
///   process already listens on the port
pub async fn bind_callback_listener(addr: &str) -> Res<TcpListener> {
    let socket_addr = SocketAddr::from_str(addr)
        .map_err(|e| Error::Config(format!("invalid SERVER_ADDRESS '{addr}': {e}")))?;

    TcpListener::bind(socket_addr).await.map_err(|e| {
        Error::Auth(format!(
            "cannot listen for the OAuth callback on {addr} ({e}). Is another login running?"
        ))
    })
}

/// Serves `/callback` and `/health` on an already bound listener until the
/// process exits.
pub async fn start_api_server(
    listener: TcpListener,
    state: Arc<Mutex<Option<PkceToken>>>,
) -> Res<()> {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)));

    axum::serve(listener, app).await?;
    Ok(())
}
