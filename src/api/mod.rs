//! # API Module
//!
//! HTTP endpoints served by the short-lived local server during `toptracks auth`.
//!
//! - [`callback`] completes the OAuth 2.0 PKCE flow by exchanging the
//!   authorization code Spotify redirects with for an access token.
//! - [`health`] reports the service name and version, handy for checking that
//!   `SERVER_ADDRESS` is reachable before registering it as redirect URI.
//!
//! See [`crate::server`] for the router and [`crate::spotify::auth`] for the
//! flow that drives it.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
