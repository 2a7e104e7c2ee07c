//! # CLI Module
//!
//! User-facing commands. Each command resolves its collaborators (token,
//! Spotify client, session), drives the library code and turns the result into
//! console output.
//!
//! - [`auth`] runs the Spotify OAuth PKCE login and stores the token
//! - [`top`] ranks an artist's tracks and publishes them as a playlist
//!
//! Expected terminal outcomes such as an unknown artist or an artist without
//! tracks are printed as warnings. Upstream failures abort with exit code 1.
//!
//! ```bash
//! toptracks auth
//! toptracks top "Daft Punk" 20
//! toptracks top "Nina Simone" 30 --aggressiveness 3 --type album --dry-run
//! ```

mod auth;
mod top;

pub use auth::auth;
pub use top::{TopOptions, table_rows, top};
