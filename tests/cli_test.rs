mod common;

use common::track;
use toptracks::{
    cli::table_rows,
    management::TokenManager,
    pipeline::{Ranking, select},
    types::{Artist, ScoredTrack, Token},
};

fn token(obtained_at: u64, expires_in: u64) -> Token {
    Token {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        scope: "playlist-modify-public".to_string(),
        expires_in,
        obtained_at,
    }
}

#[test]
fn test_token_expiry_margin() {
    let mgr = TokenManager::new(token(1_000, 3_600));

    assert!(!mgr.is_expired(1_000));
    assert!(!mgr.is_expired(4_359));
    // four minutes before the real expiry
    assert!(mgr.is_expired(4_360));
    assert!(mgr.is_expired(10_000));
}

#[test]
fn test_token_with_short_lifetime_is_always_stale() {
    let mgr = TokenManager::new(token(1_000, 60));
    assert!(mgr.is_expired(1_000));
}

#[test]
fn test_table_rows() {
    let scored = vec![
        ScoredTrack {
            track: track("t1", "Digital Love", Some(71), Some("2001-03-12")),
            score: 71.0,
        },
        ScoredTrack {
            track: track("t2", "Untitled", None, None),
            score: 0.0,
        },
    ];
    let ranking = Ranking {
        artist: Artist {
            id: "a1".to_string(),
            name: "Daft Punk".to_string(),
        },
        release_count: 1,
        track_count: 2,
        selection: select(&scored, 2),
    };

    let rows = table_rows(&ranking);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[0].name, "Digital Love");
    assert_eq!(rows[0].popularity, "71");
    assert_eq!(rows[0].released, "2001-03-12");
    assert_eq!(rows[0].score, "71.00");
    assert_eq!(rows[1].popularity, "-");
    assert_eq!(rows[1].released, "-");
}
