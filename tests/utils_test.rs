use std::collections::BTreeSet;

use toptracks::types::{GetAlbumResponse, ReleaseTracks, TrackStub, Tracks};
use toptracks::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    assert_eq!(verifier.len(), 128);
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let challenge = generate_code_challenge("test_verifier_123");

    assert!(!challenge.is_empty());
    assert_eq!(challenge, generate_code_challenge("test_verifier_123"));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // URL-safe base64 without padding
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
    // 32 byte digest
    assert_eq!(challenge.len(), 43);
}

#[test]
fn test_release_kind_display() {
    assert_eq!(ReleaseKind::Album.to_string(), "album");
    assert_eq!(ReleaseKind::Single.to_string(), "single");
}

#[test]
fn test_release_kind_from_api_value() {
    assert_eq!("album".parse::<ReleaseKind>(), Ok(ReleaseKind::Album));
    assert_eq!("single".parse::<ReleaseKind>(), Ok(ReleaseKind::Single));
    assert!("compilation".parse::<ReleaseKind>().is_err());
    assert!("appears_on".parse::<ReleaseKind>().is_err());
}

#[test]
fn test_release_kinds_default() {
    let collected: Vec<ReleaseKind> = ReleaseKinds::default().iter().collect();
    assert_eq!(collected, vec![ReleaseKind::Album, ReleaseKind::Single]);
    assert_eq!(ReleaseKinds::default().to_string(), "album,single");
}

#[test]
fn test_release_kinds_display() {
    assert_eq!(ReleaseKinds(BTreeSet::new()).to_string(), "");

    let mut set = BTreeSet::new();
    set.insert(ReleaseKind::Single);
    assert_eq!(ReleaseKinds(set.clone()).to_string(), "single");

    set.insert(ReleaseKind::Album);
    assert_eq!(ReleaseKinds(set).to_string(), "album,single");
}

#[test]
fn test_parse_release_kinds_valid_inputs() {
    let kinds: Vec<ReleaseKind> = parse_release_kinds("album").unwrap().iter().collect();
    assert_eq!(kinds, vec![ReleaseKind::Album]);

    let kinds: Vec<ReleaseKind> = parse_release_kinds("single, album").unwrap().iter().collect();
    assert_eq!(kinds, vec![ReleaseKind::Album, ReleaseKind::Single]);

    let kinds: Vec<ReleaseKind> = parse_release_kinds("all").unwrap().iter().collect();
    assert_eq!(kinds, ReleaseKind::ALL.to_vec());

    let kinds: Vec<ReleaseKind> = parse_release_kinds("ALBUM,Single").unwrap().iter().collect();
    assert_eq!(kinds, vec![ReleaseKind::Album, ReleaseKind::Single]);

    let kinds: Vec<ReleaseKind> = parse_release_kinds("album,album").unwrap().iter().collect();
    assert_eq!(kinds, vec![ReleaseKind::Album]);
}

#[test]
fn test_parse_release_kinds_invalid_inputs() {
    let result = parse_release_kinds("");
    assert!(result.unwrap_err().contains("cannot be empty"));

    let result = parse_release_kinds("   ");
    assert!(result.unwrap_err().contains("cannot be empty"));

    let result = parse_release_kinds("compilation");
    assert!(result.unwrap_err().contains("invalid value 'compilation'"));

    let result = parse_release_kinds("album,,single");
    assert!(result.unwrap_err().contains("empty segment"));
}

#[test]
fn test_release_tracks_skip_stubs_without_id() {
    let album = GetAlbumResponse {
        id: "r1".to_string(),
        tracks: Tracks {
            items: vec![
                TrackStub {
                    id: Some("t1".to_string()),
                },
                TrackStub { id: None },
                TrackStub {
                    id: Some("t2".to_string()),
                },
            ],
            next: None,
        },
    };

    assert_eq!(
        ReleaseTracks::from(album),
        ReleaseTracks {
            id: "r1".to_string(),
            track_ids: vec!["t1".to_string(), "t2".to_string()],
        }
    );
}
