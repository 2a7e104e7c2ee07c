mod common;

use std::collections::HashSet;

use common::track;
use toptracks::pipeline::{SelectionStatus, select};
use toptracks::types::ScoredTrack;

fn scored(id: &str, name: &str, score: f64) -> ScoredTrack {
    ScoredTrack {
        track: track(id, name, Some(50), Some("2020-01-01")),
        score,
    }
}

fn ids(tracks: &[ScoredTrack]) -> Vec<&str> {
    tracks.iter().map(|t| t.track.id.as_str()).collect()
}

#[test]
fn test_select_orders_by_descending_score() {
    let input = vec![
        scored("a", "Alpha", 10.0),
        scored("b", "Bravo", 30.0),
        scored("c", "Charlie", 20.0),
    ];

    let selection = select(&input, 3);
    assert_eq!(ids(&selection.tracks), vec!["b", "c", "a"]);
    assert_eq!(selection.status(), SelectionStatus::Complete);
}

#[test]
fn test_select_skips_repeated_names() {
    let input = vec![
        scored("a1", "Alpha", 90.0),
        scored("b", "Bravo", 50.0),
        scored("a2", "Alpha", 80.0),
        scored("c", "Charlie", 10.0),
    ];

    let selection = select(&input, 3);
    assert_eq!(ids(&selection.tracks), vec!["a1", "b", "c"]);
}

#[test]
fn test_select_name_match_is_case_sensitive() {
    let input = vec![scored("a1", "Alpha", 90.0), scored("a2", "alpha", 80.0)];

    let selection = select(&input, 2);
    assert_eq!(ids(&selection.tracks), vec!["a1", "a2"]);
}

#[test]
fn test_select_skips_repeated_ids() {
    let mut renamed = scored("a", "Alpha (Remastered)", 70.0);
    renamed.track.id = "a".to_string();
    let input = vec![scored("a", "Alpha", 90.0), renamed, scored("b", "Bravo", 10.0)];

    let selection = select(&input, 3);
    assert_eq!(ids(&selection.tracks), vec!["a", "b"]);
}

#[test]
fn test_select_ties_keep_input_order() {
    let input = vec![
        scored("first", "One", 40.0),
        scored("second", "Two", 40.0),
        scored("third", "Three", 40.0),
        scored("top", "Four", 41.0),
    ];

    let selection = select(&input, 4);
    assert_eq!(ids(&selection.tracks), vec!["top", "first", "second", "third"]);
}

#[test]
fn test_select_is_idempotent() {
    let input = vec![
        scored("a", "Alpha", 12.5),
        scored("b", "Bravo", 12.5),
        scored("c", "Alpha", 99.0),
        scored("d", "Delta", 0.0),
        scored("e", "Echo", 45.1),
    ];

    let first = select(&input, 3);
    let second = select(&input, 3);
    assert_eq!(first, second);
}

#[test]
fn test_select_status() {
    let input = vec![scored("a", "Alpha", 1.0), scored("b", "Alpha", 2.0)];

    let partial = select(&input, 5);
    assert_eq!(partial.tracks.len(), 1);
    assert_eq!(partial.status(), SelectionStatus::Partial);

    let empty = select(&[], 5);
    assert!(empty.tracks.is_empty());
    assert_eq!(empty.status(), SelectionStatus::Empty);

    let complete = select(&input, 1);
    assert_eq!(complete.status(), SelectionStatus::Complete);
}

#[test]
fn test_select_output_has_unique_names_and_ids() {
    let names = ["Alpha", "Bravo", "Charlie", "Alpha", "Bravo", "Echo"];
    let input: Vec<ScoredTrack> = (0..60)
        .map(|i| {
            scored(
                &format!("id{}", i % 17),
                names[i % names.len()],
                ((i * 37) % 11) as f64,
            )
        })
        .collect();

    for top_n in 1..=8 {
        let selection = select(&input, top_n);
        assert!(selection.tracks.len() <= top_n);

        let unique_names: HashSet<&str> =
            selection.tracks.iter().map(|t| t.track.name.as_str()).collect();
        let unique_ids: HashSet<&str> = selection.tracks.iter().map(|t| t.track.id.as_str()).collect();
        assert_eq!(unique_names.len(), selection.tracks.len());
        assert_eq!(unique_ids.len(), selection.tracks.len());
    }
}

#[test]
fn test_select_uris_follow_rank() {
    let input = vec![scored("a", "Alpha", 1.0), scored("b", "Bravo", 2.0)];
    let selection = select(&input, 2);
    assert_eq!(
        selection.uris(),
        vec!["spotify:track:b".to_string(), "spotify:track:a".to_string()]
    );
}
