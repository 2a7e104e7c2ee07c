use std::collections::HashSet;

use crate::types::ScoredTrack;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStatus {
    /// Nothing to select from.
    Empty,
    /// Fewer uniquely named tracks than requested.
    Partial,
    Complete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub tracks: Vec<ScoredTrack>,
    pub requested: usize,
}

impl Selection {
    pub fn status(&self) -> SelectionStatus {
        match self.tracks.len() {
            0 => SelectionStatus::Empty,
            n if n < self.requested => SelectionStatus::Partial,
            _ => SelectionStatus::Complete,
        }
    }

    pub fn uris(&self) -> Vec<String> {
        self.tracks.iter().map(|t| t.track.uri.clone()).collect()
    }
}

/// Picks up to `top_n` tracks with distinct names, highest score first.
///
/// The sort is stable, so equal scores keep their input order (fetch order when
/// fed from the collectors). A track is skipped when its exact name or its id was
/// already taken.
pub fn select(scored: &[ScoredTrack], top_n: usize) -> Selection {
    let mut ranked: Vec<&ScoredTrack> = scored.iter().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut seen_names: HashSet<&str> = HashSet::new();
    let mut seen_ids: HashSet<&str> = HashSet::new();
    let mut tracks: Vec<ScoredTrack> = Vec::new();

    for candidate in ranked {
        if tracks.len() >= top_n {
            break;
        }
        if seen_ids.contains(candidate.track.id.as_str())
            || !seen_names.insert(candidate.track.name.as_str())
        {
            continue;
        }
        seen_ids.insert(candidate.track.id.as_str());
        tracks.push(candidate.clone());
    }

    Selection {
        tracks,
        requested: top_n,
    }
}
