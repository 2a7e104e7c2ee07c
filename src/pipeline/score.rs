use chrono::{Datelike, NaiveDate};

use crate::types::{ScoredTrack, Track};

/// How strongly release age boosts a track's popularity.
///
/// | level | multiplier             |
/// |-------|------------------------|
/// | 0     | 1                      |
/// | 1     | ln(ln(age_factor) + 1) |
/// | 2     | ln(age_factor)         |
/// | 3     | sqrt(age_factor)       |
///
/// Any other level scores like level 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Aggressiveness(pub u8);

impl Aggressiveness {
    pub const NONE: Aggressiveness = Aggressiveness(0);
    pub const SUBTLE: Aggressiveness = Aggressiveness(1);
    pub const BALANCED: Aggressiveness = Aggressiveness(2);
    pub const STRONG: Aggressiveness = Aggressiveness(3);

    /// `age_factor` is days since release plus 2, so it is always > 1.
    pub fn multiplier(self, age_factor: f64) -> f64 {
        match self.0 {
            0 => 1.0,
            1 => (age_factor.ln() + 1.0).ln(),
            3 => age_factor.sqrt(),
            _ => age_factor.ln(),
        }
    }
}

/// Parses a release date given as `YYYY-MM-DD`, `YYYY-MM` or `YYYY`.
///
/// A missing day becomes the 1st, a missing month becomes January. Input that
/// does not parse at all is treated as released `today`, and so is any year
/// before 1 (Spotify reports unknown dates as `0000`).
pub fn parse_release_date(raw: &str, today: NaiveDate) -> NaiveDate {
    let raw = raw.trim();
    let full = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok();

    let parsed = full.or_else(|| {
        let parts: Vec<&str> = raw.split('-').collect();
        match parts.as_slice() {
            [year] => year
                .parse::<i32>()
                .ok()
                .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1)),
            [year, month] => match (year.parse::<i32>(), month.parse::<u32>()) {
                (Ok(y), Ok(m)) => NaiveDate::from_ymd_opt(y, m, 1),
                _ => None,
            },
            _ => None,
        }
    });

    parsed.filter(|date| date.year() >= 1).unwrap_or(today)
}

/// Scores tracks against a fixed reference day, so a run is deterministic.
#[derive(Debug, Clone, Copy)]
pub struct ScoreEngine {
    aggressiveness: Aggressiveness,
    today: NaiveDate,
}

impl ScoreEngine {
    pub fn new(aggressiveness: Aggressiveness, today: NaiveDate) -> Self {
        Self {
            aggressiveness,
            today,
        }
    }

    /// Whole days since release plus 2. Future releases count as released today.
    pub fn age_factor(&self, raw_release_date: &str) -> f64 {
        let released = parse_release_date(raw_release_date, self.today);
        let days_since_release = (self.today - released).num_days().max(0);
        days_since_release as f64 + 2.0
    }

    /// `popularity * multiplier`. A missing popularity counts as 0, a missing
    /// release date leaves the popularity unadjusted.
    pub fn score(&self, track: &Track) -> f64 {
        let popularity = f64::from(track.popularity.unwrap_or(0));
        match track.release_date() {
            Some(raw) => popularity * self.aggressiveness.multiplier(self.age_factor(raw)),
            None => popularity,
        }
    }

    pub fn score_all(&self, tracks: Vec<Track>) -> Vec<ScoredTrack> {
        tracks
            .into_iter()
            .map(|track| ScoredTrack {
                score: self.score(&track),
                track,
            })
            .collect()
    }
}
