use std::{collections::BTreeSet, fmt, str::FromStr};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Release group the ranking draws tracks from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReleaseKind {
    Album,
    Single,
}

impl ReleaseKind {
    pub const ALL: [ReleaseKind; 2] = [ReleaseKind::Album, ReleaseKind::Single];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseKind::Album => "album",
            ReleaseKind::Single => "single",
        }
    }
}

impl fmt::Display for ReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "album" | "albums" => Ok(ReleaseKind::Album),
            "single" | "singles" => Ok(ReleaseKind::Single),
            other => Err(format!(
                "invalid value '{other}', expected one of: album, single, all"
            )),
        }
    }
}

/// Set of release kinds, rendered as Spotify's comma separated `include_groups`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseKinds(pub BTreeSet<ReleaseKind>);

impl ReleaseKinds {
    pub fn iter(&self) -> impl Iterator<Item = ReleaseKind> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, kind: ReleaseKind) -> bool {
        self.0.contains(&kind)
    }
}

impl Default for ReleaseKinds {
    fn default() -> Self {
        ReleaseKinds(ReleaseKind::ALL.into_iter().collect())
    }
}

impl fmt::Display for ReleaseKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}

/// Parses the `--type` flag: a comma separated list of `album`, `single` or `all`.
///
/// Case and surrounding whitespace are ignored, duplicates collapse.
pub fn parse_release_kinds(input: &str) -> Result<ReleaseKinds, String> {
    if input.trim().is_empty() {
        return Err("release type cannot be empty".to_string());
    }

    let mut kinds = BTreeSet::new();
    for segment in input.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            return Err(format!("empty segment in '{input}'"));
        }
        if segment.eq_ignore_ascii_case("all") {
            kinds.extend(ReleaseKind::ALL);
            continue;
        }
        kinds.insert(segment.parse::<ReleaseKind>()?);
    }

    Ok(ReleaseKinds(kinds))
}
