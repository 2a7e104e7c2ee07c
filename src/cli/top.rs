use std::time::Duration;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    Error, error, info,
    pipeline::{self, Aggressiveness, RankRequest, Ranking, RunOutcome, SelectionStatus, Session},
    spotify::SpotifyClient,
    success,
    types::TrackTableRow,
    utils::ReleaseKinds,
    warning,
};

pub struct TopOptions {
    pub artist: String,
    pub top_n: usize,
    pub aggressiveness: u8,
    pub release_types: ReleaseKinds,
    pub private: bool,
    pub dry_run: bool,
}

pub async fn top(opts: TopOptions) {
    let client = match SpotifyClient::load().await {
        Ok(client) => client,
        Err(e) => error!(
            "Failed to load token. Please run toptracks auth\n Error: {}",
            e
        ),
    };

    let pb = spinner();
    pb.set_message("Resolving current user...");
    let session = match Session::connect(&client, &client).await {
        Ok(session) => session,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to resolve current user: {}", e);
        }
    };

    let request = RankRequest {
        artist: opts.artist,
        top_n: opts.top_n,
        aggressiveness: Aggressiveness(opts.aggressiveness),
        kinds: opts.release_types,
        today: Utc::now().date_naive(),
    };

    info!(
        "Ranking tracks of '{}' with aggressiveness level {}...",
        request.artist, request.aggressiveness.0
    );

    match pipeline::run(&session, &request, !opts.private, opts.dry_run, &pb).await {
        Ok(outcome) => {
            pb.finish_and_clear();
            report(&outcome, request.top_n);
        }
        Err(e @ (Error::NotFound(_) | Error::EmptyCatalog(_))) => {
            pb.finish_and_clear();
            warning!("{}", e);
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("{}", e);
        }
    }
}

fn report(outcome: &RunOutcome, top_n: usize) {
    let ranking = &outcome.ranking;
    info!(
        "Found artist: {} (ID: {})",
        ranking.artist.name, ranking.artist.id
    );
    info!(
        "Found {} releases with {} unique tracks.",
        ranking.release_count, ranking.track_count
    );

    if ranking.selection.status() == SelectionStatus::Partial {
        warning!(
            "Only {} uniquely named tracks exist, fewer than the {} requested.",
            ranking.selection.tracks.len(),
            top_n
        );
    }

    println!("{}", Table::new(table_rows(ranking)));

    match &outcome.playlist {
        Some(playlist) => {
            success!(
                "Your new playlist \"Top {} {}\" is ready.",
                top_n,
                ranking.artist.name
            );
            if let Some(url) = &playlist.url {
                info!("Listen here: {}", url);
            }
        }
        None => info!("Dry run, no playlist created."),
    }
}

pub fn table_rows(ranking: &Ranking) -> Vec<TrackTableRow> {
    ranking
        .selection
        .tracks
        .iter()
        .enumerate()
        .map(|(i, scored)| TrackTableRow {
            rank: i + 1,
            name: scored.track.name.clone(),
            popularity: scored
                .track
                .popularity
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
            released: scored.track.release_date().unwrap_or("-").to_string(),
            score: format!("{:.2}", scored.score),
        })
        .collect()
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
