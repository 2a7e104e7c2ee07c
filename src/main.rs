use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tokio::sync::Mutex;
use toptracks::{cli, config, types::PkceToken, utils, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Create a playlist of an artist's top tracks
    Top(TopArgs),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TopArgs {
    /// The name of the artist (use quotes for multi-word names)
    pub artist: String,

    /// The number of tracks to include in the playlist
    #[clap(value_parser = clap::value_parser!(u16).range(1..))]
    pub top_n: u16,

    /// How much to weigh a song's age against its current popularity.
    ///   0: none (pure Spotify popularity, favors newness)
    ///   1: subtle (double logarithm, gently boosts classics)
    ///   2: balanced (logarithm)
    ///   3: strong (square root, heavily favors time-tested tracks)
    #[clap(
        short,
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(0..=3),
        verbatim_doc_comment
    )]
    pub aggressiveness: u8,

    /// Release type(s) to draw tracks from: album, single or all
    #[clap(
        long = "type",
        default_value = "album,single",
        value_parser = utils::parse_release_kinds
    )]
    pub release_types: utils::ReleaseKinds,

    /// Create the playlist as private
    #[clap(long)]
    pub private: bool,

    /// Print the ranking without creating a playlist
    #[clap(long)]
    pub dry_run: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load .env file, using process environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Top(args) => {
            cli::top(cli::TopOptions {
                artist: args.artist,
                top_n: usize::from(args.top_n),
                aggressiveness: args.aggressiveness,
                release_types: args.release_types,
                private: args.private,
                dry_run: args.dry_run,
            })
            .await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
