use std::path::PathBuf;

use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use audiofeat::{cli, config, error, utils};

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
    /// Collect audio features for the album tracks of artists
    Collect(CollectOptions),

    /// Show the cached feature table
    Table(TableOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CollectOptions {
    /// Artist name to look up; can be repeated
    #[clap(long = "artist", required = true, action = ArgAction::Append, num_args = 1)]
    pub artists: Vec<String>,

    /// Album title to skip (e.g. a deluxe or live reissue); can be repeated
    #[clap(long = "exclude-album", action = ArgAction::Append, num_args = 1)]
    pub exclude_albums: Vec<String>,

    /// Track ids per audio-features request
    #[clap(long, value_parser = clap::value_parser!(u16).range(1..=100))]
    pub batch_size: Option<u16>,

    /// Also write the joined table as JSON to this file
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// Hide the progress spinner
    #[clap(long)]
    pub quiet: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TableOptions {
    /// Filter by artist, album or track name
    #[clap(long)]
    pub search: Option<String>,

    /// Sort descending by tempo, energy, danceability or valence
    #[clap(long, value_parser = utils::parse_feature_sort)]
    pub sort: Option<utils::FeatureSort>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Collect(opt) => {
            cli::collect_features(
                opt.artists,
                opt.exclude_albums,
                opt.batch_size.map(usize::from),
                opt.output,
                opt.quiet,
            )
            .await
        }
        Command::Table(opt) => cli::list_features(opt.search, opt.sort).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
