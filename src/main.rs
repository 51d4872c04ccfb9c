//! Tomodachi feed - Entry Point

use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tomodachi_feed::config::{self, KeyBindings};
use tomodachi_feed::model::{AppError, Mood, ScoringMode};
use tomodachi_feed::state::{open_session_storage, AppState, FeedStateStore};
use tracing::info;

/// Tomodachi feed - browse a community post feed in the terminal
#[derive(Parser, Debug)]
#[command(name = "tomo")]
#[command(version)]
#[command(about = "Rank and browse community posts by Hot, New, Top or Rising")]
pub struct Args {
    /// Path to a JSON or JSON Lines post file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Ranking tab to open (hot, new, top, rising); overrides the saved tab
    #[arg(long)]
    pub mode: Option<ScoringMode>,

    /// Only show posts with this mood (hype, emotional, plot_twist, dark)
    #[arg(long)]
    pub mood: Option<Mood>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tomo: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config)?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged);
        config::apply_cli_overrides(with_env, args.mood)
    };

    tomodachi_feed::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let input_source = tomodachi_feed::source::detect_input_source(args.file)?;
    let batch = input_source.read_posts()?;

    let mut store = FeedStateStore::open(open_session_storage(config.state_dir.clone()));
    if let Some(mode) = args.mode {
        store.set_mode(mode);
    }

    let app_state = AppState::new(batch.posts, store, config.layout(), Utc::now())
        .with_scroll_step(config.scroll_step)
        .with_mood(config.mood);

    tomodachi_feed::view::run(app_state, KeyBindings::default())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["tomo", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["tomo", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["tomo"]);
        assert_eq!(args.file, None);
        assert_eq!(args.mode, None);
        assert_eq!(args.mood, None);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_file_path_populates_file_field() {
        let args = Args::parse_from(["tomo", "posts.json"]);
        assert_eq!(args.file, Some(PathBuf::from("posts.json")));
    }

    #[test]
    fn test_mode_parses_every_tab() {
        for (raw, mode) in [
            ("hot", ScoringMode::Hot),
            ("new", ScoringMode::New),
            ("top", ScoringMode::Top),
            ("rising", ScoringMode::Rising),
        ] {
            let args = Args::parse_from(["tomo", "--mode", raw]);
            assert_eq!(args.mode, Some(mode));
        }
    }

    #[test]
    fn test_mode_is_case_insensitive() {
        let args = Args::parse_from(["tomo", "--mode", "TOP"]);
        assert_eq!(args.mode, Some(ScoringMode::Top));
    }

    #[test]
    fn test_mode_invalid_rejects_with_mode_error() {
        let err = Args::try_parse_from(["tomo", "--mode", "trending"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("expected one of hot, new, top, rising"));
    }

    #[test]
    fn test_mood_flag() {
        let args = Args::parse_from(["tomo", "--mood", "plot_twist"]);
        assert_eq!(args.mood, Some(Mood::PlotTwist));
    }

    #[test]
    fn test_mood_invalid_rejects() {
        let result = Args::try_parse_from(["tomo", "--mood", "cozy"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["tomo", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "tomo",
            "feed.jsonl",
            "--mode",
            "rising",
            "--mood",
            "dark",
            "--no-color",
        ]);
        assert_eq!(args.file, Some(PathBuf::from("feed.jsonl")));
        assert_eq!(args.mode, Some(ScoringMode::Rising));
        assert_eq!(args.mood, Some(Mood::Dark));
        assert!(args.no_color);
    }
}
