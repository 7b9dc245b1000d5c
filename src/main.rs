//! Magical Arena - turn-based duel simulator
//!
//! Runs the interactive arena menu on stdin/stdout, or a single scripted contest
//! with `--headless <CONFIG_FILE>`.

use anyhow::{Context, Result};
use std::io;
use tracing::info;

use magical_arena::arena::{Arena, Theme};
use magical_arena::cli;
use magical_arena::combat::GameRng;
use magical_arena::headless::{run_headless_contest, ContestConfig};
use magical_arena::settings::ArenaSettings;

fn init_logging(default_level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = cli::parse_args();

    let settings_path = args.settings.unwrap_or_else(ArenaSettings::default_path);

    if let Some(config_path) = args.headless {
        init_logging(tracing::Level::INFO);

        let settings = ArenaSettings::load(&settings_path);
        let mut config = ContestConfig::load_from_file(&config_path)
            .with_context(|| format!("failed to load contest config {:?}", config_path))?;
        config.resolve_seed(args.seed, settings.random_seed);

        let report = run_headless_contest(&config, args.output, &mut io::stdout().lock())
            .context("headless contest failed")?;
        info!("Headless contest finished in {} rounds", report.rounds.len());
        return Ok(());
    }

    // Keep logs out of the way of the menu prompts unless asked for
    init_logging(tracing::Level::WARN);

    let settings = ArenaSettings::load(&settings_path);
    let theme = Theme::from_color_flag(settings.color && !args.no_color);
    let dice = GameRng::from_optional_seed(args.seed.or(settings.random_seed));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut arena = Arena::new(stdin.lock(), stdout.lock(), theme, dice);
    arena.run().context("arena session failed")?;

    info!("Session ended after {} matches", arena.records().len());
    for (match_no, result) in arena.records().iter() {
        info!("Match {}: {}", match_no, result);
    }
    Ok(())
}
