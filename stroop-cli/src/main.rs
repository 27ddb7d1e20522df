//! Stroop demo — rank the sample leaderboard, show scoring and ratings, and
//! play one seeded session end to end.
//!
//! Rules come from `stroop.toml` in the working directory when present,
//! otherwise the built-in defaults. Log level via `RUST_LOG`.

mod sample_data;

use std::path::Path;

use anyhow::Result;
use rand::Rng;
use stroop_core::{
    calculate_coins, calculate_points, calculate_stars, numerical_rating, performance_rating,
    GameMode, GameSession, SeedHierarchy, SessionReport, StroopConfig,
};
use stroop_ranker::{
    render_leaderboard, render_statistics, GameKind, Leaderboard, ProgressBoard, Submission,
    Wallet, DEFAULT_LEADERBOARD_SIZE,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const CONFIG_FILE: &str = "stroop.toml";
const DEMO_SEED: u64 = 42;
const DEMO_PLAYER: &str = "DemoPlayer";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("stroop=info".parse()?))
        .init();

    let config = load_config(Path::new(CONFIG_FILE));
    let mut leaderboard = Leaderboard::from_records(sample_data::sample_records());
    info!(records = leaderboard.len(), "loaded sample leaderboard");

    println!("{}", render_leaderboard(&leaderboard.rankings(None), None));
    println!();
    for mode in GameMode::ALL {
        println!("{}", render_leaderboard(&leaderboard.rankings(Some(mode)), Some(mode)));
        println!();
    }
    println!("{}", render_statistics(&leaderboard.statistics()));
    println!();

    print_scoring_demo();
    print_rating_demo();

    let report = play_demo_session(&config, GameMode::Endless)?;
    println!("=== Demo Session ===");
    println!("{}", serde_json::to_string_pretty(&report)?);
    println!();

    let mut progress = ProgressBoard::new(GameKind::Confusion);
    for sample in leaderboard.records() {
        progress.submit(Submission::new(
            sample.username.clone(),
            f64::from(sample.total_points),
        ));
    }

    let standing = leaderboard.percentile_of(report.total_points);
    leaderboard.add(report.to_record(DEMO_PLAYER));
    println!(
        "{DEMO_PLAYER} scored {} points, ahead of {standing:.1}% of recorded games.",
        report.total_points
    );
    let mode = Some(report.mode);
    println!("{}", render_leaderboard(&leaderboard.rankings(mode), mode));
    println!();
    let outcome = progress.submit(Submission::from_report(DEMO_PLAYER, &report));
    info!(?outcome, "submitted demo session to progress board");

    let mut wallet = Wallet::default();
    wallet.credit_report(&report);
    println!("Wallet: {} coins, {} stars", wallet.coins, wallet.stars);
    println!();

    println!("--- Best Confusion Scores ---");
    for (i, entry) in progress.leaderboard(DEFAULT_LEADERBOARD_SIZE).iter().enumerate() {
        println!("{:>2}. {:<17} {:>6.0}", i + 1, entry.username, entry.score);
    }

    Ok(())
}

fn load_config(path: &Path) -> StroopConfig {
    if !path.exists() {
        return StroopConfig::default();
    }
    match StroopConfig::from_file(path) {
        Ok(config) => {
            info!("Loaded rules from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Failed to load {}: {e}, using defaults", path.display());
            StroopConfig::default()
        }
    }
}

fn print_scoring_demo() {
    println!("--- Scoring (combo, difficulty 3) ---");
    for (reaction_ms, combo) in [(300, 5), (600, 3), (1200, 1), (1800, 0)] {
        println!(
            "{reaction_ms:>5}ms  combo {combo}  -> {:>3} pts",
            calculate_points(reaction_ms, combo, 3)
        );
    }
    println!(
        "250 points -> {} coins, 37 correct -> {} stars",
        calculate_coins(250),
        calculate_stars(37)
    );
    println!();
}

fn print_rating_demo() {
    println!("--- Ratings ---");
    for (avg_ms, score) in [(450.0, 45), (700.0, 22), (1100.0, 12)] {
        println!(
            "{avg_ms:>6.0}ms  score {score:>2}  -> {}",
            performance_rating(avg_ms, score)
        );
    }
    println!(
        "Numerical rating (500ms, 35, combo 12): {:.1}",
        numerical_rating(500.0, 35, 12)
    );
    println!();
}

/// Seeded bot: answers correctly except every fourth question, with
/// reaction times drawn from the same stream.
fn play_demo_session(config: &StroopConfig, mode: GameMode) -> Result<SessionReport> {
    let seeds = SeedHierarchy::new(DEMO_SEED);
    let mut rng = seeds.rng_for(DEMO_PLAYER, 0);
    let mut session = GameSession::with_config(mode, config);

    let mut round = 0u32;
    while let Some(question) = session.next_question(&mut rng).cloned() {
        round += 1;
        let answer = if round % 4 == 0 {
            question
                .options
                .iter()
                .find(|o| !question.is_correct(o))
                .cloned()
                .unwrap_or_default()
        } else {
            question.font_color_name.clone()
        };
        let reaction_ms = rng.gen_range(350..1200);
        session.submit_answer(&answer, reaction_ms)?;
    }

    Ok(session.report())
}
