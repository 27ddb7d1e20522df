//! Box-drawn console tables for ranked entries and statistics.

use std::fmt;

use stroop_core::GameMode;

use crate::leaderboard::RankEntry;
use crate::statistics::StatisticsSummary;

const HEADERS: [&str; 6] = ["#", "Player", "Points", "Avg RT", "Rating", "%ile"];
const WIDTHS: [usize; 6] = [3, 17, 6, 8, 6, 6];

/// Width between the outer borders.
fn inner_width() -> usize {
    WIDTHS.iter().map(|w| w + 2).sum::<usize>() + WIDTHS.len() - 1
}

fn rule(left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = WIDTHS.iter().map(|w| "═".repeat(w + 2)).collect();
    format!("{left}{}{right}", segments.join(mid.to_string().as_str()))
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Ranked entries rendered as a table. Use via `Display`.
#[derive(Debug, Clone, Copy)]
pub struct LeaderboardTable<'a> {
    pub entries: &'a [RankEntry],
    pub mode: Option<GameMode>,
}

impl<'a> LeaderboardTable<'a> {
    pub fn new(entries: &'a [RankEntry], mode: Option<GameMode>) -> Self {
        Self { entries, mode }
    }

    fn title(&self) -> String {
        let scope = match self.mode {
            Some(mode) => mode.as_str().to_uppercase(),
            None => "ALL MODES".to_string(),
        };
        format!("COLOR CONFUSION LEADERBOARD - {scope}")
    }
}

impl fmt::Display for LeaderboardTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = inner_width();
        writeln!(f, "╔{}╗", "═".repeat(width))?;
        writeln!(f, "║{:^width$}║", self.title())?;
        writeln!(f, "{}", rule('╠', '╦', '╣'))?;

        write!(f, "║")?;
        for (header, w) in HEADERS.iter().zip(WIDTHS) {
            write!(f, " {header:^w$} ║")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", rule('╠', '╬', '╣'))?;

        for entry in self.entries {
            writeln!(
                f,
                "║ {:>3} ║ {:<17} ║ {:>6} ║ {:>8} ║ {:<6} ║ {:>6} ║",
                entry.rank,
                truncate(&entry.username, WIDTHS[1]),
                entry.total_points,
                format!("{:.0}ms", entry.avg_reaction_ms),
                truncate(&entry.rating, WIDTHS[4]),
                format!("{:.1}%", entry.percentile),
            )?;
        }
        write!(f, "{}", rule('╚', '╩', '╝'))
    }
}

/// Statistics summary rendered as a text block.
#[derive(Debug, Clone, Copy)]
pub struct StatisticsTable<'a>(pub &'a StatisticsSummary);

impl fmt::Display for StatisticsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        writeln!(f, "--- Global Statistics ---")?;
        writeln!(f, "Total Games:   {}", s.total_games)?;
        writeln!(f, "Mean Score:    {:.2}", s.mean_score)?;
        writeln!(f, "Median Score:  {:.2}", s.median_score)?;
        writeln!(f, "Std Dev:       {:.2}", s.std_dev_score)?;
        write!(f, "Mean RT:       {:.0}ms", s.mean_reaction_ms)
    }
}

pub fn render_leaderboard(entries: &[RankEntry], mode: Option<GameMode>) -> String {
    LeaderboardTable::new(entries, mode).to_string()
}

pub fn render_statistics(summary: &StatisticsSummary) -> String {
    StatisticsTable(summary).to_string()
}
