//! Plain-text rendering of the board and the activity feed.

use std::fmt::Write;

use paceboard_core::{HistoryEntry, UserTheme, TIME_FORMAT};
use paceboard_progress::{PaceStatus, ProgressSnapshot};

use crate::config::AppConfig;

const BAR_WIDTH: usize = 20;

/// Output options.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    /// Emit ANSI color codes for user themes
    pub color: bool,
}

/// Render the full board: MVP banner, time bar, per-user goals, feed.
pub fn board(snapshot: &ProgressSnapshot, config: &AppConfig, style: Style) -> String {
    let mut out = String::new();

    if let Some(user) = &snapshot.mvp.user {
        let _ = writeln!(
            out,
            "MVP of the day: {} ({} updates today)",
            paint(user, config.theme(user), style),
            snapshot.mvp.count
        );
        out.push('\n');
    }

    let _ = writeln!(out, "Days left: {}", snapshot.time.days_left);
    let _ = writeln!(
        out,
        "Time elapsed: {} {}%",
        bar(snapshot.time.fraction),
        percent(snapshot.time.fraction)
    );
    let behind = snapshot.behind().count();
    if behind > 0 {
        let _ = writeln!(out, "Behind pace: {} goals", behind);
    }

    for user in &snapshot.users {
        out.push('\n');
        let _ = writeln!(out, "{}", paint(&user.name, config.theme(&user.name), style));
        for goal in &user.goals {
            let _ = writeln!(out, "  {} {}", marker(goal.status), goal.name);
            let _ = writeln!(
                out,
                "    {} {} / {} {}",
                bar(goal.completion),
                goal.current,
                goal.target,
                goal.unit
            );
        }
    }

    if !snapshot.feed.is_empty() {
        out.push_str("\nActivity\n");
        out.push_str(&feed(snapshot.feed.iter(), config, style));
    }

    out
}

/// Render feed lines in the order given.
pub fn feed<'a>(
    entries: impl IntoIterator<Item = &'a HistoryEntry>,
    config: &AppConfig,
    style: Style,
) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "  {} {}: {}",
            entry.time.format(TIME_FORMAT),
            paint(&entry.user, config.theme(&entry.user), style),
            entry.note
        );
    }
    out
}

fn marker(status: PaceStatus) -> &'static str {
    match status {
        PaceStatus::OnTrack => "[on track]",
        PaceStatus::Behind => "[behind]  ",
    }
}

fn percent(fraction: f64) -> u32 {
    (fraction.clamp(0.0, 1.0) * 100.0) as u32
}

fn bar(fraction: f64) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn paint(text: &str, theme: Option<&UserTheme>, style: Style) -> String {
    match theme.and_then(UserTheme::rgb) {
        Some((r, g, b)) if style.color => format!("\x1b[1;38;2;{r};{g};{b}m{text}\x1b[0m"),
        _ => text.to_string(),
    }
}
