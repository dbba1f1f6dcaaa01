use crate::session::Session;
use crate::stats::Statistics;
use itertools::Itertools;

/// Comma-group an integer every three digits, e.g. 1000000 -> "1,000,000".
pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Display a minute value the way the report format expects: shortest
/// round-trip decimal, with whole values keeping one decimal ("30.0").
pub fn fmt_minutes(t: f64) -> String {
    if t.fract() == 0.0 && t.is_finite() {
        format!("{:.1}", t)
    } else {
        t.to_string()
    }
}

/// Render the persisted report. This layout is a byte-exact contract: the
/// store reads it back verbatim, so every label, separator and blank line
/// here is fixed.
pub fn render_file(session: &Session, stats: &Statistics) -> String {
    let mut out = String::new();

    out.push_str("GAMES CLUB STATISTICS REPORT\n");
    out.push_str(&format!("{}\n", "=".repeat(40)));
    out.push_str(&format!("Report for Player: {}\n", session.player_id));
    out.push_str(&format!("{}\n\n", "=".repeat(40)));

    out.push_str("SUMMARY:\n");
    out.push_str(&format!("{}\n", "-".repeat(20)));
    out.push_str(&format!("Player ID: {}\n", session.player_id));
    out.push_str(&format!("Number of Games: {}\n", session.records.len()));
    out.push_str(&format!(
        "Highest Score: {}\n",
        group_thousands(stats.highest_score)
    ));
    out.push_str(&format!(
        "Average Time: {} minutes\n",
        fmt_minutes(stats.average_time)
    ));
    out.push_str(&format!(
        "Total Time Played: {} minutes\n\n",
        fmt_minutes(session.total_time())
    ));

    out.push_str("DETAILED GAME DATA:\n");
    out.push_str(&format!("{}\n", "-".repeat(20)));
    for (i, record) in session.records.iter().enumerate() {
        out.push_str(&format!(
            "Game {}: Score = {}, Time = {} minutes\n",
            i + 1,
            group_thousands(record.score),
            fmt_minutes(record.time)
        ));
    }

    out.push_str(&format!("\n{}\n", "=".repeat(40)));
    out.push_str("RAW DATA:\n");
    out.push_str(&format!(
        "Scores: {}\n",
        session.scores().iter().join(", ")
    ));
    out.push_str(&format!(
        "Times: {}\n",
        session.times().iter().map(|t| fmt_minutes(*t)).join(", ")
    ));

    out
}

/// Render the console view of the same data: wider separators, per-game
/// scores and times listed separately, and no trailing raw-data block.
pub fn render_console(session: &Session, stats: &Statistics) -> String {
    let mut lines: Vec<String> = vec![
        String::new(),
        "=".repeat(60),
        "YOUR GAME STATISTICS".to_string(),
        "=".repeat(60),
        format!("Player ID: {}", session.player_id),
        format!("Number of games played: {}", session.records.len()),
        format!("Highest Score: {}", group_thousands(stats.highest_score)),
        format!(
            "Average Time per Game: {} minutes",
            fmt_minutes(stats.average_time)
        ),
        String::new(),
        "-".repeat(60),
        "ALL YOUR GAME DATA".to_string(),
        "-".repeat(60),
        "All Your Scores:".to_string(),
    ];

    for (i, record) in session.records.iter().enumerate() {
        lines.push(format!(
            "  Game {}: {} points",
            i + 1,
            group_thousands(record.score)
        ));
    }

    lines.push(String::new());
    lines.push("All Your Times:".to_string());
    for (i, record) in session.records.iter().enumerate() {
        lines.push(format!(
            "  Game {}: {} minutes",
            i + 1,
            fmt_minutes(record.time)
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Total Time Played: {} minutes",
        fmt_minutes(session.total_time())
    ));
    lines.push("=".repeat(60));

    lines.join("\n")
}
