use crate::console::Console;
use crate::input;
use crate::report;
use crate::stats::Statistics;
use crate::store::{report_file_name, ReportStore};
use std::io::{self, BufRead, Write};

/// One game's captured (score, time) pair. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameRecord {
    pub score: u32,
    /// Playtime in minutes.
    pub time: f64,
}

/// The ordered records gathered in one recording invocation, tied to a single
/// normalized player identifier. Lives only for the duration of that
/// invocation; its durable trace is the rendered report.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub player_id: String,
    pub records: Vec<GameRecord>,
}

impl Session {
    pub fn new(player_id: String, records: Vec<(u32, f64)>) -> Self {
        Session {
            player_id,
            records: records
                .into_iter()
                .map(|(score, time)| GameRecord { score, time })
                .collect(),
        }
    }

    pub fn scores(&self) -> Vec<u32> {
        self.records.iter().map(|r| r.score).collect()
    }

    pub fn times(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.time).collect()
    }

    pub fn total_time(&self) -> f64 {
        self.records.iter().map(|r| r.time).sum()
    }
}

/// Run one full recording flow: collect player id, game count and per-game
/// records, aggregate, show the console report, and persist the file report.
/// Writes exactly one file; a failed save is reported but not fatal.
pub fn record_session<R, W, S>(console: &mut Console<R, W>, store: &S) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    S: ReportStore,
{
    console.say(&format!("\n{}", "=".repeat(50)))?;
    console.say("RECORD PLAYER SCORES")?;
    console.say(&"=".repeat(50))?;

    let player_id = input::prompt_player_id(console)?;
    let num_games = input::prompt_game_count(console)?;

    let mut session = Session {
        player_id,
        records: Vec::with_capacity(num_games),
    };

    console.say(&format!(
        "\nOkay! Let's enter data for {} games:",
        num_games
    ))?;
    console.say(&"-".repeat(30))?;

    for game_number in 1..=num_games {
        console.say(&format!("\nGame {}:", game_number))?;

        let score = input::prompt_score(console)?;
        let time = input::prompt_time(console)?;
        session.records.push(GameRecord { score, time });

        console.say(&format!(
            "  Got it! Score = {}, Time = {} minutes",
            score,
            report::fmt_minutes(time)
        ))?;
    }

    console.say("\nCalculating your stats...")?;
    let stats = Statistics::from_session(&session);

    console.say(&report::render_console(&session, &stats))?;

    match store.put(&session.player_id, &report::render_file(&session, &stats)) {
        Ok(()) => {
            console.say(&format!(
                "\nYour data has been saved to: {}",
                report_file_name(&session.player_id)
            ))?;
        }
        Err(e) => {
            console.say(&format!("Oops! Couldn't save the file: {}", e))?;
            console.say("Your data couldn't be saved, but everything else worked fine.")?;
        }
    }

    console.say(&format!("\n{}", "=".repeat(50)))?;
    console.say("All done! Your data has been saved!")?;
    console.say(&"=".repeat(50))?;
    console.prompt("Press Enter to go back to the main menu...")?;

    Ok(())
}
