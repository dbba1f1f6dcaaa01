use crate::console::Console;
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const MAX_PLAYER_ID_LEN: usize = 20;
pub const MAX_GAMES: i64 = 100;
pub const MAX_SCORE: i64 = 1_000_000;
pub const MAX_TIME_MINUTES: f64 = 1440.0;

/// Why a raw input line was rejected. The `Display` text is the exact message
/// shown to the user and is part of the observable contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Oops! You can't leave this empty. Try again.")]
    EmptyPlayerId,
    #[error("That's too long! Keep it under 20 characters.")]
    PlayerIdTooLong,
    #[error("Please enter a number, not letters!")]
    GameCountNotANumber,
    #[error("You need to have played at least 1 game!")]
    GameCountTooSmall,
    #[error("Wow, that's a lot! Let's keep it under 100 games.")]
    GameCountTooLarge,
    #[error("Please enter a number for the score!")]
    ScoreNotANumber,
    #[error("Scores can't be negative! Try again.")]
    ScoreNegative,
    #[error("That's an amazing score, but let's keep it under 1,000,000!")]
    ScoreTooLarge,
    #[error("Please enter a number for the time!")]
    TimeNotANumber,
    #[error("Time must be more than 0 minutes!")]
    TimeNotPositive,
    #[error("That's more than 24 hours! Are you sure?")]
    TimeTooLong,
}

/// Trim, reject empty or over-long identifiers, and normalize to uppercase.
pub fn validate_player_id(raw: &str) -> Result<String, Rejection> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(Rejection::EmptyPlayerId)
    } else if trimmed.chars().count() > MAX_PLAYER_ID_LEN {
        Err(Rejection::PlayerIdTooLong)
    } else {
        Ok(trimmed.to_uppercase())
    }
}

/// Parse a game count in 1..=100.
pub fn validate_game_count(raw: &str) -> Result<usize, Rejection> {
    let n: i64 = raw
        .trim()
        .parse()
        .map_err(|_| Rejection::GameCountNotANumber)?;
    if n <= 0 {
        Err(Rejection::GameCountTooSmall)
    } else if n > MAX_GAMES {
        Err(Rejection::GameCountTooLarge)
    } else {
        Ok(n as usize)
    }
}

/// Parse a score in 0..=1_000_000.
pub fn validate_score(raw: &str) -> Result<u32, Rejection> {
    let n: i64 = raw.trim().parse().map_err(|_| Rejection::ScoreNotANumber)?;
    if n < 0 {
        Err(Rejection::ScoreNegative)
    } else if n > MAX_SCORE {
        Err(Rejection::ScoreTooLarge)
    } else {
        Ok(n as u32)
    }
}

/// Parse a playtime in minutes, positive and at most 24 hours (inclusive).
pub fn validate_time(raw: &str) -> Result<f64, Rejection> {
    let t: f64 = raw.trim().parse().map_err(|_| Rejection::TimeNotANumber)?;
    if t <= 0.0 {
        Err(Rejection::TimeNotPositive)
    } else if t > MAX_TIME_MINUTES {
        Err(Rejection::TimeTooLong)
    } else {
        Ok(t)
    }
}

// The interactive loops below re-prompt until a value passes validation.
// There is deliberately no retry limit; only success or I/O failure exits.

pub fn prompt_player_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<String> {
    prompt_until_valid(console, "Enter Player ID: ", validate_player_id)
}

pub fn prompt_game_count<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<usize> {
    prompt_until_valid(console, "How many games did you play? ", validate_game_count)
}

pub fn prompt_score<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<u32> {
    prompt_until_valid(console, "Enter your score: ", validate_score)
}

pub fn prompt_time<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<f64> {
    prompt_until_valid(
        console,
        "How long did you play (in minutes)? ",
        validate_time,
    )
}

fn prompt_until_valid<R, W, T, F>(
    console: &mut Console<R, W>,
    prompt: &str,
    validate: F,
) -> io::Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, Rejection>,
{
    loop {
        let raw = console.prompt(prompt)?;
        match validate(&raw) {
            Ok(value) => return Ok(value),
            Err(reason) => console.say(&reason.to_string())?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Cursor;

    fn scripted(input: &str) -> Console<Cursor<String>, Vec<u8>> {
        Console::new(Cursor::new(input.to_string()), Vec::new())
    }

    #[test]
    fn player_id_is_uppercased() {
        assert_eq!(validate_player_id("player001").unwrap(), "PLAYER001");
    }

    #[test]
    fn player_id_is_trimmed_before_checks() {
        assert_eq!(validate_player_id("  abc  ").unwrap(), "ABC");
        assert_matches!(validate_player_id("   "), Err(Rejection::EmptyPlayerId));
    }

    #[test]
    fn player_id_rejects_empty_and_too_long() {
        assert_matches!(validate_player_id(""), Err(Rejection::EmptyPlayerId));
        assert_matches!(
            validate_player_id("THISPLAYERIDISTOOLONG123"),
            Err(Rejection::PlayerIdTooLong)
        );
        // Exactly 20 characters is still fine
        assert!(validate_player_id(&"A".repeat(20)).is_ok());
    }

    #[test]
    fn game_count_boundaries() {
        assert_eq!(validate_game_count("1").unwrap(), 1);
        assert_eq!(validate_game_count("100").unwrap(), 100);
        assert_matches!(validate_game_count("0"), Err(Rejection::GameCountTooSmall));
        assert_matches!(validate_game_count("-5"), Err(Rejection::GameCountTooSmall));
        assert_matches!(
            validate_game_count("101"),
            Err(Rejection::GameCountTooLarge)
        );
        assert_matches!(
            validate_game_count("abc"),
            Err(Rejection::GameCountNotANumber)
        );
    }

    #[test]
    fn score_accepts_full_range_and_rejects_outside() {
        assert_eq!(validate_score("0").unwrap(), 0);
        assert_eq!(validate_score("1000000").unwrap(), 1_000_000);
        assert_matches!(validate_score("-1"), Err(Rejection::ScoreNegative));
        assert_matches!(validate_score("1000001"), Err(Rejection::ScoreTooLarge));
        assert_matches!(validate_score("12.5"), Err(Rejection::ScoreNotANumber));
        assert_matches!(validate_score("lots"), Err(Rejection::ScoreNotANumber));
    }

    #[test]
    fn time_boundaries_are_inclusive_at_the_top() {
        assert_eq!(validate_time("1440.0").unwrap(), 1440.0);
        assert_eq!(validate_time("0.5").unwrap(), 0.5);
        assert_matches!(validate_time("0"), Err(Rejection::TimeNotPositive));
        assert_matches!(validate_time("-3"), Err(Rejection::TimeNotPositive));
        assert_matches!(validate_time("1440.0001"), Err(Rejection::TimeTooLong));
        assert_matches!(validate_time("later"), Err(Rejection::TimeNotANumber));
    }

    #[test]
    fn rejection_messages_are_verbatim() {
        assert_eq!(
            Rejection::ScoreNegative.to_string(),
            "Scores can't be negative! Try again."
        );
        assert_eq!(
            Rejection::ScoreTooLarge.to_string(),
            "That's an amazing score, but let's keep it under 1,000,000!"
        );
        assert_eq!(
            Rejection::TimeNotPositive.to_string(),
            "Time must be more than 0 minutes!"
        );
        assert_eq!(
            Rejection::TimeTooLong.to_string(),
            "That's more than 24 hours! Are you sure?"
        );
        assert_eq!(
            Rejection::GameCountNotANumber.to_string(),
            "Please enter a number, not letters!"
        );
    }

    #[test]
    fn prompt_player_id_retries_until_valid() {
        let mut console = scripted("\nTHISPLAYERIDISTOOLONG123\nplayer001\n");
        let id = prompt_player_id(&mut console).unwrap();
        assert_eq!(id, "PLAYER001");
    }

    #[test]
    fn prompt_score_reports_each_rejection() {
        let mut console = scripted("-1\n1000001\n750\n");
        let score = prompt_score(&mut console).unwrap();
        assert_eq!(score, 750);
    }

    #[test]
    fn prompt_time_accepts_next_valid_after_rejections() {
        let mut console = scripted("zero\n0\n30.5\n");
        let time = prompt_time(&mut console).unwrap();
        assert_eq!(time, 30.5);
    }
}
