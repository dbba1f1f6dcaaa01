use crate::session::Session;

/// Summary figures derived from one recording session. Never persisted on
/// their own; recomputed fresh each time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub highest_score: u32,
    pub average_time: f64,
}

impl Statistics {
    pub fn from_session(session: &Session) -> Self {
        Statistics {
            highest_score: highest_score(&session.scores()),
            average_time: average_time(&session.times()),
        }
    }
}

/// Maximum of the recorded scores; 0 for an empty slice (unreachable through
/// the recording flow, which collects at least one game).
pub fn highest_score(scores: &[u32]) -> u32 {
    scores.iter().copied().max().unwrap_or(0)
}

/// Mean playtime rounded to 2 decimal places, ties to even; 0.0 for an empty
/// slice.
pub fn average_time(times: &[f64]) -> f64 {
    if times.is_empty() {
        return 0.0;
    }
    let mean = times.iter().sum::<f64>() / times.len() as f64;
    (mean * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highest_score_picks_the_maximum() {
        assert_eq!(highest_score(&[1200, 1500, 1800]), 1800);
    }

    #[test]
    fn highest_score_single_value() {
        assert_eq!(highest_score(&[500]), 500);
    }

    #[test]
    fn highest_score_empty_defaults_to_zero() {
        assert_eq!(highest_score(&[]), 0);
    }

    #[test]
    fn average_time_rounds_to_two_decimals() {
        assert_eq!(average_time(&[25.0, 20.5, 30.0]), 25.17);
        assert_eq!(average_time(&[10.5, 15.5, 20.0]), 15.33);
    }

    #[test]
    fn average_time_empty_defaults_to_zero() {
        assert_eq!(average_time(&[]), 0.0);
    }

    #[test]
    fn average_time_single_value() {
        assert_eq!(average_time(&[42.0]), 42.0);
    }

    #[test]
    fn average_time_spans_the_full_range() {
        assert_eq!(average_time(&[0.1, 1440.0]), 720.05);
    }

    #[test]
    fn statistics_from_session() {
        let session = Session::new(
            "PLAYER001".to_string(),
            vec![(800, 15.0), (1200, 20.0), (1600, 25.0)],
        );
        let stats = Statistics::from_session(&session);
        assert_eq!(stats.highest_score, 1600);
        assert_eq!(stats.average_time, 20.0);
    }
}
