use std::fmt;

/// Classification of a single guess submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The text was not an integer. Nothing was consumed.
    InvalidInput,
    TooLow,
    TooHigh,
    /// The secret was found and the reward was added to the score.
    Correct,
    /// The last attempt was spent without finding the secret.
    /// Takes precedence over `TooLow`/`TooHigh` of that same guess.
    GameOver { secret: i32 },
    /// The round already ended, the guess was ignored.
    SessionOver,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InvalidInput => write!(f, "Please enter a valid number!"),
            Outcome::TooLow => write!(f, "Too Low! Try Again."),
            Outcome::TooHigh => write!(f, "Too High! Try Again."),
            Outcome::Correct => write!(f, "Correct! You win!"),
            Outcome::GameOver { secret } => write!(f, "Game Over! Number was: {}", secret),
            Outcome::SessionOver => write!(f, "This round is over. Press Play Again!"),
        }
    }
}

/// Everything a front-end needs to render after a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessResult {
    pub outcome: Outcome,
    pub attempts_remaining: u32,
    pub score: u32,
}

impl GuessResult {
    /// The revealed secret, only known once a round is lost.
    pub fn secret(&self) -> Option<i32> {
        match self.outcome {
            Outcome::GameOver { secret } => Some(secret),
            _ => None,
        }
    }

    /// Whether this very guess finished the round.
    pub fn ends_round(&self) -> bool {
        match self.outcome {
            Outcome::Correct | Outcome::GameOver { .. } => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(outcome: Outcome) -> GuessResult {
        GuessResult { outcome, attempts_remaining: 3, score: 20 }
    }

    #[test]
    fn only_game_over_reveals_the_secret() {
        assert_eq!(result(Outcome::GameOver { secret: 42 }).secret(), Some(42));
        assert_eq!(result(Outcome::TooLow).secret(), None);
        assert_eq!(result(Outcome::Correct).secret(), None);
    }

    #[test]
    fn rounds_end_on_win_or_loss() {
        assert!(result(Outcome::Correct).ends_round());
        assert!(result(Outcome::GameOver { secret: 1 }).ends_round());
        assert!(!result(Outcome::TooHigh).ends_round());
        assert!(!result(Outcome::InvalidInput).ends_round());
        assert!(!result(Outcome::SessionOver).ends_round());
    }

    #[test]
    fn game_over_message_names_the_secret() {
        assert_eq!(Outcome::GameOver { secret: 73 }.to_string(), "Game Over! Number was: 73");
    }
}
