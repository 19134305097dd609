use std::ops::RangeInclusive;
use thiserror::Error;

pub const DEFAULT_LOWEST: i32 = 1;
pub const DEFAULT_HIGHEST: i32 = 100;
pub const DEFAULT_ATTEMPTS: u32 = 10;
pub const DEFAULT_POINTS_PER_WIN: u32 = 10;

/// Reasons why a set of rules cannot be played.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("The lowest number {lowest} must not be greater than the highest number {highest}.")]
    EmptyRange { lowest: i32, highest: i32 },
    #[error("A round needs at least one attempt.")]
    NoAttempts,
}

/// The parameters every round of a session is played with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    lowest: i32,
    highest: i32,
    attempts: u32,
    points_per_win: u32,
}

impl Rules {
    pub fn new(lowest: i32, highest: i32, attempts: u32, points_per_win: u32) -> Result<Rules, RulesError> {
        if lowest > highest { return Err(RulesError::EmptyRange { lowest, highest }) }
        if attempts == 0 { return Err(RulesError::NoAttempts) }

        Ok(Rules {
            lowest,
            highest,
            attempts,
            points_per_win,
        })
    }

    pub fn lowest(&self) -> i32 {
        self.lowest
    }

    pub fn highest(&self) -> i32 {
        self.highest
    }

    /// Number of accepted guesses a round allows.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn points_per_win(&self) -> u32 {
        self.points_per_win
    }

    /// All numbers a secret may be drawn from, both ends included.
    pub fn secret_range(&self) -> RangeInclusive<i32> {
        self.lowest..=self.highest
    }
}

impl Default for Rules {
    fn default() -> Rules {
        Rules {
            lowest: DEFAULT_LOWEST,
            highest: DEFAULT_HIGHEST,
            attempts: DEFAULT_ATTEMPTS,
            points_per_win: DEFAULT_POINTS_PER_WIN,
        }
    }
}
