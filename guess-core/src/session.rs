use std::cmp::Ordering;
use log::{debug, info, warn};

use crate::{
    rules::Rules,
    secret::{SecretSource, RandomSecret},
    outcome::{Outcome, GuessResult},
};

/// Where a round currently stands.
/// `Won` and `Lost` are final until the next [`GuessSession::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Won,
    Lost,
}

/// One guessing round plus the score collected in all rounds before it.
pub struct GuessSession {
    rules: Rules,
    source: Box<dyn SecretSource>,

    secret: i32,
    attempts_remaining: u32,
    score: u32,
    state: SessionState,
    round: u32,
}

impl GuessSession {
    /// Creates a session with a score of zero and starts its first round.
    pub fn new<S: SecretSource + 'static>(rules: Rules, source: S) -> GuessSession {
        let mut session = GuessSession {
            secret: *rules.secret_range().start(),
            attempts_remaining: rules.attempts(),
            rules,
            source: Box::new(source),
            score: 0,
            state: SessionState::Active,
            round: 0,
        };
        session.start();
        session
    }

    /// The classic game: 1 to 100, ten attempts, truly random secrets.
    pub fn with_default_rules() -> GuessSession {
        GuessSession::new(Rules::default(), RandomSecret::from_entropy())
    }

    /// Begins a new round with a fresh secret and all attempts available.
    /// The score is kept.
    pub fn start(&mut self) {
        self.secret = self.source.draw(self.rules.secret_range());
        self.attempts_remaining = self.rules.attempts();
        self.state = SessionState::Active;
        self.round += 1;
        debug!("Round {} started, the secret is {}", self.round, self.secret);
    }

    /// Evaluates the text the player entered.
    ///
    /// Text that is not an integer leaves the session untouched,
    /// just as any guess after the round ended does.
    pub fn submit_guess(&mut self, text: &str) -> GuessResult {
        if self.is_over() {
            warn!("Ignoring guess {:?}, round {} is already over", text, self.round);
            return self.result(Outcome::SessionOver);
        }

        let guess = match text.trim().parse::<i32>() {
            Ok(guess) => guess,
            Err(error) => {
                debug!("Rejected guess {:?}: {}", text, error);
                return self.result(Outcome::InvalidInput);
            }
        };

        // An active round always has at least one attempt left.
        self.attempts_remaining -= 1;

        let outcome = match guess.cmp(&self.secret) {
            Ordering::Equal => {
                self.score = self.score.saturating_add(self.rules.points_per_win());
                self.state = SessionState::Won;
                info!("Round {} won with {} attempts to spare, score is {}",
                    self.round, self.attempts_remaining, self.score);
                Outcome::Correct
            },
            Ordering::Less => Outcome::TooLow,
            Ordering::Greater => Outcome::TooHigh,
        };

        // Running out of attempts outweighs the hint of the last guess.
        if self.attempts_remaining == 0 && self.state == SessionState::Active {
            self.state = SessionState::Lost;
            info!("Round {} lost, the secret was {}", self.round, self.secret);
            return self.result(Outcome::GameOver { secret: self.secret });
        }

        self.result(outcome)
    }

    fn result(&self, outcome: Outcome) -> GuessResult {
        GuessResult {
            outcome,
            attempts_remaining: self.attempts_remaining,
            score: self.score,
        }
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != SessionState::Active
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Number of the current round, the first one being 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The number to be guessed. Front-ends should only show it once the round is lost.
    pub fn secret(&self) -> i32 {
        self.secret
    }
}
