/// Limits of a round: the secret range, the attempts and the reward.
pub mod rules;
/// Where the secret number of a round comes from.
pub mod secret;
/// What a single guess resulted in.
mod outcome;
/// The state machine of one guessing round and the score carried over rounds.
mod session;

pub use rules::{Rules, RulesError};
pub use secret::{SecretSource, RandomSecret, FixedSecrets};
pub use outcome::{Outcome, GuessResult};
pub use session::{GuessSession, SessionState};
