use std::ops::RangeInclusive;
use rand::{
    Rng,
    SeedableRng,
    rngs::StdRng,
    distributions::Uniform,
};

/// Anything that can pick the secret number of a new round.
///
/// The range handed over is never empty,
/// see [`Rules`](crate::Rules).
pub trait SecretSource {
    fn draw(&mut self, range: RangeInclusive<i32>) -> i32;
}

impl<S: SecretSource + ?Sized> SecretSource for Box<S> {
    fn draw(&mut self, range: RangeInclusive<i32>) -> i32 {
        (**self).draw(range)
    }
}

/// Draws secrets uniformly from the range using a random number generator.
pub struct RandomSecret<R: Rng = StdRng> {
    rng: R,
}

impl RandomSecret<StdRng> {
    pub fn from_entropy() -> RandomSecret<StdRng> {
        RandomSecret::new(StdRng::from_entropy())
    }

    /// A reproducible sequence of secrets.
    pub fn seeded(seed: u64) -> RandomSecret<StdRng> {
        RandomSecret::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSecret<R> {
    pub fn new(rng: R) -> RandomSecret<R> {
        RandomSecret { rng }
    }
}

impl<R: Rng> SecretSource for RandomSecret<R> {
    fn draw(&mut self, range: RangeInclusive<i32>) -> i32 {
        let (low, high) = range.into_inner();
        self.rng.sample(Uniform::new_inclusive(low, high))
    }
}

/// Replays a predefined list of secrets, one per round,
/// starting over once the list is exhausted.
/// Secrets outside of the requested range are clamped into it.
#[derive(Debug, Clone)]
pub struct FixedSecrets {
    secrets: Vec<i32>,
    next: usize,
}

impl FixedSecrets {
    pub fn new(secrets: Vec<i32>) -> FixedSecrets {
        FixedSecrets { secrets, next: 0 }
    }
}

impl SecretSource for FixedSecrets {
    fn draw(&mut self, range: RangeInclusive<i32>) -> i32 {
        let (low, high) = range.into_inner();
        if self.secrets.is_empty() { return low }

        let secret = self.secrets[self.next % self.secrets.len()];
        self.next += 1;
        secret.max(low).min(high)
    }
}
