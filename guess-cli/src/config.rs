use guess_core::{Rules, SecretSource, RandomSecret, FixedSecrets};

#[derive(Debug)]
pub struct Config {
    pub rules:  Rules,
    pub seed:   Option<u64>,
    pub secret: Option<i32>,
}

impl Config {
    /// A pinned secret wins over a seed, a seed over real randomness.
    pub fn secret_source(&self) -> Box<dyn SecretSource> {
        match (self.secret, self.seed) {
            (Some(secret), _) => Box::new(FixedSecrets::new(vec![secret])),
            (None, Some(seed)) => Box::new(RandomSecret::seeded(seed)),
            (None, None) => Box::new(RandomSecret::from_entropy()),
        }
    }
}
