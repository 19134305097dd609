mod config;
mod play;

use anyhow::{bail, Context, Result};
use clap::{App, Arg, ArgMatches, value_t};
use config::Config;
use guess_core::{
    GuessSession,
    Rules,
    rules::{DEFAULT_LOWEST, DEFAULT_HIGHEST, DEFAULT_ATTEMPTS, DEFAULT_POINTS_PER_WIN},
};
use log::info;
use std::{ffi::OsString, io};

fn make_config_from<I, T>(args: I) -> Result<Config>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let lowest = DEFAULT_LOWEST.to_string();
    let highest = DEFAULT_HIGHEST.to_string();
    let attempts = DEFAULT_ATTEMPTS.to_string();
    let points = DEFAULT_POINTS_PER_WIN.to_string();

    let matches = App::new("guess")
        .version("1.0")
        .author("Alex&Korbi&Radek inc.")
        .about("Guess the secret number before your attempts run out")
        .arg(
            Arg::with_name("lowest")
                .long("lowest")
                .value_name("NUMBER")
                .help("Smallest possible secret")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value(&lowest),
        )
        .arg(
            Arg::with_name("highest")
                .long("highest")
                .value_name("NUMBER")
                .help("Largest possible secret")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value(&highest),
        )
        .arg(
            Arg::with_name("attempts")
                .short("a")
                .long("attempts")
                .value_name("COUNT")
                .help("Guesses per round")
                .takes_value(true)
                .default_value(&attempts),
        )
        .arg(
            Arg::with_name("points")
                .short("p")
                .long("points")
                .value_name("POINTS")
                .help("Points awarded for each round won")
                .takes_value(true)
                .default_value(&points),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("Seed for reproducible secrets")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("secret")
                .long("secret")
                .value_name("NUMBER")
                .help("Use this secret in every round (useful for debugging)")
                .takes_value(true)
                .allow_hyphen_values(true),
        )
        .get_matches_from_safe(args)?;

    // All of these carry a default value, so clap only fails on malformed numbers.
    let rules = Rules::new(
        value_t!(matches, "lowest", i32)?,
        value_t!(matches, "highest", i32)?,
        value_t!(matches, "attempts", u32)?,
        value_t!(matches, "points", u32)?,
    ).context("Invalid game rules")?;

    let seed = optional_value::<u64>(&matches, "seed")?;
    let secret = optional_value::<i32>(&matches, "secret")?;

    if let Some(secret) = secret {
        if !rules.secret_range().contains(&secret) {
            bail!("The secret {} is not between {} and {}.", secret, rules.lowest(), rules.highest());
        }
    }

    Ok(Config {
        rules,
        seed,
        secret,
    })
}

fn optional_value<T: std::str::FromStr>(matches: &ArgMatches, name: &str) -> Result<Option<T>> {
    if matches.is_present(name) {
        Ok(Some(value_t!(matches, name, T)?))
    } else {
        Ok(None)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let config = match make_config_from(std::env::args_os()) {
        Ok(config) => config,
        // Usage errors as well as --help and --version are printed by clap itself.
        Err(error) => match error.downcast::<clap::Error>() {
            Ok(usage) => usage.exit(),
            Err(error) => return Err(error),
        },
    };

    let mut session = GuessSession::new(config.rules.clone(), config.secret_source());
    info!("Playing with numbers from {} to {}", config.rules.lowest(), config.rules.highest());

    let stdin = io::stdin();
    let stdout = io::stdout();
    play::play(&mut session, &mut stdin.lock(), &mut stdout.lock())
        .context("Could not talk to the terminal")?;

    Ok(())
}
