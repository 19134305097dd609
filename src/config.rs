use std::ffi::OsString;
use clap::{App, Arg, value_t};
use iced::Color;

fn rgb(red: u8, green: u8, blue: u8) -> Color {
    Color::from_rgb(red as f32 / 255., green as f32 / 255., blue as f32 / 255.)
}

/// Everything that determines how the game looks
/// and where its secrets come from.
pub struct Config {
    pub window_size: (u32, u32),

    pub title_font_size: u16,
    pub label_font_size: u16,
    pub button_font_size: u16,
    pub input_width: u16,
    pub spacing: u16,
    pub padding: u16,

    pub background_color: Color,
    pub text_color: Color,
    pub feedback_color: Color,
    pub attempts_color: Color,
    pub score_color: Color,
    pub button_color: Color,
    pub button_text_color: Color,

    /// Reproducible secrets, set with `--seed`.
    pub seed: Option<u64>,
}

impl Config {
    /// The default look, with a seed taken from the command line if given.
    pub fn from_args<I, T>(args: I) -> Result<Config, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = App::new("number-guess")
            .version("1.0")
            .author("Alex&Korbi&Radek inc.")
            .about("Guess the secret number between 1 and 100")
            .arg(
                Arg::with_name("seed")
                    .long("seed")
                    .value_name("SEED")
                    .help("Seed for reproducible secrets")
                    .takes_value(true),
            )
            .get_matches_from_safe(args)?;

        let seed = if matches.is_present("seed") {
            Some(value_t!(matches, "seed", u64)?)
        } else {
            None
        };

        Ok(Config {
            seed,
            ..Config::default()
        })
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            window_size: (550, 550),

            title_font_size: 30,
            label_font_size: 20,
            button_font_size: 18,
            input_width: 120,
            spacing: 12,
            padding: 10,

            background_color: rgb(25, 25, 112),
            text_color: Color::WHITE,
            feedback_color: rgb(255, 215, 0),
            attempts_color: rgb(255, 140, 0),
            score_color: rgb(50, 255, 50),
            button_color: rgb(30, 144, 255),
            button_text_color: Color::WHITE,

            seed: None,
        }
    }
}
