use iced::{executor, Align, Application, Color, Column, Command, Container, Element, Length, Text};
use log::debug;
use guess_core::{GuessSession, Outcome, RandomSecret, Rules};

use crate::{
    config::Config,
    message::Message,
    widgets::{
        GuessWidget,
        ScoreWidget,
        Backdrop,
    },
};

const PROMPT: &str = "Enter your guess!";

pub struct Game {
    session: GuessSession,
    guess: String,
    /// `None` until the first guess of a round was checked.
    last_outcome: Option<Outcome>,

    heading: String,
    heading_size: u16,
    heading_color: Color,
    spacing: u16,
    padding: u16,
    backdrop: Backdrop,

    guess_widget: GuessWidget,
    score_widget: ScoreWidget,
}

impl Game {
    fn feedback(&self) -> String {
        match self.last_outcome {
            Some(outcome) => outcome.to_string(),
            None => PROMPT.to_string(),
        }
    }
}

impl Application for Game {
    type Executor = executor::Default;
    type Message = Message;
    type Flags = Config;

    fn new(config: Config) -> (Self, Command<Self::Message>) {
        let session = match config.seed {
            Some(seed) => GuessSession::new(Rules::default(), RandomSecret::seeded(seed)),
            None => GuessSession::with_default_rules(),
        };
        let heading = format!("Guess The Number ({} - {})",
            session.rules().lowest(), session.rules().highest());

        let game = Game {
            session,
            guess: String::new(),
            last_outcome: None,

            heading,
            heading_size: config.title_font_size,
            heading_color: config.text_color,
            spacing: config.spacing,
            padding: config.padding,
            backdrop: Backdrop {
                color: config.background_color,
                text_color: config.text_color,
            },

            guess_widget: GuessWidget::new(&config),
            score_widget: ScoreWidget::new(&config),
        };
        (game, Command::none())
    }

    fn title(&self) -> String {
        String::from("Number Guessing Game")
    }

    fn update(&mut self, message: Self::Message) -> Command<Self::Message> {
        match message {
            Message::GuessChanged(guess) => self.guess = guess,

            Message::CheckGuess => {
                let result = self.session.submit_guess(&self.guess);
                debug!("Guess {:?} resulted in {:?}", self.guess, result);
                self.last_outcome = Some(result.outcome);
            },

            Message::PlayAgain => {
                self.session.start();
                self.guess.clear();
                self.last_outcome = None;
                self.guess_widget.focus();
            },
        };
        Command::none()
    }

    fn view(&mut self) -> Element<Self::Message> {
        let feedback = self.feedback();
        let accepting = !self.session.is_over();

        let content = Column::new()
            .align_items(Align::Center)
            .spacing(self.spacing)
            .push(
                Text::new(self.heading.clone())
                    .size(self.heading_size)
                    .color(self.heading_color)
            )
            .push(self.guess_widget.view(&self.guess, accepting))
            .push(self.score_widget.view(
                &feedback,
                self.session.attempts_remaining(),
                self.session.score(),
            ));

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y()
            .padding(self.padding)
            .style(self.backdrop)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guess_core::FixedSecrets;

    fn game_with_secret(secret: i32) -> Game {
        let (mut game, _) = Game::new(Config::default());
        game.session = GuessSession::new(Rules::default(), FixedSecrets::new(vec![secret, 7]));
        game
    }

    fn guess(game: &mut Game, text: &str) {
        game.update(Message::GuessChanged(text.to_string()));
        game.update(Message::CheckGuess);
    }

    #[test]
    fn starts_with_prompt() {
        let game = game_with_secret(50);
        assert_eq!(game.feedback(), "Enter your guess!");
        assert_eq!(game.session.attempts_remaining(), 10);
    }

    #[test]
    fn checking_shows_hints() {
        let mut game = game_with_secret(50);

        guess(&mut game, "30");
        assert_eq!(game.feedback(), "Too Low! Try Again.");

        guess(&mut game, "70");
        assert_eq!(game.feedback(), "Too High! Try Again.");
        assert_eq!(game.session.attempts_remaining(), 8);

        guess(&mut game, "50");
        assert_eq!(game.feedback(), "Correct! You win!");
        assert_eq!(game.session.score(), 10);
    }

    #[test]
    fn invalid_text_keeps_attempts() {
        let mut game = game_with_secret(50);
        guess(&mut game, "fifty");
        assert_eq!(game.feedback(), "Please enter a valid number!");
        assert_eq!(game.session.attempts_remaining(), 10);
    }

    #[test]
    fn play_again_resets_round_and_input() {
        let mut game = game_with_secret(50);
        guess(&mut game, "50");

        game.update(Message::PlayAgain);

        assert!(game.guess.is_empty());
        assert_eq!(game.feedback(), "Enter your guess!");
        assert_eq!(game.session.attempts_remaining(), 10);
        assert_eq!(game.session.score(), 10);
        assert!(!game.session.is_over());
    }

    #[test]
    fn finished_round_stops_accepting_guesses() {
        let mut game = game_with_secret(50);
        guess(&mut game, "50");
        assert!(game.session.is_over());

        guess(&mut game, "12");
        assert_eq!(game.feedback(), "This round is over. Press Play Again!");
        assert_eq!(game.session.attempts_remaining(), 9);
        assert_eq!(game.session.score(), 10);

        let _ = game.view();
    }

    #[test]
    fn lost_round_keeps_showing_the_secret_after_more_input() {
        let mut game = game_with_secret(50);
        for _ in 0..10 {
            guess(&mut game, "1");
        }
        assert_eq!(game.feedback(), "Game Over! Number was: 50");
        assert!(game.session.is_over());

        game.update(Message::GuessChanged("50".to_string()));
        assert_eq!(game.feedback(), "Game Over! Number was: 50");
        assert_eq!(game.session.score(), 0);
    }

    #[test]
    fn unseeded_game_plays_the_classic_rules() {
        let (game, _) = Game::new(Config::default());
        assert_eq!(game.session.rules(), &Rules::default());
        assert_eq!(game.session.attempts_remaining(), 10);
        assert!(!game.session.is_over());
    }

    #[test]
    fn same_seed_same_secret() {
        let seeded = || Config { seed: Some(99), ..Config::default() };
        let (first, _) = Game::new(seeded());
        let (second, _) = Game::new(seeded());
        assert_eq!(first.session.secret(), second.session.secret());
    }

    #[test]
    fn heading_names_the_range() {
        let (game, _) = Game::new(Config::default());
        assert_eq!(game.heading, "Guess The Number (1 - 100)");
    }
}
