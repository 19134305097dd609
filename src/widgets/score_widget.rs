use iced::{
    button,
    Align,
    Button,
    Color,
    Column,
    Element,
    Text,
};
use crate::{
    config::Config,
    message::Message,
};
use super::ActionButton;

/// Shows what the last guess resulted in, the remaining attempts,
/// the score and offers to start over.
pub struct ScoreWidget {
    font_size: u16,
    button_font_size: u16,
    spacing: u16,
    padding: u16,
    feedback_color: Color,
    attempts_color: Color,
    score_color: Color,
    button_style: ActionButton,

    play_again_button: button::State,
}

impl ScoreWidget {
    pub fn new(config: &Config) -> ScoreWidget {
        ScoreWidget {
            font_size: config.label_font_size,
            button_font_size: config.button_font_size,
            spacing: config.spacing,
            padding: config.padding,
            feedback_color: config.feedback_color,
            attempts_color: config.attempts_color,
            score_color: config.score_color,
            button_style: ActionButton {
                color: config.button_color,
                text_color: config.button_text_color,
            },

            play_again_button: button::State::new(),
        }
    }

    pub fn view(&mut self, feedback: &str, attempts_remaining: u32, score: u32) -> Element<Message> {
        let font_size = self.font_size;
        let line = |text: String, color: Color| Text::new(text).size(font_size).color(color);

        Column::new()
            .align_items(Align::Center)
            .spacing(self.spacing)
            .push(line(feedback.to_string(), self.feedback_color))
            .push(line(format!("Attempts Left: {}", attempts_remaining), self.attempts_color))
            .push(line(format!("Score: {}", score), self.score_color))
            .push(
                Button::new(
                    &mut self.play_again_button,
                    Text::new("Play Again").size(self.button_font_size),
                ).padding(self.padding)
                    .style(self.button_style)
                    .on_press(Message::PlayAgain)
            ).into()
    }
}
