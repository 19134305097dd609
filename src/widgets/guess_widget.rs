use iced::{
    button,
    text_input,
    Align,
    Button,
    Column,
    Element,
    Length,
    Row,
    Text,
    TextInput,
};
use crate::{
    config::Config,
    message::Message,
};
use super::ActionButton;

/// The text field the player types into
/// together with the button to submit it.
pub struct GuessWidget {
    input_width: Length,
    font_size: u16,
    button_font_size: u16,
    spacing: u16,
    padding: u16,
    button_style: ActionButton,

    input_state: text_input::State,
    check_button: button::State,
}

impl GuessWidget {
    pub fn new(config: &Config) -> GuessWidget {
        GuessWidget {
            input_width: Length::Units(config.input_width),
            font_size: config.label_font_size,
            button_font_size: config.button_font_size,
            spacing: config.spacing,
            padding: config.padding,
            button_style: ActionButton {
                color: config.button_color,
                text_color: config.button_text_color,
            },

            input_state: text_input::State::focused(),
            check_button: button::State::new(),
        }
    }

    /// Puts the cursor back into the text field.
    pub fn focus(&mut self) {
        self.input_state = text_input::State::focused();
    }

    /// Without `accepting` neither Enter nor the button submit anything.
    pub fn view(&mut self, guess: &str, accepting: bool) -> Element<Message> {
        let mut input = TextInput::new(
            &mut self.input_state,
            "",
            guess,
            Message::GuessChanged,
        ).size(self.font_size)
            .padding(self.padding)
            .width(self.input_width);

        let mut check = Button::new(
            &mut self.check_button,
            Text::new("Check").size(self.button_font_size),
        ).padding(self.padding)
            .style(self.button_style);

        if accepting {
            input = input.on_submit(Message::CheckGuess);
            check = check.on_press(Message::CheckGuess);
        }

        Column::new()
            .align_items(Align::Center)
            .spacing(self.spacing)
            .push(
                Row::new()
                    .align_items(Align::Center)
                    .spacing(self.spacing)
                    .push(Text::new("Your Guess:").size(self.font_size))
                    .push(input)
            ).push(check)
            .into()
    }
}
