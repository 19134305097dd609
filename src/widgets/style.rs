use iced::{button, container, Background, Color};

/// Fills the whole window with a single color.
#[derive(Debug, Clone, Copy)]
pub struct Backdrop {
    pub color: Color,
    pub text_color: Color,
}

impl container::StyleSheet for Backdrop {
    fn style(&self) -> container::Style {
        container::Style {
            background: Some(Background::Color(self.color)),
            text_color: Some(self.text_color),
            ..container::Style::default()
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ActionButton {
    pub color: Color,
    pub text_color: Color,
}

impl button::StyleSheet for ActionButton {
    fn active(&self) -> button::Style {
        button::Style {
            background: Some(Background::Color(self.color)),
            text_color: self.text_color,
            ..button::Style::default()
        }
    }
}
