mod guess_widget;
mod score_widget;
mod style;

pub use guess_widget::GuessWidget;
pub use score_widget::ScoreWidget;
pub use style::{Backdrop, ActionButton};
