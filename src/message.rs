#[derive(Debug, Clone)]
pub enum Message {
    GuessChanged(String),
    CheckGuess,
    PlayAgain,
}
