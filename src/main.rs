mod config;
mod game;
mod message;
mod widgets;

use iced::{Settings, Application};
use config::Config;
use game::Game;

fn main() -> iced::Result {
    env_logger::init();

    let mut settings = Settings::with_flags(
        Config::from_args(std::env::args_os()).unwrap_or_else(|e| e.exit())
    );
    settings.window.size = settings.flags.window_size;
    Game::run(settings)
}
