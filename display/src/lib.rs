pub use screen::Screen;
pub use sound::Beeper;

mod screen;
mod sound;
