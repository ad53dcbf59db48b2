pub mod console;
pub mod screen;
pub mod setup;

pub use console::Console;
pub use screen::Screen;
