pub mod console;

pub use console::ConsoleMode;
