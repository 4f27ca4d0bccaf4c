//! Output formatting for council results

pub mod console;

pub use console::ConsoleFormatter;
