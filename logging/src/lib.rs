pub mod console;
pub mod layout;

pub use console::{ConsoleFormatter, init};
pub use layout::{HtmlLayout, Layout, TextLayout};
