pub mod actions;
pub mod cli;
pub mod completer;
pub mod config;
pub mod logging;
pub mod pointer;
pub mod stories;
pub mod terminal_utils;
pub mod util;
pub mod widget;

pub use util::validate_story_name;
