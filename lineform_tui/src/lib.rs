pub mod component;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
mod styles;
pub mod threads;
pub mod tui;
pub mod utils;
pub mod widgets;
