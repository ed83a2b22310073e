//! A command-line tomato clock: alternating work and break countdowns with
//! a live terminal progress display and desktop notifications.

pub mod config;
pub mod console;
pub mod domain;
pub mod notify;
pub mod utils;
