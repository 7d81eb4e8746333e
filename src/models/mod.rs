//! Data models for the jukebox simulation
//!
//! This module contains the core data structures shared across the program.

mod report;
mod song;

pub use report::{PlayedSong, Report};
pub use song::Song;
