//! Simulation report model

use serde::{Deserialize, Serialize};

use super::Song;

/// A song together with its accumulated play count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedSong {
    /// The song
    pub song: Song,
    /// Times the song was drawn as a new (non-repeat) entry across all trials
    pub plays: u64,
}

/// Read-only snapshot of the simulation statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Number of trials that were run
    pub trial_count: usize,
    /// Total plays summed over every song
    pub total_plays: u64,
    /// Ceiling-rounded average plays per trial
    pub average_plays: u64,
    /// The song with the greatest play count
    pub most_played: PlayedSong,
    /// All songs by the most-played song's artist, in natural song order
    pub top_artist_songs: Vec<PlayedSong>,
}
