//! Statistics aggregation over play counters
//!
//! Derives the descriptive statistics reported after a run: total plays,
//! ceiling-rounded average trial length, the most-played song, and the
//! alphabetized songs of the most-played song's artist.

use crate::core::{Catalog, PlayCounter};
use crate::error::{Error, Result};
use crate::models::{PlayedSong, Report, Song};

/// Sum of all play counts
pub fn total_plays(counter: &PlayCounter) -> u64 {
    counter.iter().map(|(_, count)| count).sum()
}

/// Ceiling-rounded average plays per trial
pub fn average_plays(total: u64, trial_count: usize) -> Result<u64> {
    if trial_count == 0 {
        return Err(Error::ZeroTrials);
    }
    let trials = trial_count as u64;
    Ok((total + trials - 1) / trials)
}

/// The song with the strictly greatest play count
///
/// Ties go to the song appearing first in catalog insertion order; no
/// secondary key re-breaks them. That order is fixed per catalog, so the
/// winner is reproducible across runs with the same seed.
pub fn most_played<'a>(counter: &PlayCounter, catalog: &'a Catalog) -> Result<&'a Song> {
    if counter.is_empty() {
        return Err(Error::EmptyCounter);
    }

    let mut best: Option<(&Song, u64)> = None;
    for song in catalog {
        let count = counter.get(song);
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((song, count)),
        }
    }

    best.map(|(song, _)| song).ok_or(Error::EmptyCounter)
}

/// All counted songs by the given artist, ascending in natural song order
pub fn songs_by_artist(counter: &PlayCounter, artist: &str) -> Vec<PlayedSong> {
    let mut songs: Vec<PlayedSong> = counter
        .iter()
        .filter(|(song, _)| song.artist == artist)
        .map(|(song, plays)| PlayedSong {
            song: song.clone(),
            plays,
        })
        .collect();
    songs.sort_by(|a, b| a.song.cmp(&b.song));
    songs
}

/// Compose the full statistics snapshot for a finished run
pub fn build_report(
    catalog: &Catalog,
    counter: &PlayCounter,
    trial_count: usize,
) -> Result<Report> {
    let total = total_plays(counter);
    let average = average_plays(total, trial_count)?;
    let top = most_played(counter, catalog)?;

    Ok(Report {
        trial_count,
        total_plays: total,
        average_plays: average,
        most_played: PlayedSong {
            song: top.clone(),
            plays: counter.get(top),
        },
        top_artist_songs: songs_by_artist(counter, &top.artist),
    })
}
