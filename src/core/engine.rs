//! Simulation engine
//!
//! Runs the draw-until-repeat trial loop: each trial draws songs uniformly
//! at random (with replacement) from the catalog until a song drawn earlier
//! in the same trial comes up again, incrementing a global per-song play
//! counter for every distinct song drawn before the repeat.
//!
//! The whole run is deterministic for a fixed seed and trial count. Trials
//! execute sequentially; nothing outside the returned counter and the
//! trial-local seen-set is mutated.

use std::collections::{HashMap, HashSet};

use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use tracing::debug;

use crate::config::SimConfig;
use crate::core::Catalog;
use crate::error::{Error, Result};
use crate::models::Song;

/// Per-song play counts accumulated across all trials
///
/// One entry per distinct catalog song, zero-initialized, monotonically
/// increasing. Keyed by song equality; iteration for statistics goes through
/// the catalog's insertion order, not this map's.
#[derive(Debug, Clone)]
pub struct PlayCounter {
    counts: HashMap<Song, u64>,
}

impl PlayCounter {
    /// Create a counter with a zero entry for every catalog song
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let counts = catalog.iter().map(|song| (song.clone(), 0)).collect();
        Self { counts }
    }

    /// Play count for a song; zero for songs outside the catalog
    pub fn get(&self, song: &Song) -> u64 {
        self.counts.get(song).copied().unwrap_or(0)
    }

    /// Number of tracked songs
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the counter tracks no songs
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate (song, count) pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&Song, u64)> {
        self.counts.iter().map(|(song, &count)| (song, count))
    }

    fn increment(&mut self, song: &Song) {
        if let Some(count) = self.counts.get_mut(song) {
            *count += 1;
        }
    }
}

impl Default for PlayCounter {
    /// A counter tracking no songs. Statistics over it fail with
    /// [`Error::EmptyCounter`].
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

/// Repeated-trial collision simulation over a catalog
pub struct Simulation {
    trial_count: usize,
    show_progress: bool,
}

impl Simulation {
    /// Create a simulation running the given number of trials
    pub fn new(trial_count: usize) -> Self {
        Self {
            trial_count,
            show_progress: false,
        }
    }

    /// Create a simulation from config
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.trial_count)
    }

    /// Set whether to show a progress bar between trials
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run all trials and return the accumulated play counter
    ///
    /// Each trial keeps a local set of already-drawn song indices. A draw of
    /// an unseen song increments its global counter and continues; a draw of
    /// a seen song ends the trial without incrementing. The seen-set is
    /// bounded by the catalog size, so a repeat is forced within
    /// `catalog.len() + 1` draws and every trial terminates.
    pub fn run<R: Rng>(&self, catalog: &Catalog, rng: &mut R) -> Result<PlayCounter> {
        if catalog.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        if self.trial_count == 0 {
            return Err(Error::ZeroTrials);
        }

        let mut counter = PlayCounter::for_catalog(catalog);
        let num_songs = catalog.len();

        let progress = if self.show_progress {
            let pb = ProgressBar::new(self.trial_count as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} trials")
                    .unwrap()
                    .progress_chars("##-"),
            );
            Some(pb)
        } else {
            None
        };

        let mut seen: HashSet<usize> = HashSet::with_capacity(num_songs);
        for _ in 0..self.trial_count {
            seen.clear();
            loop {
                let index = rng.gen_range(0..num_songs);
                if seen.insert(index) {
                    counter.increment(catalog.get(index)?);
                } else {
                    break;
                }
            }
            if let Some(pb) = &progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = &progress {
            pb.finish_and_clear();
        }

        debug!("ran {} trials over {} songs", self.trial_count, num_songs);
        Ok(counter)
    }
}
