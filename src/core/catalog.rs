//! Song catalog
//!
//! The catalog is the fixed set of songs available for drawing. It is built
//! once at startup and read-only afterward: an ordered, duplicate-eliminated
//! sequence of songs, indexable by position. Insertion order doubles as the
//! deterministic iteration order the statistics tie-break relies on.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::models::Song;

/// Immutable, order-preserving collection of unique songs
#[derive(Debug, Clone)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    /// Build a catalog from (artist, title) records
    ///
    /// Duplicate records collapse to a single entry; first-seen order is
    /// preserved for indexed access. Fails if no songs remain.
    pub fn build<I, A, T>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = (A, T)>,
        A: Into<String>,
        T: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut songs = Vec::new();

        for (artist, title) in records {
            let song = Song::new(artist, title);
            if seen.insert(song.clone()) {
                songs.push(song);
            }
        }

        if songs.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        Ok(Self { songs })
    }

    /// Number of distinct songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Whether the catalog is empty (never true for a built catalog)
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Song at the given position
    pub fn get(&self, index: usize) -> Result<&Song> {
        self.songs.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.songs.len(),
        })
    }

    /// First song in insertion order
    pub fn first(&self) -> &Song {
        // non-empty by construction
        &self.songs[0]
    }

    /// Last song in insertion order
    pub fn last(&self) -> &Song {
        &self.songs[self.songs.len() - 1]
    }

    /// Up to the first `n` songs, for preview display
    pub fn preview(&self, n: usize) -> &[Song] {
        &self.songs[..n.min(self.songs.len())]
    }

    /// Iterate songs in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Song> {
        self.songs.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Song;
    type IntoIter = std::slice::Iter<'a, Song>;

    fn into_iter(self) -> Self::IntoIter {
        self.songs.iter()
    }
}
