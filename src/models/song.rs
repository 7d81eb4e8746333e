//! Song model

use serde::{Deserialize, Serialize};

/// A song in the jukebox catalog
///
/// Plain immutable value type: two songs are equal iff both the artist and
/// the title match exactly, and the natural order compares artist first,
/// then title (case-sensitive). The derived `Ord` relies on the field order
/// below, so `artist` must stay declared before `title`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Song {
    /// Song artist
    pub artist: String,
    /// Song title
    pub title: String,
}

impl Song {
    /// Create a new song
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
        }
    }
}

impl std::fmt::Display for Song {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Artist: {}, Title: {}", self.artist, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let a = Song::new("Faster Pussy cat", "Silent Night");
        let b = Song::new("Faster Pussy cat", "Silent Night");
        let c = Song::new("Faster Pussy cat", "Silent Night 2");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_natural_order_artist_then_title() {
        let a = Song::new("Abba", "Waterloo");
        let b = Song::new("Abba", "SOS");
        let c = Song::new("Beck", "Loser");

        // Same artist: title decides
        assert!(b < a);
        // Different artist: artist decides, title ignored
        assert!(a < c);
        assert!(b < c);
    }

    #[test]
    fn test_order_is_case_sensitive() {
        // Uppercase sorts before lowercase in lexicographic byte order
        let upper = Song::new("ZZ Top", "Legs");
        let lower = Song::new("aha", "Take On Me");
        assert!(upper < lower);
    }

    #[test]
    fn test_display() {
        let song = Song::new("Queen", "Bohemian Rhapsody");
        assert_eq!(song.to_string(), "Artist: Queen, Title: Bohemian Rhapsody");
    }
}
