//! Ordered track catalog
//!
//! Owns the natural ordering of tracks: insertion order, contiguous
//! indices `0..n-1`. Duplicate source locators are permitted; removal by
//! source matches the first occurrence.

use crate::types::Track;

/// Ordered collection of tracks, insertion order preserved
#[derive(Debug, Clone, Default)]
pub struct TrackCatalog {
    tracks: Vec<Track>,
}

impl TrackCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Append a track, returning its natural index
    ///
    /// Always succeeds; duplicates are allowed.
    pub fn add(&mut self, track: Track) -> usize {
        self.tracks.push(track);
        self.tracks.len() - 1
    }

    /// Remove the first track whose source locator matches
    ///
    /// Returns the removed track and its former natural index, or `None`
    /// when no track matched (catalog unchanged).
    pub fn remove_by_source(&mut self, locator: &str) -> Option<(usize, Track)> {
        let index = self.index_of_source(locator)?;
        Some((index, self.tracks.remove(index)))
    }

    /// Drop all tracks
    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Natural index of the first track with this source locator
    pub fn index_of_source(&self, locator: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t.source == locator)
    }

    /// Track at a natural index
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// All tracks in natural order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(source: &str) -> Track {
        Track {
            source: source.to_string(),
            title: format!("Title {source}"),
            artist: "Test Artist".to_string(),
            album: None,
            artwork: None,
            duration_label: "3:00".to_string(),
        }
    }

    #[test]
    fn add_returns_contiguous_indices() {
        let mut catalog = TrackCatalog::new();
        assert_eq!(catalog.add(track("a")), 0);
        assert_eq!(catalog.add(track("b")), 1);
        assert_eq!(catalog.add(track("c")), 2);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn duplicates_allowed() {
        let mut catalog = TrackCatalog::new();
        catalog.add(track("same"));
        assert_eq!(catalog.add(track("same")), 1);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn remove_matches_first_occurrence() {
        let mut catalog = TrackCatalog::new();
        catalog.add(track("a"));
        catalog.add(track("dup"));
        catalog.add(track("dup"));

        let (index, removed) = catalog.remove_by_source("dup").unwrap();
        assert_eq!(index, 1);
        assert_eq!(removed.source, "dup");
        // The second duplicate survives and shifts down.
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().source, "dup");
    }

    #[test]
    fn remove_miss_leaves_catalog_unchanged() {
        let mut catalog = TrackCatalog::new();
        catalog.add(track("a"));

        assert!(catalog.remove_by_source("missing").is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn clear_empties() {
        let mut catalog = TrackCatalog::new();
        catalog.add(track("a"));
        catalog.add(track("b"));

        catalog.clear();
        assert!(catalog.is_empty());
        assert!(catalog.index_of_source("a").is_none());
    }
}
