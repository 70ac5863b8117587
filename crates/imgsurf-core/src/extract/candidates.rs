//! Insertion-ordered set of discovered image URLs.

use std::collections::HashSet;

/// Absolute image URLs in discovery order, unique by exact string value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageCandidates {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl ImageCandidates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `url` unless an identical string is already present.
    /// Returns true if it was newly inserted.
    pub fn insert(&mut self, url: String) -> bool {
        if self.seen.contains(&url) {
            return false;
        }
        self.seen.insert(url.clone());
        self.order.push(url);
        true
    }

    pub fn contains(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_dedups_exact_strings_and_keeps_order() {
        let mut c = ImageCandidates::new();
        assert!(c.insert("https://ex.com/b.png".into()));
        assert!(c.insert("https://ex.com/a.png".into()));
        assert!(!c.insert("https://ex.com/b.png".into()));
        assert_eq!(c.len(), 2);
        let all: Vec<&str> = c.iter().collect();
        assert_eq!(all, vec!["https://ex.com/b.png", "https://ex.com/a.png"]);
    }

    #[test]
    fn no_normalization_beyond_exact_match() {
        let mut c = ImageCandidates::new();
        c.insert("https://ex.com/a.png".into());
        c.insert("https://ex.com/a.PNG".into());
        assert_eq!(c.len(), 2);
        assert!(c.contains("https://ex.com/a.PNG"));
        assert!(!c.contains("https://ex.com/A.png"));
    }
}
