//! One-shot viewport observation
//!
//! Reveal animations and lazy images both react to the *first* time an
//! element intersects the viewport and then stop watching it.

use std::collections::HashSet;
use std::hash::Hash;

/// Selector for elements that fade in when scrolled into view
pub const REVEAL_SELECTOR: &str = ".service-card, .feature-card, .feature, .stat";

/// Selector for images whose real source is deferred
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

/// Opacity applied to reveal targets before they are seen
pub const REVEAL_INITIAL_OPACITY: &str = "0";

/// Animation applied once a reveal target is seen
pub const REVEAL_ANIMATION: &str = "fadeIn 0.6s ease-out forwards";

/// Class removed from lazy images once their source is loaded
pub const LAZY_CLASS: &str = "lazy";

/// What to do with an element after an intersection report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// First intersection: act on it and stop observing
    Fire,
    /// Not intersecting, or not watched
    Ignore,
}

/// Tracks which elements are still waiting for their first intersection
#[derive(Debug, Clone)]
pub struct OneShotObserver<K> {
    watching: HashSet<K>,
}

impl<K> Default for OneShotObserver<K> {
    fn default() -> Self {
        Self {
            watching: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> OneShotObserver<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `key`. Returns false if it was already watched.
    pub fn watch(&mut self, key: K) -> bool {
        self.watching.insert(key)
    }

    /// Feed an intersection report
    pub fn report(&mut self, key: &K, is_intersecting: bool) -> Observation {
        if is_intersecting && self.watching.remove(key) {
            Observation::Fire
        } else {
            Observation::Ignore
        }
    }
}

/// Source to swap in for a lazy image, if it has one
pub fn lazy_source(data_src: Option<String>) -> Option<String> {
    data_src.filter(|src| !src.trim().is_empty())
}
