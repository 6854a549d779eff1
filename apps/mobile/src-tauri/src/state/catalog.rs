//! # Search State
//!
//! The recent-searches list shown under the search box. The catalog itself
//! is static and lives in `krave_core::catalog`.

use std::sync::{Arc, Mutex, PoisonError};

use krave_core::catalog::RecentSearches;

#[derive(Debug, Default)]
pub struct SearchState {
    recent: Arc<Mutex<RecentSearches>>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recent_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut RecentSearches) -> R,
    {
        let mut recent = self.recent.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut recent)
    }

    pub fn entries(&self) -> Vec<String> {
        self.with_recent_mut(|r| r.entries().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_through_state() {
        let state = SearchState::new();
        assert!(state.with_recent_mut(|r| r.record("Mango")));
        assert_eq!(state.entries()[0], "Mango");
        assert_eq!(state.entries().len(), 4);
    }
}
