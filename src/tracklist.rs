//! Track list view model.
//!
//! One row per catalog entry, in catalog order. Exactly one row carries the
//! active marker and it always follows the engine's current index.

use crate::catalog::Catalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRow {
    /// 1-based position shown in the first column.
    pub number: usize,
    pub title: String,
    pub artist: String,
    pub duration: String,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct TrackListView {
    rows: Vec<TrackRow>,
}

impl TrackListView {
    pub fn new(catalog: &Catalog, active: usize) -> Self {
        let rows = catalog
            .tracks()
            .iter()
            .enumerate()
            .map(|(i, t)| TrackRow {
                number: i + 1,
                title: t.title.clone(),
                artist: t.artist.clone(),
                duration: t.duration.clone(),
                active: i == active,
            })
            .collect();
        Self { rows }
    }

    /// Move the active marker to `index`, clearing it everywhere else.
    pub fn mark_active(&mut self, index: usize) {
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.active = i == index;
        }
    }

    pub fn rows(&self) -> &[TrackRow] {
        &self.rows
    }

    #[cfg(test)]
    pub fn active_index(&self) -> Option<usize> {
        self.rows.iter().position(|r| r.active)
    }
}
