use std::collections::BTreeSet;

use crate::data::filter::{filtered_indices, FilterState};
use crate::data::model::{PenguinTable, Species};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The table is immutable after load; `filters` has a single writer (the
/// user, through the side panel). Every mutator re-runs the filter so each
/// frame renders from one consistent `visible_indices` snapshot.
pub struct AppState {
    /// The loaded dataset.
    pub table: PenguinTable,

    /// Current filter parameters.
    pub filters: FilterState,

    /// Indices of rows passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(table: PenguinTable) -> Self {
        let filters = FilterState::default();
        let visible_indices = filtered_indices(&table, &filters);
        Self {
            table,
            filters,
            visible_indices,
            status_message: None,
        }
    }

    /// Replace the dataset (File → Open…) and reset filters to defaults.
    pub fn set_table(&mut self, table: PenguinTable) {
        self.table = table;
        self.filters = FilterState::default();
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.table, &self.filters);
    }

    /// Set the mass ceiling (clamped to the slider range) and refilter.
    pub fn set_mass_ceiling(&mut self, grams: f64) {
        self.filters.set_mass_ceiling(grams);
        self.refilter();
    }

    /// Toggle one species in the selection.
    pub fn toggle_species(&mut self, species: Species) {
        if !self.filters.species.remove(&species) {
            self.filters.species.insert(species);
        }
        self.refilter();
    }

    /// Select all three species.
    pub fn select_all_species(&mut self) {
        self.filters.species = Species::ALL.into_iter().collect();
        self.refilter();
    }

    /// Clear the species selection. An empty selection shows zero rows.
    pub fn select_no_species(&mut self) {
        self.filters.species = BTreeSet::new();
        self.refilter();
    }
}
