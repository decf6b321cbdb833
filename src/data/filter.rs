use std::collections::BTreeSet;

use super::model::{PenguinTable, Species};

// ---------------------------------------------------------------------------
// Filter predicate: mass ceiling + selected species
// ---------------------------------------------------------------------------

/// Lower bound of the mass slider, grams.
pub const MASS_MIN: f64 = 2000.0;
/// Upper bound of the mass slider, grams.
pub const MASS_MAX: f64 = 6000.0;

/// The two user-adjustable filter parameters.
///
/// An empty species set is legal and selects nothing. The slider keeps
/// `mass_ceiling` inside [MASS_MIN, MASS_MAX]; [`FilterState::set_mass_ceiling`]
/// clamps anyway so an out-of-range value never reaches the predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub mass_ceiling: f64,
    pub species: BTreeSet<Species>,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            mass_ceiling: MASS_MAX,
            species: Species::ALL.into_iter().collect(),
        }
    }
}

impl FilterState {
    /// Set the mass ceiling, clamped to the slider range.
    pub fn set_mass_ceiling(&mut self, grams: f64) {
        self.mass_ceiling = grams.clamp(MASS_MIN, MASS_MAX);
    }

    pub fn is_selected(&self, species: Species) -> bool {
        self.species.contains(&species)
    }
}

/// Return indices of rows that pass the current filters.
///
/// A row passes when:
/// * its species is in the selected set, and
/// * its body mass is present and strictly less than the ceiling.
///
/// Strict less-than matters: a 3500 g penguin is excluded at a 3500 g ceiling.
/// A missing mass fails the mass predicate, mirroring `NaN < x` in the source
/// data's semantics. Result order preserves table order.
pub fn filtered_indices(table: &PenguinTable, filters: &FilterState) -> Vec<usize> {
    table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            filters.species.contains(&p.species)
                && p.body_mass_g.is_some_and(|m| m < filters.mass_ceiling)
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Penguin;

    fn penguin(species: Species, mass: f64, length: f64, depth: f64) -> Penguin {
        Penguin {
            species,
            island: "Biscoe".to_string(),
            bill_length_mm: Some(length),
            bill_depth_mm: Some(depth),
            body_mass_g: Some(mass),
        }
    }

    /// The three-record fixture used throughout the filter tests.
    fn sample_table() -> PenguinTable {
        PenguinTable::new(vec![
            penguin(Species::Adelie, 3500.0, 39.1, 18.7),
            penguin(Species::Gentoo, 5000.0, 46.5, 14.8),
            penguin(Species::Chinstrap, 3700.0, 49.0, 19.0),
        ])
    }

    fn all_species() -> BTreeSet<Species> {
        Species::ALL.into_iter().collect()
    }

    #[test]
    fn default_filters_keep_everything() {
        let table = sample_table();
        let indices = filtered_indices(&table, &FilterState::default());
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn mass_ceiling_excludes_heavier_rows() {
        let table = sample_table();
        let filters = FilterState {
            mass_ceiling: 4000.0,
            species: all_species(),
        };
        // Gentoo at 5000 g drops out.
        assert_eq!(filtered_indices(&table, &filters), vec![0, 2]);
    }

    #[test]
    fn species_selection_excludes_unselected() {
        let table = sample_table();
        let filters = FilterState {
            mass_ceiling: 6000.0,
            species: [Species::Gentoo].into_iter().collect(),
        };
        assert_eq!(filtered_indices(&table, &filters), vec![1]);
    }

    #[test]
    fn mass_boundary_is_strict() {
        // Adelie at exactly 3500 g is excluded at a 3500 g ceiling.
        let table = sample_table();
        let filters = FilterState {
            mass_ceiling: 3500.0,
            species: [Species::Adelie].into_iter().collect(),
        };
        assert!(filtered_indices(&table, &filters).is_empty());
    }

    #[test]
    fn empty_species_set_selects_nothing() {
        let table = sample_table();
        let filters = FilterState {
            mass_ceiling: 6000.0,
            species: BTreeSet::new(),
        };
        assert!(filtered_indices(&table, &filters).is_empty());
    }

    #[test]
    fn missing_mass_fails_the_mass_predicate() {
        let mut row = penguin(Species::Adelie, 0.0, 39.1, 18.7);
        row.body_mass_g = None;
        let table = PenguinTable::new(vec![row]);
        assert!(filtered_indices(&table, &FilterState::default()).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let table = sample_table();
        let filters = FilterState {
            mass_ceiling: 4000.0,
            species: all_species(),
        };
        let first = filtered_indices(&table, &filters);
        let second = filtered_indices(&table, &filters);
        assert_eq!(first, second);
    }

    #[test]
    fn lowering_the_ceiling_never_grows_the_result() {
        let table = sample_table();
        let mut previous = usize::MAX;
        for ceiling in [6000.0, 5000.0, 4000.0, 3600.0, 3500.0, 2000.0] {
            let filters = FilterState {
                mass_ceiling: ceiling,
                species: all_species(),
            };
            let n = filtered_indices(&table, &filters).len();
            assert!(n <= previous, "ceiling {ceiling} grew the result");
            previous = n;
        }
    }

    #[test]
    fn removing_a_species_never_grows_the_result() {
        let table = sample_table();
        let mut species = all_species();
        let mut previous = usize::MAX;
        for sp in Species::ALL {
            let filters = FilterState {
                mass_ceiling: 6000.0,
                species: species.clone(),
            };
            let n = filtered_indices(&table, &filters).len();
            assert!(n <= previous);
            previous = n;
            species.remove(&sp);
        }
    }

    #[test]
    fn set_mass_ceiling_clamps_out_of_range_values() {
        let mut filters = FilterState::default();
        filters.set_mass_ceiling(10_000.0);
        assert_eq!(filters.mass_ceiling, MASS_MAX);
        filters.set_mass_ceiling(0.0);
        assert_eq!(filters.mass_ceiling, MASS_MIN);
    }

    #[test]
    fn empty_table_filters_to_empty() {
        let table = PenguinTable::default();
        assert!(filtered_indices(&table, &FilterState::default()).is_empty());
    }
}
