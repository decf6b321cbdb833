use std::collections::BTreeMap;

use super::model::{Penguin, PenguinTable, Species};

// ---------------------------------------------------------------------------
// Value-box adapters
// ---------------------------------------------------------------------------

/// Number of penguins in the filtered view.
pub fn count(visible: &[usize]) -> usize {
    visible.len()
}

/// Mean bill length over the visible rows, skipping absent measurements.
/// `None` when no row carries a value.
pub fn mean_bill_length(table: &PenguinTable, visible: &[usize]) -> Option<f64> {
    mean_of(table, visible, |p| p.bill_length_mm)
}

/// Mean bill depth over the visible rows, skipping absent measurements.
pub fn mean_bill_depth(table: &PenguinTable, visible: &[usize]) -> Option<f64> {
    mean_of(table, visible, |p| p.bill_depth_mm)
}

fn mean_of(
    table: &PenguinTable,
    visible: &[usize],
    column: impl Fn(&Penguin) -> Option<f64>,
) -> Option<f64> {
    let mut sum = 0.0;
    let mut n = 0usize;
    for &idx in visible {
        if let Some(v) = column(&table.rows()[idx]) {
            sum += v;
            n += 1;
        }
    }
    // Guard against the zero-row mean: the one edge case that would
    // otherwise divide by zero.
    (n > 0).then(|| sum / n as f64)
}

/// Format a mean for a value box: `"46.5 mm"`, or `"no data"` when the
/// filtered view is empty.
pub fn format_mean_mm(mean: Option<f64>) -> String {
    match mean {
        Some(v) => format!("{v:.1} mm"),
        None => "no data".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Scatter projection
// ---------------------------------------------------------------------------

/// (bill length, bill depth) points from the visible rows, grouped by species
/// for per-species colouring and legend entries. Rows missing either
/// coordinate are skipped. Species with no points are omitted.
pub fn scatter_points(
    table: &PenguinTable,
    visible: &[usize],
) -> BTreeMap<Species, Vec<[f64; 2]>> {
    let mut groups: BTreeMap<Species, Vec<[f64; 2]>> = BTreeMap::new();
    for &idx in visible {
        let p = &table.rows()[idx];
        if let (Some(x), Some(y)) = (p.bill_length_mm, p.bill_depth_mm) {
            groups.entry(p.species).or_default().push([x, y]);
        }
    }
    groups
}

// ---------------------------------------------------------------------------
// Grid projection
// ---------------------------------------------------------------------------

/// One rendered row of the data grid: the fixed column subset
/// {species, island, bill length, bill depth, body mass} as display strings.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub species: String,
    pub island: String,
    pub bill_length: String,
    pub bill_depth: String,
    pub body_mass: String,
}

/// Project the visible rows into grid rows, preserving table order.
pub fn grid_rows(table: &PenguinTable, visible: &[usize]) -> Vec<GridRow> {
    visible
        .iter()
        .map(|&idx| {
            let p = &table.rows()[idx];
            GridRow {
                species: p.species.to_string(),
                island: p.island.clone(),
                bill_length: cell(p.bill_length_mm, 1),
                bill_depth: cell(p.bill_depth_mm, 1),
                body_mass: cell(p.body_mass_g, 0),
            }
        })
        .collect()
}

fn cell(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "NA".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, FilterState};
    use std::collections::BTreeSet;

    fn penguin(species: Species, mass: f64, length: f64, depth: f64) -> Penguin {
        Penguin {
            species,
            island: "Dream".to_string(),
            bill_length_mm: Some(length),
            bill_depth_mm: Some(depth),
            body_mass_g: Some(mass),
        }
    }

    fn sample_table() -> PenguinTable {
        PenguinTable::new(vec![
            penguin(Species::Adelie, 3500.0, 39.1, 18.7),
            penguin(Species::Gentoo, 5000.0, 46.5, 14.8),
            penguin(Species::Chinstrap, 3700.0, 49.0, 19.0),
        ])
    }

    #[test]
    fn count_matches_the_filtered_view() {
        let table = sample_table();
        let visible = filtered_indices(&table, &FilterState::default());
        assert_eq!(count(&visible), 3);

        let filters = FilterState {
            mass_ceiling: 4000.0,
            species: Species::ALL.into_iter().collect(),
        };
        let visible = filtered_indices(&table, &filters);
        assert_eq!(count(&visible), 2);
    }

    #[test]
    fn mean_over_a_single_gentoo() {
        let table = sample_table();
        let filters = FilterState {
            mass_ceiling: 6000.0,
            species: [Species::Gentoo].into_iter().collect(),
        };
        let visible = filtered_indices(&table, &filters);
        assert_eq!(count(&visible), 1);
        let mean = mean_bill_length(&table, &visible);
        assert_eq!(format_mean_mm(mean), "46.5 mm");
    }

    #[test]
    fn mean_over_zero_rows_is_no_data() {
        let table = sample_table();
        let filters = FilterState {
            mass_ceiling: 6000.0,
            species: BTreeSet::new(),
        };
        let visible = filtered_indices(&table, &filters);
        assert_eq!(count(&visible), 0);
        assert_eq!(mean_bill_length(&table, &visible), None);
        assert_eq!(mean_bill_depth(&table, &visible), None);
        assert_eq!(format_mean_mm(None), "no data");
    }

    #[test]
    fn mean_skips_absent_measurements() {
        let mut rows = vec![
            penguin(Species::Adelie, 3500.0, 40.0, 18.0),
            penguin(Species::Adelie, 3600.0, 42.0, 19.0),
        ];
        rows[1].bill_length_mm = None;
        let table = PenguinTable::new(rows);
        let visible: Vec<usize> = vec![0, 1];
        assert_eq!(mean_bill_length(&table, &visible), Some(40.0));
        assert_eq!(mean_bill_depth(&table, &visible), Some(18.5));
    }

    #[test]
    fn scatter_groups_by_species_and_skips_incomplete_rows() {
        let mut rows = vec![
            penguin(Species::Adelie, 3500.0, 39.1, 18.7),
            penguin(Species::Adelie, 3800.0, 40.2, 17.9),
            penguin(Species::Gentoo, 5000.0, 46.5, 14.8),
        ];
        rows[1].bill_depth_mm = None;
        let table = PenguinTable::new(rows);
        let groups = scatter_points(&table, &[0, 1, 2]);

        assert_eq!(groups[&Species::Adelie], vec![[39.1, 18.7]]);
        assert_eq!(groups[&Species::Gentoo], vec![[46.5, 14.8]]);
        assert!(!groups.contains_key(&Species::Chinstrap));
    }

    #[test]
    fn empty_view_yields_empty_projections() {
        let table = sample_table();
        assert!(scatter_points(&table, &[]).is_empty());
        assert!(grid_rows(&table, &[]).is_empty());
    }

    #[test]
    fn grid_projects_the_fixed_columns() {
        let table = sample_table();
        let rows = grid_rows(&table, &[1]);
        assert_eq!(
            rows,
            vec![GridRow {
                species: "Gentoo".to_string(),
                island: "Dream".to_string(),
                bill_length: "46.5".to_string(),
                bill_depth: "14.8".to_string(),
                body_mass: "5000".to_string(),
            }]
        );
    }

    #[test]
    fn grid_renders_absent_cells_as_na() {
        let mut row = penguin(Species::Chinstrap, 0.0, 49.0, 19.0);
        row.body_mass_g = None;
        let table = PenguinTable::new(vec![row]);
        assert_eq!(grid_rows(&table, &[0])[0].body_mass, "NA");
    }
}
