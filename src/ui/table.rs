use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::summary;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Data grid – the filtered rows
// ---------------------------------------------------------------------------

const HEADER_HEIGHT: f32 = 20.0;
const ROW_HEIGHT: f32 = 18.0;

/// Render the filtered rows as a grid with the fixed column subset
/// {species, island, bill length, bill depth, body mass}. Zero rows renders
/// an empty grid.
pub fn data_grid(ui: &mut Ui, state: &AppState) {
    ui.strong("Penguin data");

    let rows = summary::grid_rows(&state.table, &state.visible_indices);

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder())
        .header(HEADER_HEIGHT, |mut header| {
            for title in [
                "Species",
                "Island",
                "Bill length (mm)",
                "Bill depth (mm)",
                "Body mass (g)",
            ] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let r = &rows[row.index()];
                for cell in [
                    &r.species,
                    &r.island,
                    &r.bill_length,
                    &r.bill_depth,
                    &r.body_mass,
                ] {
                    row.col(|ui: &mut Ui| {
                        ui.label(cell.as_str());
                    });
                }
            });
        });
}
