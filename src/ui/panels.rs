use eframe::egui::{self, Color32, RichText, Ui};

use crate::color::species_color;
use crate::data::filter::{MASS_MAX, MASS_MIN};
use crate::data::model::Species;
use crate::data::summary;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the filter controls: mass slider and species checkbox group.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter controls");
    ui.separator();

    // ---- Mass slider ----
    ui.strong("Mass");
    let mut mass = state.filters.mass_ceiling;
    let slider = egui::Slider::new(&mut mass, MASS_MIN..=MASS_MAX)
        .integer()
        .suffix(" g");
    if ui.add(slider).changed() {
        state.set_mass_ceiling(mass);
    }
    ui.separator();

    // ---- Species checkbox group ----
    ui.strong("Species");
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all_species();
        }
        if ui.small_button("None").clicked() {
            state.select_no_species();
        }
    });
    for sp in Species::ALL {
        let mut checked = state.filters.is_selected(sp);
        let text = RichText::new(sp.to_string()).color(species_color(sp));
        if ui.checkbox(&mut checked, text).changed() {
            state.toggle_species(sp);
        }
    }
}

// ---------------------------------------------------------------------------
// Value boxes – count and bill means
// ---------------------------------------------------------------------------

/// Render the three summary value boxes across the top of the central panel.
pub fn value_boxes(ui: &mut Ui, state: &AppState) {
    let visible = &state.visible_indices;
    let count = summary::count(visible).to_string();
    let bill_length = summary::format_mean_mm(summary::mean_bill_length(&state.table, visible));
    let bill_depth = summary::format_mean_mm(summary::mean_bill_depth(&state.table, visible));

    ui.columns(3, |columns: &mut [Ui]| {
        value_box(&mut columns[0], "Number of penguins", &count);
        value_box(&mut columns[1], "Average bill length", &bill_length);
        value_box(&mut columns[2], "Average bill depth", &bill_depth);
    });
}

fn value_box(ui: &mut Ui, title: &str, value: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());
        ui.label(title);
        ui.heading(RichText::new(value).strong());
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} penguins loaded, {} shown",
            state.table.len(),
            state.visible_indices.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Open a penguins CSV picked by the user. Failure is non-fatal: the current
/// table stays in place and the error lands in the status message.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open penguins data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(table) => {
                log::info!("Loaded {} penguins from {}", table.len(), path.display());
                state.set_table(table);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
