use eframe::egui::Ui;
use egui_plot::{MarkerShape, Plot, PlotPoints, Points};

use crate::color::species_color;
use crate::data::summary;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter plot – bill length vs bill depth
// ---------------------------------------------------------------------------

/// Render the bill length / depth scatter, coloured by species. An empty
/// filtered view simply draws an empty plot.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    ui.strong("Bill length and depth");

    let groups = summary::scatter_points(&state.table, &state.visible_indices);

    Plot::new("bill_scatter")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Bill length (mm)")
        .y_axis_label("Bill depth (mm)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (species, pts) in groups {
                let points: PlotPoints = pts.into_iter().collect();
                let markers = Points::new(points)
                    .name(species.to_string())
                    .color(species_color(species))
                    .shape(MarkerShape::Circle)
                    .radius(3.0);
                plot_ui.points(markers);
            }
        });
}
