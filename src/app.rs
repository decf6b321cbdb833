use eframe::egui;

use crate::data::model::PenguinTable;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PenguinDashApp {
    pub state: AppState,
}

impl PenguinDashApp {
    pub fn new(table: PenguinTable) -> Self {
        Self {
            state: AppState::new(table),
        }
    }
}

impl eframe::App for PenguinDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: value boxes, scatter plot, data grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::value_boxes(ui, &self.state);
            ui.separator();
            ui.columns(2, |columns| {
                plot::scatter_plot(&mut columns[0], &self.state);
                table::data_grid(&mut columns[1], &self.state);
            });
        });
    }
}
