use std::path::PathBuf;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{alert, logos, scatter, timeline};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            state: AppState::new(data_dir),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_loads();

        // ---- Top panel: title + record counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            logos::top_bar(ui, &self.state);
        });

        // ---- Logo strip ----
        egui::TopBottomPanel::top("logo_strip").show(ctx, |ui| {
            logos::logo_strip(ui, &mut self.state);
        });

        // ---- Bottom panel: timeline chart ----
        egui::TopBottomPanel::bottom("timeline_panel")
            .resizable(true)
            .default_height(380.0)
            .show(ctx, |ui| {
                timeline::timeline_panel(ui, &self.state);
            });

        // ---- Central panel: animated scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            scatter::scatter_panel(ui, &mut self.state);
        });

        // ---- Modal alert (rendered last, on top) ----
        alert::alert_modal(ctx, &mut self.state);
    }
}
