use eframe::egui;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Blocking alert dialog
// ---------------------------------------------------------------------------

/// Show the pending alert, if any, as a modal dialog. Dismissing it (OK,
/// escape, or clicking outside) clears the message; the page stays
/// interactive afterwards.
pub fn alert_modal(ctx: &egui::Context, state: &mut AppState) {
    let Some(message) = state.alert.clone() else {
        return;
    };

    let modal = egui::Modal::new(egui::Id::new("no_data_alert")).show(ctx, |ui| {
        ui.set_width(260.0);
        ui.label(&message);
        ui.separator();
        ui.vertical_centered(|ui: &mut egui::Ui| {
            if ui.button("OK").clicked() {
                state.alert = None;
            }
        });
    });

    if modal.should_close() {
        state.alert = None;
    }
}
