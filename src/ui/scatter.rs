use std::time::Duration;

use eframe::egui::Ui;
use egui_plot::{Legend, MarkerShape, Plot, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the animated horsepower-vs-CO2 scatter for the active session.
pub fn scatter_panel(ui: &mut Ui, state: &mut AppState) {
    let Some(session) = &mut state.scatter else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Click a manufacturer logo to plot its vehicles");
        });
        return;
    };

    // Advance the reveal against the frame clock; keep repainting while the
    // queue drains so the animation runs without user input.
    let now = ui.input(|i| i.time);
    session.advance(now);
    if session.is_animating() {
        ui.ctx().request_repaint_after(Duration::from_millis(10));
    }

    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(format!("{} Horsepower vs Real-World CO2", session.brand));
    });

    Plot::new("scatter_plot")
        .legend(Legend::default())
        .x_axis_label("Horsepower (HP)")
        .y_axis_label("Real-World CO2 (g/mi)")
        .show(ui, |plot_ui| {
            for point in session.revealed() {
                let record = &point.record;
                let mut points = Points::new(vec![[record.horsepower, record.co2]])
                    .color(session.colors.color_for(&record.vehicle_type))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(6.0);
                // Only the first point of each vehicle type carries the
                // legend entry; later points of the same type stay unnamed.
                if point.show_legend {
                    points = points.name(&record.vehicle_type);
                }
                plot_ui.points(points);
            }
        });
}
