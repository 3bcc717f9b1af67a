use eframe::egui::{self, Ui};

use crate::brands::{logo_asset_path, logo_margin, BRANDS, LOGO_WIDTH};
use crate::state::AppState;

/// Height the logo images are scaled to.
const LOGO_HEIGHT: f32 = 60.0;

// ---------------------------------------------------------------------------
// Logo strip (top panel)
// ---------------------------------------------------------------------------

/// Render the clickable manufacturer logos, evenly spaced across the strip.
///
/// The strip stays empty until the horsepower dataset has finished loading,
/// so a click always has data to filter against.
pub fn logo_strip(ui: &mut Ui, state: &mut AppState) {
    if !state.vehicles_loaded {
        ui.horizontal(|ui: &mut Ui| {
            ui.spinner();
            ui.label("Loading datasets…");
        });
        return;
    }

    let margin = logo_margin(ui.available_width(), BRANDS.len());
    let mut clicked: Option<&str> = None;

    ui.horizontal(|ui: &mut Ui| {
        // One margin before each logo and one after the last; negative
        // margins overlap the strip instead of erroring.
        ui.spacing_mut().item_spacing.x = 0.0;
        for brand in BRANDS {
            ui.add_space(margin);
            let path = state.data_dir.join(logo_asset_path(brand));
            let image = egui::Image::new(format!("file://{}", path.display()))
                .fit_to_exact_size(egui::vec2(LOGO_WIDTH, LOGO_HEIGHT));

            let response = ui
                .add(egui::ImageButton::new(image).frame(false))
                .on_hover_text(brand);
            if response.clicked() {
                clicked = Some(brand);
            }
        }
        ui.add_space(margin);
    });

    if let Some(brand) = clicked {
        state.select_brand(brand);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Title plus a status line with the loaded record counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Manufacturer CO2 Dashboard");
        ui.separator();
        if state.vehicles_loaded {
            ui.label(format!("{} vehicle records", state.vehicles.len()));
        }
        if state.emissions_loaded {
            ui.separator();
            ui.label(format!("{} emission records", state.emissions.len()));
        }
    });
}
