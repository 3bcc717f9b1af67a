use chrono::DateTime;
use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints, VLine};

use crate::data::model::EmissionRecord;
use crate::state::{AppState, TimelineView, TypeSeries};

/// Horizontal room reserved next to the plot for the mean annotation.
const ANNOTATION_WIDTH: f32 = 110.0;

// ---------------------------------------------------------------------------
// Timeline chart (bottom panel)
// ---------------------------------------------------------------------------

/// Render the per-vehicle-type CO2 timeline for the active view.
pub fn timeline_panel(ui: &mut Ui, state: &AppState) {
    let Some(view) = &state.timeline else {
        // Cleared on every click; stays empty when the brand had no records.
        return;
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(format!(
            "{} — Vehicle Types and Their CO2 Emissions",
            view.brand
        ));
    });

    ui.horizontal(|ui: &mut Ui| {
        let plot_width = (ui.available_width() - ANNOTATION_WIDTH).max(0.0);
        let plot_height = ui.available_height();

        let response = Plot::new("timeline_plot")
            .width(plot_width)
            .height(plot_height)
            .legend(Legend::default())
            .x_axis_label("Year")
            .y_axis_label("CO2 Emission")
            .x_axis_formatter(|mark, _range| timestamp_year_label(mark.value))
            .label_formatter(|_name, _value| String::new())
            .include_y(0.0)
            .include_y(view.y_max)
            .show(ui, |plot_ui| {
                for series in &view.series {
                    let points: PlotPoints = series
                        .records
                        .iter()
                        .map(|r| [r.timestamp(), r.co2])
                        .collect();
                    plot_ui.line(
                        Line::new(points)
                            .name(&series.vehicle_type)
                            .color(series.color)
                            .width(2.0),
                    );
                }

                // Hover: dashed guide at the pointer plus the closest record
                // of the nearest series. Both vanish on pointer exit.
                let pointer = plot_ui.pointer_coordinate()?;
                plot_ui.vline(
                    VLine::new(pointer.x)
                        .color(Color32::DARK_GRAY)
                        .style(LineStyle::dashed_loose()),
                );
                let (_, record) = hovered_record(&view.series, pointer.x, pointer.y)?;
                Some((record.model_year, record.co2))
            });

        if let Some((year, co2)) = response.inner {
            response.response.on_hover_ui_at_pointer(|ui: &mut Ui| {
                ui.label(format!("Year: {year}"));
                ui.label(format!("CO2: {co2} g/mi"));
            });
        }

        // Mean of all filtered records, pre-grouping, two decimals.
        ui.vertical_centered(|ui: &mut Ui| {
            ui.add_space(plot_height * 0.25);
            ui.label(
                RichText::new(format!("{:.2}", view.mean_co2))
                    .color(Color32::from_rgb(0x00, 0x80, 0x00))
                    .size(24.0),
            );
        });
    });
}

/// Format a plot x value (UTC timestamp) as its calendar year.
fn timestamp_year_label(value: f64) -> String {
    DateTime::from_timestamp(value as i64, 0)
        .map(|dt| dt.format("%Y").to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Hover lookup
// ---------------------------------------------------------------------------

/// The record whose date is closest to `x` within one series.
fn closest_by_date(records: &[EmissionRecord], x: f64) -> Option<&EmissionRecord> {
    records
        .iter()
        .min_by(|a, b| {
            (a.timestamp() - x)
                .abs()
                .total_cmp(&(b.timestamp() - x).abs())
        })
}

/// Pick the hovered record: within each series the record closest to the
/// pointer's x, then the series whose value lies nearest the pointer's y.
fn hovered_record(series: &[TypeSeries], x: f64, y: f64) -> Option<(usize, &EmissionRecord)> {
    series
        .iter()
        .enumerate()
        .filter_map(|(i, s)| closest_by_date(&s.records, x).map(|r| (i, r)))
        .min_by(|(_, a), (_, b)| (a.co2 - y).abs().total_cmp(&(b.co2 - y).abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::generate_palette;

    fn emission(year: i32, vtype: &str, co2: f64) -> EmissionRecord {
        EmissionRecord {
            manufacturer: "Nissan".to_string(),
            model_year: year,
            vehicle_type: vtype.to_string(),
            co2,
        }
    }

    fn series(vtype: &str, records: Vec<EmissionRecord>) -> TypeSeries {
        TypeSeries {
            vehicle_type: vtype.to_string(),
            color: generate_palette(1)[0],
            records,
        }
    }

    #[test]
    fn closest_record_is_by_date_distance() {
        let records = vec![
            emission(2015, "Sedan", 300.0),
            emission(2018, "Sedan", 280.0),
            emission(2021, "Sedan", 260.0),
        ];
        let near_2018 = emission(2019, "Sedan", 0.0).timestamp() - 1.0;
        let hit = closest_by_date(&records, near_2018).unwrap();
        assert_eq!(hit.model_year, 2018);
    }

    #[test]
    fn hover_prefers_series_nearest_in_value() {
        let all = vec![
            series("Sedan", vec![emission(2020, "Sedan", 100.0)]),
            series("Truck", vec![emission(2020, "Truck", 500.0)]),
        ];
        let x = emission(2020, "Sedan", 0.0).timestamp();
        let (idx, hit) = hovered_record(&all, x, 480.0).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(hit.co2, 500.0);
    }

    #[test]
    fn hover_on_empty_series_finds_nothing() {
        assert!(hovered_record(&[], 0.0, 0.0).is_none());
        assert!(closest_by_date(&[], 0.0).is_none());
    }

    #[test]
    fn year_labels_format_from_timestamps() {
        let ts = emission(2020, "Sedan", 0.0).timestamp();
        assert_eq!(timestamp_year_label(ts), "2020");
    }
}
