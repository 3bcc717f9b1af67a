use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Scatter palette: fixed 8 colors, cycling
// ---------------------------------------------------------------------------

/// The fixed scatter palette. More than 8 vehicle types cycle back to the
/// start; collisions are accepted.
pub const SCATTER_PALETTE: [Color32; 8] = [
    Color32::RED,
    Color32::BLUE,
    Color32::GREEN,
    Color32::from_rgb(0x80, 0x00, 0x80), // purple
    Color32::from_rgb(0xff, 0xa5, 0x00), // orange
    Color32::from_rgb(0xa5, 0x2a, 0x2a), // brown
    Color32::from_rgb(0xff, 0xc0, 0xcb), // pink
    Color32::from_rgb(0x00, 0xff, 0xff), // cyan
];

/// Maps vehicle types to scatter colors, keyed by first-seen order within one
/// render session. Not stable across brands.
#[derive(Debug, Clone, Default)]
pub struct TypeColorMap {
    mapping: BTreeMap<String, Color32>,
    order: Vec<String>,
}

impl TypeColorMap {
    /// Build a map from vehicle types in first-seen order.
    pub fn from_types<'a>(types: impl IntoIterator<Item = &'a str>) -> Self {
        let mut map = TypeColorMap::default();
        for t in types {
            map.assign(t);
        }
        map
    }

    /// Assign the next palette color to `vehicle_type` if it is new.
    pub fn assign(&mut self, vehicle_type: &str) -> Color32 {
        if let Some(c) = self.mapping.get(vehicle_type) {
            return *c;
        }
        let color = SCATTER_PALETTE[self.order.len() % SCATTER_PALETTE.len()];
        self.mapping.insert(vehicle_type.to_string(), color);
        self.order.push(vehicle_type.to_string());
        color
    }

    /// Look up the color for a vehicle type.
    pub fn color_for(&self, vehicle_type: &str) -> Color32 {
        self.mapping
            .get(vehicle_type)
            .copied()
            .unwrap_or(Color32::GRAY)
    }

    /// Number of distinct types seen so far.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Timeline palette: evenly spaced hues
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colors using evenly spaced hues. Used as
/// the categorical palette for the timeline's vehicle-type groups.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_in_first_seen_order() {
        let map = TypeColorMap::from_types(["Truck", "Sedan", "Truck", "SUV"]);
        assert_eq!(map.len(), 3);
        assert_eq!(map.color_for("Truck"), SCATTER_PALETTE[0]);
        assert_eq!(map.color_for("Sedan"), SCATTER_PALETTE[1]);
        assert_eq!(map.color_for("SUV"), SCATTER_PALETTE[2]);
    }

    #[test]
    fn cycles_past_eight_types() {
        let names: Vec<String> = (0..10).map(|i| format!("type-{i}")).collect();
        let map = TypeColorMap::from_types(names.iter().map(String::as_str));
        assert_eq!(map.color_for("type-8"), SCATTER_PALETTE[0]);
        assert_eq!(map.color_for("type-9"), SCATTER_PALETTE[1]);
    }

    #[test]
    fn unknown_type_falls_back_to_gray() {
        let map = TypeColorMap::from_types(["Sedan"]);
        assert_eq!(map.color_for("Van"), Color32::GRAY);
    }

    #[test]
    fn timeline_palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        let p = generate_palette(4);
        assert_eq!(p.len(), 4);
        assert_ne!(p[0], p[1]);
        assert_ne!(p[1], p[2]);
    }
}
