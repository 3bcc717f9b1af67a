// ---------------------------------------------------------------------------
// Fixed manufacturer list + logo strip geometry
// ---------------------------------------------------------------------------

/// The 13 manufacturers the dashboard knows about, in display order.
///
/// This list is the source of truth for which logos exist; it is independent
/// of what the datasets contain. Dataset `Manufacturer` strings must match
/// these entries exactly for filtering to find anything.
pub const BRANDS: [&str; 13] = [
    "BMW",
    "Ford",
    "GM",
    "Honda",
    "Kia",
    "Mazda",
    "Mercedes",
    "Nissan",
    "Stellantis",
    "Subaru",
    "Tesla",
    "Toyota",
    "VW",
];

/// Rendered width of every logo image, in pixels.
pub const LOGO_WIDTH: f32 = 123.0;

/// Symmetric margin so that `n` logos of [`LOGO_WIDTH`] plus `n + 1` margins
/// exactly fill `container_width`.
///
/// May be negative when the container is too narrow; the strip then overlaps,
/// which is accepted layout, not an error.
pub fn logo_margin(container_width: f32, n: usize) -> f32 {
    (container_width - LOGO_WIDTH * n as f32) / (n as f32 + 1.0)
}

/// Relative path of a brand's logo image: lowercased brand name plus `.png`,
/// under the `assets/` directory.
pub fn logo_asset_path(brand: &str) -> String {
    format!("assets/{}.png", brand.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteen_brands_in_fixed_order() {
        assert_eq!(BRANDS.len(), 13);
        assert_eq!(BRANDS[0], "BMW");
        assert_eq!(BRANDS[12], "VW");
    }

    #[test]
    fn margin_fills_container_exactly() {
        // W = 1700, 13 logos: (1700 - 1599) / 14
        let m = logo_margin(1700.0, 13);
        assert!((m - 7.214_285_7).abs() < 1e-4);

        let total = LOGO_WIDTH * 13.0 + m * 14.0;
        assert!((total - 1700.0).abs() < 1e-3);
    }

    #[test]
    fn margin_goes_negative_when_too_narrow() {
        assert!(logo_margin(1000.0, 13) < 0.0);
    }

    #[test]
    fn logo_paths_are_lowercased() {
        assert_eq!(logo_asset_path("BMW"), "assets/bmw.png");
        assert_eq!(logo_asset_path("Stellantis"), "assets/stellantis.png");
    }
}
