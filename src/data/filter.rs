use super::model::{EmissionRecord, VehicleRecord};

// ---------------------------------------------------------------------------
// Brand filtering
// ---------------------------------------------------------------------------

/// Vehicles for one brand, sorted ascending by horsepower (stable sort).
///
/// Matching is exact: dataset manufacturer strings that differ from the brand
/// list in case or spelling silently produce an empty result.
pub fn vehicles_for_brand(vehicles: &[VehicleRecord], brand: &str) -> Vec<VehicleRecord> {
    let mut filtered: Vec<VehicleRecord> = vehicles
        .iter()
        .filter(|r| r.manufacturer == brand)
        .cloned()
        .collect();
    filtered.sort_by(|a, b| a.horsepower.total_cmp(&b.horsepower));
    filtered
}

/// Emission records for one brand, in dataset order.
pub fn emissions_for_brand(emissions: &[EmissionRecord], brand: &str) -> Vec<EmissionRecord> {
    emissions
        .iter()
        .filter(|r| r.manufacturer == brand)
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Vehicle-type grouping
// ---------------------------------------------------------------------------

/// Group records by vehicle type, preserving first-seen type order. Within a
/// group, records are sorted by model year so each group draws as one
/// connected left-to-right path.
pub fn group_by_type(records: &[EmissionRecord]) -> Vec<(String, Vec<EmissionRecord>)> {
    let mut groups: Vec<(String, Vec<EmissionRecord>)> = Vec::new();
    for rec in records {
        match groups.iter_mut().find(|(t, _)| *t == rec.vehicle_type) {
            Some((_, members)) => members.push(rec.clone()),
            None => groups.push((rec.vehicle_type.clone(), vec![rec.clone()])),
        }
    }
    for (_, members) in &mut groups {
        members.sort_by_key(|r| r.model_year);
    }
    groups
}

/// Arithmetic mean CO2 across records, computed before grouping.
pub fn mean_co2(records: &[EmissionRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    Some(records.iter().map(|r| r.co2).sum::<f64>() / records.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(brand: &str, vtype: &str, hp: f64, co2: f64) -> VehicleRecord {
        VehicleRecord {
            manufacturer: brand.to_string(),
            vehicle_type: vtype.to_string(),
            horsepower: hp,
            co2,
        }
    }

    fn emission(brand: &str, year: i32, vtype: &str, co2: f64) -> EmissionRecord {
        EmissionRecord {
            manufacturer: brand.to_string(),
            model_year: year,
            vehicle_type: vtype.to_string(),
            co2,
        }
    }

    #[test]
    fn filters_exact_brand_and_sorts_by_horsepower() {
        let data = vec![
            vehicle("Ford", "Truck", 400.0, 520.0),
            vehicle("Honda", "Sedan", 158.0, 289.0),
            vehicle("Ford", "Sedan", 180.0, 310.0),
            vehicle("ford", "Sedan", 120.0, 250.0), // wrong case: excluded
        ];
        let filtered = vehicles_for_brand(&data, "Ford");
        assert_eq!(filtered.len(), 2);
        let hp: Vec<f64> = filtered.iter().map(|r| r.horsepower).collect();
        assert_eq!(hp, vec![180.0, 400.0]);
    }

    #[test]
    fn unknown_brand_filters_to_empty() {
        let data = vec![vehicle("Kia", "SUV", 190.0, 330.0)];
        assert!(vehicles_for_brand(&data, "Peugeot").is_empty());
        assert!(emissions_for_brand(&[], "Peugeot").is_empty());
    }

    #[test]
    fn grouping_preserves_first_seen_type_order() {
        let data = vec![
            emission("BMW", 2020, "SUV", 350.0),
            emission("BMW", 2019, "Sedan", 300.0),
            emission("BMW", 2018, "SUV", 370.0),
        ];
        let groups = group_by_type(&data);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "SUV");
        assert_eq!(groups[1].0, "Sedan");
        // Within-group order is by model year.
        let years: Vec<i32> = groups[0].1.iter().map(|r| r.model_year).collect();
        assert_eq!(years, vec![2018, 2020]);
    }

    #[test]
    fn mean_is_computed_before_grouping() {
        let data = vec![
            emission("VW", 2020, "Sedan", 120.0),
            emission("VW", 2021, "SUV", 140.0),
        ];
        let mean = mean_co2(&data).unwrap();
        assert_eq!(format!("{mean:.2}"), "130.00");
        assert!(mean_co2(&[]).is_none());
    }
}
