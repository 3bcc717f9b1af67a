use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// VehicleRecord – one row of horsepower.json
// ---------------------------------------------------------------------------

/// A single vehicle from the horsepower dataset. Field names mirror the JSON
/// exactly; numeric fields also accept string-encoded numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VehicleRecord {
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,

    #[serde(rename = "Vehicle Type")]
    pub vehicle_type: String,

    #[serde(rename = "Horsepower (HP)", deserialize_with = "lenient_f64")]
    pub horsepower: f64,

    #[serde(rename = "Real-World CO2 (g/mi)", deserialize_with = "lenient_f64")]
    pub co2: f64,
}

// ---------------------------------------------------------------------------
// EmissionRecord – one row of dataset.json
// ---------------------------------------------------------------------------

/// A single model-year emissions figure from the timeline dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmissionRecord {
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,

    #[serde(rename = "Model Year", deserialize_with = "lenient_i32")]
    pub model_year: i32,

    #[serde(rename = "Vehicle Type")]
    pub vehicle_type: String,

    #[serde(rename = "Real-World CO2 (g/mi)", deserialize_with = "lenient_f64")]
    pub co2: f64,
}

impl EmissionRecord {
    /// Calendar date at Jan 1 of the model year, derived at render time.
    pub fn year_date(&self) -> NaiveDate {
        // Jan 1 is valid for every year chrono supports.
        NaiveDate::from_ymd_opt(self.model_year, 1, 1)
            .unwrap_or(NaiveDate::MIN)
    }

    /// Midnight UTC timestamp of [`year_date`](Self::year_date), used as the
    /// plot's x value.
    pub fn timestamp(&self) -> f64 {
        self.year_date()
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp() as f64)
            .unwrap_or(0.0)
    }
}

// ---------------------------------------------------------------------------
// Lenient numeric deserializers (datasets mix numbers and numeric strings)
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(v) => Ok(v),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("'{s}' is not a number"))),
    }
}

fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_f64(deserializer).map(|v| v as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_vehicle_record_with_dataset_field_names() {
        let json = r#"{
            "Manufacturer": "Honda",
            "Vehicle Type": "Sedan",
            "Horsepower (HP)": 158,
            "Real-World CO2 (g/mi)": 289.4
        }"#;
        let rec: VehicleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.manufacturer, "Honda");
        assert_eq!(rec.vehicle_type, "Sedan");
        assert_eq!(rec.horsepower, 158.0);
        assert!((rec.co2 - 289.4).abs() < 1e-9);
    }

    #[test]
    fn coerces_string_encoded_numbers() {
        let json = r#"{
            "Manufacturer": "Tesla",
            "Model Year": "2021",
            "Vehicle Type": "Car SUV",
            "Real-World CO2 (g/mi)": "0"
        }"#;
        let rec: EmissionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.model_year, 2021);
        assert_eq!(rec.co2, 0.0);
    }

    #[test]
    fn rejects_non_numeric_strings() {
        let json = r#"{
            "Manufacturer": "Ford",
            "Model Year": 2020,
            "Vehicle Type": "Truck",
            "Real-World CO2 (g/mi)": "n/a"
        }"#;
        assert!(serde_json::from_str::<EmissionRecord>(json).is_err());
    }

    #[test]
    fn year_date_is_jan_first() {
        let rec = EmissionRecord {
            manufacturer: "Kia".into(),
            model_year: 2019,
            vehicle_type: "Sedan".into(),
            co2: 310.0,
        };
        assert_eq!(rec.year_date(), NaiveDate::from_ymd_opt(2019, 1, 1).unwrap());
    }

    #[test]
    fn timestamps_are_monotonic_in_model_year() {
        let mk = |year| EmissionRecord {
            manufacturer: "VW".into(),
            model_year: year,
            vehicle_type: "Sedan".into(),
            co2: 300.0,
        };
        assert!(mk(2012).timestamp() < mk(2013).timestamp());
    }
}
