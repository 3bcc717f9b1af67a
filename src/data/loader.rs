use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::model::{EmissionRecord, VehicleRecord};

/// File name of the horsepower dataset, resolved against the data directory.
pub const HORSEPOWER_FILE: &str = "horsepower.json";
/// File name of the timeline dataset.
pub const EMISSIONS_FILE: &str = "dataset.json";

#[derive(Debug, Error)]
pub enum DataError {
    #[error("dataset file not found: {0}")]
    Missing(PathBuf),
    #[error("malformed JSON in {0}")]
    Malformed(PathBuf),
}

// ---------------------------------------------------------------------------
// Synchronous loading
// ---------------------------------------------------------------------------

/// Read and decode one JSON dataset: a top-level array of flat objects.
fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = std::fs::read_to_string(path)
        .map_err(|_| DataError::Missing(path.to_path_buf()))
        .with_context(|| format!("reading {}", path.display()))?;
    let records: Vec<T> = serde_json::from_str(&text)
        .map_err(|_| DataError::Malformed(path.to_path_buf()))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(records)
}

pub fn load_vehicles(data_dir: &Path) -> Result<Vec<VehicleRecord>> {
    load_records(&data_dir.join(HORSEPOWER_FILE))
}

pub fn load_emissions(data_dir: &Path) -> Result<Vec<EmissionRecord>> {
    load_records(&data_dir.join(EMISSIONS_FILE))
}

// ---------------------------------------------------------------------------
// Startup loading (background threads)
// ---------------------------------------------------------------------------

/// Result of one startup load, delivered to the UI thread. A failed load
/// degrades to an empty dataset; the error has already been logged.
pub enum LoadedDataset {
    Vehicles(Vec<VehicleRecord>),
    Emissions(Vec<EmissionRecord>),
}

/// Kick off the two independent dataset loads. Each runs on its own thread
/// and sends its outcome over `tx`; there is no ordering between them.
pub fn spawn_loaders(data_dir: PathBuf, tx: Sender<LoadedDataset>) {
    let vehicles_tx = tx.clone();
    let vehicles_dir = data_dir.clone();
    thread::spawn(move || {
        let records = match load_vehicles(&vehicles_dir) {
            Ok(records) => {
                log::info!("loaded {} vehicle records", records.len());
                records
            }
            Err(e) => {
                log::error!("failed to load horsepower data: {e:#}");
                Vec::new()
            }
        };
        // Receiver gone means the app is shutting down.
        let _ = vehicles_tx.send(LoadedDataset::Vehicles(records));
    });

    thread::spawn(move || {
        let records = match load_emissions(&data_dir) {
            Ok(records) => {
                log::info!("loaded {} emission records", records.len());
                records
            }
            Err(e) => {
                log::error!("failed to load emissions data: {e:#}");
                Vec::new()
            }
        };
        let _ = tx.send(LoadedDataset::Emissions(records));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn write_file(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("co2-dashboard-test-{tag}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn loads_vehicle_array_from_disk() {
        let dir = temp_dir("vehicles");
        write_file(
            &dir,
            HORSEPOWER_FILE,
            r#"[{"Manufacturer":"Mazda","Vehicle Type":"Sedan",
                "Horsepower (HP)":187,"Real-World CO2 (g/mi)":291.1}]"#,
        );
        let records = load_vehicles(&dir).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].manufacturer, "Mazda");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = temp_dir("missing");
        assert!(load_emissions(&dir.join("nowhere")).is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = temp_dir("malformed");
        write_file(&dir, EMISSIONS_FILE, "{not json");
        assert!(load_emissions(&dir).is_err());
    }

    #[test]
    fn spawn_loaders_degrades_to_empty_on_failure() {
        let dir = temp_dir("spawn");
        write_file(
            &dir,
            EMISSIONS_FILE,
            r#"[{"Manufacturer":"GM","Model Year":2020,
                "Vehicle Type":"Truck","Real-World CO2 (g/mi)":450}]"#,
        );
        // No horsepower.json: that load must come back empty, not crash.
        let (tx, rx) = mpsc::channel();
        spawn_loaders(dir, tx);

        let mut vehicles = None;
        let mut emissions = None;
        for _ in 0..2 {
            match rx.recv_timeout(std::time::Duration::from_secs(5)).unwrap() {
                LoadedDataset::Vehicles(v) => vehicles = Some(v),
                LoadedDataset::Emissions(e) => emissions = Some(e),
            }
        }
        assert_eq!(vehicles.unwrap().len(), 0);
        assert_eq!(emissions.unwrap().len(), 1);
    }
}
