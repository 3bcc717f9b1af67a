//! Writes sample `horsepower.json` and `dataset.json` files so the dashboard
//! can be exercised without the real EPA datasets.
//!
//! Usage: `cargo run --bin generate_sample [out_dir]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::{json, Value};

const BRANDS: [&str; 13] = [
    "BMW", "Ford", "GM", "Honda", "Kia", "Mazda", "Mercedes", "Nissan",
    "Stellantis", "Subaru", "Tesla", "Toyota", "VW",
];

const VEHICLE_TYPES: [&str; 5] = ["Sedan/Wagon", "Car SUV", "Truck SUV", "Pickup", "Minivan/Van"];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn gauss(&mut self, mu: f64, sigma: f64) -> f64 {
        // Box-Muller
        let u1 = self.next_f64().max(1e-12);
        let u2 = self.next_f64();
        mu + sigma * (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn horsepower_records(rng: &mut SimpleRng) -> Vec<Value> {
    let mut records = Vec::new();
    for brand in BRANDS {
        // Brand-level baseline so makes look distinct on the scatter.
        let base_hp = 150.0 + rng.next_f64() * 150.0;
        for vtype in VEHICLE_TYPES {
            for _ in 0..6 {
                let hp = (base_hp + rng.gauss(0.0, 60.0)).clamp(70.0, 800.0);
                // Electric-heavy makes trend toward zero tailpipe CO2.
                let co2 = if brand == "Tesla" {
                    0.0
                } else {
                    (hp * 1.4 + rng.gauss(60.0, 40.0)).max(0.0)
                };
                records.push(json!({
                    "Manufacturer": brand,
                    "Vehicle Type": vtype,
                    "Horsepower (HP)": round1(hp),
                    "Real-World CO2 (g/mi)": round1(co2),
                }));
            }
        }
    }
    records
}

fn emission_records(rng: &mut SimpleRng) -> Vec<Value> {
    let mut records = Vec::new();
    for brand in BRANDS {
        for vtype in &VEHICLE_TYPES[..3] {
            let start = 380.0 + rng.next_f64() * 120.0;
            for (i, year) in (2008..=2022).enumerate() {
                // Gentle downward trend with noise.
                let co2 = if brand == "Tesla" {
                    0.0
                } else {
                    (start - i as f64 * 8.0 + rng.gauss(0.0, 12.0)).max(0.0)
                };
                records.push(json!({
                    "Manufacturer": brand,
                    "Model Year": year,
                    "Vehicle Type": vtype,
                    "Real-World CO2 (g/mi)": round1(co2),
                }));
            }
        }
    }
    records
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir).context("creating output directory")?;

    let mut rng = SimpleRng::new(42);

    let horsepower = horsepower_records(&mut rng);
    let path = out_dir.join("horsepower.json");
    std::fs::write(&path, serde_json::to_string_pretty(&horsepower)?)
        .with_context(|| format!("writing {}", path.display()))?;
    println!("wrote {} records to {}", horsepower.len(), path.display());

    let emissions = emission_records(&mut rng);
    let path = out_dir.join("dataset.json");
    std::fs::write(&path, serde_json::to_string_pretty(&emissions)?)
        .with_context(|| format!("writing {}", path.display()))?;
    println!("wrote {} records to {}", emissions.len(), path.display());

    Ok(())
}
