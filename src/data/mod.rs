/// Data layer: record types, loading, and brand filtering.
///
/// Architecture:
/// ```text
///  horsepower.json      dataset.json
///        │                   │
///        ▼                   ▼
///   ┌──────────────────────────────┐
///   │            loader            │  two background loads → records
///   └──────────────────────────────┘
///        │                   │
///        ▼                   ▼
///   Vec<VehicleRecord>  Vec<EmissionRecord>
///        │                   │
///        ▼                   ▼
///   ┌──────────────────────────────┐
///   │            filter            │  brand match, sort, group, mean
///   └──────────────────────────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
