use std::collections::{BTreeSet, VecDeque};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};

use eframe::egui::Color32;

use crate::color::{generate_palette, TypeColorMap};
use crate::data::filter::{emissions_for_brand, group_by_type, mean_co2, vehicles_for_brand};
use crate::data::loader::{spawn_loaders, LoadedDataset};
use crate::data::model::{EmissionRecord, VehicleRecord};

/// Seconds between two scatter point reveals.
pub const REVEAL_STEP_SECS: f64 = 0.010;

// ---------------------------------------------------------------------------
// Scatter render session (one per brand click)
// ---------------------------------------------------------------------------

/// One revealed scatter point. `show_legend` is true only for the first point
/// of its vehicle type within this session.
#[derive(Debug, Clone)]
pub struct RevealedPoint {
    pub record: VehicleRecord,
    pub show_legend: bool,
}

/// Owns one animated scatter reveal: a queue of horsepower-sorted records that
/// drain onto the plot on a fixed cadence. Finite and not restartable;
/// starting a session for another brand replaces this one, cancelling any
/// in-flight animation.
#[derive(Debug)]
pub struct ScatterSession {
    pub brand: String,
    pub colors: TypeColorMap,
    queue: VecDeque<VehicleRecord>,
    revealed: Vec<RevealedPoint>,
    legend_shown: BTreeSet<String>,
    next_reveal: Option<f64>,
}

impl ScatterSession {
    /// Start a session from brand-filtered, horsepower-sorted records.
    /// Colors are assigned to distinct vehicle types in first-seen order
    /// after the sort.
    pub fn new(brand: &str, sorted: Vec<VehicleRecord>) -> Self {
        let colors = TypeColorMap::from_types(sorted.iter().map(|r| r.vehicle_type.as_str()));
        Self {
            brand: brand.to_string(),
            colors,
            queue: sorted.into(),
            revealed: Vec::new(),
            legend_shown: BTreeSet::new(),
            next_reveal: None,
        }
    }

    /// Move records due at frame time `now` (seconds) from the queue to the
    /// revealed list. Catches up if more than one step elapsed since the
    /// last frame.
    pub fn advance(&mut self, now: f64) {
        let next = self.next_reveal.get_or_insert(now);
        while *next <= now {
            let Some(record) = self.queue.pop_front() else {
                break;
            };
            let show_legend = self.legend_shown.insert(record.vehicle_type.clone());
            self.revealed.push(RevealedPoint { record, show_legend });
            *next += REVEAL_STEP_SECS;
        }
    }

    /// Whether the queue still holds undrawn records.
    pub fn is_animating(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn revealed(&self) -> &[RevealedPoint] {
        &self.revealed
    }
}

// ---------------------------------------------------------------------------
// Timeline render session
// ---------------------------------------------------------------------------

/// One vehicle-type line on the timeline.
#[derive(Debug, Clone)]
pub struct TypeSeries {
    pub vehicle_type: String,
    pub color: Color32,
    pub records: Vec<EmissionRecord>,
}

/// Everything the timeline panel needs for one brand, computed once per
/// click. Rebuilt from scratch on the next click, so no state leaks across
/// render passes.
#[derive(Debug, Clone)]
pub struct TimelineView {
    pub brand: String,
    pub series: Vec<TypeSeries>,
    pub mean_co2: f64,
    pub y_max: f64,
}

impl TimelineView {
    /// Build the view from brand-filtered emission records. Returns `None`
    /// for an empty filter result.
    pub fn build(brand: &str, records: &[EmissionRecord]) -> Option<Self> {
        let mean = mean_co2(records)?;
        let groups = group_by_type(records);
        let palette = generate_palette(groups.len());

        let series = groups
            .into_iter()
            .zip(palette)
            .map(|((vehicle_type, records), color)| TypeSeries {
                vehicle_type,
                color,
                records,
            })
            .collect();

        let y_max = records.iter().map(|r| r.co2).fold(0.0_f64, f64::max);

        Some(Self {
            brand: brand.to_string(),
            series,
            mean_co2: mean,
            y_max,
        })
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. Datasets are installed once
/// per successful load and read-only from the renderers' perspective.
pub struct AppState {
    /// Directory holding the two JSON datasets and the logo assets.
    pub data_dir: PathBuf,

    pub vehicles: Vec<VehicleRecord>,
    pub emissions: Vec<EmissionRecord>,

    /// The logo strip only appears once the horsepower load has finished;
    /// click handlers must have data to filter.
    pub vehicles_loaded: bool,
    pub emissions_loaded: bool,

    /// Active scatter session (None until the first logo click).
    pub scatter: Option<ScatterSession>,

    /// Active timeline view (None until a click; cleared on every click).
    pub timeline: Option<TimelineView>,

    /// Pending modal alert message.
    pub alert: Option<String>,

    load_rx: Receiver<LoadedDataset>,
}

impl AppState {
    /// Create the state and kick off the two startup loads.
    pub fn new(data_dir: PathBuf) -> Self {
        let (tx, rx) = mpsc::channel();
        spawn_loaders(data_dir.clone(), tx);
        Self {
            data_dir,
            vehicles: Vec::new(),
            emissions: Vec::new(),
            vehicles_loaded: false,
            emissions_loaded: false,
            scatter: None,
            timeline: None,
            alert: None,
            load_rx: rx,
        }
    }

    /// Drain any finished loads into the state. Called once per frame.
    pub fn poll_loads(&mut self) {
        while let Ok(loaded) = self.load_rx.try_recv() {
            match loaded {
                LoadedDataset::Vehicles(records) => {
                    self.vehicles = records;
                    self.vehicles_loaded = true;
                }
                LoadedDataset::Emissions(records) => {
                    self.emissions = records;
                    self.emissions_loaded = true;
                }
            }
        }
    }

    /// Handle a logo click: start a scatter session and rebuild the timeline
    /// view for `brand`.
    pub fn select_brand(&mut self, brand: &str) {
        log::debug!("brand selected: {brand}");

        // Scatter: no match leaves the previous plot untouched.
        let sorted = vehicles_for_brand(&self.vehicles, brand);
        if sorted.is_empty() {
            self.alert = Some(format!("No data available for {brand}"));
        } else {
            self.scatter = Some(ScatterSession::new(brand, sorted));
        }

        // Timeline: cleared unconditionally, stays cleared on no match.
        self.timeline = None;
        let filtered = emissions_for_brand(&self.emissions, brand);
        if filtered.is_empty() {
            self.alert = Some(format!("No data available for {brand}"));
        } else {
            self.timeline = TimelineView::build(brand, &filtered);
        }
    }
}
