// src/simulation/scenarios.rs

use serde::Serialize;

pub const BASELINE_LABEL: &str = "Baseline (constant u=1)";
pub const STEP_LABEL: &str = "Step (surge at day 90)";
pub const RAMP_LABEL: &str = "Ramp (gradual rise 60-120)";

const BASE_LEVEL: f64 = 200.0;
const BASE_SLOPE: f64 = 0.8;

const STEP_DAY: usize = 90;
const STEP_SLOPE: f64 = 1.8;

const RAMP_START: usize = 60;
const RAMP_END: usize = 120;
const RAMP_SLOPE: f64 = 2.5;
const RAMP_TAIL_SLOPE: f64 = 3.0;

/// Deterministic reference curves drawn next to a simulation for comparison.
///
/// They do not depend on the stochastic run, only on the horizon length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSet {
    pub days: Vec<usize>,
    pub baseline: Vec<f64>,
    pub step: Vec<f64>,
    pub ramp: Vec<f64>,
}

/// One row of a [`ScenarioSet`], used for tabular export.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioRow {
    pub day: usize,
    pub baseline: f64,
    pub step: f64,
    pub ramp: f64,
}

impl ScenarioSet {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Curves paired with their chart labels, in display order.
    pub fn labelled(&self) -> [(&'static str, &[f64]); 3] {
        [
            (BASELINE_LABEL, self.baseline.as_slice()),
            (STEP_LABEL, self.step.as_slice()),
            (RAMP_LABEL, self.ramp.as_slice()),
        ]
    }

    pub fn rows(&self) -> impl Iterator<Item = ScenarioRow> + '_ {
        self.days.iter().enumerate().map(|(i, &day)| ScenarioRow {
            day,
            baseline: self.baseline[i],
            step: self.step[i],
            ramp: self.ramp[i],
        })
    }
}

/// Steady linear growth.
pub fn baseline_at(day: usize) -> f64 {
    BASE_LEVEL + BASE_SLOPE * day as f64
}

/// Baseline growth that jumps to a steeper slope from day 90.
pub fn step_at(day: usize) -> f64 {
    if day < STEP_DAY {
        baseline_at(day)
    } else {
        BASE_LEVEL + BASE_SLOPE * STEP_DAY as f64 + STEP_SLOPE * (day - STEP_DAY) as f64
    }
}

/// Baseline growth, a steeper ramp over days 60-120, then steeper still.
pub fn ramp_at(day: usize) -> f64 {
    let ramp_top = BASE_LEVEL
        + BASE_SLOPE * RAMP_START as f64
        + RAMP_SLOPE * (RAMP_END - RAMP_START) as f64;

    if day < RAMP_START {
        baseline_at(day)
    } else if day < RAMP_END {
        BASE_LEVEL + BASE_SLOPE * RAMP_START as f64 + RAMP_SLOPE * (day - RAMP_START) as f64
    } else {
        ramp_top + RAMP_TAIL_SLOPE * (day - RAMP_END) as f64
    }
}

/// Generates the three reference curves over days `0..days`.
pub fn scenario_curves(days: usize) -> ScenarioSet {
    let range = 0..days;
    ScenarioSet {
        days: range.clone().collect(),
        baseline: range.clone().map(baseline_at).collect(),
        step: range.clone().map(step_at).collect(),
        ramp: range.map(ramp_at).collect(),
    }
}
