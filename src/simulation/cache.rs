// src/simulation/cache.rs

use crate::analysis::summary::{summarize, Summary};
use crate::error::SimError;
use crate::simulation::config::PolicyParams;
use crate::simulation::engine::{simulate, Trace};
use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// A finished run: the trace and the KPIs derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRun {
    pub trace: Trace,
    pub summary: Summary,
}

impl SimulationRun {
    pub fn execute(params: &PolicyParams) -> Result<Self, SimError> {
        let trace = simulate(params)?;
        let summary = summarize(trace.records())?;
        Ok(Self { trace, summary })
    }
}

/// Exact-value identity of a parameter set; floats compare by bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ParamsKey {
    days: usize,
    initial_stock: u64,
    reorder_point: u64,
    reorder_qty: u64,
    mean_demand: u64,
    demand_std: u64,
    lead_time: usize,
    seed: u64,
}

impl From<&PolicyParams> for ParamsKey {
    fn from(params: &PolicyParams) -> Self {
        Self {
            days: params.days,
            initial_stock: params.initial_stock.to_bits(),
            reorder_point: params.reorder_point.to_bits(),
            reorder_qty: params.reorder_qty.to_bits(),
            mean_demand: params.mean_demand.to_bits(),
            demand_std: params.demand_std.to_bits(),
            lead_time: params.lead_time,
            seed: params.seed,
        }
    }
}

/// Memoises runs by parameter value.
///
/// A run is a pure function of its parameters, so a hit is indistinguishable
/// from recomputing. Safe to share between request threads.
#[derive(Debug, Default)]
pub struct RunCache {
    runs: Mutex<HashMap<ParamsKey, Arc<SimulationRun>>>,
}

impl RunCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached run for `params`, simulating it on a miss.
    ///
    /// The lock is not held while simulating; two threads missing on the same
    /// key both compute and the later insert wins with an identical value.
    pub fn get_or_run(&self, params: &PolicyParams) -> Result<Arc<SimulationRun>, SimError> {
        let key = ParamsKey::from(params);

        if let Some(run) = self
            .runs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            debug!("run cache hit (seed {}, {} days)", params.seed, params.days);
            return Ok(Arc::clone(run));
        }

        debug!("run cache miss (seed {}, {} days)", params.seed, params.days);
        let run = Arc::new(SimulationRun::execute(params)?);
        self.runs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, Arc::clone(&run));
        Ok(run)
    }

    pub fn len(&self) -> usize {
        self.runs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
