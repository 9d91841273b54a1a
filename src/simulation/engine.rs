// src/simulation/engine.rs

use crate::error::SimError;
use crate::model::demand::DemandSampler;
use crate::model::inventory::InventoryState;
use crate::model::numbers::round2;
use crate::model::pipeline::OrderPipeline;
use crate::simulation::config::PolicyParams;
use crate::strategy::reorder_point::ReorderPointPolicy;
use crate::strategy::traits::OrderPolicy;
use log::{debug, trace};
use serde::Serialize;

/// One simulated day. Field names double as CSV column headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub day: usize,
    /// Stock after arrivals and demand, rounded to 2 decimals.
    pub stock: f64,
    pub deliveries: f64,
    pub demand: f64,
    /// Either 0 or the reorder quantity.
    pub order: f64,
    /// Cumulative unmet demand, rounded to 2 decimals.
    pub backlog: f64,
}

/// The full day-by-day output of one run, ascending by day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    records: Vec<DayRecord>,
}

impl Trace {
    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&DayRecord> {
        self.records.last()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a DayRecord;
    type IntoIter = std::slice::Iter<'a, DayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

pub struct InventorySimulation {
    params: PolicyParams,

    // The shelf and the pipe feeding it
    inventory: InventoryState,
    pipeline: OrderPipeline,

    // Decision logic and the source of randomness
    policy: Box<dyn OrderPolicy>,
    demand: DemandSampler,

    current_day: usize,
    history: Vec<DayRecord>,
}

impl InventorySimulation {
    /// Sets up a run with the standard (s, Q) reorder policy.
    pub fn new(params: PolicyParams) -> Result<Self, SimError> {
        let policy = Box::new(ReorderPointPolicy::from_params(&params));
        Self::with_policy(params, policy)
    }

    /// Sets up a run with a custom replenishment policy.
    ///
    /// # Errors
    ///
    /// Fails fast if `params` does not validate; nothing is simulated.
    pub fn with_policy(
        params: PolicyParams,
        policy: Box<dyn OrderPolicy>,
    ) -> Result<Self, SimError> {
        params.validate()?;
        let demand = DemandSampler::new(params.mean_demand, params.demand_std, params.seed)?;

        Ok(Self {
            inventory: InventoryState::new(params.initial_stock),
            pipeline: OrderPipeline::new(),
            policy,
            demand,
            current_day: 0,
            history: Vec::with_capacity(params.days + 1),
            params,
        })
    }

    pub fn run(&mut self) {
        // Day 0 through the horizon, inclusive
        while self.current_day <= self.params.days {
            self.step();
        }
        debug!(
            "simulated {} days (seed {}): final stock {:.2}, backlog {:.2}, {} orders in transit",
            self.history.len(),
            self.params.seed,
            self.inventory.stock,
            self.inventory.backlog,
            self.pipeline.len()
        );
    }

    fn step(&mut self) {
        let day = self.current_day;

        // PHASE 1: MORNING (Arrivals)
        let deliveries = self.pipeline.take_arrivals(day);
        self.inventory.receive_shipment(deliveries);

        // PHASE 2: DAY (Demand)
        self.inventory.fulfil_demand(self.demand.next_demand());

        // PHASE 3: EVENING (Replenishment)
        let order = self.policy.calculate_order(self.inventory.stock);
        if order > 0.0 {
            self.pipeline.place(order, day + self.params.lead_time);
        }

        // PHASE 4: RECORD & ADVANCE
        if day % 30 == 0 {
            trace!(
                "day {}: stock {:.2}, backlog {:.2}, in transit {:.2}",
                day,
                self.inventory.stock,
                self.inventory.backlog,
                self.pipeline.in_transit()
            );
        }
        self.record_day(order);
        self.current_day += 1;
    }

    fn record_day(&mut self, order: f64) {
        self.history.push(DayRecord {
            day: self.current_day,
            stock: round2(self.inventory.stock),
            deliveries: self.inventory.last_delivery,
            demand: self.inventory.last_demand,
            order,
            backlog: round2(self.inventory.backlog),
        });
    }

    pub fn params(&self) -> &PolicyParams {
        &self.params
    }

    /// Quantity ordered but not yet delivered, including lots due after the horizon.
    pub fn in_transit(&self) -> f64 {
        self.pipeline.in_transit()
    }

    pub fn history(&self) -> &[DayRecord] {
        &self.history
    }

    pub fn into_trace(self) -> Trace {
        Trace {
            records: self.history,
        }
    }
}

/// Runs a complete simulation for `params` and returns its trace.
///
/// # Errors
///
/// Returns the validation error when `params` is out of range.
pub fn simulate(params: &PolicyParams) -> Result<Trace, SimError> {
    let mut sim = InventorySimulation::new(params.clone())?;
    sim.run();
    Ok(sim.into_trace())
}
