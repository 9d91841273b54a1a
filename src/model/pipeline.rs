// src/model/pipeline.rs

use std::collections::BTreeMap;

/// Orders placed but not yet delivered, bucketed by the day they arrive.
///
/// Looking up a day's arrivals is a single map removal instead of a scan over
/// every outstanding order.
#[derive(Debug, Clone, Default)]
pub struct OrderPipeline {
    arrivals: BTreeMap<usize, Vec<f64>>,
}

impl OrderPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items enter the pipeline. Call this at the END of the day.
    pub fn place(&mut self, quantity: f64, arrival_day: usize) {
        self.arrivals.entry(arrival_day).or_default().push(quantity);
    }

    /// Items due today leave the pipeline. Call this at the START of the day.
    ///
    /// Returns the total quantity delivered; orders due later stay pending.
    pub fn take_arrivals(&mut self, day: usize) -> f64 {
        self.arrivals
            .remove(&day)
            .map(|lots| lots.iter().sum())
            .unwrap_or(0.0)
    }

    /// Total quantity still in transit.
    pub fn in_transit(&self) -> f64 {
        self.arrivals.values().flatten().sum()
    }

    /// Number of outstanding orders.
    pub fn len(&self) -> usize {
        self.arrivals.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }
}
