// src/strategy/traits.rs

use std::fmt::Debug;

/// Decides how much to order from the supplier at the end of a day.
///
/// We require `Send` + `Sync` so independent runs can go on separate threads.
pub trait OrderPolicy: Debug + Send + Sync {
    /// Calculates the replenishment quantity.
    ///
    /// # Arguments
    /// * `stock` - On-hand stock after today's arrivals and demand.
    ///
    /// Returns 0.0 when no order should be placed.
    fn calculate_order(&self, stock: f64) -> f64;
}
