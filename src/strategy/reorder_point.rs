// src/strategy/reorder_point.rs

use crate::simulation::config::PolicyParams;
use crate::strategy::traits::OrderPolicy;

/// The classic (s, Q) rule: once stock is at or below the reorder point `s`,
/// order a fixed lot `Q`.
///
/// The rule looks at on-hand stock only, so while a lot is in transit and stock
/// stays low it keeps ordering every day.
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderPointPolicy {
    reorder_point: f64,
    reorder_qty: f64,
}

impl ReorderPointPolicy {
    pub fn new(reorder_point: f64, reorder_qty: f64) -> Self {
        Self {
            reorder_point,
            reorder_qty,
        }
    }

    pub fn from_params(params: &PolicyParams) -> Self {
        Self::new(params.reorder_point, params.reorder_qty)
    }
}

impl OrderPolicy for ReorderPointPolicy {
    fn calculate_order(&self, stock: f64) -> f64 {
        if stock <= self.reorder_point {
            self.reorder_qty
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_at_and_below_the_reorder_point() {
        let policy = ReorderPointPolicy::new(20.0, 100.0);
        assert_eq!(policy.calculate_order(20.01), 0.0);
        assert_eq!(policy.calculate_order(20.0), 100.0);
        assert_eq!(policy.calculate_order(0.0), 100.0);
    }

    #[test]
    fn zero_reorder_point_only_fires_on_empty_shelf() {
        let policy = ReorderPointPolicy::new(0.0, 600.0);
        assert_eq!(policy.calculate_order(0.5), 0.0);
        assert_eq!(policy.calculate_order(0.0), 600.0);
    }
}
