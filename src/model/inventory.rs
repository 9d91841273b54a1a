// src/model/inventory.rs

/// On-hand stock and cumulative backlog of the single stocked item.
///
/// Stock never goes negative: whatever demand cannot be served from the shelf
/// is added to the backlog, which only ever grows.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryState {
    pub stock: f64,
    pub backlog: f64,

    // Tracking for the day record
    pub last_delivery: f64,
    pub last_demand: f64,
}

impl InventoryState {
    pub fn new(initial_stock: f64) -> Self {
        Self {
            stock: initial_stock,
            backlog: 0.0,
            last_delivery: 0.0,
            last_demand: 0.0,
        }
    }

    /// Step 1: Goods from the pipeline land on the shelf.
    pub fn receive_shipment(&mut self, quantity: f64) {
        self.stock += quantity;
        self.last_delivery = quantity;
    }

    /// Step 2: Serve the day's demand from stock, backlog the rest.
    ///
    /// Returns the unmet quantity.
    pub fn fulfil_demand(&mut self, demand: f64) -> f64 {
        self.last_demand = demand;

        let satisfied = self.stock.min(demand);
        self.stock -= satisfied;

        let unmet = demand - satisfied;
        self.backlog += unmet;
        unmet
    }
}
