pub mod demand;
pub mod inventory;
pub mod numbers;
pub mod pipeline;
