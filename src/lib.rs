//! Discrete-time simulation of a single-item (s, Q) inventory policy.
//!
//! Every day pending orders arrive, a normally distributed demand is drawn and
//! served from stock, unmet demand accumulates as backlog and a fixed lot is
//! ordered whenever stock falls to the reorder point. The resulting trace feeds
//! the summary KPIs, the sampled table and the charts of the presentation layer.

pub mod analysis;
pub mod error;
pub mod io;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use analysis::sampling::{sample_indices, sample_rows};
pub use analysis::summary::{summarize, Summary};
pub use error::SimError;
pub use io::view::SimulationView;
pub use simulation::cache::{RunCache, SimulationRun};
pub use simulation::config::PolicyParams;
pub use simulation::engine::{simulate, DayRecord, InventorySimulation, Trace};
pub use simulation::scenarios::{scenario_curves, ScenarioSet};
