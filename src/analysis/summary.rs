// src/analysis/summary.rs

use crate::error::SimError;
use crate::simulation::engine::DayRecord;
use serde::Serialize;
use std::fmt;

/// Headline KPIs of a completed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub initial_stock: f64,
    pub final_stock: f64,
    pub total_demand: f64,
    /// Served share of total demand, 0.0..=1.0.
    pub fill_rate: f64,
    pub stockout_days: usize,
    pub final_backlog: f64,
}

impl Summary {
    pub fn fill_rate_percent(&self) -> f64 {
        self.fill_rate * 100.0
    }

    /// Label/value pairs as shown on the dashboard cards.
    pub fn cards(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Initial stock", format!("{:.2}", self.initial_stock)),
            ("Final stock", format!("{:.2}", self.final_stock)),
            ("Total demand", format!("{:.2}", self.total_demand)),
            ("Fill rate", format!("{:.2}%", self.fill_rate_percent())),
            ("Stockout days", self.stockout_days.to_string()),
            ("Final backlog", format!("{:.2}", self.final_backlog)),
        ]
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.cards() {
            writeln!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}

/// Derives the run KPIs from its day records.
///
/// Served quantity is reconstructed from the trace alone: each day's demand
/// minus that day's backlog increase (floored at 0). Day 0 has no prior day,
/// so its whole backlog counts as its increase.
///
/// # Errors
///
/// Returns [`SimError::InvalidInput`] for an empty trace.
pub fn summarize(records: &[DayRecord]) -> Result<Summary, SimError> {
    let (first, last) = match (records.first(), records.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(SimError::InvalidInput("cannot summarize an empty trace")),
    };

    let mut total_demand = 0.0;
    let mut total_served = 0.0;
    let mut stockout_days = 0;
    let mut previous_backlog: Option<f64> = None;

    for record in records {
        let increase = match previous_backlog {
            Some(previous) => record.backlog - previous,
            None => record.backlog,
        }
        .max(0.0);

        total_demand += record.demand;
        total_served += record.demand - increase;
        if record.stock == 0.0 {
            stockout_days += 1;
        }
        previous_backlog = Some(record.backlog);
    }

    let fill_rate = if total_demand > 0.0 {
        total_served / total_demand
    } else {
        1.0
    };

    Ok(Summary {
        initial_stock: first.stock,
        final_stock: last.stock,
        total_demand,
        fill_rate,
        stockout_days,
        final_backlog: last.backlog,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::config::PolicyParams;
    use crate::simulation::engine::simulate;

    fn record(day: usize, stock: f64, demand: f64, backlog: f64) -> DayRecord {
        DayRecord {
            day,
            stock,
            deliveries: 0.0,
            demand,
            order: 0.0,
            backlog,
        }
    }

    #[test]
    fn empty_trace_is_rejected() {
        assert!(matches!(summarize(&[]), Err(SimError::InvalidInput(_))));
    }

    #[test]
    fn zero_demand_means_full_fill_rate() {
        let records = vec![record(0, 5.0, 0.0, 0.0), record(1, 5.0, 0.0, 0.0)];
        let summary = summarize(&records).unwrap();

        assert_eq!(summary.fill_rate, 1.0);
        assert_eq!(summary.total_demand, 0.0);
        assert!(summary.to_string().contains("Fill rate: 100.00%"));
    }

    #[test]
    fn shortage_run_kpis() {
        let params = PolicyParams {
            days: 6,
            initial_stock: 15.0,
            reorder_point: 0.0,
            reorder_qty: 50.0,
            mean_demand: 10.0,
            demand_std: 0.0,
            lead_time: 3,
            seed: 9,
        };
        let trace = simulate(&params).unwrap();
        let summary = summarize(trace.records()).unwrap();

        assert_eq!(summary.initial_stock, 5.0);
        assert_eq!(summary.final_stock, 120.0);
        assert_eq!(summary.total_demand, 70.0);
        assert_eq!(summary.stockout_days, 3);
        assert_eq!(summary.final_backlog, 25.0);
        assert!((summary.fill_rate - 45.0 / 70.0).abs() < 1e-12);
    }

    #[test]
    fn day_zero_backlog_counts_as_unmet() {
        let records = vec![record(0, 0.0, 10.0, 4.0), record(1, 0.0, 10.0, 14.0)];
        let summary = summarize(&records).unwrap();

        assert!((summary.fill_rate - 6.0 / 20.0).abs() < 1e-12);
        assert_eq!(summary.stockout_days, 2);
    }

    #[test]
    fn falling_backlog_is_not_credited_as_extra_service() {
        let records = vec![record(0, 1.0, 10.0, 5.0), record(1, 3.0, 10.0, 2.0)];
        let summary = summarize(&records).unwrap();

        // Day 1 delta is clipped to 0, so it serves its full demand and no more.
        assert!((summary.fill_rate - 15.0 / 20.0).abs() < 1e-12);
    }

    #[test]
    fn cards_render_two_decimals() {
        let summary = Summary {
            initial_stock: 680.0,
            final_stock: 412.456,
            total_demand: 21000.0,
            fill_rate: 0.97312,
            stockout_days: 4,
            final_backlog: 318.5,
        };
        let text = summary.to_string();

        assert!(text.contains("Final stock: 412.46"));
        assert!(text.contains("Fill rate: 97.31%"));
        assert!(text.contains("Stockout days: 4"));
        assert!(text.contains("Final backlog: 318.50"));
    }
}
