// src/io/view.rs

use crate::analysis::sampling::{sample_rows, DEFAULT_SAMPLE_SIZE};
use crate::analysis::summary::Summary;
use crate::error::SimError;
use crate::simulation::cache::{RunCache, SimulationRun};
use crate::simulation::config::PolicyParams;
use crate::simulation::engine::DayRecord;
use crate::simulation::scenarios::{scenario_curves, ScenarioSet};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: String,
}

/// Stock and backlog for one day of the line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub day: usize,
    pub stock: f64,
    pub backlog: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub label: &'static str,
    pub data: Vec<f64>,
}

/// Scenario curves in labels + datasets shape, ready for a chart widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioChart {
    pub labels: Vec<usize>,
    pub datasets: Vec<ChartDataset>,
}

impl From<&ScenarioSet> for ScenarioChart {
    fn from(set: &ScenarioSet) -> Self {
        Self {
            labels: set.days.clone(),
            datasets: set
                .labelled()
                .into_iter()
                .map(|(label, data)| ChartDataset {
                    label,
                    data: data.to_vec(),
                })
                .collect(),
        }
    }
}

/// Everything the form page and the dashboard render for one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationView {
    pub params: PolicyParams,
    pub summary: Summary,
    pub cards: Vec<SummaryCard>,
    pub sample: Vec<DayRecord>,
    pub chart: Vec<ChartPoint>,
    pub scenario_chart: ScenarioChart,
}

impl SimulationView {
    /// Simulates `params` from scratch and assembles the view.
    pub fn build(params: &PolicyParams) -> Result<Self, SimError> {
        let run = SimulationRun::execute(params)?;
        Ok(Self::from_run(params, &run))
    }

    /// Same as [`SimulationView::build`] but reuses runs already in `cache`.
    pub fn build_cached(params: &PolicyParams, cache: &RunCache) -> Result<Self, SimError> {
        let run = cache.get_or_run(params)?;
        Ok(Self::from_run(params, &run))
    }

    pub fn from_run(params: &PolicyParams, run: &SimulationRun) -> Self {
        let cards = run
            .summary
            .cards()
            .into_iter()
            .map(|(label, value)| SummaryCard { label, value })
            .collect();

        let chart = run
            .trace
            .iter()
            .map(|record| ChartPoint {
                day: record.day,
                stock: record.stock,
                backlog: record.backlog,
            })
            .collect();

        Self {
            params: params.clone(),
            summary: run.summary.clone(),
            cards,
            sample: sample_rows(&run.trace, DEFAULT_SAMPLE_SIZE),
            chart,
            scenario_chart: ScenarioChart::from(&scenario_curves(params.days)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_carries_every_panel() {
        let params = PolicyParams::default();
        let view = SimulationView::build(&params).unwrap();

        assert_eq!(view.params, params);
        assert_eq!(view.cards.len(), 6);
        assert_eq!(view.cards[3].label, "Fill rate");
        assert!(view.cards[3].value.ends_with('%'));
        assert_eq!(view.sample.len(), 20);
        assert_eq!(view.chart.len(), 181);
        assert_eq!(view.scenario_chart.labels.len(), 180);
        assert_eq!(view.scenario_chart.datasets.len(), 3);
        assert!(view
            .scenario_chart
            .datasets
            .iter()
            .all(|dataset| dataset.data.len() == 180));
    }

    #[test]
    fn cached_and_fresh_views_agree() {
        let cache = RunCache::new();
        let params = PolicyParams {
            days: 45,
            seed: 3,
            ..PolicyParams::default()
        };

        let fresh = SimulationView::build(&params).unwrap();
        let cached = SimulationView::build_cached(&params, &cache).unwrap();
        let again = SimulationView::build_cached(&params, &cache).unwrap();

        assert_eq!(fresh, cached);
        assert_eq!(cached, again);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn invalid_submission_produces_no_view() {
        let params = PolicyParams {
            days: 0,
            ..PolicyParams::default()
        };
        assert!(SimulationView::build(&params).is_err());
    }
}
