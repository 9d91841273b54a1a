// src/simulation/config.rs

use crate::error::SimError;
use serde::Serialize;

/// Longest horizon a single run may simulate (ten years of days).
pub const MAX_DAYS: usize = 3650;

/// Longest supplier lead time accepted.
pub const MAX_LEAD_TIME: usize = 365;

/// Inventory policy and demand parameters for one simulation run.
///
/// Validated once up front; the engine never clamps or repairs a policy input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyParams {
    /// Simulation horizon; days `0..=days` are simulated.
    pub days: usize,
    pub initial_stock: f64,
    pub reorder_point: f64,
    /// Fixed lot size placed each time the reorder point is hit.
    pub reorder_qty: f64,
    pub mean_demand: f64,
    pub demand_std: f64,
    /// Days between placing an order and receiving it.
    pub lead_time: usize,
    pub seed: u64,
}

impl Default for PolicyParams {
    fn default() -> Self {
        Self {
            days: 180,
            initial_stock: 800.0,
            reorder_point: 300.0,
            reorder_qty: 600.0,
            mean_demand: 120.0,
            demand_std: 30.0,
            lead_time: 7,
            seed: 42,
        }
    }
}

impl PolicyParams {
    /// Checks every field against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> Result<(), SimError> {
        require(
            "days",
            self.days as f64,
            "between 1 and 3650",
            (1..=MAX_DAYS).contains(&self.days),
        )?;
        require(
            "lead_time",
            self.lead_time as f64,
            "between 1 and 365",
            (1..=MAX_LEAD_TIME).contains(&self.lead_time),
        )?;
        require(
            "initial_stock",
            self.initial_stock,
            "a finite number >= 0",
            self.initial_stock.is_finite() && self.initial_stock >= 0.0,
        )?;
        require(
            "reorder_point",
            self.reorder_point,
            "a finite number >= 0",
            self.reorder_point.is_finite() && self.reorder_point >= 0.0,
        )?;
        require(
            "reorder_qty",
            self.reorder_qty,
            "a finite number > 0",
            self.reorder_qty.is_finite() && self.reorder_qty > 0.0,
        )?;
        require(
            "mean_demand",
            self.mean_demand,
            "a finite number > 0",
            self.mean_demand.is_finite() && self.mean_demand > 0.0,
        )?;
        require(
            "demand_std",
            self.demand_std,
            "a finite number >= 0",
            self.demand_std.is_finite() && self.demand_std >= 0.0,
        )
    }

    /// Builds parameters from submitted form fields.
    ///
    /// Missing fields keep their defaults and unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NotNumeric`] for values that do not parse and
    /// [`SimError::InvalidParameter`] when the result fails validation.
    pub fn from_form<'a, I>(fields: I) -> Result<Self, SimError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut params = Self::default();

        for (key, raw) in fields {
            let raw = raw.trim();
            match key.trim() {
                "days" => params.days = parse_count("days", raw)?,
                "initial_stock" => params.initial_stock = parse_float("initial_stock", raw)?,
                "reorder_point" => params.reorder_point = parse_float("reorder_point", raw)?,
                "reorder_qty" => params.reorder_qty = parse_float("reorder_qty", raw)?,
                "mean_demand" => params.mean_demand = parse_float("mean_demand", raw)?,
                "demand_std" => params.demand_std = parse_float("demand_std", raw)?,
                "lead_time" => params.lead_time = parse_count("lead_time", raw)?,
                "seed" => {
                    params.seed = raw.parse().map_err(|_| SimError::NotNumeric {
                        field: "seed",
                        value: raw.to_string(),
                    })?
                }
                _ => {}
            }
        }

        params.validate()?;
        Ok(params)
    }

    /// Parses an urlencoded-style `key=value&key=value` string.
    ///
    /// Segments without `=` are treated as keys with an empty value.
    pub fn from_query(query: &str) -> Result<Self, SimError> {
        let pairs = query
            .split('&')
            .filter(|segment| !segment.trim().is_empty())
            .map(|segment| segment.split_once('=').unwrap_or((segment, "")));
        Self::from_form(pairs)
    }
}

fn require(
    field: &'static str,
    value: f64,
    requirement: &'static str,
    ok: bool,
) -> Result<(), SimError> {
    if ok {
        Ok(())
    } else {
        Err(SimError::InvalidParameter {
            field,
            requirement,
            value,
        })
    }
}

fn parse_float(field: &'static str, raw: &str) -> Result<f64, SimError> {
    raw.parse().map_err(|_| SimError::NotNumeric {
        field,
        value: raw.to_string(),
    })
}

fn parse_count(field: &'static str, raw: &str) -> Result<usize, SimError> {
    let value: i64 = raw.parse().map_err(|_| SimError::NotNumeric {
        field,
        value: raw.to_string(),
    })?;
    usize::try_from(value).map_err(|_| SimError::InvalidParameter {
        field,
        requirement: "at least 1",
        value: value as f64,
    })
}
