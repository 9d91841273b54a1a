// src/model/demand.rs

use crate::error::SimError;
use crate::model::numbers::round2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Daily demand drawn from a Normal (Bell Curve) distribution.
///
/// Each sampler owns its generator, seeded once, so the same seed always
/// replays the same demand sequence and parallel runs never share state.
#[derive(Debug, Clone)]
pub struct DemandSampler {
    rng: ChaCha8Rng,
    normal: Normal<f64>,
}

impl DemandSampler {
    /// # Arguments
    /// * `mean` - The average daily demand (e.g., 120.0).
    /// * `std_dev` - The standard deviation (volatility) (e.g., 30.0).
    /// * `seed` - Sole source of randomness for this sampler.
    pub fn new(mean: f64, std_dev: f64, seed: u64) -> Result<Self, SimError> {
        let normal = Normal::new(mean, std_dev).map_err(|_| SimError::InvalidParameter {
            field: "demand_std",
            requirement: "a finite number >= 0",
            value: std_dev,
        })?;

        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            normal,
        })
    }

    /// Samples the next day's demand.
    ///
    /// Negative draws are clamped to 0 (demand cannot be negative) and the
    /// result is rounded to 2 decimals.
    pub fn next_demand(&mut self) -> f64 {
        let raw: f64 = self.normal.sample(&mut self.rng);
        round2(raw.max(0.0))
    }
}
