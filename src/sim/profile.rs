//! Closed-form weekly profiles for demand, solar, and wind.
//!
//! Each profile is a fixed 168-sample vector regenerated from scratch on
//! every run. The shapes are sums of sinusoids over the week; the sample
//! phase runs from 0 at Mon 00:00 to the full span at Sun 23:00.

use std::f32::consts::PI;

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::season::SeasonalFactors;
use super::types::{HOURS_PER_WEEK, SimInput, WEEKEND_START_HOUR};

/// Flat base demand before seasonal scaling (GW).
const BASE_DEMAND_GW: f32 = 25.0;
/// Amplitude of the diurnal demand swing (GW, 7 cycles per week).
const DIURNAL_AMP_GW: f32 = 10.0;
/// Amplitude of the slow intra-week demand swing (GW, 3.5 cycles per week).
const SLOW_AMP_GW: f32 = 5.0;
/// Wind output floor as a fraction of capacity.
const WIND_BASELINE: f32 = 0.6;
/// Wind oscillation amplitude as a fraction of capacity.
const WIND_AMP: f32 = 0.3;

/// Normalized sample phase in `[0, 1]` across the week.
fn phase(t: usize) -> f32 {
    t as f32 / (HOURS_PER_WEEK - 1) as f32
}

/// Gaussian noise via Box-Muller; returns 0 when `std_dev <= 0`.
fn gaussian_noise(rng: &mut StdRng, std_dev: f32) -> f32 {
    if std_dev <= 0.0 {
        return 0.0;
    }
    let u1: f32 = rng.random::<f32>().clamp(1e-6, 1.0);
    let u2: f32 = rng.random::<f32>();
    let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    z0 * std_dev
}

/// Hourly demand profile (GW).
///
/// Base sinusoids scaled by the seasonal demand factor and the planning-year
/// electrification multiplier; weekend samples (120..168) additionally get
/// the weekend reduction multiplier. Optional Gaussian noise is drawn from a
/// generator seeded with `input.seed`, so a given input always produces the
/// same profile. Demand never goes negative.
pub fn demand_profile(input: &SimInput, factors: &SeasonalFactors) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(input.seed);
    let electrification = input.planning_year.electrification_factor();

    (0..HOURS_PER_WEEK)
        .map(|t| {
            let x = phase(t);
            let shape = BASE_DEMAND_GW
                + DIURNAL_AMP_GW * (14.0 * PI * x).sin()
                + SLOW_AMP_GW * (7.0 * PI * x).cos();
            let mut gw = shape * factors.demand * electrification;
            if t >= WEEKEND_START_HOUR {
                gw *= input.weekend_reduction;
            }
            (gw + gaussian_noise(&mut rng, input.demand_noise_std)).max(0.0)
        })
        .collect()
}

/// Hourly solar profile (GW): one positive half-cycle per day, zero at night.
pub fn solar_profile(solar_gw: f32, pv_factor: f32) -> Vec<f32> {
    (0..HOURS_PER_WEEK)
        .map(|t| {
            let shape = (-PI / 2.0 + 14.0 * PI * phase(t)).sin().max(0.0);
            solar_gw * shape * pv_factor
        })
        .collect()
}

/// Hourly wind profile (GW): always positive, oscillating around the floor.
pub fn wind_profile(wind_gw: f32, wind_factor: f32) -> Vec<f32> {
    (0..HOURS_PER_WEEK)
        .map(|t| {
            let shape = WIND_BASELINE + WIND_AMP * (10.0 * PI * phase(t)).cos();
            wind_gw * shape * wind_factor
        })
        .collect()
}
