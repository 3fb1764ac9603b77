//! Shared test fixtures for integration tests.

use gridmix_sim::config::ScenarioConfig;
use gridmix_sim::sim::types::{Month, SimInput};

/// Baseline input: January, hydro 37 / wind 5 / solar 2 GW, 2.5 GW
/// interconnector, residual hydro dispatch, no noise.
pub fn baseline_input() -> SimInput {
    ScenarioConfig::baseline().build()
}

/// Baseline input with the month swapped.
pub fn input_for_month(month: Month) -> SimInput {
    let mut cfg = ScenarioConfig::baseline();
    cfg.simulation.month = month;
    cfg.build()
}

/// Baseline input with a custom interconnector cap.
pub fn input_with_interconnector(interconnector_gw: f32) -> SimInput {
    let mut cfg = ScenarioConfig::baseline();
    cfg.market.interconnector_gw = interconnector_gw;
    cfg.build()
}
