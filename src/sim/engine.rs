//! Full-week simulation pass: profiles, hydro dispatch, and settlement.

use super::balance::settle;
use super::profile::{demand_profile, solar_profile, wind_profile};
use super::season;
use super::types::{HOURS_PER_WEEK, HourRecord, SimInput};

/// Runs the balance simulation over the 168-hour week.
///
/// Pure given the input (including the noise seed): two calls with the same
/// `SimInput` produce bit-identical records. The whole week is recomputed on
/// every call; there is no incremental state.
pub fn run_week(input: &SimInput) -> Vec<HourRecord> {
    let factors = season::factors(input.month);

    let demand = demand_profile(input, &factors);
    let solar = solar_profile(input.solar_gw, factors.pv);
    let wind = wind_profile(input.wind_gw, factors.wind);

    let mut records = Vec::with_capacity(HOURS_PER_WEEK);
    for t in 0..HOURS_PER_WEEK {
        let residual = demand[t] - solar[t] - wind[t];
        let hydro = input.hydro_mode.dispatch_gw(residual, input.hydro_gw);
        let balance = hydro + solar[t] + wind[t] - demand[t];
        let s = settle(balance, input.interconnector_gw);

        records.push(HourRecord {
            hour: t,
            demand_gw: demand[t],
            hydro_gw: hydro,
            wind_gw: wind[t],
            solar_gw: solar[t],
            balance_gw: balance,
            export_gw: s.export_gw,
            shortage_gw: s.shortage_gw,
        });
    }
    records
}
