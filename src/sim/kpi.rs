//! Post-hoc KPI computation from the hourly balance records.

use std::fmt;

use super::types::{HourRecord, SimInput};

/// Small denominator guard for the VRE yield ratio when wind + solar
/// capacity is near zero.
const YIELD_EPS_GW: f32 = 1e-3;

/// Headline indicators derived from a complete weekly run.
///
/// Computed post-hoc from `Vec<HourRecord>` so the report always matches
/// the rendered series.
#[derive(Debug, Clone)]
pub struct KpiReport {
    /// Mean system demand over the week (GW).
    pub avg_demand_gw: f32,
    /// Mean VRE output as a percentage of installed wind + solar capacity.
    pub vre_yield_pct: f32,
    /// Worst hourly shortage (GW).
    pub peak_shortage_gw: f32,
    /// Number of hours with any shortage.
    pub shortage_hours: usize,
    /// Total exported energy (GWh, hourly samples).
    pub export_total_gwh: f32,
    /// Peak hourly export (GW).
    pub peak_export_gw: f32,
    /// Estimated export revenue (thousand $).
    pub export_revenue_kusd: f32,
}

impl KpiReport {
    /// Computes all KPIs from the weekly records and the input they came from.
    pub fn from_records(records: &[HourRecord], input: &SimInput) -> Self {
        if records.is_empty() {
            return Self {
                avg_demand_gw: 0.0,
                vre_yield_pct: 0.0,
                peak_shortage_gw: 0.0,
                shortage_hours: 0,
                export_total_gwh: 0.0,
                peak_export_gw: 0.0,
                export_revenue_kusd: 0.0,
            };
        }

        let n = records.len() as f32;
        let mut demand_sum = 0.0_f32;
        let mut vre_sum = 0.0_f32;
        let mut peak_shortage = 0.0_f32;
        let mut shortage_hours = 0_usize;
        let mut export_sum = 0.0_f32;
        let mut peak_export = 0.0_f32;

        for r in records {
            demand_sum += r.demand_gw;
            vre_sum += r.wind_gw + r.solar_gw;
            peak_shortage = peak_shortage.max(r.shortage_gw);
            if r.shortage_gw > 0.0 {
                shortage_hours += 1;
            }
            export_sum += r.export_gw;
            peak_export = peak_export.max(r.export_gw);
        }

        let vre_capacity = input.wind_gw + input.solar_gw;
        let vre_yield_pct = 100.0 * (vre_sum / n) / (vre_capacity + YIELD_EPS_GW);

        // One sample per hour, so summed GW is GWh; 1 GWh at $/MWh prices
        // is price-per-MWh thousand dollars.
        let export_revenue_kusd = export_sum * input.export_price_per_mwh;

        Self {
            avg_demand_gw: demand_sum / n,
            vre_yield_pct,
            peak_shortage_gw: peak_shortage,
            shortage_hours,
            export_total_gwh: export_sum,
            peak_export_gw: peak_export,
            export_revenue_kusd,
        }
    }
}

impl fmt::Display for KpiReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Weekly Balance KPIs ---")?;
        writeln!(f, "Average demand:     {:.1} GW", self.avg_demand_gw)?;
        writeln!(f, "VRE yield:          {:.1}%", self.vre_yield_pct)?;
        writeln!(
            f,
            "Peak shortage:      {:.2} GW ({} h affected)",
            self.peak_shortage_gw, self.shortage_hours
        )?;
        writeln!(
            f,
            "Export:             {:.1} GWh (peak {:.2} GW)",
            self.export_total_gwh, self.peak_export_gw
        )?;
        write!(f, "Est. export revenue: {:.1} k$", self.export_revenue_kusd)
    }
}
