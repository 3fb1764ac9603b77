//! Core simulation types: calendar enums, the immutable input struct, and
//! per-hour balance records.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::balance::HydroMode;

/// Number of hourly samples in the synthetic week (Mon 00:00 .. Sun 23:00).
pub const HOURS_PER_WEEK: usize = 168;

/// First weekend sample (Saturday 00:00).
pub const WEEKEND_START_HOUR: usize = 120;

/// Day labels for the x-axis, one per 24 samples.
pub const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Calendar month selecting the seasonal factor row.
///
/// Deserializes from the three-letter label used in scenario files
/// (`month = "Jan"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::Jan,
        Self::Feb,
        Self::Mar,
        Self::Apr,
        Self::May,
        Self::Jun,
        Self::Jul,
        Self::Aug,
        Self::Sep,
        Self::Oct,
        Self::Nov,
        Self::Dec,
    ];

    /// Zero-based calendar index (Jan = 0).
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&m| m == self).unwrap_or(0)
    }

    /// Three-letter label as used in scenario files and the dashboard header.
    pub fn label(self) -> &'static str {
        match self {
            Self::Jan => "Jan",
            Self::Feb => "Feb",
            Self::Mar => "Mar",
            Self::Apr => "Apr",
            Self::May => "May",
            Self::Jun => "Jun",
            Self::Jul => "Jul",
            Self::Aug => "Aug",
            Self::Sep => "Sep",
            Self::Oct => "Oct",
            Self::Nov => "Nov",
            Self::Dec => "Dec",
        }
    }

    /// Next month, wrapping Dec -> Jan.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % 12]
    }

    /// Previous month, wrapping Jan -> Dec.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + 11) % 12]
    }
}

impl FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown month \"{s}\" (expected Jan..Dec)"))
    }
}

/// Planning horizon selecting the demand electrification multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PlanningYear {
    #[serde(rename = "2025")]
    Y2025,
    #[serde(rename = "2035")]
    Y2035,
    #[serde(rename = "2050")]
    Y2050,
}

impl PlanningYear {
    /// Demand multiplier capturing heating/transport electrification.
    pub fn electrification_factor(self) -> f32 {
        match self {
            Self::Y2025 => 1.0,
            Self::Y2035 => 1.25,
            Self::Y2050 => 1.45,
        }
    }

    /// Four-digit label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Y2025 => "2025",
            Self::Y2035 => "2035",
            Self::Y2050 => "2050",
        }
    }

    /// Next horizon, wrapping 2050 -> 2025.
    pub fn next(self) -> Self {
        match self {
            Self::Y2025 => Self::Y2035,
            Self::Y2035 => Self::Y2050,
            Self::Y2050 => Self::Y2025,
        }
    }
}

/// Immutable simulation input, built once per run from the scenario config
/// (or from the current dashboard slider values).
///
/// Capacities are non-negative by construction upstream; the simulator
/// itself never range-checks them.
#[derive(Debug, Clone)]
pub struct SimInput {
    /// Installed hydro capacity (GW).
    pub hydro_gw: f32,
    /// Installed wind capacity (GW).
    pub wind_gw: f32,
    /// Installed solar PV capacity (GW).
    pub solar_gw: f32,
    /// Interconnector export cap (GW).
    pub interconnector_gw: f32,
    /// Analysis month.
    pub month: Month,
    /// Planning horizon.
    pub planning_year: PlanningYear,
    /// Demand multiplier applied to weekend samples (1.0 disables it).
    pub weekend_reduction: f32,
    /// Gaussian demand noise std (GW); 0 keeps the run deterministic.
    pub demand_noise_std: f32,
    /// Seed for the demand noise generator.
    pub seed: u64,
    /// Hydro dispatch mode.
    pub hydro_mode: HydroMode,
    /// Export price used by the revenue KPI ($/MWh).
    pub export_price_per_mwh: f32,
}

/// One hour of the simulated week, all quantities in GW.
#[derive(Debug, Clone)]
pub struct HourRecord {
    /// Hour-of-week index (0 = Mon 00:00).
    pub hour: usize,
    /// System demand.
    pub demand_gw: f32,
    /// Dispatched hydro generation.
    pub hydro_gw: f32,
    /// Wind generation.
    pub wind_gw: f32,
    /// Solar PV generation.
    pub solar_gw: f32,
    /// Net balance: total generation minus demand.
    pub balance_gw: f32,
    /// Export over the interconnector (>= 0, <= cap).
    pub export_gw: f32,
    /// Unserved demand (>= 0).
    pub shortage_gw: f32,
}

impl HourRecord {
    /// Day label for this hour (`Mon`..`Sun`).
    pub fn day(&self) -> &'static str {
        DAY_LABELS[(self.hour / 24) % 7]
    }

    /// Hour of day (0..24).
    pub fn hour_of_day(&self) -> usize {
        self.hour % 24
    }
}

impl fmt::Display for HourRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02}:00 | demand={:>5.2} GW | hydro={:>5.2}  wind={:>5.2}  solar={:>5.2} \
             | export={:>4.2}  shortage={:>4.2}",
            self.day(),
            self.hour_of_day(),
            self.demand_gw,
            self.hydro_gw,
            self.wind_gw,
            self.solar_gw,
            self.export_gw,
            self.shortage_gw,
        )
    }
}
