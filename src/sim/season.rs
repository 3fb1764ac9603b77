//! Monthly seasonal factors and the seasonal advisory lookup.

use super::types::Month;

/// Seasonal multipliers for one month, each in `[0, 1]`.
///
/// Index order matches [`Month::ALL`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalFactors {
    /// Solar PV yield multiplier.
    pub pv: f32,
    /// Wind yield multiplier.
    pub wind: f32,
    /// Demand multiplier (heating-driven, peaks in winter).
    pub demand: f32,
}

/// Monthly solar yield factors, Jan..Dec.
const PV_FACTORS: [f32; 12] = [
    0.15, 0.3, 0.6, 0.8, 0.95, 1.0, 0.98, 0.85, 0.65, 0.4, 0.2, 0.1,
];

/// Monthly wind yield factors, Jan..Dec.
const WIND_FACTORS: [f32; 12] = [
    1.0, 0.95, 0.85, 0.7, 0.5, 0.4, 0.45, 0.5, 0.65, 0.8, 0.9, 0.98,
];

/// Monthly demand factors, Jan..Dec.
const DEMAND_FACTORS: [f32; 12] = [
    1.0, 0.9, 0.75, 0.6, 0.55, 0.5, 0.55, 0.52, 0.58, 0.7, 0.85, 0.95,
];

/// Looks up the fixed seasonal multipliers for a month.
pub fn factors(month: Month) -> SeasonalFactors {
    let i = month.index();
    SeasonalFactors {
        pv: PV_FACTORS[i],
        wind: WIND_FACTORS[i],
        demand: DEMAND_FACTORS[i],
    }
}

/// Coarse operating season for the advisory panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    /// Dec..Feb: heating-driven demand peak.
    Winter,
    /// Apr..May: spring snowmelt inflow period.
    Freshet,
    /// Everything else: favourable export conditions.
    Shoulder,
}

/// How the advisory should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Good,
}

/// Seasonal operating advisory shown next to the charts.
#[derive(Debug, Clone, Copy)]
pub struct Advisory {
    pub season: Season,
    pub severity: Severity,
    pub text: &'static str,
}

/// Selects the advisory for a month by the winter/freshet/shoulder ranges.
pub fn advisory(month: Month) -> Advisory {
    match month {
        Month::Dec | Month::Jan | Month::Feb => Advisory {
            season: Season::Winter,
            severity: Severity::Info,
            text: "WINTER: critical heating demand. Wind output is key to system stability.",
        },
        Month::Apr | Month::May => Advisory {
            season: Season::Freshet,
            severity: Severity::Warning,
            text: "FRESHET: spring snowmelt period. High inflows to hydro reservoirs.",
        },
        _ => Advisory {
            season: Season::Shoulder,
            severity: Severity::Good,
            text: "SHOULDER: favourable conditions. High PV + hydro export potential.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_factors_within_unit_interval() {
        for m in Month::ALL {
            let f = factors(m);
            assert!((0.0..=1.0).contains(&f.pv), "pv factor for {}", m.label());
            assert!(
                (0.0..=1.0).contains(&f.wind),
                "wind factor for {}",
                m.label()
            );
            assert!(
                (0.0..=1.0).contains(&f.demand),
                "demand factor for {}",
                m.label()
            );
        }
    }

    #[test]
    fn summer_pv_near_annual_peak() {
        for m in [Month::Jun, Month::Jul, Month::Aug] {
            assert!(factors(m).pv >= 0.85, "pv factor low for {}", m.label());
        }
        assert!(factors(Month::Jul).pv >= 0.95);
    }

    #[test]
    fn winter_demand_exceeds_summer_demand() {
        assert!(factors(Month::Jan).demand > factors(Month::Jul).demand);
        assert_eq!(factors(Month::Jan).demand, 1.0);
    }

    #[test]
    fn wind_is_winter_heavy() {
        assert!(factors(Month::Jan).wind > factors(Month::Jun).wind);
    }

    #[test]
    fn advisory_branches() {
        for m in [Month::Dec, Month::Jan, Month::Feb] {
            assert_eq!(advisory(m).season, Season::Winter);
        }
        for m in [Month::Apr, Month::May] {
            assert_eq!(advisory(m).season, Season::Freshet);
        }
        for m in [Month::Mar, Month::Jun, Month::Jul, Month::Oct] {
            assert_eq!(advisory(m).season, Season::Shoulder);
        }
    }

    #[test]
    fn winter_advisory_text_tagged() {
        assert!(advisory(Month::Jan).text.starts_with("WINTER"));
        assert_eq!(advisory(Month::Jan).severity, Severity::Info);
    }
}
