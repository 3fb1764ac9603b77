//! Color constants and axis auto-scaling helpers for the dashboard.

use ratatui::style::Color;

use crate::sim::season::Severity;

/// Demand line color.
pub const DEMAND_COLOR: Color = Color::White;
/// Hydro band color.
pub const HYDRO_COLOR: Color = Color::Cyan;
/// Wind band color.
pub const WIND_COLOR: Color = Color::Green;
/// Solar band color.
pub const SOLAR_COLOR: Color = Color::Yellow;
/// Export sparkline color.
pub const EXPORT_COLOR: Color = Color::LightGreen;
/// Shortage highlight color.
pub const SHORTAGE_COLOR: Color = Color::Red;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Selected slider row color.
pub const SELECTED_FG: Color = Color::LightCyan;

/// Maps an advisory severity to its panel color.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::LightBlue,
        Severity::Warning => Color::Yellow,
        Severity::Good => Color::Green,
    }
}

/// Upper Y-axis bound across all chart series with 10% headroom.
///
/// The lower bound is pinned at zero since every series is non-negative.
pub fn y_upper_bound(series: &[&[(f64, f64)]]) -> f64 {
    let max = series
        .iter()
        .flat_map(|s| s.iter().map(|&(_, y)| y))
        .fold(0.0_f64, f64::max);
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    max * 1.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_bound_adds_headroom() {
        let a = [(0.0, 10.0), (1.0, 20.0)];
        let b = [(0.0, 25.0)];
        let hi = y_upper_bound(&[&a, &b]);
        assert!((hi - 27.5).abs() < 1e-9);
    }

    #[test]
    fn upper_bound_handles_empty_series() {
        assert_eq!(y_upper_bound(&[]), 1.0);
        let empty: [(f64, f64); 0] = [];
        assert_eq!(y_upper_bound(&[&empty]), 1.0);
    }
}
