//! Dashboard application state and the reactive recompute cycle.
//!
//! Every control change rebuilds the immutable [`SimInput`] and reruns the
//! full 168-hour simulation synchronously, mirroring the rerender-on-change
//! model of the original dashboard.

use crate::config::ScenarioConfig;
use crate::sim::engine::run_week;
use crate::sim::kpi::KpiReport;
use crate::sim::season::{self, Advisory};
use crate::sim::types::{HourRecord, SimInput};

/// Adjustable capacity sliders, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Hydro,
    Wind,
    Solar,
    Interconnector,
}

impl Control {
    /// All sliders in panel order.
    pub const ALL: [Self; 4] = [Self::Hydro, Self::Wind, Self::Solar, Self::Interconnector];

    /// Panel label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hydro => "Hydro capacity",
            Self::Wind => "Wind capacity",
            Self::Solar => "Solar PV capacity",
            Self::Interconnector => "Interconnector cap",
        }
    }

    /// Slider bounds and step, matching the original sidebar ranges.
    ///
    /// These bounds live here in the controls, not in the simulator.
    pub fn bounds(self) -> (f32, f32, f32) {
        match self {
            Self::Hydro => (30.0, 55.0, 1.0),
            Self::Wind => (0.0, 30.0, 1.0),
            Self::Solar => (0.0, 20.0, 0.5),
            Self::Interconnector => (0.0, 10.0, 0.5),
        }
    }
}

/// Dashboard application state.
pub struct App {
    /// Scenario backing the current input (kept for reset/preset switch).
    scenario: ScenarioConfig,
    /// Current simulation input, rebuilt on every control change.
    pub input: SimInput,
    /// Latest weekly records.
    pub records: Vec<HourRecord>,
    /// Latest KPI report.
    pub kpi: KpiReport,
    /// Seasonal advisory for the current month.
    pub advisory: Advisory,
    /// Currently selected slider.
    pub selected: Control,
    /// Name of the active scenario or preset.
    pub scenario_name: String,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates the app from a validated scenario and recomputes immediately.
    pub fn new(scenario: ScenarioConfig, name: &str) -> Self {
        let input = scenario.build();
        let records = run_week(&input);
        let kpi = KpiReport::from_records(&records, &input);
        let advisory = season::advisory(input.month);
        Self {
            scenario,
            input,
            records,
            kpi,
            advisory,
            selected: Control::Hydro,
            scenario_name: name.to_string(),
            quit: false,
        }
    }

    /// Reruns the full week for the current input.
    fn recompute(&mut self) {
        self.records = run_week(&self.input);
        self.kpi = KpiReport::from_records(&self.records, &self.input);
        self.advisory = season::advisory(self.input.month);
    }

    /// Current value of a slider.
    pub fn value(&self, control: Control) -> f32 {
        match control {
            Control::Hydro => self.input.hydro_gw,
            Control::Wind => self.input.wind_gw,
            Control::Solar => self.input.solar_gw,
            Control::Interconnector => self.input.interconnector_gw,
        }
    }

    /// Moves slider selection down the panel.
    pub fn select_next(&mut self) {
        let i = Control::ALL.iter().position(|&c| c == self.selected);
        self.selected = Control::ALL[(i.unwrap_or(0) + 1) % Control::ALL.len()];
    }

    /// Moves slider selection up the panel.
    pub fn select_prev(&mut self) {
        let i = Control::ALL.iter().position(|&c| c == self.selected);
        let n = Control::ALL.len();
        self.selected = Control::ALL[(i.unwrap_or(0) + n - 1) % n];
    }

    /// Nudges the selected slider by `direction` steps, clamped to its bounds.
    pub fn adjust(&mut self, direction: f32) {
        let (min, max, step) = self.selected.bounds();
        let target = match self.selected {
            Control::Hydro => &mut self.input.hydro_gw,
            Control::Wind => &mut self.input.wind_gw,
            Control::Solar => &mut self.input.solar_gw,
            Control::Interconnector => &mut self.input.interconnector_gw,
        };
        *target = (*target + direction * step).clamp(min, max);
        self.recompute();
    }

    /// Advances the analysis month.
    pub fn next_month(&mut self) {
        self.input.month = self.input.month.next();
        self.recompute();
    }

    /// Steps the analysis month back.
    pub fn prev_month(&mut self) {
        self.input.month = self.input.month.prev();
        self.recompute();
    }

    /// Cycles the planning horizon (2025 -> 2035 -> 2050 -> 2025).
    pub fn cycle_year(&mut self) {
        self.input.planning_year = self.input.planning_year.next();
        self.recompute();
    }

    /// Toggles hydro dispatch between residual and flat mode.
    pub fn toggle_hydro_mode(&mut self) {
        use crate::sim::balance::HydroMode;
        let s = &self.scenario.simulation;
        self.input.hydro_mode = match self.input.hydro_mode {
            HydroMode::Residual { .. } => HydroMode::Flat {
                fraction: s.hydro_flat_fraction,
            },
            HydroMode::Flat { .. } => HydroMode::Residual {
                min_fraction: s.hydro_min_fraction,
            },
        };
        self.recompute();
    }

    /// Switches to a named preset, replacing all inputs.
    pub fn switch_preset(&mut self, name: &str) {
        let Ok(scenario) = ScenarioConfig::from_preset(name) else {
            return;
        };
        self.input = scenario.build();
        self.scenario = scenario;
        self.scenario_name = name.to_string();
        self.selected = Control::Hydro;
        self.recompute();
    }

    /// Resets all inputs to the backing scenario's values.
    pub fn reset(&mut self) {
        self.input = self.scenario.build();
        self.recompute();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::balance::HydroMode;
    use crate::sim::types::{HOURS_PER_WEEK, Month};

    fn app() -> App {
        App::new(ScenarioConfig::baseline(), "baseline")
    }

    #[test]
    fn new_app_has_a_full_week() {
        let app = app();
        assert_eq!(app.records.len(), HOURS_PER_WEEK);
        assert!(app.kpi.avg_demand_gw > 0.0);
    }

    #[test]
    fn adjust_recomputes_and_clamps() {
        let mut app = app();
        let before = app.kpi.avg_demand_gw;

        // Wind up by five steps changes the balance but not demand.
        app.selected = Control::Wind;
        for _ in 0..5 {
            app.adjust(1.0);
        }
        assert_eq!(app.input.wind_gw, 10.0);
        assert_eq!(app.kpi.avg_demand_gw, before);

        // Clamp at the slider maximum.
        for _ in 0..100 {
            app.adjust(1.0);
        }
        assert_eq!(app.input.wind_gw, 30.0);
    }

    #[test]
    fn hydro_slider_clamps_at_lower_bound() {
        let mut app = app();
        app.selected = Control::Hydro;
        for _ in 0..100 {
            app.adjust(-1.0);
        }
        assert_eq!(app.input.hydro_gw, 30.0);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut app = app();
        assert_eq!(app.selected, Control::Hydro);
        app.select_prev();
        assert_eq!(app.selected, Control::Interconnector);
        app.select_next();
        assert_eq!(app.selected, Control::Hydro);
    }

    #[test]
    fn month_cycling_updates_advisory() {
        let mut app = app();
        assert_eq!(app.input.month, Month::Jan);
        // Jan -> Apr is three steps; advisory flips to the freshet branch.
        app.next_month();
        app.next_month();
        app.next_month();
        assert_eq!(app.input.month, Month::Apr);
        assert!(app.advisory.text.starts_with("FRESHET"));
    }

    #[test]
    fn year_cycle_raises_demand() {
        let mut app = app();
        let before = app.kpi.avg_demand_gw;
        app.cycle_year();
        assert!(app.kpi.avg_demand_gw > before);
    }

    #[test]
    fn hydro_mode_toggle_round_trips() {
        let mut app = app();
        let initial = app.input.hydro_mode;
        app.toggle_hydro_mode();
        assert!(matches!(app.input.hydro_mode, HydroMode::Flat { .. }));
        app.toggle_hydro_mode();
        assert_eq!(app.input.hydro_mode, initial);
    }

    #[test]
    fn switch_preset_replaces_inputs() {
        let mut app = app();
        app.switch_preset("summer_export");
        assert_eq!(app.scenario_name, "summer_export");
        assert_eq!(app.input.month, Month::Jul);
        assert_eq!(app.input.wind_gw, 12.0);
    }

    #[test]
    fn unknown_preset_is_ignored() {
        let mut app = app();
        app.switch_preset("nonexistent");
        assert_eq!(app.scenario_name, "baseline");
    }

    #[test]
    fn reset_restores_scenario_values() {
        let mut app = app();
        app.selected = Control::Solar;
        app.adjust(1.0);
        app.next_month();
        app.reset();
        assert_eq!(app.input.solar_gw, 2.0);
        assert_eq!(app.input.month, Month::Jan);
    }

    #[test]
    fn identical_inputs_reproduce_kpis() {
        let mut app = app();
        let avg = app.kpi.avg_demand_gw;
        let revenue = app.kpi.export_revenue_kusd;
        // A no-op adjust pair lands on the same input and must not drift.
        app.selected = Control::Wind;
        app.adjust(1.0);
        app.adjust(-1.0);
        assert_eq!(app.kpi.avg_demand_gw, avg);
        assert_eq!(app.kpi.export_revenue_kusd, revenue);
    }
}
