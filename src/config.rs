//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::sim::balance::HydroMode;
use crate::sim::types::{Month, PlanningYear, SimInput};

/// Top-level scenario configuration parsed from TOML.
///
/// All fields default to the baseline scenario. Load from TOML with
/// [`ScenarioConfig::from_toml_file`] or use [`ScenarioConfig::baseline`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Calendar, dispatch mode, and noise parameters.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Installed generation capacities.
    #[serde(default)]
    pub fleet: FleetConfig,
    /// Interconnector and pricing parameters.
    #[serde(default)]
    pub market: MarketConfig,
}

/// Calendar, dispatch mode, and noise parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Analysis month (`"Jan"`..`"Dec"`).
    pub month: Month,
    /// Planning horizon (`"2025"`, `"2035"`, or `"2050"`).
    pub planning_year: PlanningYear,
    /// Seed for the demand noise generator.
    pub seed: u64,
    /// Gaussian demand noise std (GW); 0 disables noise.
    pub demand_noise_std: f32,
    /// Demand multiplier for weekend samples; 1.0 disables the reduction.
    pub weekend_reduction: f32,
    /// Hydro dispatch mode: `"residual"` or `"flat"`.
    pub hydro_mode: String,
    /// Minimum operating fraction for residual dispatch.
    pub hydro_min_fraction: f32,
    /// Fixed output fraction for flat dispatch.
    pub hydro_flat_fraction: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            month: Month::Jan,
            planning_year: PlanningYear::Y2025,
            seed: 42,
            demand_noise_std: 0.0,
            weekend_reduction: 1.0,
            hydro_mode: "residual".to_string(),
            hydro_min_fraction: 0.3,
            hydro_flat_fraction: 0.85,
        }
    }
}

/// Installed generation capacities (GW).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FleetConfig {
    /// Hydro capacity.
    pub hydro_gw: f32,
    /// Wind capacity.
    pub wind_gw: f32,
    /// Solar PV capacity.
    pub solar_gw: f32,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            hydro_gw: 37.0,
            wind_gw: 5.0,
            solar_gw: 2.0,
        }
    }
}

/// Interconnector and pricing parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarketConfig {
    /// Interconnector export cap (GW).
    pub interconnector_gw: f32,
    /// Export price ($/MWh).
    pub export_price_per_mwh: f32,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            interconnector_gw: 2.5,
            export_price_per_mwh: 85.0,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"fleet.hydro_gw"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario: January, current-year fleet mix.
    pub fn baseline() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            fleet: FleetConfig::default(),
            market: MarketConfig::default(),
        }
    }

    /// Returns the summer-export preset: July, VRE-heavy fleet, wide
    /// interconnector, weekend demand lull.
    pub fn summer_export() -> Self {
        Self {
            simulation: SimulationConfig {
                month: Month::Jul,
                weekend_reduction: 0.85,
                ..SimulationConfig::default()
            },
            fleet: FleetConfig {
                wind_gw: 12.0,
                solar_gw: 10.0,
                ..FleetConfig::default()
            },
            market: MarketConfig {
                interconnector_gw: 6.0,
                ..MarketConfig::default()
            },
        }
    }

    /// Returns the winter-stress preset: January at the 2050 horizon with a
    /// thin fleet, built to produce shortage hours.
    pub fn winter_stress() -> Self {
        Self {
            simulation: SimulationConfig {
                month: Month::Jan,
                planning_year: PlanningYear::Y2050,
                ..SimulationConfig::default()
            },
            fleet: FleetConfig {
                hydro_gw: 34.0,
                wind_gw: 3.0,
                solar_gw: 1.0,
            },
            market: MarketConfig {
                interconnector_gw: 1.0,
                ..MarketConfig::default()
            },
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "summer_export", "winter_stress"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "summer_export" => Ok(Self::summer_export()),
            "winter_stress" => Ok(Self::winter_stress()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Sign and range checks only; the original slider bounds belong to the
    /// dashboard controls, not the simulator.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let s = &self.simulation;

        if s.hydro_mode != "residual" && s.hydro_mode != "flat" {
            errors.push(ConfigError {
                field: "simulation.hydro_mode".into(),
                message: format!("must be \"residual\" or \"flat\", got \"{}\"", s.hydro_mode),
            });
        }
        if !(0.0..=1.0).contains(&s.hydro_min_fraction) {
            errors.push(ConfigError {
                field: "simulation.hydro_min_fraction".into(),
                message: "must be in [0.0, 1.0]".into(),
            });
        }
        if !(0.0..=1.0).contains(&s.hydro_flat_fraction) {
            errors.push(ConfigError {
                field: "simulation.hydro_flat_fraction".into(),
                message: "must be in [0.0, 1.0]".into(),
            });
        }
        if !(s.weekend_reduction > 0.0 && s.weekend_reduction <= 1.0) {
            errors.push(ConfigError {
                field: "simulation.weekend_reduction".into(),
                message: "must be in (0.0, 1.0]".into(),
            });
        }
        if !(s.demand_noise_std >= 0.0 && s.demand_noise_std.is_finite()) {
            errors.push(ConfigError {
                field: "simulation.demand_noise_std".into(),
                message: "must be finite and >= 0".into(),
            });
        }

        let f = &self.fleet;
        for (field, value) in [
            ("fleet.hydro_gw", f.hydro_gw),
            ("fleet.wind_gw", f.wind_gw),
            ("fleet.solar_gw", f.solar_gw),
            ("market.interconnector_gw", self.market.interconnector_gw),
            (
                "market.export_price_per_mwh",
                self.market.export_price_per_mwh,
            ),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                errors.push(ConfigError {
                    field: field.into(),
                    message: "must be finite and >= 0".into(),
                });
            }
        }

        errors
    }

    /// Builds the immutable simulation input from this scenario.
    pub fn build(&self) -> SimInput {
        let s = &self.simulation;
        let hydro_mode = if s.hydro_mode == "flat" {
            HydroMode::Flat {
                fraction: s.hydro_flat_fraction,
            }
        } else {
            HydroMode::Residual {
                min_fraction: s.hydro_min_fraction,
            }
        };

        SimInput {
            hydro_gw: self.fleet.hydro_gw,
            wind_gw: self.fleet.wind_gw,
            solar_gw: self.fleet.solar_gw,
            interconnector_gw: self.market.interconnector_gw,
            month: s.month,
            planning_year: s.planning_year,
            weekend_reduction: s.weekend_reduction,
            demand_noise_std: s.demand_noise_std,
            seed: s.seed,
            hydro_mode,
            export_price_per_mwh: self.market.export_price_per_mwh,
        }
    }
}
