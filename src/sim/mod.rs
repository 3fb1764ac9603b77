/// Hydro dispatch modes and balance settlement.
pub mod balance;
pub mod engine;
pub mod kpi;
/// Closed-form weekly demand/solar/wind profiles.
pub mod profile;
/// Seasonal factor tables and the advisory lookup.
pub mod season;
pub mod types;
