//! Weekly generation/demand balance simulator for a hydro-dominated grid.
//!
//! Rebuilds a synthetic 168-hour week from closed-form profiles, dispatches
//! hydro against residual demand, and settles the surplus into interconnector
//! export or shortage.

pub mod config;
pub mod io;
/// Profiles, dispatch, engine, and KPI modules.
pub mod sim;
#[cfg(feature = "tui")]
pub mod tui;
