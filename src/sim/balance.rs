//! Hydro dispatch and hourly balance settlement.

/// How hydro generation is dispatched each hour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HydroMode {
    /// Canonical mode: hydro balances residual demand, clamped between a
    /// minimum operating fraction of capacity and full capacity.
    Residual {
        /// Lower bound as a fraction of installed capacity (0.3..0.4 typical).
        min_fraction: f32,
    },
    /// Alternate mode: hydro runs flat at a fixed fraction of capacity,
    /// ignoring residual demand.
    Flat {
        /// Output as a fraction of installed capacity.
        fraction: f32,
    },
}

impl HydroMode {
    /// Dispatched hydro output for one hour (GW).
    ///
    /// `residual_gw` is demand minus wind and solar for the hour.
    pub fn dispatch_gw(self, residual_gw: f32, hydro_capacity_gw: f32) -> f32 {
        match self {
            Self::Residual { min_fraction } => {
                residual_gw.clamp(min_fraction * hydro_capacity_gw, hydro_capacity_gw)
            }
            Self::Flat { fraction } => fraction * hydro_capacity_gw,
        }
    }
}

/// Export and shortage split of one hour's net balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settlement {
    /// Power sold over the interconnector (GW, in `[0, cap]`).
    pub export_gw: f32,
    /// Unserved demand (GW, >= 0).
    pub shortage_gw: f32,
}

/// Settles a net balance against the interconnector cap.
///
/// Surplus beyond the cap is spilled (neither exported nor counted as
/// shortage); deficit becomes shortage.
pub fn settle(balance_gw: f32, interconnector_gw: f32) -> Settlement {
    Settlement {
        export_gw: balance_gw.clamp(0.0, interconnector_gw.max(0.0)),
        shortage_gw: (-balance_gw).max(0.0),
    }
}
