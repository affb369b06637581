//! Mode Selection
//!
//! Pure transition from the current actuator register to the one that
//! puts the front-end on a band, receiving or transmitting.

use crate::hal::tsp::ActState;
use crate::rffe::error::UnsupportedBand;
use crate::rffe::wiring::{self, IDLE};
use crate::types::Band;

/// Operating mode requested from the front-end
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RfMode {
    /// Band to operate on
    pub band: Band,
    /// Transmit path requested
    pub tx: bool,
}

impl RfMode {
    /// Receive on a band
    #[must_use]
    pub const fn rx(band: Band) -> Self {
        Self { band, tx: false }
    }

    /// Transmit on a band
    #[must_use]
    pub const fn tx(band: Band) -> Self {
        Self { band, tx: true }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for RfMode {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} {=str}", self.band, if self.tx { "TX" } else { "RX" });
    }
}

/// Compute the actuator register for a mode
///
/// Starts from `current`, drops back to the idle pattern, applies the
/// band's receive override and, when `tx_enabled` and the mode asks for
/// it, the band's transmit override. Bits outside
/// [`wiring::OWNED`] are carried over unchanged.
///
/// # Errors
///
/// Returns [`UnsupportedBand`] if the board has no path for the band.
pub const fn select(
    current: ActState,
    mode: RfMode,
    tx_enabled: bool,
) -> Result<ActState, UnsupportedBand> {
    let Some(row) = wiring::wiring(mode.band) else {
        return Err(UnsupportedBand(mode.band));
    };

    let mut next = IDLE.apply(current);
    next = row.rx.apply(next);

    if tx_enabled && mode.tx {
        next = row.tx.apply(next);
    }

    Ok(next)
}
