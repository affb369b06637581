//! Antenna switch and PA wiring of the tri-band front-end
//!
//! Every band the board serves has one row: the override applied when
//! receiving and the override applied on top of it when transmitting.
//! Bit positions come from [`crate::config::act`].
//!
//! ```text
//!  band     | receive        | transmit
//! ----------+----------------+------------------------------------
//!  GSM850   | -              | VC3 low, PA on
//!  GSM900   | -              | VC3 low, PA on
//!  DCS1800  | -              | VC1 low, VC2 high, TXEN on, PA on
//!  PCS1900  | VC2 low        | VC1 low, VC2 high, TXEN on, PA on
//! ```

use crate::config::act::{ASM_VC1, ASM_VC2, ASM_VC3, GSM_TXEN, PA_ENABLE};
use crate::hal::tsp::ActState;
use crate::types::Band;

/// Partial update of the actuator register
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Override {
    /// Bits driven low
    pub clear: u16,
    /// Bits driven high
    pub set: u16,
}

impl Override {
    /// Override touching nothing
    pub const NONE: Self = Self { clear: 0, set: 0 };

    /// Apply to a register value
    #[must_use]
    pub const fn apply(self, state: ActState) -> ActState {
        state.apply(self.clear, self.set)
    }
}

/// Wiring of one band
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BandWiring {
    /// Receive path
    pub rx: Override,
    /// Transmit path, applied after `rx`
    pub tx: Override,
}

/// Bits owned by mode selection; everything else is left alone
pub const OWNED: u16 =
    ASM_VC1.mask() | ASM_VC2.mask() | ASM_VC3.mask() | GSM_TXEN.mask() | PA_ENABLE.mask();

/// Idle state: PA off, TX path off, all antenna switches released
///
/// The VCn lines are low-active, so releasing them means driving them high.
pub const IDLE: Override = Override {
    clear: PA_ENABLE.mask() | GSM_TXEN.mask(),
    set: ASM_VC1.mask() | ASM_VC2.mask() | ASM_VC3.mask(),
};

const LOW_BAND_TX: Override = Override {
    clear: ASM_VC3.mask(),
    set: PA_ENABLE.mask(),
};

const HIGH_BAND_TX: Override = Override {
    clear: ASM_VC1.mask(),
    set: ASM_VC2.mask() | GSM_TXEN.mask() | PA_ENABLE.mask(),
};

const GSM850: BandWiring = BandWiring {
    rx: Override::NONE,
    tx: LOW_BAND_TX,
};

const GSM900: BandWiring = BandWiring {
    rx: Override::NONE,
    tx: LOW_BAND_TX,
};

const DCS1800: BandWiring = BandWiring {
    rx: Override::NONE,
    tx: HIGH_BAND_TX,
};

const PCS1900: BandWiring = BandWiring {
    rx: Override {
        clear: ASM_VC2.mask(),
        set: 0,
    },
    tx: HIGH_BAND_TX,
};

/// Wiring row for a band, None if the board has no path for it
#[must_use]
pub const fn wiring(band: Band) -> Option<BandWiring> {
    match band {
        Band::Gsm850 => Some(GSM850),
        Band::Gsm900 => Some(GSM900),
        Band::Dcs1800 => Some(DCS1800),
        Band::Pcs1900 => Some(PCS1900),
        Band::Gsm450 | Band::Gsm480 | Band::Gsm750 | Band::Gsm810 => None,
    }
}

/// Bands the board has a path for
#[must_use]
pub const fn is_supported(band: Band) -> bool {
    wiring(band).is_some()
}
