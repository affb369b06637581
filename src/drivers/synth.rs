//! RF Synthesizer Interface
//!
//! The front-end hands gain and IQ orientation questions to the RF
//! transceiver/synthesizer driver (a TRF6151 "Rita" on this board). The
//! driver owns the gain tables and the per-channel IQ swap heuristics;
//! this trait is the narrow surface the front-end needs from it.

use crate::hal::tsp::{ActBit, StrobeLine};
use crate::types::{Arfcn, Dbm8, GainDb};

/// RF synthesizer driver
pub trait Synthesizer {
    /// Driver failure
    type Error;

    /// Bring the device up
    ///
    /// `strobe` is the serial strobe line wired to the device and `reset`
    /// the actuator line driving its reset input. Both are owned by the
    /// driver from here on.
    fn init(&mut self, strobe: StrobeLine, reset: ActBit) -> Result<(), Self::Error>;

    /// Currently configured receive gain
    fn gain(&self) -> GainDb;

    /// Configure the receive gain
    fn set_gain(&mut self, gain: GainDb) -> Result<(), Self::Error>;

    /// Pick and apply the gain that brings a signal expected at
    /// `expected_input` to `target_bb` at baseband
    fn compute_gain(&mut self, expected_input: Dbm8, target_bb: Dbm8) -> Result<(), Self::Error>;

    /// Whether I and Q come out swapped on this channel and direction
    fn iq_swapped(&self, arfcn: Arfcn, tx: bool) -> bool;
}

impl<S: Synthesizer + ?Sized> Synthesizer for &mut S {
    type Error = S::Error;

    fn init(&mut self, strobe: StrobeLine, reset: ActBit) -> Result<(), Self::Error> {
        (**self).init(strobe, reset)
    }

    fn gain(&self) -> GainDb {
        (**self).gain()
    }

    fn set_gain(&mut self, gain: GainDb) -> Result<(), Self::Error> {
        (**self).set_gain(gain)
    }

    fn compute_gain(&mut self, expected_input: Dbm8, target_bb: Dbm8) -> Result<(), Self::Error> {
        (**self).compute_gain(expected_input, target_bb)
    }

    fn iq_swapped(&self, arfcn: Arfcn, tx: bool) -> bool {
        (**self).iq_swapped(arfcn, tx)
    }
}
