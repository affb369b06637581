//! Front-end error types

use core::fmt;

use crate::types::{Arfcn, Band};

/// Operations this board does not implement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Receive window gain control
    RxWindowControl,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RxWindowControl => write!(f, "receive window control"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Operation {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::RxWindowControl => defmt::write!(f, "RxWindowControl"),
        }
    }
}

/// Band the board has no antenna path for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnsupportedBand(pub Band);

impl fmt::Display for UnsupportedBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "band {} is not wired on this board", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for UnsupportedBand {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "unsupported band {}", self.0);
    }
}

/// Error returned by front-end operations
///
/// `TE` is the actuator transport's error, `SE` the synthesizer's.
/// Collaborator errors are passed through unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RffeError<TE, SE> {
    /// Mode selection for a band without an antenna path
    UnsupportedBand(Band),
    /// Channel number outside every band
    UnknownChannel(Arfcn),
    /// Hardware operation before a successful `init`
    NotInitialized,
    /// Operation not implemented for this board
    Unsupported(Operation),
    /// Actuator transport failure
    Transport(TE),
    /// Synthesizer driver failure
    Synth(SE),
}

/// Front-end operation result
pub type RffeResult<T, TE, SE> = Result<T, RffeError<TE, SE>>;

impl<TE, SE> From<UnsupportedBand> for RffeError<TE, SE> {
    fn from(e: UnsupportedBand) -> Self {
        Self::UnsupportedBand(e.0)
    }
}

impl<TE: fmt::Debug, SE: fmt::Debug> fmt::Display for RffeError<TE, SE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedBand(band) => write!(f, "band {band} is not wired on this board"),
            Self::UnknownChannel(arfcn) => write!(f, "{arfcn:?} belongs to no band"),
            Self::NotInitialized => write!(f, "front-end used before initialization"),
            Self::Unsupported(op) => write!(f, "{op} is not implemented for this board"),
            Self::Transport(e) => write!(f, "actuator transport error: {e:?}"),
            Self::Synth(e) => write!(f, "synthesizer error: {e:?}"),
        }
    }
}

#[cfg(feature = "embedded")]
impl<TE: fmt::Debug, SE: fmt::Debug> defmt::Format for RffeError<TE, SE> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::UnsupportedBand(band) => defmt::write!(f, "unsupported band {}", band),
            Self::UnknownChannel(arfcn) => defmt::write!(f, "unknown channel {}", arfcn),
            Self::NotInitialized => defmt::write!(f, "not initialized"),
            Self::Unsupported(op) => defmt::write!(f, "unsupported operation {}", op),
            Self::Transport(e) => {
                defmt::write!(f, "transport error: {:?}", defmt::Debug2Format(e));
            }
            Self::Synth(e) => defmt::write!(f, "synth error: {:?}", defmt::Debug2Format(e)),
        }
    }
}
