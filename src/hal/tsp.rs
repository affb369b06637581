//! Serial Strobe Port Abstractions
//!
//! The actuator register (TSPACT) is a 16-bit vector shifted out to
//! external latches by the serial strobe port. This module names its
//! bits and strobe lines and defines the transport the front-end pushes
//! through. The wire protocol itself belongs to the transport driver.

use core::fmt;

/// A single line of the actuator register
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActBit(u8);

impl ActBit {
    /// Number of lines in the actuator register
    pub const COUNT: u8 = 16;

    /// Create from a bit position
    ///
    /// Positions wrap into the 16-bit register.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index % Self::COUNT)
    }

    /// Bit position
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Single-bit mask
    #[must_use]
    pub const fn mask(self) -> u16 {
        1 << self.0
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ActBit {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "TSPACT({})", self.0);
    }
}

/// Value of the actuator register
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ActState(u16);

impl ActState {
    /// Every line low
    pub const ZERO: Self = Self(0);

    /// Create from raw register bits
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Raw register bits
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Check if a line is high
    #[must_use]
    pub const fn is_set(self, bit: ActBit) -> bool {
        self.0 & bit.mask() != 0
    }

    /// Drive a line high
    #[must_use]
    pub const fn set(self, bit: ActBit) -> Self {
        Self(self.0 | bit.mask())
    }

    /// Drive a line low
    #[must_use]
    pub const fn clear(self, bit: ActBit) -> Self {
        Self(self.0 & !bit.mask())
    }

    /// Clear then set whole masks; bits in neither mask are untouched
    #[must_use]
    pub const fn apply(self, clear: u16, set: u16) -> Self {
        Self((self.0 & !clear) | set)
    }
}

impl fmt::Debug for ActState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActState({:#06x})", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ActState {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "TSPACT={=u16:#x}", self.0);
    }
}

/// A strobe (device enable) line of the serial port
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StrobeLine(u8);

impl StrobeLine {
    /// Create from a line index
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Line index
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for StrobeLine {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "TSPEN({})", self.0);
    }
}

/// Electrical setup of one strobe line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrobeConfig {
    /// Line being configured
    pub line: StrobeLine,
    /// Device latches data on the rising clock edge
    pub clock_rising: bool,
    /// Enable is active high
    pub enable_active_high: bool,
    /// Enable is edge rather than level sensitive
    pub enable_edge: bool,
}

#[cfg(feature = "embedded")]
impl defmt::Format for StrobeConfig {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "{} clk_rising={} en_high={} en_edge={}",
            self.line,
            self.clock_rising,
            self.enable_active_high,
            self.enable_edge
        );
    }
}

/// Transport carrying the actuator register to the board
///
/// Implemented by the serial strobe port driver.
pub trait ActuatorTransport {
    /// Transport failure
    type Error;

    /// Value last latched on the actuator lines
    fn act_state(&self) -> ActState;

    /// Latch a new value on the actuator lines
    fn act_update(&mut self, state: ActState) -> Result<(), Self::Error>;

    /// Configure the electrical behaviour of a strobe line
    fn setup_strobe(&mut self, config: &StrobeConfig) -> Result<(), Self::Error>;
}

impl<T: ActuatorTransport + ?Sized> ActuatorTransport for &mut T {
    type Error = T::Error;

    fn act_state(&self) -> ActState {
        (**self).act_state()
    }

    fn act_update(&mut self, state: ActState) -> Result<(), Self::Error> {
        (**self).act_update(state)
    }

    fn setup_strobe(&mut self, config: &StrobeConfig) -> Result<(), Self::Error> {
        (**self).setup_strobe(config)
    }
}
