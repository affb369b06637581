//! Shared types used across the RF front-end
//!
//! This module defines domain-specific types that enforce invariants
//! at compile time and provide type safety throughout the codebase.

use core::fmt;

/// GSM frequency band
///
/// The full set of bands the layer-1 stack can name. Only some of them
/// are wired on a given board; the rest are still representable so that
/// mode selection can reject them explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Band {
    /// GSM 450
    Gsm450,
    /// GSM 480
    Gsm480,
    /// GSM 750
    Gsm750,
    /// GSM 810
    Gsm810,
    /// GSM 850
    Gsm850,
    /// GSM 900 (P-GSM, E-GSM and R-GSM)
    Gsm900,
    /// DCS 1800
    Dcs1800,
    /// PCS 1900
    Pcs1900,
}

impl Band {
    /// All bands, in ascending frequency order
    pub const ALL: [Self; 8] = [
        Self::Gsm450,
        Self::Gsm480,
        Self::Gsm750,
        Self::Gsm810,
        Self::Gsm850,
        Self::Gsm900,
        Self::Dcs1800,
        Self::Pcs1900,
    ];

    /// Nominal band frequency in MHz, as used in the band's name
    #[must_use]
    pub const fn nominal_mhz(self) -> u16 {
        match self {
            Self::Gsm450 => 450,
            Self::Gsm480 => 480,
            Self::Gsm750 => 750,
            Self::Gsm810 => 810,
            Self::Gsm850 => 850,
            Self::Gsm900 => 900,
            Self::Dcs1800 => 1800,
            Self::Pcs1900 => 1900,
        }
    }

    /// Look up a band by its nominal frequency in MHz
    #[must_use]
    pub const fn from_nominal_mhz(mhz: u16) -> Option<Self> {
        match mhz {
            450 => Some(Self::Gsm450),
            480 => Some(Self::Gsm480),
            750 => Some(Self::Gsm750),
            810 => Some(Self::Gsm810),
            850 => Some(Self::Gsm850),
            900 => Some(Self::Gsm900),
            1800 => Some(Self::Dcs1800),
            1900 => Some(Self::Pcs1900),
            _ => None,
        }
    }

    /// Check if the band belongs to the high (1 GHz and above) group
    #[must_use]
    pub const fn is_high_band(self) -> bool {
        matches!(self, Self::Dcs1800 | Self::Pcs1900)
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dcs1800 => write!(f, "DCS1800"),
            Self::Pcs1900 => write!(f, "PCS1900"),
            other => write!(f, "GSM{}", other.nominal_mhz()),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Band {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Dcs1800 => defmt::write!(f, "DCS1800"),
            Self::Pcs1900 => defmt::write!(f, "PCS1900"),
            other => defmt::write!(f, "GSM{}", other.nominal_mhz()),
        }
    }
}

/// Absolute radio frequency channel number with band and direction flags
///
/// Bits 0-9 hold the channel number. Bit 15 marks a PCS 1900 channel
/// (PCS and DCS share channel numbers 512-810), bit 14 marks the uplink.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arfcn(u16);

impl Arfcn {
    /// PCS 1900 flag
    pub const PCS: u16 = 0x8000;

    /// Uplink flag
    pub const UPLINK: u16 = 0x4000;

    /// Mask of the channel number bits
    pub const NUMBER_MASK: u16 = 0x03FF;

    /// Highest channel number
    pub const MAX_NUMBER: u16 = 1023;

    /// Create a downlink channel, returns None if the number is out of range
    #[must_use]
    pub const fn new(number: u16) -> Option<Self> {
        if number <= Self::MAX_NUMBER {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Create a PCS 1900 downlink channel
    #[must_use]
    pub const fn pcs(number: u16) -> Option<Self> {
        match Self::new(number) {
            Some(arfcn) => Some(Self(arfcn.0 | Self::PCS)),
            None => None,
        }
    }

    /// Wrap a raw value as carried by the layer-1 stack (number plus flags)
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Raw value including flags
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Channel number without flags
    #[must_use]
    pub const fn number(self) -> u16 {
        self.0 & Self::NUMBER_MASK
    }

    /// Check the PCS flag
    #[must_use]
    pub const fn is_pcs(self) -> bool {
        self.0 & Self::PCS != 0
    }

    /// Check the uplink flag
    #[must_use]
    pub const fn is_uplink(self) -> bool {
        self.0 & Self::UPLINK != 0
    }

    /// Same channel with the uplink flag set
    #[must_use]
    pub const fn uplink(self) -> Self {
        Self(self.0 | Self::UPLINK)
    }

    /// Same channel with the uplink flag cleared
    #[must_use]
    pub const fn downlink(self) -> Self {
        Self(self.0 & !Self::UPLINK)
    }

    /// Band this channel belongs to, None for unallocated numbers
    #[must_use]
    pub const fn band(self) -> Option<Band> {
        let n = self.number();

        if self.is_pcs() {
            return if n >= 512 && n <= 810 {
                Some(Band::Pcs1900)
            } else {
                None
            };
        }

        match n {
            0..=124 | 955..=1023 => Some(Band::Gsm900),
            128..=251 => Some(Band::Gsm850),
            259..=293 => Some(Band::Gsm450),
            306..=340 => Some(Band::Gsm480),
            350..=425 => Some(Band::Gsm810),
            438..=511 => Some(Band::Gsm750),
            512..=885 => Some(Band::Dcs1800),
            _ => None,
        }
    }
}

impl fmt::Debug for Arfcn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Arfcn({}{}{})",
            self.number(),
            if self.is_pcs() { " PCS" } else { "" },
            if self.is_uplink() { " UL" } else { "" }
        )
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Arfcn {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "ARFCN {}{=str}{=str}",
            self.number(),
            if self.is_pcs() { " PCS" } else { "" },
            if self.is_uplink() { " UL" } else { "" }
        );
    }
}

/// Gain in integral dB
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GainDb(u8);

impl GainDb {
    /// Create from dB
    #[must_use]
    pub const fn new(db: u8) -> Self {
        Self(db)
    }

    /// Get the gain in dB
    #[must_use]
    pub const fn as_db(self) -> u8 {
        self.0
    }
}

impl fmt::Debug for GainDb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GainDb({} dB)", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for GainDb {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} dB", self.0);
    }
}

/// Signal level in eighths of a dBm
///
/// The resolution the layer-1 stack uses for measured and expected
/// input levels and for the baseband target level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Dbm8(i16);

impl Dbm8 {
    /// Create from a raw value in 1/8 dBm
    #[must_use]
    pub const fn from_raw(raw: i16) -> Self {
        Self(raw)
    }

    /// Create from whole dBm, saturating at the representable range
    #[must_use]
    pub const fn from_dbm(dbm: i16) -> Self {
        Self(dbm.saturating_mul(8))
    }

    /// Raw value in 1/8 dBm
    #[must_use]
    pub const fn raw(self) -> i16 {
        self.0
    }

    /// Whole dBm, rounded toward negative infinity
    #[must_use]
    pub const fn as_dbm(self) -> i16 {
        self.0 >> 3
    }
}

impl fmt::Debug for Dbm8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dbm8({}/8 dBm)", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Dbm8 {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}/8 dBm", self.0);
    }
}

/// Logical RF port of the front-end
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Port {
    /// Combined 850/900 port
    Lo,
    /// Combined 1800/1900 port
    Hi,
    /// Dedicated GSM 850 port
    Gsm850,
    /// Dedicated GSM 900 port
    Gsm900,
    /// Dedicated DCS 1800 port
    Dcs1800,
    /// Dedicated PCS 1900 port
    Pcs1900,
}

impl Port {
    /// All ports, in bit order
    pub const ALL: [Self; 6] = [
        Self::Lo,
        Self::Hi,
        Self::Gsm850,
        Self::Gsm900,
        Self::Dcs1800,
        Self::Pcs1900,
    ];

    /// Bit position of the port in a [`PortMask`]
    #[must_use]
    pub const fn bit(self) -> u32 {
        match self {
            Self::Lo => 0,
            Self::Hi => 1,
            Self::Gsm850 => 2,
            Self::Gsm900 => 3,
            Self::Dcs1800 => 4,
            Self::Pcs1900 => 5,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Port {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Lo => defmt::write!(f, "LO"),
            Self::Hi => defmt::write!(f, "HI"),
            Self::Gsm850 => defmt::write!(f, "GSM850"),
            Self::Gsm900 => defmt::write!(f, "GSM900"),
            Self::Dcs1800 => defmt::write!(f, "DCS1800"),
            Self::Pcs1900 => defmt::write!(f, "PCS1900"),
        }
    }
}

/// Set of logical ports
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PortMask(u32);

impl PortMask {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Build a mask from a list of ports
    #[must_use]
    pub const fn from_ports(ports: &[Port]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < ports.len() {
            bits |= 1 << ports[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Raw bitmask, one bit per [`Port::bit`]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Check if the port is in the set
    #[must_use]
    pub const fn contains(self, port: Port) -> bool {
        self.0 & (1 << port.bit()) != 0
    }

    /// Number of ports in the set
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Check if the set is empty
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Ports in the set, in bit order
    #[must_use]
    pub fn ports(self) -> heapless::Vec<Port, 6> {
        Port::ALL
            .iter()
            .copied()
            .filter(|&port| self.contains(port))
            .collect()
    }
}

impl fmt::Debug for PortMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ports()).finish()
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for PortMask {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=[?]}", self.ports().as_slice());
    }
}
