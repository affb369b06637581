//! Board configuration and hardware constants
//!
//! This module defines the constants of the Openmoko GTA0x / FreeCalypso
//! FCDEV3B RF tract. All actuator bit assignments, strobe lines, pin-mux
//! registers and calibration values are centralized here.

use crate::hal::tsp::{ActBit, StrobeConfig, StrobeLine};

/// System inherent gain of the RF tract in dB
///
/// Gain contributed by everything in front of the synthesizer's LNA,
/// excluding the LNA itself. Factory calibration of these boards puts
/// the equivalent combined figure at 199-202 half-dB units with 200 as
/// the median, which corresponds to 73 dB here.
pub const SYSTEM_INHERENT_GAIN_DB: u8 = 73;

/// Actuator bit assignments matching the schematic
pub mod act {
    //! TSPACT lines driving the RF front-end

    use crate::hal::tsp::ActBit;

    /// Reset of the Rita TRF6151 synthesizer
    pub const RITA_RESET: ActBit = ActBit::new(0);

    /// Antenna switch VC2 (low-active)
    pub const ASM_VC2: ActBit = ActBit::new(1);

    /// Antenna switch VC1 (low-active)
    pub const ASM_VC1: ActBit = ActBit::new(2);

    /// PA GSM/DCS path switch
    pub const GSM_TXEN: ActBit = ActBit::new(3);

    /// Antenna switch VC3 (low-active)
    pub const ASM_VC3: ActBit = ActBit::new(4);

    /// Power amplifier enable
    pub const PA_ENABLE: ActBit = ActBit::new(9);
}

/// Strobe line assignments
pub mod strobe {
    //! TSPEN lines of the serial strobe port

    use crate::hal::tsp::StrobeLine;

    /// Strobe for the Iota TWL3025 analog baseband
    pub const IOTA: StrobeLine = StrobeLine::new(0);

    /// Strobe for the Rita TRF6151 synthesizer
    pub const RITA: StrobeLine = StrobeLine::new(2);
}

/// Pin-mux control registers touched during initialization
pub mod pinmux {
    //! Calypso memory-mapped configuration registers

    /// ARM configuration register
    pub const ARM_CONF_REG: u32 = 0xFFFE_F006;

    /// Bit in `ARM_CONF_REG` selecting nRDYMEM instead of TSPACT4
    pub const ARM_CONF_NRDYMEM: u16 = 1 << 7;

    /// MCU software trace register
    pub const MCU_SW_TRACE: u32 = 0xFFFE_F00E;

    /// Bit in `MCU_SW_TRACE` selecting MAS(1) instead of TSPACT9
    pub const MCU_SW_TRACE_MAS1: u16 = 1 << 1;
}

/// Iota strobe setup: data clocked on the rising edge, level-sensitive
/// active-low enable
pub const IOTA_STROBE_CONFIG: StrobeConfig = StrobeConfig {
    line: strobe::IOTA,
    clock_rising: true,
    enable_active_high: false,
    enable_edge: false,
};

/// Actuator line reserved for the synthesizer's reset
pub const SYNTH_RESET: ActBit = act::RITA_RESET;

/// Strobe line reserved for the synthesizer's serial interface
pub const SYNTH_STROBE: StrobeLine = strobe::RITA;

/// Board build configuration
///
/// Resolved once at construction and kept for the lifetime of the
/// front-end. Selects between receive-only and transmit-capable
/// variants without recompiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// Transmit path may be enabled by mode selection
    pub tx_enabled: bool,
    /// Strobe setup for the analog baseband
    pub iota_strobe: StrobeConfig,
}

impl BoardConfig {
    /// Transmit-capable GTA0x board
    #[must_use]
    pub const fn transmit_capable() -> Self {
        Self {
            tx_enabled: true,
            iota_strobe: IOTA_STROBE_CONFIG,
        }
    }

    /// Receive-only build: transmit requests never drive the PA
    #[must_use]
    pub const fn receive_only() -> Self {
        Self {
            tx_enabled: false,
            iota_strobe: IOTA_STROBE_CONFIG,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::transmit_capable()
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for BoardConfig {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "BoardConfig {{ tx: {}, iota: {} }}",
            self.tx_enabled,
            self.iota_strobe
        );
    }
}
