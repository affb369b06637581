//! RF Front-end
//!
//! Owns the actuator register cache and the two collaborators the
//! front-end drives: the actuator transport and the synthesizer driver.
//! Every actuator change is a read-modify-write of the cache followed by
//! a push through the transport.

use crate::config::{self, pinmux, BoardConfig};
use crate::drivers::synth::Synthesizer;
use crate::hal::mmio::RegisterIo;
use crate::hal::tsp::{ActState, ActuatorTransport};
use crate::rffe::error::{Operation, RffeError, RffeResult};
use crate::rffe::mode::{self, RfMode};
use crate::rffe::ports;
use crate::types::{Arfcn, Band, Dbm8, GainDb, PortMask};

/// Result of a front-end operation over transport `T` and synthesizer `S`
pub type FrontendResult<X, T, S> =
    RffeResult<X, <T as ActuatorTransport>::Error, <S as Synthesizer>::Error>;

/// RF front-end of the board
pub struct Frontend<T, S> {
    transport: T,
    synth: S,
    config: BoardConfig,
    /// Last value pushed to the actuator lines
    act: ActState,
    /// Last mode applied
    mode: Option<RfMode>,
    initialized: bool,
}

impl<T, S> Frontend<T, S>
where
    T: ActuatorTransport,
    S: Synthesizer,
{
    /// Create an uninitialized front-end
    #[must_use]
    pub const fn new(transport: T, synth: S, config: BoardConfig) -> Self {
        Self {
            transport,
            synth,
            config,
            act: ActState::ZERO,
            mode: None,
            initialized: false,
        }
    }

    /// One-time hardware setup
    ///
    /// Hands TSPACT4 and TSPACT9 to the I/O function, configures the
    /// analog baseband strobe, brings up the synthesizer on its own strobe
    /// and reset lines, and loads the actuator cache from the transport.
    /// Must succeed before any other hardware operation.
    ///
    /// # Errors
    ///
    /// Propagates the first transport or synthesizer failure unchanged;
    /// the front-end then stays uninitialized.
    pub fn init<R: RegisterIo>(&mut self, regs: &mut R) -> FrontendResult<(), T, S> {
        regs.modify16(pinmux::ARM_CONF_REG, |v| v & !pinmux::ARM_CONF_NRDYMEM);
        regs.modify16(pinmux::MCU_SW_TRACE, |v| v & !pinmux::MCU_SW_TRACE_MAS1);

        self.transport
            .setup_strobe(&self.config.iota_strobe)
            .map_err(RffeError::Transport)?;

        self.synth
            .init(config::SYNTH_STROBE, config::SYNTH_RESET)
            .map_err(RffeError::Synth)?;

        self.act = self.transport.act_state();
        self.mode = None;
        self.initialized = true;

        info!("rffe: initialized, {}", self.act);
        Ok(())
    }

    /// Check if `init` has completed
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn ensure_initialized(&self) -> FrontendResult<(), T, S> {
        if self.initialized {
            Ok(())
        } else {
            Err(RffeError::NotInitialized)
        }
    }

    /// Switch the front-end to a band, receiving or transmitting
    ///
    /// # Errors
    ///
    /// [`RffeError::UnsupportedBand`] leaves the cache and the hardware
    /// untouched. A transport failure leaves the cache at the last value
    /// that was pushed successfully.
    pub fn set_mode(&mut self, band: Band, tx: bool) -> FrontendResult<(), T, S> {
        self.apply(RfMode { band, tx })
    }

    /// Switch the front-end to the band of a channel
    ///
    /// # Errors
    ///
    /// [`RffeError::UnknownChannel`] if the channel number belongs to no
    /// band, otherwise as [`Frontend::set_mode`].
    pub fn set_mode_for_arfcn(&mut self, arfcn: Arfcn, tx: bool) -> FrontendResult<(), T, S> {
        let band = arfcn.band().ok_or(RffeError::UnknownChannel(arfcn))?;
        self.set_mode(band, tx)
    }

    /// Apply a mode
    ///
    /// # Errors
    ///
    /// As [`Frontend::set_mode`].
    pub fn apply(&mut self, mode: RfMode) -> FrontendResult<(), T, S> {
        self.ensure_initialized()?;

        let next = match mode::select(self.act, mode, self.config.tx_enabled) {
            Ok(next) => next,
            Err(e) => {
                warn!("rffe: {}", e);
                return Err(e.into());
            }
        };

        self.transport
            .act_update(next)
            .map_err(RffeError::Transport)?;

        trace!("rffe: {} -> {}", mode, next);
        self.act = next;
        self.mode = Some(mode);
        Ok(())
    }

    /// Cached actuator register
    #[must_use]
    pub const fn act_state(&self) -> ActState {
        self.act
    }

    /// Last mode applied since `init`
    #[must_use]
    pub const fn mode(&self) -> Option<RfMode> {
        self.mode
    }

    /// Board configuration
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Receive port mask
    #[must_use]
    pub const fn rx_ports(&self) -> PortMask {
        ports::rx_ports()
    }

    /// Transmit port mask
    #[must_use]
    pub const fn tx_ports(&self) -> PortMask {
        ports::tx_ports()
    }

    /// Whether I and Q are swapped on a channel and direction
    ///
    /// # Errors
    ///
    /// [`RffeError::NotInitialized`] before `init`.
    pub fn iq_swapped(&self, arfcn: Arfcn, tx: bool) -> FrontendResult<bool, T, S> {
        self.ensure_initialized()?;
        Ok(self.synth.iq_swapped(arfcn, tx))
    }

    /// Current receive gain
    ///
    /// # Errors
    ///
    /// [`RffeError::NotInitialized`] before `init`.
    pub fn gain(&self) -> FrontendResult<GainDb, T, S> {
        self.ensure_initialized()?;
        Ok(self.synth.gain())
    }

    /// Configure the receive gain
    ///
    /// # Errors
    ///
    /// [`RffeError::NotInitialized`] before `init`, or the synthesizer's
    /// own failure.
    pub fn set_gain(&mut self, gain: GainDb) -> FrontendResult<(), T, S> {
        self.ensure_initialized()?;
        debug!("rffe: set gain {}", gain);
        self.synth.set_gain(gain).map_err(RffeError::Synth)
    }

    /// Configure the gain that brings `expected_input` to `target_bb`
    ///
    /// # Errors
    ///
    /// [`RffeError::NotInitialized`] before `init`, or the synthesizer's
    /// own failure.
    pub fn compute_gain(&mut self, expected_input: Dbm8, target_bb: Dbm8) -> FrontendResult<(), T, S> {
        self.ensure_initialized()?;
        debug!("rffe: compute gain {} -> {}", expected_input, target_bb);
        self.synth
            .compute_gain(expected_input, target_bb)
            .map_err(RffeError::Synth)
    }

    /// Gain of the RF tract in front of the synthesizer's LNA
    #[must_use]
    pub const fn system_inherent_gain(&self) -> GainDb {
        GainDb::new(config::SYSTEM_INHERENT_GAIN_DB)
    }

    /// Receive window gain control
    ///
    /// # Errors
    ///
    /// Always [`RffeError::Unsupported`]: this board has no receive
    /// window control, and callers must not assume windowing happened.
    pub fn rx_window_control(&mut self, expected_input: Dbm8, target_bb: Dbm8) -> FrontendResult<(), T, S> {
        let _ = (expected_input, target_bb);
        Err(RffeError::Unsupported(Operation::RxWindowControl))
    }

    /// Tear down and hand back the collaborators
    pub fn release(self) -> (T, S) {
        (self.transport, self.synth)
    }
}
