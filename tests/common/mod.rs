//! Fake collaborators for host tests
//!
//! Record every actuator push, strobe setup, synthesizer call and
//! register write so tests can check them against the board wiring.

#![allow(dead_code)]

use std::collections::HashMap;

use gta0x_rffe::drivers::synth::Synthesizer;
use gta0x_rffe::hal::mmio::RegisterIo;
use gta0x_rffe::hal::tsp::{ActBit, ActState, ActuatorTransport, StrobeConfig, StrobeLine};
use gta0x_rffe::types::{Arfcn, Dbm8, GainDb};

/// Injected transport failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransportFault;

/// Injected synthesizer failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SynthFault;

/// Actuator transport that latches into memory
#[derive(Debug, Default)]
pub struct FakeTransport {
    pub latched: ActState,
    pub pushes: Vec<ActState>,
    pub strobes: Vec<StrobeConfig>,
    pub fail_update: bool,
    pub fail_strobe: bool,
}

impl FakeTransport {
    pub fn with_state(bits: u16) -> Self {
        Self {
            latched: ActState::from_bits(bits),
            ..Self::default()
        }
    }
}

impl ActuatorTransport for FakeTransport {
    type Error = TransportFault;

    fn act_state(&self) -> ActState {
        self.latched
    }

    fn act_update(&mut self, state: ActState) -> Result<(), TransportFault> {
        if self.fail_update {
            return Err(TransportFault);
        }
        self.latched = state;
        self.pushes.push(state);
        Ok(())
    }

    fn setup_strobe(&mut self, config: &StrobeConfig) -> Result<(), TransportFault> {
        if self.fail_strobe {
            return Err(TransportFault);
        }
        self.strobes.push(*config);
        Ok(())
    }
}

/// Call made on the fake synthesizer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SynthCall {
    Init(StrobeLine, ActBit),
    SetGain(GainDb),
    ComputeGain(Dbm8, Dbm8),
}

/// Synthesizer that records calls
///
/// IQ is reported swapped on uplink channels only.
#[derive(Debug, Default)]
pub struct FakeSynth {
    pub gain: GainDb,
    pub calls: Vec<SynthCall>,
    pub fail_init: bool,
    pub fail_gain: bool,
}

impl Synthesizer for FakeSynth {
    type Error = SynthFault;

    fn init(&mut self, strobe: StrobeLine, reset: ActBit) -> Result<(), SynthFault> {
        if self.fail_init {
            return Err(SynthFault);
        }
        self.calls.push(SynthCall::Init(strobe, reset));
        Ok(())
    }

    fn gain(&self) -> GainDb {
        self.gain
    }

    fn set_gain(&mut self, gain: GainDb) -> Result<(), SynthFault> {
        if self.fail_gain {
            return Err(SynthFault);
        }
        self.calls.push(SynthCall::SetGain(gain));
        self.gain = gain;
        Ok(())
    }

    fn compute_gain(&mut self, expected_input: Dbm8, target_bb: Dbm8) -> Result<(), SynthFault> {
        if self.fail_gain {
            return Err(SynthFault);
        }
        self.calls.push(SynthCall::ComputeGain(expected_input, target_bb));
        // Crude stand-in for the driver's table lookup
        let delta = (target_bb.raw() - expected_input.raw()) / 8;
        self.gain = GainDb::new(u8::try_from(delta.clamp(0, 255)).unwrap_or(0));
        Ok(())
    }

    fn iq_swapped(&self, arfcn: Arfcn, _tx: bool) -> bool {
        arfcn.is_uplink()
    }
}

/// Register file backed by a map; unset registers read as `0xFFFF`
#[derive(Debug, Default)]
pub struct FakeRegs {
    pub regs: HashMap<u32, u16>,
    pub writes: Vec<(u32, u16)>,
}

impl RegisterIo for FakeRegs {
    fn read16(&mut self, addr: u32) -> u16 {
        self.regs.get(&addr).copied().unwrap_or(0xFFFF)
    }

    fn write16(&mut self, addr: u32, value: u16) {
        self.regs.insert(addr, value);
        self.writes.push((addr, value));
    }
}
