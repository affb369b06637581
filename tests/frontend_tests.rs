//! Front-end Tests
//!
//! Drives the front-end through fake collaborators and checks the
//! initialization sequence, actuator pushes, gain and IQ delegation,
//! and error propagation.
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test frontend_tests

mod common;

use common::{FakeRegs, FakeSynth, FakeTransport, SynthCall, SynthFault, TransportFault};
use gta0x_rffe::config::{self, act, pinmux, strobe, BoardConfig};
use gta0x_rffe::hal::tsp::ActState;
use gta0x_rffe::rffe::wiring::OWNED;
use gta0x_rffe::rffe::{Frontend, Operation, RfMode, RffeError, SharedFrontend};
use gta0x_rffe::types::{Arfcn, Band, Dbm8, GainDb, Port};

type TestFrontend = Frontend<FakeTransport, FakeSynth>;

fn frontend_with(transport: FakeTransport, config: BoardConfig) -> TestFrontend {
    let mut fe = Frontend::new(transport, FakeSynth::default(), config);
    fe.init(&mut FakeRegs::default()).unwrap();
    fe
}

fn frontend() -> TestFrontend {
    frontend_with(FakeTransport::default(), BoardConfig::default())
}

// =============================================================================
// Initialization Tests
// =============================================================================

#[test]
fn init_releases_tspact_pins_from_alternate_functions() {
    let mut regs = FakeRegs::default();
    let mut fe = Frontend::new(FakeTransport::default(), FakeSynth::default(), BoardConfig::default());
    fe.init(&mut regs).unwrap();

    assert_eq!(regs.regs[&pinmux::ARM_CONF_REG], 0xFFFF & !(1 << 7));
    assert_eq!(regs.regs[&pinmux::MCU_SW_TRACE], 0xFFFF & !(1 << 1));
    assert_eq!(regs.writes.len(), 2);
}

#[test]
fn init_preserves_other_pinmux_bits() {
    let mut regs = FakeRegs::default();
    regs.regs.insert(pinmux::ARM_CONF_REG, 0x0081);
    regs.regs.insert(pinmux::MCU_SW_TRACE, 0x0000);

    let mut fe = Frontend::new(FakeTransport::default(), FakeSynth::default(), BoardConfig::default());
    fe.init(&mut regs).unwrap();

    assert_eq!(regs.regs[&pinmux::ARM_CONF_REG], 0x0001);
    assert_eq!(regs.regs[&pinmux::MCU_SW_TRACE], 0x0000);
}

#[test]
fn init_configures_iota_strobe_and_synth() {
    let fe = frontend();
    assert!(fe.is_initialized());

    let (transport, synth) = fe.release();
    assert_eq!(transport.strobes, vec![config::IOTA_STROBE_CONFIG]);
    assert_eq!(transport.strobes[0].line, strobe::IOTA);
    assert_eq!(synth.calls, vec![SynthCall::Init(strobe::RITA, act::RITA_RESET)]);
    // Initialization itself never pushes the actuator register
    assert!(transport.pushes.is_empty());
}

#[test]
fn init_loads_cache_from_transport() {
    let fe = frontend_with(FakeTransport::with_state(0x8001), BoardConfig::default());
    assert_eq!(fe.act_state(), ActState::from_bits(0x8001));
    assert_eq!(fe.mode(), None);
}

#[test]
fn init_propagates_strobe_failure() {
    let transport = FakeTransport {
        fail_strobe: true,
        ..FakeTransport::default()
    };
    let mut fe = Frontend::new(transport, FakeSynth::default(), BoardConfig::default());

    assert_eq!(fe.init(&mut FakeRegs::default()), Err(RffeError::Transport(TransportFault)));
    assert!(!fe.is_initialized());

    // Synthesizer never reached
    let (_, synth) = fe.release();
    assert!(synth.calls.is_empty());
}

#[test]
fn init_propagates_synth_failure() {
    let synth = FakeSynth {
        fail_init: true,
        ..FakeSynth::default()
    };
    let mut fe = Frontend::new(FakeTransport::default(), synth, BoardConfig::default());

    assert_eq!(fe.init(&mut FakeRegs::default()), Err(RffeError::Synth(SynthFault)));
    assert!(!fe.is_initialized());
    assert_eq!(fe.set_mode(Band::Gsm900, false), Err(RffeError::NotInitialized));
}

// =============================================================================
// Uninitialized Use Tests
// =============================================================================

#[test]
fn hardware_operations_require_init() {
    let mut fe = Frontend::new(FakeTransport::default(), FakeSynth::default(), BoardConfig::default());

    assert_eq!(fe.set_mode(Band::Gsm900, false), Err(RffeError::NotInitialized));
    assert_eq!(fe.gain(), Err(RffeError::NotInitialized));
    assert_eq!(fe.set_gain(GainDb::new(40)), Err(RffeError::NotInitialized));
    assert_eq!(
        fe.compute_gain(Dbm8::from_dbm(-80), Dbm8::from_dbm(-20)),
        Err(RffeError::NotInitialized)
    );
    assert_eq!(
        fe.iq_swapped(Arfcn::new(1).unwrap(), false),
        Err(RffeError::NotInitialized)
    );

    let (transport, synth) = fe.release();
    assert!(transport.pushes.is_empty());
    assert!(synth.calls.is_empty());
}

#[test]
fn static_declarations_available_before_init() {
    let fe = Frontend::new(FakeTransport::default(), FakeSynth::default(), BoardConfig::default());
    assert_eq!(fe.system_inherent_gain(), GainDb::new(73));
    assert!(fe.rx_ports().contains(Port::Lo));
    assert!(fe.tx_ports().contains(Port::Hi));
}

// =============================================================================
// Mode Selection Tests
// =============================================================================

#[test]
fn set_mode_pushes_and_caches() {
    let mut fe = frontend();

    fe.set_mode(Band::Pcs1900, false).unwrap();
    assert_eq!(fe.act_state().bits(), 0x0014);
    assert_eq!(fe.mode(), Some(RfMode::rx(Band::Pcs1900)));

    fe.set_mode(Band::Dcs1800, true).unwrap();
    assert_eq!(fe.act_state().bits(), 0x021A);
    assert_eq!(fe.mode(), Some(RfMode::tx(Band::Dcs1800)));

    let (transport, _) = fe.release();
    assert_eq!(
        transport.pushes,
        vec![ActState::from_bits(0x0014), ActState::from_bits(0x021A)]
    );
    assert_eq!(transport.latched.bits(), 0x021A);
}

#[test]
fn set_mode_pcs_rx_from_all_ones() {
    let mut fe = frontend_with(FakeTransport::with_state(0xFFFF), BoardConfig::default());
    fe.set_mode(Band::Pcs1900, false).unwrap();

    let state = fe.act_state();
    assert!(!state.is_set(act::PA_ENABLE));
    assert!(!state.is_set(act::GSM_TXEN));
    assert!(!state.is_set(act::ASM_VC2));
    assert!(state.is_set(act::ASM_VC1));
    assert!(state.is_set(act::ASM_VC3));
    assert_eq!(state.bits() | OWNED, 0xFFFF);
}

#[test]
fn set_mode_dcs_tx() {
    let mut fe = frontend();
    fe.set_mode(Band::Dcs1800, true).unwrap();

    let state = fe.act_state();
    assert!(state.is_set(act::PA_ENABLE));
    assert!(state.is_set(act::GSM_TXEN));
    assert!(!state.is_set(act::ASM_VC1));
    assert!(state.is_set(act::ASM_VC2));
    assert!(state.is_set(act::ASM_VC3));
}

#[test]
fn set_mode_twice_same_result() {
    let mut fe = frontend_with(FakeTransport::with_state(0x3C3C), BoardConfig::default());

    fe.set_mode(Band::Gsm850, true).unwrap();
    let once = fe.act_state();
    fe.set_mode(Band::Gsm850, true).unwrap();
    assert_eq!(fe.act_state(), once);

    let (transport, _) = fe.release();
    assert_eq!(transport.pushes, vec![once, once]);
}

#[test]
fn set_mode_preserves_bits_owned_elsewhere() {
    // Reset line and unrelated upper bits latched by other subsystems
    let start = 0xC001;
    let mut fe = frontend_with(FakeTransport::with_state(start), BoardConfig::default());

    for band in [Band::Gsm850, Band::Gsm900, Band::Dcs1800, Band::Pcs1900] {
        for tx in [false, true] {
            fe.set_mode(band, tx).unwrap();
            assert_eq!(fe.act_state().bits() & !OWNED, start & !OWNED, "{band} tx={tx}");
        }
    }
}

#[test]
fn receive_only_board_never_enables_pa() {
    let mut fe = frontend_with(FakeTransport::default(), BoardConfig::receive_only());

    for band in [Band::Gsm850, Band::Gsm900, Band::Dcs1800, Band::Pcs1900] {
        fe.set_mode(band, true).unwrap();
        assert!(!fe.act_state().is_set(act::PA_ENABLE), "{band}");
        assert!(!fe.act_state().is_set(act::GSM_TXEN), "{band}");
    }
}

#[test]
fn unsupported_band_leaves_hardware_untouched() {
    let mut fe = frontend();
    fe.set_mode(Band::Gsm900, false).unwrap();
    let before = fe.act_state();

    assert_eq!(
        fe.set_mode(Band::Gsm450, true),
        Err(RffeError::UnsupportedBand(Band::Gsm450))
    );
    assert_eq!(fe.act_state(), before);
    assert_eq!(fe.mode(), Some(RfMode::rx(Band::Gsm900)));

    let (transport, _) = fe.release();
    assert_eq!(transport.pushes.len(), 1);
}

#[test]
fn transport_failure_keeps_last_pushed_state() {
    let mut fe = frontend();
    fe.set_mode(Band::Gsm900, false).unwrap();
    let before = fe.act_state();

    let (mut transport, synth) = fe.release();
    transport.fail_update = true;
    let mut fe = Frontend::new(transport, synth, BoardConfig::default());
    fe.init(&mut FakeRegs::default()).unwrap();

    assert_eq!(
        fe.set_mode(Band::Dcs1800, true),
        Err(RffeError::Transport(TransportFault))
    );
    assert_eq!(fe.act_state(), before);
    assert_eq!(fe.mode(), None);
}

#[test]
fn set_mode_for_arfcn_picks_band() {
    let mut fe = frontend();

    fe.set_mode_for_arfcn(Arfcn::pcs(661).unwrap(), false).unwrap();
    assert_eq!(fe.mode(), Some(RfMode::rx(Band::Pcs1900)));

    fe.set_mode_for_arfcn(Arfcn::new(661).unwrap(), true).unwrap();
    assert_eq!(fe.mode(), Some(RfMode::tx(Band::Dcs1800)));

    fe.set_mode_for_arfcn(Arfcn::new(62).unwrap().uplink(), true).unwrap();
    assert_eq!(fe.mode(), Some(RfMode::tx(Band::Gsm900)));
}

#[test]
fn set_mode_for_arfcn_rejects_gaps_and_unwired_bands() {
    let mut fe = frontend();

    let gap = Arfcn::new(126).unwrap();
    assert_eq!(fe.set_mode_for_arfcn(gap, false), Err(RffeError::UnknownChannel(gap)));

    let gsm450 = Arfcn::new(270).unwrap();
    assert_eq!(
        fe.set_mode_for_arfcn(gsm450, false),
        Err(RffeError::UnsupportedBand(Band::Gsm450))
    );
}

#[test]
fn set_mode_through_wrapped_borrow() {
    let mut transport = FakeTransport::default();
    let mut synth = FakeSynth::default();
    {
        let mut fe = Frontend::new(&mut transport, &mut synth, BoardConfig::default());
        fe.init(&mut FakeRegs::default()).unwrap();
        fe.set_mode(Band::Gsm900, true).unwrap();
    }
    assert_eq!(transport.latched.bits(), 0x0206);
    assert_eq!(synth.calls.len(), 1);
}

// =============================================================================
// Gain Tests
// =============================================================================

#[test]
fn gain_delegates_to_synth() {
    let mut fe = frontend();

    fe.set_gain(GainDb::new(40)).unwrap();
    assert_eq!(fe.gain(), Ok(GainDb::new(40)));

    let (_, synth) = fe.release();
    assert_eq!(synth.calls[1], SynthCall::SetGain(GainDb::new(40)));
}

#[test]
fn compute_gain_forwards_levels() {
    let mut fe = frontend();
    let expected = Dbm8::from_dbm(-90);
    let target = Dbm8::from_dbm(-30);

    fe.compute_gain(expected, target).unwrap();
    assert_eq!(fe.gain(), Ok(GainDb::new(60)));

    let (_, synth) = fe.release();
    assert_eq!(synth.calls[1], SynthCall::ComputeGain(expected, target));
}

#[test]
fn gain_failure_propagates() {
    let synth = FakeSynth {
        fail_gain: true,
        ..FakeSynth::default()
    };
    let mut fe = Frontend::new(FakeTransport::default(), synth, BoardConfig::default());
    fe.init(&mut FakeRegs::default()).unwrap();

    assert_eq!(fe.set_gain(GainDb::new(10)), Err(RffeError::Synth(SynthFault)));
    assert_eq!(
        fe.compute_gain(Dbm8::from_dbm(-60), Dbm8::from_dbm(-20)),
        Err(RffeError::Synth(SynthFault))
    );
}

#[test]
fn system_inherent_gain_is_constant() {
    let mut fe = frontend();
    assert_eq!(fe.system_inherent_gain().as_db(), config::SYSTEM_INHERENT_GAIN_DB);

    fe.set_gain(GainDb::new(12)).unwrap();
    fe.compute_gain(Dbm8::from_dbm(-100), Dbm8::from_dbm(-20)).unwrap();
    fe.set_mode(Band::Dcs1800, true).unwrap();

    assert_eq!(fe.system_inherent_gain(), GainDb::new(73));
}

#[test]
fn rx_window_control_is_unsupported() {
    let mut fe = frontend();
    assert_eq!(
        fe.rx_window_control(Dbm8::from_dbm(-80), Dbm8::from_dbm(-20)),
        Err(RffeError::Unsupported(Operation::RxWindowControl))
    );

    // Nothing reached the synthesizer beyond init
    let (_, synth) = fe.release();
    assert_eq!(synth.calls.len(), 1);
}

// =============================================================================
// IQ Swap Tests
// =============================================================================

#[test]
fn iq_swapped_delegates_to_synth() {
    let fe = frontend();
    let arfcn = Arfcn::new(512).unwrap();

    assert_eq!(fe.iq_swapped(arfcn, false), Ok(false));
    assert_eq!(fe.iq_swapped(arfcn.uplink(), true), Ok(true));
}

// =============================================================================
// Shared Front-end Tests
// =============================================================================

#[test]
fn shared_frontend_serializes_access() {
    let shared = SharedFrontend::new(frontend());

    shared.set_mode(Band::Pcs1900, true).unwrap();
    assert_eq!(shared.act_state().bits(), 0x021A);

    let gain = shared.with(|fe| {
        fe.set_gain(GainDb::new(20))?;
        fe.gain()
    });
    assert_eq!(gain, Ok(GainDb::new(20)));

    let fe = shared.into_inner();
    assert_eq!(fe.mode(), Some(RfMode::tx(Band::Pcs1900)));
}

#[test]
fn error_display_names_the_problem() {
    let err: RffeError<TransportFault, SynthFault> = RffeError::UnsupportedBand(Band::Gsm750);
    assert_eq!(err.to_string(), "band GSM750 is not wired on this board");

    let err: RffeError<TransportFault, SynthFault> =
        RffeError::Unsupported(Operation::RxWindowControl);
    assert_eq!(
        err.to_string(),
        "receive window control is not implemented for this board"
    );
}
