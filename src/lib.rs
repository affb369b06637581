//! GTA0x RF Front-end Library
//!
//! Hardware abstraction for the RF front-end of the Openmoko GTA0x /
//! FreeCalypso FCDEV3B tri-band GSM baseband board. It turns "operate on
//! band B, transmitting or not" into the antenna switch, PA and TX enable
//! lines of the shared actuator register, and passes gain and IQ
//! questions through to the RF synthesizer driver.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    LAYER-1 STACK                             │
//! │      set mode  │  gain  │  IQ swap  │  port topology         │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    RFFE (this crate)                         │
//! │  Mode selector + wiring table  │  actuator cache  │  ports   │
//! ├─────────────────────────────────────────────────────────────┤
//! │                 COLLABORATOR INTERFACES                      │
//! │  ActuatorTransport (TSP)  │  Synthesizer  │  RegisterIo      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Single owner**: the actuator cache lives in one [`rffe::Frontend`],
//!   never in ambient global state
//! - **Auditable wiring**: band overrides are one table in [`rffe::wiring`]
//! - **Functional core, imperative shell**: [`rffe::mode::select`] is pure
//! - **No unsafe in application code**: volatile access is isolated in
//!   [`hal::mmio`]
//! - **Explicit error handling**: all fallible operations return `Result`

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
mod fmt;

/// Hardware Abstraction Layer
///
/// Actuator register, strobe lines and memory-mapped registers.
pub mod hal;

/// Peripheral Drivers
///
/// Interface to the RF synthesizer.
pub mod drivers;

/// RF Front-end Control
///
/// Mode selection, port topology, gain and IQ delegation.
pub mod rffe;

/// Shared types used across modules
pub mod types;

/// Board configuration and constants
pub mod config;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::BoardConfig;
    pub use crate::drivers::synth::Synthesizer;
    pub use crate::hal::mmio::RegisterIo;
    pub use crate::hal::tsp::{ActState, ActuatorTransport};
    pub use crate::rffe::{Frontend, RfMode, RffeError, SharedFrontend};
    pub use crate::types::*;
}
