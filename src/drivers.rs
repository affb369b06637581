//! Peripheral Drivers
//!
//! Interfaces to the external ICs the front-end delegates to.

pub mod synth;
