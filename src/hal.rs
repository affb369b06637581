//! Hardware Abstraction Layer
//!
//! Narrow interfaces to the hardware the front-end drives: the serial
//! strobe port carrying the actuator register, and memory-mapped
//! configuration registers.

pub mod mmio;
pub mod tsp;
