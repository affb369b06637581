//! Port Topology
//!
//! Which logical RF ports the board has wired for receive and transmit.

use crate::types::{Port, PortMask};

/// Receive ports: combined low band, dedicated DCS and PCS inputs
pub const RX_PORTS: PortMask = PortMask::from_ports(&[Port::Lo, Port::Dcs1800, Port::Pcs1900]);

/// Transmit ports: combined low and high band outputs
pub const TX_PORTS: PortMask = PortMask::from_ports(&[Port::Lo, Port::Hi]);

/// Receive port mask
#[must_use]
pub const fn rx_ports() -> PortMask {
    RX_PORTS
}

/// Transmit port mask
#[must_use]
pub const fn tx_ports() -> PortMask {
    TX_PORTS
}
