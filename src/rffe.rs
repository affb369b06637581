//! RF Front-end Control
//!
//! Mode selection, port topology, gain and IQ delegation for the
//! tri-band front-end.

pub mod error;
pub mod frontend;
pub mod mode;
pub mod ports;
pub mod shared;
pub mod wiring;

pub use error::{Operation, RffeError, RffeResult, UnsupportedBand};
pub use frontend::{Frontend, FrontendResult};
pub use mode::RfMode;
pub use shared::SharedFrontend;
