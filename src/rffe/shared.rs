//! Interrupt-safe access to the front-end
//!
//! The layer-1 stack switches modes from the TDMA frame interrupt while
//! a control task may adjust gain. [`SharedFrontend`] serializes both
//! through a critical section so the actuator read-modify-write is never
//! interleaved.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::drivers::synth::Synthesizer;
use crate::hal::tsp::{ActState, ActuatorTransport};
use crate::rffe::frontend::{Frontend, FrontendResult};
use crate::types::Band;

/// Front-end guarded by a critical-section mutex
///
/// Suitable for a `static`. Calls must not nest: invoking the shared
/// front-end from inside a [`SharedFrontend::with`] closure panics on the
/// inner borrow.
pub struct SharedFrontend<T, S> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<Frontend<T, S>>>,
}

impl<T, S> SharedFrontend<T, S>
where
    T: ActuatorTransport,
    S: Synthesizer,
{
    /// Wrap a front-end
    #[must_use]
    pub const fn new(frontend: Frontend<T, S>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(frontend)),
        }
    }

    /// Run a closure with exclusive access to the front-end
    pub fn with<R>(&self, f: impl FnOnce(&mut Frontend<T, S>) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Switch band and direction
    ///
    /// # Errors
    ///
    /// As [`Frontend::set_mode`].
    pub fn set_mode(&self, band: Band, tx: bool) -> FrontendResult<(), T, S> {
        self.with(|fe| fe.set_mode(band, tx))
    }

    /// Cached actuator register
    #[must_use]
    pub fn act_state(&self) -> ActState {
        self.with(|fe| fe.act_state())
    }

    /// Unwrap the front-end
    pub fn into_inner(self) -> Frontend<T, S> {
        self.inner.into_inner().into_inner()
    }
}
