//! Memory-mapped register access
//!
//! Used only for the one-time pin-mux setup during initialization.

#![allow(unsafe_code)]

use core::ptr::{read_volatile, write_volatile};

/// 16-bit register access by absolute address
pub trait RegisterIo {
    /// Read a register
    fn read16(&mut self, addr: u32) -> u16;

    /// Write a register
    fn write16(&mut self, addr: u32, value: u16);

    /// Read-modify-write a register
    fn modify16<F>(&mut self, addr: u32, f: F)
    where
        F: FnOnce(u16) -> u16,
    {
        let value = self.read16(addr);
        self.write16(addr, f(value));
    }
}

impl<T: RegisterIo + ?Sized> RegisterIo for &mut T {
    fn read16(&mut self, addr: u32) -> u16 {
        (**self).read16(addr)
    }

    fn write16(&mut self, addr: u32, value: u16) {
        (**self).write16(addr, value);
    }
}

/// Volatile access to the MCU's own address space
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Create the register accessor
    ///
    /// # Safety
    /// The caller must ensure every address later passed to
    /// [`RegisterIo`] is a valid, 2-byte aligned hardware register on the
    /// running target, and that no other code accesses those registers
    /// concurrently.
    #[must_use]
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl RegisterIo for Mmio {
    fn read16(&mut self, addr: u32) -> u16 {
        // SAFETY: upheld by the contract of `Mmio::new`.
        unsafe { read_volatile(addr as usize as *const u16) }
    }

    fn write16(&mut self, addr: u32, value: u16) {
        // SAFETY: upheld by the contract of `Mmio::new`.
        unsafe { write_volatile(addr as usize as *mut u16, value) }
    }
}
