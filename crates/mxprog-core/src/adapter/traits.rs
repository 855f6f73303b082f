//! Debug adapter trait definitions
//!
//! An adapter is the hardware (or emulated) bridge between this
//! program and the target chip: an ICSP probe, an MPSSE cable, a HID
//! bootloader, and so on. Word access is mandatory; everything else is
//! optional and advertised through [`AdapterCaps`].

use bitflags::bitflags;

use crate::error::{Error, Result};

bitflags! {
    /// Optional adapter capabilities
    ///
    /// The flash engine picks its strategy from these flags: a missing
    /// capability routes the operation onto a fallback path or fails
    /// with [`Error::UnsupportedOperation`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AdapterCaps: u32 {
        /// Bulk read of up to 256 words per transaction
        const READ_BLOCK     = 1 << 0;
        /// On-adapter verification against expected words
        const VERIFY_BLOCK   = 1 << 1;
        /// Whole-chip erase
        const ERASE_CHIP     = 1 << 2;
        /// Bulk programming in up to 256-word chunks
        const PROGRAM_BLOCK  = 1 << 3;
        /// Row programming at the family row size
        const PROGRAM_ROW    = 1 << 4;
        /// Four consecutive words in one transaction
        const PROGRAM_QUAD   = 1 << 5;
        /// Upload of a programming-executive payload
        const LOAD_EXECUTIVE = 1 << 6;
    }
}

impl Default for AdapterCaps {
    fn default() -> Self {
        AdapterCaps::empty()
    }
}

/// Debug adapter connected to a target chip.
///
/// All addresses are physical. Implementations with virtual-address
/// wire protocols translate internally. Optional operations default to
/// [`Error::UnsupportedOperation`]; implementations that set the
/// corresponding [`AdapterCaps`] flag must override them.
pub trait Adapter {
    /// Capabilities beyond mandatory word access.
    fn capabilities(&self) -> AdapterCaps;

    /// Reads the device identifier register.
    ///
    /// `Ok(0)` means the adapter works but the target did not answer,
    /// for example when the chip is held in reset or absent.
    fn read_id(&mut self) -> Result<u32>;

    /// Reads one 32-bit word.
    fn read_word(&mut self, addr: u32) -> Result<u32>;

    /// Programs one 32-bit word. The location must be erased.
    fn program_word(&mut self, addr: u32, word: u32) -> Result<()>;

    /// Reads `data.len()` consecutive words, at most 256 per call.
    fn read_block(&mut self, _addr: u32, _data: &mut [u32]) -> Result<()> {
        Err(Error::UnsupportedOperation("block read"))
    }

    /// Compares flash contents against `data` on the adapter side.
    /// Returns [`Error::VerifyMismatch`] for the first differing word.
    fn verify_block(&mut self, _addr: u32, _data: &[u32]) -> Result<()> {
        Err(Error::UnsupportedOperation("native verify"))
    }

    /// Erases all of program flash (and boot flash where the hardware
    /// couples them).
    fn erase_chip(&mut self) -> Result<()> {
        Err(Error::UnsupportedOperation("chip erase"))
    }

    /// Programs up to 256 consecutive words. The region must be erased.
    fn program_block(&mut self, _addr: u32, _data: &[u32]) -> Result<()> {
        Err(Error::UnsupportedOperation("block program"))
    }

    /// Programs exactly one flash row. `data.len()` equals the family
    /// row size in words; `addr` is row-aligned.
    fn program_row(&mut self, _addr: u32, _data: &[u32]) -> Result<()> {
        Err(Error::UnsupportedOperation("row program"))
    }

    /// Programs four consecutive words starting at `addr` in a single
    /// transaction.
    fn program_quad_word(
        &mut self,
        _addr: u32,
        _w0: u32,
        _w1: u32,
        _w2: u32,
        _w3: u32,
    ) -> Result<()> {
        Err(Error::UnsupportedOperation("quad word program"))
    }

    /// Uploads a programming executive into target RAM and hands
    /// subsequent operations over to it.
    fn load_executive(&mut self, _image: &[u32], _version: u32) -> Result<()> {
        Err(Error::UnsupportedOperation("executive upload"))
    }

    /// Tells the adapter which chip family was identified. Adapters
    /// with family-specific wire quirks key off this; most ignore it.
    fn notify_family(&mut self, _family: &str) {}

    /// First address of the user program, for adapters that reserve
    /// part of flash for themselves. 0 means all of flash is usable.
    fn user_start(&self) -> u32 {
        0
    }

    /// Usable program flash size in bytes, or 0 when the chip variant
    /// decides.
    fn user_bytes(&self) -> u32 {
        0
    }

    /// Usable boot flash size in bytes, or 0 when the chip variant
    /// decides.
    fn boot_bytes(&self) -> u32 {
        0
    }

    /// Releases the target. With `power_on` the chip is left running;
    /// without it the adapter powers the target down where it can.
    fn close(&mut self, power_on: bool);
}

impl core::fmt::Debug for dyn Adapter + Send {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Adapter").finish_non_exhaustive()
    }
}

// Blanket impl so boxed adapters can be used as trait objects while
// still hitting the implementation's overrides.
impl Adapter for Box<dyn Adapter + Send> {
    fn capabilities(&self) -> AdapterCaps {
        (**self).capabilities()
    }

    fn read_id(&mut self) -> Result<u32> {
        (**self).read_id()
    }

    fn read_word(&mut self, addr: u32) -> Result<u32> {
        (**self).read_word(addr)
    }

    fn program_word(&mut self, addr: u32, word: u32) -> Result<()> {
        (**self).program_word(addr, word)
    }

    fn read_block(&mut self, addr: u32, data: &mut [u32]) -> Result<()> {
        (**self).read_block(addr, data)
    }

    fn verify_block(&mut self, addr: u32, data: &[u32]) -> Result<()> {
        (**self).verify_block(addr, data)
    }

    fn erase_chip(&mut self) -> Result<()> {
        (**self).erase_chip()
    }

    fn program_block(&mut self, addr: u32, data: &[u32]) -> Result<()> {
        (**self).program_block(addr, data)
    }

    fn program_row(&mut self, addr: u32, data: &[u32]) -> Result<()> {
        (**self).program_row(addr, data)
    }

    fn program_quad_word(&mut self, addr: u32, w0: u32, w1: u32, w2: u32, w3: u32) -> Result<()> {
        (**self).program_quad_word(addr, w0, w1, w2, w3)
    }

    fn load_executive(&mut self, image: &[u32], version: u32) -> Result<()> {
        (**self).load_executive(image, version)
    }

    fn notify_family(&mut self, family: &str) {
        (**self).notify_family(family)
    }

    fn user_start(&self) -> u32 {
        (**self).user_start()
    }

    fn user_bytes(&self) -> u32 {
        (**self).user_bytes()
    }

    fn boot_bytes(&self) -> u32 {
        (**self).boot_bytes()
    }

    fn close(&mut self, power_on: bool) {
        (**self).close(power_on)
    }
}
