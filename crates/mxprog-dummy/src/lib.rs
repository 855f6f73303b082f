//! mxprog-dummy - In-memory target emulator for testing
//!
//! This crate provides a dummy adapter that emulates a chip's program
//! and boot flash in memory. It's useful for testing and development
//! without real hardware. The device string of the `dummy:` port
//! descriptor selects the emulated device identifier.

use mxprog_core::adapter::{Adapter, AdapterCaps};
use mxprog_core::chip::{BOOT_FLASH_BASE, BUILTIN_VARIANTS, PROGRAM_FLASH_BASE};
use mxprog_core::error::{Error, Result};

/// Configuration for the emulated target.
#[derive(Debug, Clone)]
pub struct DummyConfig {
    /// Device identifier the emulator answers with; 0 emulates a chip
    /// that is present but not responding.
    pub devid: u32,
    /// Program flash size in bytes.
    pub flash_bytes: u32,
    /// Boot flash size in bytes.
    pub boot_bytes: u32,
    /// Capabilities advertised to the engine.
    pub caps: AdapterCaps,
}

impl Default for DummyConfig {
    fn default() -> Self {
        Self {
            devid: 0x04A0_7053, // MX110F016B
            flash_bytes: 16 * 1024,
            boot_bytes: 3 * 1024,
            caps: AdapterCaps::READ_BLOCK
                | AdapterCaps::ERASE_CHIP
                | AdapterCaps::PROGRAM_BLOCK
                | AdapterCaps::PROGRAM_ROW
                | AdapterCaps::PROGRAM_QUAD
                | AdapterCaps::LOAD_EXECUTIVE,
        }
    }
}

impl DummyConfig {
    /// Configuration for a given device identifier, with flash sizes
    /// taken from the built-in variant table when the id is known.
    pub fn for_devid(devid: u32) -> Self {
        let mut config = Self {
            devid,
            ..Self::default()
        };
        if let Some(variant) = BUILTIN_VARIANTS.iter().find(|v| v.matches(devid)) {
            if variant.flash_kbytes != 0 {
                config.flash_bytes = variant.flash_kbytes * 1024;
            }
            if variant.family.boot_kbytes != 0 {
                config.boot_bytes = variant.family.boot_kbytes * 1024;
            }
        }
        config
    }
}

/// Dummy target adapter.
///
/// Emulates word-wide flash with program-clears-bits semantics: a
/// program operation ANDs into the array, chip erase restores
/// `0xFFFFFFFF`. Reads outside both flash regions return `0xFFFFFFFF`;
/// writes outside are dropped.
pub struct DummyAdapter {
    config: DummyConfig,
    program: Vec<u32>,
    boot: Vec<u32>,
    /// Address whose top bit reads back zero, mirroring the
    /// unimplemented DEVCFG0 bit of the identified family.
    devcfg0_addr: Option<u32>,
    executive: Option<(u32, u32)>,
}

impl DummyAdapter {
    /// Creates an emulator with the given configuration, all flash
    /// erased.
    pub fn new(config: DummyConfig) -> Self {
        let program = vec![0xFFFF_FFFF; (config.flash_bytes / 4) as usize];
        let boot = vec![0xFFFF_FFFF; (config.boot_bytes / 4) as usize];
        Self {
            config,
            program,
            boot,
            devcfg0_addr: None,
            executive: None,
        }
    }

    /// Creates an emulator with the default configuration (MX110F016B).
    pub fn new_default() -> Self {
        Self::new(DummyConfig::default())
    }

    /// Emulated program flash contents.
    pub fn program_flash(&self) -> &[u32] {
        &self.program
    }

    /// Mutable emulated program flash, for pre-seeding tests.
    pub fn program_flash_mut(&mut self) -> &mut [u32] {
        &mut self.program
    }

    /// Emulated boot flash contents.
    pub fn boot_flash(&self) -> &[u32] {
        &self.boot
    }

    /// Mutable emulated boot flash.
    pub fn boot_flash_mut(&mut self) -> &mut [u32] {
        &mut self.boot
    }

    /// The configuration this emulator was created with.
    pub fn config(&self) -> &DummyConfig {
        &self.config
    }

    /// Word count and version of the last uploaded executive, if any.
    pub fn executive(&self) -> Option<(u32, u32)> {
        self.executive
    }

    fn program_index(&self, addr: u32) -> Option<usize> {
        let offset = addr.checked_sub(PROGRAM_FLASH_BASE)?;
        let index = (offset >> 2) as usize;
        (index < self.program.len()).then_some(index)
    }

    fn boot_index(&self, addr: u32) -> Option<usize> {
        let offset = addr.checked_sub(BOOT_FLASH_BASE)?;
        let index = (offset >> 2) as usize;
        (index < self.boot.len()).then_some(index)
    }

    fn read_mem(&self, addr: u32) -> u32 {
        let word = if let Some(i) = self.program_index(addr) {
            self.program[i]
        } else if let Some(i) = self.boot_index(addr) {
            self.boot[i]
        } else {
            0xFFFF_FFFF
        };
        if self.devcfg0_addr == Some(addr) {
            word & 0x7FFF_FFFF
        } else {
            word
        }
    }

    fn write_mem(&mut self, addr: u32, word: u32) {
        if let Some(i) = self.program_index(addr) {
            self.program[i] &= word;
        } else if let Some(i) = self.boot_index(addr) {
            self.boot[i] &= word;
        }
    }
}

impl Adapter for DummyAdapter {
    fn capabilities(&self) -> AdapterCaps {
        self.config.caps
    }

    fn read_id(&mut self) -> Result<u32> {
        Ok(self.config.devid)
    }

    fn read_word(&mut self, addr: u32) -> Result<u32> {
        Ok(self.read_mem(addr))
    }

    fn program_word(&mut self, addr: u32, word: u32) -> Result<()> {
        self.write_mem(addr, word);
        Ok(())
    }

    fn read_block(&mut self, addr: u32, data: &mut [u32]) -> Result<()> {
        debug_assert!(data.len() <= 256);
        for (i, slot) in data.iter_mut().enumerate() {
            *slot = self.read_mem(addr + ((i as u32) << 2));
        }
        Ok(())
    }

    fn verify_block(&mut self, addr: u32, data: &[u32]) -> Result<()> {
        for (i, &expected) in data.iter().enumerate() {
            let word_addr = addr + ((i as u32) << 2);
            let actual = self.read_mem(word_addr);
            if actual != expected {
                return Err(Error::VerifyMismatch {
                    addr: word_addr,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }

    fn erase_chip(&mut self) -> Result<()> {
        self.program.fill(0xFFFF_FFFF);
        self.boot.fill(0xFFFF_FFFF);
        Ok(())
    }

    fn program_block(&mut self, addr: u32, data: &[u32]) -> Result<()> {
        debug_assert!(data.len() <= 256);
        for (i, &word) in data.iter().enumerate() {
            self.write_mem(addr + ((i as u32) << 2), word);
        }
        Ok(())
    }

    fn program_row(&mut self, addr: u32, data: &[u32]) -> Result<()> {
        for (i, &word) in data.iter().enumerate() {
            self.write_mem(addr + ((i as u32) << 2), word);
        }
        Ok(())
    }

    fn program_quad_word(&mut self, addr: u32, w0: u32, w1: u32, w2: u32, w3: u32) -> Result<()> {
        for (i, word) in [w0, w1, w2, w3].into_iter().enumerate() {
            self.write_mem(addr + ((i as u32) << 2), word);
        }
        Ok(())
    }

    fn load_executive(&mut self, image: &[u32], version: u32) -> Result<()> {
        self.executive = Some((image.len() as u32, version));
        Ok(())
    }

    fn notify_family(&mut self, family: &str) {
        self.devcfg0_addr = match family {
            "mx1" => Some(0x1FC0_0BFC),
            "mx3" | "xlp" => Some(0x1FC0_2FFC),
            _ => None,
        };
    }

    fn user_start(&self) -> u32 {
        PROGRAM_FLASH_BASE
    }

    fn user_bytes(&self) -> u32 {
        self.config.flash_bytes
    }

    fn boot_bytes(&self) -> u32 {
        self.config.boot_bytes
    }

    fn close(&mut self, power_on: bool) {
        log::debug!("dummy adapter closed (power {})", if power_on { "on" } else { "off" });
    }
}

/// Serial-table opener. The device string is empty for the default
/// chip or a hexadecimal device identifier to emulate.
pub fn open_serial(device: &str, _baud: u32) -> Result<Box<dyn Adapter + Send>> {
    let config = if device.is_empty() {
        DummyConfig::default()
    } else {
        let digits = device
            .strip_prefix("0x")
            .or_else(|| device.strip_prefix("0X"))
            .unwrap_or(device);
        let devid = u32::from_str_radix(digits, 16)
            .map_err(|_| Error::Config(format!("{device}: not a hex device id")))?;
        DummyConfig::for_devid(devid)
    };
    Ok(Box::new(DummyAdapter::new(config)))
}

/// USB-table opener. The emulator has no bus presence, so vid/pid and
/// the serial filter are ignored.
pub fn open_usb(
    _vid: u16,
    _pid: u16,
    _serial: Option<&str>,
    _report: bool,
) -> Result<Box<dyn Adapter + Send>> {
    Ok(Box::new(DummyAdapter::new_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_with_the_configured_id() {
        let mut dummy = DummyAdapter::new_default();
        assert_eq!(dummy.read_id().unwrap(), 0x04A0_7053);

        let mut silent = DummyAdapter::new(DummyConfig {
            devid: 0,
            ..DummyConfig::default()
        });
        assert_eq!(silent.read_id().unwrap(), 0);
    }

    #[test]
    fn programming_only_clears_bits() {
        let mut dummy = DummyAdapter::new_default();
        dummy.program_word(PROGRAM_FLASH_BASE, 0xFFFF_0000).unwrap();
        assert_eq!(dummy.read_word(PROGRAM_FLASH_BASE).unwrap(), 0xFFFF_0000);
        dummy.program_word(PROGRAM_FLASH_BASE, 0x00FF_FFFF).unwrap();
        assert_eq!(dummy.read_word(PROGRAM_FLASH_BASE).unwrap(), 0x00FF_0000);

        dummy.erase_chip().unwrap();
        assert_eq!(dummy.read_word(PROGRAM_FLASH_BASE).unwrap(), 0xFFFF_FFFF);
    }

    #[test]
    fn block_program_and_read_round_trip() {
        let mut dummy = DummyAdapter::new_default();
        let data: Vec<u32> = (0..64u32).map(|i| i * 0x0101_0101).collect();
        dummy.program_block(PROGRAM_FLASH_BASE + 0x100, &data).unwrap();

        let mut readback = vec![0u32; 64];
        dummy
            .read_block(PROGRAM_FLASH_BASE + 0x100, &mut readback)
            .unwrap();
        assert_eq!(readback, data);

        dummy
            .verify_block(PROGRAM_FLASH_BASE + 0x100, &data)
            .unwrap();
    }

    #[test]
    fn reads_outside_flash_look_erased() {
        let mut dummy = DummyAdapter::new_default();
        assert_eq!(dummy.read_word(0x0000_1000).unwrap(), 0xFFFF_FFFF);
        // Writes outside flash are dropped, not stored.
        dummy.program_word(0x0000_1000, 0x1234_5678).unwrap();
        assert_eq!(dummy.read_word(0x0000_1000).unwrap(), 0xFFFF_FFFF);
    }

    #[test]
    fn devcfg0_top_bit_reads_zero_after_family_notice() {
        let mut dummy = DummyAdapter::new_default();
        // Before identification the whole word reads back.
        dummy.program_word(0x1FC0_0BFC, 0xFFFF_FFFF).unwrap();
        assert_eq!(dummy.read_word(0x1FC0_0BFC).unwrap(), 0xFFFF_FFFF);

        dummy.notify_family("mx1");
        assert_eq!(dummy.read_word(0x1FC0_0BFC).unwrap(), 0x7FFF_FFFF);
        // Other boot words are unaffected.
        assert_eq!(dummy.read_word(0x1FC0_0BF8).unwrap(), 0xFFFF_FFFF);

        dummy.notify_family("mz");
        assert_eq!(dummy.read_word(0x1FC0_0BFC).unwrap(), 0xFFFF_FFFF);
    }

    #[test]
    fn quad_word_lands_in_ascending_order() {
        let mut dummy = DummyAdapter::new(DummyConfig::for_devid(0x0510_0053));
        dummy.notify_family("mz");
        let base = BOOT_FLASH_BASE + 0xFFC0;
        dummy.program_quad_word(base, 3, 2, 1, 0).unwrap();
        assert_eq!(dummy.read_word(base).unwrap(), 3);
        assert_eq!(dummy.read_word(base + 4).unwrap(), 2);
        assert_eq!(dummy.read_word(base + 8).unwrap(), 1);
        assert_eq!(dummy.read_word(base + 12).unwrap(), 0);
    }

    #[test]
    fn opener_sizes_flash_from_the_variant_table() {
        let config = DummyConfig::for_devid(0x0510_0053); // MZ0256ECE064
        assert_eq!(config.flash_bytes, 256 * 1024);
        assert_eq!(config.boot_bytes, 80 * 1024);

        let config = DummyConfig::for_devid(0x0BAD_0000);
        assert_eq!(config.flash_bytes, 16 * 1024);
    }

    #[test]
    fn serial_opener_parses_the_device_id() {
        let mut handle = open_serial("5100053", 115_200).unwrap();
        assert_eq!(handle.read_id().unwrap(), 0x0510_0053);

        let mut handle = open_serial("0x14A07053", 115_200).unwrap();
        assert_eq!(handle.read_id().unwrap(), 0x14A0_7053);

        assert!(open_serial("not-hex", 115_200).is_err());
    }

    #[test]
    fn executive_upload_is_recorded() {
        let mut dummy = DummyAdapter::new_default();
        assert_eq!(dummy.executive(), None);
        dummy.load_executive(&[0u32; 422], 0x0301).unwrap();
        assert_eq!(dummy.executive(), Some((422, 0x0301)));
    }
}
