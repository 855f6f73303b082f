//! Target session
//!
//! A [`Target`] owns one open adapter for the duration of a
//! programming run. Opening acquires the adapter, identifies the chip
//! against the variant registry and derives the flash geometry; all
//! flash and configuration-register operations go through the session,
//! which forwards to the engine with the identified family. The
//! adapter is released exactly once, on explicit close or on any
//! identification failure.

use mxprog_core::adapter::{Adapter, AdapterCaps};
use mxprog_core::chip::family::FamilyDescriptor;
use mxprog_core::chip::{VariantRegistry, PROGRAM_FLASH_BASE};
use mxprog_core::devcfg::{self, ConfigWords};
use mxprog_core::error::{Error, Result};
use mxprog_core::executive::Executive;
use mxprog_core::flash;

use crate::acquire::{self, AdapterHandle};
use crate::port::PortSpec;

/// One programming session bound to an identified chip.
#[derive(Debug)]
pub struct Target {
    adapter: AdapterHandle,
    family: &'static FamilyDescriptor,
    chip_name: String,
    idcode: u32,
    flash_addr: u32,
    flash_bytes: u32,
    boot_bytes: u32,
}

impl Target {
    /// Opens the adapter named by `port` (autodetect when `None`) and
    /// identifies the chip behind it.
    pub fn open(
        port: Option<&str>,
        baud: u32,
        retries: u32,
        registry: &VariantRegistry,
    ) -> Result<Target> {
        let spec = PortSpec::parse(port)?;
        let adapter = acquire::open_adapter(&spec, baud, retries)?;
        Target::with_adapter(adapter, registry)
    }

    /// Builds a session around an already-open adapter.
    ///
    /// On any failure the adapter is released without leaving target
    /// power applied.
    pub fn with_adapter(mut adapter: AdapterHandle, registry: &VariantRegistry) -> Result<Target> {
        let idcode = match adapter.read_id() {
            Ok(id) => id,
            Err(e) => {
                adapter.close(false);
                return Err(e);
            }
        };
        if idcode == 0 {
            adapter.close(false);
            return Err(Error::DeviceNotResponding);
        }

        let Some(variant) = registry.lookup(idcode) else {
            adapter.close(false);
            return Err(Error::UnknownDevice(idcode));
        };

        let family = variant.family;
        let chip_name = variant.name.to_string();

        let mut flash_addr = PROGRAM_FLASH_BASE;
        let mut flash_bytes = variant.flash_kbytes * 1024;
        let mut boot_bytes = family.boot_kbytes * 1024;
        if flash_bytes == 0 {
            // Bootloader target: the table knows nothing about the
            // chip behind it, the adapter does.
            flash_addr = adapter.user_start();
            flash_bytes = adapter.user_bytes();
            boot_bytes = adapter.boot_bytes();
        }

        adapter.notify_family(family.name);

        log::info!(
            "{} (id {:08x}), flash {} KB, boot {} KB",
            chip_name,
            idcode,
            flash_bytes / 1024,
            boot_bytes / 1024
        );

        Ok(Target {
            adapter,
            family,
            chip_name,
            idcode,
            flash_addr,
            flash_bytes,
            boot_bytes,
        })
    }

    /// Marketing name of the identified chip.
    pub fn chip_name(&self) -> &str {
        &self.chip_name
    }

    /// Device identifier as read from silicon, revision bits included.
    pub fn idcode(&self) -> u32 {
        self.idcode
    }

    /// Family of the identified chip.
    pub fn family(&self) -> &'static FamilyDescriptor {
        self.family
    }

    /// Physical base address of the programmable flash area.
    pub fn flash_addr(&self) -> u32 {
        self.flash_addr
    }

    /// Programmable flash size in bytes.
    pub fn flash_bytes(&self) -> u32 {
        self.flash_bytes
    }

    /// Boot flash size in bytes.
    pub fn boot_bytes(&self) -> u32 {
        self.boot_bytes
    }

    /// Smallest programmable unit of this chip in bytes.
    pub fn block_size(&self) -> u32 {
        self.family.bytes_per_row
    }

    /// Capabilities of the underlying adapter.
    pub fn capabilities(&self) -> AdapterCaps {
        self.adapter.capabilities()
    }

    /// Reads `data.len()` words starting at `addr`.
    pub fn read(&mut self, addr: u32, data: &mut [u32]) -> Result<()> {
        flash::read(&mut self.adapter, addr, data)
    }

    /// Programs `data` at `addr`. The region must be erased.
    pub fn program(&mut self, addr: u32, data: &[u32]) -> Result<()> {
        flash::program(&mut self.adapter, self.family, addr, data)
    }

    /// Verifies flash contents at `addr` against `data`.
    pub fn verify(&mut self, addr: u32, data: &[u32]) -> Result<()> {
        flash::verify(&mut self.adapter, self.family, addr, data)
    }

    /// Erases all of flash.
    pub fn erase(&mut self) -> Result<()> {
        flash::erase(&mut self.adapter)
    }

    /// Reads the configuration registers, `None` for families without
    /// any.
    pub fn read_config(&mut self) -> Result<Option<ConfigWords>> {
        devcfg::read(&mut self.adapter, self.family)
    }

    /// Reads and prints the configuration registers through the family
    /// decoder.
    pub fn report_config(&mut self) -> Result<()> {
        devcfg::report(&mut self.adapter, self.family)
    }

    /// Programs the configuration registers.
    pub fn program_config(&mut self, cfg: &ConfigWords) -> Result<()> {
        devcfg::program(&mut self.adapter, self.family, cfg)
    }

    /// Uploads a programming executive when the family needs one and
    /// the adapter can take it; otherwise a silent no-op.
    pub fn use_executive(&mut self, exec: &Executive) -> Result<()> {
        if !self.family.needs_executive()
            || !self.adapter.capabilities().contains(AdapterCaps::LOAD_EXECUTIVE)
        {
            return Ok(());
        }
        if exec.nwords() != self.family.pe_nwords {
            log::warn!(
                "executive payload is {} words, family {} expects {}",
                exec.nwords(),
                self.family.name,
                self.family.pe_nwords
            );
        }
        self.adapter.load_executive(exec.words(), self.family.pe_version)
    }

    /// Releases the adapter. With `power_on` the target keeps running
    /// after disconnect.
    pub fn close(mut self, power_on: bool) {
        self.adapter.close(power_on);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mxprog_core::chip::family::{FAMILY_MX1, FAMILY_MZ};
    use std::sync::{Arc, Mutex};

    /// What happened to the adapter, observable after the session
    /// consumed it.
    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        NotifyFamily(String),
        Close { power_on: bool },
    }

    struct ScriptedAdapter {
        id: u32,
        user_start: u32,
        user_bytes: u32,
        boot_bytes: u32,
        events: Arc<Mutex<Vec<Event>>>,
    }

    impl ScriptedAdapter {
        fn new(id: u32) -> (Self, Arc<Mutex<Vec<Event>>>) {
            let events = Arc::new(Mutex::new(Vec::new()));
            let adapter = Self {
                id,
                user_start: 0,
                user_bytes: 0,
                boot_bytes: 0,
                events: events.clone(),
            };
            (adapter, events)
        }

        fn boxed(self) -> AdapterHandle {
            Box::new(self)
        }
    }

    impl Adapter for ScriptedAdapter {
        fn capabilities(&self) -> AdapterCaps {
            AdapterCaps::READ_BLOCK
        }

        fn read_id(&mut self) -> Result<u32> {
            Ok(self.id)
        }

        fn read_word(&mut self, _addr: u32) -> Result<u32> {
            Ok(0xFFFF_FFFF)
        }

        fn program_word(&mut self, _addr: u32, _word: u32) -> Result<()> {
            Ok(())
        }

        fn read_block(&mut self, _addr: u32, data: &mut [u32]) -> Result<()> {
            data.fill(0xFFFF_FFFF);
            Ok(())
        }

        fn notify_family(&mut self, family: &str) {
            self.events
                .lock()
                .unwrap()
                .push(Event::NotifyFamily(family.to_string()));
        }

        fn user_start(&self) -> u32 {
            self.user_start
        }

        fn user_bytes(&self) -> u32 {
            self.user_bytes
        }

        fn boot_bytes(&self) -> u32 {
            self.boot_bytes
        }

        fn close(&mut self, power_on: bool) {
            self.events.lock().unwrap().push(Event::Close { power_on });
        }
    }

    #[test]
    fn identification_resolves_geometry_and_notifies() {
        // MX110F016B with revision 1 in the top bits.
        let (adapter, events) = ScriptedAdapter::new(0x14A0_7053);
        let registry = VariantRegistry::builtin();
        let target = Target::with_adapter(adapter.boxed(), &registry).unwrap();

        assert_eq!(target.chip_name(), "MX110F016B");
        assert_eq!(target.idcode(), 0x14A0_7053);
        assert_eq!(target.flash_addr(), 0x1D00_0000);
        assert_eq!(target.flash_bytes(), 16 * 1024);
        assert_eq!(target.boot_bytes(), 3 * 1024);
        assert!(std::ptr::eq(target.family(), &FAMILY_MX1));
        assert_eq!(
            events.lock().unwrap().as_slice(),
            &[Event::NotifyFamily("mx1".to_string())]
        );

        target.close(true);
        assert_eq!(
            events.lock().unwrap().last(),
            Some(&Event::Close { power_on: true })
        );
    }

    #[test]
    fn zero_id_releases_without_power() {
        let (adapter, events) = ScriptedAdapter::new(0);
        let registry = VariantRegistry::builtin();
        let err = Target::with_adapter(adapter.boxed(), &registry).unwrap_err();
        assert!(matches!(err, Error::DeviceNotResponding));
        assert_eq!(
            events.lock().unwrap().as_slice(),
            &[Event::Close { power_on: false }]
        );
    }

    #[test]
    fn unknown_id_releases_without_power() {
        let (adapter, events) = ScriptedAdapter::new(0x1234_5678);
        let registry = VariantRegistry::builtin();
        let err = Target::with_adapter(adapter.boxed(), &registry).unwrap_err();
        assert!(matches!(err, Error::UnknownDevice(0x1234_5678)));
        assert_eq!(
            events.lock().unwrap().as_slice(),
            &[Event::Close { power_on: false }]
        );
    }

    #[test]
    fn bootloader_geometry_comes_from_the_adapter() {
        let (mut adapter, events) = ScriptedAdapter::new(0x0EAF_B00B);
        adapter.user_start = 0x1D00_2000;
        adapter.user_bytes = 60 * 1024;
        adapter.boot_bytes = 8 * 1024;
        let registry = VariantRegistry::builtin();
        let target = Target::with_adapter(adapter.boxed(), &registry).unwrap();

        assert_eq!(target.chip_name(), "Bootloader");
        assert_eq!(target.flash_addr(), 0x1D00_2000);
        assert_eq!(target.flash_bytes(), 60 * 1024);
        assert_eq!(target.boot_bytes(), 8 * 1024);
        assert_eq!(
            events.lock().unwrap().as_slice(),
            &[Event::NotifyFamily("bootloader".to_string())]
        );
        target.close(false);
    }

    #[test]
    fn executive_upload_is_gated_by_family_and_capability() {
        let (adapter, _events) = ScriptedAdapter::new(0x0EAF_B00B);
        let registry = VariantRegistry::builtin();
        let mut target = Target::with_adapter(adapter.boxed(), &registry).unwrap();

        // Bootloader family has no executive; silently fine even
        // though the adapter cannot load one.
        let exec = Executive::from_bytes(&[0u8; 16]).unwrap();
        target.use_executive(&exec).unwrap();
        target.close(false);
    }

    #[test]
    fn mz_block_size_reaches_through_the_session() {
        let (adapter, _events) = ScriptedAdapter::new(0x0510_0053); // MZ0256ECE064
        let registry = VariantRegistry::builtin();
        let target = Target::with_adapter(adapter.boxed(), &registry).unwrap();
        assert_eq!(target.chip_name(), "MZ0256ECE064");
        assert!(std::ptr::eq(target.family(), &FAMILY_MZ));
        assert_eq!(target.block_size(), 2048);
        assert_eq!(target.boot_bytes(), 80 * 1024);
        assert_eq!(target.flash_bytes(), 256 * 1024);
        target.close(false);
    }

    #[test]
    fn full_cycle_against_the_emulator() {
        let adapter: AdapterHandle = Box::new(mxprog_dummy::DummyAdapter::new_default());
        let registry = VariantRegistry::builtin();
        let mut target = Target::with_adapter(adapter, &registry).unwrap();
        assert_eq!(target.chip_name(), "MX110F016B");

        target.erase().unwrap();
        let data: Vec<u32> = (1..=300u32).map(|i| 0xFFFF_FFFF ^ (i * 0x0001_0001)).collect();
        target.program(0x9D00_0000, &data).unwrap();
        target.verify(0x9D00_0000, &data).unwrap();

        // Read back through the physical alias of the same region.
        let mut readback = vec![0u32; data.len()];
        target.read(0x1D00_0000, &mut readback).unwrap();
        assert_eq!(readback, data);

        target.erase().unwrap();
        target
            .verify(0x9D00_0000, &vec![0xFFFF_FFFF; data.len()])
            .unwrap();
        let err = target.verify(0x9D00_0000, &data).unwrap_err();
        assert!(matches!(err, Error::VerifyMismatch { .. }));
        target.close(true);
    }

    #[test]
    fn devcfg_round_trip_through_the_emulator() {
        let adapter: AdapterHandle = Box::new(mxprog_dummy::DummyAdapter::new_default());
        let registry = VariantRegistry::builtin();
        let mut target = Target::with_adapter(adapter, &registry).unwrap();

        // Fresh chip: the registers read fully erased.
        let cfg = target.read_config().unwrap().unwrap();
        assert!(cfg.is_erased());

        let wanted = ConfigWords {
            devcfg0: 0xFFFF_FFF7,
            devcfg1: 0xFF74_FFD9,
            devcfg2: 0xFFF9_FFD9,
            devcfg3: 0x3AFF_FFFF,
        };
        target.program_config(&wanted).unwrap();

        let cfg = target.read_config().unwrap().unwrap();
        // The unimplemented top bit of DEVCFG0 never reads back.
        assert_eq!(cfg.devcfg0, 0x7FFF_FFF7);
        assert_eq!(cfg.devcfg1, wanted.devcfg1);
        assert_eq!(cfg.devcfg2, wanted.devcfg2);
        assert_eq!(cfg.devcfg3, wanted.devcfg3);

        // The expected image carries the bit set; the mask keeps the
        // verify honest against what silicon can store.
        target.verify(0x9FC0_0BFC, &[0xFFFF_FFF7]).unwrap();
        target.close(false);
    }
}
