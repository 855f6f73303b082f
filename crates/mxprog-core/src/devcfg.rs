//! Configuration register controller
//!
//! The four DEVCFG words live in boot flash at a family-specific
//! offset, numbered in the opposite direction of their memory order:
//! DEVCFG3 sits at the lowest address, DEVCFG0 at the highest. Both
//! paths here preserve that layout exactly.

use crate::adapter::Adapter;
use crate::chip::family::FamilyDescriptor;
use crate::error::Result;

/// One snapshot of the four configuration registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigWords {
    /// DEVCFG0, the highest-addressed register.
    pub devcfg0: u32,
    /// DEVCFG1.
    pub devcfg1: u32,
    /// DEVCFG2.
    pub devcfg2: u32,
    /// DEVCFG3, the lowest-addressed register.
    pub devcfg3: u32,
}

impl ConfigWords {
    /// True for a fully-erased register set. DEVCFG0's unimplemented
    /// top bit reads back zero, so erased DEVCFG0 is `0x7FFFFFFF`.
    pub fn is_erased(&self) -> bool {
        self.devcfg3 == 0xFFFF_FFFF
            && self.devcfg2 == 0xFFFF_FFFF
            && self.devcfg1 == 0xFFFF_FFFF
            && self.devcfg0 == 0x7FFF_FFFF
    }

    /// True when every register reads zero, which some adapters return
    /// for a chip in reset.
    pub fn is_all_zero(&self) -> bool {
        self.devcfg0 == 0 && self.devcfg1 == 0 && self.devcfg2 == 0 && self.devcfg3 == 0
    }
}

/// Reads the configuration registers, or `None` for families without
/// any.
pub fn read<A: Adapter + ?Sized>(
    adapter: &mut A,
    family: &FamilyDescriptor,
) -> Result<Option<ConfigWords>> {
    let Some(base) = family.devcfg_base() else {
        return Ok(None);
    };
    let devcfg3 = adapter.read_word(base)?;
    let devcfg2 = adapter.read_word(base + 4)?;
    let devcfg1 = adapter.read_word(base + 8)?;
    let devcfg0 = adapter.read_word(base + 12)?;
    Ok(Some(ConfigWords {
        devcfg0,
        devcfg1,
        devcfg2,
        devcfg3,
    }))
}

/// Reads and prints the configuration registers through the family
/// decoder. Erased or all-zero register sets carry no information and
/// are skipped, as are families without configuration registers.
pub fn report<A: Adapter + ?Sized>(adapter: &mut A, family: &FamilyDescriptor) -> Result<()> {
    let Some(cfg) = read(adapter, family)? else {
        return Ok(());
    };
    if cfg.is_erased() || cfg.is_all_zero() {
        return Ok(());
    }
    if let Some(print) = family.print_devcfg {
        println!("Configuration:");
        print(cfg.devcfg0, cfg.devcfg1, cfg.devcfg2, cfg.devcfg3);
    }
    Ok(())
}

/// Programs the configuration registers. Families without them make
/// this a silent no-op.
///
/// From protocol version `0x0500` the programming executive requires
/// all four registers in one atomic quad-word operation; earlier
/// versions take four independent word programs in ascending address
/// order (DEVCFG3 first).
pub fn program<A: Adapter + ?Sized>(
    adapter: &mut A,
    family: &FamilyDescriptor,
    cfg: &ConfigWords,
) -> Result<()> {
    let Some(base) = family.devcfg_base() else {
        return Ok(());
    };

    if family.pe_version >= 0x0500 {
        return adapter.program_quad_word(base, cfg.devcfg3, cfg.devcfg2, cfg.devcfg1, cfg.devcfg0);
    }

    adapter.program_word(base, cfg.devcfg3)?;
    adapter.program_word(base + 4, cfg.devcfg2)?;
    adapter.program_word(base + 8, cfg.devcfg1)?;
    adapter.program_word(base + 12, cfg.devcfg0)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::AdapterCaps;
    use crate::chip::family::{FAMILY_BOOTLOADER, FAMILY_MX1, FAMILY_MZ};
    use crate::error::Error;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockAdapter {
        words: HashMap<u32, u32>,
        programs: RefCell<Vec<(u32, u32)>>,
        quads: RefCell<Vec<(u32, [u32; 4])>>,
        quad_supported: bool,
    }

    impl Adapter for MockAdapter {
        fn capabilities(&self) -> AdapterCaps {
            if self.quad_supported {
                AdapterCaps::PROGRAM_QUAD
            } else {
                AdapterCaps::empty()
            }
        }

        fn read_id(&mut self) -> Result<u32> {
            Ok(0x04A0_7053)
        }

        fn read_word(&mut self, addr: u32) -> Result<u32> {
            Ok(*self.words.get(&addr).unwrap_or(&0xFFFF_FFFF))
        }

        fn program_word(&mut self, addr: u32, word: u32) -> Result<()> {
            self.programs.borrow_mut().push((addr, word));
            Ok(())
        }

        fn program_quad_word(
            &mut self,
            addr: u32,
            w0: u32,
            w1: u32,
            w2: u32,
            w3: u32,
        ) -> Result<()> {
            if !self.quad_supported {
                return Err(Error::UnsupportedOperation("quad word program"));
            }
            self.quads.borrow_mut().push((addr, [w0, w1, w2, w3]));
            Ok(())
        }

        fn close(&mut self, _power_on: bool) {}
    }

    #[test]
    fn read_follows_the_register_layout() {
        let mut mock = MockAdapter::default();
        // mx1 devcfg base is 0x1FC00BF0; DEVCFG3 at +0, DEVCFG0 at +12.
        mock.words.insert(0x1FC0_0BF0, 0x3000_0003);
        mock.words.insert(0x1FC0_0BF4, 0x2000_0002);
        mock.words.insert(0x1FC0_0BF8, 0x1000_0001);
        mock.words.insert(0x1FC0_0BFC, 0x4000_0000);

        let cfg = read(&mut mock, &FAMILY_MX1).unwrap().unwrap();
        assert_eq!(cfg.devcfg3, 0x3000_0003);
        assert_eq!(cfg.devcfg2, 0x2000_0002);
        assert_eq!(cfg.devcfg1, 0x1000_0001);
        assert_eq!(cfg.devcfg0, 0x4000_0000);

        assert!(read(&mut mock, &FAMILY_BOOTLOADER).unwrap().is_none());
    }

    #[test]
    fn erased_and_zero_patterns_are_recognized() {
        let erased = ConfigWords {
            devcfg0: 0x7FFF_FFFF,
            devcfg1: 0xFFFF_FFFF,
            devcfg2: 0xFFFF_FFFF,
            devcfg3: 0xFFFF_FFFF,
        };
        assert!(erased.is_erased());
        assert!(!erased.is_all_zero());

        // A full 0xFFFFFFFF in DEVCFG0 is not the erased read-back.
        let not_erased = ConfigWords {
            devcfg0: 0xFFFF_FFFF,
            ..erased
        };
        assert!(!not_erased.is_erased());

        let zero = ConfigWords {
            devcfg0: 0,
            devcfg1: 0,
            devcfg2: 0,
            devcfg3: 0,
        };
        assert!(zero.is_all_zero());
        assert!(!zero.is_erased());
    }

    #[test]
    fn decoder_runs_once_and_only_for_meaningful_registers() {
        use crate::chip::family::mask_mx1;
        use std::sync::atomic::{AtomicUsize, Ordering};

        static DECODER_CALLS: AtomicUsize = AtomicUsize::new(0);
        fn counting_printer(_c0: u32, _c1: u32, _c2: u32, _c3: u32) {
            DECODER_CALLS.fetch_add(1, Ordering::SeqCst);
        }
        static FAMILY: FamilyDescriptor = FamilyDescriptor {
            name: "mx1",
            boot_kbytes: 3,
            devcfg_offset: 0x0bf0,
            bytes_per_row: 128,
            print_devcfg: Some(counting_printer),
            word_mask: mask_mx1,
            pe_image: None,
            pe_nwords: 0,
            pe_version: 0,
        };

        let mut mock = MockAdapter::default();
        // Erased chip: DEVCFG0 reads 0x7FFFFFFF, the rest 0xFFFFFFFF.
        mock.words.insert(0x1FC0_0BFC, 0x7FFF_FFFF);
        report(&mut mock, &FAMILY).unwrap();
        assert_eq!(DECODER_CALLS.load(Ordering::SeqCst), 0);

        // All-zero register set is equally silent.
        for offset in [0, 4, 8, 12] {
            mock.words.insert(0x1FC0_0BF0 + offset, 0);
        }
        report(&mut mock, &FAMILY).unwrap();
        assert_eq!(DECODER_CALLS.load(Ordering::SeqCst), 0);

        // Anything else decodes exactly once per report.
        mock.words.insert(0x1FC0_0BF0, 0x3AFF_FFFF);
        mock.words.insert(0x1FC0_0BF4, 0xFFF9_FFD9);
        mock.words.insert(0x1FC0_0BF8, 0xFF74_FFD9);
        mock.words.insert(0x1FC0_0BFC, 0x7FFF_FFF7);
        report(&mut mock, &FAMILY).unwrap();
        assert_eq!(DECODER_CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn word_programs_go_lowest_offset_first() {
        let mut mock = MockAdapter::default();
        let cfg = ConfigWords {
            devcfg0: 0xAAAA_0000,
            devcfg1: 0xBBBB_1111,
            devcfg2: 0xCCCC_2222,
            devcfg3: 0xDDDD_3333,
        };
        program(&mut mock, &FAMILY_MX1, &cfg).unwrap();
        assert_eq!(
            mock.programs.borrow().as_slice(),
            &[
                (0x1FC0_0BF0, 0xDDDD_3333),
                (0x1FC0_0BF4, 0xCCCC_2222),
                (0x1FC0_0BF8, 0xBBBB_1111),
                (0x1FC0_0BFC, 0xAAAA_0000),
            ]
        );
        assert!(mock.quads.borrow().is_empty());
    }

    #[test]
    fn mz_programs_all_four_words_atomically() {
        let mut mock = MockAdapter {
            quad_supported: true,
            ..Default::default()
        };
        let cfg = ConfigWords {
            devcfg0: 0xAAAA_0000,
            devcfg1: 0xBBBB_1111,
            devcfg2: 0xCCCC_2222,
            devcfg3: 0xDDDD_3333,
        };
        program(&mut mock, &FAMILY_MZ, &cfg).unwrap();
        assert!(mock.programs.borrow().is_empty());
        assert_eq!(
            mock.quads.borrow().as_slice(),
            &[(
                0x1FC0_FFC0,
                [0xDDDD_3333, 0xCCCC_2222, 0xBBBB_1111, 0xAAAA_0000]
            )]
        );
    }

    #[test]
    fn mz_without_quad_support_is_an_error() {
        let mut mock = MockAdapter::default();
        let cfg = ConfigWords {
            devcfg0: 0,
            devcfg1: 0,
            devcfg2: 0,
            devcfg3: 0,
        };
        let err = program(&mut mock, &FAMILY_MZ, &cfg).unwrap_err();
        assert!(matches!(err, Error::UnsupportedOperation(_)));
    }

    #[test]
    fn families_without_registers_are_silent_noops() {
        let mut mock = MockAdapter::default();
        let cfg = ConfigWords {
            devcfg0: 1,
            devcfg1: 2,
            devcfg2: 3,
            devcfg3: 4,
        };
        program(&mut mock, &FAMILY_BOOTLOADER, &cfg).unwrap();
        assert!(mock.programs.borrow().is_empty());
        report(&mut mock, &FAMILY_BOOTLOADER).unwrap();
    }
}
