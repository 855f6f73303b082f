//! Chip family descriptors
//!
//! A family groups chip models that share flash geometry, the
//! configuration-register layout, and programming-executive
//! requirements. Descriptors are immutable statics; variant table
//! entries reference them.

/// Physical base address of program flash.
pub const PROGRAM_FLASH_BASE: u32 = 0x1d00_0000;

/// Physical base address of boot flash. The configuration registers
/// live at a family-specific offset from here.
pub const BOOT_FLASH_BASE: u32 = 0x1fc0_0000;

/// Clears configuration bits that have no physical implementation.
///
/// Keyed by the absolute word address as the caller supplied it
/// (virtual segment addresses included); applied to the *expected*
/// value during verification only.
pub type WordMaskFn = fn(addr: u32, word: u32) -> u32;

/// Decodes the four configuration words for display. Arguments are the
/// raw words in register order DEVCFG0..DEVCFG3.
pub type DevcfgPrintFn = fn(cfg0: u32, cfg1: u32, cfg2: u32, cfg3: u32);

/// Immutable description of one chip family.
#[derive(Debug)]
pub struct FamilyDescriptor {
    /// Short family name, also reported to the adapter after
    /// identification.
    pub name: &'static str,
    /// Boot flash size in kilobytes.
    pub boot_kbytes: u32,
    /// Offset of DEVCFG3 from [`BOOT_FLASH_BASE`]; 0 means the family
    /// has no configuration registers.
    pub devcfg_offset: u32,
    /// Smallest programmable unit in bytes.
    pub bytes_per_row: u32,
    /// Configuration decoder, if the family has one.
    pub print_devcfg: Option<DevcfgPrintFn>,
    /// Verification word mask.
    pub word_mask: WordMaskFn,
    /// Name of the programming-executive payload image, if the family
    /// uses one.
    pub pe_image: Option<&'static str>,
    /// Expected payload length in words.
    pub pe_nwords: u32,
    /// Programming-executive protocol version.
    pub pe_version: u32,
}

impl FamilyDescriptor {
    /// Row size in 32-bit words.
    pub fn words_per_row(&self) -> u32 {
        self.bytes_per_row / 4
    }

    /// Physical address of DEVCFG3 (the lowest-addressed configuration
    /// word), or `None` for families without configuration registers.
    pub fn devcfg_base(&self) -> Option<u32> {
        if self.devcfg_offset == 0 {
            None
        } else {
            Some(BOOT_FLASH_BASE + self.devcfg_offset)
        }
    }

    /// True when the family requires a programming executive.
    pub fn needs_executive(&self) -> bool {
        self.pe_nwords != 0
    }
}

/// DEVCFG0's top bit does not exist on this family and reads as zero.
pub fn mask_mx1(addr: u32, word: u32) -> u32 {
    if addr == 0x9FC0_0BFC {
        word & 0x7FFF_FFFF
    } else {
        word
    }
}

/// DEVCFG0's top bit does not exist on this family and reads as zero.
pub fn mask_mx3(addr: u32, word: u32) -> u32 {
    if addr == 0x9FC0_2FFC {
        word & 0x7FFF_FFFF
    } else {
        word
    }
}

/// Same DEVCFG3..0 placement as mx3, same unimplemented top bit.
pub fn mask_xlp(addr: u32, word: u32) -> u32 {
    if addr == 0x9FC0_2FFC {
        word & 0x7FFF_FFFF
    } else {
        word
    }
}

/// Every configuration bit is implemented; nothing to clear.
pub fn mask_identity(_addr: u32, word: u32) -> u32 {
    word
}

/// Fallback decoder shared by the built-in families: prints the raw
/// register values. Per-bit decoders can be substituted through
/// [`FamilyDescriptor::print_devcfg`].
pub fn print_devcfg_raw(cfg0: u32, cfg1: u32, cfg2: u32, cfg3: u32) {
    println!("    DEVCFG0 = {cfg0:08x}");
    println!("    DEVCFG1 = {cfg1:08x}");
    println!("    DEVCFG2 = {cfg2:08x}");
    println!("    DEVCFG3 = {cfg3:08x}");
}

/// MX1/2 series.
pub static FAMILY_MX1: FamilyDescriptor = FamilyDescriptor {
    name: "mx1",
    boot_kbytes: 3,
    devcfg_offset: 0x0bf0,
    bytes_per_row: 128,
    print_devcfg: Some(print_devcfg_raw),
    word_mask: mask_mx1,
    pe_image: Some("pemx1"),
    pe_nwords: 422,
    pe_version: 0x0301,
};

/// MX1/2 XLP series.
pub static FAMILY_XLP: FamilyDescriptor = FamilyDescriptor {
    name: "xlp",
    boot_kbytes: 12,
    devcfg_offset: 0x2ff0,
    bytes_per_row: 512,
    print_devcfg: Some(print_devcfg_raw),
    word_mask: mask_xlp,
    pe_image: Some("pemx3"),
    pe_nwords: 1044,
    pe_version: 0x0201,
};

/// MX3/4/5/6/7 series.
pub static FAMILY_MX3: FamilyDescriptor = FamilyDescriptor {
    name: "mx3",
    boot_kbytes: 12,
    devcfg_offset: 0x2ff0,
    bytes_per_row: 512,
    print_devcfg: Some(print_devcfg_raw),
    word_mask: mask_mx3,
    pe_image: Some("pemx3"),
    pe_nwords: 1044,
    pe_version: 0x0201,
};

/// MZ series.
pub static FAMILY_MZ: FamilyDescriptor = FamilyDescriptor {
    name: "mz",
    boot_kbytes: 80,
    devcfg_offset: 0xffc0,
    bytes_per_row: 2048,
    print_devcfg: Some(print_devcfg_raw),
    word_mask: mask_identity,
    pe_image: Some("pemz"),
    pe_nwords: 1052,
    pe_version: 0x0502,
};

/// Catch-all for targets reached through a resident bootloader. The
/// chip model is unknown, so the row size is the maximum of the other
/// families and the geometry comes from the adapter.
pub static FAMILY_BOOTLOADER: FamilyDescriptor = FamilyDescriptor {
    name: "bootloader",
    boot_kbytes: 80,
    devcfg_offset: 0,
    bytes_per_row: 1024,
    print_devcfg: None,
    word_mask: mask_identity,
    pe_image: None,
    pe_nwords: 0,
    pe_version: 0,
};

/// Resolves a family name from a configuration file.
///
/// Only `MX1`, `MX3` and `MZ` can be named; XLP parts are reachable
/// through the built-in table only, and the bootloader pseudo-family is
/// matched by its fixed identifier. Names are matched exactly,
/// uppercase.
pub fn family_by_config_name(name: &str) -> Option<&'static FamilyDescriptor> {
    match name {
        "MX1" => Some(&FAMILY_MX1),
        "MX3" => Some(&FAMILY_MX3),
        "MZ" => Some(&FAMILY_MZ),
        _ => None,
    }
}
