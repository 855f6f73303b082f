//! Flash read/program/verify engine
//!
//! The engine drives an [`Adapter`] through whole-image operations. It
//! owns address translation, chunking, and the word-level compare; the
//! adapter only sees physical addresses and bounded transfers.

use crate::adapter::{Adapter, AdapterCaps};
use crate::chip::family::FamilyDescriptor;
use crate::error::{Error, Result};

/// Largest read transfer handed to the adapter, in words.
pub const READ_CHUNK_WORDS: usize = 256;

/// Largest block-program transfer handed to the adapter, in words.
pub const PROGRAM_CHUNK_WORDS: usize = 256;

/// Largest read-back unit during software verification, in words.
pub const VERIFY_CHUNK_WORDS: usize = 512;

/// Erased state of a flash word (all bits set).
const ERASED_WORD: u32 = 0xFFFF_FFFF;

// =============================================================================
// Address translation
// =============================================================================

/// Translates a KSEG0/KSEG1 virtual address to physical.
///
/// `0x80000000..0xA0000000` and `0xA0000000..0xC0000000` both map to
/// the low 512 MB; anything else passes through unchanged. Applied once
/// at the entry of every engine operation, never re-applied internally.
pub fn virt_to_phys(addr: u32) -> u32 {
    if (0x8000_0000..0xA000_0000).contains(&addr) {
        return addr - 0x8000_0000;
    }
    if (0xA000_0000..0xC000_0000).contains(&addr) {
        return addr - 0xA000_0000;
    }
    addr
}

// =============================================================================
// Whole-image operations
// =============================================================================

/// Reads `data.len()` consecutive words starting at `addr`.
///
/// The transfer is split into chunks of at most [`READ_CHUNK_WORDS`];
/// the caller always receives exactly the requested word count or an
/// error.
pub fn read<A: Adapter + ?Sized>(adapter: &mut A, addr: u32, data: &mut [u32]) -> Result<()> {
    read_phys(adapter, virt_to_phys(addr), data)
}

/// Chunked read on an already-translated address. Shared by [`read`]
/// and the verify read-back.
fn read_phys<A: Adapter + ?Sized>(adapter: &mut A, mut addr: u32, data: &mut [u32]) -> Result<()> {
    for chunk in data.chunks_mut(READ_CHUNK_WORDS) {
        adapter.read_block(addr, chunk)?;
        addr += (chunk.len() as u32) << 2;
    }
    Ok(())
}

/// True when every word is in the erased state.
fn is_empty_block(data: &[u32]) -> bool {
    data.iter().all(|&w| w == ERASED_WORD)
}

/// Programs `data` starting at `addr`. The region must be erased.
///
/// Prefers the adapter's bulk block path in chunks of at most
/// [`PROGRAM_CHUNK_WORDS`]. Without it, falls back to row programming:
/// rows whose content is entirely `0xFFFFFFFF` are skipped, and a final
/// partial row is padded with `0xFFFFFFFF` so the adapter always
/// receives exactly one full row.
pub fn program<A: Adapter + ?Sized>(
    adapter: &mut A,
    family: &FamilyDescriptor,
    addr: u32,
    data: &[u32],
) -> Result<()> {
    let mut addr = virt_to_phys(addr);
    let caps = adapter.capabilities();

    if caps.contains(AdapterCaps::PROGRAM_BLOCK) {
        for chunk in data.chunks(PROGRAM_CHUNK_WORDS) {
            adapter.program_block(addr, chunk)?;
            addr += (chunk.len() as u32) << 2;
        }
        return Ok(());
    }

    if !caps.contains(AdapterCaps::PROGRAM_ROW) {
        return Err(Error::UnsupportedOperation("programming"));
    }

    let words_per_row = family.words_per_row() as usize;
    for chunk in data.chunks(words_per_row) {
        if chunk.len() == words_per_row {
            if !is_empty_block(chunk) {
                adapter.program_row(addr, chunk)?;
            }
        } else {
            let mut row = vec![ERASED_WORD; words_per_row];
            row[..chunk.len()].copy_from_slice(chunk);
            if !is_empty_block(&row) {
                adapter.program_row(addr, &row)?;
            }
        }
        addr += (chunk.len() as u32) << 2;
    }
    Ok(())
}

/// Compares flash contents at `addr` against `data`.
///
/// With a native verify capability the comparison happens on the
/// adapter. Otherwise the range is read back through the chunked read
/// path and compared word by word in units of at most
/// [`VERIFY_CHUNK_WORDS`]; the expected value is first passed through
/// the family word mask, keyed by the absolute address as the caller
/// supplied it, so unimplemented configuration bits never trip the
/// compare.
pub fn verify<A: Adapter + ?Sized>(
    adapter: &mut A,
    family: &FamilyDescriptor,
    addr: u32,
    data: &[u32],
) -> Result<()> {
    if adapter.capabilities().contains(AdapterCaps::VERIFY_BLOCK) {
        return adapter.verify_block(virt_to_phys(addr), data);
    }

    let mut phys = virt_to_phys(addr);
    let mut absolute = addr;
    let mut block = vec![0u32; VERIFY_CHUNK_WORDS];
    for chunk in data.chunks(VERIFY_CHUNK_WORDS) {
        let readback = &mut block[..chunk.len()];
        read_phys(adapter, phys, readback)?;
        for (i, (&expected, &actual)) in chunk.iter().zip(readback.iter()).enumerate() {
            let masked = (family.word_mask)(absolute + ((i as u32) << 2), expected);
            if actual != masked {
                return Err(Error::VerifyMismatch {
                    addr: absolute + ((i as u32) << 2),
                    expected: masked,
                    actual,
                });
            }
        }
        phys += (chunk.len() as u32) << 2;
        absolute += (chunk.len() as u32) << 2;
    }
    Ok(())
}

/// Erases all of flash through the adapter's chip-erase operation.
///
/// Adapters without one erase implicitly during block programming, so
/// a missing capability is a successful no-op.
pub fn erase<A: Adapter + ?Sized>(adapter: &mut A) -> Result<()> {
    if adapter.capabilities().contains(AdapterCaps::ERASE_CHIP) {
        adapter.erase_chip()?;
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
