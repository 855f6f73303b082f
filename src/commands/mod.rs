//! CLI command implementations
//!
//! Every command that talks to hardware goes through [`with_target`],
//! which opens the session, runs the command body, and releases the
//! adapter on both exit paths: successes honor `--power-off`, failures
//! always power the target down.

pub mod devcfg;
pub mod erase;
pub mod list;
pub mod probe;
pub mod read;
pub mod verify;
pub mod write;

use indicatif::{ProgressBar, ProgressStyle};
use mxprog_core::chip::VariantRegistry;
use mxprog_target::Target;
use std::path::Path;
use std::time::Duration;

use crate::cli::Cli;

/// Words handed to the engine between progress-bar updates (4 KiB).
/// Chunking down to the adapter's transfer limits happens inside the
/// engine.
pub const SLICE_WORDS: usize = 1024;

/// Open a session, run `f` against it, and release the adapter.
pub fn with_target<F>(
    cli: &Cli,
    registry: &VariantRegistry,
    f: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(&mut Target) -> Result<(), Box<dyn std::error::Error>>,
{
    let mut target = Target::open(cli.port.as_deref(), cli.baud, cli.retries, registry)?;
    match f(&mut target) {
        Ok(()) => {
            target.close(!cli.power_off);
            Ok(())
        }
        Err(e) => {
            target.close(false);
            Err(e)
        }
    }
}

// =============================================================================
// Progress reporting
// =============================================================================

/// Create a byte-counting progress bar for one operation phase.
pub fn progress_bar(total_bytes: u64, phase: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total_bytes);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{bytes}}/{{total_bytes}} ({{bytes_per_sec}}, {{eta}}) {}",
                phase
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

/// Create a spinner for operations without a meaningful byte count.
pub fn spinner(message: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

// =============================================================================
// Image file I/O
// =============================================================================

/// Load a raw binary image as little-endian words, padding a trailing
/// partial word with 0xFF bytes.
pub fn load_words(path: &Path) -> Result<Vec<u32>, Box<dyn std::error::Error>> {
    let mut bytes = std::fs::read(path)?;
    log::info!("Read {} bytes from {:?}", bytes.len(), path);
    let rem = bytes.len() % 4;
    if rem != 0 {
        bytes.resize(bytes.len() + (4 - rem), 0xFF);
    }
    let words: Vec<u32> = bytes
        .chunks_exact(4)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();
    Ok(words)
}

/// Save words as a raw little-endian binary image.
pub fn save_words(path: &Path, words: &[u32]) -> Result<(), Box<dyn std::error::Error>> {
    let mut bytes = Vec::with_capacity(words.len() * 4);
    for w in words {
        bytes.extend_from_slice(&w.to_le_bytes());
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Verify flash at `addr` against `image` with a progress bar.
pub fn verify_words(
    target: &mut Target,
    addr: u32,
    image: &[u32],
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = progress_bar((image.len() as u64) * 4, "Verifying", quiet);
    for done in (0..image.len()).step_by(SLICE_WORDS) {
        let n = SLICE_WORDS.min(image.len() - done);
        if let Err(e) = target.verify(addr + ((done as u32) << 2), &image[done..done + n]) {
            pb.abandon_with_message("Verification failed!");
            return Err(e.into());
        }
        pb.set_position(((done + n) as u64) * 4);
    }
    pb.finish_with_message("Verification passed");
    Ok(())
}
