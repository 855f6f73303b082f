//! Read command implementation

use std::path::Path;

use mxprog_core::chip::VariantRegistry;

use crate::cli::Cli;

/// Read flash into a raw little-endian binary file. Defaults to the
/// whole program flash area of the identified chip.
pub fn run(
    cli: &Cli,
    registry: &VariantRegistry,
    output: &Path,
    addr: Option<u32>,
    nwords: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    super::with_target(cli, registry, |target| {
        let addr = addr.unwrap_or_else(|| target.flash_addr());
        let nwords = nwords.unwrap_or_else(|| target.flash_bytes() / 4) as usize;
        if nwords == 0 {
            return Err("nothing to read".into());
        }

        let mut image = vec![0u32; nwords];
        let pb = super::progress_bar((nwords as u64) * 4, "Reading", cli.quiet);
        for done in (0..nwords).step_by(super::SLICE_WORDS) {
            let n = super::SLICE_WORDS.min(nwords - done);
            target.read(addr + ((done as u32) << 2), &mut image[done..done + n])?;
            pb.set_position(((done + n) as u64) * 4);
        }
        pb.finish_with_message("Read complete");

        super::save_words(output, &image)?;
        if !cli.quiet {
            println!("Wrote {} bytes to {:?}", image.len() * 4, output);
        }
        Ok(())
    })
}
