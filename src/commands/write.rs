//! Write command implementation

use std::path::Path;

use mxprog_core::chip::VariantRegistry;
use mxprog_core::executive::Executive;

use crate::cli::Cli;

/// Program a raw binary file into flash: optional executive upload,
/// chip erase unless suppressed, chunked program, read-back verify
/// unless suppressed.
#[allow(clippy::too_many_arguments)]
pub fn run(
    cli: &Cli,
    registry: &VariantRegistry,
    input: &Path,
    addr: Option<u32>,
    no_erase: bool,
    no_verify: bool,
    executive: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let image = super::load_words(input)?;
    if image.is_empty() {
        return Err(format!("{}: empty image", input.display()).into());
    }
    let exec = executive.map(Executive::load_file).transpose()?;

    super::with_target(cli, registry, |target| {
        let addr = addr.unwrap_or_else(|| target.flash_addr());
        if addr == target.flash_addr() && image.len() * 4 > target.flash_bytes() as usize {
            return Err(format!(
                "File size ({} bytes) exceeds flash size ({} bytes)",
                image.len() * 4,
                target.flash_bytes()
            )
            .into());
        }

        if let Some(exec) = &exec {
            target.use_executive(exec)?;
        }

        if !no_erase {
            let pb = super::spinner("Erasing...", cli.quiet);
            target.erase()?;
            pb.finish_with_message("Erase complete");
        }

        let pb = super::progress_bar((image.len() as u64) * 4, "Programming", cli.quiet);
        for done in (0..image.len()).step_by(super::SLICE_WORDS) {
            let n = super::SLICE_WORDS.min(image.len() - done);
            target.program(addr + ((done as u32) << 2), &image[done..done + n])?;
            pb.set_position(((done + n) as u64) * 4);
        }
        pb.finish_with_message("Program complete");

        if !no_verify {
            super::verify_words(target, addr, &image, cli.quiet)?;
        }

        if !cli.quiet {
            println!("Programmed {} words at 0x{:08X}", image.len(), addr);
        }
        Ok(())
    })
}
