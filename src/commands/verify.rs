//! Verify command implementation

use std::path::Path;

use mxprog_core::chip::VariantRegistry;

use crate::cli::Cli;

/// Compare flash contents against a raw binary file.
pub fn run(
    cli: &Cli,
    registry: &VariantRegistry,
    input: &Path,
    addr: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let image = super::load_words(input)?;
    if image.is_empty() {
        return Err(format!("{}: empty image", input.display()).into());
    }

    super::with_target(cli, registry, |target| {
        let addr = addr.unwrap_or_else(|| target.flash_addr());
        super::verify_words(target, addr, &image, cli.quiet)?;
        if !cli.quiet {
            println!("Verification passed!");
        }
        Ok(())
    })
}
