//! Erase command implementation

use mxprog_core::chip::VariantRegistry;

use crate::cli::Cli;

/// Erase the whole chip. Adapters without a chip-erase operation erase
/// implicitly during programming, so this can be a quick no-op.
pub fn run(cli: &Cli, registry: &VariantRegistry) -> Result<(), Box<dyn std::error::Error>> {
    super::with_target(cli, registry, |target| {
        let pb = super::spinner("Erasing...", cli.quiet);
        target.erase()?;
        pb.finish_with_message("Erase complete");
        Ok(())
    })
}
