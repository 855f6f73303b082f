//! Probe command implementation

use mxprog_core::chip::VariantRegistry;

use crate::cli::Cli;

/// Open the target, print what was identified, and report the
/// configuration registers. Quiet mode still exercises the whole
/// open/identify path but prints nothing.
pub fn run(cli: &Cli, registry: &VariantRegistry) -> Result<(), Box<dyn std::error::Error>> {
    super::with_target(cli, registry, |target| {
        if cli.quiet {
            return Ok(());
        }

        let caps: Vec<&str> = target
            .capabilities()
            .iter_names()
            .map(|(name, _)| name)
            .collect();

        println!("Target Information");
        println!("==================");
        println!();
        println!("Chip:            {}", target.chip_name());
        println!("Device id:       {:08X}", target.idcode());
        println!("Family:          {}", target.family().name);
        println!(
            "Program flash:   {} KB at 0x{:08X}",
            target.flash_bytes() / 1024,
            target.flash_addr()
        );
        println!("Boot flash:      {} KB", target.boot_bytes() / 1024);
        println!("Row size:        {} bytes", target.block_size());
        println!("Capabilities:    {}", caps.join(", "));
        println!();
        target.report_config()?;
        Ok(())
    })
}
