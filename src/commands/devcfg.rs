//! Configuration-register command implementations

use mxprog_core::chip::VariantRegistry;
use mxprog_core::devcfg::ConfigWords;

use crate::cli::Cli;

/// Read the four configuration words and print them through the family
/// decoder. Unlike probe, an explicit read also reports erased and
/// all-zero register sets.
pub fn run_read(cli: &Cli, registry: &VariantRegistry) -> Result<(), Box<dyn std::error::Error>> {
    super::with_target(cli, registry, |target| {
        let Some(cfg) = target.read_config()? else {
            println!("{}: no configuration registers", target.chip_name());
            return Ok(());
        };
        if cfg.is_erased() {
            println!("Configuration registers are erased");
            return Ok(());
        }
        if cfg.is_all_zero() {
            println!("Configuration registers read as zero");
            return Ok(());
        }
        if let Some(print) = target.family().print_devcfg {
            println!("Configuration:");
            print(cfg.devcfg0, cfg.devcfg1, cfg.devcfg2, cfg.devcfg3);
        }
        Ok(())
    })
}

/// Program the four configuration words. The register write path is
/// version-gated: newer families take one atomic quad-word program,
/// older families four single-word programs.
pub fn run_write(
    cli: &Cli,
    registry: &VariantRegistry,
    w0: u32,
    w1: u32,
    w2: u32,
    w3: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    super::with_target(cli, registry, |target| {
        if target.family().devcfg_base().is_none() {
            return Err(format!(
                "{}: no configuration registers",
                target.chip_name()
            )
            .into());
        }

        let cfg = ConfigWords {
            devcfg0: w0,
            devcfg1: w1,
            devcfg2: w2,
            devcfg3: w3,
        };
        target.program_config(&cfg)?;
        if !cli.quiet {
            println!("Configuration registers programmed");
        }
        Ok(())
    })
}
