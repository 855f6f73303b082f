//! mxprog - MX/MZ-series microcontroller flash programmer
//!
//! Programs 32-bit MX/MZ-series microcontrollers through an external
//! debug adapter: a serial bootloader link, a USB programmer, or the
//! in-memory emulator. The chip model is identified from its device
//! identifier register; per-family flash geometry and configuration
//! register placement come from the built-in variant table, which a
//! RON configuration file can extend at run time.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands, DevcfgCommands};
use mxprog_core::chip::VariantRegistry;

fn main() {
    let cli = Cli::parse();

    // Map verbosity flags to the env_logger default; RUST_LOG still
    // overrides.
    let level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(&cli) {
        eprintln!("mxprog: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = VariantRegistry::builtin();
    if let Some(path) = &cli.config {
        let applied = registry.load_file(path)?;
        log::info!("Applied {} variant entries from {:?}", applied, path);
    }

    match &cli.command {
        Commands::Probe => commands::probe::run(cli, &registry),
        Commands::Read {
            output,
            addr,
            nwords,
        } => commands::read::run(cli, &registry, output, *addr, *nwords),
        Commands::Write {
            input,
            addr,
            no_erase,
            no_verify,
            executive,
        } => commands::write::run(
            cli,
            &registry,
            input,
            *addr,
            *no_erase,
            *no_verify,
            executive.as_deref(),
        ),
        Commands::Erase => commands::erase::run(cli, &registry),
        Commands::Verify { input, addr } => commands::verify::run(cli, &registry, input, *addr),
        Commands::Devcfg(subcmd) => match subcmd {
            DevcfgCommands::Read => commands::devcfg::run_read(cli, &registry),
            DevcfgCommands::Write { w0, w1, w2, w3 } => {
                commands::devcfg::run_write(cli, &registry, *w0, *w1, *w2, *w3)
            }
        },
        Commands::ListVariants { family } => {
            commands::list::list_variants(&registry, family.as_deref());
            Ok(())
        }
        Commands::ListAdapters => {
            commands::list::list_adapters();
            Ok(())
        }
    }
}
