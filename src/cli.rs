//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse a string as a hex or decimal u32
fn parse_hex_u32(s: &str) -> Result<u32, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).map_err(|e| format!("Invalid hex value: {}", e))
    } else {
        s.parse::<u32>().map_err(|e| format!("Invalid number: {}", e))
    }
}

/// Generate dynamic help text for the port argument
fn port_help() -> String {
    format!(
        "Port descriptor: [prefix:]device or prefix:vid:pid[:serial] [protocols: {}]",
        mxprog_target::protocol_names_short()
    )
}

#[derive(Parser)]
#[command(name = "mxprog")]
#[command(author, version, about = "MX/MZ-series microcontroller flash programmer", long_about = None)]
pub struct Cli {
    /// Port descriptor (omit to autodetect USB adapters)
    #[arg(short, long, global = true, help = port_help())]
    pub port: Option<String>,

    /// Baud rate for serial adapters
    #[arg(short, long, global = true, default_value_t = 115_200)]
    pub baud: u32,

    /// Number of adapter open attempts
    #[arg(short, long, global = true, default_value_t = 1)]
    pub retries: u32,

    /// Variant configuration file (RON format)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Power the target down when the session ends successfully
    #[arg(long, global = true)]
    pub power_off: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Identify the chip and report its configuration
    Probe,

    /// Read program flash into a raw binary file
    Read {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Start address (hex with 0x) [default: program flash base]
        #[arg(long, value_parser = parse_hex_u32)]
        addr: Option<u32>,

        /// Number of 32-bit words [default: whole program flash]
        #[arg(long, value_parser = parse_hex_u32)]
        nwords: Option<u32>,
    },

    /// Write a raw binary file to flash
    Write {
        /// Input file path
        input: PathBuf,

        /// Start address (hex with 0x) [default: program flash base]
        #[arg(long, value_parser = parse_hex_u32)]
        addr: Option<u32>,

        /// Skip the chip erase before programming
        #[arg(long)]
        no_erase: bool,

        /// Skip the read-back verification
        #[arg(long)]
        no_verify: bool,

        /// Programming-executive payload to upload first
        #[arg(long, value_name = "FILE")]
        executive: Option<PathBuf>,
    },

    /// Erase the whole chip
    Erase,

    /// Verify flash contents against a raw binary file
    Verify {
        /// Input file path to verify against
        input: PathBuf,

        /// Start address (hex with 0x) [default: program flash base]
        #[arg(long, value_parser = parse_hex_u32)]
        addr: Option<u32>,
    },

    /// Configuration register operations
    #[command(subcommand)]
    Devcfg(DevcfgCommands),

    /// List the known chip variants
    ListVariants {
        /// Filter by family name (mx1, xlp, mx3, mz, bootloader)
        #[arg(long)]
        family: Option<String>,
    },

    /// List compiled-in adapter protocols
    ListAdapters,
}

/// Configuration-register subcommands
#[derive(Subcommand)]
pub enum DevcfgCommands {
    /// Read and decode the four configuration words
    Read,

    /// Program the four configuration words
    Write {
        /// DEVCFG0 value (hex with 0x)
        #[arg(value_parser = parse_hex_u32)]
        w0: u32,

        /// DEVCFG1 value
        #[arg(value_parser = parse_hex_u32)]
        w1: u32,

        /// DEVCFG2 value
        #[arg(value_parser = parse_hex_u32)]
        w2: u32,

        /// DEVCFG3 value
        #[arg(value_parser = parse_hex_u32)]
        w3: u32,
    },
}
