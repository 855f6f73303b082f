//! mxprog-core - Core library for MX/MZ-series microcontroller flash programming
//!
//! This crate provides the hardware-independent half of the programmer:
//! the chip family and variant database, the debug-adapter trait, the
//! flash read/program/verify engine, and the configuration-register
//! controller. Adapter implementations and session handling live in
//! separate crates on top of it.
//!
//! # Example
//!
//! ```ignore
//! use mxprog_core::{flash, Adapter};
//!
//! fn dump<A: Adapter>(adapter: &mut A, nwords: usize) -> mxprog_core::Result<Vec<u32>> {
//!     let mut data = vec![0u32; nwords];
//!     flash::read(adapter, 0x1d000000, &mut data)?;
//!     Ok(data)
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod adapter;
pub mod chip;
pub mod devcfg;
pub mod error;
pub mod executive;
pub mod flash;

pub use adapter::{Adapter, AdapterCaps};
pub use error::{Error, Result};
