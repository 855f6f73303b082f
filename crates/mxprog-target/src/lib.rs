//! Target acquisition and session handling
//!
//! This crate turns a port descriptor into an identified, ready-to-use
//! target. The CLI should only interact with types from this crate and
//! the chip registry; adapter crates plug in underneath through the
//! opener tables.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     CLI (bin/mxprog)                     │
//! │  - Imports mxprog-target and mxprog-core (registry)      │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                mxprog-target (this crate)                │
//! │  - PortSpec: descriptor grammar                          │
//! │  - opener tables + bounded-retry acquisition             │
//! │  - Target: owns the adapter, forwards engine operations  │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!             ┌───────────────┴──────────────┐
//!             ▼                              ▼
//! ┌─────────────────────────┐   ┌─────────────────────────┐
//! │      mxprog-core        │   │     Adapter crates      │
//! │  - Adapter trait        │   │  - dummy (emulator)     │
//! │  - flash engine         │   │  - implement Adapter    │
//! │  - variant registry     │   │                         │
//! └─────────────────────────┘   └─────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use mxprog_core::chip::VariantRegistry;
//! use mxprog_target::Target;
//!
//! let registry = VariantRegistry::builtin();
//! let mut target = Target::open(Some("dummy:"), 115_200, 1, &registry)?;
//! println!("{} id {:08x}", target.chip_name(), target.idcode());
//! target.close(true);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

mod acquire;
mod port;
mod target;

pub use acquire::{
    open_adapter, protocol_names_short, serial_protocols, usb_protocols, AdapterHandle,
    SerialProtocol, UsbProtocol,
};
pub use port::PortSpec;
pub use target::Target;
