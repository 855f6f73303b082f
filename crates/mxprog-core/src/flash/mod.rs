//! High-level flash operations
//!
//! Whole-image read, program, verify and erase on top of the adapter
//! trait, with virtual-to-physical address translation and transfer
//! chunking.

mod operations;

pub use operations::*;
