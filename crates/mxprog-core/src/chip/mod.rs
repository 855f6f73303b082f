//! Chip families, variants and the runtime registry
//!
//! This module describes the supported chip models: family descriptors
//! with flash geometry and programming-executive parameters, the
//! built-in variant table, and a registry that resolves device
//! identifiers and loads extra variants from configuration files.

pub mod family;

mod config;
mod registry;
mod variants;

pub use family::{FamilyDescriptor, BOOT_FLASH_BASE, PROGRAM_FLASH_BASE};
pub use registry::{VariantRegistry, VARIANT_CAPACITY};
pub use variants::{VariantEntry, BUILTIN_VARIANTS, DEVICE_ID_MASK};
