//! Variant configuration files
//!
//! Extends a [`VariantRegistry`] at run time from RON files, so chips
//! missing from the built-in table can be described without a rebuild.
//!
//! ```ron
//! (
//!     variants: [
//!         (devid: 0x7654053, name: "MX999F512Z", family: "MX3", flash_kbytes: 512),
//!     ],
//! )
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::chip::family::family_by_config_name;
use crate::chip::registry::VariantRegistry;
use crate::error::{Error, Result};

/// Top-level document.
#[derive(Debug, Deserialize)]
struct VariantFileDef {
    variants: Vec<VariantDef>,
}

/// One variant row in RON format.
#[derive(Debug, Deserialize)]
struct VariantDef {
    devid: u32,
    name: String,
    family: String,
    flash_kbytes: u32,
}

impl VariantRegistry {
    /// Loads variant definitions from a RON file.
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let content = fs::read_to_string(path)?;
        self.load_ron(&content)
    }

    /// Loads variant definitions from a RON string and returns the
    /// number of rows applied.
    ///
    /// Rows naming an unknown family are logged and skipped; the rest
    /// of the file still applies.
    pub fn load_ron(&mut self, content: &str) -> Result<usize> {
        let file: VariantFileDef =
            ron::from_str(content).map_err(|e| Error::Config(e.to_string()))?;

        let mut applied = 0;
        for def in file.variants {
            match self.apply(def) {
                Ok(()) => applied += 1,
                Err(e) if e.is_recoverable() => log::warn!("{}", e),
                Err(e) => return Err(e),
            }
        }
        Ok(applied)
    }

    fn apply(&mut self, def: VariantDef) -> Result<()> {
        let family = family_by_config_name(&def.family).ok_or(Error::UnknownFamily {
            name: def.name.clone(),
            family: def.family,
        })?;
        self.register_or_update(def.devid, def.name, def.flash_kbytes, family)
    }
}
