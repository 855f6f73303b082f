//! Runtime variant registry
//!
//! Wraps the built-in variant table in a container that supports
//! identifier lookup and run-time extension from configuration files.

use crate::error::{Error, Result};
use crate::chip::family::FamilyDescriptor;
use crate::chip::variants::{VariantEntry, BUILTIN_VARIANTS};

/// Upper bound on registry size, built-in rows included.
pub const VARIANT_CAPACITY: usize = 1000;

/// Ordered collection of chip variants.
///
/// Lookup walks the table front to back and returns the first entry
/// whose identifier matches with the revision bits masked out, so
/// earlier rows shadow later ones.
#[derive(Debug, Clone)]
pub struct VariantRegistry {
    entries: Vec<VariantEntry>,
    capacity: usize,
}

impl VariantRegistry {
    /// Registry seeded with the built-in table.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_VARIANTS.to_vec(),
            capacity: VARIANT_CAPACITY,
        }
    }

    /// Empty registry with an explicit capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Finds the variant for a device identifier read from silicon.
    pub fn lookup(&self, id: u32) -> Option<&VariantEntry> {
        self.entries.iter().find(|e| e.matches(id))
    }

    /// Registers a variant, replacing the definition of an existing
    /// identifier in place or appending a new row.
    ///
    /// Replacement compares the full identifier, not the masked one,
    /// and keeps the row's position so lookup order is stable.
    pub fn register_or_update(
        &mut self,
        devid: u32,
        name: String,
        flash_kbytes: u32,
        family: &'static FamilyDescriptor,
    ) -> Result<()> {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.devid == devid) {
            entry.name = name.into();
            entry.flash_kbytes = flash_kbytes;
            entry.family = family;
            return Ok(());
        }
        if self.entries.len() >= self.capacity {
            return Err(Error::RegistryFull(self.capacity));
        }
        self.entries.push(VariantEntry {
            devid,
            name: name.into(),
            flash_kbytes,
            family,
        });
        Ok(())
    }

    /// All variants in lookup order.
    pub fn entries(&self) -> &[VariantEntry] {
        &self.entries
    }

    /// Number of registered variants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the registry holds no variants.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for VariantRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chip::family::{FAMILY_MX1, FAMILY_MZ};

    #[test]
    fn builtin_lookup_resolves_a_known_chip() {
        let registry = VariantRegistry::builtin();
        let entry = registry.lookup(0x04A07053).unwrap();
        assert_eq!(entry.name, "MX110F016B");
        assert_eq!(entry.flash_kbytes, 16);
        assert_eq!(entry.family.devcfg_offset, 0x0bf0);
    }

    #[test]
    fn lookup_ignores_revision_bits() {
        let registry = VariantRegistry::builtin();
        let entry = registry.lookup(0xF4A07053).unwrap();
        assert_eq!(entry.name, "MX110F016B");
    }

    #[test]
    fn unknown_id_finds_nothing() {
        let registry = VariantRegistry::builtin();
        assert!(registry.lookup(0x12345678).is_none());
    }

    #[test]
    fn first_match_wins_on_duplicate_ids() {
        let mut registry = VariantRegistry::with_capacity(4);
        registry
            .register_or_update(0x1111053, "FIRST".into(), 128, &FAMILY_MX1)
            .unwrap();
        // Same masked id, different revision field, so it appends.
        registry
            .register_or_update(0xA1111053, "SECOND".into(), 256, &FAMILY_MZ)
            .unwrap();
        assert_eq!(registry.len(), 2);
        let entry = registry.lookup(0x1111053).unwrap();
        assert_eq!(entry.name, "FIRST");
    }

    #[test]
    fn update_replaces_in_place() {
        let mut registry = VariantRegistry::builtin();
        let before = registry.len();
        registry
            .register_or_update(0x4A07053, "CUSTOM16".into(), 32, &FAMILY_MZ)
            .unwrap();
        assert_eq!(registry.len(), before);
        let entry = registry.lookup(0x04A07053).unwrap();
        assert_eq!(entry.name, "CUSTOM16");
        assert_eq!(entry.flash_kbytes, 32);
        assert!(std::ptr::eq(entry.family, &FAMILY_MZ));
    }

    #[test]
    fn append_records_the_identifier() {
        let mut registry = VariantRegistry::builtin();
        let before = registry.len();
        registry
            .register_or_update(0x7FFF053, "NEWCHIP".into(), 64, &FAMILY_MX1)
            .unwrap();
        assert_eq!(registry.len(), before + 1);
        let entry = registry.lookup(0x07FFF053).unwrap();
        assert_eq!(entry.name, "NEWCHIP");
        assert_eq!(entry.devid, 0x7FFF053);
    }

    #[test]
    fn append_past_capacity_fails() {
        let mut registry = VariantRegistry::with_capacity(2);
        registry
            .register_or_update(0x0000001, "A".into(), 16, &FAMILY_MX1)
            .unwrap();
        registry
            .register_or_update(0x0000002, "B".into(), 16, &FAMILY_MX1)
            .unwrap();
        let err = registry
            .register_or_update(0x0000003, "C".into(), 16, &FAMILY_MX1)
            .unwrap_err();
        assert!(matches!(err, Error::RegistryFull(2)));
        // Updating an existing row still works at capacity.
        registry
            .register_or_update(0x0000001, "A2".into(), 32, &FAMILY_MX1)
            .unwrap();
        assert_eq!(registry.lookup(0x0000001).unwrap().name, "A2");
    }

    #[test]
    fn builtin_duplicate_resolves_to_the_earlier_row() {
        let registry = VariantRegistry::builtin();
        let dup_positions: Vec<usize> = registry
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, e)| e.devid == 0x5F69053)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(dup_positions.len(), 2);
        let hit = registry.lookup(0x5F69053).unwrap();
        assert!(std::ptr::eq(hit, &registry.entries()[dup_positions[0]]));
    }
}
