//! Built-in chip variant table
//!
//! Maps 28-bit device identifiers to chip names, flash sizes and
//! families. The table can be extended at run time from a
//! configuration file; see [`crate::chip::VariantRegistry`].

use std::borrow::Cow;

use super::family::{
    FamilyDescriptor, FAMILY_BOOTLOADER, FAMILY_MX1, FAMILY_MX3, FAMILY_MZ, FAMILY_XLP,
};

/// The revision/stepping field occupies the top four bits of the
/// identifier register and is ignored when matching.
pub const DEVICE_ID_MASK: u32 = 0x0FFF_FFFF;

/// One chip model.
#[derive(Debug, Clone)]
pub struct VariantEntry {
    /// Device identifier as read from silicon, revision bits excluded.
    pub devid: u32,
    /// Marketing name of the chip model.
    pub name: Cow<'static, str>,
    /// Program flash size in kilobytes; 0 means the size comes from
    /// the adapter (bootloader targets).
    pub flash_kbytes: u32,
    /// Family this model belongs to.
    pub family: &'static FamilyDescriptor,
}

impl VariantEntry {
    /// Builds a table row.
    pub const fn new(
        devid: u32,
        name: &'static str,
        flash_kbytes: u32,
        family: &'static FamilyDescriptor,
    ) -> Self {
        Self {
            devid,
            name: Cow::Borrowed(name),
            flash_kbytes,
            family,
        }
    }

    /// Identifier match with the revision bits masked out on both
    /// sides.
    pub fn matches(&self, id: u32) -> bool {
        (self.devid ^ id) & DEVICE_ID_MASK == 0
    }
}

/// Built-in variant table. Order is load-bearing: lookup returns the
/// first masked match.
pub static BUILTIN_VARIANTS: &[VariantEntry] = &[
    // MX1/2 series
    VariantEntry::new(0x4A07053, "MX110F016B", 16, &FAMILY_MX1),
    VariantEntry::new(0x4A09053, "MX110F016C", 16, &FAMILY_MX1),
    VariantEntry::new(0x4A0B053, "MX110F016D", 16, &FAMILY_MX1),
    VariantEntry::new(0x4A06053, "MX120F032B", 32, &FAMILY_MX1),
    VariantEntry::new(0x4A08053, "MX120F032C", 32, &FAMILY_MX1),
    VariantEntry::new(0x4A0A053, "MX120F032D", 32, &FAMILY_MX1),
    VariantEntry::new(0x6A50053, "MX120F064H", 64, &FAMILY_MX1),
    VariantEntry::new(0x4D07053, "MX130F064B", 64, &FAMILY_MX1),
    VariantEntry::new(0x4D09053, "MX130F064C", 64, &FAMILY_MX1),
    VariantEntry::new(0x4D0B053, "MX130F064D", 64, &FAMILY_MX1),
    VariantEntry::new(0x6A00053, "MX130F128H", 128, &FAMILY_MX1),
    VariantEntry::new(0x6A01053, "MX130F128L", 128, &FAMILY_MX1),
    VariantEntry::new(0x4D06053, "MX150F128B", 128, &FAMILY_MX1),
    VariantEntry::new(0x4D08053, "MX150F128C", 128, &FAMILY_MX1),
    VariantEntry::new(0x4D0A053, "MX150F128D", 128, &FAMILY_MX1),
    VariantEntry::new(0x6A10053, "MX150F256H", 256, &FAMILY_MX1),
    VariantEntry::new(0x6A11053, "MX150F256L", 256, &FAMILY_MX1),
    VariantEntry::new(0x6610053, "MX170F256B", 256, &FAMILY_MX1),
    VariantEntry::new(0x661A053, "MX170F256D", 256, &FAMILY_MX1),
    VariantEntry::new(0x6A30053, "MX170F512H", 512, &FAMILY_MX1),
    VariantEntry::new(0x6A31053, "MX170F512L", 512, &FAMILY_MX1),
    VariantEntry::new(0x4A01053, "MX210F016B", 16, &FAMILY_MX1),
    VariantEntry::new(0x4A03053, "MX210F016C", 16, &FAMILY_MX1),
    VariantEntry::new(0x4A05053, "MX210F016D", 16, &FAMILY_MX1),
    VariantEntry::new(0x4A00053, "MX220F032B", 32, &FAMILY_MX1),
    VariantEntry::new(0x4A02053, "MX220F032C", 32, &FAMILY_MX1),
    VariantEntry::new(0x4A04053, "MX220F032D", 32, &FAMILY_MX1),
    VariantEntry::new(0x4D01053, "MX230F064B", 64, &FAMILY_MX1),
    VariantEntry::new(0x4D03053, "MX230F064C", 64, &FAMILY_MX1),
    VariantEntry::new(0x4D05053, "MX230F064D", 64, &FAMILY_MX1),
    VariantEntry::new(0x6A02053, "MX230F128H", 128, &FAMILY_MX1),
    VariantEntry::new(0x6A03053, "MX230F128L", 128, &FAMILY_MX1),
    VariantEntry::new(0x4D00053, "MX250F128B", 128, &FAMILY_MX1),
    VariantEntry::new(0x4D02053, "MX250F128C", 128, &FAMILY_MX1),
    VariantEntry::new(0x4D04053, "MX250F128D", 128, &FAMILY_MX1),
    VariantEntry::new(0x6A12053, "MX250F256H", 256, &FAMILY_MX1),
    VariantEntry::new(0x6A13053, "MX250F256L", 256, &FAMILY_MX1),
    VariantEntry::new(0x6600053, "MX270F256B", 256, &FAMILY_MX1),
    VariantEntry::new(0x660A053, "MX270F256D", 256, &FAMILY_MX1),
    VariantEntry::new(0x6A32053, "MX270F512H", 512, &FAMILY_MX1),
    VariantEntry::new(0x6A33053, "MX270F512L", 512, &FAMILY_MX1),
    VariantEntry::new(0x6A04053, "MX530F128H", 128, &FAMILY_MX1),
    VariantEntry::new(0x6A05053, "MX530F128L", 128, &FAMILY_MX1),
    VariantEntry::new(0x6A14053, "MX550F256H", 256, &FAMILY_MX1),
    VariantEntry::new(0x6A15053, "MX550F256L", 256, &FAMILY_MX1),
    VariantEntry::new(0x6A34053, "MX570F512H", 512, &FAMILY_MX1),
    VariantEntry::new(0x6A35053, "MX570F512L", 512, &FAMILY_MX1),
    // XLP series
    VariantEntry::new(0x7800053, "MX154F128B", 128, &FAMILY_XLP),
    VariantEntry::new(0x7804053, "MX154F128D", 128, &FAMILY_XLP),
    VariantEntry::new(0x7808053, "MX155F128B", 128, &FAMILY_XLP),
    VariantEntry::new(0x780C053, "MX155F128D", 128, &FAMILY_XLP),
    VariantEntry::new(0x7801053, "MX174F256B", 256, &FAMILY_XLP),
    VariantEntry::new(0x7805053, "MX174F256D", 256, &FAMILY_XLP),
    VariantEntry::new(0x7809053, "MX175F256B", 256, &FAMILY_XLP),
    VariantEntry::new(0x780D053, "MX175F256D", 256, &FAMILY_XLP),
    VariantEntry::new(0x7802053, "MX254F128B", 128, &FAMILY_XLP),
    VariantEntry::new(0x7806053, "MX254F128D", 128, &FAMILY_XLP),
    VariantEntry::new(0x780A053, "MX255F128B", 128, &FAMILY_XLP),
    VariantEntry::new(0x780E053, "MX255F128D", 128, &FAMILY_XLP),
    VariantEntry::new(0x7803053, "MX274F256B", 256, &FAMILY_XLP),
    VariantEntry::new(0x7807053, "MX274F256D", 256, &FAMILY_XLP),
    VariantEntry::new(0x780B053, "MX275F256B", 256, &FAMILY_XLP),
    VariantEntry::new(0x780F053, "MX275F256D", 256, &FAMILY_XLP),
    // MX3/4/5/6/7 series
    VariantEntry::new(0x0902053, "MX320F032H", 32, &FAMILY_MX3),
    VariantEntry::new(0x0906053, "MX320F064H", 64, &FAMILY_MX3),
    VariantEntry::new(0x090A053, "MX320F128H", 128, &FAMILY_MX3),
    VariantEntry::new(0x092A053, "MX320F128L", 128, &FAMILY_MX3),
    VariantEntry::new(0x5600053, "MX330F064H", 64, &FAMILY_MX3),
    VariantEntry::new(0x5601053, "MX330F064L", 64, &FAMILY_MX3),
    VariantEntry::new(0x090D053, "MX340F128H", 128, &FAMILY_MX3),
    VariantEntry::new(0x092D053, "MX340F128L", 128, &FAMILY_MX3),
    VariantEntry::new(0x0912053, "MX340F256H", 256, &FAMILY_MX3),
    VariantEntry::new(0x0916053, "MX340F512H", 512, &FAMILY_MX3),
    VariantEntry::new(0x570C053, "MX350F128H", 128, &FAMILY_MX3),
    VariantEntry::new(0x570D053, "MX350F128L", 128, &FAMILY_MX3),
    VariantEntry::new(0x5704053, "MX350F256H", 256, &FAMILY_MX3),
    VariantEntry::new(0x5705053, "MX350F256L", 256, &FAMILY_MX3),
    VariantEntry::new(0x0934053, "MX360F256L", 256, &FAMILY_MX3),
    VariantEntry::new(0x0938053, "MX360F512L", 512, &FAMILY_MX3),
    VariantEntry::new(0x5808053, "MX370F512H", 512, &FAMILY_MX3),
    VariantEntry::new(0x5809053, "MX370F512L", 512, &FAMILY_MX3),
    VariantEntry::new(0x0942053, "MX420F032H", 32, &FAMILY_MX3),
    VariantEntry::new(0x5602053, "MX430F064H", 64, &FAMILY_MX3),
    VariantEntry::new(0x5603053, "MX430F064L", 64, &FAMILY_MX3),
    VariantEntry::new(0x094D053, "MX440F128H", 128, &FAMILY_MX3),
    VariantEntry::new(0x096D053, "MX440F128L", 128, &FAMILY_MX3),
    VariantEntry::new(0x0952053, "MX440F256H", 256, &FAMILY_MX3),
    VariantEntry::new(0x0956053, "MX440F512H", 512, &FAMILY_MX3),
    VariantEntry::new(0x570E053, "MX450F128H", 128, &FAMILY_MX3),
    VariantEntry::new(0x570F053, "MX450F128L", 128, &FAMILY_MX3),
    VariantEntry::new(0x5706053, "MX450F256H", 256, &FAMILY_MX3),
    VariantEntry::new(0x5707053, "MX450F256L", 256, &FAMILY_MX3),
    VariantEntry::new(0x0974053, "MX460F256L", 256, &FAMILY_MX3),
    VariantEntry::new(0x0978053, "MX460F512L", 512, &FAMILY_MX3),
    VariantEntry::new(0x580A053, "MX470F512H", 512, &FAMILY_MX3),
    VariantEntry::new(0x580B053, "MX470F512L", 512, &FAMILY_MX3),
    VariantEntry::new(0x4400053, "MX534F064H", 64, &FAMILY_MX3),
    VariantEntry::new(0x440C053, "MX534F064L", 64, &FAMILY_MX3),
    VariantEntry::new(0x4401053, "MX564F064H", 64, &FAMILY_MX3),
    VariantEntry::new(0x440D053, "MX564F064L", 64, &FAMILY_MX3),
    VariantEntry::new(0x4403053, "MX564F128H", 128, &FAMILY_MX3),
    VariantEntry::new(0x440F053, "MX564F128L", 128, &FAMILY_MX3),
    VariantEntry::new(0x4317053, "MX575F256H", 256, &FAMILY_MX3),
    VariantEntry::new(0x4333053, "MX575F256L", 256, &FAMILY_MX3),
    VariantEntry::new(0x4309053, "MX575F512H", 512, &FAMILY_MX3),
    VariantEntry::new(0x430F053, "MX575F512L", 512, &FAMILY_MX3),
    VariantEntry::new(0x4405053, "MX664F064H", 64, &FAMILY_MX3),
    VariantEntry::new(0x4411053, "MX664F064L", 64, &FAMILY_MX3),
    VariantEntry::new(0x4407053, "MX664F128H", 128, &FAMILY_MX3),
    VariantEntry::new(0x4413053, "MX664F128L", 128, &FAMILY_MX3),
    VariantEntry::new(0x430B053, "MX675F256H", 256, &FAMILY_MX3),
    VariantEntry::new(0x4305053, "MX675F256L", 256, &FAMILY_MX3),
    VariantEntry::new(0x430C053, "MX675F512H", 512, &FAMILY_MX3),
    VariantEntry::new(0x4311053, "MX675F512L", 512, &FAMILY_MX3),
    VariantEntry::new(0x4325053, "MX695F512H", 512, &FAMILY_MX3),
    VariantEntry::new(0x4341053, "MX695F512L", 512, &FAMILY_MX3),
    VariantEntry::new(0x440B053, "MX764F128H", 128, &FAMILY_MX3),
    VariantEntry::new(0x4417053, "MX764F128L", 128, &FAMILY_MX3),
    VariantEntry::new(0x4303053, "MX775F256H", 256, &FAMILY_MX3),
    VariantEntry::new(0x4312053, "MX775F256L", 256, &FAMILY_MX3),
    VariantEntry::new(0x430D053, "MX775F512H", 512, &FAMILY_MX3),
    VariantEntry::new(0x4306053, "MX775F512L", 512, &FAMILY_MX3),
    VariantEntry::new(0x430E053, "MX795F512H", 512, &FAMILY_MX3),
    VariantEntry::new(0x4307053, "MX795F512L", 512, &FAMILY_MX3),
    // MZ EC series
    VariantEntry::new(0x5100053, "MZ0256ECE064", 256, &FAMILY_MZ),
    VariantEntry::new(0x510A053, "MZ0256ECE100", 256, &FAMILY_MZ),
    VariantEntry::new(0x5114053, "MZ0256ECE124", 256, &FAMILY_MZ),
    VariantEntry::new(0x511E053, "MZ0256ECE144", 256, &FAMILY_MZ),
    VariantEntry::new(0x5105053, "MZ0256ECF064", 256, &FAMILY_MZ),
    VariantEntry::new(0x510F053, "MZ0256ECF100", 256, &FAMILY_MZ),
    VariantEntry::new(0x5119053, "MZ0256ECF124", 256, &FAMILY_MZ),
    VariantEntry::new(0x5123053, "MZ0256ECF144", 256, &FAMILY_MZ),
    VariantEntry::new(0x5101053, "MZ0512ECE064", 512, &FAMILY_MZ),
    VariantEntry::new(0x510B053, "MZ0512ECE100", 512, &FAMILY_MZ),
    VariantEntry::new(0x5115053, "MZ0512ECE124", 512, &FAMILY_MZ),
    VariantEntry::new(0x511F053, "MZ0512ECE144", 512, &FAMILY_MZ),
    VariantEntry::new(0x5106053, "MZ0512ECF064", 512, &FAMILY_MZ),
    VariantEntry::new(0x5110053, "MZ0512ECF100", 512, &FAMILY_MZ),
    VariantEntry::new(0x511A053, "MZ0512ECF124", 512, &FAMILY_MZ),
    VariantEntry::new(0x5124053, "MZ0512ECF144", 512, &FAMILY_MZ),
    VariantEntry::new(0x5102053, "MZ1024ECE064", 1024, &FAMILY_MZ),
    VariantEntry::new(0x510C053, "MZ1024ECE100", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5116053, "MZ1024ECE124", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5120053, "MZ1024ECE144", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5107053, "MZ1024ECF064", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5111053, "MZ1024ECF100", 1024, &FAMILY_MZ),
    VariantEntry::new(0x511B053, "MZ1024ECF124", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5125053, "MZ1024ECF144", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5103053, "MZ1024ECG064", 1024, &FAMILY_MZ),
    VariantEntry::new(0x510D053, "MZ1024ECG100", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5117053, "MZ1024ECG124", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5121053, "MZ1024ECG144", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5108053, "MZ1024ECH064", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5112053, "MZ1024ECH100", 1024, &FAMILY_MZ),
    VariantEntry::new(0x511C053, "MZ1024ECH124", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5126053, "MZ1024ECH144", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5130053, "MZ1024ECM064", 1024, &FAMILY_MZ),
    VariantEntry::new(0x513A053, "MZ1024ECM100", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5144053, "MZ1024ECM124", 1024, &FAMILY_MZ),
    VariantEntry::new(0x514E053, "MZ1024ECM144", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5104053, "MZ2048ECG064", 2048, &FAMILY_MZ),
    VariantEntry::new(0x510E053, "MZ2048ECG100", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5118053, "MZ2048ECG124", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5122053, "MZ2048ECG144", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5109053, "MZ2048ECH064", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5113053, "MZ2048ECH100", 2048, &FAMILY_MZ),
    VariantEntry::new(0x511D053, "MZ2048ECH124", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5127053, "MZ2048ECH144", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5131053, "MZ2048ECM064", 2048, &FAMILY_MZ),
    VariantEntry::new(0x513B053, "MZ2048ECM100", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5145053, "MZ2048ECM124", 2048, &FAMILY_MZ),
    VariantEntry::new(0x514F053, "MZ2048ECM144", 2048, &FAMILY_MZ),
    // MZ EF series (FPU)
    VariantEntry::new(0x7201053, "MZ0512EFE064", 512, &FAMILY_MZ),
    VariantEntry::new(0x7206053, "MZ0512EFF064", 512, &FAMILY_MZ),
    VariantEntry::new(0x722E053, "MZ0512EFK064", 512, &FAMILY_MZ),
    VariantEntry::new(0x7202053, "MZ1024EFE064", 1024, &FAMILY_MZ),
    VariantEntry::new(0x7207053, "MZ1024EFF064", 1024, &FAMILY_MZ),
    VariantEntry::new(0x722F053, "MZ1024EFK064", 1024, &FAMILY_MZ),
    VariantEntry::new(0x7203053, "MZ1024EFG064", 1024, &FAMILY_MZ),
    VariantEntry::new(0x7208053, "MZ1024EFH064", 1024, &FAMILY_MZ),
    VariantEntry::new(0x7230053, "MZ1024EFM064", 1024, &FAMILY_MZ),
    VariantEntry::new(0x7204053, "MZ2048EFG064", 2048, &FAMILY_MZ),
    VariantEntry::new(0x7209053, "MZ2048EFH064", 2048, &FAMILY_MZ),
    VariantEntry::new(0x7231053, "MZ2048EFM064", 2048, &FAMILY_MZ),
    VariantEntry::new(0x720B053, "MZ0512EFE100", 512, &FAMILY_MZ),
    VariantEntry::new(0x7210053, "MZ0512EFF100", 512, &FAMILY_MZ),
    VariantEntry::new(0x7238053, "MZ0512EFK100", 512, &FAMILY_MZ),
    VariantEntry::new(0x720C053, "MZ1024EFE100", 1024, &FAMILY_MZ),
    VariantEntry::new(0x7211053, "MZ1024EFF100", 1024, &FAMILY_MZ),
    VariantEntry::new(0x7239053, "MZ1024EFK100", 1024, &FAMILY_MZ),
    VariantEntry::new(0x720D053, "MZ1024EFG100", 1024, &FAMILY_MZ),
    VariantEntry::new(0x7212053, "MZ1024EFH100", 1024, &FAMILY_MZ),
    VariantEntry::new(0x723A053, "MZ1024EFM100", 1024, &FAMILY_MZ),
    VariantEntry::new(0x720E053, "MZ2048EFG100", 2048, &FAMILY_MZ),
    VariantEntry::new(0x7213053, "MZ2048EFH100", 2048, &FAMILY_MZ),
    VariantEntry::new(0x723B053, "MZ2048EFM100", 2048, &FAMILY_MZ),
    VariantEntry::new(0x7215053, "MZ0512EFE124", 512, &FAMILY_MZ),
    VariantEntry::new(0x721A053, "MZ0512EFF124", 512, &FAMILY_MZ),
    VariantEntry::new(0x7242053, "MZ0512EFK124", 512, &FAMILY_MZ),
    VariantEntry::new(0x7216053, "MZ1024EFE124", 1024, &FAMILY_MZ),
    VariantEntry::new(0x721B053, "MZ1024EFF124", 1024, &FAMILY_MZ),
    VariantEntry::new(0x7243053, "MZ1024EFK124", 1024, &FAMILY_MZ),
    VariantEntry::new(0x7217053, "MZ1024EFG124", 1024, &FAMILY_MZ),
    VariantEntry::new(0x721C053, "MZ1024EFH124", 1024, &FAMILY_MZ),
    VariantEntry::new(0x7244053, "MZ1024EFM124", 1024, &FAMILY_MZ),
    VariantEntry::new(0x7218053, "MZ2048EFG124", 2048, &FAMILY_MZ),
    VariantEntry::new(0x721D053, "MZ2048EFH124", 2048, &FAMILY_MZ),
    VariantEntry::new(0x7245053, "MZ2048EFM124", 2048, &FAMILY_MZ),
    VariantEntry::new(0x721F053, "MZ0512EFE144", 512, &FAMILY_MZ),
    VariantEntry::new(0x7224053, "MZ0512EFF144", 512, &FAMILY_MZ),
    VariantEntry::new(0x724C053, "MZ0512EFK144", 512, &FAMILY_MZ),
    VariantEntry::new(0x7220053, "MZ1024EFE144", 1024, &FAMILY_MZ),
    VariantEntry::new(0x7225053, "MZ1024EFF144", 1024, &FAMILY_MZ),
    VariantEntry::new(0x724D053, "MZ1024EFK144", 1024, &FAMILY_MZ),
    VariantEntry::new(0x7221053, "MZ1024EFG144", 1024, &FAMILY_MZ),
    VariantEntry::new(0x7226053, "MZ1024EFH144", 1024, &FAMILY_MZ),
    VariantEntry::new(0x724E053, "MZ1024EFM144", 1024, &FAMILY_MZ),
    VariantEntry::new(0x7222053, "MZ2048EFG144", 2048, &FAMILY_MZ),
    VariantEntry::new(0x7227053, "MZ2048EFH144", 2048, &FAMILY_MZ),
    VariantEntry::new(0x724F053, "MZ2048EFM144", 2048, &FAMILY_MZ),
    // MZ DA series
    VariantEntry::new(0x5F69053, "MZ2064DAA288", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5F0C053, "MZ1025DAA169", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5F0D053, "MZ1025DAB169", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5F0F053, "MZ1064DAA169", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5F10053, "MZ1064DAB169", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5F15053, "MZ2025DAA169", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5F16053, "MZ2025DAB169", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5F18053, "MZ2064DAA169", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5F19053, "MZ2064DAB169", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5F42053, "MZ1025DAG169", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5F43053, "MZ1025DAH169", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5F45053, "MZ1064DAG169", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5F46053, "MZ1064DAH169", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5F4B053, "MZ2025DAG169", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5F4C053, "MZ2025DAH169", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5F4E053, "MZ2064DAG169", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5F4F053, "MZ2064DAH169", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5F78053, "MZ1025DAA176", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5F79053, "MZ1025DAB176", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5F7B053, "MZ1064DAA176", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5F7C053, "MZ1064DAB176", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5F81053, "MZ2025DAA176", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5F82053, "MZ2025DAB176", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5F84053, "MZ2064DAA176", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5F85053, "MZ2064DAB176", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5FAE053, "MZ1025DAG176", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5FAF053, "MZ1025DAH176", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5FB1053, "MZ1064DAG176", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5FB2053, "MZ1064DAH176", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5FB7053, "MZ2025DAG176", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5FB8053, "MZ2025DAH176", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5FBA053, "MZ2064DAG176", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5FBB053, "MZ2064DAH176", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5F5D053, "MZ1025DAA288", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5F5E053, "MZ1025DAB288", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5F60053, "MZ1064DAA288", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5F61053, "MZ1064DAB288", 1024, &FAMILY_MZ),
    VariantEntry::new(0x5F66053, "MZ2025DAA288", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5F67053, "MZ2025DAB288", 2048, &FAMILY_MZ),
    // duplicate id; the earlier MZ2064DAA288 entry is the one that matches
    VariantEntry::new(0x5F69053, "MZ2064DAA288", 2048, &FAMILY_MZ),
    VariantEntry::new(0x5F6A053, "MZ2064DAB288", 2048, &FAMILY_MZ),
    // USB bootloader
    VariantEntry::new(0xEAFB00B, "Bootloader", 0, &FAMILY_BOOTLOADER),
];
