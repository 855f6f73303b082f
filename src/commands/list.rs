//! List commands implementation

use mxprog_core::chip::VariantRegistry;
use mxprog_target::{serial_protocols, usb_protocols};

/// List the known chip variants, optionally filtered by family name.
pub fn list_variants(registry: &VariantRegistry, family_filter: Option<&str>) {
    println!("Known chip variants:");
    println!();
    println!(
        "{:<16} {:>9} {:>10}  {}",
        "Name", "Device id", "Flash", "Family"
    );
    println!("{}", "-".repeat(48));

    for entry in registry.entries() {
        if let Some(family) = family_filter {
            if !entry.family.name.eq_ignore_ascii_case(family) {
                continue;
            }
        }

        let flash = if entry.flash_kbytes == 0 {
            "adapter".to_string()
        } else {
            format!("{} KB", entry.flash_kbytes)
        };
        println!(
            "{:<16} {:>9} {:>10}  {}",
            entry.name,
            format!("{:07X}", entry.devid),
            flash,
            entry.family.name
        );
    }
}

/// List compiled-in adapter protocols.
pub fn list_adapters() {
    let serial = serial_protocols();
    let usb = usb_protocols();

    println!("Compiled-in adapter protocols:");
    println!();

    println!("Serial (use -p [prefix:]device):");
    if serial.is_empty() {
        println!("  (none)");
    }
    for (i, proto) in serial.iter().enumerate() {
        let tag = if i == 0 { " [default]" } else { "" };
        println!("  {:10} - {}{}", proto.prefix, proto.description, tag);
    }

    println!();
    println!("USB (use -p prefix:vid:pid[:serial]):");
    if usb.is_empty() {
        println!("  (none)");
    }
    for proto in &usb {
        let tag = if proto.autodetect {
            ""
        } else {
            " [explicit prefix only]"
        };
        println!("  {:10} - {}{}", proto.prefix, proto.description, tag);
    }
}
