//! Adapter opener tables and bounded-retry acquisition
//!
//! Openers are plain function pointers in fixed-order tables, one
//! entry per compiled-in adapter crate. The first serial entry is the
//! default protocol for prefix-less descriptors; the USB table doubles
//! as the autodetect chain.

use std::thread;
use std::time::Duration;

use mxprog_core::adapter::Adapter;
use mxprog_core::error::{Error, Result};

use crate::port::PortSpec;

/// Owned handle to one open adapter.
pub type AdapterHandle = Box<dyn Adapter + Send>;

/// Pause between failed open attempts.
const RETRY_DELAY: Duration = Duration::from_millis(500);

/// One serial protocol opener.
pub struct SerialProtocol {
    /// Descriptor prefix, matched case-insensitively.
    pub prefix: &'static str,
    /// Short description for `list-adapters`.
    pub description: &'static str,
    /// Opener. Failure feeds the retry loop.
    pub open: fn(device: &str, baud: u32) -> Result<AdapterHandle>,
}

/// One USB protocol opener.
pub struct UsbProtocol {
    /// Descriptor prefix, matched case-insensitively.
    pub prefix: &'static str,
    /// Short description for `list-adapters`.
    pub description: &'static str,
    /// Whether the autodetect chain tries this protocol. The emulator
    /// opts out so it is only reachable by explicit prefix.
    pub autodetect: bool,
    /// Opener. A vid/pid of 0 selects the protocol's default device;
    /// `report` tells the opener to complain about probe failures.
    pub open: fn(vid: u16, pid: u16, serial: Option<&str>, report: bool) -> Result<AdapterHandle>,
}

/// Serial protocols in table order. The first entry is the default for
/// descriptors without a protocol prefix.
#[allow(unused_mut, clippy::vec_init_then_push)]
pub fn serial_protocols() -> Vec<SerialProtocol> {
    let mut protocols = Vec::new();

    #[cfg(feature = "dummy")]
    protocols.push(SerialProtocol {
        prefix: "dummy",
        description: "In-memory target emulator (device = hex id to emulate)",
        open: mxprog_dummy::open_serial,
    });

    protocols
}

/// USB protocols in autodetect priority order.
#[allow(unused_mut, clippy::vec_init_then_push)]
pub fn usb_protocols() -> Vec<UsbProtocol> {
    let mut protocols = Vec::new();

    #[cfg(feature = "dummy")]
    protocols.push(UsbProtocol {
        prefix: "dummy",
        description: "In-memory target emulator (vid/pid ignored)",
        autodetect: false,
        open: mxprog_dummy::open_usb,
    });

    protocols
}

/// Comma-separated prefixes of every compiled-in protocol, for help
/// text.
pub fn protocol_names_short() -> String {
    let mut names: Vec<&str> = serial_protocols().iter().map(|p| p.prefix).collect();
    for proto in usb_protocols() {
        if !names.contains(&proto.prefix) {
            names.push(proto.prefix);
        }
    }
    if names.is_empty() {
        return "none (recompile with adapter features)".to_string();
    }
    names.join(", ")
}

/// Opens the adapter named by `spec`, retrying up to `max(1, retries)`
/// times with a 500 ms pause between attempts.
///
/// With more than one attempt the target owner is told once to enter
/// programming mode first; USB openers only report probe failures on
/// the final attempt.
pub fn open_adapter(spec: &PortSpec, baud: u32, retries: u32) -> Result<AdapterHandle> {
    let attempts = retries.max(1);

    if attempts > 1 {
        log::info!("*** Enter programming mode now ***");
    }

    for attempt in 1..=attempts {
        let last = attempt == attempts;
        match try_open(spec, baud, last) {
            Ok(handle) => return Ok(handle),
            Err(e) => {
                log::debug!("open attempt {attempt}/{attempts}: {e}");
                if !last {
                    thread::sleep(RETRY_DELAY);
                }
            }
        }
    }
    Err(Error::AdapterNotFound)
}

/// One open attempt. Unknown protocol prefixes and absent hardware are
/// soft failures here; the caller decides when to give up.
fn try_open(spec: &PortSpec, baud: u32, report: bool) -> Result<AdapterHandle> {
    match spec {
        PortSpec::Autodetect => {
            for proto in usb_protocols().iter().filter(|p| p.autodetect) {
                match (proto.open)(0, 0, None, report) {
                    Ok(handle) => {
                        log::debug!("autodetected {} adapter", proto.prefix);
                        return Ok(handle);
                    }
                    Err(e) => log::debug!("{}: {e}", proto.prefix),
                }
            }
            Err(Error::AdapterNotFound)
        }
        PortSpec::Serial { protocol, device } => {
            let table = serial_protocols();
            let proto = match protocol {
                None => table.first(),
                Some(prefix) => table.iter().find(|p| p.prefix.eq_ignore_ascii_case(prefix)),
            };
            let Some(proto) = proto else {
                if let Some(prefix) = protocol {
                    log::warn!("{prefix}: unknown serial protocol");
                }
                return Err(Error::AdapterNotFound);
            };
            (proto.open)(device, baud)
        }
        PortSpec::Usb {
            protocol,
            vid,
            pid,
            serial,
        } => {
            let table = usb_protocols();
            let Some(proto) = table.iter().find(|p| p.prefix.eq_ignore_ascii_case(protocol))
            else {
                log::warn!("{protocol}: unknown USB protocol");
                return Err(Error::AdapterNotFound);
            };
            (proto.open)(*vid, *pid, serial.as_deref(), report)
        }
    }
}
