//! Port descriptor grammar
//!
//! A descriptor names the adapter to open. Colons decide the shape:
//! none means a serial device under the default protocol, one means
//! `protocol:device`, two or three mean `protocol:vid:pid[:serial]`
//! over USB. Protocol prefixes are resolved later, against the opener
//! tables; only the vid:pid pair is validated here.

use mxprog_core::error::{Error, Result};

/// Parsed form of a port descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortSpec {
    /// No descriptor: probe every compiled-in USB protocol in priority
    /// order.
    Autodetect,
    /// Serial device; `protocol` of `None` selects the default serial
    /// protocol.
    Serial {
        /// Protocol prefix, matched case-insensitively later.
        protocol: Option<String>,
        /// Device name as handed to the opener.
        device: String,
    },
    /// USB device pinned to a protocol and a vendor/product pair.
    Usb {
        /// Protocol prefix, matched case-insensitively later.
        protocol: String,
        /// Vendor identifier; 0 lets the opener use its default.
        vid: u16,
        /// Product identifier; 0 lets the opener use its default.
        pid: u16,
        /// Optional serial-number filter. May itself contain colons.
        serial: Option<String>,
    },
}

impl PortSpec {
    /// Parses a descriptor. A malformed vid:pid pair is terminal;
    /// every other mistake surfaces later as an open failure.
    pub fn parse(descriptor: Option<&str>) -> Result<Self> {
        let Some(desc) = descriptor else {
            return Ok(PortSpec::Autodetect);
        };

        match desc.matches(':').count() {
            0 => Ok(PortSpec::Serial {
                protocol: None,
                device: desc.to_string(),
            }),
            1 => {
                let (prefix, device) = desc.split_once(':').unwrap();
                Ok(PortSpec::Serial {
                    protocol: Some(prefix.to_string()),
                    device: device.to_string(),
                })
            }
            _ => {
                let mut parts = desc.splitn(4, ':');
                let protocol = parts.next().unwrap();
                let vid = parts.next().unwrap();
                let pid = parts.next().unwrap();
                let serial = parts.next();

                let bad = || Error::InvalidPortDescriptor(desc.to_string());
                let vid = parse_hex_id(vid).ok_or_else(bad)?;
                let pid = parse_hex_id(pid).ok_or_else(bad)?;
                Ok(PortSpec::Usb {
                    protocol: protocol.to_string(),
                    vid,
                    pid,
                    serial: serial.map(str::to_string),
                })
            }
        }
    }
}

/// Hexadecimal vendor/product field, optional `0x` prefix.
fn parse_hex_id(text: &str) -> Option<u16> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u16::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_descriptor_means_autodetect() {
        assert_eq!(PortSpec::parse(None).unwrap(), PortSpec::Autodetect);
    }

    #[test]
    fn bare_device_uses_the_default_serial_protocol() {
        assert_eq!(
            PortSpec::parse(Some("/dev/ttyUSB0")).unwrap(),
            PortSpec::Serial {
                protocol: None,
                device: "/dev/ttyUSB0".to_string(),
            }
        );
    }

    #[test]
    fn one_colon_selects_a_serial_protocol() {
        assert_eq!(
            PortSpec::parse(Some("ascii:COM5")).unwrap(),
            PortSpec::Serial {
                protocol: Some("ascii".to_string()),
                device: "COM5".to_string(),
            }
        );
    }

    #[test]
    fn two_colons_select_a_usb_protocol() {
        assert_eq!(
            PortSpec::parse(Some("hidboot:04d8:003c")).unwrap(),
            PortSpec::Usb {
                protocol: "hidboot".to_string(),
                vid: 0x04D8,
                pid: 0x003C,
                serial: None,
            }
        );
    }

    #[test]
    fn third_colon_carries_the_serial_number() {
        assert_eq!(
            PortSpec::parse(Some("pickit2:0x04D8:0x0033:PK2-1")).unwrap(),
            PortSpec::Usb {
                protocol: "pickit2".to_string(),
                vid: 0x04D8,
                pid: 0x0033,
                serial: Some("PK2-1".to_string()),
            }
        );
        // Colons inside the serial number survive.
        assert_eq!(
            PortSpec::parse(Some("uhb:1:2:a:b:c")).unwrap(),
            PortSpec::Usb {
                protocol: "uhb".to_string(),
                vid: 1,
                pid: 2,
                serial: Some("a:b:c".to_string()),
            }
        );
    }

    #[test]
    fn malformed_vid_pid_is_terminal() {
        for desc in ["x:zz:003c", "x:04d8:", "x::003c", "x:04d8:12345"] {
            let err = PortSpec::parse(Some(desc)).unwrap_err();
            assert!(
                matches!(err, Error::InvalidPortDescriptor(ref d) if d == desc),
                "descriptor {desc:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn unknown_prefixes_parse_fine() {
        // Prefix resolution happens at open time, not here.
        assert!(matches!(
            PortSpec::parse(Some("nonesuch:/dev/tty")).unwrap(),
            PortSpec::Serial { .. }
        ));
        assert!(matches!(
            PortSpec::parse(Some("nonesuch:1:2")).unwrap(),
            PortSpec::Usb { .. }
        ));
    }
}
