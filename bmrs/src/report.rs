//! Status report rendering.
//!
//! Formatting is kept separate from the D-Bus queries so the exact output
//! contract can be tested without a running daemon. One line per device,
//! then one line per active connection; the two sections are independent.

use std::io::{self, Write};

use crate::models::{ActiveConnection, Device};

/// Renders the status line for a single device.
///
/// A device is reported as activated only in the fully-activated state;
/// every other state code is reported as not activated.
pub fn device_line(device: &Device) -> String {
    if device.state.is_activated() {
        format!("Device {} is activated", device.interface)
    } else {
        format!("Device {} is not activated", device.interface)
    }
}

/// Renders the status line for a single active connection.
///
/// Anything short of fully activated is reported as activating; an active
/// connection that exists at all is at least underway.
pub fn connection_line(connection: &ActiveConnection) -> String {
    if connection.state.is_activated() {
        format!("Connection '{}' is activated", connection.id)
    } else {
        format!("Connection '{}' is activating", connection.id)
    }
}

/// Writes the full status report: device lines first, connection lines
/// second. An empty device list produces no device lines and does not
/// suppress the connection section, and vice versa.
pub fn write_report<W: Write>(
    out: &mut W,
    devices: &[Device],
    connections: &[ActiveConnection],
) -> io::Result<()> {
    for device in devices {
        writeln!(out, "{}", device_line(device))?;
    }
    for connection in connections {
        writeln!(out, "{}", connection_line(connection))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActiveConnectionState, DeviceState, DeviceType};

    fn device(interface: &str, state: u32) -> Device {
        Device {
            path: format!("/org/freedesktop/BarcodeManager/Devices/{interface}"),
            interface: interface.to_string(),
            device_type: DeviceType::Serial,
            state: DeviceState::from(state),
            driver: None,
            managed: Some(true),
        }
    }

    fn connection(id: &str, state: u32) -> ActiveConnection {
        ActiveConnection {
            path: "/org/freedesktop/BarcodeManager/ActiveConnection/1".to_string(),
            state: ActiveConnectionState::from(state),
            service_name: "org.freedesktop.BarcodeManagerUserSettings".to_string(),
            connection_path: "/org/freedesktop/BarcodeManagerSettings/Connection/1".to_string(),
            id: id.to_string(),
        }
    }

    #[test]
    fn activated_device_line() {
        assert_eq!(device_line(&device("eth0", 8)), "Device eth0 is activated");
    }

    #[test]
    fn non_activated_device_line() {
        assert_eq!(
            device_line(&device("wlan0", 3)),
            "Device wlan0 is not activated"
        );
    }

    #[test]
    fn unknown_device_code_counts_as_not_activated() {
        assert_eq!(
            device_line(&device("ttyS0", 250)),
            "Device ttyS0 is not activated"
        );
    }

    #[test]
    fn activated_connection_line() {
        assert_eq!(
            connection_line(&connection("Home Wi-Fi", 2)),
            "Connection 'Home Wi-Fi' is activated"
        );
    }

    #[test]
    fn activating_connection_line() {
        assert_eq!(
            connection_line(&connection("Home Wi-Fi", 1)),
            "Connection 'Home Wi-Fi' is activating"
        );
    }

    #[test]
    fn report_orders_devices_before_connections() {
        let mut out = Vec::new();
        write_report(
            &mut out,
            &[device("eth0", 8), device("wlan0", 3)],
            &[connection("Home Wi-Fi", 2)],
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Device eth0 is activated\n\
             Device wlan0 is not activated\n\
             Connection 'Home Wi-Fi' is activated\n"
        );
    }

    #[test]
    fn empty_devices_do_not_suppress_connections() {
        let mut out = Vec::new();
        write_report(&mut out, &[], &[connection("Dock", 1)]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Connection 'Dock' is activating\n"
        );
    }

    #[test]
    fn empty_connections_do_not_suppress_devices() {
        let mut out = Vec::new();
        write_report(&mut out, &[device("ttyS0", 8)], &[]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Device ttyS0 is activated\n"
        );
    }

    #[test]
    fn fully_empty_report_prints_nothing() {
        let mut out = Vec::new();
        write_report(&mut out, &[], &[]).unwrap();
        assert!(out.is_empty());
    }
}
