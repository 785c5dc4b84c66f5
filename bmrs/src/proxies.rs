//! D-Bus proxy traits for BarcodeManager interfaces.
//!
//! These traits define the BarcodeManager D-Bus API surface used by this crate.
//! The `zbus::proxy` macro generates proxy implementations that handle
//! D-Bus communication automatically.
//!
//! # BarcodeManager D-Bus Structure
//!
//! - `/org/freedesktop/BarcodeManager` - Main BM object
//! - `/org/freedesktop/BarcodeManager/Devices/*` - Device objects
//! - `/org/freedesktop/BarcodeManager/ActiveConnection/*` - Active connection objects
//!
//! Connection settings live outside the manager service: each active
//! connection names its own settings provider (the user or system settings
//! service) via the `ServiceName` property, so the settings proxy has no
//! default destination.

use std::collections::HashMap;
use zbus::{Result, proxy};
use zvariant::{OwnedObjectPath, OwnedValue};

/// Proxy for the main BarcodeManager interface.
///
/// Provides methods for listing devices and access to the manager-wide
/// state and the set of active connections.
#[proxy(
    interface = "org.freedesktop.BarcodeManager",
    default_service = "org.freedesktop.BarcodeManager",
    default_path = "/org/freedesktop/BarcodeManager"
)]
pub trait BM {
    /// Returns paths to all barcode devices.
    fn get_devices(&self) -> Result<Vec<OwnedObjectPath>>;

    /// Paths to all active connections.
    #[zbus(property)]
    fn active_connections(&self) -> Result<Vec<OwnedObjectPath>>;

    /// Overall manager state (3 = connected).
    #[zbus(property)]
    fn state(&self) -> Result<u32>;
}

/// Proxy for BarcodeManager device interface.
///
/// Provides access to device properties like interface name, type, state,
/// and the kernel driver in use.
#[proxy(
    interface = "org.freedesktop.BarcodeManager.Device",
    default_service = "org.freedesktop.BarcodeManager"
)]
pub trait BMDevice {
    /// The device interface name (e.g., "ttyS0").
    #[zbus(property)]
    fn interface(&self) -> Result<String>;

    /// Device type as a numeric code (1 = serial, 2 = USB, 3 = Bluetooth).
    #[zbus(property)]
    fn device_type(&self) -> Result<u32>;

    /// Current device state (8 = activated, 9 = failed).
    #[zbus(property)]
    fn state(&self) -> Result<u32>;

    /// Whether BarcodeManager manages this device.
    #[zbus(property)]
    fn managed(&self) -> Result<bool>;

    /// The kernel driver in use.
    #[zbus(property)]
    fn driver(&self) -> Result<String>;

    /// The unique device identifier as reported by udev.
    #[zbus(property)]
    fn udi(&self) -> Result<String>;
}

/// Proxy for active connection interface.
///
/// Provides access to the state of an active (in-progress or established)
/// connection, and to the identity of the settings provider that owns the
/// connection's configuration.
#[proxy(
    interface = "org.freedesktop.BarcodeManager.Connection.Active",
    default_service = "org.freedesktop.BarcodeManager"
)]
pub trait BMActiveConnection {
    /// Current state of the active connection.
    ///
    /// Values:
    /// - 0: Unknown
    /// - 1: Activating
    /// - 2: Activated
    #[zbus(property)]
    fn state(&self) -> Result<u32>;

    /// Path to the connection settings object, owned by the settings
    /// provider named in `ServiceName`.
    #[zbus(property)]
    fn connection(&self) -> Result<OwnedObjectPath>;

    /// Bus name of the settings service that owns this connection's
    /// configuration (user or system settings).
    #[zbus(property)]
    fn service_name(&self) -> Result<String>;

    /// Path to the specific object used for this connection.
    #[zbus(property)]
    fn specific_object(&self) -> Result<OwnedObjectPath>;

    /// Paths to devices using this connection.
    #[zbus(property)]
    fn devices(&self) -> Result<Vec<OwnedObjectPath>>;
}

/// Proxy for a settings provider's connection object.
///
/// No default service: the destination is the per-connection `ServiceName`
/// reported by the active connection, so callers must supply both
/// destination and path through the builder.
#[proxy(interface = "org.freedesktop.BarcodeManagerSettings.Connection")]
pub trait BMSettingsConnection {
    /// Returns the nested settings map (`a{sa{sv}}`) describing this
    /// connection. The human-readable name lives at `connection.id`.
    fn get_settings(&self) -> Result<HashMap<String, HashMap<String, OwnedValue>>>;
}
