use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// BarcodeManager device state.
///
/// These values represent the lifecycle states of a barcode device
/// as reported by the BM D-Bus API. Note that this is a different code
/// space from [`ActiveConnectionState`]: device activation is code 8,
/// connection activation is code 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceState {
    /// Device state is unknown.
    Unknown,
    /// Device is not managed by BarcodeManager.
    Unmanaged,
    /// Device cannot be used (missing firmware, disabled, ...).
    Unavailable,
    /// Device is ready but not connected.
    Disconnected,
    /// Device is preparing a connection.
    Prepare,
    /// Device is being configured.
    Config,
    /// Device is waiting for secrets.
    NeedAuth,
    /// Device is requesting addressing information.
    IpConfig,
    /// Device is fully activated.
    Activated,
    /// Device activation failed.
    Failed,
    /// Unknown state code not mapped to a specific variant.
    Other(u32),
}

impl DeviceState {
    /// Whether the device reached the activated state.
    ///
    /// Every other code, known or not, counts as not activated.
    pub fn is_activated(self) -> bool {
        self == Self::Activated
    }
}

impl From<u32> for DeviceState {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::Unmanaged,
            2 => Self::Unavailable,
            3 => Self::Disconnected,
            4 => Self::Prepare,
            5 => Self::Config,
            6 => Self::NeedAuth,
            7 => Self::IpConfig,
            8 => Self::Activated,
            9 => Self::Failed,
            v => Self::Other(v),
        }
    }
}

impl Display for DeviceState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Unmanaged => write!(f, "unmanaged"),
            Self::Unavailable => write!(f, "unavailable"),
            Self::Disconnected => write!(f, "disconnected"),
            Self::Prepare => write!(f, "preparing"),
            Self::Config => write!(f, "configuring"),
            Self::NeedAuth => write!(f, "need authentication"),
            Self::IpConfig => write!(f, "requesting address"),
            Self::Activated => write!(f, "activated"),
            Self::Failed => write!(f, "failed"),
            Self::Other(v) => write!(f, "unknown state ({v})"),
        }
    }
}

/// BarcodeManager active connection state.
///
/// Deliberately a separate enumeration from [`DeviceState`]; the two
/// interfaces overload the same small integers with unrelated meanings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveConnectionState {
    /// Connection state is unknown.
    Unknown,
    /// Connection is activating.
    Activating,
    /// Connection is fully activated.
    Activated,
    /// Unknown state code not mapped to a specific variant.
    Other(u32),
}

impl ActiveConnectionState {
    /// Whether the connection reached the activated state.
    pub fn is_activated(self) -> bool {
        self == Self::Activated
    }
}

impl From<u32> for ActiveConnectionState {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::Activating,
            2 => Self::Activated,
            v => Self::Other(v),
        }
    }
}

impl Display for ActiveConnectionState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Activating => write!(f, "activating"),
            Self::Activated => write!(f, "activated"),
            Self::Other(v) => write!(f, "unknown state ({v})"),
        }
    }
}

/// Overall BarcodeManager daemon state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManagerState {
    Unknown,
    Asleep,
    Connecting,
    Connected,
    Disconnected,
    /// Unknown state code not mapped to a specific variant.
    Other(u32),
}

impl From<u32> for ManagerState {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::Asleep,
            2 => Self::Connecting,
            3 => Self::Connected,
            4 => Self::Disconnected,
            v => Self::Other(v),
        }
    }
}

impl Display for ManagerState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Asleep => write!(f, "asleep"),
            Self::Connecting => write!(f, "connecting"),
            Self::Connected => write!(f, "connected"),
            Self::Disconnected => write!(f, "disconnected"),
            Self::Other(v) => write!(f, "unknown state ({v})"),
        }
    }
}

/// Barcode device transport types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceType {
    Unknown,
    Serial,
    Usb,
    Bluetooth,
    Other(u32),
}

impl From<u32> for DeviceType {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::Serial,
            2 => Self::Usb,
            3 => Self::Bluetooth,
            v => Self::Other(v),
        }
    }
}

impl Display for DeviceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::Serial => write!(f, "Serial"),
            Self::Usb => write!(f, "USB"),
            Self::Bluetooth => write!(f, "Bluetooth"),
            Self::Other(v) => write!(f, "Other({v})"),
        }
    }
}

/// Snapshot of a barcode device managed by BarcodeManager.
///
/// Purely a read-only query result; nothing here tracks the remote object
/// beyond the moment the properties were fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    /// D-Bus object path of the device.
    pub path: String,
    /// Interface name (e.g., "ttyS0").
    pub interface: String,
    /// Transport type.
    pub device_type: DeviceType,
    /// Current activation state.
    pub state: DeviceState,
    /// Kernel driver in use, if reported.
    pub driver: Option<String>,
    /// Whether BarcodeManager manages this device, if reported.
    pub managed: Option<bool>,
}

/// Snapshot of an active connection.
///
/// The human-readable `id` is resolved through the settings provider named
/// by `service_name`, not owned by the manager itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveConnection {
    /// D-Bus object path of the active connection.
    pub path: String,
    /// Current activation state.
    pub state: ActiveConnectionState,
    /// Bus name of the settings provider owning this connection's profile.
    pub service_name: String,
    /// Object path of the settings profile within the provider.
    pub connection_path: String,
    /// Human-readable connection name (`connection.id` in the settings).
    pub id: String,
}

/// Errors that can occur while querying BarcodeManager.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A D-Bus communication error occurred.
    #[error("D-Bus error: {0}")]
    Dbus(#[from] zbus::Error),

    /// A D-Bus operation failed with additional context about what was
    /// being queried.
    #[error("{context}: {source}")]
    DbusOperation {
        context: String,
        #[source]
        source: zbus::Error,
    },

    /// The settings reply lacks an expected section or key.
    #[error("settings missing '{key}' in section '{section}'")]
    MissingSetting {
        section: &'static str,
        key: &'static str,
    },

    /// A settings value has an unexpected type.
    #[error("setting '{section}.{key}' is not a {expected}")]
    InvalidSettingType {
        section: &'static str,
        key: &'static str,
        expected: &'static str,
    },
}
