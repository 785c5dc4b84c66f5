use zbus::Connection;

use crate::Result;
use crate::active_connection::list_active_connections;
use crate::device::list_devices;
use crate::models::{ActiveConnection, Device, ManagerState};
use crate::proxies::BMProxy;

/// High-level interface to BarcodeManager over D-Bus.
///
/// Provides read-only queries against the management daemon: device
/// enumeration, active connection enumeration, and the overall manager
/// state. All calls are sequential and stateless; nothing is cached.
#[derive(Clone)]
pub struct BarcodeManager {
    conn: Connection,
}

impl BarcodeManager {
    /// Creates a new `BarcodeManager` connected to the system D-Bus.
    pub async fn new() -> Result<Self> {
        let conn = Connection::system().await?;
        Ok(Self { conn })
    }

    /// Creates a `BarcodeManager` on an existing bus connection.
    ///
    /// Useful for talking to the daemon on a non-standard bus, e.g. a
    /// session bus in a test harness.
    pub fn with_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Returns the overall state of the daemon.
    pub async fn state(&self) -> Result<ManagerState> {
        let proxy = BMProxy::new(&self.conn).await?;
        Ok(proxy.state().await?.into())
    }

    /// Lists all barcode devices managed by BarcodeManager.
    pub async fn list_devices(&self) -> Result<Vec<Device>> {
        list_devices(&self.conn).await
    }

    /// Lists all active connections, with each name resolved through the
    /// settings provider that owns the connection's profile.
    pub async fn active_connections(&self) -> Result<Vec<ActiveConnection>> {
        list_active_connections(&self.conn).await
    }
}
