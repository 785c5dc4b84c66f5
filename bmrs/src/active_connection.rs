//! Active connection enumeration.
//!
//! An active connection lives on the manager service, but its durable
//! profile (and therefore its human-readable name) is owned by a separate
//! settings provider. Listing therefore takes two hops per connection:
//! fetch `State`/`Connection`/`ServiceName` from the manager, then ask the
//! named provider for the profile and read `connection.id` out of it.

use zbus::Connection;

use crate::Result;
use crate::models::{ActiveConnection, ClientError};
use crate::proxies::{BMActiveConnectionProxy, BMProxy};
use crate::settings::get_settings;

/// Lists all active connections with their resolved names.
pub(crate) async fn list_active_connections(conn: &Connection) -> Result<Vec<ActiveConnection>> {
    let proxy = BMProxy::new(conn).await?;
    let paths = proxy
        .active_connections()
        .await
        .map_err(|e| ClientError::DbusOperation {
            context: "failed to get active connections from BarcodeManager".to_string(),
            source: e,
        })?;

    let mut connections = Vec::new();
    for p in paths {
        let ac_proxy = BMActiveConnectionProxy::builder(conn)
            .path(p.clone())?
            .build()
            .await?;

        let raw_state = ac_proxy
            .state()
            .await
            .map_err(|e| ClientError::DbusOperation {
                context: format!("failed to get state for active connection {}", p.as_str()),
                source: e,
            })?;

        let connection_path =
            ac_proxy
                .connection()
                .await
                .map_err(|e| ClientError::DbusOperation {
                    context: format!(
                        "failed to get settings path for active connection {}",
                        p.as_str()
                    ),
                    source: e,
                })?;

        let service_name =
            ac_proxy
                .service_name()
                .await
                .map_err(|e| ClientError::DbusOperation {
                    context: format!(
                        "failed to get settings service for active connection {}",
                        p.as_str()
                    ),
                    source: e,
                })?;

        let settings = get_settings(conn, &service_name, connection_path.as_str()).await?;
        let id = settings.id()?;

        connections.push(ActiveConnection {
            path: p.to_string(),
            state: raw_state.into(),
            service_name,
            connection_path: connection_path.to_string(),
            id,
        });
    }
    Ok(connections)
}
