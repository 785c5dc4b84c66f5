//! Typed access to connection settings replies.
//!
//! A settings provider returns connection profiles as a nested map
//! (`a{sa{sv}}`). The raw shape is easy to misread, so lookups go through
//! [`ConnectionSettings`], which fails with a named error when a section,
//! key, or value type is not what the caller declared.

use std::collections::HashMap;
use zbus::Connection;
use zvariant::OwnedValue;

use crate::Result;
use crate::models::ClientError;
use crate::proxies::BMSettingsConnectionProxy;

/// The decoded reply of a settings provider's `GetSettings` call.
#[derive(Debug)]
pub struct ConnectionSettings(HashMap<String, HashMap<String, OwnedValue>>);

impl ConnectionSettings {
    /// Wraps a raw settings map.
    pub fn new(settings: HashMap<String, HashMap<String, OwnedValue>>) -> Self {
        Self(settings)
    }

    /// The human-readable connection name, stored at `connection.id`.
    ///
    /// Fails with [`ClientError::MissingSetting`] if either level of the
    /// key path is absent, and [`ClientError::InvalidSettingType`] if the
    /// stored value is not a string. A malformed profile is an error, never
    /// a blank name.
    pub fn id(&self) -> Result<String> {
        self.get_str("connection", "id")
    }

    /// Looks up a string value at `section.key`.
    fn get_str(&self, section: &'static str, key: &'static str) -> Result<String> {
        let values = self
            .0
            .get(section)
            .ok_or(ClientError::MissingSetting { section, key })?;
        let value = values
            .get(key)
            .ok_or(ClientError::MissingSetting { section, key })?;

        value
            .downcast_ref::<&str>()
            .map(str::to_owned)
            .map_err(|_| ClientError::InvalidSettingType {
                section,
                key,
                expected: "string",
            })
    }
}

/// Fetches a connection profile from its settings provider.
///
/// The provider is addressed by the bus name and object path the active
/// connection reported (`ServiceName` and `Connection`), so there is no
/// default destination here.
pub(crate) async fn get_settings(
    conn: &Connection,
    service: &str,
    path: &str,
) -> Result<ConnectionSettings> {
    let proxy = BMSettingsConnectionProxy::builder(conn)
        .destination(service.to_owned())?
        .path(path.to_owned())?
        .build()
        .await?;

    let settings = proxy
        .get_settings()
        .await
        .map_err(|e| ClientError::DbusOperation {
            context: format!("failed to get settings from {service} at {path}"),
            source: e,
        })?;

    Ok(ConnectionSettings::new(settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use zvariant::Value;

    fn owned(v: Value<'_>) -> OwnedValue {
        OwnedValue::try_from(v).expect("value should convert to OwnedValue")
    }

    fn settings_with_id(id: &str) -> ConnectionSettings {
        let mut connection = HashMap::new();
        connection.insert("id".to_string(), owned(Value::from(id)));
        connection.insert("autoconnect".to_string(), owned(Value::from(true)));

        let mut all = HashMap::new();
        all.insert("connection".to_string(), connection);
        ConnectionSettings::new(all)
    }

    #[test]
    fn id_resolves_nested_key_path() {
        let settings = settings_with_id("Home Wi-Fi");
        assert_eq!(settings.id().unwrap(), "Home Wi-Fi");
    }

    #[test]
    fn missing_connection_section_is_an_error() {
        let settings = ConnectionSettings::new(HashMap::new());
        match settings.id() {
            Err(ClientError::MissingSetting { section, key }) => {
                assert_eq!(section, "connection");
                assert_eq!(key, "id");
            }
            other => panic!("expected MissingSetting, got {other:?}"),
        }
    }

    #[test]
    fn missing_id_key_is_an_error() {
        let mut all = HashMap::new();
        all.insert("connection".to_string(), HashMap::new());
        let settings = ConnectionSettings::new(all);
        assert!(matches!(
            settings.id(),
            Err(ClientError::MissingSetting {
                section: "connection",
                key: "id",
            })
        ));
    }

    #[test]
    fn non_string_id_is_a_type_error() {
        let mut connection = HashMap::new();
        connection.insert("id".to_string(), owned(Value::from(42u32)));
        let mut all = HashMap::new();
        all.insert("connection".to_string(), connection);
        let settings = ConnectionSettings::new(all);

        assert!(matches!(
            settings.id(),
            Err(ClientError::InvalidSettingType {
                section: "connection",
                key: "id",
                expected: "string",
            })
        ));
    }
}
