//! A Rust library for querying BarcodeManager over D-Bus.
//!
//! This crate provides a small, typed async client for the BarcodeManager
//! daemon:
//!
//! - Listing barcode devices and their activation state
//! - Listing active connections, resolving each human-readable name
//!   through the settings provider that owns the connection's profile
//! - Rendering the classic one-line-per-object status report
//!
//! # Example
//!
//! ```no_run
//! use bmrs::BarcodeManager;
//!
//! # async fn example() -> bmrs::Result<()> {
//! let bm = BarcodeManager::new().await?;
//!
//! for device in bm.list_devices().await? {
//!     println!("{}", bmrs::report::device_line(&device));
//! }
//! for connection in bm.active_connections().await? {
//!     println!("{}", bmrs::report::connection_line(&connection));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return `Result<T, ClientError>`. The error type carries
//! specific variants for malformed settings replies (missing key path,
//! wrong value type) so that a misbehaving provider fails loudly instead
//! of producing a blank name. There is deliberately no retry or recovery:
//! a vanished object or absent service aborts the query.
//!
//! # Logging
//!
//! This crate uses the [`log`](https://docs.rs/log) facade for logging. To
//! see log output, add a logging implementation like `env_logger`:
//!
//! ```no_run,ignore
//! env_logger::init();
//! // ...
//! ```

// Internal implementation modules
mod active_connection;
mod device;
mod proxies;
mod settings;

// Public API modules
pub mod manager;
pub mod models;
pub mod report;

// Re-exported public API
pub use manager::BarcodeManager;
pub use models::{
    ActiveConnection, ActiveConnectionState, ClientError, Device, DeviceState, DeviceType,
    ManagerState,
};
pub use settings::ConnectionSettings;

/// A specialized `Result` type for BarcodeManager queries.
pub type Result<T> = std::result::Result<T, ClientError>;
