//! `bm-state`: prints the activation status of every barcode device and
//! active connection known to BarcodeManager.
//!
//! One linear pass over the daemon's objects, no arguments, no recovery:
//! any failed query aborts with the error chain on stderr and a nonzero
//! exit, leaving stdout with whatever was already reported.

use anyhow::Context;
use log::debug;

use bmrs::BarcodeManager;
use bmrs::report::write_report;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let bm = BarcodeManager::new()
        .await
        .context("failed to connect to the system bus")?;

    let devices = bm
        .list_devices()
        .await
        .context("failed to list barcode devices")?;
    debug!("Found {} device(s)", devices.len());

    let connections = bm
        .active_connections()
        .await
        .context("failed to list active connections")?;
    debug!("Found {} active connection(s)", connections.len());

    write_report(&mut std::io::stdout().lock(), &devices, &connections)
        .context("failed to write status report")?;

    Ok(())
}
