use tracing::{debug, info, instrument};

use crate::api::WirelessStatusSource;
use crate::api::types::Device;
use crate::error::Result;
use crate::model::OutputRow;

/// Drops everything that is not an access point from `devices`. Inventory
/// order is preserved so the report reads the same way the dashboard does.
pub fn filter_access_points(devices: Vec<Device>) -> Vec<Device> {
    devices
        .into_iter()
        .filter(Device::is_access_point)
        .collect()
}

/// Walks `devices` in order, fetches each access point's radio status, and
/// emits one row per broadcast identifier. `on_progress` is invoked after each
/// device with the completed and total counts so the caller can render a
/// counter. The first failed status fetch aborts the whole collection.
#[instrument(level = "info", skip_all, fields(device_count = devices.len()))]
pub fn collect_rows<S, F>(
    source: &S,
    devices: &[Device],
    mut on_progress: F,
) -> Result<Vec<OutputRow>>
where
    S: WirelessStatusSource,
    F: FnMut(usize, usize),
{
    let total = devices.len();
    let mut rows = Vec::new();
    for (index, device) in devices.iter().enumerate() {
        let status = source.wireless_status(&device.serial)?;
        debug!(
            serial = %device.serial,
            service_sets = status.basic_service_sets.len(),
            "radio status fetched"
        );
        for bss in &status.basic_service_sets {
            rows.push(OutputRow::new(device, bss));
        }
        on_progress(index + 1, total);
    }
    info!(row_count = rows.len(), "collected broadcast identifiers");
    Ok(rows)
}
