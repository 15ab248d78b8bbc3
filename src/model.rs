use crate::api::types::{BasicServiceSet, Device};

/// Placeholder written into the Teams location column. Administrators replace
/// it with a real location identifier before running the generated commands.
pub const LOCATION_ID_PLACEHOLDER: &str = "ENTER LOCATION ID HERE";

/// One spreadsheet row: a single access point / broadcast identifier pairing
/// together with the editable location placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub name: String,
    pub model: String,
    pub bssid: String,
    pub ssid: String,
    pub band: String,
    pub channel: Option<u16>,
    pub location_id: String,
}

impl OutputRow {
    /// Builds the row for one service set broadcast by `device`. The BSSID is
    /// re-separated with hyphens so it can be pasted into Teams tooling, which
    /// rejects the colon form the dashboard returns.
    pub fn new(device: &Device, bss: &BasicServiceSet) -> Self {
        Self {
            name: device.name_or_blank(),
            model: device.model.clone(),
            bssid: normalize_bssid(&bss.bssid),
            ssid: bss.ssid_name.clone(),
            band: bss.band.clone(),
            channel: bss.channel,
            location_id: LOCATION_ID_PLACEHOLDER.to_string(),
        }
    }
}

/// Rewrites a colon-separated MAC into the hyphen-separated form. Input that
/// already uses hyphens passes through unchanged.
pub fn normalize_bssid(raw: &str) -> String {
    raw.replace(':', "-")
}
