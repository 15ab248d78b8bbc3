use serde::Deserialize;

/// Model-name prefix that marks wireless access point hardware in the
/// dashboard inventory (MR36, MR46, ...). Other families (MS switches,
/// MX appliances) never broadcast BSSIDs.
pub const AP_MODEL_PREFIX: &str = "MR";

/// One dashboard organization visible to the API key.
#[derive(Debug, Clone, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
}

/// One network inside an organization.
#[derive(Debug, Clone, Deserialize)]
pub struct Network {
    pub id: String,
    pub name: String,
}

/// One managed device in an organization's inventory. The dashboard omits or
/// nulls `name` for hardware nobody has labelled yet; everything else is
/// always present.
#[derive(Debug, Clone, Deserialize)]
pub struct Device {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub mac: String,
    pub serial: String,
    #[serde(default)]
    pub firmware: String,
}

impl Device {
    pub fn name_or_blank(&self) -> String {
        self.name.clone().unwrap_or_default()
    }

    pub fn is_access_point(&self) -> bool {
        self.model.starts_with(AP_MODEL_PREFIX)
    }
}

/// Radio status for one access point, as returned by
/// `GET /devices/{serial}/wireless/status`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirelessStatus {
    #[serde(default)]
    pub basic_service_sets: Vec<BasicServiceSet>,
}

/// One broadcast identifier: a single radio/band combination currently
/// beaconing an SSID. An access point reports zero or more of these.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicServiceSet {
    pub bssid: String,
    #[serde(default)]
    pub ssid_name: String,
    #[serde(default)]
    pub band: String,
    /// Absent when the radio is disabled.
    #[serde(default)]
    pub channel: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_point_models_match_the_family_prefix() {
        let ap = Device {
            name: Some("AP-US-01".to_string()),
            model: "MR36".to_string(),
            mac: "aa:bb:cc:dd:ee:ff".to_string(),
            serial: "Q1AA-0001".to_string(),
            firmware: "wireless-29-5-1".to_string(),
        };
        assert!(ap.is_access_point());

        let switch = Device {
            model: "MS220-8P".to_string(),
            ..ap.clone()
        };
        assert!(!switch.is_access_point());

        let unknown = Device {
            model: String::new(),
            ..ap
        };
        assert!(!unknown.is_access_point());
    }

    #[test]
    fn unnamed_devices_deserialize_with_a_blank_name() {
        let body = r#"{"name": null, "model": "MR46", "mac": "00:11:22:33:44:55",
                       "serial": "Q1BB-0002", "firmware": "wireless-29-5-1"}"#;
        let device: Device = serde_json::from_str(body).expect("device parsed");
        assert_eq!(device.name_or_blank(), "");
        assert_eq!(device.serial, "Q1BB-0002");
    }

    #[test]
    fn wireless_status_tolerates_missing_service_set_list() {
        let status: WirelessStatus = serde_json::from_str("{}").expect("status parsed");
        assert!(status.basic_service_sets.is_empty());
    }

    #[test]
    fn service_sets_parse_dashboard_casing_and_extra_fields() {
        let body = r#"{
            "basicServiceSets": [
                {"ssidName": "Corp", "band": "2.4", "bssid": "AA:BB:CC:DD:EE:FF",
                 "channel": 6, "power": "18 dBm", "visible": true, "broadcasting": true}
            ]
        }"#;
        let status: WirelessStatus = serde_json::from_str(body).expect("status parsed");
        assert_eq!(status.basic_service_sets.len(), 1);
        let bss = &status.basic_service_sets[0];
        assert_eq!(bss.ssid_name, "Corp");
        assert_eq!(bss.band, "2.4");
        assert_eq!(bss.channel, Some(6));
    }
}
