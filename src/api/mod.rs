//! Blocking client for the Meraki dashboard REST API.

pub mod types;

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::types::{Device, Network, Organization, WirelessStatus};
use crate::error::Result;

/// Public dashboard endpoint used when no override is supplied.
pub const DEFAULT_BASE_URL: &str = "https://api.meraki.com/api/v1";

/// Header that carries the API key on every request.
pub const API_KEY_HEADER: &str = "X-Cisco-Meraki-API-Key";

/// Ceiling for a single request. Organization-wide device listings can take
/// the dashboard a long time to assemble, so this is deliberately generous.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Normalises an operator-supplied endpoint so request paths can be appended
/// directly: whitespace and trailing slashes are dropped and the API version
/// segment is added when missing.
pub fn normalize_base_url(base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    if base.contains("/api/v1") {
        base.to_string()
    } else {
        format!("{base}/api/v1")
    }
}

/// HTTP client bound to one dashboard endpoint and API key. Requests are
/// synchronous; the tool walks access points one at a time.
pub struct MerakiClient {
    base_url: String,
    api_key: String,
    http: reqwest::blocking::Client,
}

impl MerakiClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: normalize_base_url(base_url),
            api_key: api_key.to_string(),
            http,
        })
    }

    /// Issues one GET against `path` and deserialises the JSON body. Transport
    /// failures and non-success statuses abort the run; a 2xx body that is not
    /// the promised JSON is reported separately as a decode failure.
    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "dashboard request");
        let mut request = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .header("Content-Type", "application/json")
            .header("Accept", "*/*");
        if !query.is_empty() {
            request = request.query(query);
        }
        let body = request.send()?.error_for_status()?.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Lists every organization visible to the API key.
    pub fn organizations(&self) -> Result<Vec<Organization>> {
        self.get("/organizations", &[])
    }

    /// Lists the networks inside one organization.
    pub fn networks(&self, org_id: &str) -> Result<Vec<Network>> {
        self.get(&format!("/organizations/{org_id}/networks"), &[])
    }

    /// Lists one organization's device inventory. A non-empty `name_filter`
    /// is passed through so the dashboard matches on name server-side.
    pub fn devices(&self, org_id: &str, name_filter: Option<&str>) -> Result<Vec<Device>> {
        let path = format!("/organizations/{org_id}/devices");
        match name_filter {
            Some(name) if !name.is_empty() => self.get(&path, &[("name", name)]),
            _ => self.get(&path, &[]),
        }
    }
}

/// Source of per-device radio status. Row collection depends on this trait
/// rather than on the concrete client so tests can feed it canned data.
pub trait WirelessStatusSource {
    fn wireless_status(&self, serial: &str) -> Result<WirelessStatus>;
}

impl WirelessStatusSource for MerakiClient {
    fn wireless_status(&self, serial: &str) -> Result<WirelessStatus> {
        self.get(&format!("/devices/{serial}/wireless/status"), &[])
    }
}
