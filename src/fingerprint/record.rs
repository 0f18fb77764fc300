use crate::errors::FingerprintError;
use crate::fingerprint::ua::UaPlatform;
use serde::{Deserialize, Serialize};

// * FingerprintRecord: one complete, validated browser identity sample.
// *
// * Two halves: what the network observes (headers, HTTP/TLS negotiation)
// * and what page JavaScript observes (navigator, screen, devices, codecs).
// * Immutable after creation; an update is a new record. Eviction from the
// * identity cache is a pure removal, records hold no external resources.
// *
// * Wire field names follow the upstream fingerprint collector (camelCase,
// * raw header names); internal names are snake_case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FingerprintRecord {
    pub id: String,
    pub collected_at: String,
    pub request_fingerprint: RequestFingerprint,
    pub browser_fingerprint: BrowserFingerprint,
}

impl FingerprintRecord {
    // * Deserialize + validate in one step: a record is never partially valid.
    pub fn from_json(raw: &str) -> Result<Self, FingerprintError> {
        let record: Self = serde_json::from_str(raw)?;
        record.validate()?;
        Ok(record)
    }

    pub fn to_json(&self) -> Result<String, FingerprintError> {
        Ok(serde_json::to_string(self)?)
    }

    // * Cross-field consistency checks. Optional fields may be absent, but
    // * present fields must agree with each other:
    // *   - userAgentData.mobile must match the sec-ch-ua-mobile header;
    // *   - sec-ch-ua-platform must name a known platform and agree with
    // *     the OS the User-Agent string implies.
    pub fn validate(&self) -> Result<(), FingerprintError> {
        let headers = &self.request_fingerprint.headers;
        let ua_data = &self.browser_fingerprint.user_agent_data;

        if let Some(mobile_header) = headers.sec_ch_ua_mobile.as_deref() {
            let expected = if ua_data.mobile { "?1" } else { "?0" };
            if mobile_header != expected {
                return Err(FingerprintError::InvalidFingerprint(format!(
                    "sec-ch-ua-mobile is {mobile_header:?} but userAgentData.mobile is {}",
                    ua_data.mobile
                )));
            }
        }

        if let Some(platform_header) = headers.sec_ch_ua_platform.as_deref() {
            let claimed: UaPlatform = platform_header.parse()?;

            let user_agent = self
                .browser_fingerprint
                .user_agent
                .as_deref()
                .or(headers.user_agent.as_deref());
            if let Some(ua) = user_agent {
                // * An unclassifiable UA implies no platform constraint.
                if let Some(implied) = UaPlatform::implied_by_user_agent(ua) {
                    if implied != claimed && claimed != UaPlatform::Unknown {
                        return Err(FingerprintError::InvalidFingerprint(format!(
                            "sec-ch-ua-platform claims {claimed} but the User-Agent implies {implied}"
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

// * Network-observable half: the header set as captured on the wire
// * (HTTP/2 pseudo-headers included) plus negotiated protocol/TLS data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestFingerprint {
    pub headers: FingerprintHeaders,
    #[serde(default)]
    pub http_version: Option<String>,
    #[serde(default)]
    pub tls_version: Option<String>,
    #[serde(default)]
    pub tls_name: Option<String>,
    #[serde(default)]
    pub tls_standard_name: Option<String>,
}

// * Fixed known-header set. Every field optional: absence means the sampled
// * environment never sent that header.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerprintHeaders {
    #[serde(rename = ":method")]
    pub method: Option<String>,
    #[serde(rename = ":authority")]
    pub authority: Option<String>,
    #[serde(rename = ":scheme")]
    pub scheme: Option<String>,
    #[serde(rename = ":path")]
    pub path: Option<String>,
    #[serde(rename = "sec-ch-ua")]
    pub sec_ch_ua: Option<String>,
    #[serde(rename = "sec-ch-ua-mobile")]
    pub sec_ch_ua_mobile: Option<String>,
    #[serde(rename = "sec-ch-ua-platform")]
    pub sec_ch_ua_platform: Option<String>,
    #[serde(rename = "upgrade-insecure-requests")]
    pub upgrade_insecure_requests: Option<String>,
    #[serde(rename = "user-agent")]
    pub user_agent: Option<String>,
    pub accept: Option<String>,
    #[serde(rename = "sec-fetch-site")]
    pub sec_fetch_site: Option<String>,
    #[serde(rename = "sec-fetch-mode")]
    pub sec_fetch_mode: Option<String>,
    #[serde(rename = "sec-fetch-dest")]
    pub sec_fetch_dest: Option<String>,
    pub referer: Option<String>,
    #[serde(rename = "accept-encoding")]
    pub accept_encoding: Option<String>,
    #[serde(rename = "accept-language")]
    pub accept_language: Option<String>,
    pub cookie: Option<String>,
}

// * JS-observable half: everything a fingerprinting script can read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserFingerprint {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub oscpu: Option<String>,
    #[serde(default)]
    pub do_not_track: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub product_sub: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub vendor_sub: Option<String>,
    #[serde(default)]
    pub app_code_name: Option<String>,
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub app_version: Option<String>,
    #[serde(default)]
    pub webdriver: Option<bool>,
    #[serde(default)]
    pub max_touch_points: Option<i64>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub hardware_concurrency: Option<i64>,
    #[serde(default)]
    pub device_memory: Option<i64>,
    pub user_agent_data: UserAgentData,
    pub extra_properties: ExtraProperties,
    pub video_card: VideoCard,
    pub multimedia_devices: MultimediaDevices,
    pub battery: Battery,
    pub audio_codecs: AudioCodecs,
    pub video_codecs: VideoCodecs,
    pub screen: Screen,
    pub plugins: Vec<Plugin>,
    pub mime_types: Vec<String>,
    #[serde(default)]
    pub fonts: Option<Vec<String>>,
}

// * Structured navigator.userAgentData sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAgentData {
    pub brands: Vec<Brand>,
    pub mobile: bool,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub architecture: Option<String>,
    #[serde(default)]
    pub bitness: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub platform_version: Option<String>,
    #[serde(default)]
    pub ua_full_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub brand: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtraProperties {
    pub vendor_flavors: Option<Vec<String>>,
    pub is_bluetooth_supported: Option<bool>,
    pub global_privacy_control: Option<bool>,
    pub pdf_viewer_enabled: Option<bool>,
    pub installed_apps: Option<Vec<String>>,
}

// * One enumerated media device (speaker, mic or webcam).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaDevice {
    pub device_id: Option<String>,
    pub kind: Option<String>,
    pub label: Option<String>,
    pub group_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MultimediaDevices {
    pub speakers: Option<Vec<MediaDevice>>,
    pub micros: Option<Vec<MediaDevice>>,
    pub webcams: Option<Vec<MediaDevice>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Battery {
    pub charging: Option<bool>,
    pub charging_time: Option<f64>,
    pub discharging_time: Option<f64>,
    pub level: Option<f64>,
}

// * Codec support strings as reported by canPlayType ("probably"/"maybe"/"").
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioCodecs {
    pub ogg: Option<String>,
    pub mp3: Option<String>,
    pub wav: Option<String>,
    pub m4a: Option<String>,
    pub aac: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoCodecs {
    pub ogg: Option<String>,
    pub h264: Option<String>,
    pub webm: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Screen {
    pub avail_height: Option<i64>,
    pub avail_width: Option<i64>,
    pub avail_top: Option<i64>,
    pub avail_left: Option<i64>,
    pub pixel_depth: Option<i64>,
    pub color_depth: Option<i64>,
    pub height: Option<i64>,
    pub width: Option<i64>,
    pub inner_height: Option<i64>,
    pub inner_width: Option<i64>,
    pub outer_height: Option<i64>,
    pub outer_width: Option<i64>,
    pub screen_x: Option<i64>,
    pub page_x_offset: Option<i64>,
    pub page_y_offset: Option<i64>,
    pub device_pixel_ratio: Option<f64>,
    pub client_width: Option<i64>,
    pub client_height: Option<i64>,
    #[serde(rename = "hasHDR")]
    pub has_hdr: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    pub name: String,
    pub description: String,
    pub mime_types: Vec<PluginMimeType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginMimeType {
    #[serde(rename = "type")]
    pub mime_type: String,
    pub suffixes: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoCard {
    pub vendor: Option<String>,
    pub renderer: Option<String>,
}
