use cloak_flow::errors::FingerprintError;
use cloak_flow::fingerprint::FingerprintRecord;
use serde_json::json;

// * A minimal but structurally complete sample, shaped like the output of
// * a real fingerprint collector.
fn sample_record_json() -> serde_json::Value {
    json!({
        "id": "fp-7c2e",
        "collectedAt": "2026-07-14T09:21:45Z",
        "requestFingerprint": {
            "headers": {
                ":method": "GET",
                ":authority": "example.com",
                ":scheme": "https",
                ":path": "/",
                "sec-ch-ua": "\"Chromium\";v=\"127\", \"Not)A;Brand\";v=\"99\"",
                "sec-ch-ua-mobile": "?0",
                "sec-ch-ua-platform": "\"Windows\"",
                "upgrade-insecure-requests": "1",
                "user-agent": "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/127.0.0.0 Safari/537.36",
                "accept": "text/html,application/xhtml+xml",
                "accept-language": "en-US,en;q=0.9"
            },
            "httpVersion": "2.0",
            "tlsVersion": "772",
            "tlsName": "TLS_AES_128_GCM_SHA256",
            "tlsStandardName": "TLS 1.3"
        },
        "browserFingerprint": {
            "language": "en-US",
            "languages": ["en-US", "en"],
            "product": "Gecko",
            "productSub": "20030107",
            "vendor": "Google Inc.",
            "appCodeName": "Mozilla",
            "appName": "Netscape",
            "webdriver": false,
            "maxTouchPoints": 0,
            "userAgent": "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/127.0.0.0 Safari/537.36",
            "platform": "Win32",
            "hardwareConcurrency": 8,
            "deviceMemory": 8,
            "userAgentData": {
                "brands": [
                    {"brand": "Chromium", "version": "127"},
                    {"brand": "Not)A;Brand", "version": "99"}
                ],
                "mobile": false,
                "platform": "Windows",
                "architecture": "x86",
                "bitness": "64",
                "platformVersion": "15.0.0",
                "uaFullVersion": "127.0.6533.17"
            },
            "extraProperties": {
                "pdfViewerEnabled": true,
                "globalPrivacyControl": false
            },
            "videoCard": {
                "vendor": "Google Inc. (NVIDIA)",
                "renderer": "ANGLE (NVIDIA GeForce RTX 3060)"
            },
            "multimediaDevices": {
                "speakers": [
                    {"deviceId": "default", "kind": "audiooutput", "label": "", "groupId": "g1"}
                ],
                "micros": [],
                "webcams": []
            },
            "battery": {
                "charging": true,
                "chargingTime": 0.0,
                "dischargingTime": null,
                "level": 1.0
            },
            "audioCodecs": {
                "ogg": "probably",
                "mp3": "probably",
                "wav": "probably",
                "m4a": "maybe",
                "aac": "probably"
            },
            "videoCodecs": {
                "ogg": "",
                "h264": "probably",
                "webm": "probably"
            },
            "screen": {
                "availHeight": 1392,
                "availWidth": 2560,
                "pixelDepth": 24,
                "colorDepth": 24,
                "height": 1440,
                "width": 2560,
                "innerHeight": 1305,
                "innerWidth": 2560,
                "devicePixelRatio": 1.0,
                "hasHDR": false
            },
            "plugins": [
                {
                    "name": "PDF Viewer",
                    "description": "Portable Document Format",
                    "mimeTypes": [
                        {"type": "application/pdf", "suffixes": "pdf"}
                    ]
                }
            ],
            "mimeTypes": ["application/pdf"],
            "fonts": ["Arial", "Calibri", "Segoe UI"]
        }
    })
}

#[test]
fn test_load_and_wire_round_trip() {
    let raw = sample_record_json().to_string();
    let record = FingerprintRecord::from_json(&raw).unwrap();

    assert_eq!(record.id, "fp-7c2e");
    assert_eq!(record.collected_at, "2026-07-14T09:21:45Z");
    assert_eq!(
        record.request_fingerprint.headers.method.as_deref(),
        Some("GET")
    );
    assert_eq!(
        record.browser_fingerprint.user_agent_data.brands[0].brand,
        "Chromium"
    );
    assert_eq!(
        record.browser_fingerprint.battery.charging_time,
        Some(0.0)
    );
    assert_eq!(record.browser_fingerprint.screen.has_hdr, Some(false));

    // * Wire round-trip preserves every documented field.
    let round_tripped = FingerprintRecord::from_json(&record.to_json().unwrap()).unwrap();
    assert_eq!(round_tripped, record);
}

#[test]
fn test_wire_names_use_documented_aliases() {
    let raw = sample_record_json().to_string();
    let record = FingerprintRecord::from_json(&raw).unwrap();

    let wire: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
    assert!(wire.get("collectedAt").is_some());
    assert!(wire["requestFingerprint"]["headers"].get(":authority").is_some());
    assert!(wire["browserFingerprint"]["battery"].get("chargingTime").is_some());
    assert!(wire["browserFingerprint"]["screen"].get("hasHDR").is_some());
}

#[test]
fn test_absent_optional_fields_are_accepted() {
    let mut value = sample_record_json();
    let browser = value["browserFingerprint"].as_object_mut().unwrap();
    browser.remove("fonts");
    browser.remove("deviceMemory");
    value["requestFingerprint"]
        .as_object_mut()
        .unwrap()
        .remove("tlsName");

    let record = FingerprintRecord::from_json(&value.to_string()).unwrap();
    assert_eq!(record.browser_fingerprint.fonts, None);
    assert_eq!(record.browser_fingerprint.device_memory, None);
    assert_eq!(record.request_fingerprint.tls_name, None);
}

#[test]
fn test_mobile_flag_must_match_client_hint_header() {
    let mut value = sample_record_json();
    value["browserFingerprint"]["userAgentData"]["mobile"] = json!(true);

    // * mobile=true with sec-ch-ua-mobile "?0" is self-contradictory.
    match FingerprintRecord::from_json(&value.to_string()) {
        Err(FingerprintError::InvalidFingerprint(msg)) => {
            assert!(msg.contains("sec-ch-ua-mobile"));
        }
        other => panic!("Expected InvalidFingerprint, got {:?}", other.is_ok()),
    }
}

#[test]
fn test_platform_header_must_agree_with_user_agent() {
    let mut value = sample_record_json();
    value["requestFingerprint"]["headers"]["sec-ch-ua-platform"] = json!("\"macOS\"");

    // * The User-Agent still claims Windows NT.
    assert!(matches!(
        FingerprintRecord::from_json(&value.to_string()),
        Err(FingerprintError::InvalidFingerprint(_))
    ));
}

#[test]
fn test_platform_header_outside_enumeration_is_rejected() {
    let mut value = sample_record_json();
    value["requestFingerprint"]["headers"]["sec-ch-ua-platform"] = json!("\"TempleOS\"");

    assert!(matches!(
        FingerprintRecord::from_json(&value.to_string()),
        Err(FingerprintError::InvalidFingerprint(_))
    ));
}

#[test]
fn test_truncated_input_is_rejected() {
    let raw = sample_record_json().to_string();
    assert!(matches!(
        FingerprintRecord::from_json(&raw[..raw.len() / 2]),
        Err(FingerprintError::Serde(_))
    ));
}
