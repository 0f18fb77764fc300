use crate::config::constants::{
    CHROMIUM_HEADLESS_SEC_CH_UA, CHROMIUM_HEADLESS_SEC_CH_UA_MOBILE,
    CHROMIUM_HEADLESS_SEC_CH_UA_PLATFORM, CHROMIUM_HEADLESS_USER_AGENT,
    FIREFOX_HEADLESS_USER_AGENT, WEBKIT_HEADLESS_USER_AGENT,
};
use crate::errors::FingerprintError;
use crate::fingerprint::generator::HeaderGenerator;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// * The fixed enumeration of rendering engines the automation layer drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserEngine {
    Chromium,
    Firefox,
    Webkit,
}

impl BrowserEngine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chromium => "chromium",
            Self::Firefox => "firefox",
            Self::Webkit => "webkit",
        }
    }
}

impl FromStr for BrowserEngine {
    type Err = FingerprintError;

    // * Anything outside the enumeration is a caller bug: fail fast,
    // * never silently default to some engine.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chromium" => Ok(Self::Chromium),
            "firefox" => Ok(Self::Firefox),
            "webkit" => Ok(Self::Webkit),
            other => Err(FingerprintError::UnsupportedBrowserEngine(
                other.to_string(),
            )),
        }
    }
}

impl fmt::Display for BrowserEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// * Merges a generated header set into an outgoing request's headers,
// * pinning engine-specific identity headers last so the network signature
// * always matches the real rendering engine underneath.
// *
// * Stateless: no caching, no globals. Callers wanting one stable header
// * map per session cache the result (see session::SessionHeaderCache).
#[derive(Debug, Clone, Copy)]
pub struct FingerprintInjector {
    header_generator: HeaderGenerator,
}

impl FingerprintInjector {
    // * The generator is injected explicitly; there is no hidden default.
    pub fn new(header_generator: HeaderGenerator) -> Self {
        Self { header_generator }
    }

    // * Merge precedence, lowest to highest:
    // *   1. the request's existing headers,
    // *   2. the common header set (User-Agent excluded: it must be
    // *      engine-specific and deterministic here, never random),
    // *   3. the engine's fixed identity headers.
    pub fn compute_headers(&self, existing: &HeaderMap, engine: BrowserEngine) -> HeaderMap {
        let mut merged = existing.clone();

        for (name, value) in self.header_generator.common_headers().iter() {
            merged.insert(name.clone(), value.clone());
        }
        for (name, value) in Self::engine_headers(engine).iter() {
            merged.insert(name.clone(), value.clone());
        }

        tracing::trace!(engine = %engine, headers = merged.len(), "Computed fingerprint headers");
        merged
    }

    // * String boundary for the automation layer, which reports the engine
    // * by name. Surfaces `UnsupportedBrowserEngine` for anything unknown.
    pub fn compute_headers_named(
        &self,
        existing: &HeaderMap,
        engine: &str,
    ) -> Result<HeaderMap, FingerprintError> {
        Ok(self.compute_headers(existing, engine.parse()?))
    }

    // * Fully replaces the request's header set with the merged result;
    // * the original headers for that request are discarded.
    pub fn inject(&self, headers: &mut HeaderMap, engine: BrowserEngine) {
        *headers = self.compute_headers(headers, engine);
    }

    // * Fixed per-engine identity table. Only Chromium emits the
    // * Sec-Ch-Ua family; Firefox and WebKit get a bare User-Agent.
    fn engine_headers(engine: BrowserEngine) -> HeaderMap {
        let mut headers = HeaderMap::new();
        match engine {
            BrowserEngine::Chromium => {
                headers.insert(
                    USER_AGENT,
                    HeaderValue::from_static(CHROMIUM_HEADLESS_USER_AGENT),
                );
                headers.insert(
                    HeaderName::from_static("sec-ch-ua"),
                    HeaderValue::from_static(CHROMIUM_HEADLESS_SEC_CH_UA),
                );
                headers.insert(
                    HeaderName::from_static("sec-ch-ua-mobile"),
                    HeaderValue::from_static(CHROMIUM_HEADLESS_SEC_CH_UA_MOBILE),
                );
                headers.insert(
                    HeaderName::from_static("sec-ch-ua-platform"),
                    HeaderValue::from_static(CHROMIUM_HEADLESS_SEC_CH_UA_PLATFORM),
                );
            }
            BrowserEngine::Firefox => {
                headers.insert(
                    USER_AGENT,
                    HeaderValue::from_static(FIREFOX_HEADLESS_USER_AGENT),
                );
            }
            BrowserEngine::Webkit => {
                headers.insert(
                    USER_AGENT,
                    HeaderValue::from_static(WEBKIT_HEADLESS_USER_AGENT),
                );
            }
        }
        headers
    }
}
