use thiserror::Error;

// * Unified Error type for the Identity Core.
// * A cache miss is deliberately NOT here: it is the designed "must generate"
// * signal and surfaces as `Option::None`, never as a failure.
#[derive(Error, Debug)]
pub enum FingerprintError {
    #[error("Unsupported browser engine: {0}")]
    UnsupportedBrowserEngine(String),

    #[error("Invalid cache configuration: capacity must be >= 1 (got {0})")]
    InvalidConfiguration(usize),

    #[error("Malformed fingerprint record: {0}")]
    InvalidFingerprint(String),

    #[error("Fingerprint serialization failed: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
}
