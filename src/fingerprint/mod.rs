// * Fingerprint Suite: data model, generation, injection, session pinning.
// * Everything here is synchronous and I/O-free; the transport layer owns
// * the request lifecycle and simply sends the headers this module shapes.

pub mod generator;
pub mod injector;
pub mod record;
pub mod session;
pub mod ua;

// * Re-exports for convenient access
pub use generator::HeaderGenerator;
pub use injector::{BrowserEngine, FingerprintInjector};
pub use record::FingerprintRecord;
pub use session::{session_key, SessionHeaderCache};
pub use ua::{SecChUa, SecChUaItem, SecChUaMobile, UaPlatform, UserAgent, UserAgentExtension};
