// * Cloak-Flow: browser-identity core for crawling clients.
// *
// * Shapes the headers another component transmits; performs no I/O itself.
// * Three layers, leaf-first:
// *   1. fingerprint models (validated, immutable records + header value objects)
// *   2. stateless generation/injection (pure, RNG injected)
// *   3. session pinning (one identity per key, LRU-bounded)

pub mod cache;
pub mod config;
pub mod errors;
pub mod fingerprint;
