use crate::config::constants::{COMMON_ACCEPT, COMMON_ACCEPT_LANGUAGE, USER_AGENT_POOL};
use rand::seq::SliceRandom;
use rand::RngCore;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};

// * Produces a plausible common-header set for outgoing requests.
// *
// * Stateless and pure apart from the injected RNG, so concurrent callers
// * need no synchronization. Transport-negotiated headers (Accept-Encoding,
// * Connection, ...) are deliberately never set here: they must match what
// * the HTTP client actually supports, so the client owns them.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderGenerator;

impl HeaderGenerator {
    pub fn new() -> Self {
        Self
    }

    // * The deterministic subset: fixed Accept values, no User-Agent.
    // * The injector builds on this and pins an engine-specific UA instead.
    pub fn common_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(COMMON_ACCEPT));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(COMMON_ACCEPT_LANGUAGE),
        );
        headers
    }

    // * Common headers, optionally with one User-Agent drawn uniformly at
    // * random from the curated pool. The RNG is injected so tests can seed
    // * a deterministic source.
    pub fn generate_common_headers(
        &self,
        rng: &mut dyn RngCore,
        include_random_user_agent: bool,
    ) -> HeaderMap {
        let mut headers = self.common_headers();

        if include_random_user_agent {
            if let Some(ua) = USER_AGENT_POOL.choose(rng).copied() {
                headers.insert(USER_AGENT, HeaderValue::from_static(ua));
            }
        }

        headers
    }
}
