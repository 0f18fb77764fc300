// * Curated Identity Constants
// * Central location for every fixed header value the core emits.
// * Values must stay mutually consistent: the Sec-Ch-Ua family below
// * describes the same browser/OS the matching User-Agent claims.

// * Fixed Accept values for a common, unremarkable browser configuration.
// * Deliberately NOT randomized: these rarely vary across real browsers,
// * and randomizing them is itself a detectable anomaly.
pub const COMMON_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7";
pub const COMMON_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

// * Pool of real, current browser User-Agent strings for randomized drawing.
// ! CRITICAL: Refresh versions when the tracked browser releases move on.
pub const USER_AGENT_POOL: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/127.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/127.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/127.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/127.0.0.0 Safari/537.36 Edg/127.0.0.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:128.0) Gecko/20100101 Firefox/128.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:128.0) Gecko/20100101 Firefox/128.0",
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Safari/605.1.15",
];

// * Headless defaults per browser engine. The injector pins these so the
// * network identity always matches the real rendering engine underneath,
// * never a spoofed User-Agent alone.
pub const CHROMIUM_HEADLESS_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) HeadlessChrome/127.0.6533.17 Safari/537.36";
pub const CHROMIUM_HEADLESS_SEC_CH_UA: &str =
    r#""Not)A;Brand";v="99", "HeadlessChrome";v="127", "Chromium";v="127""#;
pub const CHROMIUM_HEADLESS_SEC_CH_UA_MOBILE: &str = "?0";
pub const CHROMIUM_HEADLESS_SEC_CH_UA_PLATFORM: &str = r#""macOS""#;

// * Firefox and WebKit do not emit the Sec-Ch-Ua family.
pub const FIREFOX_HEADLESS_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:128.0) Gecko/20100101 Firefox/128.0";
pub const WEBKIT_HEADLESS_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15";
