use crate::errors::FingerprintError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// * Header-emission value objects for the User-Agent / Sec-Ch-Ua family.
// * Pure values: identity is field equality, and each exposes a
// * deterministic rendering of the exact wire-format header string.
// * Only the forward direction (structured data -> header string) is
// * implemented; parsing a User-Agent string back into brands is not.

// * One entry of the Sec-Ch-Ua header, e.g. `"Chromium";v="127"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecChUaItem {
    pub brand: String,
    pub significant_version: u32,
}

impl SecChUaItem {
    pub fn value(&self) -> String {
        format!(r#""{}";v="{}""#, self.brand, self.significant_version)
    }
}

// * The full Sec-Ch-Ua header: brand entries joined by `, `.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecChUa {
    pub items: Vec<SecChUaItem>,
}

impl SecChUa {
    pub fn header_value(&self) -> String {
        self.items
            .iter()
            .map(SecChUaItem::value)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// * Sec-Ch-Ua-Mobile: structured boolean, `?1` / `?0` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecChUaMobile {
    pub mobile: bool,
}

impl SecChUaMobile {
    pub fn header_value(&self) -> &'static str {
        if self.mobile {
            "?1"
        } else {
            "?0"
        }
    }
}

// * The fixed platform enumeration Sec-Ch-Ua-Platform may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UaPlatform {
    Android,
    #[serde(rename = "Chrome OS")]
    ChromeOs,
    #[serde(rename = "Chromium OS")]
    ChromiumOs,
    #[serde(rename = "iOS")]
    Ios,
    Linux,
    #[serde(rename = "macOS")]
    MacOs,
    Windows,
    Unknown,
}

impl UaPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Android => "Android",
            Self::ChromeOs => "Chrome OS",
            Self::ChromiumOs => "Chromium OS",
            Self::Ios => "iOS",
            Self::Linux => "Linux",
            Self::MacOs => "macOS",
            Self::Windows => "Windows",
            Self::Unknown => "Unknown",
        }
    }

    // * Wire form is always quoted, e.g. `"Windows"`.
    pub fn header_value(&self) -> String {
        format!(r#""{}""#, self.as_str())
    }

    // * Best-effort OS classification of a raw User-Agent string.
    // * Mobile tokens first: an iPad UA also mentions Mac OS X.
    pub fn implied_by_user_agent(user_agent: &str) -> Option<Self> {
        if user_agent.contains("Android") {
            Some(Self::Android)
        } else if user_agent.contains("iPhone")
            || user_agent.contains("iPad")
            || user_agent.contains("iPod")
        {
            Some(Self::Ios)
        } else if user_agent.contains("CrOS") {
            Some(Self::ChromeOs)
        } else if user_agent.contains("Windows NT") {
            Some(Self::Windows)
        } else if user_agent.contains("Macintosh") || user_agent.contains("Mac OS X") {
            Some(Self::MacOs)
        } else if user_agent.contains("X11") || user_agent.contains("Linux") {
            Some(Self::Linux)
        } else {
            None
        }
    }
}

impl FromStr for UaPlatform {
    type Err = FingerprintError;

    // * Accepts the bare name or the quoted wire form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_matches('"') {
            "Android" => Ok(Self::Android),
            "Chrome OS" => Ok(Self::ChromeOs),
            "Chromium OS" => Ok(Self::ChromiumOs),
            "iOS" => Ok(Self::Ios),
            "Linux" => Ok(Self::Linux),
            "macOS" => Ok(Self::MacOs),
            "Windows" => Ok(Self::Windows),
            "Unknown" => Ok(Self::Unknown),
            other => Err(FingerprintError::InvalidFingerprint(format!(
                "unrecognized Sec-Ch-Ua-Platform value: {other:?}"
            ))),
        }
    }
}

impl fmt::Display for UaPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// * One extension token of the User-Agent header, e.g. `Chrome/127.0.0.0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAgentExtension {
    pub browser: String,
    pub version: String,
}

impl UserAgentExtension {
    pub fn value(&self) -> String {
        format!("{}/{}", self.browser, self.version)
    }
}

// * Structured User-Agent header:
// * `{token} ({system}) {platform} ({details}) {ext} {ext} ...`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAgent {
    pub compatibility_token: String,
    pub system_information: String,
    pub platform: String,
    pub platform_details: String,
    pub extensions: Vec<UserAgentExtension>,
}

impl UserAgent {
    pub fn header_value(&self) -> String {
        let extensions = self
            .extensions
            .iter()
            .map(UserAgentExtension::value)
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "{} ({}) {} ({}) {}",
            self.compatibility_token,
            self.system_information,
            self.platform,
            self.platform_details,
            extensions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sec_ch_ua_rendering() {
        let header = SecChUa {
            items: vec![
                SecChUaItem {
                    brand: "Chromium".into(),
                    significant_version: 127,
                },
                SecChUaItem {
                    brand: "Not_A Brand".into(),
                    significant_version: 99,
                },
            ],
        };
        assert_eq!(
            header.header_value(),
            r#""Chromium";v="127", "Not_A Brand";v="99""#
        );
    }

    #[test]
    fn test_sec_ch_ua_mobile_rendering() {
        assert_eq!(SecChUaMobile { mobile: true }.header_value(), "?1");
        assert_eq!(SecChUaMobile { mobile: false }.header_value(), "?0");
    }

    #[test]
    fn test_platform_quoting_and_parse() {
        assert_eq!(UaPlatform::MacOs.header_value(), r#""macOS""#);
        assert_eq!(r#""Windows""#.parse::<UaPlatform>().unwrap(), UaPlatform::Windows);
        assert_eq!("Chrome OS".parse::<UaPlatform>().unwrap(), UaPlatform::ChromeOs);
        assert!("BeOS".parse::<UaPlatform>().is_err());
    }

    #[test]
    fn test_platform_implied_by_user_agent() {
        assert_eq!(
            UaPlatform::implied_by_user_agent(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"
            ),
            Some(UaPlatform::Windows)
        );
        // * iPad UAs mention Mac OS X too; iOS must win.
        assert_eq!(
            UaPlatform::implied_by_user_agent(
                "Mozilla/5.0 (iPad; CPU OS 17_5 like Mac OS X) AppleWebKit/605.1.15"
            ),
            Some(UaPlatform::Ios)
        );
        assert_eq!(UaPlatform::implied_by_user_agent("curl/8.4.0"), None);
    }

    #[test]
    fn test_user_agent_rendering() {
        let ua = UserAgent {
            compatibility_token: "Mozilla/5.0".into(),
            system_information: "Windows NT 10.0; Win64; x64".into(),
            platform: "AppleWebKit/537.36".into(),
            platform_details: "KHTML, like Gecko".into(),
            extensions: vec![
                UserAgentExtension {
                    browser: "Chrome".into(),
                    version: "127.0.0.0".into(),
                },
                UserAgentExtension {
                    browser: "Safari".into(),
                    version: "537.36".into(),
                },
            ],
        };
        assert_eq!(
            ua.header_value(),
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/127.0.0.0 Safari/537.36"
        );
    }
}
