use std::{fmt, time::Duration};

use serde::Deserialize;

use crate::region::{Endpoints, Region};

/// How long a private read URL stays valid after it is generated.
pub const PRIVATE_URL_TTL: Duration = Duration::from_secs(3600);

#[derive(Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Base URL (domain) objects are read from.
    pub url: String,
    pub access: String,
    pub secret: String,
    pub bucket: String,
    pub region: String,
    /// Comma separated keywords: `https`, `cdn`, `private`.
    pub flag: String,
}

impl Config {
    pub fn new(url: &str, access: &str, secret: &str, bucket: &str) -> Self {
        Self {
            url: url.to_string(),
            access: access.to_string(),
            secret: secret.to_string(),
            bucket: bucket.to_string(),
            ..Default::default()
        }
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = region.to_string();
        self
    }

    pub fn with_flag(mut self, flag: &str) -> Self {
        self.flag = flag.to_string();
        self
    }

    pub fn flags(&self) -> Flags {
        Flags::parse(&self.flag)
    }

    pub fn endpoints(&self) -> Endpoints {
        let flags = self.flags();
        Endpoints {
            region: Region::resolve(&self.region),
            use_https: flags.https,
            use_cdn: flags.cdn,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("url", &self.url)
            .field("access", &self.access)
            .field("secret", &"<redacted>")
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .field("flag", &self.flag)
            .finish()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    pub https: bool,
    pub cdn: bool,
    pub private: bool,
}

impl Flags {
    /// Keywords are matched as substrings, so order and separators don't matter.
    pub fn parse(flag: &str) -> Self {
        Self {
            https: flag.contains("https"),
            cdn: flag.contains("cdn"),
            private: flag.contains("private"),
        }
    }

    pub fn url_mode(&self) -> UrlMode {
        if self.private {
            UrlMode::Private {
                expires_in: PRIVATE_URL_TTL,
            }
        } else {
            UrlMode::Public
        }
    }
}

/// Strategy used to build read URLs, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UrlMode {
    /// Deterministic `<base>/<key>`.
    Public,
    /// Signed URL with a deadline `expires_in` after each call.
    Private { expires_in: Duration },
}
