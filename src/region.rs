/// Service hosts of one storage region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub id: &'static str,
    pub src_up_hosts: &'static [&'static str],
    pub cdn_up_hosts: &'static [&'static str],
    pub rs_host: &'static str,
    pub rsf_host: &'static str,
}

pub const HUADONG: Region = Region {
    id: "z0",
    src_up_hosts: &["up.qiniup.com", "up-nb.qiniup.com", "up-xs.qiniup.com"],
    cdn_up_hosts: &["upload.qiniup.com", "upload-nb.qiniup.com", "upload-xs.qiniup.com"],
    rs_host: "rs.qbox.me",
    rsf_host: "rsf.qbox.me",
};

pub const HUADONG_ZHEJIANG2: Region = Region {
    id: "cn-east-2",
    src_up_hosts: &["up-cn-east-2.qiniup.com"],
    cdn_up_hosts: &["upload-cn-east-2.qiniup.com"],
    rs_host: "rs-cn-east-2.qiniuapi.com",
    rsf_host: "rsf-cn-east-2.qiniuapi.com",
};

pub const HUABEI: Region = Region {
    id: "z1",
    src_up_hosts: &["up-z1.qiniup.com"],
    cdn_up_hosts: &["upload-z1.qiniup.com"],
    rs_host: "rs-z1.qbox.me",
    rsf_host: "rsf-z1.qbox.me",
};

pub const HUANAN: Region = Region {
    id: "z2",
    src_up_hosts: &["up-z2.qiniup.com"],
    cdn_up_hosts: &["upload-z2.qiniup.com"],
    rs_host: "rs-z2.qbox.me",
    rsf_host: "rsf-z2.qbox.me",
};

pub const NORTH_AMERICA: Region = Region {
    id: "na0",
    src_up_hosts: &["up-na0.qiniup.com"],
    cdn_up_hosts: &["upload-na0.qiniup.com"],
    rs_host: "rs-na0.qbox.me",
    rsf_host: "rsf-na0.qbox.me",
};

pub const SINGAPORE: Region = Region {
    id: "as0",
    src_up_hosts: &["up-as0.qiniup.com"],
    cdn_up_hosts: &["upload-as0.qiniup.com"],
    rs_host: "rs-as0.qbox.me",
    rsf_host: "rsf-as0.qbox.me",
};

pub const KNOWN_REGIONS: &[Region] = &[
    HUADONG,
    HUADONG_ZHEJIANG2,
    HUABEI,
    HUANAN,
    NORTH_AMERICA,
    SINGAPORE,
];

impl Region {
    pub fn by_id(id: &str) -> Option<Region> {
        KNOWN_REGIONS.iter().find(|r| r.id == id).copied()
    }

    /// Unknown or empty ids keep the default region.
    pub fn resolve(id: &str) -> Region {
        if id.is_empty() {
            return HUADONG;
        }

        Region::by_id(id).unwrap_or(HUADONG)
    }
}

impl Default for Region {
    fn default() -> Self {
        HUADONG
    }
}

/// Hosts the vendor collaborators talk to, with the scheme already applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub region: Region,
    pub use_https: bool,
    pub use_cdn: bool,
}

impl Endpoints {
    fn with_scheme(&self, host: &str) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        format!("{}://{}", scheme, host)
    }

    pub fn up_host(&self) -> String {
        let hosts = if self.use_cdn {
            self.region.cdn_up_hosts
        } else {
            self.region.src_up_hosts
        };

        self.with_scheme(hosts.first().copied().unwrap_or_default())
    }

    pub fn rs_host(&self) -> String {
        self.with_scheme(self.region.rs_host)
    }

    pub fn rsf_host(&self) -> String {
        self.with_scheme(self.region.rsf_host)
    }
}
