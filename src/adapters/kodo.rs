use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, trace};

use crate::{
    adapters::ObjectClient,
    config::{Config, UrlMode},
    model::{
        error::{Error, PartialList},
        object::{ListPage, Listing},
        policy::PutPolicy,
    },
    util::{
        content::{self, ObjectContent},
        object::{
            escape_query, has_dot_segment, normalize_base, public_url, uri_delete,
            uri_list_files, with_deadline,
        },
        token::TokenCache,
    },
    vendor::{BucketDirectory, FormUploader, ObjectBody, Signer, Transport, VendorSdk},
};

/// Identifies object reads to the service.
pub const USER_AGENT: &str = "storage";

fn unix_now() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}

/// `ObjectClient` for a Kodo bucket.
///
/// Safe to share between tasks. The only mutable state is the upload token
/// slot, and its refresh is serialized by `TokenCache`.
pub struct KodoObjectClient {
    signer: Arc<dyn Signer>,
    transport: Arc<dyn Transport>,
    uploader: Arc<dyn FormUploader>,
    directory: Arc<dyn BucketDirectory>,
    bucket: String,
    base: String,
    url_mode: UrlMode,
    tokens: TokenCache,
    clock: fn() -> i64,
}

impl KodoObjectClient {
    pub fn new(config: &Config, sdk: &dyn VendorSdk) -> Result<Self, Error> {
        let signer = sdk.signer(&config.access, &config.secret)?;

        let flags = config.flags();
        let endpoints = config.endpoints();
        let url_mode = flags.url_mode();
        debug!(
            bucket = %config.bucket,
            region = endpoints.region.id,
            https = endpoints.use_https,
            cdn = endpoints.use_cdn,
            url_mode = ?url_mode,
            "kodo client configured"
        );

        Ok(Self {
            transport: sdk.transport(),
            uploader: sdk.form_uploader(&endpoints),
            directory: sdk.bucket_directory(signer.clone(), &endpoints),
            signer,
            bucket: config.bucket.clone(),
            base: normalize_base(&config.url, flags.https),
            url_mode,
            tokens: TokenCache::new(),
            clock: unix_now,
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn url_mode(&self) -> UrlMode {
        self.url_mode
    }

    fn upload_token(&self) -> Result<String, Error> {
        let now = (self.clock)();

        self.tokens.get_or_refresh(now, || {
            let policy = PutPolicy::for_bucket(&self.bucket, now);
            let token = self.signer.sign_with_data(&policy.to_json()?);
            debug!(bucket = %self.bucket, deadline = policy.deadline, "issued upload token");
            Ok(token)
        })
    }

    /// Read URL for `key`. Private URLs get a fresh deadline on every call.
    pub fn object_url(&self, key: &str) -> String {
        let url = public_url(&self.base, key);

        match self.url_mode {
            UrlMode::Public => url,
            UrlMode::Private { expires_in } => {
                let deadline = (self.clock)() + expires_in.as_secs() as i64;
                let url = with_deadline(&url, deadline);
                let token = self.signer.sign(url.as_bytes());
                format!("{}&token={}", url, token)
            }
        }
    }

    async fn fetch_page(&self, url: &str) -> Result<ListPage, Error> {
        let body = self.directory.credentialed_call(Method::POST, url).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ObjectClient for KodoObjectClient {
    async fn put_object(&self, key: &str, content: &mut dyn ObjectContent) -> Result<(), Error> {
        let token = self.upload_token()?;
        let (data, size) = content::read_all(content)?;

        self.uploader.put(&token, key, data, size).await
    }

    async fn get_object(&self, key: &str) -> Result<ObjectBody, Error> {
        if has_dot_segment(key) {
            return Err(Error::InvalidKey(key.to_string()));
        }

        let url = self.object_url(key);

        let resp = self
            .transport
            .get(&url, &[("User-Agent", USER_AGENT)])
            .await?;

        if resp.status != 200 {
            drop(resp.body);
            return Err(Error::HttpStatus { code: resp.status });
        }

        Ok(resp.body)
    }

    async fn list(&self, prefix: &str, delimiter: &str) -> Result<Listing, PartialList> {
        let mut listing = Listing::default();

        let host = match self.directory.rsf_host(&self.bucket).await {
            Ok(host) => host,
            Err(source) => return Err(PartialList { listing, source }),
        };

        let base = uri_list_files(&host, &self.bucket, prefix, delimiter);
        let mut marker = String::new();
        let mut page_no = 0;

        loop {
            let url = format!("{}{}", base, escape_query(&marker));
            let mut page = match self.fetch_page(&url).await {
                Ok(page) => page,
                Err(source) => return Err(PartialList { listing, source }),
            };

            page_no += 1;
            trace!(
                page = page_no,
                items = page.items.len(),
                prefixes = page.common_prefixes.len(),
                more = !page.marker.is_empty(),
                "listed page"
            );

            marker = std::mem::take(&mut page.marker);
            listing.absorb(page);

            if marker.is_empty() {
                break;
            }
        }

        Ok(listing)
    }

    async fn delete_object(&self, key: &str) -> Result<(), Error> {
        let host = self.directory.rs_host(&self.bucket).await?;
        let url = format!("{}{}", host, uri_delete(&self.bucket, key));

        self.directory.credentialed_call(Method::POST, &url).await?;
        Ok(())
    }

    fn stop(&self) {}
}
