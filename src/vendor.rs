//! Narrow view of the storage vendor's SDK.
//!
//! The client never talks HTTP or signs anything itself. It goes through
//! these traits, which a `VendorSdk` builds once per client.

use std::{pin::Pin, sync::Arc};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;
use tokio::io::AsyncRead;

use crate::{model::error::Error, region::Endpoints};

pub mod http;
pub mod memory;

/// Live object bytes. Dropping it closes the underlying response.
pub type ObjectBody = Pin<Box<dyn AsyncRead + Send>>;

/// The parts of an administrative request that go into its authorization.
#[derive(Clone, Copy, Debug)]
pub struct SignableRequest<'a> {
    pub method: &'a Method,
    pub url: &'a str,
    pub content_type: Option<&'a str>,
    pub body: &'a [u8],
}

/// Credential handle derived from an access/secret key pair.
pub trait Signer: Send + Sync {
    /// Signature over `data`, used for private read URLs.
    fn sign(&self, data: &[u8]) -> String;

    /// Signature carrying `data` along with it, used for upload tokens.
    fn sign_with_data(&self, data: &[u8]) -> String;

    /// Value of the `Authorization` header for an administrative call.
    fn authorization(&self, request: &SignableRequest<'_>) -> Result<String, Error>;
}

pub struct TransportResponse {
    pub status: u16,
    pub body: ObjectBody,
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<TransportResponse, Error>;
}

#[async_trait]
pub trait FormUploader: Send + Sync {
    async fn put(&self, token: &str, key: &str, data: Vec<u8>, size: u64) -> Result<(), Error>;
}

#[async_trait]
pub trait BucketDirectory: Send + Sync {
    async fn rs_host(&self, bucket: &str) -> Result<String, Error>;

    async fn rsf_host(&self, bucket: &str) -> Result<String, Error>;

    /// Performs an authorized call and returns the raw response body.
    async fn credentialed_call(&self, method: Method, url: &str) -> Result<Bytes, Error>;
}

/// Builds the collaborators of one client.
pub trait VendorSdk {
    fn signer(&self, access_key: &str, secret_key: &str) -> Result<Arc<dyn Signer>, Error>;

    fn transport(&self) -> Arc<dyn Transport>;

    fn form_uploader(&self, endpoints: &Endpoints) -> Arc<dyn FormUploader>;

    fn bucket_directory(
        &self,
        signer: Arc<dyn Signer>,
        endpoints: &Endpoints,
    ) -> Arc<dyn BucketDirectory>;
}
