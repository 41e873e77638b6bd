use async_trait::async_trait;

use crate::{
    model::{
        error::{Error, PartialList},
        object::Listing,
    },
    util::content::ObjectContent,
    vendor::ObjectBody,
};

pub mod kodo;

/// Object storage contract the chunk store writes through.
///
/// Every method finishes its network round trips before returning. Dropping
/// a returned future cancels the request in flight.
#[async_trait]
pub trait ObjectClient: Send + Sync {
    async fn put_object(&self, key: &str, content: &mut dyn ObjectContent) -> Result<(), Error>;

    /// The caller owns the returned body and closes it by dropping it.
    async fn get_object(&self, key: &str) -> Result<ObjectBody, Error>;

    async fn list(&self, prefix: &str, delimiter: &str) -> Result<Listing, PartialList>;

    async fn delete_object(&self, key: &str) -> Result<(), Error>;

    fn stop(&self);
}
