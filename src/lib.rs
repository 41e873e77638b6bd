//! Chunk storage on Qiniu Kodo object storage.
//!
//! `KodoObjectClient` implements the generic `ObjectClient` contract on top
//! of the collaborators in `vendor`: a signer, an HTTP transport, the form
//! uploader and the bucket directory.

pub mod adapters;
pub mod config;
pub mod model;
pub mod region;
pub mod util;
pub mod vendor;

pub use adapters::{kodo::KodoObjectClient, ObjectClient};
pub use config::Config;
pub use model::{
    error::{Error, PartialList},
    object::{Listing, StorageCommonPrefix, StorageObject},
};
pub use util::content::ObjectContent;
pub use vendor::ObjectBody;
