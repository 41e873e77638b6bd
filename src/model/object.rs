use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageObject {
    pub key: String,
    pub modified_at: SystemTime,
}

/// A directory-like grouping produced when a delimiter collapses keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StorageCommonPrefix(pub String);

impl StorageCommonPrefix {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for StorageCommonPrefix {
    fn from(prefix: String) -> Self {
        StorageCommonPrefix(prefix)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    pub objects: Vec<StorageObject>,
    pub prefixes: Vec<StorageCommonPrefix>,
}

impl Listing {
    pub fn absorb(&mut self, page: ListPage) {
        self.objects.extend(page.items.iter().map(ListItem::to_storage_object));
        self.prefixes
            .extend(page.common_prefixes.into_iter().map(StorageCommonPrefix));
    }
}

/// One page of the `/list` response. An empty `marker` ends the listing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListPage {
    pub marker: String,
    pub items: Vec<ListItem>,
    #[serde(rename = "commonPrefixes")]
    pub common_prefixes: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListItem {
    pub key: String,
    pub hash: String,
    pub fsize: i64,
    /// Upload time in 100ns ticks since the unix epoch.
    #[serde(rename = "putTime")]
    pub put_time: i64,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    #[serde(rename = "type")]
    pub storage_type: i32,
}

impl ListItem {
    pub fn modified_at(&self) -> SystemTime {
        let ticks = u64::try_from(self.put_time).unwrap_or(0);
        SystemTime::UNIX_EPOCH + Duration::from_nanos(ticks.saturating_mul(100))
    }

    pub fn to_storage_object(&self) -> StorageObject {
        StorageObject {
            key: self.key.clone(),
            modified_at: self.modified_at(),
        }
    }
}
