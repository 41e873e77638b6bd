use crate::model::object::Listing;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("transport failure: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("object key {0:?} has a `.` or `..` segment and cannot be read by URL")]
    InvalidKey(String),

    #[error("http status {code}")]
    HttpStatus { code: u16 },

    #[error("service error {code}: {message}")]
    Service { code: u16, message: String },

    #[error("failed to read object content: {0}")]
    Content(#[from] std::io::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// 612 is the service's "no such file or directory" code.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::HttpStatus { code: 404 }
                | Error::Service { code: 404, .. }
                | Error::Service { code: 612, .. }
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(Box::new(err))
    }
}

/// A listing that stopped early. `listing` holds every page consumed before
/// `source` occurred and must not be treated as complete.
#[derive(Debug, thiserror::Error)]
#[error(
    "listing interrupted after {} objects and {} prefixes: {source}",
    .listing.objects.len(),
    .listing.prefixes.len()
)]
pub struct PartialList {
    pub listing: Listing,
    #[source]
    pub source: Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        assert!(Error::HttpStatus { code: 404 }.is_not_found());
        assert!(Error::Service { code: 612, message: "no such file or directory".to_string() }.is_not_found());
        assert!(!Error::HttpStatus { code: 500 }.is_not_found());
        assert!(!Error::Config("bad".to_string()).is_not_found());
    }

    #[test]
    fn test_partial_list_keeps_source() {
        let err = PartialList {
            listing: Listing::default(),
            source: Error::Service { code: 401, message: "bad token".to_string() },
        };

        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("service error 401: bad token"));
        assert!(err.to_string().starts_with("listing interrupted after 0 objects"));
    }
}
