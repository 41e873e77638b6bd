use std::sync::{Mutex, PoisonError};

/// Seconds a cached upload token is reused for. The policy inside the token
/// is valid for longer, see `model::policy::POLICY_EXPIRES`.
pub const TOKEN_REUSE_SECS: i64 = 3600;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadToken {
    pub token: String,
    pub issued_at: i64,
}

impl UploadToken {
    pub fn is_fresh(&self, now: i64) -> bool {
        now - self.issued_at <= TOKEN_REUSE_SECS
    }
}

/// Single-slot upload token cache.
///
/// The check and the refresh both run under one lock, so concurrent writers
/// on the same client see at most one refresh per window. The lock is never
/// held across an await point.
#[derive(Debug, Default)]
pub struct TokenCache {
    slot: Mutex<Option<UploadToken>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached token if still fresh at `now`, otherwise stores and
    /// returns the one produced by `issue`.
    pub fn get_or_refresh<F, E>(&self, now: i64, issue: F) -> Result<String, E>
    where
        F: FnOnce() -> Result<String, E>,
    {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(cached) = slot.as_ref() {
            if cached.is_fresh(now) {
                return Ok(cached.token.clone());
            }
        }

        let token = issue()?;
        *slot = Some(UploadToken {
            token: token.clone(),
            issued_at: now,
        });

        Ok(token)
    }

    #[cfg(test)]
    fn current(&self) -> Option<UploadToken> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[test]
    fn test_reuse_within_window() {
        let cache = TokenCache::new();
        let mut issued = 0;

        let mut issue = |n: i64| {
            cache
                .get_or_refresh::<_, Infallible>(n, || {
                    issued += 1;
                    Ok(format!("token-{}", issued))
                })
                .unwrap()
        };

        assert_eq!(issue(1000), "token-1");
        assert_eq!(issue(1000 + 3600), "token-1");
        assert_eq!(issue(1000 + 3601), "token-2");
        assert_eq!(issue(1000 + 3602), "token-2");
    }

    #[test]
    fn test_failed_issue_keeps_old_token() {
        let cache = TokenCache::new();
        cache
            .get_or_refresh::<_, Infallible>(0, || Ok("old".to_string()))
            .unwrap();

        let res = cache.get_or_refresh(5000, || Err("signer down"));
        assert_eq!(res, Err("signer down"));
        assert_eq!(cache.current().map(|t| t.token).as_deref(), Some("old"));
    }
}
