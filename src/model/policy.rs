use serde::{Deserialize, Serialize};

/// Lifetime written into every upload policy, in seconds.
pub const POLICY_EXPIRES: i64 = 4000;

/// Upload policy signed into an upload token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutPolicy {
    pub scope: String,
    pub deadline: i64,
}

impl PutPolicy {
    pub fn for_bucket(bucket: &str, now: i64) -> Self {
        Self {
            scope: bucket.to_string(),
            deadline: now + POLICY_EXPIRES,
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_json() {
        let policy = PutPolicy::for_bucket("ccnm", 1_700_000_000);
        let json = String::from_utf8(policy.to_json().unwrap()).unwrap();

        assert_eq!(json, r#"{"scope":"ccnm","deadline":1700004000}"#);
    }
}
