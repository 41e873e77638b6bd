use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use url::form_urlencoded;

/// Page size requested from `/list`.
pub const LIST_LIMIT: &str = "1000";

pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn is_https(&self) -> bool {
        matches!(self, Scheme::Https)
    }
}

/// Splits an explicit `http://` or `https://` prefix off `base`.
pub fn parse_scheme_from_uri(base: &str) -> (Option<Scheme>, &str) {
    if let Some(rest) = base.strip_prefix("https://") {
        (Some(Scheme::Https), rest)
    } else if let Some(rest) = base.strip_prefix("http://") {
        (Some(Scheme::Http), rest)
    } else {
        (None, base)
    }
}

/// Applies the https flag to a read domain. A bare domain gets the scheme
/// implied by the flag and `http://` is upgraded when the flag is set.
pub fn normalize_base(base: &str, use_https: bool) -> String {
    let (scheme, host) = parse_scheme_from_uri(base);
    let https = use_https || scheme.is_some_and(|s| s.is_https());
    let host = host.trim_end_matches('/');

    if https {
        format!("https://{}", host)
    } else {
        format!("http://{}", host)
    }
}

/// Escapes a key for use as a URL path, keeping `/` and `|` readable.
pub fn escape_key(key: &str) -> String {
    form_urlencoded::byte_serialize(key.as_bytes())
        .collect::<String>()
        .replace("%2F", "/")
        .replace("%7C", "|")
        .replace('+', "%20")
}

pub fn escape_query(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// True when a segment of `key` is `.` or `..`. URL parsing resolves those
/// segments, so such a key cannot be addressed by its read URL.
pub fn has_dot_segment(key: &str) -> bool {
    key.split('/').any(|segment| segment == "." || segment == "..")
}

pub fn public_url(base: &str, key: &str) -> String {
    format!("{}/{}", base, escape_key(key))
}

/// Appends the `e` deadline parameter to a read URL.
pub fn with_deadline(url: &str, deadline: i64) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{}{}e={}", url, sep, deadline)
}

/// URL-safe base64 of `bucket:key`, the entry form used by management calls.
pub fn encoded_entry(bucket: &str, key: &str) -> String {
    URL_SAFE.encode(format!("{}:{}", bucket, key))
}

pub fn uri_delete(bucket: &str, key: &str) -> String {
    format!("/delete/{}", encoded_entry(bucket, key))
}

/// Listing URL up to and including `marker=`, the escaped marker is appended
/// per request. Parameters are sorted by name.
pub fn uri_list_files(host: &str, bucket: &str, prefix: &str, delimiter: &str) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("bucket", bucket);
    if !delimiter.is_empty() {
        query.append_pair("delimiter", delimiter);
    }
    query.append_pair("limit", LIST_LIMIT);
    if !prefix.is_empty() {
        query.append_pair("prefix", prefix);
    }

    format!("{}/list?{}&marker=", host, query.finish())
}
