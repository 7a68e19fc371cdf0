// src/forms.rs
use crate::errors::ServerError;
use astra::Request;
use std::io::Read;
use url::form_urlencoded;

/// Largest urlencoded body we are willing to decode.
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

/// Decoded `application/x-www-form-urlencoded` pairs, in arrival order.
/// Repeated keys (checkbox groups) are kept.
#[derive(Debug, Default, Clone)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn parse(bytes: &[u8]) -> Self {
        Self {
            pairs: form_urlencoded::parse(bytes).into_owned().collect(),
        }
    }

    pub fn from_query(req: &Request) -> Self {
        req.uri()
            .query()
            .map(|q| Self::parse(q.as_bytes()))
            .unwrap_or_default()
    }

    /// Query string followed by the request body.
    pub fn from_request(req: &mut Request) -> Result<Self, ServerError> {
        let mut form = Self::from_query(req);

        let mut buf = Vec::new();
        req.body_mut()
            .reader()
            .take(MAX_BODY_BYTES + 1)
            .read_to_end(&mut buf)
            .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;

        if buf.len() as u64 > MAX_BODY_BYTES {
            return Err(ServerError::BadRequest("form body too large".into()));
        }

        form.pairs.extend(Self::parse(&buf).pairs);
        Ok(form)
    }

    /// Last value wins, so body fields override query fields.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Trimmed value, `None` when missing or blank.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn parse_or<T: std::str::FromStr>(&self, key: &str, fallback: T) -> T {
        self.non_empty(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(fallback)
    }
}
