//! Request description: URL plus ordered headers.

/// Header names whose values are credentials and must be masked in logs.
const SECRET_HEADERS: &[&str] = &["app_key", "authorization", "x-api-key"];

/// Masks a secret for safe logging: first 7 chars + `***` + last 4 chars.
/// Values of length ≤ 11 are fully masked as `***`.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_char_boundary(7) || !token.is_char_boundary(len - 4) {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}

/// A GET request: target URL and headers in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
        }
    }

    /// Adds a header. A later value for the same name (case-insensitive) replaces the earlier one.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(&name))
        {
            Some(existing) => existing.1 = value,
            None => self.headers.push((name, value)),
        }
        self
    }

    /// Looks up a header value by name (case-insensitive).
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Headers with credential values masked, for logging.
    pub fn redacted_headers(&self) -> Vec<(String, String)> {
        self.headers
            .iter()
            .map(|(n, v)| {
                let secret = SECRET_HEADERS.iter().any(|s| n.eq_ignore_ascii_case(s));
                let v = if secret { mask_token(v) } else { v.clone() };
                (n.clone(), v)
            })
            .collect()
    }
}
