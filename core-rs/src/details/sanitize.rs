//! Sanitize strategies for submitted setting values
//!
//! A [`Sanitizer`] is any `Fn(&str) -> String`; the functions below cover the
//! stock project fields and can be wrapped with [`sanitizer`].

use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

/// Function from raw submitted input to the value that gets stored
pub type Sanitizer = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Protocols a stored URL may use
pub const ALLOWED_PROTOCOLS: &[&str] = &["http", "https", "mailto"];

static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<(script|style)[^>]*?>.*?</(script|style)>|<[^>]*>").unwrap());

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static OCTET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"%[a-fA-F0-9]{2}").unwrap());

/// Wrap a plain function as a [`Sanitizer`]
pub fn sanitizer<F>(f: F) -> Sanitizer
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Remove markup, including the contents of script and style elements
pub fn strip_tags(raw: &str) -> String {
    TAG_RE.replace_all(raw, "").into_owned()
}

/// Single-line text: no markup, whitespace collapsed, trimmed
pub fn text_field(raw: &str) -> String {
    let stripped = strip_tags(raw);
    WHITESPACE_RE.replace_all(stripped.trim(), " ").into_owned()
}

/// Multi-line text: no markup, line breaks kept, outer whitespace trimmed
pub fn textarea(raw: &str) -> String {
    strip_tags(raw).trim().to_string()
}

/// URL for storage
///
/// Whitespace is removed and a missing scheme on a bare host defaults to
/// `http://`. Relative references (`/path`, `#frag`, `?query`) are kept.
/// Anything that does not parse, or uses a protocol outside
/// [`ALLOWED_PROTOCOLS`], becomes an empty string. The input is otherwise
/// returned as written, not normalized.
pub fn url(raw: &str) -> String {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace() && !c.is_control()).collect();

    if compact.is_empty() {
        return String::new();
    }

    if compact.starts_with('/') || compact.starts_with('#') || compact.starts_with('?') {
        return compact;
    }

    let candidate = if compact.contains(':') {
        compact
    } else {
        format!("http://{}", compact)
    };

    match url::Url::parse(&candidate) {
        Ok(parsed) if ALLOWED_PROTOCOLS.contains(&parsed.scheme()) => candidate,
        Ok(parsed) => {
            tracing::debug!(scheme = parsed.scheme(), "rejected url protocol");
            String::new()
        }
        Err(_) => String::new(),
    }
}

/// CSS class name: percent-encoded octets dropped, only `A-Za-z0-9_-` kept
pub fn html_class(raw: &str) -> String {
    OCTET_RE
        .replace_all(raw, "")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}
