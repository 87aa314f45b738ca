//! Markup helpers: escaping and `%s` format templates

use std::borrow::Cow;

/// Escape text for use inside an element
pub fn esc_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Escape text for use inside a quoted attribute value
pub fn esc_attr(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Clean a URL for output in markup
///
/// Returns an empty string when the URL uses a protocol that is not allowed.
pub fn esc_url(raw: &str) -> String {
    let cleaned = crate::details::sanitize::url(raw);
    esc_attr(&cleaned).into_owned()
}

/// Fill a printf-style template
///
/// Supports sequential `%s`, positional `%1$s` and the `%%` literal. Missing
/// arguments expand to nothing; any other `%` sequence is copied as-is.
///
/// # Example
/// ```
/// use portfolio_details::html::sprintf;
///
/// assert_eq!(sprintf("<span %s>%s</span>", &["class=\"x\"", "Acme"]), "<span class=\"x\">Acme</span>");
/// assert_eq!(sprintf("%2$s, %1$s", &["a", "b"]), "b, a");
/// ```
pub fn sprintf(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + args.iter().map(|a| a.len()).sum::<usize>());
    let mut next_arg = 0;
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let directive = &rest[pos + 1..];

        if let Some(after) = directive.strip_prefix('%') {
            out.push('%');
            rest = after;
        } else if let Some(after) = directive.strip_prefix('s') {
            out.push_str(args.get(next_arg).copied().unwrap_or(""));
            next_arg += 1;
            rest = after;
        } else if let Some((index, after)) = positional(directive) {
            out.push_str(args.get(index).copied().unwrap_or(""));
            rest = after;
        } else {
            out.push('%');
            rest = directive;
        }
    }

    out.push_str(rest);
    out
}

/// Parse `N$s` at the start of `directive`, returning the zero-based index
fn positional(directive: &str) -> Option<(usize, &str)> {
    let digits = directive.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }

    let after = directive[digits..].strip_prefix("$s")?;
    let number: usize = directive[..digits].parse().ok()?;
    Some((number.checked_sub(1)?, after))
}
