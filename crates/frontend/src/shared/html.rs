//! Escaping for the few places that build HTML as a string

/// Escape text for HTML content and attribute values. `None` becomes "".
pub fn escape_html<S: AsRef<str>>(value: Option<S>) -> String {
    let value = match &value {
        Some(v) => v.as_ref(),
        None => return String::new(),
    };
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
