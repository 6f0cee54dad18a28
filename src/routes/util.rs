//! Shared URL/form parsing and HTML helpers for route handlers.

/// Parse URL-encoded form body into key-value pairs.
/// Handles `key=value&key2=value2` format (from HTMX POST bodies).
pub fn parse_form_body(body: &str) -> Vec<(String, String)> {
    if body.is_empty() {
        return Vec::new();
    }
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next()?;
            let val = parts.next().unwrap_or("");
            Some((percent_decode(key), percent_decode(val)))
        })
        .collect()
}

/// Percent-decode a URL-encoded value. Multi-byte UTF-8 sequences are
/// reassembled, so names like "Zoë" survive the round trip.
pub fn percent_decode(input: &str) -> String {
    let mut bytes = Vec::with_capacity(input.len());
    let mut iter = input.bytes();
    while let Some(b) = iter.next() {
        match b {
            b'%' => {
                let hi = iter.next();
                let lo = iter.next();
                let decoded = match (hi, lo) {
                    (Some(h), Some(l)) => core::str::from_utf8(&[h, l])
                        .ok()
                        .and_then(|s| u8::from_str_radix(s, 16).ok()),
                    _ => None,
                };
                match decoded {
                    Some(val) => bytes.push(val),
                    None => {
                        bytes.push(b'%');
                        bytes.extend(hi);
                        bytes.extend(lo);
                    }
                }
            }
            b'+' => bytes.push(b' '),
            _ => bytes.push(b),
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Parse a query string into key-value pairs.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    let q = query.strip_prefix('?').unwrap_or(query);
    parse_form_body(q)
}

/// Helper to get a value by key from a list of key-value pairs.
pub fn get_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Escape text for use inside HTML content or a quoted attribute.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Red notification fragment.
pub fn error_html(msg: &str) -> String {
    format!(
        r#"<span class="text-red-600 text-sm" role="alert">{}</span>"#,
        escape_html(msg)
    )
}
