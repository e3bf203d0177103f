//! XML entity escaping for free-text attribute values.

/// Replace the five XML metacharacters in `src` with their entity form.
///
/// Everything else passes through unchanged. Capacity is reserved for the
/// worst case (every character a quote, six bytes each); an empty input
/// yields an empty output.
pub fn encode_entities(src: &str) -> String {
    let mut dst = String::with_capacity(src.len() * 6);
    for c in src.chars() {
        match c {
            '"' => dst.push_str("&quot;"),
            '\'' => dst.push_str("&apos;"),
            '<' => dst.push_str("&lt;"),
            '>' => dst.push_str("&gt;"),
            '&' => dst.push_str("&amp;"),
            _ => dst.push(c),
        }
    }
    dst
}
