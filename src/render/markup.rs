use std::borrow::Cow;

/// Escape `& < > " '` for use in HTML text and quoted attribute values.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Space-joined class attribute value; blank entries are skipped.
pub(crate) fn class_list<'a>(base: &'a str, extra: &'a [String]) -> String {
    std::iter::once(base)
        .chain(extra.iter().map(String::as_str))
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(|c| escape_html(c).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shortest decimal rendering of a coordinate; integral values print without a fraction.
pub(crate) fn num(v: f64) -> String {
    let r = (v * 1e4).round() / 1e4;
    if r == 0.0 {
        // Avoids "-0".
        "0".to_string()
    } else {
        format!("{r}")
    }
}
