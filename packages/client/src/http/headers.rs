//! Header entry encoding

/// Encode header entries into raw header lines, preserving order.
///
/// Entries whose value is empty (after trimming) are dropped. A named entry
/// becomes `"name: value"`; an unnamed one is sent as the bare value, which
/// lets callers pass complete `"Name: value"` lines.
///
/// A bare value must itself be a complete `"Name: value"` line. The transport
/// drops lines without a header name (logging a warning) rather than sending
/// them as is.
#[must_use]
pub fn header_lines(entries: &[(String, String)]) -> Vec<String> {
    entries
        .iter()
        .filter_map(|(name, value)| {
            let (name, value) = (name.trim(), value.trim());
            if value.is_empty() {
                None
            } else if name.is_empty() {
                Some(value.to_owned())
            } else {
                Some(format!("{name}: {value}"))
            }
        })
        .collect()
}

/// Split a raw header line into name and value.
///
/// Returns `None` for lines without a `:` or with an empty name.
#[must_use]
pub fn split_line(line: &str) -> Option<(&str, &str)> {
    let (name, value) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name, value.trim()))
}

/// Whether any line sets the header `name` (ASCII case-insensitive).
#[must_use]
pub fn has_header(lines: &[String], name: &str) -> bool {
    lines
        .iter()
        .filter_map(|line| split_line(line))
        .any(|(line_name, _)| line_name.eq_ignore_ascii_case(name))
}
