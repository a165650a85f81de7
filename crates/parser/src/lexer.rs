//! Line-oriented scanning shared by all UCD parsers.
//!
//! UCD files are sequences of semicolon-delimited records interleaved with blank lines and `#`
//! comments. A comment may also trail a record on the same line.

/// Yields every non-empty, non-comment record of `input`, split on `;` with each field trimmed.
/// Empty fields are kept, so record positions line up with the UCD field numbering.
pub(crate) fn records<'a>(input: &'a str) -> impl Iterator<Item = Vec<&'a str>> + 'a {
    input.lines().filter_map(split_record)
}

/// Splits a single line into a record, or `None` for blank and comment lines.
pub(crate) fn split_record(line: &str) -> Option<Vec<&str>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let line = match line.find('#') {
        Some(index) => &line[..index],
        None => line,
    };

    Some(line.split(';').map(str::trim).collect())
}

/// Parses a required hexadecimal code point field.
pub(crate) fn parse_code_point(field: &str) -> u32 {
    let code_point = u32::from_str_radix(field, 16)
        .unwrap_or_else(|_| panic!("malformed code point field {field:?}"));
    assert!(code_point <= 0x10FFFF, "code point {code_point:#x} is outside the Unicode range");
    code_point
}

/// Parses an optional hexadecimal code point field. Empty and malformed fields are absent.
pub(crate) fn parse_optional_code_point(field: &str) -> Option<u32> {
    u32::from_str_radix(field, 16).ok().filter(|&code_point| code_point <= 0x10FFFF)
}

/// Parses a space-separated list of hexadecimal code points. An empty field is an empty list.
pub(crate) fn parse_code_point_list(field: &str) -> Vec<u32> {
    field.split_whitespace().map(parse_code_point).collect()
}
