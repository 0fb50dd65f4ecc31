/// Normalize a CSV token: strip the BOM, collapse whitespace, lowercase.
pub(crate) fn normalize_token(value: &str) -> String {
    value
        .trim_start_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

#[cfg(test)]
pub(crate) fn normalize_for_tests(value: &str) -> String {
    normalize_token(value)
}
