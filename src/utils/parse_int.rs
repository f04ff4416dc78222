/// Parse a requested page number; anything unusable means the first page.
pub fn parse_page_number(value: Option<&str>) -> usize {
    value
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .and_then(|t| t.parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(1)
}
