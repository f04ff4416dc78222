use urlencoding::encode;

/// Build a query string from key-value pairs
pub fn build_query_string(pairs: &[(&str, String)]) -> String {
    let mut out = String::new();
    for (i, (k, v)) in pairs.iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        out.push_str(&encode(k));
        out.push('=');
        out.push_str(&encode(v));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encodes_values() {
        let q = build_query_string(&[("page", "2".into()), ("sort", "a b&c".into())]);
        assert_eq!(q, "page=2&sort=a%20b%26c");
    }
}
