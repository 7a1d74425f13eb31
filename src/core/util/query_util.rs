/// Query pairs as sent on the wire, in insertion order.
pub type QueryPairs = Vec<(&'static str, String)>;

/// Keeps only pairs whose value is present and non-empty.
pub fn compact<I>(pairs: I) -> QueryPairs
where
    I: IntoIterator<Item = (&'static str, Option<String>)>,
{
    pairs
        .into_iter()
        .filter_map(|(key, value)| match value {
            Some(v) if !v.is_empty() => Some((key, v)),
            _ => None,
        })
        .collect()
}

/// `key=value&key=value`, percent-encoded. Empty input yields an empty string.
pub fn to_query_string(pairs: &[(&'static str, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Joins base, path and query; no dangling `?` when there is nothing to send.
pub fn build_url(base: &str, path: &str, pairs: &[(&'static str, String)]) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    let query = to_query_string(pairs);

    if query.is_empty() {
        format!("{}/{}", base, path)
    } else {
        format!("{}/{}?{}", base, path, query)
    }
}
