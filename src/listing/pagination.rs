use axum::http::HeaderMap;

/// Strip control characters so arbitrary resource names cannot break the
/// header value.
fn sanitize_resource_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii() && !c.is_ascii_control())
        .collect()
}

/// Build the `Content-Range` header for one page of results.
///
/// The range is `offset-(offset+limit-1)` clamped to the total match count,
/// in the form `recipes 0-19/45`.
#[must_use]
pub fn content_range(offset: u64, limit: u64, total: u64, resource_name: &str) -> HeaderMap {
    let upper = (offset + limit).saturating_sub(1).min(total);
    let safe_name = sanitize_resource_name(resource_name);
    let value = format!("{safe_name} {offset}-{upper}/{total}");

    let mut headers = HeaderMap::new();
    if let Ok(value) = value.parse() {
        headers.insert("Content-Range", value);
    }
    headers
}
