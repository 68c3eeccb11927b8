use std::collections::BTreeMap;

/// Query string parameters. A `BTreeMap` keeps the emitted order stable.
pub type QueryParams = BTreeMap<String, String>;

/// Builds `base_url + endpoint`, adding `?k=v&...` only when `params` is non-empty.
///
/// Pairs are encoded as `application/x-www-form-urlencoded` (space becomes `+`),
/// which is what browsers send for query strings built from a parameter map.
pub fn build_url(base_url: &str, endpoint: &str, params: &QueryParams) -> String {
    let mut url = format!("{}{}", base_url, endpoint);
    if params.is_empty() {
        return url;
    }
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish();
    url.push('?');
    url.push_str(&query);
    url
}

/// Convenience for building params from literal pairs.
pub fn params<K, V, I>(pairs: I) -> QueryParams
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}
