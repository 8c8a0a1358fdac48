use crate::domain::error::SiteError;
use crate::domain::model::{NearbyPlace, SiteEntity};
use crate::infrastructure::config::NearbyConfig;
use crate::state::AppState;
use serde::Deserialize;
use url::Url;

// MapQuest radius search response structures
#[derive(Deserialize, Debug)]
struct RadiusResponse {
    #[serde(rename = "searchResults")]
    search_results: Option<Vec<SearchResult>>,
}

#[derive(Deserialize, Debug)]
struct SearchResult {
    name: Option<String>,
    fields: Option<ResultFields>,
}

#[derive(Deserialize, Debug)]
struct ResultFields {
    group_sic_code_name_ext: Option<String>,
    address: Option<String>,
    city: Option<String>,
}

/// Radius search URL for `origin`; the complete URL doubles as the cache key.
///
/// Parameter names and order follow the MapQuest contract:
/// `key, origin, radius, maxMatches, outFormat, ambiguities`.
pub fn build_query_url(nearby: &NearbyConfig, api_key: &str, origin: &str) -> Result<String, SiteError> {
    let radius = nearby.radius.to_string();
    let max_matches = nearby.max_matches.to_string();
    let params = [
        ("key", api_key),
        ("origin", origin),
        ("radius", radius.as_str()),
        ("maxMatches", max_matches.as_str()),
        ("outFormat", "json"),
        ("ambiguities", "ignore"),
    ];
    Ok(Url::parse_with_params(&nearby.endpoint, &params)?.to_string())
}

/// Decodes a radius search payload into places.
///
/// A payload that is not JSON, or has no `searchResults`, is an error; an
/// empty `searchResults` array is simply no places.
pub fn parse_nearby_response(payload: &str) -> Result<Vec<NearbyPlace>, SiteError> {
    let response: RadiusResponse = serde_json::from_str(payload)?;
    let results = response
        .search_results
        .ok_or_else(|| SiteError::Api("MapQuest response has no searchResults".to_string()))?;

    Ok(results
        .into_iter()
        .map(|result| {
            let (category, address, city) = match result.fields {
                Some(f) => (f.group_sic_code_name_ext, f.address, f.city),
                None => (None, None, None),
            };
            NearbyPlace::from_parts(result.name, category, address, city)
        })
        .collect())
}

/// Places around a site's zip code, via the session cache.
pub async fn find_nearby(state: &mut AppState, site: &SiteEntity) -> Result<Vec<NearbyPlace>, SiteError> {
    let api_key = state.config.nearby.require_api_key()?;

    let origin = site.zipcode.trim();
    if origin.is_empty() {
        return Err(SiteError::Api(format!(
            "{} has no zip code to search around",
            site.name
        )));
    }

    let url = build_query_url(&state.config.nearby, api_key, origin)?;
    // an undecodable reply is a failed fetch, not a payload worth caching
    let payload = state
        .fetch_cached_with(&url, |body| parse_nearby_response(body).map(|_| ()))
        .await?;
    parse_nearby_response(&payload)
}
