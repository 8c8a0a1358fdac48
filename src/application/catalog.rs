use crate::domain::error::{EntityError, SiteError};
use crate::domain::model::{RegionDirectory, SiteEntity};
use crate::parse::{parse_entity_detail, parse_entity_list, parse_region_directory};
use crate::state::AppState;

/// One park of a state listing: parsed, or the reason it could not be.
pub type SiteOutcome = Result<SiteEntity, EntityError>;

/// A state's parks, split into those that loaded and those that did not.
#[derive(Debug)]
pub struct RegionListing {
    pub region: String,
    pub sites: Vec<SiteEntity>,
    pub failures: Vec<EntityError>,
}

/// The state directory, derived from the (cached) home page once per session.
pub async fn region_directory(state: &mut AppState) -> Result<&RegionDirectory, SiteError> {
    let directory = match state.directory.take() {
        Some(directory) => directory,
        None => {
            let base_url = state.config.base_url.clone();
            let html = state.fetch_cached(&base_url).await?;
            let directory = parse_region_directory(&html, &base_url)?;
            tracing::debug!("State directory has {} entries", directory.len());
            directory
        }
    };
    let directory: &RegionDirectory = state.directory.insert(directory);
    Ok(directory)
}

/// All state names, sorted.
pub async fn list_region_names(state: &mut AppState) -> Result<Vec<String>, SiteError> {
    Ok(region_directory(state).await?.keys().cloned().collect())
}

/// Loads every park listed on a state page, in page order.
///
/// A missing or malformed state page fails the whole call, as does a cache
/// write failure. Otherwise each park's detail page succeeds or fails on its
/// own, so one bad page does not hide the rest.
pub async fn list_entities_for_region_url(
    state: &mut AppState,
    region_url: &str,
) -> Result<Vec<SiteOutcome>, SiteError> {
    let base_url = state.config.base_url.clone();
    let html = state.fetch_cached(region_url).await?;
    let urls = parse_entity_list(&html, &base_url)?;

    let mut outcomes = Vec::with_capacity(urls.len());
    for url in urls {
        let result = load_site(state, &url).await;
        match result {
            Ok(site) => outcomes.push(Ok(site)),
            Err(e @ SiteError::CacheWrite { .. }) => return Err(e),
            Err(source) => outcomes.push(Err(EntityError { url, source })),
        }
    }
    Ok(outcomes)
}

async fn load_site(state: &mut AppState, url: &str) -> Result<SiteEntity, SiteError> {
    let html = state.fetch_cached(url).await?;
    parse_entity_detail(&html)
}

/// Looks up a state by name (case-insensitive) and lists its parks.
///
/// The parks that loaded become the session's current list.
pub async fn list_entities_for_region(
    state: &mut AppState,
    name: &str,
) -> Result<RegionListing, SiteError> {
    let region = name.trim().to_lowercase();
    let region_url = region_directory(state)
        .await?
        .get(&region)
        .cloned()
        .ok_or_else(|| SiteError::UnknownRegion(name.trim().to_string()))?;

    let mut sites = Vec::new();
    let mut failures = Vec::new();
    for outcome in list_entities_for_region_url(state, &region_url).await? {
        match outcome {
            Ok(site) => sites.push(site),
            Err(e) => {
                tracing::warn!("Skipping park: {}", e);
                failures.push(e);
            }
        }
    }

    state.current_sites = sites.clone();
    Ok(RegionListing {
        region,
        sites,
        failures,
    })
}
