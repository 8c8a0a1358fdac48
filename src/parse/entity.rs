use super::{select_text, static_selector};
use crate::domain::error::SiteError;
use crate::domain::model::SiteEntity;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static TITLE_CONTAINER: Lazy<Selector> = Lazy::new(|| static_selector("div.Hero-titleContainer"));
static TITLE: Lazy<Selector> = Lazy::new(|| static_selector(".Hero-title"));
static DESIGNATION: Lazy<Selector> = Lazy::new(|| static_selector(".Hero-designation"));
static ADDRESS: Lazy<Selector> = Lazy::new(|| static_selector("p.adr"));
static LOCALITY: Lazy<Selector> = Lazy::new(|| static_selector("[itemprop=\"addressLocality\"]"));
static REGION: Lazy<Selector> = Lazy::new(|| static_selector("[itemprop=\"addressRegion\"]"));
static POSTAL_CODE: Lazy<Selector> = Lazy::new(|| static_selector("[itemprop=\"postalCode\"]"));
static VCARD: Lazy<Selector> = Lazy::new(|| static_selector("div.vcard"));
static TELEPHONE: Lazy<Selector> = Lazy::new(|| static_selector("[itemprop=\"telephone\"]"));

/// Parses a park's detail page.
///
/// The hero title container and a non-empty title inside it are required.
/// Every other field falls back to an empty string, since park pages differ
/// in what they publish.
pub fn parse_entity_detail(html: &str) -> Result<SiteEntity, SiteError> {
    let document = Html::parse_document(html);
    let Some(hero) = document.select(&TITLE_CONTAINER).next() else {
        return Err(SiteError::Parse("park title block not found".to_string()));
    };

    let name = select_text(hero, &TITLE)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| SiteError::Parse("park title block has no title".to_string()))?;
    let category = select_text(hero, &DESIGNATION).unwrap_or_default();

    let (city, state, zipcode) = match document.select(&ADDRESS).next() {
        Some(adr) => (
            select_text(adr, &LOCALITY),
            select_text(adr, &REGION),
            select_text(adr, &POSTAL_CODE),
        ),
        None => (None, None, None),
    };
    let address = [city, state]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    let phone = document
        .select(&VCARD)
        .next()
        .and_then(|vcard| select_text(vcard, &TELEPHONE))
        .unwrap_or_default();

    Ok(SiteEntity::new(
        category,
        name,
        address,
        zipcode.unwrap_or_default(),
        phone,
    ))
}
