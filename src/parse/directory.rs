use super::{collapse_whitespace, resolve_href, static_selector};
use crate::domain::error::SiteError;
use crate::domain::model::RegionDirectory;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static STATE_MENU: Lazy<Selector> =
    Lazy::new(|| static_selector("ul.dropdown-menu.SearchBar-keywordSearch"));
static LINK: Lazy<Selector> = Lazy::new(|| static_selector("a[href]"));
static PARK_LIST: Lazy<Selector> = Lazy::new(|| static_selector("ul#list_parks"));
static PARK_HEADING: Lazy<Selector> = Lazy::new(|| static_selector("h3"));

/// Parses the home page's state drop-down into `state name -> state page URL`.
///
/// Names are lower-cased; a repeated name keeps the last URL seen.
pub fn parse_region_directory(html: &str, base_url: &str) -> Result<RegionDirectory, SiteError> {
    let document = Html::parse_document(html);
    let Some(menu) = document.select(&STATE_MENU).next() else {
        return Err(SiteError::Parse("state directory menu not found".to_string()));
    };

    let mut directory = RegionDirectory::new();
    for anchor in menu.select(&LINK) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let name = collapse_whitespace(&anchor.text().collect::<String>()).to_lowercase();
        if name.is_empty() {
            tracing::debug!("Skipping unnamed state link {}", href);
            continue;
        }
        directory.insert(name, resolve_href(base_url, href)?);
    }

    Ok(directory)
}

/// Parses a state page into the detail URLs of its parks, in page order.
pub fn parse_entity_list(html: &str, base_url: &str) -> Result<Vec<String>, SiteError> {
    let document = Html::parse_document(html);
    let Some(list) = document.select(&PARK_LIST).next() else {
        return Err(SiteError::Parse("park list not found".to_string()));
    };

    let mut urls = Vec::new();
    for heading in list.select(&PARK_HEADING) {
        match heading
            .select(&LINK)
            .next()
            .and_then(|a| a.value().attr("href"))
        {
            Some(href) => urls.push(resolve_href(base_url, href)?),
            None => tracing::debug!("Skipping park heading without a link"),
        }
    }

    Ok(urls)
}
