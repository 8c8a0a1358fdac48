//! HTML parsing for nps.gov pages.
//!
//! Parsers fail only when a page's containing block is missing. Inner fields
//! are looked up through [`select_text`], which returns `None` for an absent
//! element and leaves the default-or-propagate decision to the caller.

mod directory;
mod entity;

pub use directory::{parse_entity_list, parse_region_directory};
pub use entity::parse_entity_detail;

use crate::domain::error::SiteError;
use scraper::{ElementRef, Selector};
use url::Url;

/// Compiles a selector literal; used only for `Lazy` statics.
fn static_selector(selector: &str) -> Selector {
    match Selector::parse(selector) {
        Ok(sel) => sel,
        Err(e) => panic!("Error parsing static selector {}: {:?}", selector, e),
    }
}

/// Collapses runs of whitespace into single spaces and trims the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text of the first element under `scope` matching `selector`, if any.
pub fn select_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
}

/// Resolves an `href` (relative or absolute) against the site base URL.
pub fn resolve_href(base_url: &str, href: &str) -> Result<String, SiteError> {
    let base = Url::parse(base_url)?;
    Ok(base.join(href.trim())?.to_string())
}
