// Text rendering for listings and nearby places
use crate::application::catalog::RegionListing;
use crate::domain::model::{NearbyPlace, SiteEntity};
use crate::presentation::theme::Theme;
use std::fmt::Write;

fn banner(output: &mut String, theme: &Theme, heading: &str) {
    let cutoff = "-".repeat(40);
    writeln!(output, "{}", (theme.line)(&cutoff)).ok();
    writeln!(output, "{}", (theme.title)(heading)).ok();
    writeln!(output, "{}", (theme.line)(&cutoff)).ok();
}

fn site_line(theme: &Theme, number: usize, site: &SiteEntity) -> String {
    format!(
        "[{}] {} ({}): {} {}",
        (theme.idx)(&number.to_string()),
        (theme.name)(&site.name),
        (theme.category)(&site.category),
        (theme.detail)(&site.address),
        (theme.detail)(&site.zipcode)
    )
}

/// Numbered park list for a state, followed by any parks that failed to load.
pub fn format_listing(listing: &RegionListing, theme: &Theme) -> String {
    let mut output = String::new();
    banner(
        &mut output,
        theme,
        &format!("List of national sites in {}", listing.region),
    );

    for (i, site) in listing.sites.iter().enumerate() {
        writeln!(output, "{}", site_line(theme, i + 1, site)).ok();
    }

    for failure in &listing.failures {
        writeln!(output, "{}", (theme.error)(&format!("[Skipped] {}", failure))).ok();
    }

    output
}

pub fn format_nearby(site: &SiteEntity, places: &[NearbyPlace], theme: &Theme) -> String {
    let mut output = String::new();
    banner(&mut output, theme, &format!("Places near {}", site.name));

    if places.is_empty() {
        writeln!(output, "{}", (theme.detail)("(no places found)")).ok();
    }
    for place in places {
        writeln!(output, "{}", (theme.detail)(&place.to_string())).ok();
    }

    output
}

pub fn format_region_names(names: &[String], theme: &Theme) -> String {
    let mut output = String::new();
    for name in names {
        writeln!(output, "{}", (theme.name)(name)).ok();
    }
    output
}
