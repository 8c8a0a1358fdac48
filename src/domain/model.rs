use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Lowercase region name -> absolute region listing URL.
pub type RegionDirectory = BTreeMap<String, String>;

// 一个国家公园站点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteEntity {
    pub category: String, // 可能为空, e.g. ""
    pub name: String,
    pub address: String, // "City, State"
    pub zipcode: String,
    pub phone: String,
}

impl SiteEntity {
    pub fn new(
        category: String,
        name: String,
        address: String,
        zipcode: String,
        phone: String,
    ) -> Self {
        Self {
            category,
            name,
            address,
            zipcode,
            phone,
        }
    }

    /// One-line summary, e.g. `Isle Royale (National Park): Houghton, MI 49931`.
    pub fn info(&self) -> String {
        format!(
            "{} ({}): {} {}",
            self.name, self.category, self.address, self.zipcode
        )
    }
}

pub const NO_NAME: &str = "no name";
pub const NO_CATEGORY: &str = "no category";
pub const NO_ADDRESS: &str = "no address";
pub const NO_CITY: &str = "no city";

// 附近地点 (MapQuest)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearbyPlace {
    pub name: String,
    pub category: String,
    pub address: String,
    pub city: String,
}

impl NearbyPlace {
    /// Builds a place, substituting the sentinel default for every absent or empty field.
    pub fn from_parts(
        name: Option<String>,
        category: Option<String>,
        address: Option<String>,
        city: Option<String>,
    ) -> Self {
        fn or_sentinel(value: Option<String>, sentinel: &str) -> String {
            value
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| sentinel.to_string())
        }

        Self {
            name: or_sentinel(name, NO_NAME),
            category: or_sentinel(category, NO_CATEGORY),
            address: or_sentinel(address, NO_ADDRESS),
            city: or_sentinel(city, NO_CITY),
        }
    }
}

impl fmt::Display for NearbyPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} ({}): {}, {}",
            self.name, self.category, self.address, self.city
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_info_format() {
        let site = SiteEntity::new(
            "National Park".to_string(),
            "Isle Royale".to_string(),
            "Houghton, MI".to_string(),
            "49931".to_string(),
            "(906) 482-0984".to_string(),
        );
        assert_eq!(site.info(), "Isle Royale (National Park): Houghton, MI 49931");
    }

    #[test]
    fn test_site_info_blank_category() {
        let site = SiteEntity::new(
            String::new(),
            "Father Marquette".to_string(),
            "St. Ignace, MI".to_string(),
            "49781".to_string(),
            String::new(),
        );
        assert_eq!(site.info(), "Father Marquette (): St. Ignace, MI 49781");
    }

    #[test]
    fn test_nearby_place_sentinels() {
        let place = NearbyPlace::from_parts(Some("Cafe".to_string()), None, Some("".to_string()), None);
        assert_eq!(place.name, "Cafe");
        assert_eq!(place.category, NO_CATEGORY);
        assert_eq!(place.address, NO_ADDRESS);
        assert_eq!(place.city, NO_CITY);
        assert_eq!(place.to_string(), "- Cafe (no category): no address, no city");
    }
}
