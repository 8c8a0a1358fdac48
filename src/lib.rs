//! Scrape national sites from nps.gov by state, cache every page on disk,
//! and look up places near a site through the MapQuest radius search.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod parse;
pub mod presentation;
pub mod state;
