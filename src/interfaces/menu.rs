//! Interactive menu: pick a state, then pick a site to search around.

use crate::application::catalog::list_entities_for_region;
use crate::application::nearby::find_nearby;
use crate::domain::error::SiteError;
use crate::presentation::render::{format_listing, format_nearby};
use crate::presentation::theme::Theme;
use crate::state::AppState;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const REGION_PROMPT: &str = "Enter a state name (e.g. Michigan, michigan) or 'exit' to quit: ";
const DETAIL_PROMPT: &str = "Choose the number for detail search or 'exit' or 'back': ";
const BAD_REGION: &str = "[Error] Please enter a proper state name.";
const BAD_DETAIL: &str = "[Error] Please enter valid number or text.";

#[derive(Debug, PartialEq, Eq)]
pub enum RegionInput {
    Exit,
    Region(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum DetailInput {
    Exit,
    Back,
    /// Zero-based index into the current site list.
    Select(usize),
}

/// `None` for blank input.
pub fn parse_region_input(line: &str) -> Option<RegionInput> {
    let line = line.trim();
    if line.is_empty() {
        None
    } else if line.eq_ignore_ascii_case("exit") {
        Some(RegionInput::Exit)
    } else {
        Some(RegionInput::Region(line.to_string()))
    }
}

/// Accepts `exit`, `back`, or a 1-based number no greater than `count`.
pub fn parse_detail_input(line: &str, count: usize) -> Option<DetailInput> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("exit") {
        return Some(DetailInput::Exit);
    }
    if line.eq_ignore_ascii_case("back") {
        return Some(DetailInput::Back);
    }
    match line.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(DetailInput::Select(n - 1)),
        _ => None,
    }
}

enum Level {
    Regions,
    Sites,
}

fn prompt(text: &str) {
    print!("{}", text);
    std::io::stdout().flush().ok();
}

/// Cache write failures end the session; every other error is shown and
/// the user is asked again.
fn report(theme: &Theme, message: &str, err: SiteError) -> Result<(), SiteError> {
    if matches!(err, SiteError::CacheWrite { .. }) {
        return Err(err);
    }
    tracing::debug!("{}", err);
    println!("{}", (theme.error)(message));
    Ok(())
}

/// Runs the menu until `exit` or end of input.
pub async fn run_menu<R>(state: &mut AppState, theme: &Theme, input: R) -> Result<(), SiteError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut level = Level::Regions;

    loop {
        match level {
            Level::Regions => {
                prompt(REGION_PROMPT);
                let Some(line) = lines.next_line().await? else {
                    break;
                };
                match parse_region_input(&line) {
                    None => println!("{}", (theme.error)(BAD_REGION)),
                    Some(RegionInput::Exit) => break,
                    Some(RegionInput::Region(name)) => {
                        match list_entities_for_region(state, &name).await {
                            Ok(listing) => {
                                print!("{}", format_listing(&listing, theme));
                                level = Level::Sites;
                            }
                            Err(SiteError::UnknownRegion(_)) => {
                                println!("{}", (theme.error)(BAD_REGION))
                            }
                            Err(e) => {
                                let message = format!("[Error] Could not load {}: {}", name, e);
                                report(theme, &message, e)?;
                            }
                        }
                    }
                }
            }
            Level::Sites => {
                prompt(DETAIL_PROMPT);
                let Some(line) = lines.next_line().await? else {
                    break;
                };
                match parse_detail_input(&line, state.current_sites.len()) {
                    None => println!("{}", (theme.error)(BAD_DETAIL)),
                    Some(DetailInput::Exit) => break,
                    Some(DetailInput::Back) => level = Level::Regions,
                    Some(DetailInput::Select(index)) => {
                        let site = state.current_sites[index].clone();
                        match find_nearby(state, &site).await {
                            Ok(places) => print!("{}", format_nearby(&site, &places, theme)),
                            Err(e) => {
                                let message = format!("[Error] Nearby search failed: {}", e);
                                report(theme, &message, e)?;
                            }
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
