// Main entry point
use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use nps_sites::application::{catalog, nearby};
use nps_sites::infrastructure::config::{self, load_config, Config};
use nps_sites::infrastructure::storage::cache::PersistentCache;
use nps_sites::interfaces::cli::Cli;
use nps_sites::interfaces::menu::run_menu;
use nps_sites::presentation::render::{format_listing, format_nearby, format_region_names};
use nps_sites::presentation::theme::Theme;
use nps_sites::state::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = load_config()?;

    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }

    if let Some(path) = &cli.cache_file {
        config.cache_file = Some(path.clone());
    }
    let cache = PersistentCache::new(config::get_cache_path(&config));

    if cli.status {
        print_status(&config, &cache);
        return Ok(());
    }

    let theme_name = cli.theme.clone().unwrap_or_else(|| config.theme.clone());
    let theme = Theme::from_name(&theme_name);
    let mut state = AppState::new(config, cache)?;

    if cli.regions {
        let names = catalog::list_region_names(&mut state).await?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&names)?);
        } else {
            print!("{}", format_region_names(&names, &theme));
        }
        return Ok(());
    }

    let Some(region) = cli.region_name() else {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        run_menu(&mut state, &theme, stdin).await?;
        return Ok(());
    };

    let listing = catalog::list_entities_for_region(&mut state, &region).await?;

    let Some(number) = cli.nearby else {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&listing.sites)?);
        } else {
            print!("{}", format_listing(&listing, &theme));
        }
        return Ok(());
    };

    let site = number
        .checked_sub(1)
        .and_then(|i| listing.sites.get(i))
        .cloned()
        .with_context(|| {
            format!(
                "{} has {} sites; --nearby must be between 1 and {}",
                listing.region,
                listing.sites.len(),
                listing.sites.len()
            )
        })?;
    let places = nearby::find_nearby(&mut state, &site).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&places)?);
    } else {
        print!("{}", format_nearby(&site, &places, &theme));
    }

    Ok(())
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &config::Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .with_ansi(false)
                .init();
            return Ok(());
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn print_status(config: &Config, cache: &PersistentCache) {
    println!("{}", "nps Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if cache.path().exists() {
        println!(
            "Cache: {} ({} entries)",
            cache.path().display(),
            cache.load().len()
        );
    } else {
        println!("Cache: {} (not created yet)", cache.path().display());
    }

    println!(
        "Config: {}",
        config::get_config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found".to_string())
    );
    println!("Site: {}", config.base_url);

    if config.nearby.require_api_key().is_ok() {
        println!("MapQuest API: Configured");
    } else {
        println!("MapQuest API: Not configured");
    }
}
