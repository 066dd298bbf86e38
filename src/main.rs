use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};

mod client;
mod commands;
mod constants;
mod domain;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::{
    client::ContentClient,
    domain::{ContentError, PackageCategory, PackageDetail, PackageSummary, format_price},
    state::{App, AppConfig, ListView, PaginatedFilterList, Route, StartupOptions},
};

// tourfolio version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

const LOGO: &str = r"
 _                  __       _ _
| |_ ___  _   _ _ _/ _| ___ | (_) ___
| __/ _ \| | | | '__| |_ / _ \| | |/ _ \
| || (_) | |_| | |  |  _| (_) | | | (_) |
 \__\___/ \__,_|_|  |_|  \___/|_|_|\___/
";

/// tourfolio - Terminal front-end for a travel agency's content API
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None, disable_version_flag = true)]
struct Cli {
    /// Content API base URL (overrides config and TOURFOLIO_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Route to open on startup, e.g. /packages/kerala or /package/42
    #[arg(long)]
    route: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the package catalog
    Packages {
        /// Category slug (international, domestic, upcoming, trending, kerala, customised)
        #[arg(short, long, value_parser = parse_category, default_value = "all")]
        category: PackageCategory,
        /// Only packages whose title or location contains this text
        #[arg(short, long)]
        query: Option<String>,
        /// Maximum number of packages to print
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Print one package with its itinerary
    Package {
        /// Package identifier
        id: String,
    },
    /// Show the configuration file path and effective settings
    Config {
        /// Write the effective settings to the configuration file
        #[arg(long)]
        save: bool,
    },
    /// Display version with ASCII art
    Version,
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger FIRST
    env_logger::init();
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = AppConfig::load().with_api_url(cli.api_url.clone());

    if handle_cli_commands(&cli, &config).await? {
        return Ok(());
    }

    let options = StartupOptions {
        route: cli.route.as_deref().map(Route::parse),
    };
    let mut app = App::new(config, options)?;

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;
    tui::restore()?;
    result
}

/// Handles CLI subcommands.
/// Returns Ok(true) if a command was handled and the app should exit, Ok(false) otherwise.
async fn handle_cli_commands(cli: &Cli, config: &AppConfig) -> Result<bool> {
    let Some(command) = &cli.command else {
        return Ok(false);
    };

    match command {
        Commands::Packages {
            category,
            query,
            limit,
        } => {
            let client = content_client(config)?;
            let packages = client
                .get_packages(*category)
                .await
                .map_err(ContentError::into_report)
                .wrap_err_with(|| format!("Failed to load {category}"))?;

            let mut list =
                PaginatedFilterList::new(packages, limit.unwrap_or(config.page_size));
            if let Some(query) = query {
                list.set_query(query.as_str());
            }
            println!("{}", format_package_list(&list));
        }
        Commands::Package { id } => {
            let client = content_client(config)?;
            let detail = client
                .get_package(id)
                .await
                .map_err(ContentError::into_report)
                .wrap_err_with(|| format!("Failed to load package {id}"))?;
            println!("{}", format_package_detail(&detail));
        }
        Commands::Config { save } => {
            let path = AppConfig::config_path()?;
            if *save {
                config
                    .save()
                    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                println!("Saved settings to {}", path.display());
            }
            println!("Config file: {}", path.display());
            println!("{}", format_config(config));
        }
        Commands::Version => {
            println!("{LOGO}");
            println!("tourfolio v{VERSION}");
            println!("Browse travel packages from the terminal");
        }
    }
    Ok(true)
}

fn content_client(config: &AppConfig) -> Result<ContentClient> {
    ContentClient::from_config(config).map_err(ContentError::into_report)
}

fn parse_category(value: &str) -> Result<PackageCategory, String> {
    if value.eq_ignore_ascii_case("all") {
        return Ok(PackageCategory::All);
    }
    PackageCategory::from_slug(&value.to_lowercase())
        .ok_or_else(|| format!("unknown category '{value}'"))
}

// ============================================================================
// Output Formatting
// ============================================================================

fn package_line(package: &PackageSummary) -> String {
    let details: Vec<&str> = [package.location.as_str(), package.duration.as_str()]
        .into_iter()
        .filter(|text| !text.is_empty())
        .collect();
    format!(
        "{}  {}\n    {}",
        package.title,
        format_price(package.price),
        details.join(" · ")
    )
}

fn format_package_list(list: &PaginatedFilterList<PackageSummary>) -> String {
    match list.view() {
        ListView::Empty => "No packages available right now.".to_string(),
        ListView::NoResults { query } => format!("No packages match \"{query}\""),
        ListView::Items {
            visible,
            has_more,
            total,
        } => {
            let mut lines: Vec<String> = visible.iter().map(|p| package_line(p)).collect();
            let mut status = format!("Showing {} of {total}", visible.len());
            if has_more {
                status.push_str(" (raise --limit for more)");
            }
            lines.push(status);
            lines.join("\n")
        }
    }
}

fn format_package_detail(detail: &PackageDetail) -> String {
    let mut lines = vec![package_line(&detail.summary)];
    if !detail.summary.description.is_empty() {
        lines.push(String::new());
        lines.push(detail.summary.description.clone());
    }

    if !detail.itinerary.is_empty() {
        lines.push(String::new());
        lines.push("Itinerary".to_string());
        for day in &detail.itinerary {
            lines.push(format!("  Day {}: {}", day.day, day.title));
            if let Some(route) = &day.route {
                lines.push(format!("    Route: {route}"));
            }
            if !day.meal_plan.is_empty() {
                lines.push(format!("    Meals: {}", day.meal_plan));
            }
            lines.extend(day.activities.iter().map(|a| format!("    - {a}")));
        }
    }

    for (title, items) in [("Inclusions", &detail.inclusions), ("Exclusions", &detail.exclusions)] {
        if !items.is_empty() {
            lines.push(String::new());
            lines.push(title.to_string());
            lines.extend(items.iter().map(|item| format!("  - {item}")));
        }
    }

    if !detail.gallery.is_empty() {
        lines.push(String::new());
        lines.push(format!("Gallery: {} images", detail.gallery.len()));
    }
    lines.join("\n")
}

fn format_config(config: &AppConfig) -> String {
    [
        format!("API URL:         {}", config.api_base_url),
        format!("API token:       {}", config.redacted_token()),
        format!("Page size:       {}", config.page_size),
        format!("Auto-advance:    {}s", config.auto_advance_secs),
        format!("Request timeout: {}s", config.request_timeout_secs),
    ]
    .join("\n")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::PackageMother;
    use rstest::rstest;

    #[rstest]
    #[case("all", PackageCategory::All)]
    #[case("Kerala", PackageCategory::Kerala)]
    #[case("customised", PackageCategory::Customised)]
    fn test_parse_category(#[case] value: &str, #[case] expected: PackageCategory) {
        assert_eq!(parse_category(value), Ok(expected));
    }

    #[test]
    fn test_parse_category_rejects_unknown() {
        assert!(parse_category("moon").is_err());
    }

    #[test]
    fn test_cli_parses_packages_subcommand() {
        let cli = Cli::parse_from([
            "tourfolio",
            "--api-url",
            "http://localhost:4000",
            "packages",
            "--category",
            "kerala",
            "--limit",
            "3",
        ]);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:4000"));
        assert!(matches!(
            cli.command,
            Some(Commands::Packages {
                category: PackageCategory::Kerala,
                query: None,
                limit: Some(3),
            })
        ));
    }

    #[test]
    fn test_cli_parses_config_save() {
        let cli = Cli::parse_from(["tourfolio", "config", "--save"]);
        assert!(matches!(cli.command, Some(Commands::Config { save: true })));
    }

    #[test]
    fn test_package_list_output() {
        let list = PaginatedFilterList::new(vec![PackageMother::goa(), PackageMother::kerala()], 6);
        insta::assert_snapshot!(format_package_list(&list), @r"
        Goa Beach  ₹18,999
            North Goa · 4 Days / 3 Nights
        Kerala Backwaters  ₹24,999
            Alleppey · 5 Days / 4 Nights
        Showing 2 of 2
        ");
    }

    #[test]
    fn test_package_list_limit_and_query() {
        let mut list = PaginatedFilterList::new(PackageMother::numbered(5), 2);
        assert!(format_package_list(&list).ends_with("Showing 2 of 5 (raise --limit for more)"));

        list.set_query("nowhere");
        assert_eq!(format_package_list(&list), "No packages match \"nowhere\"");
    }

    #[test]
    fn test_package_detail_output() {
        let output = format_package_detail(&PackageMother::kerala_detail());
        let day1 = output.find("Day 1: Arrive in Kochi").unwrap();
        let day3 = output.find("Day 3: Houseboat in Alleppey").unwrap();
        assert!(day1 < day3);
        assert!(output.contains("    Route: Kochi → Munnar"));
        assert!(output.contains("  - Flights"));
        assert!(output.contains("Gallery: 3 images"));
    }

    #[test]
    fn test_config_output_redacts_token() {
        let config = AppConfig {
            api_token: Some("secret-token-1234".to_string()),
            ..AppConfig::default()
        };
        let output = format_config(&config);
        assert!(output.contains("1234"));
        assert!(!output.contains("secret"));
    }
}
