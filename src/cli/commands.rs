use crate::api::{NewsClient, PostsClient, WeatherClient, DEFAULT_CITY};
use crate::config::Config;
use crate::error::{AppError, Result};
use chrono::{FixedOffset, TimeZone, Utc};
use clap::{Args, Parser, Subcommand};
use colored::*;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use dialoguer::{theme::ColorfulTheme, Input};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Listings are capped at this many rows; the cap is reported to the user.
const MAX_ROWS: usize = 20;

/// CLI tool for browsing social posts, weather and news headlines
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Runs one command and exits; opens the interactive menu when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the social post feed
    Posts,

    /// Show the current weather for a city
    Weather(WeatherArgs),

    /// Show the top news headlines
    News,
}

#[derive(Args, Debug)]
pub struct WeatherArgs {
    /// City to report the weather for
    #[arg(short, long, default_value = DEFAULT_CITY)]
    pub city: String,
}

/// CLI application
pub struct App {
    posts: PostsClient,
    weather: WeatherClient,
    news: NewsClient,
}

impl App {
    /// Creates the application from an explicit configuration.
    ///
    /// Construction performs no I/O; each command issues exactly one request
    /// when run.
    pub fn new(config: Config) -> Self {
        Self {
            posts: PostsClient::new(),
            weather: WeatherClient::new(config.weather_api_key),
            news: NewsClient::new(config.news_api_key),
        }
    }

    /// Run a single command against the upstream APIs.
    pub async fn run_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Posts => self.show_posts().await,
            Commands::Weather(args) => self.show_weather(&args.city).await,
            Commands::News => self.show_news().await,
        }
    }

    /// Fetch the social feed and render it as a table.
    async fn show_posts(&self) -> Result<()> {
        let spinner = fetch_spinner("Fetching social posts...")?;
        let result = self.posts.get_posts().await;
        spinner.finish_and_clear();
        let posts = result?;

        println!("{}", "Social feed".cyan().bold());
        println!("Total posts: {}", posts.len());

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["ID", "Title", "Tags", "Likes", "Views"]);

        for post in posts.iter().take(MAX_ROWS) {
            table.add_row(vec![
                post.id.to_string(),
                post.title.clone(),
                post.tags.join(", "),
                post.reactions.likes.to_string(),
                post.views.map(|v| v.to_string()).unwrap_or_default(),
            ]);
        }

        println!("{table}");

        if posts.len() > MAX_ROWS {
            println!(
                "... and {} more (showing first {} only)",
                posts.len() - MAX_ROWS,
                MAX_ROWS
            );
        }

        Ok(())
    }

    /// Fetch the current weather for `city` and render a report card.
    async fn show_weather(&self, city: &str) -> Result<()> {
        if city.trim().is_empty() {
            return Err(AppError::Cli("city must not be empty".to_string()));
        }

        let spinner = fetch_spinner("Fetching current weather...")?;
        let result = self.weather.get_weather(Some(city)).await;
        spinner.finish_and_clear();
        let report = result?;

        let heading = match report.sys.as_ref().and_then(|s| s.country.as_deref()) {
            Some(country) => format!("{}, {}", report.name, country),
            None => report.name.clone(),
        };
        println!("{}", heading.cyan().bold());

        if let Some(condition) = report.weather.first() {
            println!("Conditions: {}", condition.description);
        }

        println!(
            "Temperature: {:.1} °C (feels like {:.1} °C)",
            report.main.temp, report.main.feels_like
        );
        println!(
            "Range: {:.1} °C to {:.1} °C",
            report.main.temp_min, report.main.temp_max
        );
        println!("Humidity: {}%", report.main.humidity);
        println!("Pressure: {} hPa", report.main.pressure);

        if let Some(wind) = &report.wind {
            match wind.deg {
                Some(deg) => println!("Wind: {:.1} m/s at {}°", wind.speed, deg),
                None => println!("Wind: {:.1} m/s", wind.speed),
            }
        }

        if let Some(sys) = &report.sys {
            if let (Some(sunrise), Some(sunset)) = (sys.sunrise, sys.sunset) {
                if let (Some(sunrise), Some(sunset)) = (
                    local_time(sunrise, report.timezone),
                    local_time(sunset, report.timezone),
                ) {
                    println!("Sunrise: {}  Sunset: {}", sunrise, sunset);
                }
            }
        }

        if let Some(taken) = local_time(report.dt, report.timezone) {
            println!("Readings taken at {}", taken);
        }

        Ok(())
    }

    /// Fetch the top headlines and render them as a table.
    async fn show_news(&self) -> Result<()> {
        let spinner = fetch_spinner("Fetching top headlines...")?;
        let result = self.news.get_top_headlines().await;
        spinner.finish_and_clear();
        let articles = result?;

        println!("{}", "Top headlines".cyan().bold());
        println!("Total articles: {}", articles.len());

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Title", "Source", "Published"]);

        for article in articles.iter().take(MAX_ROWS) {
            table.add_row(vec![
                article.title.clone(),
                article.source.name.clone(),
                article.published_at.format("%Y-%m-%d %H:%M").to_string(),
            ]);
        }

        println!("{table}");

        if articles.len() > MAX_ROWS {
            println!(
                "... and {} more (showing first {} only)",
                articles.len() - MAX_ROWS,
                MAX_ROWS
            );
        }

        Ok(())
    }
}

/// Prompt the user for a city name, defaulting to [`DEFAULT_CITY`].
pub fn prompt_city() -> Result<String> {
    let city: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("City")
        .default(DEFAULT_CITY.to_string())
        .interact_text()?;

    Ok(city)
}

/// Spinner shown while a request is in flight.
fn fetch_spinner(message: &str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message.to_string());
    Ok(spinner)
}

/// Formats a unix timestamp as `HH:MM` in the report's timezone (an offset in
/// seconds from UTC).
fn local_time(unix: i64, offset_secs: Option<i32>) -> Option<String> {
    let utc = Utc.timestamp_opt(unix, 0).single()?;
    let offset = FixedOffset::east_opt(offset_secs.unwrap_or(0))?;
    Some(utc.with_timezone(&offset).format("%H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_time_applies_the_report_offset() {
        // 2024-05-31 18:00:00 UTC at UTC-6 is noon local.
        let formatted = local_time(1717178400, Some(-21600)).unwrap();
        assert_eq!(formatted, "12:00");
    }

    #[test]
    fn local_time_defaults_to_utc() {
        let formatted = local_time(1717178400, None).unwrap();
        assert_eq!(formatted, "18:00");
    }

    #[tokio::test]
    async fn blank_city_is_rejected_before_any_request() {
        let app = App::new(Config {
            weather_api_key: "w".to_string(),
            news_api_key: "n".to_string(),
        });

        let err = app
            .run_command(Commands::Weather(WeatherArgs {
                city: "   ".to_string(),
            }))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Cli(_)));
    }
}
