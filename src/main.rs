mod api;
mod cli;
mod config;
mod error;
mod models;

use clap::Parser;
use cli::{App, Cli, Commands, WeatherArgs};
use colored::*;
use config::Config;
use dialoguer::{theme::ColorfulTheme, Select};
use error::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Initializing infohub...");

    let cli = Cli::parse();

    // Load secrets before constructing any client so a missing key fails
    // here rather than mid-request.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            println!(
                "{}",
                "Error: Failed to load configuration. Check that WEATHER_API_KEY and NEWS_API_KEY are set."
                    .red()
            );
            return Err(e);
        },
    };

    let app = App::new(config);
    info!("Application initialized successfully.");

    // One-shot mode when a subcommand was given on the command line.
    if let Some(command) = cli.command {
        return match app.run_command(command).await {
            Ok(()) => Ok(()),
            Err(e) => {
                error!("Command execution failed: {:?}", e);
                println!(
                    "{} {}",
                    "Error executing command:".red(),
                    e.to_string().red()
                );
                Err(e)
            },
        };
    }

    println!("{}", "Welcome to infohub!".cyan().bold());

    // Main interactive loop
    loop {
        let options = &[
            "Show Social Feed",
            "Show Current Weather",
            "Show Top Headlines",
            "Exit",
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What would you like to see?")
            .items(options)
            .default(0)
            .interact_opt()? // Use interact_opt to handle potential cancellation (e.g., Ctrl+C)
            .unwrap_or(options.len() - 1); // Default to Exit if cancelled

        println!("\n---\n");

        // Handle the user's choice
        let command_result = match selection {
            0 => app.run_command(Commands::Posts).await,
            1 => {
                // Prompt for the city
                match cli::prompt_city() {
                    Ok(city) => {
                        app.run_command(Commands::Weather(WeatherArgs { city }))
                            .await
                    },
                    Err(e) => {
                        println!("{} {}", "Failed to get city:".red(), e);
                        continue;
                    },
                }
            },
            2 => app.run_command(Commands::News).await,
            3 => {
                println!("{}", "Exiting application. Goodbye!".green());
                break;
            },
            _ => unreachable!(),
        };

        // Handle potential errors from command execution
        if let Err(e) = command_result {
            error!("Command execution failed: {:?}", e);
            println!(
                "{} {}",
                "Error executing command:".red(),
                e.to_string().red()
            );
        }

        println!("\n---\n");
    }

    Ok(())
}
