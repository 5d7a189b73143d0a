mod catalog;
mod config;
mod error;
mod parser_api;
mod store;
mod tester;
mod types;
mod validator;

use anyhow::Result;
use clap::Parser;
use log::info;
use simple_logger::SimpleLogger;

#[tokio::main]
async fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .env()
        .init()?;

    info!("Starting parselab");

    // Parse command-line arguments
    let cli = config::Cli::parse();

    // Load configuration
    let config = config::load_config(&cli)?;
    info!("Configuration loaded successfully");

    match &cli.command {
        config::Command::Test(args) => tester::run(&config, args).await,
        config::Command::Validate(args) => validator::run(&config, args).await,
        config::Command::List { category } => list_patterns(category.as_deref()),
        config::Command::Show { id } => show_pattern(id),
    }
}

fn list_patterns(category: Option<&str>) -> Result<()> {
    let selected: Vec<&catalog::PatternCategory> = match category {
        Some(id) => match catalog::category(id) {
            Some(found) => vec![found],
            None => anyhow::bail!("Unknown category id: {}", id),
        },
        None => catalog::categories().iter().collect(),
    };

    for listed in &selected {
        println!(
            "{} - {} ({} patterns)",
            listed.id,
            listed.name,
            listed.patterns.len()
        );
        for entry in listed.patterns {
            println!("  {:24} {}", entry.id, entry.name);
        }
        println!();
    }

    if category.is_none() {
        println!(
            "{} patterns in {} categories",
            catalog::pattern_count(),
            catalog::categories().len()
        );
    }

    Ok(())
}

fn show_pattern(id: &str) -> Result<()> {
    let (category, entry) = match catalog::find(id) {
        Some(found) => found,
        None => anyhow::bail!("Unknown example id: {}", id),
    };

    println!("Name:        {}", entry.name);
    println!("Category:    {}", category.name);
    println!("Description: {}", entry.description);
    println!("Pattern:     {}", entry.pattern);
    if !entry.time_format.is_empty() {
        println!("Time format: {}", entry.time_format);
    }
    println!("Sample:      {}", entry.sample);

    Ok(())
}
