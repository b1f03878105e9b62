use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use cellworld::{logging, scenario::ScenarioLoader, WorldSummary};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Load a cellworld scenario and summarise it")]
struct Cli {
    /// Path to the scenario YAML file
    #[arg(long, default_value = "scenarios/tiny_field.yaml")]
    scenario: PathBuf,

    /// Output format for the summary
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log at debug level (ignored when RUST_LOG is set)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let loader = ScenarioLoader::new(".");
    let scenario = loader.load(&cli.scenario)?;
    let catalog = loader.load_catalog(&scenario)?;
    let world = scenario.build_world();
    world
        .validate(Some(&catalog))
        .with_context(|| format!("Scenario '{}' failed validation", scenario.name))?;
    info!(scenario = %scenario.name, "world is valid");

    let summary = world.summary();
    match cli.format {
        Format::Text => print_text(&scenario.name, &summary),
        Format::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}

fn print_text(name: &str, summary: &WorldSummary) {
    println!(
        "Scenario '{}': {} cells, {} players",
        name, summary.cell_count, summary.player_count
    );
    for (ty, amount) in &summary.amount_by_type {
        println!("  {ty:<16} {amount:>12.2}");
    }
}
