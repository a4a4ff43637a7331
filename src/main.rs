use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use dessert_recipes::client::{self, SharedClient};
use dessert_recipes::config::Config;
use dessert_recipes::logging::init_tracing;
use dessert_recipes::model::SortOrder;
use dessert_recipes::ui::dessert_detail::DessertDetailViewModel;
use dessert_recipes::ui::dessert_list::DessertListViewModel;

/// Browse dessert recipes from TheMealDB.
#[derive(Debug, Parser)]
#[command(name = "dessert-recipes", version)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Serve data from fixture files in DIR instead of the live API
    #[arg(long, global = true, value_name = "DIR")]
    fixtures: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List desserts
    List {
        /// Only show desserts whose name contains TEXT (case-insensitive)
        #[arg(long, value_name = "TEXT", default_value = "")]
        search: String,

        /// Sort order: alphabetical or reverse
        #[arg(long, default_value = "alphabetical")]
        sort: SortOrder,
    },
    /// Show the recipe for one dessert
    Show {
        /// Meal id, as printed by `list`
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(dir) = cli.fixtures {
        config.use_fixtures(dir);
    }

    let client = client::from_config(&config).context("Failed to create meal client")?;

    let succeeded = match cli.command {
        Command::List { search, sort } => run_list(client, search, sort).await,
        Command::Show { id } => run_show(client, id).await,
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn run_list(client: SharedClient, search: String, sort: SortOrder) -> bool {
    let view_model = DessertListViewModel::new(client);
    // Set before loading so the load path projects with them directly.
    view_model.set_sort_order(sort);
    view_model.set_search_text(search);
    view_model.load_list().await;

    let state = view_model.state();
    if state.status.is_failed() {
        eprintln!("Error: {}", state.last_error.unwrap_or_default());
        return false;
    }

    for dessert in &state.filtered_desserts {
        println!("{}\t{}", dessert.id, dessert.name);
    }
    true
}

async fn run_show(client: SharedClient, id: String) -> bool {
    let view_model = DessertDetailViewModel::new(id, client);
    view_model.load_detail().await;

    let state = view_model.state();
    if state.status.is_failed() {
        eprintln!("Error: {}", state.last_error.unwrap_or_default());
        return false;
    }

    println!("{}", state.meal_name);
    println!("{}", state.thumbnail_url);
    println!();
    println!("Ingredients:");
    for ingredient in &state.ingredients {
        println!("- {} {}", ingredient.measurement, ingredient.name);
    }
    println!();
    println!("Instructions:");
    println!("{}", state.instructions);
    true
}
