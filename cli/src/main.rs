mod client;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use recipe_ai_core::llm::create_provider;
use recipe_ai_core::{LlmConfig, LocalRecipeQuery, RecipeQuery};
use std::process::ExitCode;
use std::sync::Arc;

use client::HttpRecipeQuery;
use render::{is_success, run_form, TerminalNotifier};

#[derive(Parser)]
#[command(name = "recipe-ai")]
#[command(about = "Recipe AI CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ping the server (unauthenticated)
    Ping {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, env = "RECIPE_AI_SERVER", default_value = "http://localhost:3000")]
        server: String,
    },
    /// Generate a recipe through the server
    Generate {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, env = "RECIPE_AI_SERVER", default_value = "http://localhost:3000")]
        server: String,
        /// Comma-separated ingredients, e.g. "Chicken, Rice, Beans"
        ingredients: String,
    },
    /// Generate a recipe by calling the model directly (no server)
    Ask {
        /// Comma-separated ingredients, e.g. "Chicken, Rice, Beans"
        ingredients: String,
        /// Cache responses under ~/.recipe-ai/llm-cache unless RECIPE_AI_CACHE_DIR is set
        #[arg(long)]
        cache: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ping { server } => {
            let message = HttpRecipeQuery::new(&server).ping().await?;
            println!("{}", message);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Generate {
            server,
            ingredients,
        } => {
            let query = HttpRecipeQuery::new(&server);
            generate(&ingredients, &query).await
        }
        Commands::Ask { ingredients, cache } => {
            let mut config = LlmConfig::from_env()?;
            if cache && config.cache_dir.is_none() {
                config.cache_dir = Some(LlmConfig::default_cache_dir());
            }
            let provider = create_provider(&config)?;
            let query = LocalRecipeQuery::new(Arc::from(provider));
            generate(&ingredients, &query).await
        }
    }
}

async fn generate(ingredients: &str, query: &dyn RecipeQuery) -> Result<ExitCode> {
    let mut stderr = std::io::stderr();
    let (outcome, view) = run_form(ingredients, query, &TerminalNotifier, &mut stderr).await;

    if !view.result.is_empty() {
        println!("{}", view.result);
    }

    Ok(if is_success(outcome) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
