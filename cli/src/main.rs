mod client;
mod seed;

use anyhow::Result;
use clap::{Parser, Subcommand};
use client::Client;
use uuid::Uuid;

const DEFAULT_SERVER: &str = "http://localhost:3000";

#[derive(Parser)]
#[command(name = "recipe-box")]
#[command(about = "Recipe Box CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every recipe
    List {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
    },
    /// Show a single recipe as JSON
    Get {
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
        id: Uuid,
    },
    /// Create a recipe
    Create {
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
        #[arg(long)]
        name: String,
        /// Repeat for each ingredient, in order
        #[arg(long = "ingredient", required = true)]
        ingredients: Vec<String>,
    },
    /// Replace the name and ingredients of a recipe
    Update {
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
        id: Uuid,
        #[arg(long)]
        name: String,
        #[arg(long = "ingredient", required = true)]
        ingredients: Vec<String>,
    },
    /// Delete a recipe
    Delete {
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
        id: Uuid,
    },
    /// Create a set of sample recipes
    Seed {
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { server } => {
            for recipe in Client::new(&server).list().await? {
                println!("{}", client::summary(&recipe));
            }
        }
        Commands::Get { server, id } => {
            let recipe = Client::new(&server).get(id).await?;
            println!("{}", serde_json::to_string_pretty(&recipe)?);
        }
        Commands::Create {
            server,
            name,
            ingredients,
        } => {
            let recipe = Client::new(&server).create(&name, &ingredients).await?;
            println!("{}", recipe.id);
        }
        Commands::Update {
            server,
            id,
            name,
            ingredients,
        } => {
            let recipe = Client::new(&server)
                .update(id, &name, &ingredients)
                .await?;
            println!("{}", client::summary(&recipe));
        }
        Commands::Delete { server, id } => {
            Client::new(&server).delete(id).await?;
            println!("Deleted {}", id);
        }
        Commands::Seed { server } => {
            seed::seed(&server).await?;
        }
    }

    Ok(())
}
