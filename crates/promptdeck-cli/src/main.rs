//! Promptdeck CLI - prompt management from the terminal
//!
//! Thin front end over the provider: every subcommand is one call
//! against the configured prompt service.

mod config;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Password};
use std::fs;
use uuid::Uuid;

use promptdeck::domain::Visibility;
use promptdeck::ports::{CreatePromptRequest, PromptApi, UpdatePromptRequest};
use promptdeck_provider::{
    PromptDataSource, PromptLookup, PromptServiceClient, PromptVersionsDataSource, ProviderConfig,
};

use config::Config;

#[derive(Parser)]
#[command(name = "pdk")]
#[command(about = "Promptdeck CLI - prompt management", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Login and store API key
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
        /// Service endpoint to use
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// Prompt operations
    Prompt {
        #[command(subcommand)]
        action: PromptAction,
    },

    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
enum PromptAction {
    /// Create a prompt
    Create {
        /// Prompt name
        name: String,
        /// Prompt content (or use -f for file)
        content: Option<String>,
        /// Read content from file
        #[arg(short, long)]
        file: Option<String>,
        /// Description of the prompt
        #[arg(short, long)]
        description: Option<String>,
        /// Tags (comma-separated, e.g. "nlp,summarization")
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
        /// Visibility: public or private
        #[arg(long)]
        visibility: Option<Visibility>,
    },
    /// Fetch one prompt by id or name
    Get {
        /// Prompt id
        id: Option<Uuid>,
        /// Look up by name instead of id
        #[arg(short, long)]
        name: Option<String>,
    },
    /// List all prompts
    List,
    /// Update prompt fields
    Update {
        /// Prompt id
        id: Uuid,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New content (or use -f for file)
        #[arg(long)]
        content: Option<String>,
        /// Read new content from file
        #[arg(short, long)]
        file: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New tags (comma-separated)
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
        /// New visibility: public or private
        #[arg(long)]
        visibility: Option<Visibility>,
    },
    /// Roll a prompt back to a prior version
    Rollback {
        /// Prompt id
        id: Uuid,
        /// Version id to revert to
        version_id: Uuid,
    },
    /// Delete a prompt
    Delete {
        /// Prompt id
        id: Uuid,
    },
    /// List versions of a prompt
    Versions {
        /// Prompt id
        prompt_id: Uuid,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Login { key, endpoint } => cmd_login(key, endpoint).await,
        Commands::Prompt { action } => cmd_prompt(action).await,
        Commands::Config => cmd_config(),
    }
}

fn client_from(config: &Config) -> Result<Arc<PromptServiceClient>> {
    let api_key = config
        .api_key
        .as_ref()
        .context("Not logged in. Run 'pdk login' first.")?;
    let provider_config = ProviderConfig::new(config.endpoint.as_str(), api_key.as_str());
    Ok(Arc::new(PromptServiceClient::new(&provider_config)))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_login(key: Option<String>, endpoint: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(endpoint) = endpoint {
        config.set_endpoint(endpoint);
    }

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    // Test connection
    let client = PromptServiceClient::new(&ProviderConfig::new(
        config.endpoint.as_str(),
        api_key.as_str(),
    ));
    print!("Testing connection... ");

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not connect to the prompt service. Check the endpoint and API key.");
        }
    }

    config.set_api_key(api_key);
    config.save()?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

async fn cmd_prompt(action: PromptAction) -> Result<()> {
    let config = Config::load()?;
    let client = client_from(&config)?;

    match action {
        PromptAction::Create {
            name,
            content,
            file,
            description,
            tags,
            visibility,
        } => {
            let content = read_content(content, file)?;

            let prompt = client
                .create_prompt(CreatePromptRequest {
                    name,
                    content,
                    description,
                    tags: if tags.is_empty() { None } else { Some(tags) },
                    visibility,
                })
                .await?;

            println!(
                "{} Prompt '{}' created ({})",
                "✓".green(),
                prompt.name.cyan(),
                prompt.id
            );
        }

        PromptAction::Get { id, name } => {
            let lookup = PromptLookup::resolve(id, name)?;
            let data_source = PromptDataSource::new(client);
            let prompt = data_source.read(lookup).await?;

            println!("{} {}", prompt.name.cyan().bold(), prompt.id.to_string().dimmed());
            if let Some(description) = &prompt.description {
                println!("{}", description.dimmed());
            }
            println!(
                "{} {}  {} {}",
                "visibility:".dimmed(),
                prompt.visibility,
                "tags:".dimmed(),
                if prompt.tags.is_empty() {
                    "-".to_string()
                } else {
                    prompt.tags.join(", ")
                }
            );
            println!("{}", "---".dimmed());
            println!("{}", prompt.content);
        }

        PromptAction::List => {
            let prompts = client.list_prompts().await?;

            if prompts.is_empty() {
                println!("No prompts found.");
                return Ok(());
            }

            println!("{}", "Prompts:".bold());
            for prompt in prompts {
                println!(
                    "  {} {} [{}] {}",
                    prompt.id.to_string().dimmed(),
                    prompt.name.cyan(),
                    prompt.visibility,
                    prompt.description.as_deref().unwrap_or("-").dimmed()
                );
            }
        }

        PromptAction::Update {
            id,
            name,
            content,
            file,
            description,
            tags,
            visibility,
        } => {
            let content = match (content, file) {
                (None, None) => None,
                (content, file) => Some(read_content(content, file)?),
            };

            let req = UpdatePromptRequest {
                name,
                content,
                description,
                tags: if tags.is_empty() { None } else { Some(tags) },
                visibility,
            };
            if req == UpdatePromptRequest::default() {
                bail!("Nothing to update: set at least one field");
            }

            client.update_prompt(id, req).await?;
            println!("{} Prompt {} updated", "✓".green(), id);
        }

        PromptAction::Rollback { id, version_id } => {
            client.rollback_prompt(id, version_id).await?;
            println!(
                "{} Prompt {} rolled back to version {}",
                "✓".green(),
                id,
                version_id
            );
        }

        PromptAction::Delete { id } => {
            client.delete_prompt(id).await?;
            println!("{} Prompt {} deleted", "✓".green(), id);
        }

        PromptAction::Versions { prompt_id } => {
            let data_source = PromptVersionsDataSource::new(client);
            let model = data_source.read(prompt_id).await?;

            if model.versions.is_empty() {
                println!("No versions recorded for {}", prompt_id);
                return Ok(());
            }

            println!("{}", "Versions:".bold());
            for version in model.versions {
                println!(
                    "  {} v{} {}",
                    version.id.to_string().dimmed(),
                    version.version_number,
                    version.created_at.dimmed()
                );
            }
        }
    }

    Ok(())
}

/// Resolve prompt content from an argument, a file, or interactive input.
fn read_content(content: Option<String>, file: Option<String>) -> Result<String> {
    match (content, file) {
        (Some(c), None) => Ok(c),
        (None, Some(f)) => {
            fs::read_to_string(&f).with_context(|| format!("Failed to read file: {}", f))
        }
        (Some(_), Some(_)) => {
            bail!("Cannot specify both content and --file");
        }
        (None, None) => Input::new()
            .with_prompt("Prompt content")
            .interact_text()
            .context("Failed to read input"),
    }
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Endpoint: {}", config.endpoint);
    println!(
        "  API Key: {}",
        if config.api_key.is_some() {
            "Set".green()
        } else {
            "Not set".red()
        }
    );

    Ok(())
}
