use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod auth;
mod cli;
mod clipboard;
mod config;
mod content;
mod id;
mod pricing;
mod provider;
mod tui;

#[derive(Parser)]
#[command(name = "scoopz")]
#[command(about = "AI content assistant for short-video creators", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    directory: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive TUI
    #[command(alias = "tui")]
    Run {
        /// Content niche to pre-fill (e.g. fitness, cooking)
        #[arg(short, long)]
        niche: Option<String>,

        /// Model to use (provider/model format)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Run a single generation without the TUI
    #[command(alias = "gen")]
    Generate {
        /// Content niche (e.g. fitness, cooking)
        #[arg(short, long)]
        niche: Option<String>,

        /// Specific topic within the niche
        #[arg(short, long)]
        topic: Option<String>,

        /// Script tone
        #[arg(long, value_enum)]
        tone: Option<content::Tone>,

        /// What to generate
        #[arg(long, value_enum, default_value_t = content::Mode::Ideas)]
        mode: content::Mode,

        /// Model to use (provider/model format)
        #[arg(short, long)]
        model: Option<String>,

        /// Copy the result to the clipboard
        #[arg(short, long)]
        copy: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a 7-day content calendar
    Calendar {
        /// Content niche (e.g. fitness, cooking)
        #[arg(short, long)]
        niche: Option<String>,

        /// Model to use (provider/model format)
        #[arg(short, long)]
        model: Option<String>,

        /// Copy the result to the clipboard
        #[arg(short, long)]
        copy: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show trending topic suggestions for a niche
    Trending {
        /// Content niche (e.g. fitness, cooking)
        #[arg(short, long)]
        niche: Option<String>,

        /// Print the suggestions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage provider API keys
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },

    /// Show subscription plans
    Plans {
        /// Show yearly prices
        #[arg(short, long)]
        yearly: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
enum AuthCommands {
    /// List providers and their credential status
    List,
    /// Store an API key for a provider
    Login {
        /// Provider ID (anthropic, google, groq)
        provider: String,

        /// API key (prompted for if omitted)
        #[arg(short, long)]
        key: Option<String>,
    },
    /// Remove a stored API key
    Logout {
        /// Provider ID (anthropic, google, groq)
        provider: String,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Show configuration file path
    Path,
    /// Initialize configuration file with defaults
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Change directory if specified
    if let Some(dir) = &cli.directory {
        std::env::set_current_dir(dir)?;
    }

    match cli.command {
        Some(Commands::Run { niche, model }) => {
            cli::run::execute(niche, model).await?;
        }
        Some(Commands::Generate {
            niche,
            topic,
            tone,
            mode,
            model,
            copy,
            json,
        }) => {
            cli::generate::execute(cli::generate::GenerateOptions {
                niche,
                topic,
                tone,
                mode,
                model,
                copy,
                json,
            })
            .await?;
        }
        Some(Commands::Calendar {
            niche,
            model,
            copy,
            json,
        }) => {
            cli::generate::execute(cli::generate::GenerateOptions {
                niche,
                mode: content::Mode::Calendar,
                model,
                copy,
                json,
                ..Default::default()
            })
            .await?;
        }
        Some(Commands::Trending { niche, json }) => {
            cli::trending::execute(niche, json).await?;
        }
        Some(Commands::Auth { command }) => match command {
            AuthCommands::List => {
                cli::auth::list().await?;
            }
            AuthCommands::Login { provider, key } => {
                cli::auth::login(&provider, key).await?;
            }
            AuthCommands::Logout { provider } => {
                cli::auth::logout(&provider).await?;
            }
        },
        Some(Commands::Plans { yearly }) => {
            cli::plans::execute(yearly).await?;
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => {
                cli::config::show().await?;
            }
            ConfigCommands::Path => {
                cli::config::path().await?;
            }
            ConfigCommands::Init => {
                cli::config::init().await?;
            }
        },
        Some(Commands::Version) => {
            println!("scoopz {}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            // Default: start TUI
            cli::run::execute(None, None).await?;
        }
    }

    Ok(())
}
