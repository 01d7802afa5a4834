//! vtexctl CLI entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use vtexctl::cli::commands;
use vtexctl::cli::progress::ConsoleReporter;
use vtexctl::core::cache::WorkspaceCache;
use vtexctl::core::diagram::Direction;
use vtexctl::core::session::SessionDir;
use vtexctl::store::JsonFileStore;
use vtexctl::vtex::VtexCli;

#[derive(Parser)]
#[command(name = "vtexctl")]
#[command(author, version, about = "VTEX IO companion tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current VTEX account and workspace
    Status,
    /// Workspace operations
    Workspace {
        #[command(subcommand)]
        action: WorkspaceCommands,
    },
    /// Account operations
    Account {
        #[command(subcommand)]
        action: AccountCommands,
    },
    /// Workspace cache maintenance
    Cache {
        #[command(subcommand)]
        action: CacheCommands,
    },
    /// Print a Mermaid dependency diagram for a set of apps
    Diagram {
        /// manifest.json files or app directories (default: current directory)
        paths: Vec<PathBuf>,
        /// Graph orientation
        #[arg(short, long, value_enum, default_value_t = DirectionArg::Tb)]
        direction: DirectionArg,
    },
    /// Build chained vtex commands for a set of apps
    Apps {
        #[command(subcommand)]
        action: AppsCommands,
    },
}

#[derive(Subcommand)]
enum WorkspaceCommands {
    /// List workspaces (cached for 30 minutes per account)
    List {
        /// Skip the cache and fetch a live list
        #[arg(short, long)]
        refresh: bool,
    },
    /// Switch to a workspace
    Use {
        /// Workspace name
        name: String,
        /// Create the workspace if it does not exist
        #[arg(short, long)]
        create: bool,
    },
    /// Delete a workspace
    Delete {
        /// Workspace name
        name: String,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum AccountCommands {
    /// List logged-in accounts
    List,
    /// Switch to another account
    Switch {
        /// Account name
        name: String,
    },
}

#[derive(Subcommand)]
enum CacheCommands {
    /// Clear cached workspace lists
    Clear {
        /// Only this account's entry (default: all)
        account: Option<String>,
    },
    /// Mark an account's cached list stale without discarding it
    Expire {
        /// Account name
        account: String,
    },
}

#[derive(Subcommand)]
enum AppsCommands {
    /// Print a chained `vtex install` command
    Install {
        /// manifest.json files or app directories
        paths: Vec<PathBuf>,
    },
    /// Print a chained `vtex deploy` command
    Deploy {
        /// manifest.json files or app directories
        paths: Vec<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    Tb,
    Lr,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Tb => Direction::TopBottom,
            DirectionArg::Lr => Direction::LeftRight,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Status) => {
            commands::status::run_status(&session_dir()?)?;
        }
        Some(Commands::Workspace { action }) => {
            let session = session_dir()?;
            let cache = open_cache()?;
            let runner = VtexCli;
            match action {
                WorkspaceCommands::List { refresh } => {
                    let reporter = ConsoleReporter::new("Getting VTEX workspaces...");
                    commands::workspace::run_workspace_list(
                        &session, &cache, &runner, &reporter, refresh,
                    )
                    .await?;
                }
                WorkspaceCommands::Use { name, create } => {
                    let reporter = ConsoleReporter::new("Switching workspace...");
                    commands::workspace::run_workspace_use(
                        &session, &cache, &runner, &reporter, &name, create,
                    )
                    .await?;
                }
                WorkspaceCommands::Delete { name, yes } => {
                    commands::workspace::run_workspace_delete(
                        &session, &cache, &runner, &name, yes,
                    )
                    .await?;
                }
            }
        }
        Some(Commands::Account { action }) => {
            let session = session_dir()?;
            match action {
                AccountCommands::List => {
                    commands::account::run_account_list(&session)?;
                }
                AccountCommands::Switch { name } => {
                    let cache = open_cache()?;
                    let runner = VtexCli;
                    let reporter = ConsoleReporter::new("Switching account...");
                    commands::account::run_account_switch(
                        &session, &cache, &runner, &reporter, &name,
                    )
                    .await?;
                }
            }
        }
        Some(Commands::Cache { action }) => {
            let cache = open_cache()?;
            match action {
                CacheCommands::Clear { account } => {
                    commands::cache::run_cache_clear(&cache, account.as_deref())?;
                }
                CacheCommands::Expire { account } => {
                    commands::cache::run_cache_expire(&cache, &account)?;
                }
            }
        }
        Some(Commands::Diagram { paths, direction }) => {
            commands::diagram::run_diagram(&paths, direction.into())?;
        }
        Some(Commands::Apps { action }) => match action {
            AppsCommands::Install { paths } => {
                commands::apps::run_apps(commands::apps::AppsAction::Install, &paths)?;
            }
            AppsCommands::Deploy { paths } => {
                commands::apps::run_apps(commands::apps::AppsAction::Deploy, &paths)?;
            }
        },
        None => {
            println!("vtexctl - VTEX IO companion tool");
            println!("Run 'vtexctl --help' for usage");
        }
    }

    Ok(())
}

/// The VTEX session directory, `~/.vtex/session`
fn session_dir() -> anyhow::Result<SessionDir> {
    SessionDir::default_dir().context("Could not determine the home directory")
}

/// Workspace cache backed by a JSON file under the user config directory
fn open_cache() -> anyhow::Result<WorkspaceCache<JsonFileStore>> {
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .context("Could not determine a config directory")?;
    let store = JsonFileStore::new(base.join("vtexctl").join("cache.json"));
    Ok(WorkspaceCache::new(store))
}
