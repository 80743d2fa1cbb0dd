use clap::{ArgAction, Parser, Subcommand};
use movieflix_config::PathManager;
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

use commands::{auth, config, search};

#[derive(Parser)]
#[command(name = "movieflix")]
#[command(about = "MovieFlix - search movies and manage your local profile")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Override the profile directory (default: platform config dir)
    #[arg(long, global = true, value_name = "DIR")]
    profile: Option<PathBuf>,

    /// Write logs to the profile log directory instead of stderr
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    log_to_file: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and log in
    #[command(long_about = "Create a local account. Prompts for any detail not given on the command line; the password is hashed before it reaches disk. On success you are logged in immediately.")]
    Signup {
        /// Display name (if not provided, will prompt)
        #[arg(long)]
        name: Option<String>,

        /// Email address (if not provided, will prompt)
        #[arg(long)]
        email: Option<String>,
    },

    /// Log in to an existing account
    Login {
        /// Email address (if not provided, will prompt)
        #[arg(long)]
        email: Option<String>,
    },

    /// Log out of the current session
    Logout,

    /// Show the currently logged-in account
    Whoami,

    /// Search movies by title (requires login)
    Search {
        /// Title query
        query: String,
    },

    /// Show full metadata for one title (requires login)
    Movie {
        /// IMDB ID, e.g. tt0372784
        imdb_id: String,
    },

    /// Interactive debounced search session (requires login)
    #[command(long_about = "Start an interactive search session. The configured default query runs once at startup; subsequent queries go through the debounced search controller. An empty query exits.")]
    Browse,

    /// Configure the OMDb API key and search options
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration (masks the API key)
    Show {
        /// Show the unmasked API key
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },

    /// Set the OMDb API key
    SetKey {
        /// API key (if not provided, will prompt)
        #[arg(long)]
        api_key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let paths = match &cli.profile {
        Some(dir) => PathManager::with_base(dir),
        None => PathManager::default(),
    };

    let log_file = cli.log_to_file.then(|| paths.log_file());
    logging::init_logging(cli.verbose, cli.quiet, log_file)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Signup { name, email } => auth::run_signup(&paths, name, email, &output),
        Commands::Login { email } => auth::run_login(&paths, email, &output),
        Commands::Logout => auth::run_logout(&paths, &output),
        Commands::Whoami => auth::run_whoami(&paths, &output),
        Commands::Search { query } => search::run_search(&paths, &query, &output).await,
        Commands::Movie { imdb_id } => search::run_movie(&paths, &imdb_id, &output).await,
        Commands::Browse => search::run_browse(&paths, &output).await,
        Commands::Config { cmd } => match cmd.unwrap_or(ConfigCommands::Show { full: false }) {
            ConfigCommands::Show { full } => config::run_show(&paths, full, &output),
            ConfigCommands::SetKey { api_key } => config::run_set_key(&paths, api_key, &output),
        },
    }
}
