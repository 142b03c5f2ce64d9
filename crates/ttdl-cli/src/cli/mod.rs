//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use ttdl_core::config;
use ttdl_core::interrupt;
use ttdl_core::theme::Theme;

mod actions;
mod commands;
mod menu;
mod render;

#[derive(Parser)]
#[command(name = "ttdl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "TikTok media downloader for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Fetch and display metadata for a TikTok link
    Fetch {
        /// The TikTok video or images link
        #[arg(value_name = "URL")]
        url: String,
    },

    /// Download media for a TikTok link
    Download {
        /// The TikTok video or images link
        #[arg(value_name = "URL")]
        url: String,

        /// What to download
        #[arg(long, value_enum, default_value_t = Media::Standard)]
        media: Media,

        /// Image number (1-based) to download, for image posts
        #[arg(long, value_name = "N")]
        image: Option<usize>,

        /// Download directory for this run (overrides the configured one)
        #[arg(long, value_name = "PATH")]
        dir: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Manage the unlimited token
    Token {
        #[command(subcommand)]
        command: TokenCommands,
    },

    /// Show current API rate limits
    Limits,

    /// About this tool
    About,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum Media {
    /// Standard quality MP4
    Standard,
    /// HD MP4
    Hd,
    /// MP3 audio
    Mp3,
    /// Cover image
    Thumbnail,
    /// Every image of an image post
    Images,
    /// Every image, bundled into one ZIP
    Zip,
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Set the download directory
    SetDir {
        /// Directory downloads are saved into
        #[arg(value_name = "PATH")]
        path: String,
    },
}

#[derive(clap::Subcommand)]
enum TokenCommands {
    /// Save an unlimited token to .unlimited in the current directory
    Set {
        /// The token value
        #[arg(value_name = "TOKEN")]
        token: String,
    },
    /// Remove the .unlimited file
    Remove,
    /// Show whether a token is set
    Status,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    interrupt::init();
    let _guard = init_logging()?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

/// Logs go to a file under the ttdl home, never to the terminal: the boxed
/// UI owns stdout.
fn init_logging() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let home = config::paths::ttdl_home();
    std::fs::create_dir_all(&home)
        .with_context(|| format!("create {}", home.display()))?;

    let appender = tracing_appender::rolling::never(&home, "ttdl.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = config::Config::load().context("load config")?;
    let theme = Theme::default();

    // default to the interactive menu
    let Some(command) = cli.command else {
        return menu::run(&theme, &config).await;
    };

    match command {
        Commands::Fetch { url } => commands::fetch::run(&theme, &config, &url).await,

        Commands::Download {
            url,
            media,
            image,
            dir,
        } => {
            commands::download::run(
                &theme,
                &config,
                commands::download::DownloadArgs {
                    url: &url,
                    media,
                    image,
                    dir: dir.as_deref(),
                },
            )
            .await
        }

        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::SetDir { path } => commands::config::set_dir(&theme, &path),
        },

        Commands::Token { command } => match command {
            TokenCommands::Set { token } => commands::token::set(&theme, &token),
            TokenCommands::Remove => commands::token::remove(&theme),
            TokenCommands::Status => commands::token::status(&theme),
        },

        Commands::Limits => commands::limits::run(&theme, &config).await,

        Commands::About => commands::about::run(&theme, &config).await,
    }
}
