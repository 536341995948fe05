mod client;

use std::path::PathBuf;

use {
    clap::{Parser, Subcommand},
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(
    name = "promptshelf",
    about = "Promptshelf — component catalog for agent content bundles"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    /// Content root holding agents/, skills/, commands/, and .mcp.json.
    #[arg(long, global = true, env = "PROMPTSHELF_ROOT")]
    root: Option<PathBuf>,

    /// Base URL of a running catalog server (client subcommands).
    #[arg(
        long,
        global = true,
        env = "PROMPTSHELF_SERVER",
        default_value = "http://127.0.0.1:7878"
    )]
    server: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the content root and write the catalog artifact.
    Build,
    /// Serve the built catalog over HTTP.
    Serve {
        /// Address to bind to (overrides config value).
        #[arg(long)]
        bind: Option<String>,
        /// Port to listen on (overrides config value).
        #[arg(long)]
        port: Option<u16>,
    },
    /// List catalog items from a running server, grouped by kind.
    Items,
    /// Print one item's content from a running server.
    Show {
        /// Catalog path of the item (e.g. agents/code-reviewer.md).
        path: String,
    },
    /// Save new content for an item through a running server.
    Edit {
        /// Catalog path of the item.
        path: String,
        /// File holding the new content; reads stdin when omitted.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_telemetry(&cli);

    let config = promptshelf_config::discover_and_load(cli.root.as_deref());

    match cli.command {
        Commands::Build => {
            let artifact = config.artifact_path();
            let catalog = promptshelf_catalog::build(&config.root);
            promptshelf_catalog::write_artifact(&catalog, &artifact)?;
            println!("wrote {} items to {}", catalog.len(), artifact.display());
            Ok(())
        },
        Commands::Serve { bind, port } => {
            let state = promptshelf_server::AppState::load(&config.root, &config.artifact_path())?;
            let bind = bind.unwrap_or(config.server.bind);
            let port = port.unwrap_or(config.server.port);
            promptshelf_server::serve(&bind, port, state).await
        },
        Commands::Items => client::list_items(&cli.server).await,
        Commands::Show { path } => client::show_item(&cli.server, &path).await,
        Commands::Edit { path, file } => {
            client::edit_item(&cli.server, &path, file.as_deref()).await
        },
    }
}

/// Initialise tracing from `--log-level` / `RUST_LOG`, optionally as JSON.
fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(false))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true),
            )
            .init();
    }
}
