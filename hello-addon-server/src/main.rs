//! # hello-addon server
//!
//! Serves a content-catalog add-on over HTTP:
//!
//! - `/` and `/manifest.json`: the add-on manifest
//! - `/catalog/<type>/<id>.json`: previews of every item of a type
//! - `/meta/<type>/<id>.json`: detailed meta for one item
//! - `/stream/<type>/<id>.json`: playable sources for an item or episode
//!
//! Anything else is a plain-text 404.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use hello_addon_core::CatalogStore;
use hello_addon_server::{
    AppState, create_app,
    infra::{
        config::{Config, ConfigLoad, ConfigLoader, ConfigLoaderOptions},
        startup::{load_store, report_dangling_streams},
        telemetry::init_tracing,
    },
};
use tracing::{info, warn};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "hello-addon-server")]
#[command(about = "Sample content-catalog add-on serving static movies and series")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Path to a TOML config file
    #[arg(long, env = "HELLO_ADDON_CONFIG")]
    config: Option<PathBuf>,

    /// Path to a .env file (defaults to ./.env when present)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// JSON catalog document replacing the built-in sample data
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the manifest as JSON and exit
    Manifest,
    /// Validate the catalog and report stream ids with no catalog entry
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let ConfigLoad { mut config, warnings } = ConfigLoader::with_options(ConfigLoaderOptions {
        config_path: cli.serve.config.clone(),
        env_file: cli.serve.env_file.clone(),
        skip_env_file: false,
    })
    .load()
    .context("failed to load configuration")?;
    apply_cli_overrides(&mut config, &cli.serve);
    config
        .server
        .validate()
        .context("invalid server address")?;

    init_tracing(&config.logging.filter);

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = config.metadata.config_path.as_ref() {
        info!(path = %path.display(), "loaded config file");
    }
    for warning in &warnings {
        warn!("{warning}");
    }

    let store = load_store(&config.catalog).context("failed to load catalog")?;

    match cli.command {
        Some(Command::Manifest) => print_manifest(&store),
        Some(Command::Check) => run_check(&store),
        None => run_server(store, config).await,
    }
}

fn apply_cli_overrides(config: &mut Config, args: &ServeArgs) {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host.as_ref() {
        config.server.host = host.clone();
    }
    if let Some(catalog) = args.catalog.as_ref() {
        config.catalog.path = Some(catalog.clone());
    }
}

fn print_manifest(store: &CatalogStore) -> anyhow::Result<()> {
    let manifest = serde_json::to_string_pretty(store.manifest())
        .context("failed to encode manifest")?;
    println!("{manifest}");
    Ok(())
}

fn run_check(store: &CatalogStore) -> anyhow::Result<()> {
    let dangling = store.dangling_stream_ids();
    for entry in &dangling {
        println!("{}\t{}", entry.content_type, entry.id);
    }
    if !dangling.is_empty() {
        anyhow::bail!(
            "{} stream id(s) have no matching catalog entry",
            dangling.len()
        );
    }

    let mut types: Vec<_> = store.catalog_types().map(|kind| kind.as_str()).collect();
    types.sort_unstable();
    println!(
        "catalog ok: {} items ({}), {} streams",
        store.item_count(),
        types.join(", "),
        store.stream_count()
    );
    Ok(())
}

async fn run_server(store: CatalogStore, config: Config) -> anyhow::Result<()> {
    info!(
        addon = %store.manifest().id,
        items = store.item_count(),
        streams = store.stream_count(),
        "catalog loaded"
    );
    let dangling = report_dangling_streams(&store);
    if dangling > 0 {
        warn!(dangling, "catalog has stream entries without catalog items");
    }

    let state = AppState::new(store, config);
    let config = Arc::clone(&state.config);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(config.server.bind_address())
        .await
        .with_context(|| {
            format!("failed to bind {}:{}", config.server.host, config.server.port)
        })?;
    let addr = listener.local_addr().context("failed to read bound address")?;
    info!(
        "Starting hello-addon server (HTTP) on {}:{}",
        config.server.host, config.server.port
    );
    info!("Manifest available at http://{addr}/manifest.json");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
