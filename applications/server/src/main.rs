/// Encore Server - band catalog REST API
use clap::{Parser, Subcommand};
use encore_server::{config::ServerConfig, state::AppState};
use std::net::SocketAddr;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "encore-server")]
#[command(about = "Encore band catalog server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Run database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "encore_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => serve().await?,
        Commands::Migrate => migrate().await?,
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting Encore Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = encore_storage::create_pool(&config.storage.database_url).await?;
    encore_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    // Build application state (includes the property-mapping registry,
    // constructed once and shared read-only from here on)
    let app_state = AppState::new(pool);

    // Build router
    let app = encore_server::create_router(app_state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive());

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn migrate() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    config.validate()?;

    let pool = encore_storage::create_pool(&config.storage.database_url).await?;
    encore_storage::run_migrations(&pool).await?;

    tracing::info!("Migrations applied to {}", config.storage.database_url);
    Ok(())
}
