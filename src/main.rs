use apiref_viewer::config::AppConfig;
use apiref_viewer::run_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Info by default, RUST_LOG overrides
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("API Reference Viewer");

    // Load configuration
    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}, catalog={}, default api={}",
        config.server.host,
        config.server.port,
        config.catalog.path.as_deref().unwrap_or("bundled"),
        config.catalog.default_api
    );

    run_server(config).await
}
