use anyhow::Result;
use tb_core::config::Config;

fn main() -> Result<()> {
    // Respect RUST_LOG if set, otherwise log requests and lifecycle at info.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        "teamboard=info,tb_server=info,tb_db=info,tb_core=info,tower_http=info".to_string()
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    let config = Config::from_env();
    tracing::info!(
        "Starting teamboard on {}:{} (database {})",
        config.server.host,
        config.server.port,
        config.server.db_path.display()
    );

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(tb_server::start(config))?;
    Ok(())
}
