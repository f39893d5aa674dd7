//! Server command implementation

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tally_core::store::FinanceStore;
use tally_core::{Config, MemoryStore};

use super::load_snapshot;

/// Environment variable with extra CORS origins (comma-separated)
const ALLOWED_ORIGINS_ENV: &str = "TALLY_ALLOWED_ORIGINS";

/// Pick the initial store contents: snapshot file, demo data, or empty
pub fn initial_store(data_path: &Path, seed: bool) -> Result<MemoryStore> {
    if data_path.exists() {
        let snapshot = load_snapshot(data_path)?;
        return Ok(MemoryStore::from_snapshot(snapshot));
    }
    if seed {
        return Ok(MemoryStore::with_sample_data());
    }
    Ok(MemoryStore::new())
}

/// Parse a comma-separated origin list
pub fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

pub async fn cmd_serve(
    data_path: &Path,
    config: &Config,
    host: Option<&str>,
    port: Option<u16>,
    seed: bool,
) -> Result<()> {
    let host = host.unwrap_or(&config.server.host);
    let port = port.unwrap_or(config.server.port);

    let store = initial_store(data_path, seed)?;
    let count = store.list_transactions()?.len();

    let mut server_config = tally_server::ServerConfig::from_config(config);
    let env_origins = parse_origins(&std::env::var(ALLOWED_ORIGINS_ENV).unwrap_or_default());
    server_config.allowed_origins.extend(env_origins);

    println!("🚀 Starting Tally web server...");
    if data_path.exists() {
        println!("   Data: {} ({} transactions)", data_path.display(), count);
    } else if seed {
        println!("   Data: demo set ({} transactions)", count);
    } else {
        println!("   Data: empty");
    }
    println!("   Listening: http://{}:{}", host, port);
    if !server_config.allowed_origins.is_empty() {
        println!(
            "   🌐 CORS origins: {}",
            server_config.allowed_origins.join(", ")
        );
    }
    println!();
    println!("   ⚠️  Changes are kept in memory only");
    println!("   Press Ctrl+C to stop");

    let store: Arc<dyn FinanceStore> = Arc::new(store);
    tally_server::serve_with_config(store, host, port, server_config).await?;

    Ok(())
}
