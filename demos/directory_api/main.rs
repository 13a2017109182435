//! Installer directory REST API
//!
//! Run with: `cargo run --example directory_api`
//! Then try: `curl 'http://127.0.0.1:3000/installers?search=austin&sort=experience-high'`

use directory::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,directory=debug,tower_http=debug")),
        )
        .init();

    let config_path =
        std::env::var("DIRECTORY_CONFIG").unwrap_or_else(|_| "demos/directory.yaml".to_string());
    let config = DirectoryConfig::from_yaml_file(&config_path)?;
    let source = FileSource::new(config.data.installers.clone());

    println!("\n🌱 Installer Directory API");
    println!("📡 Listening on http://{}", config.server.bind);
    println!("\n📚 Endpoints:");
    println!("  GET  /installers?search=&skillLevel=&city=&sort=");
    println!("  GET  /installers/{{id}}");
    println!("  POST /installers/{{id}}/quotes");
    println!("  GET  /images/cards");
    println!("  GET  /images/hero");
    println!("  GET  /health\n");

    ServerBuilder::new()
        .with_config(config)
        .load_catalog(&source)
        .await?
        .serve()
        .await
}
