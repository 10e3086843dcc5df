use dotenvy::dotenv;

use shopping_list::config::app_config::AppConfig;
use shopping_list::setup::{demo, dependency_injection::DependencyContainer};

/// Shopping list demo entry point
///
/// Wires the in-memory shopping list and replays a scripted session:
/// - config/: reference lists and matcher tolerance
/// - setup/: dependency injection and the demo script
/// - session/: command/view facade
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;
    let mut session = container.into_session().await?;

    // 5. Replay the scripted session
    demo::run(&mut session).await?;

    Ok(())
}
