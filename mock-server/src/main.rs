use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let api_key = match std::env::var("HYPIXEL_API_KEY") {
        Ok(key) => Uuid::try_parse(&key)?,
        Err(_) => mock_server::DEFAULT_API_KEY,
    };
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, %api_key, "mock api listening");
    mock_server::run(listener, api_key).await?;
    Ok(())
}
