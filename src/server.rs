use std::net::SocketAddr;

use crate::error::AppError;
use crate::routes::build_router;

/// Resolve `host:port` into a socket address
pub fn resolve_addr(host: &str, port: u16) -> Result<SocketAddr, AppError> {
    format!("{}:{}", host, port)
        .parse::<SocketAddr>()
        .map_err(|e| AppError::InvalidAddress(e.to_string()))
}

/// Bind and serve the router until the server stops
pub async fn start_server(host: &str, port: u16) -> Result<(), AppError> {
    let addr = resolve_addr(host, port)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })?;
    tracing::info!(%addr, "Starting cgiparams server");
    println!(
        "{} {}",
        yansi::Paint::new("Web server running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    axum::serve(listener, build_router()).await?;
    Ok(())
}
