use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Gets the host:port from the env vars HOST and PORT.
/// Uses defaults `127.0.0.1:3000` for whichever is unset.
pub fn get_api_base_url() -> Result<SocketAddr, HostPortError> {
    bind_address(std::env::var("HOST").ok(), std::env::var("PORT").ok())
}

/// Builds the listening address from optional host and port settings.
pub fn bind_address(host: Option<String>, port: Option<String>) -> Result<SocketAddr, HostPortError> {
    let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = match port {
        Some(p) => p.trim().parse::<u16>()?,
        None => DEFAULT_PORT,
    };
    let address = format!("{}:{}", host.trim(), port).parse::<SocketAddr>()?;
    Ok(address)
}

#[derive(Debug, Error)]
pub enum HostPortError {
    #[error("Invalid port: {0}")]
    InvalidPort(#[from] std::num::ParseIntError),

    #[error("Invalid hostname: {0}")]
    InvalidHostname(#[from] std::net::AddrParseError),
}
