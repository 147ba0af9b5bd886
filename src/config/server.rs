/// HTTP server configuration constants.
pub const DEFAULT_BIND_HOST: &str = "127.0.0.1";

/// Port the HTTP server listens on.
pub const DEFAULT_BIND_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Fixed seed for match generation; drawn from the OS when unset.
    pub match_seed: Option<u64>,
}
