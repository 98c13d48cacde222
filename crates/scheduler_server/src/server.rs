//! Server startup and binding
//!
//! Provides functionality to start the Axum server with configurable host/port.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::routes;

/// Server instance that can be started
pub struct Server {
    /// Server configuration
    config: Arc<ServerConfig>,
    /// The built router
    router: Router,
}

impl Server {
    /// Create a new server instance with the given configuration
    pub fn new(config: ServerConfig) -> Self {
        let config = Arc::new(config);
        let router = routes::build_router(config.clone());

        Self { config, router }
    }

    /// Get the socket address the server will bind to
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Get the configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Run the server
    ///
    /// This is the main entry point for starting the server.
    /// It binds to the configured host/port and serves requests.
    pub async fn run(self) -> Result<(), std::io::Error> {
        let addr = self.socket_addr();
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, self.router).await
    }

    /// Run the server with a specific listener
    ///
    /// This is useful for testing where you want to use a listener bound to port 0
    /// to get a random available port.
    pub async fn run_with_listener(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, self.router).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_socket_addr() {
        let mut config = ServerConfig::default();
        config.host = "127.0.0.1".to_string();
        config.port = 3000;

        let server = Server::new(config);
        let addr = server.socket_addr();

        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_server_config_access() {
        let mut config = ServerConfig::default();
        config.port = 9999;

        let server = Server::new(config);

        assert_eq!(server.config().port, 9999);
    }

    #[tokio::test]
    async fn test_server_binds_to_random_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = Server::new(ServerConfig::default());
        let handle = tokio::spawn(async move {
            server.run_with_listener(listener).await.ok();
        });

        // The listener stays bound while the server task runs
        assert_ne!(addr.port(), 0);
        handle.abort();
    }
}
