//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use sim_shell::{HttpServer, ShellConfig, Shutdown};
use tokio::net::TcpListener;

/// A running shell bound to an ephemeral port.
pub struct RunningShell {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl RunningShell {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the shell with `config` on 127.0.0.1 and an OS-assigned port.
pub async fn start_shell(mut config: ShellConfig) -> RunningShell {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let server = HttpServer::new(config).unwrap();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    RunningShell {
        addr,
        shutdown,
        handle,
    }
}

/// HTTP client that never reuses connections or consults proxy settings.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}
