//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tokio::net::TcpListener;

use zpool_exporter::config::ExporterConfig;
use zpool_exporter::{HttpServer, Shutdown};

/// Write an executable shell script into the temp directory and return
/// its absolute path. Each test uses a distinct name so parallel tests
/// do not collide.
#[cfg(unix)]
pub fn write_fake_collector(name: &str, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = std::env::temp_dir().join(format!("{}-{}", name, std::process::id()));
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Start an exporter on an ephemeral loopback port running the given
/// collector command. Returns the bound address and the shutdown handle.
pub async fn start_exporter(
    collector_command: &str,
    timeout_secs: Option<u64>,
) -> (SocketAddr, Shutdown) {
    let mut config = ExporterConfig::default();
    config.collector.command = collector_command.to_string();
    config.collector.timeout_secs = timeout_secs;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    // Give the acceptor a moment to come up.
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, shutdown)
}

/// A reqwest client that never touches a proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
