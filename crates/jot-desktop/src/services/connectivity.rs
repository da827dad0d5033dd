//! Connectivity probe for the desktop application
//!
//! The desktop has no ambient online/offline event, so reachability is
//! probed: a periodic TCP connect with a short timeout, published as
//! transitions on the core connectivity channel.

use std::time::Duration;

use jot_core::host::{Connectivity, ConnectivityPublisher};
use tokio::net::TcpStream;

const PROBE_ADDRESS: &str = "1.1.1.1:443";
const PROBE_INTERVAL: Duration = Duration::from_secs(5);
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Probe reachability forever, publishing transitions.
///
/// Runs until the caller drops the task.
pub async fn probe_loop(publisher: ConnectivityPublisher) {
    loop {
        publisher.publish(probe(PROBE_ADDRESS).await);
        tokio::time::sleep(PROBE_INTERVAL).await;
    }
}

async fn probe(address: &str) -> Connectivity {
    match tokio::time::timeout(PROBE_TIMEOUT, TcpStream::connect(address)).await {
        Ok(Ok(_)) => Connectivity::Online,
        Ok(Err(_)) | Err(_) => Connectivity::Offline,
    }
}
