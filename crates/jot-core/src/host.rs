//! Host-signal primitives.
//!
//! Connectivity transitions and the one-shot install capability are both
//! granted by the surrounding platform; this module gives them owned,
//! crate-local shapes the UI can hold in its state.

use std::fmt;

use tokio::sync::watch;

use crate::error::Result;

/// Network reachability as last reported by the host probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connectivity {
    Online,
    Offline,
}

impl Connectivity {
    #[must_use]
    pub const fn is_offline(self) -> bool {
        matches!(self, Self::Offline)
    }
}

/// Create a connectivity channel.
///
/// The publisher side is driven by whatever probes the host environment;
/// watchers subscribe for their own lifetime and observe every transition.
#[must_use]
pub fn connectivity_channel(initial: Connectivity) -> (ConnectivityPublisher, ConnectivityWatcher) {
    let (tx, rx) = watch::channel(initial);
    (ConnectivityPublisher { tx }, ConnectivityWatcher { rx })
}

/// Sending half of the connectivity channel.
#[derive(Debug)]
pub struct ConnectivityPublisher {
    tx: watch::Sender<Connectivity>,
}

impl ConnectivityPublisher {
    /// Publish the probed state; watchers are only woken on transitions.
    pub fn publish(&self, connectivity: Connectivity) {
        self.tx.send_if_modified(|current| {
            if *current == connectivity {
                false
            } else {
                *current = connectivity;
                true
            }
        });
    }

    /// Open another subscription on the same channel
    #[must_use]
    pub fn subscribe(&self) -> ConnectivityWatcher {
        ConnectivityWatcher {
            rx: self.tx.subscribe(),
        }
    }
}

/// Receiving half of the connectivity channel.
#[derive(Debug, Clone)]
pub struct ConnectivityWatcher {
    rx: watch::Receiver<Connectivity>,
}

impl ConnectivityWatcher {
    /// The most recently published state
    #[must_use]
    pub fn current(&self) -> Connectivity {
        *self.rx.borrow()
    }

    /// Wait for the next transition.
    ///
    /// Returns `None` once the publisher is gone.
    pub async fn changed(&mut self) -> Option<Connectivity> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}

/// The user's response to the install prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstallChoice {
    Accepted,
    Dismissed,
}

/// One-shot capability for the host's install flow.
///
/// The host grants at most one of these per run. Invoking it consumes the
/// token, so a second prompt is impossible without a fresh grant.
pub struct InstallPrompt {
    action: Box<dyn FnOnce() -> Result<InstallChoice> + Send>,
}

impl InstallPrompt {
    pub fn new(action: impl FnOnce() -> Result<InstallChoice> + Send + 'static) -> Self {
        Self {
            action: Box::new(action),
        }
    }

    /// Run the host install flow, spending the token.
    ///
    /// The token is gone whether the user accepts or dismisses.
    pub fn prompt(self) -> Result<InstallChoice> {
        (self.action)()
    }
}

impl fmt::Debug for InstallPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InstallPrompt")
    }
}
