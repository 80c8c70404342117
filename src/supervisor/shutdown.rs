//! Launcher shutdown signalling.

use std::fmt;
use std::sync::mpsc::Sender;
use std::sync::OnceLock;

use super::monitor::OutputEvent;

/// Why the launcher is shutting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// The game printed the sentinel.
    GameLoaded,
    /// The game closed its output, usually by exiting.
    ChildExited,
    /// Something asked the supervisor to stop waiting.
    Requested,
    /// The configured sentinel timeout elapsed.
    TimedOut,
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::GameLoaded => "game loaded",
            Self::ChildExited => "game exited",
            Self::Requested => "shutdown requested",
            Self::TimedOut => "timed out waiting for game",
        };
        f.write_str(text)
    }
}

/// A one-shot shutdown trigger.
///
/// The first [`trigger`](Self::trigger) wins; later calls are no-ops.
#[derive(Debug, Default)]
pub struct ShutdownLatch {
    reason: OnceLock<ShutdownReason>,
}

impl ShutdownLatch {
    /// Create an untriggered latch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Trigger shutdown. Returns `true` only for the call that fired it.
    pub fn trigger(&self, reason: ShutdownReason) -> bool {
        self.reason.set(reason).is_ok()
    }

    /// The reason recorded by the first trigger.
    pub fn reason(&self) -> Option<ShutdownReason> {
        self.reason.get().copied()
    }
}

/// Asks a running supervisor to stop waiting for the game.
///
/// Cloneable and usable from any thread. Requests after shutdown are ignored.
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    tx: Sender<OutputEvent>,
}

impl ShutdownHandle {
    pub(crate) fn new(tx: Sender<OutputEvent>) -> Self {
        Self { tx }
    }

    /// Request shutdown.
    pub fn request(&self) {
        let _ = self.tx.send(OutputEvent::ShutdownRequested);
    }
}
