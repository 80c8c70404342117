//! Child output monitoring.
//!
//! A reader thread turns the child's stdout into [`OutputEvent`]s on an mpsc
//! channel. [`Monitor`] consumes them on the calling thread until one of them
//! triggers shutdown.

use std::io::{BufRead, BufReader, Read};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::shutdown::{ShutdownLatch, ShutdownReason};

/// Something that happened on the child's output (or to the supervisor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEvent {
    /// One line of output, without its line terminator.
    Line(String),
    /// The output stream reached end of data.
    Closed,
    /// A [`ShutdownHandle`](super::ShutdownHandle) asked to stop waiting.
    ShutdownRequested,
}

/// Read `reader` line by line on a new thread, sending each line to `tx`.
///
/// Sends [`OutputEvent::Closed`] once the stream ends or fails to read.
/// Invalid UTF-8 is replaced rather than treated as an error.
pub fn spawn_reader<R>(reader: R, tx: Sender<OutputEvent>) -> JoinHandle<()>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&buf)
                        .trim_end_matches(['\n', '\r'])
                        .to_string();
                    if tx.send(OutputEvent::Line(line)).is_err() {
                        // Nobody is listening anymore.
                        return;
                    }
                }
                Err(e) => {
                    debug!("Reading child output failed: {}", e);
                    break;
                }
            }
        }

        let _ = tx.send(OutputEvent::Closed);
    })
}

/// Waits for the sentinel (or the end of the stream).
#[derive(Debug)]
pub struct Monitor {
    sentinel: String,
    timeout: Option<Duration>,
    latch: ShutdownLatch,
}

impl Monitor {
    /// Watch for `sentinel`, waiting at most `timeout` if one is given.
    pub fn new(sentinel: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            sentinel: sentinel.into(),
            timeout,
            latch: ShutdownLatch::new(),
        }
    }

    /// Handle one event.
    ///
    /// Returns the shutdown reason if this event is the one that triggered
    /// shutdown, `None` otherwise (including for events after shutdown).
    pub fn handle(&self, event: OutputEvent) -> Option<ShutdownReason> {
        let reason = match event {
            OutputEvent::Closed => ShutdownReason::ChildExited,
            OutputEvent::ShutdownRequested => ShutdownReason::Requested,
            OutputEvent::Line(line) if line.contains(&self.sentinel) => ShutdownReason::GameLoaded,
            OutputEvent::Line(line) => {
                trace!("child: {}", line);
                return None;
            }
        };

        self.latch.trigger(reason).then_some(reason)
    }

    /// Consume events from `rx` until shutdown is triggered.
    pub fn watch(&self, rx: &Receiver<OutputEvent>) -> ShutdownReason {
        let deadline = self.timeout.map(|t| Instant::now() + t);

        loop {
            let event = match deadline {
                None => rx.recv().unwrap_or(OutputEvent::Closed),
                Some(deadline) => {
                    let remaining = deadline.saturating_duration_since(Instant::now());
                    match rx.recv_timeout(remaining) {
                        Ok(event) => event,
                        Err(RecvTimeoutError::Disconnected) => OutputEvent::Closed,
                        Err(RecvTimeoutError::Timeout) => {
                            if self.latch.trigger(ShutdownReason::TimedOut) {
                                return ShutdownReason::TimedOut;
                            }
                            continue;
                        }
                    }
                }
            };

            if let Some(reason) = self.handle(event) {
                return reason;
            }
            if let Some(reason) = self.latch.reason() {
                return reason;
            }
        }
    }

    /// The recorded shutdown reason, if any.
    pub fn reason(&self) -> Option<ShutdownReason> {
        self.latch.reason()
    }
}
