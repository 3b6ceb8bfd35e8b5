//! UDP [`CommandSource`] implementation.
//!
//! Binds a UDP socket and receives one datagram at a time.  Each payload
//! is decoded as UTF-8 text and parsed as a [`Command`].
//!
//! # Wire format
//!
//! Every message is the bare payload of one datagram — no framing, no
//! length prefix, no checksum beyond UDP's own:
//!
//! ```text
//! Fire
//! Water
//! Earth
//! PlayerDead
//! MageDead
//! ```
//!
//! Payloads are trimmed of surrounding whitespace and compared
//! case-sensitively.  Anything that is not a recognized literal
//! (including invalid UTF-8) is logged and dropped; malformed and
//! valid-but-unknown messages are handled identically.
//!
//! # Delivery semantics
//!
//! UDP's unreliable, unordered delivery is passed through unmodified: no
//! deduplication, no retries for dropped packets, no ordering guarantee
//! beyond arrival order.  At most one receive is outstanding at any time;
//! the next one is issued only after the previous datagram has been fully
//! handled.

use crate::command::Command;
use crate::traits::CommandSource;
use log::{debug, error, info};
use std::net::{Ipv4Addr, UdpSocket};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};

/// Receive buffer size.  Recognized commands are a handful of bytes; a
/// datagram longer than this is truncated by the OS and therefore
/// unrecognized by construction.
const MAX_DATAGRAM_LEN: usize = 1024;

/// A [`CommandSource`] that listens on a UDP port for text commands.
///
/// The socket is bound once in [`bind`](UdpCommandListener::bind) and
/// owned by the receive loop for its entire lifetime; it is dropped
/// exactly once, when [`run`](CommandSource::run) returns.
pub struct UdpCommandListener {
    socket: UdpSocket,
    port: u16,
    stop: Arc<AtomicBool>,
}

/// Errors produced by the UDP listener.
#[derive(Debug, thiserror::Error)]
pub enum UdpListenerError {
    /// The port was unavailable at startup (already in use or
    /// disallowed).  Fatal to the listener: the host should abort or
    /// retry startup, never continue without a functioning listener.
    #[error("failed to bind udp port {port}: {source}")]
    Bind {
        port: u16,
        source: std::io::Error,
    },

    /// The socket failed while listening and a single re-arm attempt
    /// failed as well.
    #[error("receive failed: {0}")]
    Receive(#[from] std::io::Error),
}

/// Signals a running [`UdpCommandListener`] to shut down.
///
/// Holds only the stop flag and the listener's port, never the socket.
/// [`stop`](StopHandle::stop) is the sole cancellation mechanism for a
/// pending receive; there is no per-receive timeout.
#[derive(Debug, Clone)]
pub struct StopHandle {
    stop: Arc<AtomicBool>,
    port: u16,
}

impl StopHandle {
    /// Request shutdown.
    ///
    /// Sets the stop flag, then sends one empty datagram to the loopback
    /// address so a blocked receive returns and the loop can observe the
    /// flag.  The loop re-checks the flag before dispatching, so neither
    /// the wake datagram nor any racing real datagram produces an effect
    /// after this call.  Calling it again is a no-op.
    pub fn stop(&self) {
        if self.stop.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Ok(waker) = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)) {
            let _ = waker.send_to(&[], (Ipv4Addr::LOCALHOST, self.port));
        }
    }
}

impl UdpCommandListener {
    /// Bind a UDP socket on all local interfaces at `port`.
    ///
    /// Pass port `0` to let the OS pick a free port (used by tests);
    /// [`port`](UdpCommandListener::port) reports the resolved value.
    pub fn bind(port: u16) -> Result<Self, UdpListenerError> {
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, port))
            .map_err(|source| UdpListenerError::Bind { port, source })?;
        let port = socket
            .local_addr()
            .map_err(|source| UdpListenerError::Bind { port, source })?
            .port();
        Ok(Self {
            socket,
            port,
            stop: Arc::new(AtomicBool::new(false)),
        })
    }

    /// The port the socket is actually bound to.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// A handle that can stop this listener from another thread.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            stop: Arc::clone(&self.stop),
            port: self.port,
        }
    }
}

impl CommandSource for UdpCommandListener {
    type Error = UdpListenerError;

    /// Receive datagrams until stopped.
    ///
    /// This method **blocks** indefinitely.  Run it on a dedicated
    /// thread.
    ///
    /// A receive error while listening is logged and the receive is
    /// re-armed once; if the re-armed receive fails as well, the error is
    /// returned so the host can see that the listener is no longer
    /// receiving.  A receive error after [`StopHandle::stop`] is ordinary
    /// shutdown, not an error.
    fn run(&mut self, sink: mpsc::Sender<Command>) -> Result<(), Self::Error> {
        info!("listening on udp port {}", self.port);

        let mut buf = [0u8; MAX_DATAGRAM_LEN];
        let mut rearmed = false;
        loop {
            if self.stop.load(Ordering::SeqCst) {
                info!("stop requested, shutting down");
                return Ok(());
            }
            match self.socket.recv_from(&mut buf) {
                Ok((len, src)) => {
                    rearmed = false;
                    if self.stop.load(Ordering::SeqCst) {
                        info!("stop requested, shutting down");
                        return Ok(());
                    }
                    let payload = String::from_utf8_lossy(&buf[..len]);
                    match Command::parse(&payload) {
                        Some(cmd) => {
                            debug!("received {} from {}", cmd, src);
                            if sink.send(cmd).is_err() {
                                info!("sink closed, shutting down");
                                return Ok(());
                            }
                        }
                        None => {
                            info!("ignoring message from {}: {:?}", src, payload.trim());
                        }
                    }
                }
                Err(e) if self.stop.load(Ordering::SeqCst) => {
                    debug!("receive interrupted by stop: {}", e);
                    return Ok(());
                }
                Err(e) if !rearmed => {
                    error!("receive error: {}, re-arming once", e);
                    rearmed = true;
                }
                Err(e) => {
                    error!("receive failed again after re-arming, giving up");
                    return Err(UdpListenerError::Receive(e));
                }
            }
        }
    }
}

//  Tests
