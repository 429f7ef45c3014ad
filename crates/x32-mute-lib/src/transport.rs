//! UDP transport — resolve the mixer, open a connected socket, send one datagram.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use crate::message::MuteMessage;

// ── Error type ──

/// Transport errors. All of them are fatal to the caller.
///
/// String payloads follow the convention **"context: details"** where
/// *context* names the endpoint or step and *details* is the underlying error.
#[derive(Debug)]
pub enum TransportError {
    Resolve(String),
    Open(String),
    Encode(String),
    Send(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Resolve(e) => write!(f, "Failed to resolve UDP address: {e}"),
            TransportError::Open(e) => write!(f, "Failed to open UDP socket: {e}"),
            TransportError::Encode(e) => write!(f, "Failed to encode OSC message: {e}"),
            TransportError::Send(e) => write!(f, "Failed to send OSC message: {e}"),
        }
    }
}

impl std::error::Error for TransportError {}

pub type Result<T> = std::result::Result<T, TransportError>;

// ── Trait ──

/// Something that can deliver a [`MuteMessage`] to a mixer.
pub trait MixerLink {
    /// Deliver exactly one message. No retries, no acknowledgment.
    fn send(&self, message: &MuteMessage) -> Result<()>;
    /// Remote endpoint the link sends to.
    fn peer(&self) -> SocketAddr;
}

// ── UDP backend ──

/// Connected UDP socket to a single mixer. The socket is closed on drop.
#[derive(Debug)]
pub struct UdpLink {
    socket: UdpSocket,
    peer: SocketAddr,
}

impl UdpLink {
    /// Resolve `host:port` and open a socket connected to the first address.
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        let peer = resolve(host, port)?;
        let local: SocketAddr = if peer.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };
        let socket = UdpSocket::bind(local)
            .map_err(|e| TransportError::Open(format!("bind {local}: {e}")))?;
        socket
            .connect(peer)
            .map_err(|e| TransportError::Open(format!("connect {peer}: {e}")))?;
        log::debug!("UDP socket {local} -> {peer}");
        Ok(UdpLink { socket, peer })
    }
}

impl MixerLink for UdpLink {
    fn send(&self, message: &MuteMessage) -> Result<()> {
        let bytes = message
            .encode()
            .map_err(|e| TransportError::Encode(format!("{}: {e:?}", message.address())))?;
        let sent = self
            .socket
            .send(&bytes)
            .map_err(|e| TransportError::Send(format!("{}: {e}", self.peer)))?;
        if sent != bytes.len() {
            return Err(TransportError::Send(format!(
                "{}: short write ({sent} of {} bytes)",
                self.peer,
                bytes.len()
            )));
        }
        log::debug!(
            "Sent {} ,i {} ({sent} bytes) to {}",
            message.address(),
            message.value(),
            self.peer
        );
        Ok(())
    }

    fn peer(&self) -> SocketAddr {
        self.peer
    }
}

/// Resolve `host:port` to the first socket address.
pub fn resolve(host: &str, port: u16) -> Result<SocketAddr> {
    (host, port)
        .to_socket_addrs()
        .map_err(|e| TransportError::Resolve(format!("{host}:{port}: {e}")))?
        .next()
        .ok_or_else(|| TransportError::Resolve(format!("{host}:{port}: no addresses found")))
}

// ── Mock ──

pub mod mock {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// In-memory link for tests. Records every message passed to `send`.
    pub struct MockLink {
        peer: SocketAddr,
        /// Recorded messages, in send order.
        pub sent: RefCell<Vec<MuteMessage>>,
        /// If true, `send` returns an error and records nothing.
        pub fail_send: Cell<bool>,
    }

    impl Default for MockLink {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockLink {
        pub fn new() -> Self {
            MockLink {
                peer: (Ipv4Addr::LOCALHOST, crate::protocol::X32_PORT).into(),
                sent: RefCell::new(Vec::new()),
                fail_send: Cell::new(false),
            }
        }
    }

    impl MixerLink for MockLink {
        fn send(&self, message: &MuteMessage) -> Result<()> {
            if self.fail_send.get() {
                return Err(TransportError::Send(format!("{}: mock failure", self.peer)));
            }
            self.sent.borrow_mut().push(message.clone());
            Ok(())
        }

        fn peer(&self) -> SocketAddr {
            self.peer
        }
    }
}
