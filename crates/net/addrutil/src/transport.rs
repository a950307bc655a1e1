//! Transport classification by per-connection descriptor cost.

use libp2p::Multiaddr;
use libp2p::multiaddr::Protocol;

/// Connection model of the transport carried by a multiaddr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum TransportKind {
    /// Connection oriented (`/tcp`). Every connection owns a socket.
    Stream,
    /// Connectionless (`/udp`). Overlays such as QUIC or uTP multiplex
    /// connections over a shared socket.
    Datagram,
}

impl TransportKind {
    /// Whether each connection over this transport allocates its own file descriptor.
    pub const fn is_fd_costly(self) -> bool {
        matches!(self, Self::Stream)
    }
}

/// Classify the transport of `addr`.
///
/// A `/tcp` component anywhere in the address wins over `/udp`. Overlays layered
/// on top (`/http`, `/quic-v1`, ...) do not change the verdict. Returns `None`
/// when the address carries no recognised transport.
pub fn transport_kind(addr: &Multiaddr) -> Option<TransportKind> {
    let mut kind = None;
    for proto in addr.iter() {
        match proto {
            Protocol::Tcp(_) => return Some(TransportKind::Stream),
            Protocol::Udp(_) => kind = Some(TransportKind::Datagram),
            _ => continue,
        }
    }
    kind
}

/// Check if dialing or listening on `addr` consumes a file descriptor per connection.
///
/// Addresses without a transport component return `false`. That means no cost was
/// detected, not that the address is valid.
pub fn is_fd_costly_transport(addr: &Multiaddr) -> bool {
    transport_kind(addr).is_some_and(TransportKind::is_fd_costly)
}
