use libp2p::multiaddr;

/// Errors from building an address filter out of configuration.
#[derive(Debug, thiserror::Error)]
pub enum AddrFilterError {
    #[error("invalid multiaddr {addr:?} in deny list")]
    InvalidAddr {
        addr: String,
        #[source]
        source: multiaddr::Error,
    },
}
