//! Multiaddr filtering utilities.
//!
//! This crate provides small, composable predicates over [`Multiaddr`]s and a
//! classifier for transports that consume a dedicated file descriptor per
//! connection. All operations are pure and never fail; only turning textual
//! configuration into a filter can error.
//!
//! # Components
//!
//! - **Filters**: [`AddrFilter`] with [`subtract_filter`], [`filter_neg`] and
//!   [`filter_addrs`] to apply them
//! - **Transport**: [`is_fd_costly_transport`] and [`transport_kind`]
//! - **Config**: [`AddrFilterConfig`] (TOML) and [`AddrFilterArgs`] (CLI)
//!
//! # Example
//!
//! ```
//! use libp2p::Multiaddr;
//! use vertex_net_addrutil::{filter_addrs, filter_neg, is_fd_costly_transport, subtract_filter};
//!
//! let local: Multiaddr = "/ip4/127.0.0.1/tcp/1634".parse().unwrap();
//! let quic: Multiaddr = "/ip4/10.0.0.1/udp/1634/quic-v1".parse().unwrap();
//! let addrs = vec![local.clone(), quic.clone()];
//!
//! assert_eq!(filter_addrs(&addrs, &subtract_filter([local])), vec![quic.clone()]);
//! assert_eq!(filter_addrs(&addrs, &filter_neg(is_fd_costly_transport)), vec![quic]);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod config;
mod error;
mod filter;
mod transport;

pub use config::{AddrFilterArgs, AddrFilterConfig};
pub use error::AddrFilterError;
pub use filter::{
    AddrFilter, And, BoxedAddrFilter, Neg, SubtractFilter, filter_addrs, filter_addrs_all,
    filter_neg, subtract_filter,
};
pub use transport::{TransportKind, is_fd_costly_transport, transport_kind};

/// Re-export of the multiaddr type every filter operates on.
pub use libp2p::Multiaddr;
