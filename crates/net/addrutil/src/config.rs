//! Address filter configuration.
//!
//! [`AddrFilterConfig`] is the TOML-serializable form; [`AddrFilterArgs`] is the
//! command line form and converts into it.

use clap::Args;
use libp2p::Multiaddr;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    AddrFilter, AddrFilterError, BoxedAddrFilter, SubtractFilter, filter_neg,
    is_fd_costly_transport, subtract_filter,
};

/// Address filtering configuration (TOML-serializable).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddrFilterConfig {
    /// Multiaddrs to drop, as strings
    #[serde(default)]
    pub deny: Vec<String>,

    /// Also drop addresses whose transport needs a file descriptor per connection
    #[serde(default)]
    pub skip_fd_costly: bool,
}

impl AddrFilterConfig {
    /// Parse the deny list into a [`SubtractFilter`].
    pub fn deny_filter(&self) -> Result<SubtractFilter, AddrFilterError> {
        let deny = self
            .deny
            .iter()
            .map(|addr| {
                addr.parse::<Multiaddr>()
                    .map_err(|source| AddrFilterError::InvalidAddr {
                        addr: addr.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(subtract_filter(deny))
    }

    /// Build the filter described by this configuration.
    pub fn build(&self) -> Result<BoxedAddrFilter, AddrFilterError> {
        let deny = self.deny_filter()?;

        debug!(
            denied = deny.removed().len(),
            skip_fd_costly = self.skip_fd_costly,
            "Built address filter"
        );

        Ok(if self.skip_fd_costly {
            BoxedAddrFilter::new(deny.and(filter_neg(is_fd_costly_transport)))
        } else {
            BoxedAddrFilter::new(deny)
        })
    }
}

/// Parameters for filtering advertised and dialed addresses
#[derive(Debug, Clone, Default, Args, PartialEq, Eq)]
#[command(next_help_heading = "Address filtering")]
pub struct AddrFilterArgs {
    /// Comma separated multiaddrs to drop.
    ///
    /// --addr-filter.deny /ip4/127.0.0.1/tcp/1634,/ip6/::1/tcp/1634
    #[arg(long = "addr-filter.deny", value_name = "MULTIADDR", value_delimiter = ',')]
    pub deny: Vec<Multiaddr>,

    /// Drop addresses whose transport needs a file descriptor per connection (TCP)
    #[arg(long = "addr-filter.skip-fd-costly", default_value_t = false)]
    pub skip_fd_costly: bool,
}

impl AddrFilterArgs {
    pub fn into_config(self) -> AddrFilterConfig {
        AddrFilterConfig {
            deny: self.deny.iter().map(ToString::to_string).collect(),
            skip_fd_costly: self.skip_fd_costly,
        }
    }
}
