//! Network interface source for the primary IP address

use log::error;
use std::net::IpAddr;
use sysinfo::Networks;

/// Sentinel shown when no usable address exists
pub const NO_IP: &str = "No IP";

/// Primary IPv4 lookup over the host's network interfaces.
pub struct NetworkSource {
    networks: Networks,
}

impl NetworkSource {
    pub fn new() -> Self {
        Self {
            networks: Networks::new_with_refreshed_list(),
        }
    }

    /// First non-loopback IPv4 address in interface-name order, or the
    /// "No IP" sentinel when none is configured.
    ///
    /// The interface list is re-enumerated on every call so an address
    /// acquired after startup (late DHCP) shows up on the next sample.
    pub fn ip_address(&mut self) -> String {
        self.networks.refresh_list();

        match self.primary_ipv4() {
            Some(address) => address.to_string(),
            None => {
                error!("No usable IPv4 address on any interface");
                NO_IP.to_string()
            }
        }
    }

    fn primary_ipv4(&self) -> Option<IpAddr> {
        let mut interfaces: Vec<_> = self.networks.iter().collect();
        interfaces.sort_by(|(a, _), (b, _)| a.cmp(b));

        for (_name, data) in interfaces {
            for ip_network in data.ip_networks() {
                if let IpAddr::V4(address) = ip_network.addr {
                    if !address.is_loopback() {
                        return Some(IpAddr::V4(address));
                    }
                }
            }
        }
        None
    }
}

impl Default for NetworkSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_address_is_sentinel_or_non_loopback_ipv4() {
        let mut source = NetworkSource::new();
        let ip = source.ip_address();

        if ip != NO_IP {
            let parsed: std::net::Ipv4Addr = ip.parse().unwrap();
            assert!(!parsed.is_loopback());
        }
    }
}
