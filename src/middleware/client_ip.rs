//! Client address extraction from a raw peer address.

use std::net::IpAddr;

/// Parses the IP out of a `host:port` peer address.
///
/// Accepts `1.2.3.4:80` and `[::1]:80`. Returns `None` when there is no
/// port separator, when an unbracketed host still contains a colon, or when
/// the host is not an IP literal. `None` means "unknown", never a wildcard.
///
/// ```rust
/// use tsu::middleware::client_ip;
///
/// assert_eq!(client_ip("127.0.0.1:8080").unwrap().to_string(), "127.0.0.1");
/// assert_eq!(client_ip("127.0:1"), None);
/// ```
pub fn client_ip(remote_addr: &str) -> Option<IpAddr> {
    split_host(remote_addr)?.parse().ok()
}

fn split_host(addr: &str) -> Option<&str> {
    if let Some(rest) = addr.strip_prefix('[') {
        let (host, tail) = rest.split_once(']')?;
        let port = tail.strip_prefix(':')?;
        return (!port.contains([':', '[', ']'])).then_some(host);
    }
    let (host, _port) = addr.rsplit_once(':')?;
    (!host.contains([':', '[', ']'])).then_some(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(raw: &str) -> String {
        client_ip(raw).map(|ip| ip.to_string()).unwrap_or_default()
    }

    #[test]
    fn ipv4_with_port() {
        assert_eq!(ip("127.0.0.1:8080"), "127.0.0.1");
        assert_eq!(ip("10.1.2.3:"), "10.1.2.3");
    }

    #[test]
    fn bracketed_ipv6() {
        assert_eq!(ip("[::1]:443"), "::1");
        assert_eq!(ip("[2001:db8:0:0:0:0:0:1]:80"), "2001:db8::1");
    }

    #[test]
    fn garbage_is_empty() {
        assert_eq!(ip("invalid ip address"), "");
        assert_eq!(ip("127.0:1"), "");
        assert_eq!(ip(""), "");
        assert_eq!(ip("localhost:80"), "");
    }

    #[test]
    fn missing_port_is_empty() {
        assert_eq!(ip("127.0.0.1"), "");
        assert_eq!(ip("[::1]"), "");
    }

    #[test]
    fn extra_colons_after_bracket_are_rejected() {
        assert_eq!(ip("[::1]:80:90"), "");
        assert_eq!(ip("[::1]:[80]"), "");
    }

    #[test]
    fn unbracketed_ipv6_is_rejected() {
        assert_eq!(ip("::1:80"), "");
    }
}
