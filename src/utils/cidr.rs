use ipnetwork::IpNetwork;

use crate::errors::TargetError;

/// True when `input` is an address range in `addr/prefix` notation.
pub fn is_cidr(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.contains('/') && trimmed.parse::<IpNetwork>().is_ok()
}

/// Every address of the range, network and broadcast included.
pub fn expand_cidr(input: &str) -> Result<impl Iterator<Item = String>, TargetError> {
    if !is_cidr(input) {
        return Err(TargetError::CidrBadFormat(input.to_string()));
    }

    let network: IpNetwork = input
        .trim()
        .parse()
        .map_err(|_| TargetError::CidrBadFormat(input.to_string()))?;

    Ok(network.iter().map(|ip| ip.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_cidr() {
        assert!(is_cidr("192.168.1.0/24"));
        assert!(is_cidr("2001:db8::/126"));
        assert!(!is_cidr("192.168.1.1"));
        assert!(!is_cidr("example.com/24"));
        assert!(!is_cidr("10.0.0.0/33"));
    }

    #[test]
    fn test_expand_ipv4() {
        let ips: Vec<String> = expand_cidr("10.0.0.0/30").unwrap().collect();
        assert_eq!(ips, vec!["10.0.0.0", "10.0.0.1", "10.0.0.2", "10.0.0.3"]);
        assert_eq!(expand_cidr("10.1.2.3/32").unwrap().count(), 1);
        assert_eq!(expand_cidr("172.16.0.0/24").unwrap().count(), 256);
    }

    #[test]
    fn test_expand_ipv6() {
        let ips: Vec<String> = expand_cidr("2001:db8::/127").unwrap().collect();
        assert_eq!(ips, vec!["2001:db8::", "2001:db8::1"]);
    }

    #[test]
    fn test_expand_malformed() {
        assert!(matches!(
            expand_cidr("example.com"),
            Err(TargetError::CidrBadFormat(_))
        ));
    }
}
