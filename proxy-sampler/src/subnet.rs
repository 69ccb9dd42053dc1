//! /24 subnet keys and the subnet → addresses grouping

use ipnet::Ipv4Net;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::net::Ipv4Addr;

/// Prefix length used for grouping
pub const SUBNET_PREFIX_LEN: u8 = 24;

/// The /24 network an address belongs to
///
/// Two addresses share a key exactly when their first three octets match.
/// Keys order by network address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubnetKey(Ipv4Net);

impl SubnetKey {
    /// Derive the subnet key of an address
    pub fn of(addr: Ipv4Addr) -> Self {
        Self(Ipv4Net::new_assert(addr, SUBNET_PREFIX_LEN).trunc())
    }

    /// Check whether an address falls inside this subnet
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.0.contains(&addr)
    }

    /// The first three octets followed by a dot, e.g. `10.0.1.`
    pub fn prefix(&self) -> String {
        let [a, b, c, _] = self.0.network().octets();
        format!("{}.{}.{}.", a, b, c)
    }
}

impl fmt::Display for SubnetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Addresses grouped by /24 subnet, source order kept within each subnet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubnetGroups {
    groups: BTreeMap<SubnetKey, Vec<Ipv4Addr>>,
}

impl SubnetGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an address to the bucket of its subnet
    pub fn push(&mut self, addr: Ipv4Addr) {
        self.groups.entry(SubnetKey::of(addr)).or_default().push(addr);
    }

    /// Replace the bucket for a subnet wholesale
    ///
    /// An empty bucket is kept, so the subnet still shows up with no
    /// addresses.
    pub(crate) fn insert(&mut self, key: SubnetKey, addrs: Vec<Ipv4Addr>) {
        debug_assert!(addrs.iter().all(|addr| key.contains(*addr)));
        self.groups.insert(key, addrs);
    }

    pub fn get(&self, key: &SubnetKey) -> Option<&[Ipv4Addr]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Iterate subnets in ascending key order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.groups.iter(),
        }
    }

    /// Number of subnets
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of addresses across all subnets
    pub fn address_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// All addresses flattened, subnet by subnet
    pub fn addresses(&self) -> Vec<Ipv4Addr> {
        self.groups.values().flatten().copied().collect()
    }
}

impl FromIterator<Ipv4Addr> for SubnetGroups {
    fn from_iter<I: IntoIterator<Item = Ipv4Addr>>(iter: I) -> Self {
        let mut groups = SubnetGroups::new();
        for addr in iter {
            groups.push(addr);
        }
        groups
    }
}

/// Iterator over `(key, addresses)` pairs of a [`SubnetGroups`]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, SubnetKey, Vec<Ipv4Addr>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a SubnetKey, &'a [Ipv4Addr]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, addrs)| (key, addrs.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a SubnetGroups {
    type Item = (&'a SubnetKey, &'a [Ipv4Addr]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> Ipv4Addr {
        s.parse().unwrap()
    }

    #[test]
    fn test_same_first_three_octets_share_key() {
        assert_eq!(SubnetKey::of(ip("10.0.1.5")), SubnetKey::of(ip("10.0.1.9")));
        assert_eq!(SubnetKey::of(ip("10.0.1.0")), SubnetKey::of(ip("10.0.1.255")));
    }

    #[test]
    fn test_differing_octet_gives_distinct_key() {
        let base = SubnetKey::of(ip("10.0.1.5"));
        assert_ne!(base, SubnetKey::of(ip("11.0.1.5")));
        assert_ne!(base, SubnetKey::of(ip("10.1.1.5")));
        assert_ne!(base, SubnetKey::of(ip("10.0.2.5")));
    }

    #[test]
    fn test_key_formatting() {
        let key = SubnetKey::of(ip("192.168.7.42"));
        assert_eq!(key.to_string(), "192.168.7.0/24");
        assert_eq!(key.prefix(), "192.168.7.");
        assert!(key.contains(ip("192.168.7.0")));
        assert!(key.contains(ip("192.168.7.255")));
        assert!(!key.contains(ip("192.168.8.0")));
    }

    #[test]
    fn test_groups_keep_source_order() {
        let groups: SubnetGroups = ["10.0.1.9", "10.0.2.7", "10.0.1.5", "10.0.1.9"]
            .into_iter()
            .map(ip)
            .collect();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups.address_count(), 4);
        assert_eq!(
            groups.get(&SubnetKey::of(ip("10.0.1.1"))).unwrap(),
            &[ip("10.0.1.9"), ip("10.0.1.5"), ip("10.0.1.9")]
        );
    }

    #[test]
    fn test_iteration_is_sorted_by_network() {
        let groups: SubnetGroups = ["192.168.0.1", "10.0.2.1", "10.0.10.1", "10.0.1.1"]
            .into_iter()
            .map(ip)
            .collect();

        let keys: Vec<String> = groups.iter().map(|(key, _)| key.to_string()).collect();
        assert_eq!(
            keys,
            vec!["10.0.1.0/24", "10.0.2.0/24", "10.0.10.0/24", "192.168.0.0/24"]
        );
    }

    #[test]
    fn test_insert_empty_bucket_is_kept() {
        let mut groups = SubnetGroups::new();
        let key = SubnetKey::of(ip("10.0.1.1"));
        groups.insert(key, Vec::new());

        assert_eq!(groups.len(), 1);
        assert_eq!(groups.address_count(), 0);
        assert!(groups.get(&key).unwrap().is_empty());
    }
}
