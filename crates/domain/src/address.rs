//! Address range classification for egress control.
//!
//! Every address a fetch may contact is classified against a closed set of
//! forbidden range categories. The set is exhaustive by construction: adding
//! a category is a compile-time change, not a runtime string match.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Forbidden address range categories.
///
/// Covers both families. IPv4-mapped IPv6 addresses are unwrapped before
/// classification, so a forbidden IPv4 range cannot be reached through its
/// IPv6 re-encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressCategory {
    /// 0.0.0.0 / ::
    Unspecified,
    /// 127.0.0.0/8 / ::1
    Loopback,
    /// 169.254.0.0/16 / fe80::/10
    LinkLocal,
    /// RFC 1918 ranges
    Private,
    /// 224.0.0.0/4 / ff00::/8
    Multicast,
    /// 255.255.255.255
    Broadcast,
    /// 240.0.0.0/4, 192.0.0.0/24 and other IETF reserved space
    Reserved,
    /// 100.64.0.0/10 shared address space (RFC 6598)
    CarrierGradeNat,
    /// TEST-NET ranges and 2001:db8::/32
    Documentation,
    /// 198.18.0.0/15 / 2001:2::/48
    Benchmarking,
    /// fc00::/7
    UniqueLocal,
    /// 2002::/16 6to4 transition relay space
    SixToFour,
    /// 2001::/32 Teredo tunneling
    Teredo,
    /// Deprecated IPv4-compatible IPv6 embedding (::a.b.c.d)
    Deprecated,
    /// 100::/64 discard-only block (RFC 6666)
    DiscardOnly,
}

impl AddressCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::Loopback => "loopback",
            Self::LinkLocal => "link-local",
            Self::Private => "private",
            Self::Multicast => "multicast",
            Self::Broadcast => "broadcast",
            Self::Reserved => "reserved",
            Self::CarrierGradeNat => "carrier-grade NAT",
            Self::Documentation => "documentation",
            Self::Benchmarking => "benchmarking",
            Self::UniqueLocal => "unique-local",
            Self::SixToFour => "6to4 transition",
            Self::Teredo => "Teredo tunneling",
            Self::Deprecated => "deprecated embedding",
            Self::DiscardOnly => "discard-only",
        }
    }
}

impl std::fmt::Display for AddressCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an address against the forbidden range set.
///
/// Returns `None` when the address is safe to contact. Pure and lock-free;
/// callers may invoke this concurrently without synchronization. Only parsed
/// addresses reach this point: text that does not parse as a URL host is
/// denied upstream before any classification.
pub fn forbidden_category(ip: IpAddr) -> Option<AddressCategory> {
    match ip {
        IpAddr::V4(v4) => forbidden_v4(v4),
        IpAddr::V6(v6) => forbidden_v6(v6),
    }
}

fn forbidden_v4(ip: Ipv4Addr) -> Option<AddressCategory> {
    let octets = ip.octets();

    if ip.is_unspecified() {
        return Some(AddressCategory::Unspecified);
    }
    if ip.is_loopback() {
        return Some(AddressCategory::Loopback);
    }
    if ip.is_link_local() {
        return Some(AddressCategory::LinkLocal);
    }
    if ip.is_private() {
        return Some(AddressCategory::Private);
    }
    if ip.is_broadcast() {
        return Some(AddressCategory::Broadcast);
    }
    if ip.is_multicast() {
        return Some(AddressCategory::Multicast);
    }
    // 100.64.0.0/10 (RFC 6598 shared address space)
    if octets[0] == 100 && (octets[1] & 0xc0) == 64 {
        return Some(AddressCategory::CarrierGradeNat);
    }
    // 198.18.0.0/15 (RFC 2544 benchmarking)
    if octets[0] == 198 && (octets[1] & 0xfe) == 18 {
        return Some(AddressCategory::Benchmarking);
    }
    // TEST-NET-1/2/3
    if (octets[0] == 192 && octets[1] == 0 && octets[2] == 2)
        || (octets[0] == 198 && octets[1] == 51 && octets[2] == 100)
        || (octets[0] == 203 && octets[1] == 0 && octets[2] == 113)
    {
        return Some(AddressCategory::Documentation);
    }
    // 192.0.0.0/24 (IETF protocol assignments) and 240.0.0.0/4
    if (octets[0] == 192 && octets[1] == 0 && octets[2] == 0) || octets[0] >= 240 {
        return Some(AddressCategory::Reserved);
    }

    None
}

fn forbidden_v6(ip: Ipv6Addr) -> Option<AddressCategory> {
    let segments = ip.segments();

    if ip.is_unspecified() {
        return Some(AddressCategory::Unspecified);
    }
    if ip.is_loopback() {
        return Some(AddressCategory::Loopback);
    }
    // IPv4-mapped (::ffff:a.b.c.d): unwrap and classify as IPv4 so range
    // checks cannot be bypassed by re-encoding.
    if let Some(v4) = ip.to_ipv4_mapped() {
        return forbidden_v4(v4);
    }
    // Deprecated IPv4-compatible embedding (::a.b.c.d). The embedded IPv4
    // classification wins when it names a forbidden range; otherwise the
    // embedding itself is rejected as deprecated.
    if segments[0..6] == [0, 0, 0, 0, 0, 0] && (segments[6] != 0 || segments[7] > 1) {
        let v4 = Ipv4Addr::new(
            (segments[6] >> 8) as u8,
            segments[6] as u8,
            (segments[7] >> 8) as u8,
            segments[7] as u8,
        );
        return forbidden_v4(v4).or(Some(AddressCategory::Deprecated));
    }
    if ip.is_multicast() {
        return Some(AddressCategory::Multicast);
    }
    // fe80::/10
    if (segments[0] & 0xffc0) == 0xfe80 {
        return Some(AddressCategory::LinkLocal);
    }
    // fc00::/7
    if (segments[0] & 0xfe00) == 0xfc00 {
        return Some(AddressCategory::UniqueLocal);
    }
    // 2002::/16
    if segments[0] == 0x2002 {
        return Some(AddressCategory::SixToFour);
    }
    // 2001::/32
    if segments[0] == 0x2001 && segments[1] == 0 {
        return Some(AddressCategory::Teredo);
    }
    // 2001:2::/48
    if segments[0] == 0x2001 && segments[1] == 2 && segments[2] == 0 {
        return Some(AddressCategory::Benchmarking);
    }
    // 2001:db8::/32
    if segments[0] == 0x2001 && segments[1] == 0xdb8 {
        return Some(AddressCategory::Documentation);
    }
    // 100::/64 (RFC 6666)
    if segments[0] == 0x100 && segments[1..4] == [0, 0, 0] {
        return Some(AddressCategory::DiscardOnly);
    }

    None
}
