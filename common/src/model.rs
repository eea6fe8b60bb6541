//! Records extracted from the manager's XML responses.
//!
//! All fields come straight off the wire; the only derived value is
//! [`IpMember::is_ipv6`], which the server does not store.

use std::net::Ipv6Addr;

/// One entry of the security group catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityGroup {
    /// Opaque identifier, e.g. `securitygroup-10`.
    pub id: String,
    /// Unique within a scope, compared case-sensitively.
    pub name: String,
    /// Normalized to `""` when the element is absent or empty.
    pub description: String,
}

/// An object directly included in a group's membership definition.
///
/// The type is opaque here; it may name another group, a VM, an IP set or
/// any other construct the manager supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticMember {
    pub object_id: String,
    pub object_type: String,
    pub name: String,
}

/// A single address or range string translated out of an IP set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpMember {
    pub address: String,
    /// Derived by parsing the address as an IPv6 literal. Strings that do
    /// not parse at all count as non-IPv6 and stay visible.
    pub is_ipv6: bool,
}

impl IpMember {
    pub fn new(address: impl Into<String>) -> Self {
        let address: String = address.into();
        let is_ipv6: bool = address.parse::<Ipv6Addr>().is_ok();
        Self { address, is_ipv6 }
    }
}

/// A virtual machine the server resolved as an effective member, after
/// evaluating any dynamic membership criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VmMember {
    pub object_id: String,
    pub name: String,
}

/// Everything known about one group's membership, built fresh per
/// invocation and discarded after printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipReport {
    /// The resolved group identifier all three member lists belong to.
    pub group_id: String,
    pub static_members: Vec<StaticMember>,
    pub ip_members: Vec<IpMember>,
    pub vm_members: Vec<VmMember>,
}
