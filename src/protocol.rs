//! Netlink protocol family identifiers.

use netlink_sys::protocols;

/// Netlink protocol families.
///
/// Each named variant maps 1:1 to the kernel `NETLINK_*` constant of the
/// same name. [`Other`](Protocol::Other) carries any numeric family id not
/// named here, keeping the enumeration open to new kernel families without
/// breaking existing values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// Routing/device hook (ip, tc, etc.)
    Route,
    /// Reserved for user-mode socket protocols
    Usersock,
    /// Socket diagnostics
    SockDiag,
    /// IPsec
    Xfrm,
    /// Auditing
    Audit,
    /// FIB lookup
    FibLookup,
    /// Kernel connector
    Connector,
    /// Netfilter
    Netfilter,
    /// Kobject uevent
    KobjectUevent,
    /// Generic netlink
    Generic,
    /// Crypto layer
    Crypto,
    /// Any other numeric family id.
    Other(isize),
}

impl Protocol {
    /// The numeric family id handed to the transport.
    pub fn as_isize(self) -> isize {
        match self {
            Protocol::Route => protocols::NETLINK_ROUTE,
            Protocol::Usersock => protocols::NETLINK_USERSOCK,
            Protocol::SockDiag => protocols::NETLINK_SOCK_DIAG,
            Protocol::Xfrm => protocols::NETLINK_XFRM,
            Protocol::Audit => protocols::NETLINK_AUDIT,
            Protocol::FibLookup => protocols::NETLINK_FIB_LOOKUP,
            Protocol::Connector => protocols::NETLINK_CONNECTOR,
            Protocol::Netfilter => protocols::NETLINK_NETFILTER,
            Protocol::KobjectUevent => protocols::NETLINK_KOBJECT_UEVENT,
            Protocol::Generic => protocols::NETLINK_GENERIC,
            Protocol::Crypto => protocols::NETLINK_CRYPTO,
            Protocol::Other(id) => id,
        }
    }
}
