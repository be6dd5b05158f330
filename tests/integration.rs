//! Live-kernel tests for the netlink handle.
//!
//! These require a netlink-capable kernel (creating a NETLINK_ROUTE socket
//! needs no privileges) and are gated behind the `integration` feature:
//!
//! ```bash
//! cargo test --test integration --features integration
//! ```

#![cfg(target_os = "linux")]

use nlhandle::{NetlinkHandle, Protocol};

/// Well-formed NLMSG_NOOP request: 16-byte header, no payload.
fn noop_request() -> [u8; 16] {
    [
        0x10, 0x00, 0x00, 0x00, // nlmsg_len = 16
        0x01, 0x00, // nlmsg_type = NLMSG_NOOP
        0x01, 0x00, // nlmsg_flags = NLM_F_REQUEST
        0x01, 0x00, 0x00, 0x00, // nlmsg_seq = 1
        0x00, 0x00, 0x00, 0x00, // nlmsg_pid = 0 (kernel assigns)
    ]
}

#[test]
fn connect_route_and_send() {
    let mut handle = NetlinkHandle::new();
    assert_eq!(handle.file_descriptor(), None);

    handle.connect(Protocol::Route).unwrap();
    let fd = handle.file_descriptor().expect("connected socket has an fd");
    assert!(fd >= 0);
    assert_eq!(handle.protocol(), Some(Protocol::Route));

    handle.send(&noop_request()).unwrap();
}

#[test]
fn second_connect_is_already_connected() {
    let mut handle = NetlinkHandle::new();
    handle.connect(Protocol::Route).unwrap();
    let fd = handle.file_descriptor();

    let err = handle.connect(Protocol::Generic).unwrap_err();
    assert!(err.is_already_connected());

    // Existing connection unchanged
    assert_eq!(handle.file_descriptor(), fd);
    assert_eq!(handle.protocol(), Some(Protocol::Route));
}

#[test]
fn send_before_connect_fails_at_transport() {
    let mut handle = NetlinkHandle::new();
    let err = handle.send(&noop_request()).unwrap_err();
    assert!(err.is_not_connected());
}

#[test]
fn handle_drops_cleanly_after_failed_connect() {
    let mut handle = NetlinkHandle::new();
    // Family ids above the kernel's MAX_LINKS (32) are rejected
    let err = handle.connect(Protocol::Other(255)).unwrap_err();
    assert!(err.errno().is_some());
    assert_eq!(handle.file_descriptor(), None);
    // Drop must not double-free or crash
}
