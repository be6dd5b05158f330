//! Minimal synchronous netlink socket handle for Linux.
//!
//! [`NetlinkHandle`] owns one kernel netlink socket end-to-end: allocation at
//! construction, binding to a protocol family, raw datagram transmission, and
//! file-descriptor introspection, with the descriptor released exactly once
//! when the handle is dropped. Message framing, attribute encoding, and
//! request/response handling are deliberately out of scope; higher-level
//! protocol code builds on top of this handle.
//!
//! # Example
//!
//! ```ignore
//! use nlhandle::{NetlinkHandle, Protocol};
//!
//! let mut handle = NetlinkHandle::new();
//! handle.connect(Protocol::Route)?;
//!
//! let fd = handle.file_descriptor().expect("connected socket has a descriptor");
//! handle.send(&request_bytes)?;
//! ```
//!
//! The handle stays in the socket's default blocking mode; callers needing
//! non-blocking or cancellable sends configure the descriptor themselves or
//! layer a timeout above this crate.

mod error;
mod handle;
mod protocol;
pub mod transport;

pub use error::{Error, Result};
pub use handle::NetlinkHandle;
pub use protocol::Protocol;
pub use transport::{SysTransport, Transport};
