//! The owning netlink socket handle.

use std::os::unix::io::RawFd;

use tracing::{debug, trace};

use crate::error::Result;
use crate::protocol::Protocol;
use crate::transport::{NO_FD, SysTransport, Transport};

/// Exclusively owned wrapper around one kernel netlink socket.
///
/// A handle starts in the allocated, unconnected state; [`connect`] creates
/// the OS socket and binds it to a protocol family, after which
/// [`send`] transmits raw datagrams and [`file_descriptor`] exposes the
/// backing descriptor. Dropping the handle releases the socket exactly once,
/// whether connect never ran, failed, or succeeded.
///
/// Structural operations take `&mut self`, so connect and send cannot race
/// on the same instance; the read-only accessors take `&self`.
///
/// The handle is generic over its [`Transport`] so tests can substitute a
/// recording fake; the default backend is [`SysTransport`].
///
/// [`connect`]: NetlinkHandle::connect
/// [`send`]: NetlinkHandle::send
/// [`file_descriptor`]: NetlinkHandle::file_descriptor
pub struct NetlinkHandle<T: Transport = SysTransport> {
    transport: T,
    protocol: Option<Protocol>,
}

impl NetlinkHandle {
    /// Create a handle in the allocated, unconnected state.
    pub fn new() -> Self {
        Self::with_transport(SysTransport::new())
    }
}

impl Default for NetlinkHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> NetlinkHandle<T> {
    /// Create a handle over a specific transport backend.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            protocol: None,
        }
    }

    /// Create the OS socket and bind it to the given protocol family with
    /// an automatically assigned local port.
    ///
    /// Fails with [`Error::Transport`] when the socket is already connected
    /// (`EISCONN`), the family is invalid, or the kernel refuses to create
    /// or bind the socket. A failed connect leaves the handle unconnected,
    /// with its resource intact and still destructible.
    ///
    /// [`Error::Transport`]: crate::Error::Transport
    pub fn connect(&mut self, protocol: Protocol) -> Result<()> {
        self.transport.connect(protocol.as_isize()).map_err(|err| {
            debug!(?protocol, error = %err, "netlink connect failed");
            err
        })?;
        self.protocol = Some(protocol);
        debug!(?protocol, fd = self.transport.fd(), "netlink socket connected");
        Ok(())
    }

    /// Transmit `data` verbatim as one datagram.
    ///
    /// Success means the kernel accepted the write; netlink delivery is
    /// best-effort, so acknowledgement protocols are the caller's concern.
    /// Zero-length buffers are forwarded as zero-length transmissions. On an
    /// unconnected handle the transport reports the failure (`EBADF`) rather
    /// than this layer pre-validating it.
    pub fn send(&mut self, data: &[u8]) -> Result<()> {
        let sent = self.transport.send(data)?;
        trace!(len = sent, "netlink datagram sent");
        Ok(())
    }

    /// The file descriptor backing the socket, if it has been created.
    ///
    /// `None` before a successful connect or after a failed one; the
    /// backend's `-1` sentinel is never exposed.
    pub fn file_descriptor(&self) -> Option<RawFd> {
        match self.transport.fd() {
            NO_FD => None,
            fd => Some(fd),
        }
    }

    /// The protocol family this handle is connected to, if any.
    pub fn protocol(&self) -> Option<Protocol> {
        self.protocol
    }

    /// Whether a successful connect has taken place.
    pub fn is_connected(&self) -> bool {
        self.protocol.is_some()
    }

    /// Borrow the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}
