//! The transport seam between the handle and the netlink backend.
//!
//! All OS-specific socket detail lives behind [`Transport`]; the handle
//! itself never touches a descriptor or an errno directly. `netlink-sys`
//! provides the production backend ([`SysTransport`]); tests substitute
//! recording fakes.

use std::io;
use std::os::unix::io::{AsRawFd, RawFd};

use netlink_sys::{Socket, SocketAddr};

/// Sentinel the backend reports when no descriptor exists.
pub const NO_FD: RawFd = -1;

/// Primitive socket operations required from a netlink backend.
pub trait Transport {
    /// Create the OS socket for the given protocol family and bind it to an
    /// automatically assigned local port.
    ///
    /// Fails with `EISCONN` when the socket already exists. A failed connect
    /// leaves the transport unconnected and eligible for a retry.
    fn connect(&mut self, protocol: isize) -> io::Result<()>;

    /// Transmit `buf` verbatim as one datagram, returning the byte count
    /// the kernel accepted. Zero-length buffers are forwarded, not rejected.
    fn send(&mut self, buf: &[u8]) -> io::Result<usize>;

    /// The backing file descriptor, or [`NO_FD`] when the socket has not
    /// been created.
    fn fd(&self) -> RawFd;
}

/// Blocking netlink transport backed by `netlink-sys`.
///
/// The OS socket is created at [`connect`](Transport::connect) time, not at
/// construction. Dropping the transport closes the descriptor; ownership
/// guarantees it is closed exactly once.
#[derive(Default)]
pub struct SysTransport {
    socket: Option<Socket>,
}

impl SysTransport {
    /// Create a transport with no socket yet.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for SysTransport {
    fn connect(&mut self, protocol: isize) -> io::Result<()> {
        if self.socket.is_some() {
            return Err(io::Error::from_raw_os_error(libc::EISCONN));
        }

        let mut socket = Socket::new(protocol)?;

        // Port 0 asks the kernel to assign the local port
        socket.bind(&SocketAddr::new(0, 0))?;

        self.socket = Some(socket);
        Ok(())
    }

    fn send(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &self.socket {
            Some(socket) => socket.send(buf, 0),
            // No descriptor; sendto(2) on fd -1 reports EBADF
            None => Err(io::Error::from_raw_os_error(libc::EBADF)),
        }
    }

    fn fd(&self) -> RawFd {
        self.socket.as_ref().map_or(NO_FD, AsRawFd::as_raw_fd)
    }
}
