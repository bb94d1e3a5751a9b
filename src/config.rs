use std::net::{Ipv4Addr, SocketAddr};
use std::num::NonZeroUsize;
use std::thread;

/// Port the sample app listens on.
pub const DEFAULT_PORT: u16 = 8000;

/// Where and how the server listens.
///
/// There is nothing to load: the defaults are the production values, and the builder methods
/// exist so that tests can pick a random port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address of the listening socket.
    pub addr: SocketAddr,

    /// Number of threads pulling requests off the server.
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            workers: thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The server will use a certain port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.addr.set_port(port);
        self
    }

    /// The server will use a random port, to be read back from `SampleServer::server_addr`.
    pub fn with_random_port(self) -> Self {
        self.with_port(0)
    }

    /// The server will listen on `addr`.
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    /// Number of worker threads. Zero is bumped to one.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }
}
