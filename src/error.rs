use std::io;
use std::net::SocketAddr;

use thiserror::Error;

/// Errors that can stop the server from starting.
#[derive(Debug, Error)]
pub enum Error {
    /// The listening socket could not be bound, for example because the port is in use.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// A worker thread could not be spawned.
    #[error("failed to spawn worker thread: {0}")]
    Io(#[from] io::Error),
}
