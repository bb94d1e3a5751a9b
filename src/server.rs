use std::io::{self, Write};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tiny_http::Server;

use crate::config::ServerConfig;
use crate::handler;
use crate::log::{debug, error, info};
use crate::Error;

/// A bound listening socket, ready to serve the sample payload.
///
/// Connections are accepted by `tiny_http` as soon as the socket is bound. Requests are
/// answered once `run` or `spawn` starts the workers.
pub struct SampleServer {
    server: Arc<Server>,
    addr: SocketAddr,
    workers: usize,
}

impl SampleServer {
    /// Binds the listening socket described by `config`.
    pub fn bind(config: ServerConfig) -> Result<SampleServer, Error> {
        let server = Server::http(config.addr).map_err(|source| Error::Bind {
            addr: config.addr,
            source,
        })?;
        let addr = server.server_addr().to_ip().unwrap_or(config.addr);

        Ok(SampleServer {
            server: Arc::new(server),
            addr,
            workers: config.workers.max(1),
        })
    }

    /// Returns the address the server is actually listening on.
    pub fn server_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serves requests on the calling thread's behalf until the process is terminated.
    pub fn run(self) -> Result<(), Error> {
        self.spawn()?.join();
        Ok(())
    }

    /// Starts the worker threads and returns immediately.
    ///
    /// The startup line is printed to stdout once every worker is running.
    pub fn spawn(self) -> Result<ServerHandle, Error> {
        self.spawn_announcing(io::stdout())
    }

    /// Same as `spawn`, writing the startup line to `out`.
    fn spawn_announcing<W: Write>(self, mut out: W) -> Result<ServerHandle, Error> {
        let stopping = Arc::new(AtomicBool::new(false));
        let mut handle = ServerHandle {
            server: self.server,
            addr: self.addr,
            stopping,
            threads: Vec::with_capacity(self.workers),
        };

        for id in 0..self.workers {
            let server = handle.server.clone();
            let stopping = handle.stopping.clone();

            let spawned = thread::Builder::new()
                .name(format!("sample-app-worker-{}", id))
                .spawn(move || work(&server, &stopping));

            match spawned {
                Ok(thread) => handle.threads.push(thread),
                Err(err) => {
                    handle.shutdown();
                    return Err(err.into());
                }
            }
        }

        if let Err(err) = writeln!(out, "{}", announcement(handle.addr.port())) {
            handle.shutdown();
            return Err(err.into());
        }
        info!("listening on {} with {} workers", handle.addr, self.workers);

        Ok(handle)
    }
}

/// Running worker threads of a `SampleServer`.
pub struct ServerHandle {
    server: Arc<Server>,
    addr: SocketAddr,
    stopping: Arc<AtomicBool>,
    threads: Vec<JoinHandle<()>>,
}

impl ServerHandle {
    /// Returns the address the server is listening on.
    pub fn server_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Blocks until every worker has exited.
    pub fn join(self) {
        join_workers(self.threads);
    }

    /// Stops the workers and closes the listening socket.
    ///
    /// Requests already pulled by a worker are answered first.
    pub fn shutdown(mut self) {
        self.stopping.store(true, Ordering::Release);

        // each unblock wakes exactly one worker
        for _ in 0..self.threads.len() {
            self.server.unblock();
        }

        join_workers(self.threads.drain(..));

        debug!("server on {} shut down", self.addr);
    }
}

/// The line announcing that the server accepts connections on `port`.
fn announcement(port: u16) -> String {
    format!("Sample app listening on port {}", port)
}

/// Waits for `threads`, returning how many of them panicked.
fn join_workers<I>(threads: I) -> usize
where
    I: IntoIterator<Item = JoinHandle<()>>,
{
    let mut panicked = 0;

    for thread in threads {
        let name = thread.thread().name().unwrap_or("<unnamed>").to_owned();
        if thread.join().is_err() {
            error!("worker thread {} panicked", name);
            panicked += 1;
        }
    }

    panicked
}

fn work(server: &Server, stopping: &AtomicBool) {
    loop {
        match server.recv() {
            Ok(request) => {
                if let Err(err) = handler::handle(request) {
                    debug!("failed to send response: {}", err);
                }
            }
            Err(err) => {
                if stopping.load(Ordering::Acquire) {
                    break;
                }
                error!("error while receiving a request: {}", err);
            }
        }
    }
}
