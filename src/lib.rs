/*!
# Sample app

A tiny backend that answers every HTTP request, whatever its method or path, with the same
JSON document:

```json
{
    "service": "sample-app",
    "message": "Hello from the sample backend!",
    "version": "1.0.0",
    "path": "/foo/bar?x=1",
    "timestamp": "2024-01-01T00:00:00.000Z"
}
```

Only `path` (the raw request target, query string included) and `timestamp` (the time the
request was handled, UTC, millisecond precision) change from one response to the next.
The status is always 200 and the content type always `application/json`.

# Usage

The first step is to bind a `SampleServer`. Binding fails if the port is already in use.

```no_run
use sample_app::{SampleServer, ServerConfig};

let server = SampleServer::bind(ServerConfig::default()).unwrap();
```

Calling `run()` starts the worker threads and blocks forever:

```no_run
# use sample_app::{SampleServer, ServerConfig};
# let server = SampleServer::bind(ServerConfig::default()).unwrap();
server.run().unwrap();
```

If you need to stop the server later, for example in a test, call `spawn()` instead and
keep the returned handle:

```no_run
# use sample_app::{SampleServer, ServerConfig};
let server = SampleServer::bind(ServerConfig::new().with_random_port()).unwrap();
let handle = server.spawn().unwrap();
println!("serving on {}", handle.server_addr());
handle.shutdown();
```

The HTTP protocol itself (keep-alive, pipelining, chunked request bodies, `Date` and
`Content-Length` headers) is entirely handled by `tiny_http`.
*/
#![forbid(unsafe_code)]

pub use crate::config::{ServerConfig, DEFAULT_PORT};
pub use crate::error::Error;
pub use crate::payload::ResponsePayload;
pub use crate::server::{SampleServer, ServerHandle};

mod config;
mod error;
pub mod handler;
mod log;
pub mod payload;
mod server;
