use std::io::{Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use sample_app::{SampleServer, ServerConfig, ServerHandle};

/// Starts a sample server on a random port.
pub fn new_server() -> ServerHandle {
    SampleServer::bind(ServerConfig::new().with_random_port().with_workers(2))
        .unwrap()
        .spawn()
        .unwrap()
}

/// Connects a client to `server`. Reads give up after 5 seconds.
pub fn new_client(server: &ServerHandle) -> TcpStream {
    let port = server.server_addr().port();
    let client = TcpStream::connect(("127.0.0.1", port)).unwrap();
    client.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    client
}

/// Creates a server with a client connected to it.
pub fn new_one_server_one_client() -> (ServerHandle, TcpStream) {
    let server = new_server();
    let client = new_client(&server);
    (server, client)
}

/// A response as read off the wire.
#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RawResponse {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// Splits everything the server sent into responses, using `Content-Length` to find the
/// end of each body.
pub fn parse_responses(mut raw: &str) -> Vec<RawResponse> {
    let mut responses = Vec::new();

    while !raw.is_empty() {
        let head_end = raw.find("\r\n\r\n").expect("incomplete response head");
        let mut lines = raw[..head_end].split("\r\n");

        let status_line = lines.next().unwrap();
        let status = status_line.split(' ').nth(1).unwrap().parse().unwrap();

        let headers: Vec<(String, String)> = lines
            .map(|line| {
                let colon = line.find(':').unwrap();
                (line[..colon].trim().to_owned(), line[colon + 1..].trim().to_owned())
            })
            .collect();

        let length: usize = headers
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case("Content-Length"))
            .map(|(_, value)| value.parse().unwrap())
            .unwrap_or(0);

        let body_start = head_end + 4;
        let body = raw[body_start..body_start + length].to_owned();
        raw = &raw[body_start + length..];

        responses.push(RawResponse { status, headers, body });
    }

    responses
}

/// Writes `request` to a fresh connection and reads back the single response.
///
/// `request` must ask for the connection to be closed.
pub fn send(server: &ServerHandle, request: &str) -> RawResponse {
    let mut client = new_client(server);
    client.write_all(request.as_bytes()).unwrap();

    let mut data = String::new();
    client.read_to_string(&mut data).unwrap();

    let mut responses = parse_responses(&data);
    assert_eq!(responses.len(), 1, "unexpected data: {:?}", data);
    responses.remove(0)
}

/// `GET` of `path` on a connection that closes afterwards.
pub fn get(server: &ServerHandle, path: &str) -> RawResponse {
    send(
        server,
        &format!("GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n", path),
    )
}
