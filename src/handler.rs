use std::io::{Cursor, Result as IoResult};

use ascii::AsciiString;
use tiny_http::{Header, Request, Response, StatusCode};

use crate::log::debug;
use crate::payload::ResponsePayload;

/// Builds the response for a request whose raw target is `url`.
///
/// The status is always 200, whatever the target looks like.
pub fn response_for(url: &str) -> Response<Cursor<Vec<u8>>> {
    let body = ResponsePayload::new(url).to_json();

    Response::from_data(body)
        .with_status_code(StatusCode(200))
        .with_header(json_content_type())
}

/// Answers a single request.
///
/// Method, headers and body are not looked at. Errors come from writing to the client and
/// are returned as-is.
///
/// Requests whose request line holds a non-ASCII byte never get here: `tiny_http` closes
/// those connections without answering.
pub fn handle(request: Request) -> IoResult<()> {
    debug!("{} {}", request.method(), request.url());

    let response = response_for(request.url());
    request.respond(response)
}

fn json_content_type() -> Header {
    Header {
        field: "Content-Type".parse().expect("static header name is valid"),
        value: AsciiString::from_ascii("application/json").expect("static header value is ascii"),
    }
}
