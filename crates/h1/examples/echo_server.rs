//! Blocking echo server: every request body is sent back with the request's
//! content type.
//!
//! ```bash
//! cargo run --example echo_server
//! curl -v -d 'hello' http://127.0.0.1:8080/echo
//! ```

use std::io::{BufReader, BufWriter, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use micro_h1::codec::RequestDecoder;
use micro_h1::protocol::{HttpError, ParseError, Request, Response, ResponseConfig, SendError};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> std::io::Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!(port = 8080, "start listening");
    let tcp_listener = match TcpListener::bind("127.0.0.1:8080") {
        Ok(tcp_listener) => tcp_listener,
        Err(e) => {
            error!(cause = %e, "bind server error");
            return Err(e);
        }
    };

    for stream in tcp_listener.incoming() {
        let tcp_stream = match stream {
            Ok(tcp_stream) => tcp_stream,
            Err(e) => {
                warn!(cause = %e, "failed to accept");
                continue;
            }
        };

        thread::spawn(move || {
            if let Err(e) = serve(tcp_stream) {
                warn!(cause = %e, "connection closed with error");
            }
        });
    }

    Ok(())
}

fn serve(tcp_stream: TcpStream) -> Result<(), HttpError> {
    let decoder = RequestDecoder::new();
    let mut reader = BufReader::new(tcp_stream.try_clone().map_err(ParseError::io)?);
    let mut writer = BufWriter::new(tcp_stream);

    loop {
        let request = match decoder.parse(&mut reader) {
            Ok(request) => request,
            Err(ParseError::EndOfStream) => return Ok(()),
            Err(e) => {
                warn!(cause = %e, "bad request");
                let mut response = Response::new(ResponseConfig::new(400, "Bad Request"));
                response.set_header("connection", "close");
                response.set_body(e.to_string());
                response.write_to(&mut writer).map_err(SendError::io)?;
                writer.flush().map_err(SendError::io)?;
                return Err(e.into());
            }
        };

        info!(method = %request.method(), request_target = request.target(), body_size = request.body().len(), "receive request");

        let response = echo(&request);
        response.write_to(&mut writer).map_err(SendError::io)?;
        writer.flush().map_err(SendError::io)?;
    }
}

fn echo(request: &Request) -> Response {
    let mut response = Response::new(ResponseConfig::default());
    let content_type = request.header("content-type").unwrap_or("application/octet-stream");
    response.set_header("content-type", content_type);
    response.set_body(request.body().clone());
    response
}
