//! Sends one `GET` to a server and prints the parsed response.
//!
//! ```bash
//! cargo run --example fetch -- 127.0.0.1:8080 /echo
//! ```

use std::env;
use std::io::{BufReader, Write};
use std::net::TcpStream;

use micro_h1::codec::ResponseDecoder;
use micro_h1::protocol::{HttpError, Method, ParseError, Version};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), HttpError> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut args = env::args().skip(1);
    let address = args.next().unwrap_or_else(|| "127.0.0.1:8080".to_string());
    let path = args.next().unwrap_or_else(|| "/".to_string());

    let mut tcp_stream = TcpStream::connect(&address).map_err(ParseError::io)?;

    let request = format!("{} {path} {}\r\nhost: {address}\r\naccept: */*\r\n\r\n", Method::Get, Version::Http11);
    tcp_stream.write_all(request.as_bytes()).map_err(ParseError::io)?;
    info!(%address, %path, "request sent");

    let response = ResponseDecoder::new().parse(BufReader::new(tcp_stream))?;

    info!(status_code = response.status_code(), status_text = response.status_text(), "receive response");
    for (name, value) in response.headers() {
        println!("{name}: {value}");
    }
    println!();
    println!("{}", String::from_utf8_lossy(response.body()));

    Ok(())
}
