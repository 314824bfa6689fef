//! Container liveness probe for banxico-mcp.
//!
//! Succeeds when something accepts a TCP connection on the configured
//! port; no protocol handshake is attempted.

use std::net::{SocketAddr, TcpStream};
use std::process::ExitCode;
use std::time::Duration;

fn main() -> ExitCode {
    let port: u16 = std::env::var("MCP_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    match TcpStream::connect_timeout(&addr, Duration::from_secs(5)) {
        Ok(_) => {
            println!("server is listening on port {port}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("server is NOT listening on port {port}: {err}");
            ExitCode::FAILURE
        }
    }
}
