//! Server module
//!
//! Serial accept loop: connections are served one at a time, to completion.
//! Scripted delays and the profile hang therefore stall every waiting client,
//! which is the intended behavior of the fixture.

mod listener;

use crate::config::Config;
use crate::handler;
use crate::logger;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;

/// Bind the listener and serve until the process is killed.
pub async fn run(cfg: Arc<Config>) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = listener::create_listener(addr)?;
    logger::log_server_start(&addr, &cfg);

    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => serve_client(stream, &cfg).await,
            Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
        }
    }
}

/// Serve a single connection to completion, inline.
///
/// Keep-alive is off, so one connection carries exactly one request and the
/// next client is not accepted until this response (or hang) has run its
/// course. A client that gives up mid-hang surfaces as a connection error;
/// it is logged and dropped, never propagated.
async fn serve_client(stream: tokio::net::TcpStream, cfg: &Arc<Config>) {
    let io = TokioIo::new(stream);

    let service = service_fn({
        let cfg = Arc::clone(cfg);
        move |req| handler::handle_request(req, Arc::clone(&cfg))
    });

    let conn = http1::Builder::new()
        .keep_alive(false)
        .serve_connection(io, service);

    if let Err(err) = conn.await {
        logger::log_connection_error(&err);
    }
}
