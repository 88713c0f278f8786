use std::sync::Arc;

mod catalog;
mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::Config::load()?;

    // Optional single CLI argument overrides the configured port
    if let Some(port_arg) = std::env::args().nth(1) {
        cfg.server.port = port_arg
            .parse()
            .map_err(|e| format!("Invalid port '{port_arg}': {e}"))?;
    }

    // Current-thread runtime: the fixture serves one request at a time, so
    // the scripted delays and the profile hang stall everything behind them
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(server::run(Arc::new(cfg)))
}
