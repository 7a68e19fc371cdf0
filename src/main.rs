use crate::config::AppConfig;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::state::AppState;
use anyhow::Context;
use astra::{Request, Response, Server};
use std::time::Instant;

mod config;
mod domain;
mod errors;
mod forms;
mod responses;
mod router;
mod state;
mod templates;


fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().context("loading configuration")?;
    let addr = config.addr;
    let workers = config.max_workers;

    let state = AppState::new(config);

    tracing::info!(%addr, workers, "CleanerClub listening");

    let server = Server::bind(&addr).max_workers(workers);
    server
        .serve(move |req, _info| serve_request(req, &state))
        .context("server ended with error")?;

    tracing::info!("server shut down cleanly");
    Ok(())
}

/// Route one request, turning errors into HTML pages, and log the outcome.
fn serve_request(req: Request, state: &AppState) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let resp = match handle(req, state) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                tracing::error!(%method, %path, error = %err, "request failed");
            } else {
                tracing::warn!(%method, %path, error = %err, "request rejected");
            }
            error_to_response(err)
        }
    };

    tracing::info!(
        %method,
        %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    resp
}
