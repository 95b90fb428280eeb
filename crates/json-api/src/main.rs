//! Bodegas JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use bodegas_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

mod bodegas;
mod config;
mod extensions;
mod floor_plan;
mod healthcheck;
mod observability;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Bodegas JSON API Server entry point
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, eprintln is the only sink left"
        )]
        {
            eprintln!("{init_error}");
        }

        process::exit(1);
    }

    let app = match AppContext::seeded(config.store.seed_file.as_deref()) {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error:?}");

            process::exit(1);
        }
    };

    let state = State::new(app, config.server.base_url(), &config.store.supervisor);

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(remove_slash())
        .hoop(inject(state.shared()))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(Router::with_path("floor-plan").get(floor_plan::handler))
        .push(
            Router::with_path("bodegas")
                .get(bodegas::index::handler)
                .push(
                    Router::with_path("{id}")
                        .get(bodegas::get::handler)
                        .patch(bodegas::update::handler)
                        .push(Router::with_path("contract").get(bodegas::contract::handler)),
                ),
        );

    let doc = OpenApi::new("Bodegas API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(router).await;

    info!("server stopped");
}
