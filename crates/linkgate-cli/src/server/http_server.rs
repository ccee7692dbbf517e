//! HTTP server startup and lifecycle management.

use std::future::Future;
use std::io;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::server::{Result, ServerError, shutdown_signal};
use crate::{TRACING_TARGET_SERVER_SHUTDOWN, TRACING_TARGET_SERVER_STARTUP};

/// Common server startup logic with graceful shutdown handling.
pub(crate) async fn serve_with_shutdown<F>(
    server_config: &ServerConfig,
    serve_fn: impl FnOnce() -> F,
) -> Result<()>
where
    F: Future<Output = io::Result<()>>,
{
    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        addr = %server_config.server_addr(),
        "Server is ready and listening for connections"
    );

    if server_config.binds_to_all_interfaces() {
        tracing::warn!(
            target: TRACING_TARGET_SERVER_STARTUP,
            "Server is bound to all interfaces. Ensure firewall rules are properly configured."
        );
    }

    serve_fn().await.map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            error = %err,
            "Server encountered an error"
        );

        let error = ServerError::Runtime(err);
        if let Some(suggestion) = error.suggestion() {
            tracing::info!(
                target: TRACING_TARGET_SERVER_SHUTDOWN,
                suggestion = suggestion,
                "Recovery suggestion"
            );
        }

        error
    })?;

    tracing::info!(target: TRACING_TARGET_SERVER_SHUTDOWN, "Server shut down gracefully");
    Ok(())
}

/// Starts an HTTP server with graceful shutdown.
///
/// Validates the configuration, binds to the specified address, and starts
/// serving requests with support for graceful shutdown.
pub async fn serve_http(app: Router, server_config: ServerConfig) -> Result<()> {
    if let Err(validation_error) = server_config.validate() {
        tracing::error!(
            target: TRACING_TARGET_SERVER_STARTUP,
            error = %validation_error,
            "Invalid server configuration"
        );

        return Err(ServerError::InvalidConfig(validation_error.to_string()));
    }

    let server_addr = server_config.server_addr();

    let listener = match TcpListener::bind(server_addr).await {
        Ok(listener) => {
            tracing::info!(
                target: TRACING_TARGET_SERVER_STARTUP,
                addr = %server_addr,
                "Successfully bound to address"
            );

            listener
        }
        Err(listener_err) => {
            tracing::error!(
                target: TRACING_TARGET_SERVER_STARTUP,
                addr = %server_addr,
                error = %listener_err,
                "Failed to bind to address"
            );

            let error = ServerError::bind_error(server_addr.to_string(), listener_err);
            if let Some(suggestion) = error.suggestion() {
                tracing::info!(
                    target: TRACING_TARGET_SERVER_STARTUP,
                    suggestion = suggestion,
                    "Recovery suggestion"
                );
            }

            return Err(error);
        }
    };

    let shutdown_signal = shutdown_signal(server_config.shutdown_timeout());
    serve_with_shutdown(&server_config, || async move {
        axum::serve(listener, app.into_make_service())
            .with_graceful_shutdown(shutdown_signal)
            .await
    })
    .await
}
