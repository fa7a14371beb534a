use super::tls::load_server_config;
use axum::{Extension, Router};
use ferrous_doh_api::{create_doh_routes, AppState, DOH_PATH};
use ferrous_doh_domain::doh::ConnectionScheme;
use ferrous_doh_domain::Config;
use hyper::body::Incoming;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_rustls::TlsAcceptor;
use tower::Service;
use tracing::{debug, error, info};

pub async fn start_web_server(config: &Config, state: AppState) -> anyhow::Result<()> {
    let bind_addr = config.listen_address();
    let tls = &config.server.tls;

    if tls.enabled {
        let tls_config = load_server_config(&tls.cert_path, &tls.key_path)?;
        let listener = TcpListener::bind(&bind_addr).await?;

        info!(
            bind_address = %bind_addr,
            doh_url = format!("https://{}{}", bind_addr, DOH_PATH),
            "Starting DoH server"
        );

        let app = create_doh_routes(state).layer(Extension(ConnectionScheme::Https));
        serve_tls(listener, tls_config, app, shutdown_signal()).await
    } else {
        let listener = TcpListener::bind(&bind_addr).await?;

        info!(
            bind_address = %bind_addr,
            doh_url = format!("http://{}{}", bind_addr, DOH_PATH),
            "Starting DoH server without TLS"
        );

        axum::serve(listener, create_doh_routes(state))
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

/// Accept loop terminating TLS in front of `app`; HTTP/1.1 and HTTP/2 are
/// negotiated per connection.
pub async fn serve_tls(
    listener: TcpListener,
    tls_config: Arc<rustls::ServerConfig>,
    app: Router,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<()> {
    let acceptor = TlsAcceptor::from(tls_config);

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => {
                info!("Shutdown signal received, stopping DoH server");
                break;
            }
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(pair) => pair,
                    Err(e) => {
                        error!(error = %e, "Failed to accept connection");
                        continue;
                    }
                };

                let acceptor = acceptor.clone();
                let app = app.clone();
                tokio::spawn(async move {
                    let tls_stream = match acceptor.accept(stream).await {
                        Ok(s) => s,
                        Err(e) => {
                            debug!(peer = %peer, error = %e, "TLS handshake failed");
                            return;
                        }
                    };

                    let service = hyper::service::service_fn(move |request: hyper::Request<Incoming>| {
                        app.clone().call(request)
                    });

                    if let Err(e) = auto::Builder::new(TokioExecutor::new())
                        .serve_connection(TokioIo::new(tls_stream), service)
                        .await
                    {
                        debug!(peer = %peer, error = %e, "Connection closed with error");
                    }
                });
            }
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
