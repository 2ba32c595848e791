//! HTTP server implementation.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use log::{info, warn, error};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio::task::JoinSet;
use tokio::signal;

use crate::server::config::ServerConfig;
use crate::server::connection::{Connection, ServiceContext};
use crate::server::error::Error;
use crate::server::resources::{FsResources, ResourceProvider};
use crate::server::router::Router;

/// An HTTP server.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    /// The routes.
    router: Router,
    /// Where response bodies come from.
    resources: Arc<dyn ResourceProvider>,
}

impl HttpServer {
    /// Create a new HTTP server with the standard routes, serving files from
    /// `config.web_root`.
    pub fn new(config: ServerConfig) -> Self {
        let resources = Arc::new(FsResources::new(config.web_root.clone()));
        Self {
            config,
            router: Router::standard(),
            resources,
        }
    }

    /// Replace the resource provider.
    pub fn with_resources(mut self, resources: Arc<dyn ResourceProvider>) -> Self {
        self.resources = resources;
        self
    }

    /// Replace the router.
    pub fn with_router(mut self, router: Router) -> Self {
        self.router = router;
        self
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Log the registered endpoints.
    fn display_server_info(&self) {
        info!("Registered endpoints:");
        for route in self.router.routes() {
            info!("  {path} -> {endpoint}", path = route.path, endpoint = route.endpoint);
        }
    }

    /// Set up the TCP listener.
    async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("Server listening on http://{addr}", addr = self.config.addr);
        Ok(listener)
    }

    /// Spawn a task serving one accepted connection.
    ///
    /// The permit is held until the connection is closed.
    fn handle_new_connection(
        socket: TcpStream,
        addr: SocketAddr,
        permit: OwnedSemaphorePermit,
        context: Arc<ServiceContext>,
        tasks: &mut JoinSet<()>,
    ) {
        tasks.spawn(async move {
            let _permit = permit;

            match Connection::new(socket, context).serve().await {
                Ok(()) => {}
                Err(e @ Error::IncompleteRequest(_)) => warn!("Connection from {addr} aborted: {e}"),
                Err(e) => error!("Error handling connection from {addr}: {e}"),
            }
        });
    }

    /// Handle accept errors. The server keeps running.
    async fn handle_accept_error(e: std::io::Error) {
        error!("Error accepting connection: {e}");

        // Wait a bit before retrying
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    }

    /// Collect connection tasks that have already finished.
    fn reap_finished(tasks: &mut JoinSet<()>) {
        while let Some(res) = tasks.try_join_next() {
            if let Err(e) = res {
                error!("Connection task failed: {e}");
            }
        }
    }

    /// Perform graceful shutdown.
    async fn perform_shutdown(tasks: &mut JoinSet<()>) {
        // Wait for all tasks to complete (with timeout)
        info!("Waiting for {len} active connections to complete...", len = tasks.len());
        let shutdown_timeout = tokio::time::Duration::from_secs(30);
        let drained = tokio::time::timeout(shutdown_timeout, async {
            while let Some(res) = tasks.join_next().await {
                if let Err(e) = res {
                    error!("Task failed during shutdown: {e}");
                }
            }
        }).await;

        if drained.is_err() {
            warn!("Aborting {len} connections still open after {shutdown_timeout:?}", len = tasks.len());
            tasks.shutdown().await;
        }

        info!("Server shutdown complete");
    }

    /// Bind to the configured address and serve until Ctrl+C or SIGTERM.
    ///
    /// Fails only if the listener cannot be bound.
    pub async fn start(self) -> Result<(), Error> {
        let listener = self.setup_listener().await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Accept connections on `listener` until `shutdown` completes.
    ///
    /// Each connection is served in its own task, with at most
    /// `config.max_connections` in flight. The listener is closed as soon as
    /// the loop ends; connections already accepted are then given time to
    /// finish.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), Error>
    where
        F: Future<Output = ()>,
    {
        self.display_server_info();

        let semaphore = Arc::new(Semaphore::new(self.config.max_connections));
        let context = Arc::new(ServiceContext {
            config: self.config,
            router: self.router,
            resources: self.resources,
        });

        // Use JoinSet to keep track of all spawned tasks
        let mut tasks = JoinSet::new();
        tokio::pin!(shutdown);

        loop {
            // Wait for a free connection slot before accepting
            let permit = tokio::select! {
                _ = &mut shutdown => break,
                permit = semaphore.clone().acquire_owned() => permit,
            };
            let Ok(permit) = permit else {
                break;
            };

            tokio::select! {
                _ = &mut shutdown => break,

                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((socket, addr)) => {
                            Self::handle_new_connection(socket, addr, permit, context.clone(), &mut tasks);
                        }
                        Err(e) => Self::handle_accept_error(e).await,
                    }
                }
            }

            Self::reap_finished(&mut tasks);
        }

        info!("Shutting down server...");
        drop(listener);

        Self::perform_shutdown(&mut tasks).await;

        Ok(())
    }
}

/// Resolve when the process receives Ctrl+C or, on Unix, SIGTERM.
///
/// A signal whose handler cannot be installed is logged and never fires.
pub(crate) async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown"),
            Err(e) => {
                error!("Error setting up Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown");
            }
            Err(e) => {
                error!("Error setting up SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
