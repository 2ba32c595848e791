//! The per-connection state machine.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::parser::{RequestLine, parse_request_line};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::handler::Endpoint;
use crate::server::line_reader::read_line;
use crate::server::resources::ResourceProvider;
use crate::server::router::Router;

/// Everything a connection needs that outlives it. Shared read-only.
pub struct ServiceContext {
    pub config: ServerConfig,
    pub router: Router,
    pub resources: Arc<dyn ResourceProvider>,
}

/// Where a connection is in its single request/response cycle.
///
/// Any failure ends the cycle early; the stream is shut down either way.
#[derive(Debug)]
pub enum ConnectionState {
    AwaitingLine,
    Parsed(RequestLine),
    Routed(Endpoint),
    Responded,
    Closed,
}

/// One accepted connection, served exactly once.
pub struct Connection<S> {
    stream: BufReader<S>,
    context: Arc<ServiceContext>,
    state: ConnectionState,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, context: Arc<ServiceContext>) -> Self {
        let capacity = context.config.read_buffer_size;
        Self {
            stream: BufReader::with_capacity(capacity, stream),
            context,
            state: ConnectionState::AwaitingLine,
        }
    }

    /// Run the request/response cycle, then shut the stream down.
    ///
    /// The shutdown happens exactly once, whatever the outcome of the cycle,
    /// and the stream is dropped before this returns.
    pub async fn serve(mut self) -> Result<(), Error> {
        let result = self.run().await;

        if let Err(e) = self.stream.get_mut().shutdown().await {
            debug!("Error shutting down connection: {e}");
        }

        result
    }

    async fn run(&mut self) -> Result<(), Error> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);
            self.state = match state {
                ConnectionState::AwaitingLine => {
                    let max_len = self.context.config.max_line_length;
                    let read = read_line(&mut self.stream, max_len);
                    let line = with_deadline(self.context.config.read_timeout, "reading the request line", read).await??;

                    info!("received: {}", line.text.trim_end());
                    if line.reached_eof {
                        return Err(Error::IncompleteRequest(line.text));
                    }

                    ConnectionState::Parsed(parse_request_line(&line.text)?)
                }

                ConnectionState::Parsed(request) => {
                    let endpoint = self.context.router.resolve(&request.path);
                    debug!("{request} routed to {endpoint}");
                    ConnectionState::Routed(endpoint)
                }

                ConnectionState::Routed(endpoint) => {
                    let context = Arc::clone(&self.context);
                    let response = endpoint.respond(context.resources.as_ref(), &context.config).await?;

                    let write = response.write_to(self.stream.get_mut());
                    with_deadline(context.config.write_timeout, "writing the response", write).await??;

                    debug!("responded {} to {endpoint}", response.status);
                    ConnectionState::Responded
                }

                ConnectionState::Responded | ConnectionState::Closed => return Ok(()),
            };
        }
    }
}

/// Run `fut`, giving up after `deadline` if one is set.
async fn with_deadline<F: Future>(
    deadline: Option<Duration>,
    phase: &'static str,
    fut: F,
) -> Result<F::Output, Error> {
    match deadline {
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| Error::Timeout(phase)),
        None => Ok(fut.await),
    }
}
