//! Endpoint handlers.
//!
//! Each handler loads everything it needs before building the response, so a
//! missing resource never leaves a half-written response on the wire.

use std::fmt;

use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::resources::{Resource, ResourceProvider, render_template};
use crate::server::response::{HttpResponse, StatusCode};

/// The fixed set of things a request can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Index,
    TransactionsCsv,
    TransactionsJson,
    TransactionsXml,
    NotFound,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Endpoint {
    /// Build the response for this endpoint.
    pub async fn respond(
        &self,
        resources: &dyn ResourceProvider,
        config: &ServerConfig,
    ) -> Result<HttpResponse, Error> {
        match self {
            Endpoint::Index => index(resources, config).await,
            Endpoint::TransactionsCsv => {
                let file = resources.read(Resource::TransactionsCsv).await?;
                Ok(HttpResponse::new(StatusCode::Ok)
                    .with_body(file)
                    .with_content_type("text/csv")
                    .with_content_length()
                    .with_header("Connection", "close"))
            }
            Endpoint::TransactionsJson => {
                let file = resources.read(Resource::TransactionsJson).await?;
                Ok(export(file, "application/json; charset=utf-8", config.legacy_headers))
            }
            Endpoint::TransactionsXml => {
                let file = resources.read(Resource::TransactionsXml).await?;
                Ok(export(file, "application/xml", config.legacy_headers))
            }
            Endpoint::NotFound => Ok(not_found()),
        }
    }
}

async fn index(resources: &dyn ResourceProvider, config: &ServerConfig) -> Result<HttpResponse, Error> {
    let template = resources.read(Resource::IndexTemplate).await?;
    let page = render_template(&template, &config.account)?;

    Ok(HttpResponse::new(StatusCode::Ok)
        .with_header("Connection", "close")
        .with_body(page)
        .with_content_length()
        .with_content_type("text/html; charset=utf-8"))
}

fn export(file: Vec<u8>, content_type: &str, legacy_headers: bool) -> HttpResponse {
    let response = HttpResponse::new(StatusCode::Ok).with_body(file);
    let response = if legacy_headers {
        response.with_header_line(content_type)
    } else {
        response.with_content_type(content_type)
    };

    response
        .with_content_length()
        .with_header("Connection", "close")
}

fn not_found() -> HttpResponse {
    HttpResponse::new(StatusCode::NotFound).with_header("Connection", "close")
}
