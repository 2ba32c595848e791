//! Exact-match routing from request paths to endpoints.

use crate::server::handler::Endpoint;

/// Represents a route in the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// The path to match, compared byte for byte.
    pub path: String,
    /// The endpoint that serves it.
    pub endpoint: Endpoint,
}

/// Maps request paths to endpoints.
///
/// Matching is exact: no prefixes, no patterns, no query-string stripping.
/// Anything unmatched resolves to [`Endpoint::NotFound`].
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Create an empty router that answers every path with 404.
    pub fn new() -> Self {
        Self::default()
    }

    /// The routes the server ships with.
    pub fn standard() -> Self {
        Self::new()
            .route("/", Endpoint::Index)
            .route("/transactions.csv", Endpoint::TransactionsCsv)
            .route("/transactions.json", Endpoint::TransactionsJson)
            .route("/transactions.xml", Endpoint::TransactionsXml)
    }

    /// Register `endpoint` for `path`. A later registration for the same
    /// path replaces the earlier one.
    pub fn route(mut self, path: impl Into<String>, endpoint: Endpoint) -> Self {
        let path = path.into();
        match self.routes.iter_mut().find(|route| route.path == path) {
            Some(route) => route.endpoint = endpoint,
            None => self.routes.push(Route { path, endpoint }),
        }
        self
    }

    /// Find the endpoint for `path`.
    pub fn resolve(&self, path: &str) -> Endpoint {
        self.routes
            .iter()
            .find(|route| route.path == path)
            .map_or(Endpoint::NotFound, |route| route.endpoint)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_routes() {
        let router = Router::standard();
        assert_eq!(router.resolve("/"), Endpoint::Index);
        assert_eq!(router.resolve("/transactions.csv"), Endpoint::TransactionsCsv);
        assert_eq!(router.resolve("/transactions.json"), Endpoint::TransactionsJson);
        assert_eq!(router.resolve("/transactions.xml"), Endpoint::TransactionsXml);
        assert_eq!(router.routes().len(), 4);
    }

    #[test]
    fn test_everything_else_is_not_found() {
        let router = Router::standard();
        let paths = [
            "",
            "/nope",
            "/?",
            "/?user=1",
            "/transactions.csv?download=1",
            "/transactions.CSV",
            "/transactions.csv/",
            "//",
            "/index.html",
            "transactions.json",
            " /",
            "*",
        ];

        for path in paths {
            assert_eq!(router.resolve(path), Endpoint::NotFound, "path {path:?}");
        }
    }

    #[test]
    fn test_empty_router_answers_not_found() {
        assert_eq!(Router::new().resolve("/"), Endpoint::NotFound);
    }

    #[test]
    fn test_reregistering_replaces_route() {
        let router = Router::standard().route("/", Endpoint::NotFound);
        assert_eq!(router.resolve("/"), Endpoint::NotFound);
        assert_eq!(router.routes().len(), 4);
    }
}
