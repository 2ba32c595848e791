use std::process::ExitCode;

use log::error;
use transactions_server::{HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let server = HttpServer::new(ServerConfig::default());

    match server.start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
