//! Notedeck Server Binary Entry Point

use notedeck_core::vfs::PhysicalFileSystem;
use notedeck_lsp::create_lsp_service;
use std::sync::Arc;
use tower_lsp::Server;

#[tokio::main]
async fn main() {
    env_logger::init();

    log::info!("Notedeck server starting, listening on stdin/stdout");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = create_lsp_service(Arc::new(PhysicalFileSystem));
    log::info!("Service created, waiting for client connection");

    Server::new(stdin, stdout, socket).serve(service).await;
}
