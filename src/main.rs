//! # Static Stats Server - Entry Point
//! src/main.rs
//!
//! Parsea la configuración, abre el socket y entra al acceptor loop.

use static_stats_server::config::ServerConfig;
use static_stats_server::server::Server;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Uso inválido: clap imprime el uso y termina con estado != 0
    let config = ServerConfig::from_args();

    if let Err(e) = config.validate() {
        log::error!("Configuración inválida: {}", e);
        std::process::exit(1);
    }

    log::info!("Static Stats Server v{} - iniciando", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let server = match Server::bind(&config) {
        Ok(server) => server,
        Err(e) => {
            log::error!("Error fatal: {:#}", e);
            std::process::exit(1);
        }
    };

    server.run();
}
