//! # Static Stats Server
//! src/lib.rs
//!
//! Servidor HTTP mínimo con un thread por conexión. Atiende tres rutas:
//! archivos estáticos, un reporte de estadísticas y una calculadora de
//! dos enteros. Todas las conexiones comparten un único registro de
//! contadores protegido por un lock.
//!
//! ## Arquitectura
//!
//! - `config`: configuración CLI/env (clap)
//! - `http`: request line, respuestas y status codes
//! - `router`: tabla de decisión método + path → handler
//! - `handlers`: static, stats, calc y 404
//! - `stats`: registro compartido de contadores
//! - `server`: acceptor loop y worker por conexión
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use static_stats_server::config::ServerConfig;
//! use static_stats_server::server::Server;
//!
//! let config = ServerConfig::default();
//! let server = Server::bind(&config).expect("Error al iniciar servidor");
//! server.run();
//! ```

pub mod config;
pub mod handlers;
pub mod http;
pub mod router;
pub mod server;
pub mod stats;
