//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! - `tcp`: acceptor loop, un thread por conexión
//! - `worker`: ciclo de vida de una conexión individual

pub mod tcp;
pub mod worker;

// Re-exportar para facilitar el uso
pub use tcp::Server;
