//! # Módulo HTTP
//!
//! Subconjunto mínimo de HTTP que habla el servidor:
//!
//! - Parsing de la request line (el resto del request se ignora)
//! - Construcción de respuestas con headers ordenados
//! - Códigos de estado 200 y 404
//!
//! No hay conexiones persistentes: cada conexión recibe una sola
//! respuesta y se cierra.

pub mod request;   // Parsing de la request line
pub mod response;  // Construcción de respuestas
pub mod status;    // Códigos de estado

pub use request::{RequestLine, BUFFER_SIZE};
pub use response::Response;
pub use status::StatusCode;
