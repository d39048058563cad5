//! # Parsing de la Request Line
//! src/http/request.rs
//!
//! El servidor solo mira la primera línea del request:
//!
//! ```text
//! GET /calc?a=3&b=4 HTTP/1.1\r\n
//! Host: localhost\r\n          <- ignorado
//! \r\n
//! ```
//!
//! Todo llega en una sola lectura de como máximo [`BUFFER_SIZE`] bytes;
//! no se acumula entre lecturas.

/// Tamaño máximo de la lectura inicial (y de los chunks de streaming)
pub const BUFFER_SIZE: usize = 1024;

/// Request line parseada: `METHOD PATH VERSION`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestLine {
    /// Método HTTP tal como llegó (ej: "GET")
    method: String,

    /// Path completo, incluida la query (ej: "/calc?a=1&b=2")
    path: String,

    /// Versión del protocolo (ej: "HTTP/1.1")
    version: String,
}

impl RequestLine {
    /// Parsea la primera línea del buffer
    ///
    /// Nunca falla: los tokens ausentes quedan como strings vacíos y el
    /// router los trata como "no encontrado". Los bytes no UTF-8 se
    /// reemplazan.
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use static_stats_server::http::RequestLine;
    ///
    /// let line = RequestLine::parse(b"GET /stats HTTP/1.1\r\n\r\n");
    /// assert_eq!(line.method(), "GET");
    /// assert_eq!(line.path(), "/stats");
    /// assert_eq!(line.version(), "HTTP/1.1");
    /// ```
    pub fn parse(buffer: &[u8]) -> Self {
        let text = String::from_utf8_lossy(buffer);
        let first_line = text.split('\n').next().unwrap_or("");

        let mut tokens = first_line.split_ascii_whitespace();
        let mut next_token = || tokens.next().unwrap_or("").to_string();

        let method = next_token();
        let path = next_token();
        let version = next_token();

        Self {
            method,
            path,
            version,
        }
    }

    /// Obtiene el método
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Obtiene el path (con query string)
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene la versión del protocolo
    pub fn version(&self) -> &str {
        &self.version
    }
}
