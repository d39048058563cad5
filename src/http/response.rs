//! # Construcción de Respuestas HTTP
//! src/http/response.rs
//!
//! Las respuestas se escriben con la forma exacta:
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Length: 5\r\n        <- solo si se conoce de antemano
//! Content-Type: text/plain\r\n
//! \r\n
//! hello
//! ```
//!
//! Los headers conservan el orden de inserción. `Content-Length` nunca se
//! agrega solo: las respuestas de texto se delimitan cerrando la conexión.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use static_stats_server::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_header("Content-Type", "text/plain")
//!     .with_body("Result: 7");
//!
//! let bytes = response.to_bytes();
//! assert!(bytes.ends_with(b"\r\n\r\nResult: 7"));
//! ```

use super::StatusCode;
use std::io::{self, Write};

/// Versión del protocolo en la status line
const HTTP_VERSION: &str = "HTTP/1.1";

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP
    status: StatusCode,

    /// Headers en orden de inserción
    headers: Vec<(String, String)>,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta sin headers ni body
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header al final de la lista
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Agrega `Content-Length` con el valor dado
    pub fn with_content_length(self, length: u64) -> Self {
        self.with_header("Content-Length", &length.to_string())
    }

    /// Establece el cuerpo desde un string
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.as_bytes().to_vec();
        self
    }

    /// Respuesta 200 de texto plano, delimitada por cierre de conexión
    pub fn text(body: &str) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_body(body)
    }

    /// Respuesta 200 HTML, delimitada por cierre de conexión
    pub fn html(body: &str) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", "text/html")
            .with_body(body)
    }

    /// Respuesta 404 fija
    ///
    /// ```
    /// use static_stats_server::http::Response;
    ///
    /// let bytes = Response::not_found().to_bytes();
    /// assert_eq!(
    ///     bytes,
    ///     b"HTTP/1.1 404 Not Found\r\nContent-Length: 13\r\nContent-Type: text/plain\r\n\r\n404 Not Found"
    /// );
    /// ```
    pub fn not_found() -> Self {
        let body = "404 Not Found";
        Self::new(StatusCode::NotFound)
            .with_content_length(body.len() as u64)
            .with_header("Content-Type", "text/plain")
            .with_body(body)
    }

    /// Serializa status line y headers, terminando en la línea vacía
    pub fn head_bytes(&self) -> Vec<u8> {
        let mut result = format!("{} {}\r\n", HTTP_VERSION, self.status).into_bytes();

        for (name, value) in &self.headers {
            result.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
        }

        result.extend_from_slice(b"\r\n");
        result
    }

    /// Serializa la respuesta completa
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = self.head_bytes();
        result.extend_from_slice(&self.body);
        result
    }

    /// Escribe la respuesta completa y retorna los bytes escritos
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<usize> {
        let bytes = self.to_bytes();
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(bytes.len())
    }

    /// Obtiene el código de estado
    #[cfg(test)]
    fn status(&self) -> StatusCode {
        self.status
    }

    /// Busca un header por nombre
    #[cfg(test)]
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Obtiene el body
    #[cfg(test)]
    fn body(&self) -> &[u8] {
        &self.body
    }
}
