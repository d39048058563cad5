//! # Worker de Conexión
//! src/server/worker.rs
//!
//! Un worker es dueño de una conexión de principio a fin:
//!
//! ```text
//! Reading → Parsing → Dispatching → Responding → Closing
//! ```
//!
//! El stream se recibe por valor (o como `&mut`, cuando el acceptor
//! necesita cerrarlo en orden después) y deja de usarse al salir de
//! [`handle_connection`], en cualquier camino: éxito, lectura fallida o
//! error de escritura.

use crate::handlers;
use crate::http::{RequestLine, BUFFER_SIZE};
use crate::router;
use crate::stats::StatsRegistry;
use std::io::{Read, Write};
use std::path::Path;

/// Atiende una conexión completa y la cierra
///
/// Una lectura fallida o vacía cierra la conexión sin tocar las
/// estadísticas ni responder. Los errores de escritura se registran en el
/// log y se descartan.
pub fn handle_connection<S: Read + Write>(mut stream: S, stats: &StatsRegistry, static_root: &Path) {
    let mut buffer = [0u8; BUFFER_SIZE];

    let bytes_read = match stream.read(&mut buffer) {
        Ok(0) => {
            log::debug!("conexión cerrada sin datos");
            return;
        }
        Ok(n) => n,
        Err(e) => {
            log::debug!("error de lectura: {}", e);
            return;
        }
    };

    stats.record_request(bytes_read);

    let request = RequestLine::parse(&buffer[..bytes_read]);
    let route = router::route(request.method(), request.path());
    log::debug!(
        "{} {} {} -> {} ({} bytes)",
        request.method(),
        request.path(),
        request.version(),
        route.name(),
        bytes_read
    );

    if let Err(e) = handlers::dispatch(&route, &mut stream, stats, static_root) {
        log::warn!("error al escribir la respuesta de {}: {}", request.path(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    /// Stream en memoria: lee de `input`, acumula lo escrito en `output`
    struct MockStream {
        input: Cursor<Vec<u8>>,
        output: Vec<u8>,
        fail_read: bool,
        fail_write: bool,
    }

    impl MockStream {
        fn new(input: &[u8]) -> Self {
            Self {
                input: Cursor::new(input.to_vec()),
                output: Vec::new(),
                fail_read: false,
                fail_write: false,
            }
        }
    }

    impl Read for MockStream {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.fail_read {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
            }
            self.input.read(buf)
        }
    }

    impl Write for MockStream {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.fail_write {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"));
            }
            self.output.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// `&mut S` también es `Read + Write`: el test conserva el stream
    fn serve(stream: &mut MockStream, stats: &StatsRegistry) {
        handle_connection(stream, stats, Path::new("static"));
    }

    #[test]
    fn test_calc_request() {
        let raw = b"GET /calc?a=3&b=4 HTTP/1.1\r\nHost: x\r\n\r\n";
        let mut stream = MockStream::new(raw);
        let stats = StatsRegistry::new();
        serve(&mut stream, &stats);

        assert!(stream.output.ends_with(b"Result: 7"));
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.request_count, 1);
        assert_eq!(snapshot.bytes_received, raw.len() as u64);
        assert_eq!(snapshot.bytes_sent, stream.output.len() as u64);
    }

    #[test]
    fn test_empty_read_skips_stats() {
        let mut stream = MockStream::new(b"");
        let stats = StatsRegistry::new();
        serve(&mut stream, &stats);

        assert!(stream.output.is_empty());
        assert_eq!(stats.snapshot().request_count, 0);
    }

    #[test]
    fn test_read_error_skips_stats() {
        let mut stream = MockStream::new(b"GET /stats HTTP/1.1\r\n\r\n");
        stream.fail_read = true;
        let stats = StatsRegistry::new();
        serve(&mut stream, &stats);

        assert!(stream.output.is_empty());
        assert_eq!(stats.snapshot(), Default::default());
    }

    #[test]
    fn test_write_error_is_swallowed() {
        let mut stream = MockStream::new(b"GET /calc?a=1&b=1 HTTP/1.1\r\n\r\n");
        stream.fail_write = true;
        let stats = StatsRegistry::new();
        serve(&mut stream, &stats);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.request_count, 1);
        assert_eq!(snapshot.bytes_sent, 0);
    }

    #[test]
    fn test_garbage_gets_not_found() {
        let mut stream = MockStream::new(b"\x00\x01garbage");
        let stats = StatsRegistry::new();
        serve(&mut stream, &stats);

        assert!(stream.output.starts_with(b"HTTP/1.1 404 Not Found\r\n"));
        assert_eq!(stats.snapshot().request_count, 1);
    }

    #[test]
    fn test_wrong_method_gets_not_found() {
        let mut stream = MockStream::new(b"POST /static/foo HTTP/1.1\r\n\r\n");
        let stats = StatsRegistry::new();
        serve(&mut stream, &stats);

        assert!(stream.output.ends_with(b"\r\n\r\n404 Not Found"));
    }

    #[test]
    fn test_only_one_read_is_done() {
        let mut raw = b"GET /stats HTTP/1.1\r\n".to_vec();
        raw.extend(std::iter::repeat(b'x').take(BUFFER_SIZE * 2));
        let mut stream = MockStream::new(&raw);
        let stats = StatsRegistry::new();
        serve(&mut stream, &stats);

        assert_eq!(stats.snapshot().bytes_received, BUFFER_SIZE as u64);
    }
}
