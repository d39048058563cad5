//! # Handlers
//!
//! Los cuatro productores de respuesta. Cada handler escribe una
//! respuesta completa en el stream y registra los bytes enviados en el
//! registro de estadísticas. Un error de escritura se propaga con `?` y
//! no se registra nada para esa respuesta.
//!
//! - **static_file**: `/static/<id>`
//! - **stats_report**: `/stats`
//! - **calculator**: `/calc?a=..&b=..`
//! - **not_found**: todo lo demás

pub mod calculator;
pub mod not_found;
pub mod static_file;
pub mod stats_report;

pub use calculator::calculator_handler;
pub use not_found::not_found_handler;
pub use static_file::static_file_handler;
pub use stats_report::stats_report_handler;

use crate::router::Route;
use crate::stats::StatsRegistry;
use std::io::{self, Write};
use std::path::Path;

/// Ejecuta el handler correspondiente a `route`
pub fn dispatch<W: Write>(
    route: &Route<'_>,
    stream: &mut W,
    stats: &StatsRegistry,
    static_root: &Path,
) -> io::Result<()> {
    match route {
        Route::StaticFile(id) => static_file_handler(stream, stats, static_root, id),
        Route::StatsReport => stats_report_handler(stream, stats),
        Route::Calculator(query) => calculator_handler(stream, stats, query),
        Route::NotFound => not_found_handler(stream, stats),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_calculator() {
        let stats = StatsRegistry::new();
        let mut out = Vec::new();
        dispatch(&Route::Calculator("a=2&b=2"), &mut out, &stats, Path::new("static")).unwrap();
        assert!(out.ends_with(b"Result: 4"));
    }

    #[test]
    fn test_dispatch_not_found() {
        let stats = StatsRegistry::new();
        let mut out = Vec::new();
        dispatch(&Route::NotFound, &mut out, &stats, Path::new("static")).unwrap();
        assert!(out.starts_with(b"HTTP/1.1 404 Not Found"));
    }
}
