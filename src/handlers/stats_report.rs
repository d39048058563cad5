//! # Reporte de Estadísticas
//! src/handlers/stats_report.rs
//!
//! `GET /stats` responde un documento HTML mínimo con los tres contadores.
//! El snapshot se toma antes de escribir, así que no incluye los bytes de
//! esta misma respuesta.

use crate::http::Response;
use crate::stats::{StatsRegistry, StatsSnapshot};
use std::io::{self, Write};

/// Handler para /stats
pub fn stats_report_handler<W: Write>(stream: &mut W, stats: &StatsRegistry) -> io::Result<()> {
    let snapshot = stats.snapshot();
    log::debug!("snapshot de estadísticas: {}", snapshot.to_json());

    let sent = Response::html(&render_html(&snapshot)).write_to(stream)?;
    stats.record_sent(sent);
    Ok(())
}

/// Renderiza el snapshot como HTML
pub fn render_html(snapshot: &StatsSnapshot) -> String {
    format!(
        "<html><body>\
         <h1>Server Stats</h1>\
         <p>Requests: {}</p>\
         <p>Received Bytes: {}</p>\
         <p>Sent Bytes: {}</p>\
         </body></html>",
        snapshot.request_count, snapshot.bytes_received, snapshot.bytes_sent
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_html() {
        let snapshot = StatsSnapshot {
            request_count: 3,
            bytes_received: 120,
            bytes_sent: 456,
        };
        assert_eq!(
            render_html(&snapshot),
            "<html><body><h1>Server Stats</h1><p>Requests: 3</p>\
             <p>Received Bytes: 120</p><p>Sent Bytes: 456</p></body></html>"
        );
    }

    #[test]
    fn test_handler_reports_current_counters() {
        let stats = StatsRegistry::new();
        stats.record_request(42);
        stats.record_sent(10);

        let mut out = Vec::new();
        stats_report_handler(&mut out, &stats).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n"));
        assert!(!text.contains("Content-Length"));
        assert!(text.contains("<p>Requests: 1</p>"));
        assert!(text.contains("<p>Received Bytes: 42</p>"));
        assert!(text.contains("<p>Sent Bytes: 10</p>"));

        // La respuesta misma se suma después del snapshot
        assert_eq!(stats.snapshot().bytes_sent, 10 + text.len() as u64);
    }
}
