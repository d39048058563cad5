//! # Respuesta 404
//! src/handlers/not_found.rs

use crate::http::Response;
use crate::stats::StatsRegistry;
use std::io::{self, Write};

/// Handler de respaldo: método o ruta desconocidos, o archivo ausente
pub fn not_found_handler<W: Write>(stream: &mut W, stats: &StatsRegistry) -> io::Result<()> {
    let sent = Response::not_found().write_to(stream)?;
    stats.record_sent(sent);
    Ok(())
}
