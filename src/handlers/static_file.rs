//! # Archivos Estáticos
//! src/handlers/static_file.rs
//!
//! `GET /static/<id>` envía el archivo `<static_dir>/<id>` en chunks de
//! [`BUFFER_SIZE`] bytes, con `Content-Length` igual al tamaño del archivo.
//!
//! Solo se aceptan identificadores formados por nombres simples: `..`,
//! `.` y rutas absolutas reciben 404, igual que un archivo inexistente.
//! Además la ruta canónica (con symlinks resueltos) debe quedar dentro de
//! la raíz canónica; un symlink que apunta afuera también recibe 404.

use super::not_found::not_found_handler;
use crate::http::{Response, StatusCode, BUFFER_SIZE};
use crate::stats::StatsRegistry;
use std::fs::{self, File};
use std::io::{self, ErrorKind, Read, Write};
use std::path::{Component, Path, PathBuf};

/// Handler para /static/<id>
pub fn static_file_handler<W: Write>(
    stream: &mut W,
    stats: &StatsRegistry,
    root: &Path,
    id: &str,
) -> io::Result<()> {
    let Some(path) = resolve(root, id) else {
        log::debug!("static: identificador rechazado {:?}", id);
        return not_found_handler(stream, stats);
    };

    let opened = confine(root, &path).and_then(|real| open_regular_file(&real));
    let (mut file, size) = match opened {
        Ok(opened) => opened,
        Err(e) => {
            log::debug!("static: {} no servido: {}", path.display(), e);
            return not_found_handler(stream, stats);
        }
    };

    let head = Response::new(StatusCode::Ok)
        .with_content_length(size)
        .with_header("Content-Type", "application/octet-stream")
        .head_bytes();
    stream.write_all(&head)?;

    let body_len = copy_in_chunks(&mut file, stream)?;
    stream.flush()?;

    log::debug!("static: {} enviado ({} bytes)", path.display(), body_len);
    stats.record_sent(head.len() + body_len);
    Ok(())
}

/// Une `id` bajo `root` si todos sus componentes son nombres simples
fn resolve(root: &Path, id: &str) -> Option<PathBuf> {
    let relative = Path::new(id);
    let mut components = relative.components().peekable();

    components.peek()?;
    if components.all(|c| matches!(c, Component::Normal(_))) {
        Some(root.join(relative))
    } else {
        None
    }
}

/// Resuelve symlinks y verifica que `path` siga bajo `root`
fn confine(root: &Path, path: &Path) -> io::Result<PathBuf> {
    let real_root = fs::canonicalize(root)?;
    let real_path = fs::canonicalize(path)?;
    if !real_path.starts_with(&real_root) {
        return Err(io::Error::new(
            ErrorKind::PermissionDenied,
            "fuera del directorio estático",
        ));
    }
    Ok(real_path)
}

/// Abre un archivo regular y retorna su tamaño
fn open_regular_file(path: &Path) -> io::Result<(File, u64)> {
    let file = File::open(path)?;
    let metadata = file.metadata()?;
    if !metadata.is_file() {
        return Err(io::Error::new(ErrorKind::NotFound, "no es un archivo regular"));
    }
    Ok((file, metadata.len()))
}

/// Copia `reader` a `writer` en chunks acotados; retorna los bytes copiados
fn copy_in_chunks<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<usize> {
    let mut chunk = [0u8; BUFFER_SIZE];
    let mut total = 0;

    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&chunk[..n])?;
        total += n;
    }

    Ok(total)
}
