//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Acceptor loop: acepta conexiones indefinidamente y lanza un thread
//! desacoplado por conexión. El loop nunca espera a que un worker
//! termine.
//!
//! Al terminar el worker la conexión se cierra en orden: primero se
//! cierra la escritura (FIN) y luego se descarta lo que el cliente haya
//! mandado de más, así el kernel no responde con RST y el cliente recibe
//! la respuesta completa.

use super::worker::handle_connection;
use crate::config::ServerConfig;
use crate::stats::StatsRegistry;
use anyhow::Context;
use std::io::Read;
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Espera máxima por lectura al descartar input sobrante
const DRAIN_READ_TIMEOUT: Duration = Duration::from_millis(100);

/// Tiempo total máximo dedicado a descartar input
const DRAIN_DEADLINE: Duration = Duration::from_secs(1);

/// Bytes máximos a descartar antes de cerrar de todos modos
const DRAIN_LIMIT: usize = 64 * 1024;

/// Servidor HTTP thread-por-conexión
pub struct Server {
    listener: TcpListener,
    static_root: Arc<PathBuf>,
    stats: StatsRegistry,
}

impl Server {
    /// Abre el socket de escucha en `host:port`
    ///
    /// Un error aquí es fatal: el proceso no llega a aceptar conexiones.
    pub fn bind(config: &ServerConfig) -> anyhow::Result<Self> {
        let address = config.address();
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("no se pudo hacer bind en {}", address))?;

        Ok(Self {
            listener,
            static_root: Arc::new(config.static_root().to_path_buf()),
            stats: StatsRegistry::new(),
        })
    }

    /// Dirección real de escucha (útil con puerto 0)
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        self.listener
            .local_addr()
            .context("no se pudo leer la dirección de escucha")
    }

    /// Registro de estadísticas compartido con los workers
    pub fn stats(&self) -> StatsRegistry {
        self.stats.clone()
    }

    /// Loop principal: acepta y despacha para siempre
    pub fn run(self) {
        match self.listener.local_addr() {
            Ok(addr) => log::info!("Servidor escuchando en {}", addr),
            Err(_) => log::info!("Servidor escuchando"),
        }
        log::info!("Modo concurrente: un thread por conexión");

        for stream in self.listener.incoming() {
            match stream {
                Ok(mut stream) => {
                    if let Ok(peer) = stream.peer_addr() {
                        log::debug!("nueva conexión desde {}", peer);
                    }

                    let stats = self.stats.clone();
                    let static_root = Arc::clone(&self.static_root);

                    // El JoinHandle se descarta: el thread queda desacoplado
                    thread::spawn(move || {
                        handle_connection(&mut stream, &stats, &static_root);
                        close_connection(stream);
                    });
                }
                Err(e) => {
                    log::error!("Error al aceptar conexión: {}", e);
                }
            }
        }
    }
}

/// Cierra la escritura y descarta el input pendiente antes de soltar el socket
///
/// Si quedan bytes sin leer al cerrar, Linux envía RST y el cliente puede
/// perder la respuesta ya escrita.
fn close_connection(mut stream: TcpStream) {
    // Errores aquí solo significan que el peer ya se fue
    let _ = stream.shutdown(Shutdown::Write);
    if stream.set_read_timeout(Some(DRAIN_READ_TIMEOUT)).is_err() {
        return;
    }

    let started = Instant::now();
    let mut scratch = [0u8; 1024];
    let mut drained = 0;

    while drained < DRAIN_LIMIT && started.elapsed() < DRAIN_DEADLINE {
        match stream.read(&mut scratch) {
            Ok(0) | Err(_) => break,
            Ok(n) => drained += n,
        }
    }

    if drained > 0 {
        log::debug!("descartados {} bytes sin leer", drained);
    }
}
