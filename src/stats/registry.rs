//! # Registro de Estadísticas
//! src/stats/registry.rs
//!
//! Contadores compartidos por todos los workers. Los tres campos viven
//! detrás de un único `Mutex`, así que un snapshot nunca ve una
//! actualización a medias.

use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Registro de estadísticas thread-safe
///
/// Clonarlo es barato: todos los clones comparten los mismos contadores.
#[derive(Clone, Default)]
pub struct StatsRegistry {
    inner: Arc<Mutex<StatsData>>,
}

/// Datos internos protegidos por el lock
#[derive(Default)]
struct StatsData {
    /// Requests con al menos un byte leído
    request_count: u64,

    /// Total de bytes leídos de los clientes
    bytes_received: u64,

    /// Total de bytes escritos a los clientes
    bytes_sent: u64,
}

/// Copia consistente de los contadores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatsSnapshot {
    pub request_count: u64,
    pub bytes_received: u64,
    pub bytes_sent: u64,
}

impl StatsRegistry {
    /// Crea un registro con todos los contadores en cero
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra un request recibido con `bytes_in` bytes
    pub fn record_request(&self, bytes_in: usize) {
        let mut data = self.lock();
        data.request_count += 1;
        data.bytes_received += bytes_in as u64;
    }

    /// Registra `bytes_out` bytes enviados
    pub fn record_sent(&self, bytes_out: usize) {
        let mut data = self.lock();
        data.bytes_sent += bytes_out as u64;
    }

    /// Obtiene un snapshot de los tres contadores
    pub fn snapshot(&self) -> StatsSnapshot {
        let data = self.lock();
        StatsSnapshot {
            request_count: data.request_count,
            bytes_received: data.bytes_received,
            bytes_sent: data.bytes_sent,
        }
    }

    // Un worker que hizo panic no invalida contadores ya consistentes.
    fn lock(&self) -> MutexGuard<'_, StatsData> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StatsSnapshot {
    /// Serializa el snapshot a JSON (para logs)
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
