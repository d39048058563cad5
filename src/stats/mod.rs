//! # Estadísticas del Servidor
//! src/stats/mod.rs
//!
//! Registro compartido de contadores del proceso:
//! - Requests atendidos
//! - Bytes recibidos
//! - Bytes enviados

pub mod registry;

pub use registry::{StatsRegistry, StatsSnapshot};
