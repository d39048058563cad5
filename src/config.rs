//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración inmutable del servidor, construida desde argumentos CLI
//! y variables de entorno al arrancar. Se comparte en modo solo-lectura
//! con todos los workers.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./static_stats_server -p 8080 --static-dir ./public
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 STATIC_DIR=./public ./static_stats_server
//! ```

use clap::Parser;
use std::path::{Path, PathBuf};

/// Puerto por defecto (HTTP estándar)
pub const DEFAULT_PORT: u16 = 80;

/// Configuración del servidor HTTP
#[derive(Debug, Clone, Parser)]
#[command(name = "static_stats_server")]
#[command(about = "Servidor HTTP mínimo: archivos estáticos, estadísticas y calculadora")]
#[command(version = "0.1.0")]
pub struct ServerConfig {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha (por defecto todas las interfaces)
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio raíz de los archivos servidos bajo /static/
    #[arg(long = "static-dir", default_value = "static", env = "STATIC_DIR")]
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Crea la configuración parseando argumentos CLI
    ///
    /// Si los argumentos son inválidos, clap imprime el uso en stderr y
    /// termina el proceso con estado distinto de cero, antes de abrir
    /// cualquier socket.
    pub fn from_args() -> Self {
        ServerConfig::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use static_stats_server::config::ServerConfig;
    ///
    /// let config = ServerConfig::default();
    /// assert_eq!(config.address(), "0.0.0.0:80");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Raíz de archivos estáticos
    pub fn static_root(&self) -> &Path {
        &self.static_dir
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }
        if self.static_dir.as_os_str().is_empty() {
            return Err("Static dir must not be empty".to_string());
        }
        Ok(())
    }

    /// Registra en el log un resumen de la configuración
    pub fn log_summary(&self) {
        log::info!("Dirección:        {}", self.address());
        log::info!("Dir. estático:    {}", self.static_dir.display());
        if !self.static_dir.is_dir() {
            log::warn!(
                "El directorio estático {} no existe; /static/ responderá 404",
                self.static_dir.display()
            );
        }
    }
}

impl Default for ServerConfig {
    /// Configuración por defecto (igual a la del CLI sin argumentos)
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: "0.0.0.0".to_string(),
            static_dir: PathBuf::from("static"),
        }
    }
}
