//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Mapea método + path a uno de los cuatro handlers.
//!
//! ```text
//! RequestLine → route() → Route → handler → respuesta
//! ```
//!
//! Tabla de decisión (gana la primera coincidencia):
//!
//! | Condición                     | Ruta            |
//! |-------------------------------|-----------------|
//! | método distinto de `GET`      | `NotFound`      |
//! | path empieza con `/static/`   | `StaticFile`    |
//! | path es exactamente `/stats`  | `StatsReport`   |
//! | path empieza con `/calc?`     | `Calculator`    |
//! | cualquier otro caso           | `NotFound`      |
//!
//! No hay comodines, percent-decoding ni normalización de `/` final.

const STATIC_PREFIX: &str = "/static/";
const STATS_PATH: &str = "/stats";
const CALC_PREFIX: &str = "/calc?";

/// Handler seleccionado para un request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route<'a> {
    /// Archivo bajo la raíz estática (identificador sin el prefijo)
    StaticFile(&'a str),

    /// Reporte HTML de estadísticas
    StatsReport,

    /// Calculadora (query string sin el prefijo)
    Calculator(&'a str),

    /// Respuesta 404 fija
    NotFound,
}

/// Selecciona la ruta para un método y un path
///
/// # Ejemplo
/// ```
/// use static_stats_server::router::{route, Route};
///
/// assert_eq!(route("GET", "/calc?a=1&b=2"), Route::Calculator("a=1&b=2"));
/// assert_eq!(route("POST", "/stats"), Route::NotFound);
/// ```
pub fn route<'a>(method: &str, path: &'a str) -> Route<'a> {
    if method != "GET" {
        return Route::NotFound;
    }

    if let Some(id) = path.strip_prefix(STATIC_PREFIX) {
        Route::StaticFile(id)
    } else if path == STATS_PATH {
        Route::StatsReport
    } else if let Some(query) = path.strip_prefix(CALC_PREFIX) {
        Route::Calculator(query)
    } else {
        Route::NotFound
    }
}

impl Route<'_> {
    /// Nombre corto para logs
    pub fn name(&self) -> &'static str {
        match self {
            Route::StaticFile(_) => "static",
            Route::StatsReport => "stats",
            Route::Calculator(_) => "calc",
            Route::NotFound => "not_found",
        }
    }
}
