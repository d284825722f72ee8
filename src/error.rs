// ============================================================================
// ERRORES - Fallos de red/parseo y errores de ruta
// ============================================================================
// Los errores de datos se absorben en los viewmodels (se loguean).
// Solo RouteError llega a la frontera superior de la app.
// ============================================================================

use thiserror::Error;

/// Error de comunicación con los endpoints del catálogo
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Error de navegación que se muestra en la frontera superior
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status}:{status_text}")]
pub struct RouteError {
    pub status: u16,
    pub status_text: String,
}

impl RouteError {
    pub fn not_found() -> Self {
        Self {
            status: 404,
            status_text: "Not Found".to_string(),
        }
    }
}
