// ============================================================================
// FOOD CATALOG APP - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura MVVM:
// - ViewModels: Estado de cada página + lógica UI
// - Services: Comunicación API, decodificación y conectividad
// - State: Stores compartidos con Rc<RefCell> (carrito, sesión, fetch)
// - Models: Estructuras tipadas del catálogo
// - bindings (solo wasm32): entrada WASM y funciones para la capa JS
// ============================================================================

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
mod bindings;

#[cfg(test)]
mod test_support;

pub use app::{App, Page, Route};
pub use config::{AppConfig, CONFIG};
pub use error::{ApiError, RouteError};
pub use state::AppContext;
