use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    DEFAULT_CDN_URL, DEFAULT_LAT, DEFAULT_LIST_API_URL, DEFAULT_LNG, DEFAULT_MENU_API_URL,
    DEFAULT_USER_NAME,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub list_api_url: String,
    pub menu_api_url: String,
    pub cdn_url: String,
    pub location: LocationConfig,
    pub environment: String,
    pub enable_logging: bool,
    pub retry_attempts: u32,
    pub default_user_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            list_api_url: DEFAULT_LIST_API_URL.to_string(),
            menu_api_url: DEFAULT_MENU_API_URL.to_string(),
            cdn_url: DEFAULT_CDN_URL.to_string(),
            location: LocationConfig::default(),
            environment: "development".to_string(),
            enable_logging: true,
            retry_attempts: 3,
            default_user_name: DEFAULT_USER_NAME.to_string(),
        }
    }
}

/// Coordenadas enviadas al endpoint del listado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub lat: f64,
    pub lng: f64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            lat: DEFAULT_LAT,
            lng: DEFAULT_LNG,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            list_api_url: option_env!("LIST_API_URL")
                .map(str::to_string)
                .unwrap_or(defaults.list_api_url),
            menu_api_url: option_env!("MENU_API_URL")
                .map(str::to_string)
                .unwrap_or(defaults.menu_api_url),
            cdn_url: option_env!("CDN_URL")
                .map(str::to_string)
                .unwrap_or(defaults.cdn_url),
            location: LocationConfig {
                lat: coordinate(option_env!("DEFAULT_LAT"), 90.0, DEFAULT_LAT),
                lng: coordinate(option_env!("DEFAULT_LNG"), 180.0, DEFAULT_LNG),
            },
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            retry_attempts: option_env!("RETRY_ATTEMPTS")
                .unwrap_or("3").parse().unwrap_or(3),
            default_user_name: option_env!("DEFAULT_USER_NAME")
                .map(str::to_string)
                .unwrap_or(defaults.default_user_name),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

/// Coordenada en [-limit, limit]; cualquier otro valor vuelve al default
fn coordinate(raw: Option<&str>, limit: f64, default: f64) -> f64 {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && v.abs() <= limit)
        .unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
