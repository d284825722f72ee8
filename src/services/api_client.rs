// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Devuelve el árbol JSON crudo; la decodificación tipada se hace en
// services::catalog_decoder.
// ============================================================================

use serde_json::Value;

use crate::config::{AppConfig, CONFIG};
use crate::error::ApiError;

/// Origen de los payloads del catálogo
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    /// Listado de restaurantes (endpoint principal)
    async fn fetch_restaurant_list(&self) -> Result<Value, ApiError>;

    /// Menú de un restaurante
    async fn fetch_menu(&self, restaurant_id: &str) -> Result<Value, ApiError>;
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient {
    list_api_url: String,
    menu_api_url: String,
    lat: f64,
    lng: f64,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::from_config(&CONFIG)
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            list_api_url: config.list_api_url.clone(),
            menu_api_url: config.menu_api_url.clone(),
            lat: config.location.lat,
            lng: config.location.lng,
        }
    }

    pub fn restaurant_list_url(&self) -> String {
        format!(
            "{}?lat={}&lng={}&is-seo-homepage-enabled=true&page_type=DESKTOP_WEB_LISTING",
            self.list_api_url, self.lat, self.lng
        )
    }

    /// El id se concatena a la URL base (que termina en `restaurantId=`)
    pub fn menu_url(&self, restaurant_id: &str) -> String {
        format!("{}{}", self.menu_api_url, restaurant_id)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
mod http {
    use gloo_net::http::Request;
    use serde_json::Value;

    use super::{ApiClient, CatalogSource};
    use crate::error::ApiError;

    async fn get_json(url: &str) -> Result<Value, ApiError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    impl CatalogSource for ApiClient {
        async fn fetch_restaurant_list(&self) -> Result<Value, ApiError> {
            let url = self.restaurant_list_url();
            log::info!("📋 Obteniendo listado de restaurantes");
            get_json(&url).await
        }

        async fn fetch_menu(&self, restaurant_id: &str) -> Result<Value, ApiError> {
            let url = self.menu_url(restaurant_id);
            log::info!("🍽️ Obteniendo menú del restaurante: {}", restaurant_id);
            get_json(&url).await
        }
    }
}
