// ============================================================================
// CATALOG FETCHER - Menú de un restaurante por id
// ============================================================================
// Un request por id observado. El resultado queda en None hasta que llega;
// si falla se loguea y queda en None (sin reintento).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use crate::error::ApiError;
use crate::models::RestaurantMenu;
use crate::services::{decode_menu, CatalogSource};
use crate::state::{FetchSlot, FetchTicket};

/// Qué pasa cuando una instancia viva recibe otro id
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefetchPolicy {
    /// Solo se carga el primer id; los siguientes se ignoran
    OnActivation,
    /// Un id distinto descarta el menú actual y vuelve a cargar
    #[default]
    OnIdentifierChange,
}

/// Request emitido para un id concreto
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRequest {
    pub restaurant_id: String,
    ticket: FetchTicket,
}

#[derive(Clone)]
pub struct CatalogFetcher {
    slot: FetchSlot<RestaurantMenu>,
    requested_id: Rc<RefCell<Option<String>>>,
    policy: RefetchPolicy,
}

impl CatalogFetcher {
    pub fn new(policy: RefetchPolicy) -> Self {
        Self {
            slot: FetchSlot::new(),
            requested_id: Rc::new(RefCell::new(None)),
            policy,
        }
    }

    /// Decide si hay que emitir un request para `restaurant_id`
    pub fn request(&self, restaurant_id: &str) -> Option<MenuRequest> {
        let mut requested = self.requested_id.borrow_mut();

        match requested.as_deref() {
            Some(current) if current == restaurant_id => {
                log::debug!("🍽️ [MENU] Menú {} ya solicitado", restaurant_id);
                return None;
            }
            Some(current) => match self.policy {
                RefetchPolicy::OnActivation => {
                    log::warn!(
                        "⚠️ [MENU] Vista reutilizada para {} pero se mantiene el menú de {}",
                        restaurant_id, current
                    );
                    return None;
                }
                RefetchPolicy::OnIdentifierChange => {
                    log::info!("🔄 [MENU] Cambio de restaurante {} → {}", current, restaurant_id);
                    self.slot.reset();
                }
            },
            None => {}
        }

        let ticket = self.slot.begin()?;
        *requested = Some(restaurant_id.to_string());
        Some(MenuRequest {
            restaurant_id: restaurant_id.to_string(),
            ticket,
        })
    }

    /// Aplica la respuesta (si el request sigue vigente)
    pub fn resolve(&self, request: MenuRequest, result: Result<Value, ApiError>) -> bool {
        let restaurant_id = request.restaurant_id;
        let decoded = result.map(|json| decode_menu(&json));
        let failure = decoded.as_ref().err().cloned();

        let applied = self.slot.resolve(request.ticket, decoded);
        match (applied, failure) {
            (true, None) => {
                let categories = self.slot.with_value(|menu| menu.map_or(0, |m| m.categories.len()));
                log::info!("✅ [MENU] Menú {} cargado: {} categorías", restaurant_id, categories);
            }
            (true, Some(e)) => {
                log::error!("❌ [MENU] Error cargando menú {}: {}", restaurant_id, e);
            }
            (false, _) => {
                log::debug!("🚫 [MENU] Respuesta de {} descartada", restaurant_id);
            }
        }
        applied
    }

    /// request + fetch + resolve. Devuelve si se aplicó un resultado.
    pub async fn load<S: CatalogSource>(&self, source: &S, restaurant_id: &str) -> bool {
        let Some(request) = self.request(restaurant_id) else {
            return false;
        };
        let result = source.fetch_menu(&request.restaurant_id).await;
        self.resolve(request, result)
    }

    pub fn menu(&self) -> Option<RestaurantMenu> {
        self.slot.value()
    }

    pub fn with_menu<R>(&self, reader: impl FnOnce(Option<&RestaurantMenu>) -> R) -> R {
        self.slot.with_value(reader)
    }

    pub fn is_loaded(&self) -> bool {
        self.slot.is_loaded()
    }

    pub fn requested_id(&self) -> Option<String> {
        self.requested_id.borrow().clone()
    }

    pub fn last_error(&self) -> Option<ApiError> {
        self.slot.last_error()
    }

    pub fn teardown(&self) {
        self.slot.teardown();
    }
}

impl Default for CatalogFetcher {
    fn default() -> Self {
        Self::new(RefetchPolicy::default())
    }
}
