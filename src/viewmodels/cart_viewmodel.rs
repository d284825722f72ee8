// ============================================================================
// CART VIEWMODEL - Página del carrito
// ============================================================================

use crate::models::CartItem;
use crate::state::AppContext;
use crate::utils::constants::EMPTY_CART_MESSAGE;

#[derive(Clone)]
pub struct CartViewModel {
    ctx: AppContext,
}

impl CartViewModel {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.ctx.cart.items()
    }

    /// (nombre, precio) de cada línea
    pub fn lines(&self) -> Vec<(String, String)> {
        self.items()
            .into_iter()
            .map(|item| (item.name(), item.price_label()))
            .collect()
    }

    pub fn clear(&self) {
        self.ctx.cart.clear_cart();
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        self.ctx.cart.is_empty().then_some(EMPTY_CART_MESSAGE)
    }
}
