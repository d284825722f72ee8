// ============================================================================
// CART STATE - Store centralizado del carrito
// ============================================================================
// Solo se muta con add_item / clear_cart. Duplicados permitidos: agregar
// el mismo item dos veces produce dos líneas.
// ============================================================================

use crate::models::CartItem;
use crate::state::reactivity::{ReactiveState, SubscriptionId};

#[derive(Clone, Default)]
pub struct CartStore {
    items: ReactiveState<Vec<CartItem>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega al final y devuelve el nuevo estado
    pub fn add_item(&self, item: CartItem) -> Vec<CartItem> {
        log::info!("🛒 [CART] Agregando item {} ({})", item.id(), item.name());
        self.items.update(|items| items.push(item))
    }

    /// Vacía el carrito. Sin efecto si ya está vacío.
    pub fn clear_cart(&self) {
        if self.is_empty() {
            log::debug!("🛒 [CART] clear_cart sobre carrito vacío, nada que hacer");
            return;
        }
        log::info!("🗑️ [CART] Carrito vaciado");
        self.items.set(Vec::new());
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.items.get()
    }

    pub fn len(&self) -> usize {
        self.items.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Suscribirse a cada nuevo snapshot del carrito
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&[CartItem]) + 'static,
    {
        self.items.subscribe(move |items: &Vec<CartItem>| callback(items.as_slice()))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.items.unsubscribe(id)
    }
}
