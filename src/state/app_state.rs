// ============================================================================
// APP STATE - Contexto compartido de la aplicación
// ============================================================================
// Se crea una vez en la raíz y se pasa a cada viewmodel. Clonar el
// contexto comparte el mismo carrito, sesión y monitor de red.
// ============================================================================

use std::rc::Rc;

use crate::services::NetworkMonitor;
use crate::state::{CartStore, SessionScope};

#[derive(Clone)]
pub struct AppContext {
    pub cart: CartStore,
    pub session: SessionScope,
    pub network: Rc<NetworkMonitor>,
}

impl AppContext {
    pub fn new(network: NetworkMonitor) -> Self {
        Self {
            cart: CartStore::new(),
            session: SessionScope::new(),
            network: Rc::new(network),
        }
    }

    pub fn is_online(&self) -> bool {
        self.network.is_online()
    }
}
