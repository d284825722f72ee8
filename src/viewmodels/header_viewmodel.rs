// ============================================================================
// HEADER VIEWMODEL
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::state::AppContext;
use crate::utils::constants::{OFFLINE_INDICATOR, ONLINE_INDICATOR};

#[derive(Clone)]
pub struct HeaderViewModel {
    ctx: AppContext,
    // Estado local del botón; no autentica nada
    login_pressed: Rc<Cell<bool>>,
}

impl HeaderViewModel {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            login_pressed: Rc::new(Cell::new(false)),
        }
    }

    pub fn online_indicator(&self) -> &'static str {
        if self.ctx.is_online() {
            ONLINE_INDICATOR
        } else {
            OFFLINE_INDICATOR
        }
    }

    pub fn cart_label(&self) -> String {
        format!("Cart - ({} items)", self.ctx.cart.len())
    }

    pub fn login_label(&self) -> &'static str {
        if self.login_pressed.get() {
            "Logout"
        } else {
            "Login"
        }
    }

    pub fn toggle_login(&self) -> &'static str {
        self.login_pressed.set(!self.login_pressed.get());
        self.login_label()
    }

    pub fn user_name(&self) -> Option<String> {
        self.ctx.session.logged_in_user()
    }
}
