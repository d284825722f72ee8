// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod cart_state;
pub mod session_state;
pub mod view_state;
pub mod fetch_slot;
pub mod app_state;

pub use reactivity::*;
pub use cart_state::*;
pub use session_state::*;
pub use view_state::*;
pub use fetch_slot::*;
pub use app_state::*;
