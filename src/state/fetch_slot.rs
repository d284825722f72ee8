// ============================================================================
// FETCH SLOT - Resultado asíncrono ligado al ciclo de vida de una vista
// ============================================================================
// Cada request lleva un ticket con la generación vigente. Un resultado
// con ticket viejo, o que llega tras teardown(), se descarta.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ApiError;

/// Comprobante de un request emitido
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

struct SlotState<T> {
    generation: u64,
    alive: bool,
    in_flight: bool,
    value: Option<T>,
    last_error: Option<ApiError>,
}

/// Valor todo-o-nada: `None` mientras carga (o si falló)
pub struct FetchSlot<T> {
    state: Rc<RefCell<SlotState<T>>>,
}

impl<T: Clone> FetchSlot<T> {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(SlotState {
                generation: 0,
                alive: true,
                in_flight: false,
                value: None,
                last_error: None,
            })),
        }
    }

    /// Emite un ticket nuevo. `None` si la vista ya fue desmontada.
    pub fn begin(&self) -> Option<FetchTicket> {
        let mut state = self.state.borrow_mut();
        if !state.alive {
            return None;
        }
        state.generation += 1;
        state.in_flight = true;
        Some(FetchTicket {
            generation: state.generation,
        })
    }

    /// Olvida el valor e invalida cualquier request en vuelo
    pub fn reset(&self) {
        let mut state = self.state.borrow_mut();
        state.generation += 1;
        state.in_flight = false;
        state.value = None;
        state.last_error = None;
    }

    /// Aplica el resultado si el ticket sigue vigente. Devuelve si se aplicó.
    pub fn resolve(&self, ticket: FetchTicket, result: Result<T, ApiError>) -> bool {
        let mut state = self.state.borrow_mut();
        if !state.alive || ticket.generation != state.generation {
            log::debug!(
                "🚫 [FETCH] Resultado descartado (ticket {}, vigente {}, viva: {})",
                ticket.generation, state.generation, state.alive
            );
            return false;
        }

        state.in_flight = false;
        match result {
            Ok(value) => {
                state.value = Some(value);
                state.last_error = None;
            }
            Err(e) => {
                state.last_error = Some(e);
            }
        }
        true
    }

    pub fn value(&self) -> Option<T> {
        self.state.borrow().value.clone()
    }

    pub fn with_value<R>(&self, reader: impl FnOnce(Option<&T>) -> R) -> R {
        reader(self.state.borrow().value.as_ref())
    }

    pub fn is_loaded(&self) -> bool {
        self.state.borrow().value.is_some()
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.borrow().in_flight
    }

    pub fn last_error(&self) -> Option<ApiError> {
        self.state.borrow().last_error.clone()
    }

    /// Desmontaje de la vista: ningún resultado posterior se aplica
    pub fn teardown(&self) {
        let mut state = self.state.borrow_mut();
        state.alive = false;
        state.in_flight = false;
    }
}

impl<T: Clone> Default for FetchSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FetchSlot<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
