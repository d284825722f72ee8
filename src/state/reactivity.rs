// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================
// Las notificaciones de un mismo estado se entregan en el orden en que se
// aplicaron las mutaciones, también si un subscriber muta el estado
// durante la notificación (se encolan y se despachan después).
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

pub type SubscriptionId = u64;

type Callback<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(SubscriptionId, Callback<T>)>>,
    next_id: Cell<SubscriptionId>,
    pending: RefCell<VecDeque<T>>,
    dispatching: Cell<bool>,
}

/// Estado reactivo compartido. `clone()` comparte valor y subscribers.
pub struct ReactiveState<T> {
    inner: Rc<Inner<T>>,
}

impl<T: Clone + 'static> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                pending: RefCell::new(VecDeque::new()),
                dispatching: Cell::new(false),
            }),
        }
    }

    /// Snapshot del valor actual
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Leer sin clonar
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.inner.value.borrow())
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        self.update(|value| *value = new_value);
    }

    /// Actualizar valor usando closure, notificar y devolver el nuevo snapshot
    pub fn update<F>(&self, updater: F) -> T
    where
        F: FnOnce(&mut T),
    {
        let snapshot = {
            let mut value = self.inner.value.borrow_mut();
            updater(&mut value);
            value.clone()
        };
        self.notify(snapshot.clone());
        snapshot
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        let callback: Callback<T> = Rc::new(callback);
        self.inner.subscribers.borrow_mut().push((id, callback));
        id
    }

    /// Cancelar suscripción. `false` si el id no existía.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.inner.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// Notificar a todos los subscribers
    fn notify(&self, snapshot: T) {
        self.inner.pending.borrow_mut().push_back(snapshot);
        if self.inner.dispatching.replace(true) {
            // Ya hay un despacho en curso más arriba en la pila
            return;
        }

        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some(snapshot) = next else { break };

            let callbacks: Vec<Callback<T>> = self
                .inner
                .subscribers
                .borrow()
                .iter()
                .map(|(_, callback)| callback.clone())
                .collect();

            for callback in callbacks {
                callback(&snapshot);
            }
        }

        self.inner.dispatching.set(false);
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + Default + 'static> Default for ReactiveState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_see_new_value() {
        let state = ReactiveState::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let reader = state.clone();
        state.subscribe(move |value| {
            // El valor ya está aplicado cuando llega la notificación
            assert_eq!(reader.get(), *value);
            seen_clone.borrow_mut().push(*value);
        });

        state.set(1);
        state.update(|v| *v += 10);

        assert_eq!(*seen.borrow(), vec![1, 11]);
    }

    #[test]
    fn unsubscribed_callback_is_not_called() {
        let state = ReactiveState::new(String::new());
        let calls = Rc::new(Cell::new(0));
        let calls_clone = calls.clone();
        let id = state.subscribe(move |_| calls_clone.set(calls_clone.get() + 1));

        state.set("a".to_string());
        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));
        state.set("b".to_string());

        assert_eq!(calls.get(), 1);
        assert_eq!(state.subscriber_count(), 0);
    }

    #[test]
    fn reentrant_updates_are_delivered_in_order() {
        let state = ReactiveState::new(0);
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));

        let writer = state.clone();
        let first_clone = first.clone();
        state.subscribe(move |value| {
            first_clone.borrow_mut().push(*value);
            if *value == 1 {
                writer.set(2);
            }
        });
        let second_clone = second.clone();
        state.subscribe(move |value| second_clone.borrow_mut().push(*value));

        state.set(1);

        assert_eq!(*first.borrow(), vec![1, 2]);
        assert_eq!(*second.borrow(), vec![1, 2]);
        assert_eq!(state.get(), 2);
    }
}
