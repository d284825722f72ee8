// ============================================================================
// MONITOR DE ESTADO DE RED
// ============================================================================
// Expone online/offline. La suscripción a los eventos de la plataforma
// dura exactamente una activación: teardown() (o Drop) la elimina.
// ============================================================================

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::state::reactivity::{ReactiveState, SubscriptionId};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NetworkStatus {
    Online,
    Offline,
}

impl From<bool> for NetworkStatus {
    fn from(online: bool) -> Self {
        if online {
            NetworkStatus::Online
        } else {
            NetworkStatus::Offline
        }
    }
}

/// Al soltarse, quita el listener registrado en la plataforma
pub struct ListenerGuard {
    cleanup: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    pub fn new(cleanup: impl FnOnce() + 'static) -> Self {
        Self {
            cleanup: Some(Box::new(cleanup)),
        }
    }

    /// Guard sin listener (plataforma sin eventos)
    pub fn noop() -> Self {
        Self { cleanup: None }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

/// Fuente de reachability de la plataforma
pub trait ReachabilityPlatform {
    /// Estado actual; `None` si la plataforma no lo expone
    fn is_online(&self) -> Option<bool>;

    /// Registra `on_change` para los eventos online/offline.
    /// `None` si la plataforma no emite eventos.
    fn subscribe(&self, on_change: Rc<dyn Fn(bool)>) -> Option<ListenerGuard>;
}

/// Plataforma sin capacidad de reachability: se asume conectado
#[derive(Clone, Copy, Default)]
pub struct UnavailableReachability;

impl ReachabilityPlatform for UnavailableReachability {
    fn is_online(&self) -> Option<bool> {
        None
    }

    fn subscribe(&self, _on_change: Rc<dyn Fn(bool)>) -> Option<ListenerGuard> {
        None
    }
}

struct ManualInner {
    online: Option<bool>,
    listeners: Vec<(u64, Rc<dyn Fn(bool)>)>,
    next_id: u64,
}

/// Plataforma controlada a mano (hosts sin navegador y tests)
#[derive(Clone)]
pub struct ManualReachability {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualReachability {
    pub fn new(online: bool) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ManualInner {
                online: Some(online),
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Emite el evento "online" u "offline"
    pub fn emit(&self, online: bool) {
        let listeners: Vec<Rc<dyn Fn(bool)>> = {
            let mut inner = self.inner.borrow_mut();
            inner.online = Some(online);
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            listener(online);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl ReachabilityPlatform for ManualReachability {
    fn is_online(&self) -> Option<bool> {
        self.inner.borrow().online
    }

    fn subscribe(&self, on_change: Rc<dyn Fn(bool)>) -> Option<ListenerGuard> {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, on_change));
            id
        };

        let weak: Weak<RefCell<ManualInner>> = Rc::downgrade(&self.inner);
        Some(ListenerGuard::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(l_id, _)| *l_id != id);
            }
        }))
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserReachability;

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::rc::Rc;

    use js_sys;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{window, Event};

    use super::{ListenerGuard, ReachabilityPlatform};

    /// navigator.onLine + eventos "online"/"offline" de window
    #[derive(Clone, Copy, Default)]
    pub struct BrowserReachability;

    impl ReachabilityPlatform for BrowserReachability {
        fn is_online(&self) -> Option<bool> {
            // navigator.onLine via Reflect: si no existe, None
            let window = window()?;
            let navigator = js_sys::Reflect::get(&window, &JsValue::from_str("navigator")).ok()?;
            js_sys::Reflect::get(&navigator, &JsValue::from_str("onLine"))
                .ok()
                .and_then(|v| v.as_bool())
        }

        fn subscribe(&self, on_change: Rc<dyn Fn(bool)>) -> Option<ListenerGuard> {
            let window = window()?;

            let online_closure = Closure::wrap(Box::new({
                let on_change = on_change.clone();
                move |_event: Event| on_change(true)
            }) as Box<dyn FnMut(Event)>);

            let offline_closure = Closure::wrap(Box::new({
                let on_change = on_change.clone();
                move |_event: Event| on_change(false)
            }) as Box<dyn FnMut(Event)>);

            if let Err(e) = window.add_event_listener_with_callback(
                "online",
                online_closure.as_ref().unchecked_ref(),
            ) {
                log::warn!("⚠️ [NETWORK] No se pudo registrar 'online': {:?}", e);
                return None;
            }
            if let Err(e) = window.add_event_listener_with_callback(
                "offline",
                offline_closure.as_ref().unchecked_ref(),
            ) {
                log::warn!("⚠️ [NETWORK] No se pudo registrar 'offline': {:?}", e);
                let _ = window.remove_event_listener_with_callback(
                    "online",
                    online_closure.as_ref().unchecked_ref(),
                );
                return None;
            }

            // Los closures viven dentro del guard (sin forget) y se quitan al soltarlo
            Some(ListenerGuard::new(move || {
                let _ = window.remove_event_listener_with_callback(
                    "online",
                    online_closure.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "offline",
                    offline_closure.as_ref().unchecked_ref(),
                );
                drop(online_closure);
                drop(offline_closure);
            }))
        }
    }
}

/// Monitor de estado de red
pub struct NetworkMonitor {
    platform: Box<dyn ReachabilityPlatform>,
    status: ReactiveState<bool>,
    listener: RefCell<Option<ListenerGuard>>,
}

impl NetworkMonitor {
    pub fn new(platform: Box<dyn ReachabilityPlatform>) -> Self {
        Self {
            platform,
            // Antes de activar se asume conectado
            status: ReactiveState::new(true),
            listener: RefCell::new(None),
        }
    }

    /// Lee el estado inicial y registra los listeners (una sola vez)
    pub fn activate(&self) {
        if self.listener.borrow().is_some() {
            log::warn!("⚠️ NetworkMonitor: activate ya fue llamado, ignorando llamada duplicada");
            return;
        }

        let initial = self.platform.is_online().unwrap_or(true);
        self.status.set(initial);

        let status = self.status.clone();
        let on_change: Rc<dyn Fn(bool)> = Rc::new(move |online| {
            if online {
                log::info!("🌐 Network: ONLINE");
            } else {
                log::warn!("📴 Network: OFFLINE");
            }
            status.set(online);
        });

        let guard = self.platform.subscribe(on_change).unwrap_or_else(|| {
            log::info!("🌐 NetworkMonitor: plataforma sin eventos de red, se asume conectado");
            ListenerGuard::noop()
        });
        *self.listener.borrow_mut() = Some(guard);

        log::info!("✅ NetworkMonitor: listeners registrados (online: {})", initial);
    }

    /// Quita los listeners. Seguro de llamar varias veces.
    pub fn teardown(&self) {
        if let Some(guard) = self.listener.borrow_mut().take() {
            drop(guard);
            log::info!("🔌 NetworkMonitor: listeners eliminados");
        }
    }

    pub fn is_active(&self) -> bool {
        self.listener.borrow().is_some()
    }

    /// Obtener estado actual de red
    pub fn current_status(&self) -> NetworkStatus {
        NetworkStatus::from(self.status.get())
    }

    pub fn is_online(&self) -> bool {
        self.status.get()
    }

    pub fn is_offline(&self) -> bool {
        !self.is_online()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(NetworkStatus) + 'static,
    {
        self.status
            .subscribe(move |online: &bool| callback(NetworkStatus::from(*online)))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.status.unsubscribe(id)
    }
}

impl Default for NetworkMonitor {
    fn default() -> Self {
        Self::new(Box::new(UnavailableReachability))
    }
}

impl Drop for NetworkMonitor {
    fn drop(&mut self) {
        self.teardown();
    }
}
