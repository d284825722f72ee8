// ============================================================================
// BINDINGS WASM - Punto de entrada y funciones llamables desde JavaScript
// ============================================================================
// La app vive en un thread_local. Las tareas asíncronas clonan lo que
// necesitan antes de hacer await; nunca se mantiene el borrow de APP.
// Tras cada cambio de estado se emite "appStateChanged" en window para
// que la capa JS vuelva a pintar.
// ============================================================================

use std::cell::RefCell;

use serde_json::json;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Event;

use crate::app::{App, Page};
use crate::config::CONFIG;
use crate::services::{ApiClient, BrowserReachability, NetworkMonitor};
use crate::state::{AppContext, StaticIdentity};
use crate::utils::storage::BrowserStore;
use crate::viewmodels::SavedTextViewModel;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

const STATE_CHANGED_EVENT: &str = "appStateChanged";

fn notify_state_changed() {
    let Some(window) = web_sys::window() else {
        return;
    };
    match Event::new(STATE_CHANGED_EVENT) {
        Ok(event) => {
            let _ = window.dispatch_event(&event);
        }
        Err(e) => log::warn!("⚠️ [MAIN] No se pudo crear el evento: {:?}", e),
    }
}

fn with_app<R>(reader: impl FnOnce(&App) -> R) -> Option<R> {
    APP.with(|cell| cell.borrow().as_ref().map(reader))
}

fn context() -> Option<AppContext> {
    with_app(|app| app.context().clone())
}

fn current_page() -> Option<Page> {
    with_app(|app| app.page().cloned()).flatten()
}

fn activate_current_page() {
    let Some(page) = current_page() else {
        return;
    };
    spawn_local(async move {
        if page.activate(&ApiClient::new()).await {
            notify_state_changed();
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if CONFIG.is_logging_enabled() {
        let level = if CONFIG.is_production() {
            log::Level::Info
        } else {
            log::Level::Debug
        };
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    log::info!("🚀 Food Catalog App - Rust Puro + MVVM ({})", CONFIG.environment);

    let ctx = AppContext::new(NetworkMonitor::new(Box::new(BrowserReachability)));
    ctx.cart.subscribe(|_| notify_state_changed());
    ctx.session.subscribe(|_| notify_state_changed());
    ctx.network.subscribe(|_| notify_state_changed());

    let mut app = App::new(ctx.clone());
    app.mount();

    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    if let Err(e) = app.navigate(&path) {
        log::warn!("⚠️ [MAIN] {}", e);
    }

    APP.with(|cell| *cell.borrow_mut() = Some(app));
    activate_current_page();

    let session = ctx.session.clone();
    spawn_local(async move {
        let outcome = session
            .initialize(&StaticIdentity::from_config(), CONFIG.retry_attempts)
            .await;
        log::info!("👤 [MAIN] Inicialización de sesión: {:?}", outcome);
    });

    Ok(())
}

/// Navega a `path`. Devuelve el texto del error boundary si la ruta no existe.
#[wasm_bindgen]
pub fn navigate(path: &str) -> Option<String> {
    let error = APP.with(|cell| {
        let mut borrowed = cell.borrow_mut();
        let app = borrowed.as_mut()?;
        app.navigate(path).err().map(|e| e.to_string())
    });
    if error.is_none() {
        activate_current_page();
    }
    notify_state_changed();
    error
}

#[wasm_bindgen]
pub fn online_indicator() -> String {
    with_app(|app| app.header().online_indicator().to_string()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn cart_label() -> String {
    with_app(|app| app.header().cart_label()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn toggle_login() -> String {
    with_app(|app| app.header().toggle_login().to_string()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn user_name() -> Option<String> {
    with_app(|app| app.header().user_name()).flatten()
}

#[wasm_bindgen]
pub fn set_user_name(name: &str) {
    if let Some(ctx) = context() {
        ctx.session.set_user_name(name);
    }
}

/// Estado del listado como JSON
#[wasm_bindgen]
pub fn restaurant_list_view() -> Result<String, JsValue> {
    let Some(Page::Body(vm)) = current_page() else {
        return Ok("null".to_string());
    };
    let view = json!({
        "loading": vm.is_loading(),
        "offlineMessage": vm.offline_message(),
        "searchText": vm.search_text(),
        "fallbackMessage": vm.fallback_message(),
        "cards": vm.cards(),
    });
    serde_json::to_string(&view).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn set_search_text(text: &str) {
    if let Some(Page::Body(vm)) = current_page() {
        vm.set_search_text(text);
    }
}

#[wasm_bindgen]
pub fn commit_search() -> u32 {
    let count = match current_page() {
        Some(Page::Body(vm)) => vm.commit_search() as u32,
        _ => 0,
    };
    notify_state_changed();
    count
}

/// Estado del detalle de restaurante como JSON
#[wasm_bindgen]
pub fn restaurant_menu_view() -> Result<String, JsValue> {
    let Some(Page::Menu(vm)) = current_page() else {
        return Ok("null".to_string());
    };
    let view = json!({
        "title": vm.title(),
        "subtitle": vm.subtitle(),
        "rating": vm.rating_line(),
        "categories": vm.categories(),
        "openItems": vm.open_items(),
    });
    serde_json::to_string(&view).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn select_category(index: usize) -> bool {
    let selected = match current_page() {
        Some(Page::Menu(vm)) => vm.select_category(index),
        _ => false,
    };
    if selected {
        notify_state_changed();
    }
    selected
}

/// Agrega un item del menú; devuelve el tamaño del carrito
#[wasm_bindgen]
pub fn add_item(category: usize, item: usize) -> Option<u32> {
    match current_page() {
        Some(Page::Menu(vm)) => vm.add_item(category, item).map(|len| len as u32),
        _ => None,
    }
}

#[wasm_bindgen]
pub fn cart_view() -> Result<String, JsValue> {
    let Some(Page::Cart(vm)) = current_page() else {
        return Ok("null".to_string());
    };
    let view = json!({
        "items": vm.items(),
        "emptyMessage": vm.empty_message(),
    });
    serde_json::to_string(&view).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn clear_cart() {
    if let Some(ctx) = context() {
        ctx.cart.clear_cart();
    }
}

#[wasm_bindgen]
pub fn saved_text() -> String {
    SavedTextViewModel::new(BrowserStore).text()
}

#[wasm_bindgen]
pub fn set_saved_text(text: &str) -> Result<(), JsValue> {
    SavedTextViewModel::new(BrowserStore)
        .on_input(text)
        .map_err(|e| JsValue::from_str(&e))
}
