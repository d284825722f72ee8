// Fixtures y dobles compartidos por los tests

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use serde_json::Value;

use crate::error::ApiError;
use crate::services::{CatalogSource, ManualReachability, NetworkMonitor};
use crate::state::{AppContext, IdentityProvider};

pub fn menu_fixture() -> Value {
    serde_json::from_str(include_str!("../tests/fixtures/menu_500.json")).expect("menu fixture")
}

pub fn restaurant_list_fixture() -> Value {
    serde_json::from_str(include_str!("../tests/fixtures/restaurant_list.json"))
        .expect("restaurant list fixture")
}

/// Contexto con red manual (online) y carrito vacío
pub fn test_context() -> (AppContext, ManualReachability) {
    let platform = ManualReachability::new(true);
    let monitor = NetworkMonitor::new(Box::new(platform.clone()));
    (AppContext::new(monitor), platform)
}

/// Fuente del catálogo que registra cada request
#[derive(Default)]
pub struct MockCatalogSource {
    menus: HashMap<String, Result<Value, ApiError>>,
    list: Option<Result<Value, ApiError>>,
    menu_calls: RefCell<Vec<String>>,
    list_calls: Cell<usize>,
}

impl MockCatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_menu(mut self, id: &str, result: Result<Value, ApiError>) -> Self {
        self.menus.insert(id.to_string(), result);
        self
    }

    pub fn with_list(mut self, result: Result<Value, ApiError>) -> Self {
        self.list = Some(result);
        self
    }

    pub fn menu_calls(&self) -> Vec<String> {
        self.menu_calls.borrow().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.get()
    }
}

impl CatalogSource for MockCatalogSource {
    async fn fetch_restaurant_list(&self) -> Result<Value, ApiError> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.list
            .clone()
            .unwrap_or_else(|| Err(ApiError::Network("no list configured".to_string())))
    }

    async fn fetch_menu(&self, restaurant_id: &str) -> Result<Value, ApiError> {
        self.menu_calls.borrow_mut().push(restaurant_id.to_string());
        self.menus.get(restaurant_id).cloned().unwrap_or_else(|| {
            Err(ApiError::Http {
                status: 404,
                status_text: "Not Found".to_string(),
            })
        })
    }
}

/// Identidad que falla las primeras `failures` veces
pub struct FlakyIdentity {
    name: String,
    failures: Cell<u32>,
    pub calls: Cell<u32>,
}

impl FlakyIdentity {
    pub fn new(name: &str, failures: u32) -> Self {
        Self {
            name: name.to_string(),
            failures: Cell::new(failures),
            calls: Cell::new(0),
        }
    }
}

impl IdentityProvider for FlakyIdentity {
    async fn lookup(&self) -> Result<String, ApiError> {
        self.calls.set(self.calls.get() + 1);
        if self.failures.get() > 0 {
            self.failures.set(self.failures.get() - 1);
            return Err(ApiError::Network("identity service down".to_string()));
        }
        Ok(self.name.clone())
    }
}
