// ============================================================================
// RESTAURANT MENU VIEWMODEL - Detalle de un restaurante
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::Serialize;

use crate::models::MenuItem;
use crate::services::CatalogSource;
use crate::state::{Accordion, AppContext};
use crate::viewmodels::catalog_fetcher::{CatalogFetcher, RefetchPolicy};

/// Cabecera de una categoría del acordeón
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryHeader {
    pub index: usize,
    pub label: String,
    pub open: bool,
}

#[derive(Clone)]
pub struct RestaurantMenuViewModel {
    ctx: AppContext,
    restaurant_id: Rc<RefCell<String>>,
    fetcher: CatalogFetcher,
    accordion: Rc<Cell<Accordion>>,
}

impl RestaurantMenuViewModel {
    pub fn new(ctx: AppContext, restaurant_id: &str) -> Self {
        Self::with_policy(ctx, restaurant_id, RefetchPolicy::default())
    }

    pub fn with_policy(ctx: AppContext, restaurant_id: &str, policy: RefetchPolicy) -> Self {
        Self {
            ctx,
            restaurant_id: Rc::new(RefCell::new(restaurant_id.to_string())),
            fetcher: CatalogFetcher::new(policy),
            accordion: Rc::new(Cell::new(Accordion::new())),
        }
    }

    pub fn restaurant_id(&self) -> String {
        self.restaurant_id.borrow().clone()
    }

    /// La ruta cambió de id sin desmontar la vista
    pub fn set_restaurant_id(&self, restaurant_id: &str) {
        *self.restaurant_id.borrow_mut() = restaurant_id.to_string();
    }

    /// Carga el menú del id actual según la política del fetcher
    pub async fn load<S: CatalogSource>(&self, source: &S) -> bool {
        let restaurant_id = self.restaurant_id();
        let applied = self.fetcher.load(source, &restaurant_id).await;
        if applied {
            self.accordion.set(Accordion::new());
        }
        applied
    }

    pub fn is_loaded(&self) -> bool {
        self.fetcher.is_loaded()
    }

    pub fn fetcher(&self) -> &CatalogFetcher {
        &self.fetcher
    }

    pub fn title(&self) -> Option<String> {
        let id = self.fetcher.requested_id()?;
        self.fetcher
            .with_menu(|menu| menu.map(|m| format!("{} - restaurant ID:{}", m.header.name, id)))
    }

    pub fn subtitle(&self) -> Option<String> {
        self.fetcher.with_menu(|menu| {
            menu.map(|m| {
                format!(
                    "{}-{}",
                    m.header.cuisines.join(", "),
                    m.header.cost_for_two_message
                )
            })
        })
    }

    pub fn rating_line(&self) -> Option<String> {
        self.fetcher.with_menu(|menu| {
            menu.map(|m| {
                format!(
                    "⭐ {} ({})",
                    m.header.avg_rating_string, m.header.total_ratings_string
                )
            })
        })
    }

    pub fn categories(&self) -> Vec<CategoryHeader> {
        let accordion = self.accordion.get();
        self.fetcher.with_menu(|menu| {
            menu.map(|m| {
                m.categories
                    .iter()
                    .enumerate()
                    .map(|(index, category)| CategoryHeader {
                        index,
                        label: category.header_label(),
                        open: accordion.is_open(index),
                    })
                    .collect()
            })
            .unwrap_or_default()
        })
    }

    /// Abre una categoría; índices fuera de rango se ignoran
    pub fn select_category(&self, index: usize) -> bool {
        let exists = self
            .fetcher
            .with_menu(|menu| menu.and_then(|m| m.category(index)).is_some());
        if !exists {
            log::warn!("⚠️ [MENU] Categoría {} inexistente", index);
            return false;
        }
        let mut accordion = self.accordion.get();
        accordion.select(index);
        self.accordion.set(accordion);
        true
    }

    pub fn open_index(&self) -> usize {
        self.accordion.get().open_index()
    }

    /// Items de la categoría abierta (las cerradas no se listan)
    pub fn open_items(&self) -> Vec<MenuItem> {
        let open = self.accordion.get().open_index();
        self.fetcher.with_menu(|menu| {
            menu.and_then(|m| m.category(open))
                .map(|c| c.items.clone())
                .unwrap_or_default()
        })
    }

    /// Botón "Add +". Devuelve el tamaño del carrito tras agregar.
    pub fn add_item(&self, category: usize, item: usize) -> Option<usize> {
        let selected = self
            .fetcher
            .with_menu(|menu| menu.and_then(|m| m.item(category, item)).cloned())?;
        Some(self.ctx.cart.add_item(selected).len())
    }

    pub fn teardown(&self) {
        self.fetcher.teardown();
    }
}
