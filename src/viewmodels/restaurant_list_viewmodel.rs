// ============================================================================
// RESTAURANT LIST VIEWMODEL - Listado principal con búsqueda
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::RestaurantSummary;
use crate::services::{decode_restaurant_list, CatalogSource};
use crate::state::{AppContext, FetchSlot, SearchFilter};
use crate::utils::constants::OFFLINE_MESSAGE;
use crate::viewmodels::restaurant_card::{
    with_veg_label, CardRenderer, CardView, RestaurantCard, RestaurantCardProps, WithVegLabel,
};

#[derive(Clone)]
pub struct RestaurantListViewModel {
    ctx: AppContext,
    restaurants: FetchSlot<Vec<RestaurantSummary>>,
    search: Rc<RefCell<SearchFilter<RestaurantSummary>>>,
    card: RestaurantCard,
    veg_card: WithVegLabel<RestaurantCard>,
}

impl RestaurantListViewModel {
    pub fn new(ctx: AppContext) -> Self {
        Self::with_card(ctx, RestaurantCard::new())
    }

    pub fn with_card(ctx: AppContext, card: RestaurantCard) -> Self {
        Self {
            ctx,
            restaurants: FetchSlot::new(),
            search: Rc::new(RefCell::new(SearchFilter::new())),
            veg_card: with_veg_label(card.clone()),
            card,
        }
    }

    /// Carga el listado una vez por activación
    pub async fn activate<S: CatalogSource>(&self, source: &S) -> bool {
        if self.restaurants.is_loaded() || self.restaurants.is_in_flight() {
            return false;
        }
        let Some(ticket) = self.restaurants.begin() else {
            return false;
        };

        let result = source
            .fetch_restaurant_list()
            .await
            .map(|json| decode_restaurant_list(&json));
        if let Err(e) = &result {
            log::error!("❌ [LIST] Error cargando restaurantes: {}", e);
        }

        let applied = self.restaurants.resolve(ticket, result);
        if applied {
            if let Some(list) = self.restaurants.value() {
                log::info!("✅ [LIST] {} restaurantes cargados", list.len());
                self.search.borrow_mut().set_source(list);
            }
        }
        applied
    }

    pub fn is_loading(&self) -> bool {
        !self.restaurants.is_loaded()
    }

    /// Mensaje a mostrar en lugar del listado cuando no hay red
    pub fn offline_message(&self) -> Option<&'static str> {
        (!self.ctx.is_online()).then_some(OFFLINE_MESSAGE)
    }

    pub fn search_text(&self) -> String {
        self.search.borrow().text().to_string()
    }

    pub fn set_search_text(&self, text: impl Into<String>) {
        self.search.borrow_mut().set_text(text);
    }

    /// Botón "Search": devuelve cuántos restaurantes quedan visibles
    pub fn commit_search(&self) -> usize {
        self.search.borrow_mut().commit().len()
    }

    /// Cards visibles; los veg pasan por el decorador
    pub fn cards(&self) -> Vec<CardView> {
        let logged_in_user = self.ctx.session.logged_in_user();
        self.search
            .borrow()
            .visible()
            .iter()
            .map(|restaurant| {
                let props = RestaurantCardProps {
                    restaurant: restaurant.clone(),
                    logged_in_user: logged_in_user.clone(),
                };
                if restaurant.veg {
                    self.veg_card.render(&props)
                } else {
                    self.card.render(&props)
                }
            })
            .collect()
    }

    /// Texto cuando el filtro no deja resultados (solo con el listado cargado)
    pub fn fallback_message(&self) -> Option<&'static str> {
        if self.is_loading() {
            return None;
        }
        self.search.borrow().fallback_message()
    }

    pub fn teardown(&self) {
        self.restaurants.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::test_support::{restaurant_list_fixture, test_context, MockCatalogSource};
    use crate::utils::constants::{NO_MATCH_MESSAGE, VEG_LABEL};
    use futures::executor::block_on;
    use serde_json::Value;

    fn loaded() -> (RestaurantListViewModel, crate::services::ManualReachability) {
        let (ctx, platform) = test_context();
        let vm = RestaurantListViewModel::with_card(ctx, RestaurantCard::with_cdn("https://cdn/"));
        let source = MockCatalogSource::new().with_list(Ok(restaurant_list_fixture()));
        assert!(block_on(vm.activate(&source)));
        (vm, platform)
    }

    #[test]
    fn loads_list_once() {
        let (ctx, _) = test_context();
        let vm = RestaurantListViewModel::new(ctx);
        let source = MockCatalogSource::new().with_list(Ok(restaurant_list_fixture()));

        assert!(vm.is_loading());
        assert!(block_on(vm.activate(&source)));
        assert!(!block_on(vm.activate(&source)));
        assert_eq!(source.list_calls(), 1);
        assert_eq!(vm.cards().len(), 20);
    }

    #[test]
    fn search_commit_filters_cards() {
        let (vm, _) = loaded();

        vm.set_search_text("Pizza Hut");
        assert_eq!(vm.cards().len(), 20);
        assert_eq!(vm.commit_search(), 1);
        assert_eq!(vm.cards()[0].name, "Pizza Hut");

        vm.set_search_text("");
        assert_eq!(vm.commit_search(), 20);
    }

    #[test]
    fn no_match_shows_fallback() {
        let (vm, _) = loaded();
        assert_eq!(vm.fallback_message(), None);

        vm.set_search_text("sushi");
        assert_eq!(vm.commit_search(), 0);
        assert_eq!(vm.fallback_message(), Some(NO_MATCH_MESSAGE));
    }

    #[test]
    fn veg_restaurants_get_label() {
        let (vm, _) = loaded();
        let cards = vm.cards();
        let haldiram = cards.iter().find(|c| c.name == "Haldiram's").unwrap();
        let pizza = cards.iter().find(|c| c.name == "Pizza Hut").unwrap();

        assert_eq!(haldiram.label.as_deref(), Some(VEG_LABEL));
        assert_eq!(pizza.label, None);
    }

    #[test]
    fn cards_show_current_user() {
        let (vm, _) = loaded();
        vm.ctx.session.set_user_name("Likan");
        assert!(vm.cards().iter().all(|c| c.user_name.as_deref() == Some("Likan")));
    }

    #[test]
    fn offline_message_follows_monitor() {
        let (vm, platform) = loaded();
        vm.ctx.network.activate();
        assert_eq!(vm.offline_message(), None);

        platform.emit(false);
        assert_eq!(vm.offline_message(), Some(OFFLINE_MESSAGE));
    }

    #[test]
    fn failed_load_stays_loading() {
        let (ctx, _) = test_context();
        let vm = RestaurantListViewModel::new(ctx);
        let source = MockCatalogSource::new().with_list(Err(ApiError::Parse("eof".to_string())));

        assert!(block_on(vm.activate(&source)));
        assert!(vm.is_loading());
        assert!(vm.cards().is_empty());
        assert_eq!(vm.fallback_message(), None);
    }

    #[test]
    fn teardown_during_fetch_discards_result() {
        struct TearingSource {
            vm: RefCell<Option<RestaurantListViewModel>>,
        }
        impl CatalogSource for TearingSource {
            async fn fetch_restaurant_list(&self) -> Result<Value, ApiError> {
                if let Some(vm) = self.vm.borrow().as_ref() {
                    vm.teardown();
                }
                Ok(restaurant_list_fixture())
            }
            async fn fetch_menu(&self, _id: &str) -> Result<Value, ApiError> {
                Ok(Value::Null)
            }
        }

        let (ctx, _) = test_context();
        let vm = RestaurantListViewModel::new(ctx);
        let source = TearingSource {
            vm: RefCell::new(Some(vm.clone())),
        };

        assert!(!block_on(vm.activate(&source)));
        assert!(vm.cards().is_empty());
    }
}
