// ============================================================================
// APP - Raíz de la aplicación: contexto compartido + rutas + página activa
// ============================================================================
// La página activa se desmonta al navegar (teardown de sus requests).
// Navegar de un menú a otro reutiliza la misma instancia y solo cambia
// el id; qué pasa con el menú cargado lo decide la RefetchPolicy.
// ============================================================================

use crate::config::CONFIG;
use crate::error::RouteError;
use crate::services::CatalogSource;
use crate::state::{AppContext, IdentityProvider, InitOutcome};
use crate::viewmodels::{
    CartViewModel, HeaderViewModel, RefetchPolicy, RestaurantListViewModel,
    RestaurantMenuViewModel,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Body,
    About,
    Grocery,
    Cart,
    Restaurant(String),
}

impl Route {
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Ok(Route::Body),
            "/about" => Ok(Route::About),
            "/grocery" => Ok(Route::Grocery),
            "/cart" => Ok(Route::Cart),
            _ => match trimmed.strip_prefix("/restaurants/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Ok(Route::Restaurant(id.to_string()))
                }
                _ => Err(RouteError::not_found()),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Body => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Grocery => "/grocery".to_string(),
            Route::Cart => "/cart".to_string(),
            Route::Restaurant(id) => format!("/restaurants/{}", id),
        }
    }
}

/// Página montada bajo el header
#[derive(Clone)]
pub enum Page {
    Body(RestaurantListViewModel),
    About,
    Grocery,
    Cart(CartViewModel),
    Menu(RestaurantMenuViewModel),
}

impl Page {
    /// Dispara la carga de la página (si la necesita)
    pub async fn activate<S: CatalogSource>(&self, source: &S) -> bool {
        match self {
            Page::Body(vm) => vm.activate(source).await,
            Page::Menu(vm) => vm.load(source).await,
            Page::About | Page::Grocery | Page::Cart(_) => false,
        }
    }

    fn teardown(&self) {
        match self {
            Page::Body(vm) => vm.teardown(),
            Page::Menu(vm) => vm.teardown(),
            Page::About | Page::Grocery | Page::Cart(_) => {}
        }
    }
}

pub struct App {
    ctx: AppContext,
    header: HeaderViewModel,
    policy: RefetchPolicy,
    route: Option<Route>,
    page: Option<Page>,
    error: Option<RouteError>,
}

impl App {
    pub fn new(ctx: AppContext) -> Self {
        Self::with_policy(ctx, RefetchPolicy::default())
    }

    pub fn with_policy(ctx: AppContext, policy: RefetchPolicy) -> Self {
        Self {
            header: HeaderViewModel::new(ctx.clone()),
            ctx,
            policy,
            route: None,
            page: None,
            error: None,
        }
    }

    /// Primera activación: empieza a escuchar la conectividad
    pub fn mount(&self) {
        log::info!("🚀 [APP] Montando aplicación");
        self.ctx.network.activate();
    }

    pub fn unmount(&mut self) {
        if let Some(page) = self.page.take() {
            page.teardown();
        }
        self.ctx.network.teardown();
        log::info!("👋 [APP] Aplicación desmontada");
    }

    /// Resuelve el nombre de usuario una sola vez
    pub async fn initialize_session<P: IdentityProvider>(&self, provider: &P) -> InitOutcome {
        self.ctx
            .session
            .initialize(provider, CONFIG.retry_attempts)
            .await
    }

    pub fn navigate(&mut self, path: &str) -> Result<Route, RouteError> {
        let route = match Route::parse(path) {
            Ok(route) => route,
            Err(e) => {
                log::warn!("⚠️ [ROUTER] Ruta desconocida: {}", path);
                if let Some(page) = self.page.take() {
                    page.teardown();
                }
                self.route = None;
                self.error = Some(e.clone());
                return Err(e);
            }
        };

        log::info!("🧭 [ROUTER] Navegando a {}", route.path());
        self.error = None;

        let reused = match (&self.page, &route) {
            (Some(Page::Menu(vm)), Route::Restaurant(id)) => {
                vm.set_restaurant_id(id);
                true
            }
            _ => false,
        };

        if !reused {
            if let Some(page) = self.page.take() {
                page.teardown();
            }
            self.page = Some(self.build_page(&route));
        }

        self.route = Some(route.clone());
        Ok(route)
    }

    fn build_page(&self, route: &Route) -> Page {
        match route {
            Route::Body => Page::Body(RestaurantListViewModel::new(self.ctx.clone())),
            Route::About => Page::About,
            Route::Grocery => Page::Grocery,
            Route::Cart => Page::Cart(CartViewModel::new(self.ctx.clone())),
            Route::Restaurant(id) => Page::Menu(RestaurantMenuViewModel::with_policy(
                self.ctx.clone(),
                id,
                self.policy,
            )),
        }
    }

    pub async fn activate<S: CatalogSource>(&self, source: &S) -> bool {
        match self.page.clone() {
            Some(page) => page.activate(source).await,
            None => false,
        }
    }

    /// Texto del error boundary, si la última navegación falló
    pub fn render_error(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    pub fn header(&self) -> &HeaderViewModel {
        &self.header
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StaticIdentity;
    use crate::test_support::{menu_fixture, restaurant_list_fixture, test_context, MockCatalogSource};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn app() -> App {
        let (ctx, _) = test_context();
        App::new(ctx)
    }

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::parse("/"), Ok(Route::Body));
        assert_eq!(Route::parse(""), Ok(Route::Body));
        assert_eq!(Route::parse("/about"), Ok(Route::About));
        assert_eq!(Route::parse("/grocery/"), Ok(Route::Grocery));
        assert_eq!(Route::parse("/cart"), Ok(Route::Cart));
        assert_eq!(Route::parse("/restaurants/500"), Ok(Route::Restaurant("500".to_string())));
        assert_eq!(Route::Restaurant("500".to_string()).path(), "/restaurants/500");
    }

    #[test]
    fn unknown_routes_are_not_found() {
        assert_eq!(Route::parse("/nope"), Err(RouteError::not_found()));
        assert_eq!(Route::parse("/restaurants/"), Err(RouteError::not_found()));
        assert_eq!(Route::parse("/restaurants/1/2"), Err(RouteError::not_found()));
    }

    #[test]
    fn error_boundary_renders_status() {
        let mut app = app();
        assert!(app.navigate("/missing").is_err());
        assert_eq!(app.render_error().as_deref(), Some("404:Not Found"));
        assert!(app.page().is_none());

        app.navigate("/").unwrap();
        assert_eq!(app.render_error(), None);
    }

    #[test]
    fn leaving_the_list_tears_it_down() {
        let mut app = app();
        app.navigate("/").unwrap();
        let list = match app.page() {
            Some(Page::Body(vm)) => vm.clone(),
            _ => panic!("expected list page"),
        };

        app.navigate("/cart").unwrap();
        let source = MockCatalogSource::new().with_list(Ok(restaurant_list_fixture()));
        assert!(!block_on(list.activate(&source)));
        assert_eq!(source.list_calls(), 0);
    }

    #[test]
    fn menu_to_menu_reuses_page_and_refetches() {
        let mut app = app();
        let source = MockCatalogSource::new()
            .with_menu("500", Ok(menu_fixture()))
            .with_menu("600", Ok(json!({})));

        app.navigate("/restaurants/500").unwrap();
        assert!(block_on(app.activate(&source)));
        app.navigate("/restaurants/600").unwrap();
        assert!(block_on(app.activate(&source)));

        assert_eq!(source.menu_calls(), vec!["500", "600"]);
        match app.page() {
            Some(Page::Menu(vm)) => assert_eq!(vm.restaurant_id(), "600"),
            _ => panic!("expected menu page"),
        }
    }

    #[test]
    fn cart_survives_navigation() {
        let mut app = app();
        let source = MockCatalogSource::new().with_menu("500", Ok(menu_fixture()));
        app.navigate("/restaurants/500").unwrap();
        block_on(app.activate(&source));
        if let Some(Page::Menu(vm)) = app.page() {
            vm.add_item(0, 0);
        }

        app.navigate("/cart").unwrap();
        assert_eq!(app.header().cart_label(), "Cart - (1 items)");
        match app.page() {
            Some(Page::Cart(vm)) => assert_eq!(vm.items().len(), 1),
            _ => panic!("expected cart page"),
        }
    }

    #[test]
    fn session_initializes_once() {
        let app = app();
        let provider = StaticIdentity::new("Likan");
        assert_eq!(block_on(app.initialize_session(&provider)), InitOutcome::Applied);
        assert_eq!(block_on(app.initialize_session(&provider)), InitOutcome::AlreadyStarted);
        assert_eq!(app.header().user_name().as_deref(), Some("Likan"));
    }

    #[test]
    fn unmount_stops_connectivity_listener() {
        let (ctx, platform) = test_context();
        let mut app = App::new(ctx);
        app.mount();
        assert_eq!(platform.listener_count(), 1);

        app.unmount();
        assert_eq!(platform.listener_count(), 0);
    }
}
